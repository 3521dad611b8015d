use anyhow::Context;
use glob::glob;
use log::warn;
use std::path::PathBuf;

use crate::config::Config;

/// Ordered union of the per-root matches. Not de-duplicated.
pub(crate) fn find_candidates(config: &Config) -> anyhow::Result<Vec<PathBuf>> {
    let mut candidates = Vec::new();
    for root in &config.search_roots {
        let pattern = format!("{}/{}*.md", root.display(), config.file_prefix());
        let entries =
            glob(&pattern).with_context(|| format!("invalid glob pattern {pattern:?}"))?;
        for entry in entries {
            match entry {
                Ok(path) => candidates.push(path),
                Err(e) => warn!("unreadable entry under {root:?}: {e}"),
            }
        }
    }
    Ok(candidates)
}
