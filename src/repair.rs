use anyhow::Context;
use log::debug;
use regex::{NoExpand, Regex};
use std::path::Path;

use crate::{config::Config, discovery};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Outcome {
    Repaired,
    Unaffected,
}

#[derive(Debug, Default)]
pub(crate) struct RunReport {
    pub found: usize,
    pub repaired: usize,
    pub failed: usize,
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Turns a slug-style file name into a readable title.
pub(crate) fn derive_title(file_name: &str, date_prefix: &str) -> String {
    let name = file_name.strip_prefix(date_prefix).unwrap_or(file_name);
    let name = name.strip_suffix(".md").unwrap_or(name);
    name.split('-')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

pub(crate) fn repair_file(path: &Path, config: &Config) -> anyhow::Result<Outcome> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("while reading {path:?}"))?;

    if !config
        .corruption_signatures()
        .iter()
        .any(|sig| content.contains(sig.as_str()))
    {
        return Ok(Outcome::Unaffected);
    }

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let title = derive_title(&file_name, &config.file_prefix());
    debug!("derived title for {path:?}: {title}");

    // each field is rewritten at its first occurrence only
    let title_line = Regex::new(r"(?m)^title: .*$").unwrap();
    let description_line = Regex::new(r"(?m)^description: .*$").unwrap();
    let date_line =
        Regex::new(&format!("(?m)^date: {}$", regex::escape(&config.date_slug()))).unwrap();

    let content = title_line
        .replace(&content, NoExpand(&format!("title: {title}")))
        .into_owned();
    let content = description_line
        .replace(
            &content,
            NoExpand(&format!("description: 深度分析 {title} 的最新發展與影響。")),
        )
        .into_owned();
    let corrected = config.corrected_date.format("%Y-%m-%d");
    let content = date_line
        .replace(&content, NoExpand(&format!("date: {corrected}")))
        .into_owned();

    std::fs::write(path, &content).with_context(|| format!("while writing {path:?}"))?;

    Ok(Outcome::Repaired)
}

pub(crate) fn run(config: &Config) -> anyhow::Result<RunReport> {
    let candidates = discovery::find_candidates(config)?;

    let mut report = RunReport {
        found: candidates.len(),
        ..Default::default()
    };
    println!(
        "found {} candidate {} articles to check",
        report.found,
        config.date_slug()
    );

    for path in &candidates {
        match repair_file(path, config) {
            Ok(Outcome::Repaired) => {
                report.repaired += 1;
                println!("repaired: {}", path.display());
            }
            Ok(Outcome::Unaffected) => {
                println!("ok: {}", path.display());
            }
            Err(e) => {
                report.failed += 1;
                println!("failed: {}: {e:#}", path.display());
            }
        }
    }

    println!("done: {} of {} files repaired", report.repaired, report.found);
    Ok(report)
}
