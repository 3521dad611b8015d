use chrono::NaiveDate;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub(crate) struct Config {
    pub search_roots: Vec<PathBuf>,
    pub batch_date: NaiveDate,
    pub corrected_date: NaiveDate,
}

impl Config {
    pub fn date_slug(&self) -> String {
        self.batch_date.format("%Y-%m-%d").to_string()
    }

    /// Filename prefix shared by every article of the batch.
    pub fn file_prefix(&self) -> String {
        format!("{}-", self.date_slug())
    }

    // broken headers carry the date either hyphenated or space-separated
    pub fn corruption_signatures(&self) -> [String; 2] {
        let slug = self.date_slug();
        [
            format!("title: {}", slug.replace('-', " ")),
            format!("title: {slug}"),
        ]
    }
}
