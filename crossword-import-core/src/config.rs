use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, info};

use crate::date::PuzzleDate;

pub const DEFAULT_PUZZLE_URL_TEMPLATE: &str =
    "https://www.nytimes.com/svc/crosswords/v6/puzzle/daily/{date}.json";
pub const DEFAULT_UPLOAD_URL: &str = "https://squares.io/api/1/puzzle";
pub const DEFAULT_VIEW_URL_BASE: &str = "https://squares.io/solve/";
pub const DEFAULT_OUTPUT_DIR: &str = "puzzles";
pub const DEFAULT_TITLE: &str = "NYT Crossword";

/// Placeholder replaced by the puzzle date in [`ImportConfig::puzzle_url_template`].
pub const DATE_PLACEHOLDER: &str = "{date}";

/// Everything an import run needs to know besides the date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportConfig {
    pub output_dir: PathBuf,
    pub title: String,
    pub puzzle_url_template: String,
    pub upload_url: String,
    pub view_url_base: String,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            title: DEFAULT_TITLE.to_string(),
            puzzle_url_template: DEFAULT_PUZZLE_URL_TEMPLATE.to_string(),
            upload_url: DEFAULT_UPLOAD_URL.to_string(),
            view_url_base: DEFAULT_VIEW_URL_BASE.to_string(),
        }
    }
}

impl ImportConfig {
    pub fn puzzle_url(&self, date: &PuzzleDate) -> String {
        self.puzzle_url_template
            .replace(DATE_PLACEHOLDER, date.as_str())
    }

    pub fn view_url(&self, pid: &str) -> String {
        format!("{}{}", self.view_url_base, pid)
    }

    pub fn trace_loaded(&self) {
        info!(
            output_dir = %self.output_dir.display(),
            upload_url = %self.upload_url,
            "Loaded ImportConfig"
        );
        debug!(?self, "ImportConfig loaded (full debug)");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_urls() {
        let config = ImportConfig::default();
        let date = PuzzleDate::parse("2024-02-29").unwrap();
        assert_eq!(
            config.puzzle_url(&date),
            "https://www.nytimes.com/svc/crosswords/v6/puzzle/daily/2024-02-29.json"
        );
        assert_eq!(config.view_url("abc123"), "https://squares.io/solve/abc123");
        assert_eq!(config.output_dir, PathBuf::from("puzzles"));
    }
}
