use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, error, info};

use crate::date::PuzzleDate;
use crate::error::ImportError;
use crate::ipuz::IpuzDocument;

pub const IPUZ_EXTENSION: &str = "ipuz";

/// A document as written to disk. `contents` is exactly the file text.
#[derive(Debug, Clone)]
pub struct PersistedDocument {
    pub path: PathBuf,
    pub contents: String,
}

pub fn document_path(output_dir: &Path, date: &PuzzleDate) -> PathBuf {
    output_dir.join(format!("{}.{}", date, IPUZ_EXTENSION))
}

/// Writes `<output_dir>/<date>.ipuz`, creating the directory when missing.
/// An existing file is overwritten.
pub fn write_document(
    output_dir: &Path,
    date: &PuzzleDate,
    document: &IpuzDocument,
) -> Result<PersistedDocument, ImportError> {
    if !output_dir.exists() {
        fs::create_dir_all(output_dir).map_err(|e| {
            error!(error = ?e, path = %output_dir.display(), "Failed to create output directory");
            e
        })?;
        debug!(path = %output_dir.display(), "Created output directory");
    }

    let contents = serde_json::to_string_pretty(document)?;
    let path = document_path(output_dir, date);
    fs::write(&path, &contents).map_err(|e| {
        error!(error = ?e, path = %path.display(), "Failed to write ipuz file");
        e
    })?;

    info!(path = %path.display(), size = contents.len(), "Wrote ipuz file");
    Ok(PersistedDocument { path, contents })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ipuz::{Clues, Dimensions, PuzzleCell};
    use tempfile::tempdir;

    fn tiny_document() -> IpuzDocument {
        IpuzDocument {
            version: "http://ipuz.org/v2".into(),
            kind: vec!["http://ipuz.org/crossword#1".into()],
            dimensions: Dimensions { width: 1, height: 1 },
            clues: Clues::default(),
            puzzle: vec![vec![PuzzleCell::Bare("#".into())]],
            solution: vec![vec!["#".into()]],
            title: "Tiny".into(),
            copyright: None,
            url: None,
            editor: None,
            author: None,
            date: None,
        }
    }

    #[test]
    fn creates_nested_directory_and_writes_pretty_json() {
        let tmp = tempdir().unwrap();
        let out = tmp.path().join("a").join("puzzles");
        let date = PuzzleDate::parse("2024-03-01").unwrap();

        let persisted = write_document(&out, &date, &tiny_document()).unwrap();

        assert_eq!(persisted.path, out.join("2024-03-01.ipuz"));
        let on_disk = fs::read_to_string(&persisted.path).unwrap();
        assert_eq!(on_disk, persisted.contents);
        assert!(on_disk.contains("\n  \"version\": \"http://ipuz.org/v2\""));
        assert!(!on_disk.contains("null"), "absent metadata must be omitted");
    }

    #[test]
    fn overwrites_existing_file() {
        let tmp = tempdir().unwrap();
        let date = PuzzleDate::parse("2024-03-02").unwrap();
        fs::write(document_path(tmp.path(), &date), "stale").unwrap();

        write_document(tmp.path(), &date, &tiny_document()).unwrap();

        let on_disk = fs::read_to_string(document_path(tmp.path(), &date)).unwrap();
        assert!(on_disk.starts_with('{'));
    }
}
