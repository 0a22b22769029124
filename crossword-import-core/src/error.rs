use thiserror::Error;

/// Every way a single import run can fail. All of them are terminal.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("Puzzle date must have format \"YYYY-MM-DD\", got {0:?}")]
    InvalidDate(String),

    #[error("puzzle request failed with status {status}: {reason}")]
    PuzzleRequest { status: u16, reason: String },

    #[error("expected exactly one body element, got {0}")]
    BodyCount(usize),

    #[error("grid has no cell at index {index}")]
    MissingCell { index: usize },

    #[error("unsupported cell type at row {row}, column {column}: {cell}")]
    UnsupportedCellType {
        row: usize,
        column: usize,
        cell: String,
    },

    #[error("unknown clue text format for clue {label}: {detail}")]
    ClueFormat { label: String, detail: String },

    #[error("upload failed with status {status}: {reason}")]
    UploadRequest { status: u16, reason: String },

    #[error("upload response contained no puzzle id")]
    MissingPuzzleId,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ImportError>;
