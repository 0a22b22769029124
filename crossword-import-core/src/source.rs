//! Typed view of the daily puzzle API response.
//!
//! Only the fields the conversion reads are modelled; everything else in the
//! payload is ignored during deserialization.

use serde::{Deserialize, Serialize};

use crate::error::ImportError;

/// Cell `type` values understood by the converter.
pub struct CellType;

impl CellType {
    pub const NORMAL: i64 = 1;
    pub const CIRCLE: i64 = 2;
    pub const HIGHLIGHT: i64 = 3;

    pub const SUPPORTED: [i64; 3] = [Self::NORMAL, Self::CIRCLE, Self::HIGHLIGHT];
}

/// Top-level response of the puzzle endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PuzzleResponse {
    pub body: Vec<PuzzleBody>,
    #[serde(default)]
    pub copyright: Option<String>,
    #[serde(default)]
    pub related_content: Option<RelatedContent>,
    #[serde(default)]
    pub editor: Option<String>,
    #[serde(default)]
    pub constructors: Vec<String>,
    #[serde(default)]
    pub publication_date: Option<String>,
}

impl PuzzleResponse {
    /// The one and only puzzle body. Any other count means the upstream
    /// schema changed.
    pub fn single_body(&self) -> Result<&PuzzleBody, ImportError> {
        match self.body.as_slice() {
            [body] => Ok(body),
            other => Err(ImportError::BodyCount(other.len())),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RelatedContent {
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PuzzleBody {
    pub dimensions: Dimensions,
    pub cells: Vec<Cell>,
    #[serde(default)]
    pub clues: Vec<Clue>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: usize,
    pub height: usize,
}

/// One grid cell. Block cells come through as `{}`.
///
/// Fields the converter does not read are kept in `extra` so an offending
/// cell can be reported exactly as it arrived.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<i64>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Cell {
    pub fn is_block(&self) -> bool {
        self.answer.as_deref().map_or(true, str::is_empty)
    }

    /// The label, when this cell starts an answer.
    pub fn start_label(&self) -> Option<&str> {
        self.label.as_deref().filter(|l| !l.is_empty())
    }

    pub fn is_circled(&self) -> bool {
        self.kind == Some(CellType::CIRCLE)
    }

    pub fn is_highlighted(&self) -> bool {
        self.kind == Some(CellType::HIGHLIGHT)
    }

    pub fn has_supported_type(&self) -> bool {
        self.kind.is_some_and(|k| CellType::SUPPORTED.contains(&k))
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Clue {
    /// Empty when upstream omits it; the clue transform rejects that.
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub direction: String,
    #[serde(default)]
    pub text: Vec<ClueText>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ClueText {
    #[serde(default)]
    pub plain: Option<String>,
}
