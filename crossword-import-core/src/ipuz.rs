//! The ipuz crossword document emitted by the converter.
//!
//! Absent optional values are `None` and are skipped during serialization, so
//! a key only appears in the output when it carries a value.

use serde::{Deserialize, Serialize};

pub use crate::source::Dimensions;

pub const IPUZ_VERSION: &str = "http://ipuz.org/v2";
pub const IPUZ_KIND_CROSSWORD: &str = "http://ipuz.org/crossword#1";

pub const BLOCK: &str = "#";
pub const EMPTY: &str = "0";
pub const SHAPE_CIRCLE: &str = "circle";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IpuzDocument {
    pub version: String,
    pub kind: Vec<String>,
    pub dimensions: Dimensions,
    pub clues: Clues,
    pub puzzle: Vec<Vec<PuzzleCell>>,
    pub solution: Vec<Vec<String>>,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub copyright: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub editor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Clues {
    #[serde(rename = "Across")]
    pub across: Vec<Clue>,
    #[serde(rename = "Down")]
    pub down: Vec<Clue>,
}

impl Clues {
    pub fn len(&self) -> usize {
        self.across.len() + self.down.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Clue {
    pub number: String,
    pub clue: String,
}

/// A puzzle grid entry: a bare symbol, or a symbol with a style.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PuzzleCell {
    Bare(String),
    Styled { cell: String, style: CellStyle },
}

impl PuzzleCell {
    pub fn symbol(&self) -> &str {
        match self {
            PuzzleCell::Bare(symbol) => symbol,
            PuzzleCell::Styled { cell, .. } => cell,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CellStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shapebg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlight: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn styled_cell_only_serializes_present_keys() {
        let circled = PuzzleCell::Styled {
            cell: "3".into(),
            style: CellStyle {
                shapebg: Some(SHAPE_CIRCLE.into()),
                highlight: None,
            },
        };
        assert_eq!(
            serde_json::to_value(&circled).unwrap(),
            json!({"cell": "3", "style": {"shapebg": "circle"}})
        );

        let highlighted = PuzzleCell::Styled {
            cell: "0".into(),
            style: CellStyle {
                shapebg: None,
                highlight: Some(true),
            },
        };
        assert_eq!(
            serde_json::to_value(&highlighted).unwrap(),
            json!({"cell": "0", "style": {"highlight": true}})
        );
    }

    #[test]
    fn bare_cell_serializes_as_string() {
        assert_eq!(
            serde_json::to_value(PuzzleCell::Bare(BLOCK.into())).unwrap(),
            json!("#")
        );
    }

    #[test]
    fn clues_use_direction_keys() {
        let clues = Clues {
            across: vec![Clue { number: "1".into(), clue: "Up".into() }],
            down: vec![],
        };
        assert_eq!(
            serde_json::to_value(&clues).unwrap(),
            json!({"Across": [{"number": "1", "clue": "Up"}], "Down": []})
        );
        assert_eq!(clues.len(), 1);
    }
}
