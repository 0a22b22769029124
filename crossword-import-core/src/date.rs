//! Validation of the single `YYYY-MM-DD` argument a run is keyed on.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::ImportError;

// ASCII digits only; `\d` in `regex` would also accept other Unicode digits.
static DATE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("date pattern compiles"));

/// A puzzle date in `YYYY-MM-DD` form.
///
/// Only the shape is checked, not the calendar: the remote API is the
/// authority on which dates exist, and it answers unknown ones with a
/// non-200 status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleDate(String);

impl PuzzleDate {
    pub fn parse(raw: &str) -> Result<Self, ImportError> {
        if DATE_PATTERN.is_match(raw) {
            Ok(Self(raw.to_string()))
        } else {
            tracing::debug!(raw, "Rejected puzzle date");
            Err(ImportError::InvalidDate(raw.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for PuzzleDate {
    type Err = ImportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for PuzzleDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_well_formed_dates() {
        for raw in ["2024-01-31", "1999-12-01", "0000-00-00"] {
            let date = PuzzleDate::parse(raw).expect("should accept");
            assert_eq!(date.as_str(), raw);
            assert_eq!(date.to_string(), raw);
        }
    }

    #[test]
    fn rejects_everything_else() {
        for raw in [
            "",
            "2024-1-31",
            "24-01-31",
            "2024/01/31",
            "2024-01-31 ",
            " 2024-01-31",
            "2024-01-31\n",
            "2024-01-311",
            "abcd-ef-gh",
            "２０２４-01-31",
        ] {
            assert!(
                matches!(PuzzleDate::parse(raw), Err(ImportError::InvalidDate(_))),
                "expected {raw:?} to be rejected"
            );
        }
    }

    #[test]
    fn from_str_matches_parse() {
        let date: PuzzleDate = "2023-07-04".parse().unwrap();
        assert_eq!(date, PuzzleDate::parse("2023-07-04").unwrap());
        assert!("July 4th".parse::<PuzzleDate>().is_err());
    }

    #[test]
    fn error_message_names_expected_format() {
        let err = PuzzleDate::parse("tomorrow").unwrap_err();
        assert!(err.to_string().contains("YYYY-MM-DD"));
    }
}
