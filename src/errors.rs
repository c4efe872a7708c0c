//! Error types for puzzle parsing, with error codes and helpful messages.
//!
//! # Error Codes
//!
//! Each error variant has a unique code (E001-E009) for documentation lookup:
//!
//! - E001: `MissingWordLine` (Input has no candidate-word line)
//! - E002: `InvalidLetter` (Character outside both alphabets)
//! - E003: `InvalidPatternChar` (Pattern character other than `O`/`X`)
//! - E004: `InvalidDirection` (Direction token other than `ttb`/`ltr`)
//! - E005: `InvalidCoordinate` (Coordinate is not an integer)
//! - E006: `WrongFieldCount` (Slot line without exactly four fields)
//! - E007: `LineParseError` (Parse error on a slot line (wraps another error))
//! - E008: `InvalidAlphabet` (Unusable alphabet configuration)
//! - E009: `SlotOutOfRange` (Slot runs past the coordinate range)
//!
//! # Examples
//!
//! ```
//! use slotfill::alphabet::Alphabet;
//!
//! let alphabet = Alphabet::default();
//! match alphabet.letter('q') {
//!     Err(e) => {
//!         println!("Error: {}", e);
//!         println!("Code: {}", e.code());
//!         if let Some(help) = e.help() {
//!             println!("Help: {}", help);
//!         }
//!     }
//!     Ok(letter) => println!("Parsed {letter}"),
//! }
//! ```

use std::num::ParseIntError;

/// Custom error type for parsing operations
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Input has no candidate-word line")]
    MissingWordLine,

    #[error("'{invalid_char}' is not a valid letter")]
    InvalidLetter { invalid_char: char },

    #[error("Bad input: {invalid_char} cannot be parsed as Vowel or Consonant")]
    InvalidPatternChar { invalid_char: char },

    #[error("Invalid direction: \"{token}\"")]
    InvalidDirection { token: String },

    #[error("Bad coordinate input \"{token}\": {source}")]
    InvalidCoordinate {
        token: String,
        #[source]
        source: ParseIntError,
    },

    #[error("Incorrect amount of parameters: expected {expected}, found {found}")]
    WrongFieldCount { expected: usize, found: usize },

    #[error("Parse error on line {line_number} (\"{line}\"): {source}")]
    LineParseError {
        line_number: usize,
        line: String,
        #[source]
        source: Box<ParseError>,
    },

    #[error("Invalid alphabet: {reason}")]
    InvalidAlphabet { reason: String },

    #[error("Slot at {anchor} with {len} cells runs past the coordinate range")]
    SlotOutOfRange { anchor: String, len: usize },
}

impl ParseError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            ParseError::MissingWordLine => "E001",
            ParseError::InvalidLetter { .. } => "E002",
            ParseError::InvalidPatternChar { .. } => "E003",
            ParseError::InvalidDirection { .. } => "E004",
            ParseError::InvalidCoordinate { .. } => "E005",
            ParseError::WrongFieldCount { .. } => "E006",
            ParseError::LineParseError { .. } => "E007",
            ParseError::InvalidAlphabet { .. } => "E008",
            ParseError::SlotOutOfRange { .. } => "E009",
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            ParseError::MissingWordLine => "Input has no candidate-word line",
            ParseError::InvalidLetter { .. } => "Character outside both alphabets",
            ParseError::InvalidPatternChar { .. } => "Invalid pattern character",
            ParseError::InvalidDirection { .. } => "Invalid slot direction",
            ParseError::InvalidCoordinate { .. } => "Invalid slot coordinate",
            ParseError::WrongFieldCount { .. } => "Wrong number of fields on a slot line",
            ParseError::LineParseError { .. } => "Parse error on a slot line",
            ParseError::InvalidAlphabet { .. } => "Unusable alphabet configuration",
            ParseError::SlotOutOfRange { .. } => "Slot runs past the coordinate range",
        }
    }

    /// Returns detailed explanation of this error type (for documentation)
    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            ParseError::MissingWordLine => "The first line of a puzzle lists the candidate words. An empty input has no such line, so there is nothing to place.",
            ParseError::InvalidLetter { .. } => "Every character of a candidate word must belong to the vowel alphabet or the consonant alphabet. Lookup is case-sensitive.",
            ParseError::InvalidPatternChar { .. } => "Slot patterns describe the category of each cell: `O` for a vowel, `X` for a consonant. No other characters are accepted.",
            ParseError::InvalidDirection { .. } => "The first field of a slot line is its direction: `ttb` (top to bottom) or `ltr` (left to right).",
            ParseError::InvalidCoordinate { .. } => "The second and third fields of a slot line are the anchor's x and y coordinates, which must be integers. Negative coordinates are accepted; cells left of or above the origin are not rendered.",
            ParseError::WrongFieldCount { .. } => "A slot line has exactly four whitespace-separated fields: direction, x, y, pattern.",
            ParseError::LineParseError { .. } => "A slot line could not be parsed. The wrapped error names the offending token.",
            ParseError::InvalidAlphabet { .. } => "The vowel and consonant alphabets must both be non-empty, must not share any character, and must not contain whitespace.",
            ParseError::SlotOutOfRange { .. } => "Every cell of a slot must have a representable coordinate. An anchor so large that the slot's last cell would overflow a 64-bit integer is rejected.",
        }
    }

    /// Returns a helpful suggestion or example for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            ParseError::MissingWordLine => Some("Start the file with the candidate words, e.g. 'NAMAS NET SES'"),
            ParseError::InvalidLetter { .. } => Some("Use uppercase letters from the configured alphabets (see --vowels / --consonants)"),
            ParseError::InvalidPatternChar { .. } => Some("Example pattern: 'XOXOX' (consonant, vowel, consonant, vowel, consonant)"),
            ParseError::InvalidDirection { .. } => Some("Use 'ttb' for a downward slot or 'ltr' for a rightward slot"),
            ParseError::InvalidCoordinate { .. } => Some("Example slot line: 'ltr 0 2 XOXOX'"),
            ParseError::WrongFieldCount { .. } => Some("Expected format: <direction> <x> <y> <pattern> (e.g., 'ttb 4 0 XOX')"),
            ParseError::InvalidAlphabet { .. } => Some("Every letter must be in exactly one of the two alphabets"),
            ParseError::SlotOutOfRange { .. } => Some("Move the slot's anchor closer to the origin"),
            ParseError::LineParseError { .. } => None, // the wrapped error has its own help
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        match self {
            ParseError::LineParseError { source, .. } => {
                format!("{} ({})\n  caused by: {}", self, self.code(), source.display_detailed())
            }
            _ => format_error_with_code_and_help(&self.to_string(), self.code(), self.help()),
        }
    }

    /// Attach line context to a slot-line error.
    pub(crate) fn on_line(self: Box<Self>, line_number: usize, line: &str) -> Box<ParseError> {
        Box::new(ParseError::LineParseError {
            line_number,
            line: line.to_string(),
            source: self,
        })
    }
}

/// Helper function to format error messages with code and optional help text
pub(crate) fn format_error_with_code_and_help(base_msg: &str, code: &str, help: Option<&str>) -> String {
    if let Some(help_text) = help {
        format!("{base_msg} ({code})\n{help_text}")
    } else {
        format!("{base_msg} ({code})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_int_error() -> ParseIntError {
        "x1".parse::<i64>().unwrap_err()
    }

    fn all_variants() -> Vec<ParseError> {
        vec![
            ParseError::MissingWordLine,
            ParseError::InvalidLetter { invalid_char: 'q' },
            ParseError::InvalidPatternChar { invalid_char: 'Z' },
            ParseError::InvalidDirection { token: "up".to_string() },
            ParseError::InvalidCoordinate { token: "x1".to_string(), source: sample_int_error() },
            ParseError::WrongFieldCount { expected: 4, found: 3 },
            ParseError::LineParseError {
                line_number: 3,
                line: "up 0 0 OX".to_string(),
                source: Box::new(ParseError::InvalidDirection { token: "up".to_string() }),
            },
            ParseError::InvalidAlphabet { reason: "empty vowel alphabet".to_string() },
            ParseError::SlotOutOfRange { anchor: "(9223372036854775807,0)".to_string(), len: 2 },
        ]
    }

    #[test]
    fn test_error_codes_and_help() {
        let err = ParseError::WrongFieldCount { expected: 4, found: 2 };
        assert_eq!(err.code(), "E006");
        assert!(err.help().is_some());
        let detailed = err.display_detailed();
        assert!(detailed.contains("E006"));
        assert!(detailed.contains("expected 4, found 2"));
    }

    /// Test that all `ParseError` variants have unique error codes
    #[test]
    fn test_all_error_codes_are_unique() {
        let mut codes = std::collections::HashSet::new();
        for err in all_variants() {
            let code = err.code();
            assert!(code.starts_with("E0"), "Error code '{}' should start with 'E0'", code);
            assert_eq!(code.len(), 4, "Error code '{}' should be 4 characters (E0XX)", code);
            assert!(codes.insert(code), "Duplicate error code found: {}", code);
        }
        assert_eq!(codes.len(), 9);
    }

    #[test]
    fn test_messages_name_offending_token() {
        assert!(ParseError::InvalidLetter { invalid_char: 'q' }.to_string().contains("'q'"));
        assert!(ParseError::InvalidPatternChar { invalid_char: 'Z' }.to_string().contains('Z'));
        assert!(ParseError::InvalidDirection { token: "up".to_string() }.to_string().contains("\"up\""));
        let coord = ParseError::InvalidCoordinate { token: "x1".to_string(), source: sample_int_error() };
        assert!(coord.to_string().contains("\"x1\""));
    }

    #[test]
    fn test_line_parse_error_chain() {
        let err = Box::new(ParseError::InvalidPatternChar { invalid_char: 'Q' }).on_line(5, "ltr 0 0 OQ");
        assert_eq!(err.code(), "E007");
        let detailed = err.display_detailed();
        assert!(detailed.contains("line 5"));
        assert!(detailed.contains("ltr 0 0 OQ"));
        // inner code and help surface through the chain
        assert!(detailed.contains("E003"));
        assert!(detailed.contains("XOXOX"));
    }

    #[test]
    fn test_help_text_adds_information() {
        for err in all_variants() {
            if let Some(help_text) = err.help() {
                assert!(help_text.len() > 10, "Help text for {:?} should be substantial", err);
                assert_ne!(help_text, err.to_string());
            }
            assert!(!err.description().is_empty());
            assert!(!err.details().is_empty());
        }
    }
}
