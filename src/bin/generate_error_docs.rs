//! Generate error code documentation from the source of truth (error enums).
//!
//! This binary reads the error codes, descriptions, details, and help text
//! directly from the `ParseError` and `SolverError` implementations via their
//! `code()`, `description()`, `details()`, and `help()` methods.
//!
//! Run with:
//! ```bash
//! cargo run --bin generate_error_docs > docs/ERROR_CODES.md
//! ```

use std::fmt::Write;

use slotfill::errors::ParseError;
use slotfill::solver::SolverError;

/// Macro to generate error documentation for any error type
/// with `code()`, `description()`, `details()`, `help()`, and `display_detailed()` methods
macro_rules! generate_error_docs {
    ($out:expr, $errors:expr) => {
        for error in $errors {
            let _ = writeln!($out, "### {}: {}\n", error.code(), error.description());
            let _ = writeln!($out, "**Details:** {}\n", error.details());

            if let Some(help_text) = error.help() {
                let _ = writeln!($out, "**How to fix:**\n```\n{help_text}\n```\n");
            }

            let _ = writeln!($out, "**Example error message:**\n```\n{error}\n```\n");
            let _ = writeln!($out, "**Detailed format:**\n```\n{}\n```\n", error.display_detailed());
            let _ = writeln!($out, "---\n");
        }
    };
}

/// Helper to create all `ParseError` variants for documentation
fn all_parse_error_variants() -> Vec<ParseError> {
    vec![
        ParseError::MissingWordLine,
        ParseError::InvalidLetter { invalid_char: 'W' },
        ParseError::InvalidPatternChar { invalid_char: 'Q' },
        ParseError::InvalidDirection { token: "rtl".to_string() },
        // ParseIntError--create by parsing a non-integer coordinate
        ParseError::InvalidCoordinate {
            token: "3.5".to_string(),
            source: "3.5".parse::<i64>().unwrap_err(),
        },
        ParseError::WrongFieldCount { expected: 4, found: 3 },
        ParseError::LineParseError {
            line_number: 4,
            line: "ltr 0 0 OQ".to_string(),
            source: Box::new(ParseError::InvalidPatternChar { invalid_char: 'Q' }),
        },
        ParseError::InvalidAlphabet { reason: "'Y' in both vowels and consonants".to_string() },
        ParseError::SlotOutOfRange { anchor: "(9223372036854775807,0)".to_string(), len: 5 },
    ]
}

/// Helper to create all `SolverError` variants for documentation
fn all_solver_error_variants() -> Vec<SolverError> {
    vec![
        SolverError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "failed to read puzzle from 'Input3.txt': No such file or directory (os error 2)",
        )),
        SolverError::ParseFailure(Box::new(ParseError::MissingWordLine)),
        SolverError::NoSolutions,
    ]
}

fn render_docs() -> String {
    let mut out = String::new();

    let _ = writeln!(out, "# Error Code Reference\n");
    let _ = writeln!(out, "**⚠️ This document is auto-generated from the source code. Do not edit manually.**\n");

    let _ = writeln!(out, "## Table of Contents\n");
    let _ = writeln!(out, "- [Solver Errors (S001–S003)](#solver-errors)");
    let _ = writeln!(out, "- [Parse Errors (E001–E009)](#parse-errors)");
    let _ = writeln!(out, "- [How to Use Error Codes](#how-to-use-error-codes)\n");

    let _ = writeln!(out, "## Solver Errors\n");
    let _ = writeln!(out, "Top-level errors from reading, parsing and solving one puzzle.\n");
    generate_error_docs!(out, all_solver_error_variants());

    let _ = writeln!(out, "## Parse Errors\n");
    let _ = writeln!(out, "Errors that occur when parsing a puzzle file or an alphabet.\n");
    generate_error_docs!(out, all_parse_error_variants());

    let _ = writeln!(out, "\n## How to Use Error Codes\n");
    let _ = writeln!(out, "When you see an error like:\n");
    let _ = writeln!(out, "```\nError: Invalid direction: \"rtl\" (E004)\nUse 'ttb' for a downward slot or 'ltr' for a rightward slot\n```\n");
    let _ = writeln!(out, "1. Note the error code (e.g., `E004`)");
    let _ = writeln!(out, "2. Look it up in this document for detailed explanation");
    let _ = writeln!(out, "3. Follow the suggested resolution steps");

    out
}

fn main() {
    print!("{}", render_docs());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_docs_cover_every_code() {
        let docs = render_docs();
        let codes = (1..=3).map(|n| format!("S{n:03}")).chain((1..=9).map(|n| format!("E{n:03}")));
        for code in codes {
            assert!(docs.contains(&format!("### {code}:")), "missing section for {code}");
        }
    }

    #[test]
    fn test_variant_lists_have_unique_codes() {
        let parse_codes: std::collections::HashSet<_> =
            all_parse_error_variants().iter().map(ParseError::code).collect();
        assert_eq!(parse_codes.len(), all_parse_error_variants().len());

        let solver_codes: std::collections::HashSet<_> =
            all_solver_error_variants().iter().map(SolverError::code).collect();
        assert_eq!(solver_codes.len(), all_solver_error_variants().len());
    }
}
