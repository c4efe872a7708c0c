//! `puzzle_file` — load and parse a slot-fill puzzle.
//!
//! The format is line-oriented UTF-8:
//! - line 1: the candidate words, separated by whitespace
//! - line 2: ignored (a separator)
//! - every further line: one slot, `direction x y pattern` (e.g. `ltr 0 2 XOXOX`)
//!
//! Any malformed slot line, including a blank one, fails the whole parse; there
//! is no partial result. The final newline of a file does not start a new line.
//!
//! The public API provides:
//! - `parse_from_str(...)` — works everywhere, including WASM.
//! - `read_from_path(...)` — **native-only** convenience method to read a puzzle file.

use log::debug;

use crate::alphabet::Alphabet;
use crate::errors::ParseError;
use crate::letter::Word;
use crate::parser::slot_line::parse_slot_line;
use crate::slot::Slot;
use crate::state::PuzzleState;

/// Lines before the first slot line (the word line and the separator).
const HEADER_LINES: usize = 2;

/// A parsed puzzle: the word pool and the slots, both in file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    pub words: Vec<Word>,
    pub slots: Vec<Slot>,
}

impl Puzzle {
    /// Parse a puzzle from an in-memory string.
    ///
    /// # Errors
    ///
    /// - [`ParseError::MissingWordLine`] if `contents` has no lines at all.
    /// - [`ParseError::InvalidLetter`] for a word character outside `alphabet`.
    /// - [`ParseError::LineParseError`] wrapping the first bad slot line's error.
    pub fn parse_from_str(contents: &str, alphabet: &Alphabet) -> Result<Puzzle, Box<ParseError>> {
        let mut lines = contents.lines();

        let word_line = lines.next().ok_or_else(|| Box::new(ParseError::MissingWordLine))?;
        let words = word_line
            .split_whitespace()
            .map(|token| Word::parse_concrete(token, alphabet))
            .collect::<Result<Vec<_>, _>>()?;

        let slots = lines
            .enumerate()
            // the separator line is ignored, whatever it holds
            .skip(1)
            .map(|(i, line)| {
                // `i` counts from the separator line, which is line 2
                parse_slot_line(line).map_err(|e| e.on_line(i + HEADER_LINES, line))
            })
            .collect::<Result<Vec<_>, _>>()?;

        debug!("parsed puzzle: {} words, {} slots", words.len(), slots.len());
        Ok(Puzzle { words, slots })
    }

    /// Native-only convenience method: read a puzzle file into a string.
    ///
    /// # Errors
    ///
    /// Returns an `io::Error` naming `path` if the file cannot be read. Parse
    /// errors are left to the caller via [`Puzzle::parse_from_str`].
    #[cfg(not(target_arch = "wasm32"))]
    pub fn read_from_path<P: AsRef<std::path::Path>>(path: P) -> std::io::Result<String> {
        let path_ref = path.as_ref();

        // `read_to_string` ensures UTF-8 decoding
        std::fs::read_to_string(path_ref).map_err(|e| {
            std::io::Error::new(
                e.kind(),
                format!("failed to read puzzle from '{}': {}", path_ref.display(), e),
            )
        })
    }

    /// The search's root state.
    pub fn into_initial_state(self) -> PuzzleState {
        PuzzleState::new(self.words, self.slots)
    }
}
