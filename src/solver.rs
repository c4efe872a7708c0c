//! The round-based search that enumerates every way to fill a puzzle's slots.
//!
//! # Error Handling
//!
//! The solver uses [`SolverError`] with three variants:
//!
//! - S001: `Io` (Puzzle source could not be read)
//! - S002: `ParseFailure` (Puzzle parsing failed (wraps [`ParseError`]))
//! - S003: `NoSolutions` (Every branch of the search died)
//!
//! Each error has a `code()`, optional `help()`, and `display_detailed()` method.
//!
//! # Examples
//!
//! ## Basic Usage
//!
//! ```
//! use slotfill::alphabet::Alphabet;
//! use slotfill::solver::{self, SolveOptions};
//!
//! let puzzle = "AŠ UŽ AR\n\nltr 0 0 OX\nttb 0 0 OX";
//! let result = solver::solve_puzzle_str(puzzle, &Alphabet::default(), &SolveOptions::default())?;
//!
//! assert_eq!(result.solutions.len(), 2);
//! for solution in &result.solutions {
//!     print!("{}", solution.to_visual());
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Handling Errors with Detailed Messages
//!
//! ```
//! use slotfill::alphabet::Alphabet;
//! use slotfill::solver::{self, SolveOptions, SolverError};
//!
//! match solver::solve_puzzle_str("AŠ\n\nltr 0 0 XO", &Alphabet::default(), &SolveOptions::default()) {
//!     Ok(result) => println!("Success: {} solutions", result.solutions.len()),
//!     Err(e) => {
//!         assert!(matches!(e, SolverError::NoSolutions));
//!         // Show detailed error with code and help
//!         eprintln!("{}", e.display_detailed());
//!     }
//! }
//! ```

use instant::Instant;
use log::{debug, info};
use rayon::prelude::*;
use std::time::Duration;

use crate::alphabet::Alphabet;
use crate::errors::ParseError;
use crate::parser::Puzzle;
use crate::state::PuzzleState;

/// Knobs for a search run.
#[derive(Debug, Clone, Default)]
pub struct SolveOptions {
    /// Expand the states of each round on the rayon thread pool.
    /// The solutions (and their order) are the same either way.
    pub parallel: bool,
}

/// Counters gathered over one search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Rounds in which at least one state was expanded.
    pub rounds: usize,
    /// Unsolved states handed to `expand`, over all rounds.
    pub states_expanded: usize,
    /// Expanded states that produced no children.
    pub dead_branches: usize,
    /// Largest working set seen at the start of a round.
    pub peak_frontier: usize,
    /// Wall-clock time of the search, parsing excluded.
    pub elapsed: Duration,
}

/// A successful search: every complete assignment, in discovery order.
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub solutions: Vec<PuzzleState>,
    pub stats: SearchStats,
}

impl SolveResult {
    pub fn len(&self) -> usize {
        self.solutions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.solutions.is_empty()
    }
}

impl IntoIterator for SolveResult {
    type Item = PuzzleState;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.solutions.into_iter()
    }
}

/// Unified error type for the read → parse → search pipeline.
#[derive(Debug, thiserror::Error)]
pub enum SolverError {
    /// The puzzle source could not be read; carries the underlying cause.
    #[error("I/O failure: {0}")]
    Io(#[from] std::io::Error),

    /// Failure while parsing the puzzle text.
    ///
    /// These originate from the parser (`ParseError`), which we box to keep the
    /// error type size stable.
    #[error("parse failure: {0}")]
    ParseFailure(#[from] Box<ParseError>),

    /// The search ran out of live branches without solving any.
    #[error("no solutions")]
    NoSolutions,
}

impl SolverError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            SolverError::Io(_) => "S001",
            SolverError::ParseFailure(_) => "S002",
            SolverError::NoSolutions => "S003",
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            SolverError::Io(_) => "Puzzle source could not be read",
            SolverError::ParseFailure(_) => "Puzzle parsing failed",
            SolverError::NoSolutions => "Puzzle has no solution",
        }
    }

    /// Returns detailed explanation of this error type (for documentation)
    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            SolverError::Io(_) => "The puzzle file could not be opened or is not valid UTF-8. The message carries the operating system's reason.",
            SolverError::ParseFailure(_) => "The puzzle text could not be parsed. This wraps an underlying ParseError (see Parse Errors section for specific error codes).",
            SolverError::NoSolutions => "Every branch of the search reached a slot that no remaining word could fill without contradicting a letter already placed. Nothing partial is reported.",
        }
    }

    /// Returns a helpful suggestion for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            SolverError::Io(_) => Some("Check that the path exists and that the file is UTF-8 text"),
            SolverError::NoSolutions => Some("Check that the pool has a word of the right shape for every slot and that crossing slots can agree"),
            SolverError::ParseFailure(_) => None, // ParseError has its own help
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        match self {
            SolverError::ParseFailure(pe) => {
                // delegate to ParseError's detailed display
                format!("{}\n  caused by: {}", self.code(), pe.display_detailed())
            }
            _ => crate::errors::format_error_with_code_and_help(&self.to_string(), self.code(), self.help()),
        }
    }
}

/// Expand every state of one round, keeping the per-state grouping so dead
/// branches can be counted. Output order matches `unsolved` in both modes.
fn expand_round(unsolved: &[PuzzleState], parallel: bool) -> Vec<Vec<PuzzleState>> {
    if parallel {
        unsolved.par_iter().map(PuzzleState::expand).collect()
    } else {
        unsolved.iter().map(PuzzleState::expand).collect()
    }
}

/// Enumerate every solved descendant of `initial`.
///
/// Each round partitions the working set into solved and unsolved states,
/// replaces every unsolved state by its children (filling each state's next
/// slot), and keeps the solved ones. The search ends when the working set is
/// empty (no solutions) or holds only solved states. Every surviving branch
/// fills one slot per round, so there are at most `slots + 1` rounds.
///
/// # Errors
///
/// Returns [`SolverError::NoSolutions`] if every branch dies.
pub fn solve(initial: PuzzleState, options: &SolveOptions) -> Result<SolveResult, SolverError> {
    let start = Instant::now();
    let max_rounds = initial.remaining_slots().len();
    let mut stats = SearchStats::default();
    let mut frontier = vec![initial];

    loop {
        stats.peak_frontier = stats.peak_frontier.max(frontier.len());

        if frontier.is_empty() {
            stats.elapsed = start.elapsed();
            info!(
                "no solutions after {} rounds ({} states expanded, {} dead branches)",
                stats.rounds, stats.states_expanded, stats.dead_branches
            );
            return Err(SolverError::NoSolutions);
        }

        let (solved, unsolved): (Vec<_>, Vec<_>) = frontier.into_iter().partition(PuzzleState::is_solved);

        if unsolved.is_empty() {
            stats.elapsed = start.elapsed();
            info!(
                "found {} solutions in {} rounds and {:?} ({} states expanded, {} dead branches, peak frontier {})",
                solved.len(),
                stats.rounds,
                stats.elapsed,
                stats.states_expanded,
                stats.dead_branches,
                stats.peak_frontier
            );
            return Ok(SolveResult { solutions: solved, stats });
        }

        stats.rounds += 1;
        debug_assert!(stats.rounds <= max_rounds, "every round must fill one slot per branch");

        let expanded = expand_round(&unsolved, options.parallel);
        stats.states_expanded += unsolved.len();
        stats.dead_branches += expanded.iter().filter(|children| children.is_empty()).count();

        frontier = expanded.into_iter().flatten().collect();
        debug!(
            "round {}: {} states expanded into {} children ({} already solved)",
            stats.rounds,
            unsolved.len(),
            frontier.len(),
            solved.len()
        );
        frontier.extend(solved);
    }
}

/// Parse `contents` with `alphabet` and solve it.
///
/// # Errors
///
/// Returns [`SolverError::ParseFailure`] for malformed input, otherwise as [`solve`].
pub fn solve_puzzle_str(contents: &str, alphabet: &Alphabet, options: &SolveOptions) -> Result<SolveResult, SolverError> {
    let puzzle = Puzzle::parse_from_str(contents, alphabet)?;
    debug!("solving {} slots with {} words", puzzle.slots.len(), puzzle.words.len());
    for slot in &puzzle.slots {
        debug!("  slot {slot}");
    }
    solve(puzzle.into_initial_state(), options)
}

/// Read, parse and solve the puzzle file at `path`.
///
/// # Errors
///
/// Returns [`SolverError::Io`] if the file cannot be read, otherwise as [`solve_puzzle_str`].
#[cfg(not(target_arch = "wasm32"))]
pub fn solve_puzzle_file<P: AsRef<std::path::Path>>(
    path: P,
    alphabet: &Alphabet,
    options: &SolveOptions,
) -> Result<SolveResult, SolverError> {
    let contents = Puzzle::read_from_path(path)?;
    solve_puzzle_str(&contents, alphabet, options)
}
