use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;

use slotfill::alphabet::{Alphabet, DEFAULT_CONSONANTS, DEFAULT_VOWELS};
use slotfill::render::render_solutions;
use slotfill::solver::{self, SolveOptions, SolverError};

/// Slot-fill solver: every way to fill a vowel/consonant grid from a word pool
#[derive(Parser, Debug)]
#[command(
    author,
    version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")"),
    about,
    long_about = None
)]
struct Cli {
    /// Puzzle files to solve, each independently
    #[arg(default_values = [
        concat!(env!("CARGO_MANIFEST_DIR"), "/data/Input1.txt"),
        concat!(env!("CARGO_MANIFEST_DIR"), "/data/Input2.txt"),
    ])]
    inputs: Vec<PathBuf>,

    /// Characters that count as vowels
    #[arg(long, default_value = DEFAULT_VOWELS)]
    vowels: String,

    /// Characters that count as consonants
    #[arg(long, default_value = DEFAULT_CONSONANTS)]
    consonants: String,

    /// Expand each search round in parallel
    #[arg(short, long)]
    parallel: bool,
}

/// Entry point of the slotfill CLI.
///
/// Every input is read, parsed, solved and rendered on its own; a failure is
/// reported in place of that input's output and does not stop the others.
/// Exits with code 1 if any input failed.
fn main() -> ExitCode {
    // Set up logging
    slotfill::log::init_logger(slotfill::log::debug_requested());

    let cli = Cli::parse();

    let alphabet = match Alphabet::new(&cli.vowels, &cli.consonants) {
        Ok(alphabet) => alphabet,
        Err(e) => {
            eprintln!("Error: {}", e.display_detailed());
            return ExitCode::FAILURE;
        }
    };
    let options = SolveOptions { parallel: cli.parallel };

    log::info!("Solving {} puzzle(s)", cli.inputs.len());

    let mut failed = 0;
    for path in &cli.inputs {
        match solve_and_render(path, &alphabet, &options) {
            Ok(rendered) => println!("{rendered}"),
            Err(e) => {
                failed += 1;
                eprintln!("{}: Error: {}", path.display(), e.display_detailed());
            }
        }
    }

    if failed == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

/// Read → parse → search → render for one puzzle file.
///
/// Prints performance metrics (timings, counts) on stderr.
fn solve_and_render(path: &Path, alphabet: &Alphabet, options: &SolveOptions) -> Result<String, SolverError> {
    let result = solver::solve_puzzle_file(path, alphabet, options)?;

    eprintln!(
        "{}: {} solution(s) in {:.3}s ({} rounds, {} states expanded, peak frontier {}).",
        path.display(),
        result.len(),
        result.stats.elapsed.as_secs_f64(),
        result.stats.rounds,
        result.stats.states_expanded,
        result.stats.peak_frontier
    );

    Ok(render_solutions(&result.solutions))
}
