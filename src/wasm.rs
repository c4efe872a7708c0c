use crate::alphabet::Alphabet;
use crate::log::init_logger;
use crate::solver::{solve_puzzle_str, SolveOptions, SolverError};
use wasm_bindgen::prelude::*;

/// Structured error information for JavaScript consumers
#[derive(serde::Serialize)]
struct WasmError {
    /// Error code (e.g., "E003", "S003")
    code: String,
    /// Display message
    message: String,
    /// Short description of error type
    description: String,
    /// Detailed explanation
    details: String,
    /// Optional helpful suggestion
    #[serde(skip_serializing_if = "Option::is_none")]
    help: Option<String>,
}

impl From<SolverError> for WasmError {
    fn from(e: SolverError) -> Self {
        // For ParseFailure, surface the innermost ParseError details
        match &e {
            SolverError::ParseFailure(pe) => WasmError {
                code: pe.code().to_string(),
                message: pe.to_string(),
                description: pe.description().to_string(),
                details: pe.details().to_string(),
                help: pe.help().map(str::to_string),
            },
            _ => WasmError {
                code: e.code().to_string(),
                message: e.to_string(),
                description: e.description().to_string(),
                details: e.details().to_string(),
                help: e.help().map(str::to_string),
            },
        }
    }
}

impl From<WasmError> for JsValue {
    fn from(e: WasmError) -> Self {
        let mut msg = format!("Error {}: {}", e.code, e.message);

        if !e.details.is_empty() {
            msg.push_str(&format!("\n\n{}", e.details));
        }

        if let Some(help) = e.help {
            msg.push_str(&format!("\n\nSuggestion: {help}"));
        }

        js_sys::Error::new(&msg).into()
    }
}

/// Initialize logging and the panic hook.
///
/// This function must be called from JavaScript after the WASM module loads.
#[wasm_bindgen]
pub fn initialize(debug_enabled: bool) {
    console_error_panic_hook::set_once();
    init_logger(debug_enabled);
    log::info!("WASM module initialized ({})", env!("GIT_HASH_FULL"));
}

#[derive(serde::Serialize)]
struct WasmSolveResult {
    /// One rendered grid per solution
    solutions: Vec<String>,
    rounds: usize,
    elapsed_ms: f64,
}

/// JS entry: (puzzle: string, vowels?: string, consonants?: string)
/// returns { solutions: string[], rounds: number, elapsed_ms: number }
///
/// Omitted alphabets fall back to the default tables.
#[wasm_bindgen]
pub fn solve_puzzle_wasm(
    puzzle: &str,
    vowels: Option<String>,
    consonants: Option<String>,
) -> Result<JsValue, JsValue> {
    let alphabet = match (vowels, consonants) {
        (None, None) => Alphabet::default(),
        (v, c) => Alphabet::new(
            v.as_deref().unwrap_or(crate::alphabet::DEFAULT_VOWELS),
            c.as_deref().unwrap_or(crate::alphabet::DEFAULT_CONSONANTS),
        )
        .map_err(|e| WasmError::from(SolverError::from(e)))?,
    };

    // threads are not available to a plain wasm32 build
    let result = solve_puzzle_str(puzzle, &alphabet, &SolveOptions { parallel: false }).map_err(WasmError::from)?;

    let wasm_result = WasmSolveResult {
        solutions: result.solutions.iter().map(|s| s.to_visual()).collect(),
        rounds: result.stats.rounds,
        elapsed_ms: result.stats.elapsed.as_secs_f64() * 1000.0,
    };

    serde_wasm_bindgen::to_value(&wasm_result).map_err(|e| {
        WasmError {
            code: "WASM001".to_string(),
            message: format!("serialization failed: {e}"),
            description: "Failed to serialize result".to_string(),
            details: "The solver result could not be converted to JavaScript format.".to_string(),
            help: Some("This is an internal error. Please report this issue.".to_string()),
        }
        .into()
    })
}
