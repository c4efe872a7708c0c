// Reusable library API — visible to both CLI and WASM builds
pub mod alphabet;
pub mod errors;
pub mod letter;
pub mod log;
pub mod parser;
pub mod render;
pub mod slot;
pub mod solver;
pub mod state;

// Compile the wasm glue only when targeting wasm32.
#[cfg(target_arch = "wasm32")]
pub mod wasm;
