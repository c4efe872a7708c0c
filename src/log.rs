#[cfg(not(target_arch = "wasm32"))]
use log::LevelFilter;

/// Environment variable that switches the CLI to debug-level logging.
pub const DEBUG_ENV_VAR: &str = "SLOTFILL_DEBUG";

/// Initialize logging for slotfill.
///
/// # Behavior
/// - **Native (CLI):** `Debug` level if `debug_enabled`, otherwise `Info`; `RUST_LOG` overrides both.
/// - **WASM:** logs to the browser console at `Debug` or `Info` level.
///
/// Calling this more than once is harmless: later calls leave the first logger in place.
pub fn init_logger(debug_enabled: bool) {
    #[cfg(target_arch = "wasm32")]
    {
        let level = if debug_enabled {
            log::Level::Debug
        } else {
            log::Level::Info
        };

        match console_log::init_with_level(level) {
            Ok(()) => {
                log::info!("WASM logger initialized at {level:?} level");
            }
            Err(e) => {
                // carry on without logging rather than failing the module
                let msg = format!("Failed to initialize console_log: {e}. Logging will be unavailable.");
                web_sys::console::error_1(&msg.into());
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let level = if debug_enabled {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        };

        let mut builder = env_logger::Builder::new();
        builder
            .filter(None, level)
            .format_timestamp(None)
            .format_module_path(false)
            .format_target(false);

        // Let RUST_LOG override our defaults if explicitly set
        if let Ok(spec) = std::env::var("RUST_LOG") {
            builder.parse_filters(&spec);
        }

        if builder.try_init().is_ok() {
            log::debug!("Native logger initialized at {level:?} level");
        }
    }
}

/// True if [`DEBUG_ENV_VAR`] is set.
#[cfg(not(target_arch = "wasm32"))]
pub fn debug_requested() -> bool {
    std::env::var_os(DEBUG_ENV_VAR).is_some()
}
