//! # Calc Desktop Library
//!
//! Core library for the Calc desktop application.
//! This is the main entry point that configures and runs the Tauri app.
//!
//! ## Module Organization
//! ```text
//! calc_desktop_lib/
//! ├── lib.rs            ◄─── You are here (Tauri setup & run)
//! ├── state/
//! │   ├── mod.rs        ◄─── State type exports
//! │   ├── calculator.rs ◄─── Live calculator session
//! │   └── config.rs     ◄─── Configuration state
//! ├── commands/
//! │   ├── mod.rs        ◄─── Command exports
//! │   ├── calculator.rs ◄─── Keypad, key press and action commands
//! │   └── config.rs     ◄─── Configuration retrieval
//! └── error.rs          ◄─── API and config error types
//! ```

pub mod commands;
pub mod error;
pub mod state;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use state::{CalculatorSession, ConfigState};

/// Runs the Tauri application.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Load Configuration ───────────────────────────────────────────────► │
/// │     • defaults → calc.toml → CALC_* environment                         │
/// │     • falls back to defaults on any error                               │
/// │                                                                         │
/// │  2. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter                                │
/// │     • RUST_LOG wins, otherwise the configured log filter                │
/// │                                                                         │
/// │  3. Initialize State Objects ─────────────────────────────────────────► │
/// │     • CalculatorSession: empty calculator behind a Mutex                │
/// │     • ConfigState: loaded configuration                                 │
/// │                                                                         │
/// │  4. Build & Run Tauri App ────────────────────────────────────────────► │
/// │     • Register all commands                                             │
/// │     • Manage state                                                      │
/// │     • Launch window                                                     │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() {
    // Loaded before logging so the configured filter can seed the subscriber.
    let config = ConfigState::load(None);
    let log_filter = config
        .as_ref()
        .map(|c| c.log_filter.clone())
        .unwrap_or_else(|_| ConfigState::default().log_filter);

    init_tracing(&log_filter);

    info!("Starting Calc Desktop Application");

    let config = config.unwrap_or_else(|e| {
        warn!("Failed to load config: {}. Using defaults.", e);
        ConfigState::default()
    });
    info!(display = ?config.display, "Configuration loaded");

    tauri::Builder::default()
        .manage(CalculatorSession::new())
        .manage(config)
        // Register all commands
        .invoke_handler(tauri::generate_handler![
            // Calculator commands
            commands::calculator::get_calculator,
            commands::calculator::dispatch_action,
            commands::calculator::press_key,
            commands::calculator::get_keypad,
            // Config commands
            commands::config::get_config,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=calc_desktop_lib=trace` - Show trace for the desktop shell only
/// - Default: the configured `logFilter` (`info,calc=debug`)
fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
