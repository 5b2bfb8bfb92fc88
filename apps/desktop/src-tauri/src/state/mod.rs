//! # State Module
//!
//! Manages application state for the Tauri desktop app.
//!
//! Each state type is managed separately so commands declare exactly what
//! they need.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                      Tauri Runtime                              │   │
//! │  │  app.manage(calculator_session);                                │   │
//! │  │  app.manage(config_state);                                      │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                              │                                          │
//! │              ┌───────────────┴───────────────┐                          │
//! │              ▼                               ▼                          │
//! │  ┌──────────────────────┐        ┌──────────────────────┐              │
//! │  │  CalculatorSession   │        │     ConfigState      │              │
//! │  │                      │        │                      │              │
//! │  │  Arc<Mutex<          │        │  display options     │              │
//! │  │    CalculatorState   │        │  log filter          │              │
//! │  │  >>                  │        │                      │              │
//! │  └──────────────────────┘        └──────────────────────┘              │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • CalculatorSession: Protected by Arc<Mutex<T>> for exclusive access  │
//! │  • ConfigState: Read-only after initialization                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod calculator;
mod config;

pub use calculator::{CalculatorResponse, CalculatorSession};
pub use config::ConfigState;
