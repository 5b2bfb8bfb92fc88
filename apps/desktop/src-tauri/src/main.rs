//! # Calc Desktop Application Entry Point
//!
//! ## Application Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Calc Desktop                                   │
//! │                                                                         │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                      Tauri WebView                               │  │
//! │  │     dist/index.html: output rows + 18-button keypad              │  │
//! │  │                              │                                   │  │
//! │  │                     invoke('press_key')                          │  │
//! │  └──────────────────────────────┼───────────────────────────────────┘  │
//! │                                 ▼                                       │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                    Rust Backend (this crate)                     │  │
//! │  │  lib.rs ─────► config, logging, state, command registration     │  │
//! │  │  commands/ ──► get_calculator, dispatch_action, press_key       │  │
//! │  │  state/ ─────► CalculatorSession, ConfigState                   │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                 │                                       │
//! │                                 ▼                                       │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │              calc-core (reduce, evaluate, format)                │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

// Prevents an additional console window on Windows in release
#![cfg_attr(
    all(not(debug_assertions), target_os = "windows"),
    windows_subsystem = "windows"
)]

fn main() {
    calc_desktop_lib::run();
}
