//! # Tauri Commands Module
//!
//! All commands exposed to the web frontend.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs         ◄─── You are here (exports)
//! ├── calculator.rs  ◄─── Keypad, key presses and actions
//! └── config.rs      ◄─── Configuration retrieval
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Tauri Command Flow                                   │
//! │                                                                         │
//! │  Web Frontend                                                           │
//! │  ────────────                                                           │
//! │  const { invoke } = window.__TAURI__.core;                              │
//! │                                                                         │
//! │  const response = await invoke('press_key', { label: '7' });            │
//! │         │                                                               │
//! │         │ (IPC via WebView)                                             │
//! │         ▼                                                               │
//! │  Rust Backend                                                           │
//! │  ────────────                                                           │
//! │  #[tauri::command]                                                      │
//! │  fn press_key(                                                          │
//! │      session: State<'_, CalculatorSession>,  ◄── Injected by Tauri      │
//! │      config: State<'_, ConfigState>,         ◄── Injected by Tauri      │
//! │      label: String,                          ◄── From invoke params     │
//! │  ) -> Result<CalculatorResponse, ApiError>                              │
//! │         │                                                               │
//! │         │ (JSON serialization)                                          │
//! │         ▼                                                               │
//! │  Frontend receives: { state, display }                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod calculator;
pub mod config;
