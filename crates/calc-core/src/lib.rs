//! # calc-core: Pure Calculator Logic
//!
//! This crate is the **heart** of Calc. It contains all calculator behavior
//! as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Calc Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Frontend (WebView)                           │   │
//! │  │        Keypad grid ──► invoke('press_key') ──► Output rows      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ Tauri IPC                              │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    Tauri Commands                               │   │
//! │  │        get_calculator, dispatch_action, press_key               │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ calc-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │  reducer  │  │ evaluator │  │  format   │  │   │
//! │  │   │  Action   │  │  reduce   │  │ evaluate  │  │ 1,000.5   │  │   │
//! │  │   │  State    │  │           │  │           │  │           │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO LOGGING • PURE FUNCTIONS                          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Digit, Operation, Action and CalculatorState
//! - [`reducer`] - The state machine: `(state, action) -> state`
//! - [`evaluator`] - Two-operand float arithmetic with an empty-string sentinel
//! - [`format`] - Thousands grouping for the output rows
//! - [`keypad`] - Button labels and their actions
//! - [`error`] - Boundary validation errors
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Logging, files and windows belong to the desktop shell
//! 3. **Immutable State**: Each action returns a new `CalculatorState`
//! 4. **No Panics**: Incomplete input is a no-op, never an error
//!
//! ## Example Usage
//!
//! ```rust
//! use calc_core::{reduce, Action, CalculatorState, Digit, Operation};
//!
//! let state = [
//!     Action::AddDigit { digit: Digit::Five },
//!     Action::ChooseOperation { operation: Operation::Add },
//!     Action::AddDigit { digit: Digit::Three },
//!     Action::Evaluate,
//! ]
//! .into_iter()
//! .fold(CalculatorState::default(), |state, action| reduce(&state, action));
//!
//! assert_eq!(state.current_operand.as_deref(), Some("8"));
//! assert!(state.overwrite);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod evaluator;
pub mod format;
pub mod keypad;
pub mod reducer;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::ValidationError;
pub use evaluator::evaluate;
pub use format::{format_operand, format_operand_with, DisplayOptions, DisplayView};
pub use keypad::{keypad_buttons, parse_key, KeypadButton, KEYPAD};
pub use reducer::reduce;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// The only separator an operand may contain while it is being typed.
///
/// Operands are always stored with `.`; localized separators are a display
/// concern handled by [`DisplayOptions`].
pub const DECIMAL_POINT: char = '.';

/// What the evaluator returns when it cannot produce a number.
///
/// The empty string is stored as an operand like any other value, so it is
/// distinct from an absent operand.
pub const NO_RESULT: &str = "";
