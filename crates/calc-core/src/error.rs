//! # Error Types
//!
//! Error types for calc-core.
//!
//! ## Where Errors Can Happen
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Boundaries                                │
//! │                                                                         │
//! │  Frontend strings ──► keypad / FromStr ──► ValidationError             │
//! │     "7", "÷", "AC"        (this crate)                                  │
//! │                                                                         │
//! │  Typed Action ──► reduce ──► evaluate ──► format                        │
//! │                    (infallible: no-ops and the "" sentinel)             │
//! │                                                                         │
//! │  Flow: ValidationError → ApiError (desktop) → Frontend                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The state machine itself never fails. Errors only exist where untyped
//! input from the frontend is turned into [`Digit`](crate::Digit),
//! [`Operation`](crate::Operation) or [`Action`](crate::Action).

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors for values arriving as strings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Not one of `0`-`9` or `.`.
    #[error("'{value}' is not a digit or decimal point")]
    InvalidDigit { value: String },

    /// Not one of the operator symbols.
    #[error("'{symbol}' is not a supported operation (expected one of + - * ÷)")]
    UnknownOperation { symbol: String },

    /// Not a label on the keypad.
    #[error("'{label}' is not a keypad button")]
    UnknownKey { label: String },
}
