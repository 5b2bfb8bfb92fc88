//! # Keypad
//!
//! The button grid and the action each button dispatches.
//!
//! ## Layout
//! ```text
//! ┌───────────────┬───────┬───────┐
//! │      AC       │  DEL  │   ÷   │
//! ├───────┬───────┼───────┼───────┤
//! │   1   │   2   │   3   │   *   │
//! ├───────┼───────┼───────┼───────┤
//! │   4   │   5   │   6   │   +   │
//! ├───────┼───────┼───────┼───────┤
//! │   7   │   8   │   9   │   -   │
//! ├───────┼───────┼───────┴───────┤
//! │   .   │   0   │       =       │
//! └───────┴───────┴───────────────┘
//! ```
//!
//! Frontends render [`keypad_buttons`] in order and send the pressed label
//! back; [`parse_key`] turns it into an [`Action`].

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ValidationError;
use crate::types::{Action, Digit, Operation};

/// Label of the clear button.
pub const KEY_CLEAR: &str = "AC";

/// Label of the delete button.
pub const KEY_DELETE: &str = "DEL";

/// Label of the evaluate button.
pub const KEY_EVALUATE: &str = "=";

/// Button labels in grid order, row by row.
pub const KEYPAD: [&str; 18] = [
    KEY_CLEAR, KEY_DELETE, "÷", //
    "1", "2", "3", "*", //
    "4", "5", "6", "+", //
    "7", "8", "9", "-", //
    ".", "0", KEY_EVALUATE,
];

/// True for the buttons that span two grid columns.
pub fn is_wide_key(label: &str) -> bool {
    label == KEY_CLEAR || label == KEY_EVALUATE
}

/// One cell of the button grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct KeypadButton {
    /// Text on the button, sent back verbatim on press.
    pub label: String,

    /// Spans two columns.
    pub wide: bool,
}

/// The whole grid, row by row.
///
/// ```rust
/// use calc_core::keypad_buttons;
///
/// let buttons = keypad_buttons();
/// assert_eq!(buttons.len(), 18);
/// assert_eq!(buttons[0].label, "AC");
/// assert!(buttons[0].wide);
/// ```
pub fn keypad_buttons() -> Vec<KeypadButton> {
    KEYPAD
        .iter()
        .map(|&label| KeypadButton {
            label: label.to_string(),
            wide: is_wide_key(label),
        })
        .collect()
}

/// Maps a button label to its action.
///
/// ## Example
/// ```rust
/// use calc_core::{parse_key, Action, Digit, Operation};
///
/// assert_eq!(parse_key("7"), Ok(Action::AddDigit { digit: Digit::Seven }));
/// assert_eq!(parse_key("÷"), Ok(Action::ChooseOperation { operation: Operation::Divide }));
/// assert_eq!(parse_key("AC"), Ok(Action::Clear));
/// assert!(parse_key("MR").is_err());
/// ```
pub fn parse_key(label: &str) -> Result<Action, ValidationError> {
    match label.trim() {
        KEY_CLEAR => Ok(Action::Clear),
        KEY_DELETE => Ok(Action::DeleteDigit),
        KEY_EVALUATE => Ok(Action::Evaluate),
        other => {
            if let Some(operation) = Operation::from_symbol(other) {
                return Ok(Action::ChooseOperation { operation });
            }
            other
                .parse::<Digit>()
                .map(|digit| Action::AddDigit { digit })
                .map_err(|_| ValidationError::UnknownKey {
                    label: label.to_string(),
                })
        }
    }
}
