//! # Domain Types
//!
//! Core types shared by the reducer, the evaluator and the frontend.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────────┐   │
//! │  │     Digit       │   │   Operation     │   │  CalculatorState    │   │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────────  │   │
//! │  │  0 1 2 ... 9    │   │  +  -  *  ÷     │   │  current_operand    │   │
//! │  │  .              │   │                 │   │  previous_operand   │   │
//! │  └─────────────────┘   └─────────────────┘   │  operation          │   │
//! │                                              │  overwrite          │   │
//! │  ┌───────────────────────────────────────┐   └─────────────────────┘   │
//! │  │               Action                  │                              │
//! │  │  AddDigit { digit }  ChooseOperation  │                              │
//! │  │  Clear  DeleteDigit  Evaluate         │                              │
//! │  └───────────────────────────────────────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Wire Format
//! Actions keep the `{ type, payload }` shape the web frontend dispatches:
//! ```json
//! { "type": "add-digit", "payload": { "digit": "7" } }
//! { "type": "choose-operation", "payload": { "operation": "÷" } }
//! { "type": "evaluate" }
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::ValidationError;

// =============================================================================
// Digit
// =============================================================================

/// A single key that extends the operand being typed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Digit {
    #[serde(rename = "0")]
    Zero,
    #[serde(rename = "1")]
    One,
    #[serde(rename = "2")]
    Two,
    #[serde(rename = "3")]
    Three,
    #[serde(rename = "4")]
    Four,
    #[serde(rename = "5")]
    Five,
    #[serde(rename = "6")]
    Six,
    #[serde(rename = "7")]
    Seven,
    #[serde(rename = "8")]
    Eight,
    #[serde(rename = "9")]
    Nine,
    /// The decimal point.
    #[serde(rename = ".")]
    Point,
}

impl Digit {
    /// All keys in keypad order (`1`-`9`, then `.` and `0`).
    pub const ALL: [Digit; 11] = [
        Digit::One,
        Digit::Two,
        Digit::Three,
        Digit::Four,
        Digit::Five,
        Digit::Six,
        Digit::Seven,
        Digit::Eight,
        Digit::Nine,
        Digit::Point,
        Digit::Zero,
    ];

    /// The character appended to the operand.
    pub const fn as_char(self) -> char {
        match self {
            Digit::Zero => '0',
            Digit::One => '1',
            Digit::Two => '2',
            Digit::Three => '3',
            Digit::Four => '4',
            Digit::Five => '5',
            Digit::Six => '6',
            Digit::Seven => '7',
            Digit::Eight => '8',
            Digit::Nine => '9',
            Digit::Point => crate::DECIMAL_POINT,
        }
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl TryFrom<char> for Digit {
    type Error = ValidationError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Digit::ALL
            .into_iter()
            .find(|d| d.as_char() == c)
            .ok_or_else(|| ValidationError::InvalidDigit {
                value: c.to_string(),
            })
    }
}

impl FromStr for Digit {
    type Err = ValidationError;

    /// Parses a one-character key label such as `"7"` or `"."`.
    ///
    /// ```rust
    /// use calc_core::Digit;
    ///
    /// assert_eq!("7".parse::<Digit>(), Ok(Digit::Seven));
    /// assert!("77".parse::<Digit>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Digit::try_from(c),
            _ => Err(ValidationError::InvalidDigit {
                value: s.to_string(),
            }),
        }
    }
}

// =============================================================================
// Operation
// =============================================================================

/// A binary operation waiting for its right-hand operand.
///
/// Serialized as the symbol printed on the key, so the frontend and the
/// output row use the same text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Operation {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Subtract,
    #[serde(rename = "*")]
    Multiply,
    #[serde(rename = "÷")]
    Divide,
}

impl Operation {
    /// All operations in keypad order (top to bottom of the right column).
    pub const ALL: [Operation; 4] = [
        Operation::Divide,
        Operation::Multiply,
        Operation::Add,
        Operation::Subtract,
    ];

    /// The symbol shown on the key and next to the previous operand.
    pub const fn symbol(self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Subtract => "-",
            Operation::Multiply => "*",
            Operation::Divide => "÷",
        }
    }

    /// Looks up an operation by its key symbol.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Operation::ALL.into_iter().find(|op| op.symbol() == symbol)
    }

    /// Applies the operation with IEEE-754 semantics.
    ///
    /// Division by zero is not guarded: `1 ÷ 0` is `inf`, `0 ÷ 0` is `NaN`.
    #[inline]
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Operation::Add => lhs + rhs,
            Operation::Subtract => lhs - rhs,
            Operation::Multiply => lhs * rhs,
            Operation::Divide => lhs / rhs,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Operation {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operation::from_symbol(s).ok_or_else(|| ValidationError::UnknownOperation {
            symbol: s.to_string(),
        })
    }
}

// =============================================================================
// Action
// =============================================================================

/// Everything the presentation layer can ask the calculator to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "type", content = "payload", rename_all = "kebab-case")]
pub enum Action {
    /// Append a digit or the decimal point to the current operand.
    AddDigit { digit: Digit },
    /// Pick the pending operation (chains if both operands are present).
    ChooseOperation { operation: Operation },
    /// Reset to the empty state.
    Clear,
    /// Remove the last character of the current operand.
    DeleteDigit,
    /// Compute `previous operation current`.
    Evaluate,
}

// =============================================================================
// Calculator State
// =============================================================================

/// The calculator at one point in time.
///
/// ## Invariants
/// - Typed operands hold only digits and at most one decimal point
///   (evaluated results may also carry a sign, `Infinity` or `NaN`)
/// - `operation` is only set while at least one operand is present
/// - `overwrite` is set by `Evaluate` and cleared by the next digit or delete
///
/// `None` and `Some("")` are different: the latter is what an evaluation that
/// produced no number leaves behind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CalculatorState {
    /// The operand being typed, or the last result.
    #[serde(default)]
    pub current_operand: Option<String>,

    /// The left-hand operand once an operation was chosen.
    #[serde(default)]
    pub previous_operand: Option<String>,

    /// The pending operation.
    #[serde(default)]
    pub operation: Option<Operation>,

    /// When true the next digit starts a new operand.
    #[serde(default)]
    pub overwrite: bool,
}

impl CalculatorState {
    /// Creates the empty state (what `Clear` returns).
    pub fn new() -> Self {
        Self::default()
    }

    /// True when nothing has been entered.
    pub fn is_empty(&self) -> bool {
        self.current_operand.is_none()
            && self.previous_operand.is_none()
            && self.operation.is_none()
            && !self.overwrite
    }

    /// True when `Evaluate` would do something.
    pub fn can_evaluate(&self) -> bool {
        self.operation.is_some()
            && self.current_operand.is_some()
            && self.previous_operand.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_chars() {
        assert_eq!(Digit::Zero.as_char(), '0');
        assert_eq!(Digit::Nine.as_char(), '9');
        assert_eq!(Digit::Point.as_char(), '.');
        assert_eq!(Digit::Point.to_string(), ".");
    }

    #[test]
    fn test_digit_parsing() {
        assert_eq!(Digit::try_from('4'), Ok(Digit::Four));
        assert_eq!("0".parse::<Digit>(), Ok(Digit::Zero));
        assert_eq!(".".parse::<Digit>(), Ok(Digit::Point));

        assert!(Digit::try_from('a').is_err());
        assert!("".parse::<Digit>().is_err());
        assert!("12".parse::<Digit>().is_err());
        assert!(",".parse::<Digit>().is_err());
    }

    #[test]
    fn test_every_digit_round_trips_through_its_char() {
        for digit in Digit::ALL {
            assert_eq!(Digit::try_from(digit.as_char()), Ok(digit));
        }
    }

    #[test]
    fn test_operation_symbols() {
        assert_eq!(Operation::from_symbol("+"), Some(Operation::Add));
        assert_eq!(Operation::from_symbol("-"), Some(Operation::Subtract));
        assert_eq!(Operation::from_symbol("*"), Some(Operation::Multiply));
        assert_eq!(Operation::from_symbol("÷"), Some(Operation::Divide));
        assert_eq!(Operation::from_symbol("/"), None);
        assert_eq!(Operation::Divide.to_string(), "÷");

        let err = "%".parse::<Operation>().unwrap_err();
        assert_eq!(
            err,
            ValidationError::UnknownOperation {
                symbol: "%".to_string()
            }
        );
    }

    #[test]
    fn test_operation_apply() {
        assert_eq!(Operation::Add.apply(2.0, 3.0), 5.0);
        assert_eq!(Operation::Subtract.apply(2.0, 3.0), -1.0);
        assert_eq!(Operation::Multiply.apply(2.0, 3.0), 6.0);
        assert_eq!(Operation::Divide.apply(3.0, 2.0), 1.5);
        assert!(Operation::Divide.apply(1.0, 0.0).is_infinite());
        assert!(Operation::Divide.apply(0.0, 0.0).is_nan());
    }

    #[test]
    fn test_action_json_shape() {
        let action = Action::AddDigit { digit: Digit::Seven };
        let json = serde_json::to_value(action).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "type": "add-digit", "payload": { "digit": "7" } })
        );

        let action: Action = serde_json::from_str(
            r#"{ "type": "choose-operation", "payload": { "operation": "÷" } }"#,
        )
        .unwrap();
        assert_eq!(
            action,
            Action::ChooseOperation {
                operation: Operation::Divide
            }
        );

        let action: Action = serde_json::from_str(r#"{ "type": "evaluate" }"#).unwrap();
        assert_eq!(action, Action::Evaluate);
        let action: Action = serde_json::from_str(r#"{ "type": "delete-digit" }"#).unwrap();
        assert_eq!(action, Action::DeleteDigit);
    }

    #[test]
    fn test_action_json_rejects_bad_payload() {
        let result = serde_json::from_str::<Action>(
            r#"{ "type": "add-digit", "payload": { "digit": "x" } }"#,
        );
        assert!(result.is_err());

        let result = serde_json::from_str::<Action>(r#"{ "type": "square-root" }"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_state_json_shape() {
        let state = CalculatorState {
            current_operand: Some("3".to_string()),
            previous_operand: Some("12".to_string()),
            operation: Some(Operation::Multiply),
            overwrite: false,
        };
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "currentOperand": "3",
                "previousOperand": "12",
                "operation": "*",
                "overwrite": false
            })
        );

        // The frontend's initial `{}` is the empty state.
        let empty: CalculatorState = serde_json::from_str("{}").unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_state_predicates() {
        assert!(CalculatorState::new().is_empty());
        assert!(!CalculatorState::new().can_evaluate());

        let partial = CalculatorState {
            previous_operand: Some("2".to_string()),
            operation: Some(Operation::Add),
            ..CalculatorState::default()
        };
        assert!(!partial.is_empty());
        assert!(!partial.can_evaluate());

        let full = CalculatorState {
            current_operand: Some("3".to_string()),
            ..partial
        };
        assert!(full.can_evaluate());
    }
}
