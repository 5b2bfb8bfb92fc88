//! # State Machine
//!
//! The calculator's transition function: `(state, action) -> state`.
//!
//! ## Transitions
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Calculator Transitions                               │
//! │                                                                         │
//! │   {}  ──5──►  {cur:"5"}  ──+──►  {prev:"5", op:+}  ──3──►               │
//! │                                                                         │
//! │   {prev:"5", op:+, cur:"3"}  ──=──►  {cur:"8", overwrite}               │
//! │            │                                 │                          │
//! │            └──*──► {prev:"8", op:*}          ├──7──► {cur:"7"}          │
//! │               (chained, left to right)       └──DEL──► {}               │
//! │                                                                         │
//! │   any state ──AC──► {}                                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every branch returns a new value. Input that cannot be applied (a second
//! decimal point, `=` with nothing pending, ...) returns the state unchanged.

use crate::evaluator::evaluate;
use crate::types::{Action, CalculatorState, Digit, Operation};
use crate::{DECIMAL_POINT, NO_RESULT};

/// Applies one action.
///
/// ## Example
/// ```rust
/// use calc_core::{reduce, Action, CalculatorState, Operation};
///
/// let state = CalculatorState {
///     previous_operand: Some("2".to_string()),
///     current_operand: Some("3".to_string()),
///     operation: Some(Operation::Add),
///     overwrite: false,
/// };
///
/// // Choosing another operation evaluates the pending one first.
/// let next = reduce(&state, Action::ChooseOperation { operation: Operation::Multiply });
/// assert_eq!(next.previous_operand.as_deref(), Some("5"));
/// assert_eq!(next.operation, Some(Operation::Multiply));
/// assert_eq!(next.current_operand, None);
/// ```
pub fn reduce(state: &CalculatorState, action: Action) -> CalculatorState {
    match action {
        Action::AddDigit { digit } => add_digit(state, digit),
        Action::ChooseOperation { operation } => choose_operation(state, operation),
        Action::Clear => CalculatorState::new(),
        Action::DeleteDigit => delete_digit(state),
        Action::Evaluate => evaluate_pending(state),
    }
}

impl CalculatorState {
    /// Method form of [`reduce`].
    pub fn apply(&self, action: Action) -> CalculatorState {
        reduce(self, action)
    }

    /// Applies a sequence of actions in order.
    pub fn apply_all<I>(&self, actions: I) -> CalculatorState
    where
        I: IntoIterator<Item = Action>,
    {
        actions
            .into_iter()
            .fold(self.clone(), |state, action| reduce(&state, action))
    }
}

fn add_digit(state: &CalculatorState, digit: Digit) -> CalculatorState {
    // A fresh digit after `=` starts a new operand.
    if state.overwrite {
        return CalculatorState {
            current_operand: Some(digit.to_string()),
            overwrite: false,
            ..state.clone()
        };
    }

    let current = state.current_operand.as_deref().unwrap_or("");
    if digit == Digit::Zero && current == "0" {
        return state.clone();
    }
    if digit == Digit::Point && current.contains(DECIMAL_POINT) {
        return state.clone();
    }

    let mut appended = String::with_capacity(current.len() + 1);
    appended.push_str(current);
    appended.push(digit.as_char());

    CalculatorState {
        current_operand: Some(appended),
        ..state.clone()
    }
}

fn choose_operation(state: &CalculatorState, operation: Operation) -> CalculatorState {
    match (&state.current_operand, &state.previous_operand) {
        (None, None) => state.clone(),

        // Operator pressed again before a new operand: change of mind.
        (None, Some(_)) => CalculatorState {
            operation: Some(operation),
            ..state.clone()
        },

        (Some(current), None) => CalculatorState {
            previous_operand: Some(current.clone()),
            current_operand: None,
            operation: Some(operation),
            ..state.clone()
        },

        (Some(_), Some(_)) => CalculatorState {
            previous_operand: Some(pending_result(state)),
            current_operand: None,
            operation: Some(operation),
            ..state.clone()
        },
    }
}

fn delete_digit(state: &CalculatorState) -> CalculatorState {
    // A result is erased whole, not trimmed.
    if state.overwrite {
        return CalculatorState {
            current_operand: None,
            overwrite: false,
            ..state.clone()
        };
    }

    let Some(current) = state.current_operand.as_deref() else {
        return state.clone();
    };

    let mut chars = current.chars();
    chars.next_back();
    let remaining = chars.as_str();

    CalculatorState {
        current_operand: if remaining.is_empty() {
            None
        } else {
            Some(remaining.to_string())
        },
        ..state.clone()
    }
}

fn evaluate_pending(state: &CalculatorState) -> CalculatorState {
    if !state.can_evaluate() {
        return state.clone();
    }

    CalculatorState {
        current_operand: Some(pending_result(state)),
        previous_operand: None,
        operation: None,
        overwrite: true,
    }
}

/// Result of `previous operation current`; the sentinel if anything is missing.
fn pending_result(state: &CalculatorState) -> String {
    match (
        state.previous_operand.as_deref(),
        state.current_operand.as_deref(),
        state.operation,
    ) {
        (Some(previous), Some(current), Some(operation)) => {
            evaluate(previous, current, operation)
        }
        _ => NO_RESULT.to_string(),
    }
}
