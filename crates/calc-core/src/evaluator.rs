//! # Evaluator
//!
//! Computes `previous operation current` for the state machine.
//!
//! ## No Errors, Only a Sentinel
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  evaluate("12", "3", ÷)                                                 │
//! │       │                                                                 │
//! │       ├── parse "12" ──► 12.0 ─┐                                        │
//! │       ├── parse "3"  ──► 3.0  ─┼──► 12.0 / 3.0 ──► "4"                  │
//! │       │                        │                                        │
//! │       └── parse "."  ──► ✗ ────┴──► ""   (NO_RESULT)                    │
//! │                                                                         │
//! │  10 ÷ 0 ──► inf ──► "Infinity"    0 ÷ 0 ──► NaN ──► "NaN"               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Results are stored back into the state as operands, so they are rendered
//! in plain positional notation (never `1e21`) and `-0` collapses to `0`.

use crate::types::Operation;
use crate::NO_RESULT;

/// Evaluates `previous operation current`.
///
/// Returns [`NO_RESULT`] when either operand is not a number.
///
/// ## Example
/// ```rust
/// use calc_core::{evaluate, Operation};
///
/// assert_eq!(evaluate("5", "3", Operation::Add), "8");
/// assert_eq!(evaluate("0.1", "0.2", Operation::Add), "0.30000000000000004");
/// assert_eq!(evaluate("10", "0", Operation::Divide), "Infinity");
/// assert_eq!(evaluate(".", "3", Operation::Add), "");
/// ```
pub fn evaluate(previous: &str, current: &str, operation: Operation) -> String {
    compute(previous, current, operation)
        .map(number_to_string)
        .unwrap_or_else(|| NO_RESULT.to_string())
}

/// Evaluates with the operator given as its key symbol.
///
/// An unknown symbol is treated like an unparseable operand: the result is
/// [`NO_RESULT`].
pub fn evaluate_symbol(previous: &str, current: &str, symbol: &str) -> String {
    match Operation::from_symbol(symbol) {
        Some(operation) => evaluate(previous, current, operation),
        None => NO_RESULT.to_string(),
    }
}

/// The numeric result, or `None` if an operand does not parse.
pub fn compute(previous: &str, current: &str, operation: Operation) -> Option<f64> {
    let lhs = parse_operand(previous)?;
    let rhs = parse_operand(current)?;
    Some(operation.apply(lhs, rhs))
}

/// Parses an operand as `f64`, ignoring surrounding whitespace.
///
/// `Infinity` (a previous division by zero) parses, optionally signed. Other
/// spellings such as `inf` and `NaN` count as a failed parse.
pub fn parse_operand(operand: &str) -> Option<f64> {
    let trimmed = operand.trim();
    let unsigned = trimmed.strip_prefix(['+', '-']).unwrap_or(trimmed);
    if unsigned.starts_with(|c: char| c.is_ascii_alphabetic()) && unsigned != "Infinity" {
        return None;
    }

    trimmed
        .parse::<f64>()
        .ok()
        .filter(|value| !value.is_nan())
}

/// Canonical text for a result.
pub fn number_to_string(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value.is_sign_positive() {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        }
    } else if value == 0.0 {
        "0".to_string()
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_arithmetic() {
        assert_eq!(evaluate("5", "3", Operation::Add), "8");
        assert_eq!(evaluate("5", "3", Operation::Subtract), "2");
        assert_eq!(evaluate("5", "3", Operation::Multiply), "15");
        assert_eq!(evaluate("6", "4", Operation::Divide), "1.5");
    }

    #[test]
    fn test_negative_and_fractional_results() {
        assert_eq!(evaluate("3", "5", Operation::Subtract), "-2");
        assert_eq!(evaluate("1", "3", Operation::Divide), "0.3333333333333333");
        assert_eq!(evaluate("2.5", "4", Operation::Multiply), "10");
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(evaluate("10", "0", Operation::Divide), "Infinity");
        assert_eq!(evaluate("-10", "0", Operation::Divide), "-Infinity");
        assert_eq!(evaluate("0", "0", Operation::Divide), "NaN");
    }

    #[test]
    fn test_infinity_feeds_back_in() {
        assert_eq!(evaluate("Infinity", "1", Operation::Add), "Infinity");
        assert_eq!(evaluate("Infinity", "Infinity", Operation::Subtract), "NaN");
    }

    #[test]
    fn test_unparseable_operands_yield_sentinel() {
        assert_eq!(evaluate("", "3", Operation::Add), NO_RESULT);
        assert_eq!(evaluate("3", ".", Operation::Add), NO_RESULT);
        assert_eq!(evaluate("abc", "3", Operation::Add), NO_RESULT);
        assert_eq!(evaluate("1.2.3", "3", Operation::Add), NO_RESULT);
        assert_eq!(evaluate("NaN", "3", Operation::Add), NO_RESULT);
    }

    #[test]
    fn test_only_the_rendered_infinity_parses() {
        assert_eq!(parse_operand("Infinity"), Some(f64::INFINITY));
        assert_eq!(parse_operand("-Infinity"), Some(f64::NEG_INFINITY));
        assert_eq!(parse_operand("+Infinity"), Some(f64::INFINITY));

        assert_eq!(evaluate("inf", "1", Operation::Add), NO_RESULT);
        assert_eq!(evaluate("infinity", "2", Operation::Multiply), NO_RESULT);
        assert_eq!(evaluate("2", "-inf", Operation::Add), NO_RESULT);
        assert_eq!(evaluate("INFINITY", "1", Operation::Add), NO_RESULT);
        assert_eq!(evaluate("nan", "1", Operation::Add), NO_RESULT);
    }

    #[test]
    fn test_exponent_notation_still_parses() {
        assert_eq!(evaluate("1e3", "1", Operation::Add), "1001");
    }

    #[test]
    fn test_trailing_point_and_whitespace_parse() {
        assert_eq!(evaluate("5.", "1", Operation::Add), "6");
        assert_eq!(evaluate(".5", "1", Operation::Add), "1.5");
        assert_eq!(evaluate(" 7 ", "1", Operation::Add), "8");
    }

    #[test]
    fn test_unknown_symbol_yields_sentinel() {
        assert_eq!(evaluate_symbol("2", "3", "+"), "5");
        assert_eq!(evaluate_symbol("2", "3", "÷"), "0.6666666666666666");
        assert_eq!(evaluate_symbol("2", "3", "^"), NO_RESULT);
        assert_eq!(evaluate_symbol("2", "3", ""), NO_RESULT);
    }

    #[test]
    fn test_number_to_string() {
        assert_eq!(number_to_string(-0.0), "0");
        assert_eq!(number_to_string(1e21), "1000000000000000000000");
        assert_eq!(number_to_string(0.000001), "0.000001");
        assert_eq!(number_to_string(f64::NAN), "NaN");
    }
}
