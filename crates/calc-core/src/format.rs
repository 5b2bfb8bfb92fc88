//! # Display Formatting
//!
//! Turns operands into the text shown in the two output rows.
//!
//! ## What Gets Formatted
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  operand        integer part      fraction          display            │
//! │  ─────────      ────────────      ────────          ───────            │
//! │  "1000"         "1000" → 1,000    (none)            "1,000"            │
//! │  "1234567.5"    1,234,567         "5" (verbatim)    "1,234,567.5"      │
//! │  "12."          12                "" (verbatim)     "12."              │
//! │  "0.000"        0                 "000" (verbatim)  "0.000"            │
//! │  "Infinity"     ∞                 (none)            "∞"                │
//! │  None           -                 -                 None               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Only the integer part is grouped. The fraction is copied as typed so that
//! trailing zeros and a trailing point survive while the user is still
//! entering the number.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::{CalculatorState, Operation};
use crate::DECIMAL_POINT;

// =============================================================================
// Display Options
// =============================================================================

/// Separators used when rendering operands.
///
/// The default matches an `en-US` integer formatter: `,` every three digits
/// and `.` before the fraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", default)]
pub struct DisplayOptions {
    /// Inserted between digit groups of the integer part.
    pub grouping_separator: char,

    /// Shown in place of the stored `.`.
    pub decimal_separator: char,

    /// Digits per group. Zero disables grouping.
    pub group_size: usize,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        DisplayOptions {
            grouping_separator: ',',
            decimal_separator: '.',
            group_size: 3,
        }
    }
}

// =============================================================================
// Operand Formatting
// =============================================================================

/// Formats an operand with the default `en-US` separators.
///
/// ## Example
/// ```rust
/// use calc_core::format_operand;
///
/// assert_eq!(format_operand(Some("1000")).as_deref(), Some("1,000"));
/// assert_eq!(format_operand(Some("1234.50")).as_deref(), Some("1,234.50"));
/// assert_eq!(format_operand(Some("7.")).as_deref(), Some("7."));
/// assert_eq!(format_operand(None), None);
/// ```
pub fn format_operand(operand: Option<&str>) -> Option<String> {
    format_operand_with(operand, &DisplayOptions::default())
}

/// Formats an operand with the given separators.
///
/// An absent operand stays absent.
pub fn format_operand_with(operand: Option<&str>, options: &DisplayOptions) -> Option<String> {
    let operand = operand?;
    let formatted = match operand.split_once(DECIMAL_POINT) {
        None => format_integer(operand, options),
        Some((integer, fraction)) => format!(
            "{}{}{}",
            format_integer(integer, options),
            options.decimal_separator,
            fraction
        ),
    };
    Some(formatted)
}

/// Formats the integer part the way a number formatter treats a numeric string.
///
/// Empty reads as zero, leading zeros go away and the sign stays. `Infinity`
/// becomes `∞`; anything else that is not digits becomes `NaN`.
fn format_integer(integer: &str, options: &DisplayOptions) -> String {
    let trimmed = integer.trim();
    if trimmed.is_empty() {
        return "0".to_string();
    }

    let (sign, magnitude) = match trimmed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    if magnitude == "Infinity" {
        return format!("{sign}∞");
    }
    if magnitude.is_empty() || !magnitude.bytes().all(|b| b.is_ascii_digit()) {
        return "NaN".to_string();
    }

    let digits = match magnitude.trim_start_matches('0') {
        "" => "0",
        significant => significant,
    };

    format!("{sign}{}", group_digits(digits, options))
}

/// Inserts the grouping separator counting from the right.
fn group_digits(digits: &str, options: &DisplayOptions) -> String {
    if options.group_size == 0 {
        return digits.to_string();
    }

    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / options.group_size);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % options.group_size == 0 {
            grouped.push(options.grouping_separator);
        }
        grouped.push(c);
    }
    grouped
}

// =============================================================================
// Display View
// =============================================================================

/// The three pieces of text the presentation layer renders.
///
/// ```text
/// ┌───────────────────────────────┐
/// │                     1,000 +   │  ◄── previous_operand + operation
/// │                       25.5    │  ◄── current_operand
/// └───────────────────────────────┘
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct DisplayView {
    pub previous_operand: Option<String>,
    pub operation: Option<Operation>,
    pub current_operand: Option<String>,
}

impl DisplayView {
    /// Renders a state with the given separators.
    pub fn render(state: &CalculatorState, options: &DisplayOptions) -> Self {
        DisplayView {
            previous_operand: format_operand_with(state.previous_operand.as_deref(), options),
            operation: state.operation,
            current_operand: format_operand_with(state.current_operand.as_deref(), options),
        }
    }

    /// The upper output row: previous operand and operator, space separated.
    pub fn previous_line(&self) -> String {
        let operation = self.operation.map(Operation::symbol);
        [self.previous_operand.as_deref(), operation]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// The lower output row.
    pub fn current_line(&self) -> &str {
        self.current_operand.as_deref().unwrap_or("")
    }
}

impl From<&CalculatorState> for DisplayView {
    fn from(state: &CalculatorState) -> Self {
        DisplayView::render(state, &DisplayOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fmt(operand: &str) -> String {
        format_operand(Some(operand)).unwrap()
    }

    #[test]
    fn test_thousands_grouping() {
        assert_eq!(fmt("0"), "0");
        assert_eq!(fmt("999"), "999");
        assert_eq!(fmt("1000"), "1,000");
        assert_eq!(fmt("123456"), "123,456");
        assert_eq!(fmt("1234567"), "1,234,567");
        assert_eq!(fmt("12345678901234567890"), "12,345,678,901,234,567,890");
    }

    #[test]
    fn test_fraction_is_verbatim() {
        assert_eq!(fmt("1000.5"), "1,000.5");
        assert_eq!(fmt("1000."), "1,000.");
        assert_eq!(fmt("0.000"), "0.000");
        assert_eq!(fmt("3.14159265"), "3.14159265");
    }

    #[test]
    fn test_integer_part_normalization() {
        assert_eq!(fmt(""), "0");
        assert_eq!(fmt("."), "0.");
        assert_eq!(fmt(".5"), "0.5");
        assert_eq!(fmt("0005"), "5");
        assert_eq!(fmt("-1234"), "-1,234");
        assert_eq!(fmt("-1234.5"), "-1,234.5");
    }

    #[test]
    fn test_non_finite_results() {
        assert_eq!(fmt("Infinity"), "∞");
        assert_eq!(fmt("-Infinity"), "-∞");
        assert_eq!(fmt("NaN"), "NaN");
        assert_eq!(fmt("-"), "NaN");
    }

    #[test]
    fn test_absent_passes_through() {
        assert_eq!(format_operand(None), None);
        assert_eq!(format_operand_with(None, &DisplayOptions::default()), None);
    }

    #[test]
    fn test_custom_separators() {
        let options = DisplayOptions {
            grouping_separator: '.',
            decimal_separator: ',',
            group_size: 3,
        };
        assert_eq!(
            format_operand_with(Some("1234567.25"), &options).as_deref(),
            Some("1.234.567,25")
        );

        let ungrouped = DisplayOptions {
            group_size: 0,
            ..DisplayOptions::default()
        };
        assert_eq!(
            format_operand_with(Some("1234567"), &ungrouped).as_deref(),
            Some("1234567")
        );

        let myriads = DisplayOptions {
            grouping_separator: ' ',
            group_size: 4,
            ..DisplayOptions::default()
        };
        assert_eq!(
            format_operand_with(Some("123456789"), &myriads).as_deref(),
            Some("1 2345 6789")
        );
    }

    #[test]
    fn test_display_view_rows() {
        let state = CalculatorState {
            previous_operand: Some("1000".to_string()),
            operation: Some(Operation::Add),
            current_operand: Some("25.5".to_string()),
            overwrite: false,
        };
        let view = DisplayView::from(&state);
        assert_eq!(view.previous_operand.as_deref(), Some("1,000"));
        assert_eq!(view.previous_line(), "1,000 +");
        assert_eq!(view.current_line(), "25.5");
    }

    #[test]
    fn test_display_view_of_empty_state() {
        let view = DisplayView::from(&CalculatorState::default());
        assert_eq!(view, DisplayView::default());
        assert_eq!(view.previous_line(), "");
        assert_eq!(view.current_line(), "");
    }

    #[test]
    fn test_display_view_json_shape() {
        let state = CalculatorState {
            previous_operand: Some("1000".to_string()),
            operation: Some(Operation::Divide),
            ..CalculatorState::default()
        };
        let json = serde_json::to_value(DisplayView::from(&state)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "previousOperand": "1,000",
                "operation": "÷",
                "currentOperand": null
            })
        );
    }
}
