//! Arithmetic on operands and conversion between numbers and display text.
//!
//! Every result that is not a finite number comes back as
//! [`Evaluation::Undefined`]; the dispatcher decides what that turns into.

use super::operation::{Operator, UnaryOperation};

/// Result of applying an operator to its operands.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Evaluation {
    /// A finite numeric result.
    Value(f64),
    /// Division by zero, overflow, or a result outside the real numbers.
    Undefined,
}

impl Evaluation {
    fn from_raw(value: f64) -> Self {
        if value.is_finite() {
            Self::Value(value)
        } else {
            Self::Undefined
        }
    }

    /// The numeric value, if the evaluation produced one.
    pub fn value(self) -> Option<f64> {
        match self {
            Self::Value(value) => Some(value),
            Self::Undefined => None,
        }
    }
}

/// Apply a binary operator to `lhs` and `rhs`.
pub fn evaluate_binary(lhs: f64, op: Operator, rhs: f64) -> Evaluation {
    match op {
        Operator::Add => Evaluation::from_raw(lhs + rhs),
        Operator::Subtract => Evaluation::from_raw(lhs - rhs),
        Operator::Multiply => Evaluation::from_raw(lhs * rhs),
        Operator::Divide if rhs == 0.0 => Evaluation::Undefined,
        Operator::Divide => Evaluation::from_raw(lhs / rhs),
    }
}

/// Apply a unary operation to the displayed value.
pub fn evaluate_unary(op: UnaryOperation, operand: f64) -> Evaluation {
    match op {
        UnaryOperation::Square => Evaluation::from_raw(operand * operand),
        UnaryOperation::SquareRoot => Evaluation::from_raw(operand.sqrt()),
        UnaryOperation::Reciprocal if operand == 0.0 => Evaluation::Undefined,
        UnaryOperation::Reciprocal => Evaluation::from_raw(1.0 / operand),
    }
}

/// Parse the display text into an operand.
///
/// The display is kept parseable by every transition, so the fallback to 0
/// only covers intermediate text such as a lone `-`.
pub fn parse_operand(display: &str) -> f64 {
    display
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}

/// Whether `text` is acceptable as display content.
pub fn is_valid_display(text: &str) -> bool {
    text.parse::<f64>().is_ok_and(f64::is_finite) && text.matches('.').count() <= 1
}

/// Format a number the way it appears on the display and in history.
///
/// Shortest text that reads back as the same value, no thousand separators,
/// no trailing `.0` on integers. Magnitudes of 1e21 and above, or below 1e-6,
/// switch to exponent notation.
pub fn format_number(value: f64) -> String {
    // Also catches -0.
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if (1e-6..1e21).contains(&magnitude) {
        format!("{}", value)
    } else {
        format_exponent(value)
    }
}

fn format_exponent(value: f64) -> String {
    let formatted = format!("{:e}", value);
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{}e+{}", mantissa, exponent)
        }
        _ => formatted,
    }
}
