//! Operator types understood by the calculator.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A binary operator that can be pending between two operands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Subtract,
    #[serde(rename = "×")]
    Multiply,
    #[serde(rename = "÷")]
    Divide,
}

impl Operator {
    /// The symbol used in the pending-operation preview and in history entries.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "×",
            Self::Divide => "÷",
        }
    }

    /// Look up an operator by symbol. Accepts the ASCII spellings `*` and `/`.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Self::Add),
            "-" => Some(Self::Subtract),
            "×" | "*" => Some(Self::Multiply),
            "÷" | "/" => Some(Self::Divide),
            _ => None,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// An operation applied directly to the displayed value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnaryOperation {
    Square,
    SquareRoot,
    Reciprocal,
}

impl UnaryOperation {
    /// Prefix used in history entries, e.g. `√(9) = 3`.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Square => "sqr",
            Self::SquareRoot => "√",
            Self::Reciprocal => "1/",
        }
    }
}

/// What is waiting to happen when the next operator or equals arrives.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PendingOperation {
    /// A binary operator waiting for its right-hand operand.
    Binary(Operator),
    /// Left behind by equals: there is nothing to apply, only a result to
    /// chain from.
    Evaluate,
}

impl PendingOperation {
    /// The binary operator, if one is pending.
    pub fn operator(self) -> Option<Operator> {
        match self {
            Self::Binary(op) => Some(op),
            Self::Evaluate => None,
        }
    }
}
