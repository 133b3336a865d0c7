//! Commands that drive the calculator, one per key or button.

use serde::{Deserialize, Serialize};

use super::operation::{Operator, UnaryOperation};

/// One discrete instruction to the calculator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// A digit 0-9. Anything larger is ignored.
    Digit(u8),
    Decimal,
    Operator(Operator),
    Equals,
    ClearEntry,
    AllClear,
    Backspace,
    Percentage,
    Unary(UnaryOperation),
    Memory(MemoryOperation),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MemoryOperation {
    Store,
    Recall,
    Clear,
    Add,
    Subtract,
}

impl From<Operator> for Command {
    fn from(op: Operator) -> Self {
        Self::Operator(op)
    }
}

impl From<UnaryOperation> for Command {
    fn from(op: UnaryOperation) -> Self {
        Self::Unary(op)
    }
}

impl From<MemoryOperation> for Command {
    fn from(op: MemoryOperation) -> Self {
        Self::Memory(op)
    }
}
