//! The calculator's state aggregate.

use serde::{Deserialize, Serialize};

use super::evaluation::parse_operand;
use super::history::HistoryLog;
use super::memory::MemorySlot;
use super::operation::{Operator, PendingOperation};

/// A snapshot of the calculator. Each command consumes one snapshot and
/// produces the next.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CalculatorState {
    /// Current entry or result. Always parses to a finite number.
    pub display: String,
    /// Left operand of the pending operation.
    pub previous_value: Option<f64>,
    pub operation: Option<PendingOperation>,
    /// Set by operators and equals: the next digit starts a new operand,
    /// and no right-hand operand has been supplied yet.
    pub waiting_for_new_value: bool,
    /// Set by unary operations: the next digit starts a new operand, but the
    /// displayed result already counts as one.
    pub result_displayed: bool,
    pub history: HistoryLog,
    pub memory: MemorySlot,
}

impl CalculatorState {
    /// A fresh calculator with a history of at most `history_limit` entries.
    pub fn new(history_limit: usize) -> Self {
        Self {
            display: "0".to_string(),
            previous_value: None,
            operation: None,
            waiting_for_new_value: false,
            result_displayed: false,
            history: HistoryLog::new(history_limit),
            memory: MemorySlot::default(),
        }
    }

    /// The displayed value as a number.
    pub fn display_value(&self) -> f64 {
        parse_operand(&self.display)
    }

    /// The pending binary operator, if any.
    pub fn pending_operator(&self) -> Option<Operator> {
        self.operation.and_then(PendingOperation::operator)
    }

    /// Whether the next digit replaces the display rather than extending it.
    pub fn starts_new_entry(&self) -> bool {
        self.waiting_for_new_value || self.result_displayed
    }
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::new(super::history::DEFAULT_HISTORY_LIMIT)
    }
}
