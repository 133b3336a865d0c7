//! Calculator engine.
//!
//! This module provides:
//! - The state snapshot and the dispatcher that moves it from one command to the next
//! - Binary and unary arithmetic with a configurable answer for undefined results
//! - A bounded calculation history and a memory register
//! - Mapping from raw keys to commands

mod command;
mod engine;
mod evaluation;
mod history;
mod input;
mod memory;
mod operation;
mod settings;
mod state;

pub use command::{Command, MemoryOperation};
pub use engine::Calculator;
pub use evaluation::{Evaluation, evaluate_binary, evaluate_unary, format_number, parse_operand};
pub use history::{DEFAULT_HISTORY_LIMIT, HistoryLog};
pub use input::{command_for_key, commands_for_line, split_keys};
pub use memory::MemorySlot;
pub use operation::{Operator, PendingOperation, UnaryOperation};
pub use settings::{
    ClearMode, DEFAULT_MAX_ENTRY_DIGITS, MAX_ENTRY_DIGITS_LIMIT, Settings, UndefinedResult,
};
pub use state::CalculatorState;
