//! The command dispatcher.
//!
//! [`Calculator`] holds only settings. State is owned by the caller and
//! passed through by value: every operation takes a snapshot and returns the
//! next one.

use tracing::{debug, warn};

use super::command::{Command, MemoryOperation};
use super::evaluation::{
    Evaluation, evaluate_binary, evaluate_unary, format_number, is_valid_display,
};
use super::operation::{Operator, PendingOperation, UnaryOperation};
use super::settings::{ClearMode, Settings, UndefinedResult};
use super::state::CalculatorState;

#[derive(Clone, Debug, Default)]
pub struct Calculator {
    settings: Settings,
}

impl Calculator {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// The snapshot a session starts from.
    pub fn initial_state(&self) -> CalculatorState {
        CalculatorState::new(self.settings.history_limit)
    }

    /// Apply one command.
    pub fn apply(&self, state: CalculatorState, command: Command) -> CalculatorState {
        debug!(?command, display = %state.display, "Applying command");

        match command {
            Command::Digit(digit) => self.input_digit(state, digit),
            Command::Decimal => self.input_decimal(state),
            Command::Operator(op) => self.toggle_operation(state, op),
            Command::Equals => self.equals(state),
            Command::ClearEntry => self.clear_entry(state),
            Command::AllClear => self.all_clear(state),
            Command::Backspace => self.backspace(state),
            Command::Percentage => self.percentage(state),
            Command::Unary(op) => self.unary(state, op),
            Command::Memory(MemoryOperation::Store) => self.memory_store(state),
            Command::Memory(MemoryOperation::Recall) => self.memory_recall(state),
            Command::Memory(MemoryOperation::Clear) => self.memory_clear(state),
            Command::Memory(MemoryOperation::Add) => self.memory_add(state),
            Command::Memory(MemoryOperation::Subtract) => self.memory_subtract(state),
        }
    }

    /// Apply a sequence of commands in order.
    pub fn apply_all(
        &self,
        state: CalculatorState,
        commands: impl IntoIterator<Item = Command>,
    ) -> CalculatorState {
        commands
            .into_iter()
            .fold(state, |state, command| self.apply(state, command))
    }

    pub fn input_digit(&self, mut state: CalculatorState, digit: u8) -> CalculatorState {
        if digit > 9 {
            return state;
        }
        let digit = char::from(b'0' + digit);

        if state.starts_new_entry() {
            state.display = digit.to_string();
            state.waiting_for_new_value = false;
            state.result_displayed = false;
            return state;
        }

        match state.display.as_str() {
            "0" => state.display = digit.to_string(),
            "-0" => state.display = format!("-{}", digit),
            display => {
                let digits = display.chars().filter(char::is_ascii_digit).count();
                if digits >= self.settings.max_entry_digits {
                    debug!(digits, "Entry is full, ignoring digit");
                    return state;
                }
                state.display.push(digit);
            }
        }

        state
    }

    pub fn input_decimal(&self, mut state: CalculatorState) -> CalculatorState {
        if state.starts_new_entry() {
            state.display = "0.".to_string();
            state.waiting_for_new_value = false;
            state.result_displayed = false;
        } else if !state.display.contains(['.', 'e']) {
            state.display.push('.');
        }

        state
    }

    pub fn clear_entry(&self, mut state: CalculatorState) -> CalculatorState {
        state.display = "0".to_string();
        state.result_displayed = false;

        if self.settings.clear_mode == ClearMode::Pending {
            state.previous_value = None;
            state.operation = None;
            state.waiting_for_new_value = false;
        }

        state
    }

    pub fn all_clear(&self, state: CalculatorState) -> CalculatorState {
        let mut cleared = CalculatorState::new(state.history.limit());
        if !self.settings.all_clear_resets_memory {
            cleared.memory = state.memory;
        }
        cleared
    }

    /// Remove the last character of the display. The entry flags are left as
    /// they are.
    pub fn backspace(&self, mut state: CalculatorState) -> CalculatorState {
        state.display.pop();
        if state.display.is_empty() || !is_valid_display(&state.display) {
            state.display = "0".to_string();
        }

        state
    }

    /// Operator press: evaluate what is pending if an operand has been
    /// supplied, then make `op` the pending operator.
    pub fn toggle_operation(&self, mut state: CalculatorState, op: Operator) -> CalculatorState {
        if !self.settle_pending(&mut state) {
            return state;
        }

        state.operation = Some(PendingOperation::Binary(op));
        state.waiting_for_new_value = true;
        state.result_displayed = false;
        state
    }

    /// Evaluate what is pending and leave nothing but the result behind.
    pub fn equals(&self, mut state: CalculatorState) -> CalculatorState {
        if !self.settle_pending(&mut state) {
            return state;
        }

        state.operation = Some(PendingOperation::Evaluate);
        state.waiting_for_new_value = true;
        state.result_displayed = false;
        state
    }

    pub fn percentage(&self, mut state: CalculatorState) -> CalculatorState {
        let value = state.display_value() / 100.0;
        state.display = format_number(value);
        state.waiting_for_new_value = false;
        state.result_displayed = true;
        state
    }

    pub fn square(&self, state: CalculatorState) -> CalculatorState {
        self.unary(state, UnaryOperation::Square)
    }

    pub fn square_root(&self, state: CalculatorState) -> CalculatorState {
        self.unary(state, UnaryOperation::SquareRoot)
    }

    pub fn reciprocal(&self, state: CalculatorState) -> CalculatorState {
        self.unary(state, UnaryOperation::Reciprocal)
    }

    fn unary(&self, mut state: CalculatorState, op: UnaryOperation) -> CalculatorState {
        let operand = state.display_value();
        let Some(result) = self.resolve(evaluate_unary(op, operand), op.symbol()) else {
            return state;
        };

        let result_text = format_number(result);
        state.history.push(format!(
            "{}({}) = {}",
            op.symbol(),
            format_number(operand),
            result_text
        ));
        state.display = result_text;
        state.waiting_for_new_value = false;
        state.result_displayed = true;
        state
    }

    pub fn memory_store(&self, mut state: CalculatorState) -> CalculatorState {
        let value = state.display_value();
        state.memory.store(value);
        state
    }

    /// Show the register. Like a unary result, the recalled value counts as an
    /// operand and the next digit starts a new entry.
    pub fn memory_recall(&self, mut state: CalculatorState) -> CalculatorState {
        state.display = format_number(state.memory.recall());
        state.waiting_for_new_value = false;
        state.result_displayed = true;
        state
    }

    pub fn memory_clear(&self, mut state: CalculatorState) -> CalculatorState {
        state.memory.clear();
        state
    }

    pub fn memory_add(&self, mut state: CalculatorState) -> CalculatorState {
        let value = state.display_value();
        let outcome = state.memory.add(value);
        self.settle_memory(&mut state, outcome, "M+");
        state
    }

    pub fn memory_subtract(&self, mut state: CalculatorState) -> CalculatorState {
        let value = state.display_value();
        let outcome = state.memory.subtract(value);
        self.settle_memory(&mut state, outcome, "M-");
        state
    }

    /// The register is left alone on overflow; the policy may still replace it.
    fn settle_memory(&self, state: &mut CalculatorState, outcome: Evaluation, operation: &str) {
        if outcome == Evaluation::Undefined
            && let Some(value) = self.resolve(outcome, operation)
        {
            state.memory.store(value);
        }
    }

    /// Bring `previous_value` up to date before a new operator or equals.
    ///
    /// Returns false, leaving the state untouched, when the pending operation
    /// has an undefined result that the settings say to drop.
    fn settle_pending(&self, state: &mut CalculatorState) -> bool {
        let operand_supplied = !state.waiting_for_new_value;

        match (state.previous_value, state.operation) {
            (Some(lhs), Some(PendingOperation::Binary(pending))) => {
                // Without a new operand this is an operator substitution.
                if operand_supplied {
                    let rhs = state.display_value();
                    let evaluation = evaluate_binary(lhs, pending, rhs);
                    let Some(result) = self.resolve(evaluation, pending.symbol()) else {
                        return false;
                    };
                    record_binary(state, lhs, pending, rhs, result);
                }
            }
            // Chaining onto the last result.
            (Some(_), _) if !operand_supplied => {}
            // Nothing pending, or a new entry after equals: start over from the display.
            _ => state.previous_value = Some(state.display_value()),
        }

        true
    }

    /// Turn an evaluation into the value to use, or `None` if the command
    /// should be dropped.
    fn resolve(&self, evaluation: Evaluation, operation: &str) -> Option<f64> {
        match (evaluation, self.settings.undefined_result) {
            (Evaluation::Value(value), _) => Some(value),
            (Evaluation::Undefined, UndefinedResult::Zero) => {
                debug!(operation, "Undefined result, substituting 0");
                Some(0.0)
            }
            (Evaluation::Undefined, UndefinedResult::Ignore) => {
                warn!(operation, "Undefined result, command ignored");
                None
            }
        }
    }
}

/// Write a binary result to the display and history.
fn record_binary(state: &mut CalculatorState, lhs: f64, op: Operator, rhs: f64, result: f64) {
    let result_text = format_number(result);
    state.history.push(format!(
        "{} {} {} = {}",
        format_number(lhs),
        op,
        format_number(rhs),
        result_text
    ));
    state.display = result_text;
    state.previous_value = Some(result);
}
