//! What the front end shows of a calculator state.

use serde::Serialize;

use crate::calculator::{CalculatorState, format_number};

/// A read-only view of a [`CalculatorState`].
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Snapshot {
    /// The entry or result being shown.
    pub display: String,
    /// `"<previous> <operator>"` while a binary operation is pending.
    pub preview: Option<String>,
    /// Completed calculations, newest first.
    pub history: Vec<String>,
    /// The memory register, formatted like the display.
    pub memory: String,
    /// Whether the memory register holds something other than 0.
    pub has_memory: bool,
}

impl Snapshot {
    pub fn from_state(state: &CalculatorState) -> Self {
        let preview = match (state.previous_value, state.pending_operator()) {
            (Some(previous), Some(op)) => Some(format!("{} {}", format_number(previous), op)),
            _ => None,
        };
        let memory = state.memory.recall();

        Self {
            display: state.display.clone(),
            preview,
            history: state.history.iter().map(str::to_string).collect(),
            memory: format_number(memory),
            has_memory: memory != 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::{Calculator, commands_for_line};

    fn snapshot_after(keys: &str) -> Snapshot {
        let calculator = Calculator::default();
        let state = calculator.apply_all(calculator.initial_state(), commands_for_line(keys));
        Snapshot::from_state(&state)
    }

    #[test]
    fn test_preview_while_operator_pending() {
        let snapshot = snapshot_after("12 × 3");
        assert_eq!(snapshot.preview.as_deref(), Some("12 ×"));
        assert_eq!(snapshot.display, "3");
    }

    #[test]
    fn test_no_preview_after_equals() {
        let snapshot = snapshot_after("12 × 3 =");
        assert_eq!(snapshot.preview, None);
        assert_eq!(snapshot.display, "36");
        assert_eq!(snapshot.history, ["12 × 3 = 36"]);
    }

    #[test]
    fn test_memory_flag() {
        assert!(!snapshot_after("5").has_memory);

        let snapshot = snapshot_after("2.5 ms");
        assert!(snapshot.has_memory);
        assert_eq!(snapshot.memory, "2.5");
    }
}
