//! Behaviour switches for the places where calculators traditionally disagree.

use serde::{Deserialize, Serialize};

use super::history::DEFAULT_HISTORY_LIMIT;

/// Longest entry accepted by default, in digits.
pub const DEFAULT_MAX_ENTRY_DIGITS: usize = 16;

/// Upper bound for `max_entry_digits`; longer entries would overflow to infinity.
pub const MAX_ENTRY_DIGITS_LIMIT: usize = 300;

/// What `clear_entry` resets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClearMode {
    /// Only the display. A pending operation survives.
    #[default]
    Entry,
    /// The display and the pending operation.
    Pending,
}

/// How results that are not finite numbers (such as `9 ÷ 0`) are resolved.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UndefinedResult {
    /// The result is 0 and is recorded in history like any other.
    #[default]
    Zero,
    /// The command is dropped and the state stays as it was.
    Ignore,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub history_limit: usize,
    pub max_entry_digits: usize,
    pub clear_mode: ClearMode,
    pub undefined_result: UndefinedResult,
    pub all_clear_resets_memory: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            history_limit: DEFAULT_HISTORY_LIMIT,
            max_entry_digits: DEFAULT_MAX_ENTRY_DIGITS,
            clear_mode: ClearMode::default(),
            undefined_result: UndefinedResult::default(),
            all_clear_resets_memory: false,
        }
    }
}
