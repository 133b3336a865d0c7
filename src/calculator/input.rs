//! Key mapping for the calculator.
//!
//! Turns raw key names (as a keyboard handler or a line of typed input would
//! produce them) into [`Command`]s. Keys that mean nothing to the calculator
//! map to `None` and are dropped.

use lazy_static::lazy_static;
use regex::Regex;

use super::command::{Command, MemoryOperation};
use super::operation::{Operator, UnaryOperation};

lazy_static! {
    /// Splits a typed line into keys.
    /// Named keys are tried before single characters, longer names before
    /// their prefixes. Anything else becomes a one-character key of its own.
    static ref KEY_TOKEN: Regex = Regex::new(
        r"(?i)escape|esc|enter|backspace|delete|del|sqrt|sqr|inv|m[sSrRcC+\-]|\d|[.=%+\-*/×÷√]|\S"
    ).unwrap();
}

/// Map a single key to the command it triggers.
pub fn command_for_key(key: &str) -> Option<Command> {
    let key = key.trim();
    let lower = key.to_lowercase();

    if let Some(op) = Operator::from_symbol(key) {
        return Some(Command::Operator(op));
    }

    let command = match lower.as_str() {
        "." => Command::Decimal,
        "=" | "enter" => Command::Equals,
        "escape" | "esc" => Command::AllClear,
        "backspace" => Command::Backspace,
        "c" | "delete" | "del" => Command::ClearEntry,
        "%" => Command::Percentage,
        "sqr" => UnaryOperation::Square.into(),
        "sqrt" | "√" => UnaryOperation::SquareRoot.into(),
        "inv" => UnaryOperation::Reciprocal.into(),
        "ms" => MemoryOperation::Store.into(),
        "mr" => MemoryOperation::Recall.into(),
        "mc" => MemoryOperation::Clear.into(),
        "m+" => MemoryOperation::Add.into(),
        "m-" => MemoryOperation::Subtract.into(),
        _ => return digit_command(key),
    };

    Some(command)
}

fn digit_command(key: &str) -> Option<Command> {
    let mut chars = key.chars();
    let digit = chars.next()?.to_digit(10)?;
    if chars.next().is_some() {
        return None;
    }
    u8::try_from(digit).ok().map(Command::Digit)
}

/// Split a line of typed input into keys.
///
/// Whitespace separates keys but is not required: `12+3=` and `1 2 + 3 =`
/// give the same keys.
pub fn split_keys(line: &str) -> Vec<&str> {
    KEY_TOKEN.find_iter(line).map(|m| m.as_str()).collect()
}

/// Split a line and map every key, dropping the ones with no command.
pub fn commands_for_line(line: &str) -> Vec<Command> {
    split_keys(line)
        .into_iter()
        .filter_map(|key| {
            let command = command_for_key(key);
            if command.is_none() {
                tracing::debug!(key, "Ignoring unrecognized key");
            }
            command
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_and_decimal() {
        assert_eq!(command_for_key("0"), Some(Command::Digit(0)));
        assert_eq!(command_for_key("9"), Some(Command::Digit(9)));
        assert_eq!(command_for_key("."), Some(Command::Decimal));
        assert_eq!(command_for_key("10"), None);
    }

    #[test]
    fn test_operator_spellings() {
        assert_eq!(command_for_key("*"), Some(Operator::Multiply.into()));
        assert_eq!(command_for_key("×"), Some(Operator::Multiply.into()));
        assert_eq!(command_for_key("/"), Some(Operator::Divide.into()));
        assert_eq!(command_for_key("÷"), Some(Operator::Divide.into()));
        assert_eq!(command_for_key("-"), Some(Operator::Subtract.into()));
    }

    #[test]
    fn test_named_keys_case_insensitive() {
        assert_eq!(command_for_key("Enter"), Some(Command::Equals));
        assert_eq!(command_for_key("Escape"), Some(Command::AllClear));
        assert_eq!(command_for_key("Backspace"), Some(Command::Backspace));
        assert_eq!(command_for_key("M+"), Some(MemoryOperation::Add.into()));
        assert_eq!(command_for_key("MR"), Some(MemoryOperation::Recall.into()));
    }

    #[test]
    fn test_unrecognized_keys_ignored() {
        assert_eq!(command_for_key("Shift"), None);
        assert_eq!(command_for_key("a"), None);
        assert_eq!(command_for_key(""), None);
        assert_eq!(command_for_key("^"), None);
    }

    #[test]
    fn test_split_compact_line() {
        assert_eq!(split_keys("12+3="), ["1", "2", "+", "3", "="]);
        assert_eq!(split_keys("7 * 8 enter"), ["7", "*", "8", "enter"]);
    }

    #[test]
    fn test_split_named_keys() {
        assert_eq!(split_keys("9 sqrt"), ["9", "sqrt"]);
        assert_eq!(split_keys("4sqr"), ["4", "sqr"]);
        assert_eq!(split_keys("5 ms esc mr"), ["5", "ms", "esc", "mr"]);
        assert_eq!(split_keys("3m+"), ["3", "m+"]);
        assert_eq!(split_keys("1.5÷0"), ["1", ".", "5", "÷", "0"]);
    }

    #[test]
    fn test_commands_for_line_drops_unknown() {
        assert_eq!(
            commands_for_line("2 ^ 3"),
            [Command::Digit(2), Command::Digit(3)]
        );
    }
}
