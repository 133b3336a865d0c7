//! Terminal session: feeds typed lines to the calculator and prints the
//! result after each one.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};

use crate::calculator::{Calculator, CalculatorState, Command, commands_for_line};
use crate::ui::{Snapshot, render_display, render_history, render_json};

const HELP: &str = "\
Keys: 0-9 . + - * / × ÷ = enter % sqr sqrt inv ms mr mc m+ m- c backspace esc
Keys can be run together (12+3=) or separated by spaces.
Commands: :history  :help  :q
";

/// How snapshots are printed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// What to do after a line has been handled.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LineOutcome {
    Print(String),
    Quit,
}

pub struct Session {
    calculator: Calculator,
    state: CalculatorState,
    format: OutputFormat,
}

impl Session {
    pub fn new(calculator: Calculator, format: OutputFormat) -> Self {
        let state = calculator.initial_state();
        Self {
            calculator,
            state,
            format,
        }
    }

    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// Apply a list of keys as given on the command line.
    pub fn apply_keys<S: AsRef<str>>(&mut self, keys: &[S]) {
        let commands = keys
            .iter()
            .flat_map(|key| commands_for_line(key.as_ref()))
            .collect::<Vec<_>>();
        self.apply_commands(commands);
    }

    fn apply_commands(&mut self, commands: Vec<Command>) {
        let state = std::mem::take(&mut self.state);
        self.state = self.calculator.apply_all(state, commands);
    }

    /// Handle one line of interactive input.
    pub fn handle_line(&mut self, line: &str) -> Result<LineOutcome> {
        let line = line.trim();

        if let Some(command) = line.strip_prefix(':') {
            return Ok(match command.trim() {
                "q" | "quit" => LineOutcome::Quit,
                "help" => LineOutcome::Print(HELP.to_string()),
                "history" => LineOutcome::Print(render_history(&self.snapshot())),
                other => LineOutcome::Print(format!("Unknown command :{} (try :help)\n", other)),
            });
        }

        if line.is_empty() {
            return Ok(LineOutcome::Print(String::new()));
        }

        self.apply_commands(commands_for_line(line));
        self.render(false).map(LineOutcome::Print)
    }

    /// Render the current state. `with_history` adds the history list in text mode;
    /// JSON output always carries it.
    pub fn render(&self, with_history: bool) -> Result<String> {
        let snapshot = self.snapshot();

        match self.format {
            OutputFormat::Json => {
                let mut json = render_json(&snapshot).context("Failed to serialize snapshot")?;
                json.push('\n');
                Ok(json)
            }
            OutputFormat::Text if with_history && !snapshot.history.is_empty() => Ok(format!(
                "{}\n{}",
                render_display(&snapshot),
                render_history(&snapshot)
            )),
            OutputFormat::Text => Ok(render_display(&snapshot)),
        }
    }

    /// Read lines from `input` until it ends or the user quits.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<()> {
        output.write_all(self.render(false)?.as_bytes())?;
        output.flush()?;

        for line in input.lines() {
            let line = line.context("Failed to read input")?;

            match self.handle_line(&line)? {
                LineOutcome::Quit => break,
                LineOutcome::Print(text) => output.write_all(text.as_bytes())?,
            }
            output.flush()?;
        }

        Ok(())
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot::from_state(&self.state)
    }
}
