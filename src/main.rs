//! `keypad` command-line entry point.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use keypad::calculator::Calculator;
use keypad::config::{default_config_path, load_settings, validate};
use keypad::session::{OutputFormat, Session};

#[derive(Parser, Debug)]
#[command(name = "keypad", version, about = "Four-function calculator with history and memory")]
struct Cli {
    /// Config file [default: <config dir>/keypad/config.toml]
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Number of history entries to keep (overrides the config file)
    #[arg(long, value_name = "N")]
    history_limit: Option<usize>,

    /// Print snapshots as JSON
    #[arg(long)]
    json: bool,

    /// Keys to press, e.g. `7 '*' 8 =`. Without keys, reads lines from stdin.
    #[arg(allow_hyphen_values = true)]
    keys: Vec<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let mut settings = match cli.config.clone().or_else(default_config_path) {
        Some(path) => load_settings(&path)
            .with_context(|| format!("Failed to load settings from {}", path.display()))?,
        None => Default::default(),
    };
    if let Some(limit) = cli.history_limit {
        settings.history_limit = limit;
        validate(&settings)?;
    }
    tracing::debug!(?settings, "Starting calculator");

    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };
    let mut session = Session::new(Calculator::new(settings), format);

    if cli.keys.is_empty() {
        let stdin = io::stdin();
        return session.run(stdin.lock(), io::stdout().lock());
    }

    session.apply_keys(&cli.keys);
    let mut stdout = io::stdout().lock();
    stdout.write_all(session.render(true)?.as_bytes())?;
    stdout.flush()?;

    Ok(())
}
