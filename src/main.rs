use std::io::{self, IsTerminal};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use tracing::info;

use jokegen::cli::Cli;
use jokegen::config::Settings;
use jokegen::jokes::JokeSource;
use jokegen::logging;
use jokegen::session::{JokeSession, LinePrompter, Prompter, ReaderPrompter};

/// Main entry point for jokegen
///
/// Loads settings, opens the joke file and runs one interactive session on
/// stdin/stdout. Any startup failure (bad configuration, unreadable joke
/// file) is reported on stderr with a non-zero exit code.
fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {:#}", "error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let mut settings = Settings::load(&cli.config_dir).context("failed to load settings")?;
    cli.apply(&mut settings);
    settings.validate().context("invalid settings")?;

    let _guard = logging::init(&settings.logging);
    info!("jokegen starting up");
    info!("Joke file: {}", settings.jokes.file.display());

    let source = JokeSource::open(&settings.jokes.file)
        .with_context(|| format!("failed to open joke file {}", settings.jokes.file.display()))?;

    let mut prompter: Box<dyn Prompter> = if io::stdin().is_terminal() {
        Box::new(LinePrompter::new()?)
    } else {
        Box::new(ReaderPrompter::new(io::stdin().lock(), io::stdout()))
    };

    let mut session = JokeSession::new(source);
    session.run_loop(prompter.as_mut(), &mut io::stdout())?;

    Ok(())
}
