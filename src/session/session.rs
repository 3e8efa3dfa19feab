use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use tracing::{debug, info};

use super::prompt::Prompter;
use crate::jokes::{JokeSource, SourceError};

/// Question asked before every joke.
pub const PROMPT: &str = "Wanna hear a joke? Y/n ";

/// Printed in place of a joke once the source has run dry.
pub const EXHAUSTED_MESSAGE: &str = "Sorry... No more jokes :(";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    AwaitingInput,
    Terminated,
}

/// Counters reported when the loop ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub jokes_told: usize,
    pub exhausted_requests: usize,
}

/// Returns true only for an answer whose lowercase form is exactly `y`.
///
/// Surrounding whitespace is significant: `" y"` is not a yes.
pub fn is_yes(answer: &str) -> bool {
    answer.to_lowercase() == "y"
}

/// One interactive run over a joke source.
pub struct JokeSession<R> {
    source: JokeSource<R>,
    state: SessionState,
    summary: SessionSummary,
}

impl<R: BufRead> JokeSession<R> {
    pub fn new(source: JokeSource<R>) -> Self {
        Self {
            source,
            state: SessionState::AwaitingInput,
            summary: SessionSummary::default(),
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn summary(&self) -> SessionSummary {
        self.summary
    }

    /// Prints the next joke to `out` and returns it.
    ///
    /// When the source is exhausted the fixed apology is printed instead and
    /// `None` is returned. Only a failing reader or writer is an error.
    pub fn produce_next_joke<W: Write>(&mut self, out: &mut W) -> Result<Option<String>> {
        match self.source.next_joke() {
            Ok(joke) => {
                writeln!(out, "{joke}").context("failed to print joke")?;
                self.summary.jokes_told = self.source.delivered();
                debug!("Told joke #{}", self.summary.jokes_told);
                Ok(Some(joke))
            }
            Err(SourceError::Exhausted) => {
                writeln!(out, "{EXHAUSTED_MESSAGE}").context("failed to print joke")?;
                self.summary.exhausted_requests += 1;
                debug!("Joke requested after exhaustion");
                Ok(None)
            }
            Err(e) => Err(e).context("failed to read the next joke"),
        }
    }

    /// Asks for jokes until the user answers anything other than `y`.
    ///
    /// End of input counts as a quit. A session that has already
    /// terminated returns its summary without prompting again.
    pub fn run_loop<P, W>(&mut self, prompter: &mut P, out: &mut W) -> Result<SessionSummary>
    where
        P: Prompter + ?Sized,
        W: Write,
    {
        info!("Starting joke session");

        while self.state == SessionState::AwaitingInput {
            match prompter.ask(PROMPT)? {
                Some(answer) if is_yes(&answer) => {
                    self.produce_next_joke(out)?;
                    out.flush().context("failed to flush output")?;
                }
                answer => {
                    debug!("Quitting on answer {:?}", answer);
                    self.state = SessionState::Terminated;
                }
            }
        }

        info!(
            "Session ended: {} jokes told, {} requests after exhaustion",
            self.summary.jokes_told, self.summary.exhausted_requests
        );
        Ok(self.summary)
    }
}
