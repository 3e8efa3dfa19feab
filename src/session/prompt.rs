use std::io::{BufRead, Write};

use anyhow::{anyhow, Context, Result};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::debug;

/// Source of user answers for the session loop.
pub trait Prompter {
    /// Shows `prompt` and waits for one line of input.
    ///
    /// Returns `Ok(None)` when input has ended (EOF, Ctrl-C, Ctrl-D).
    /// The returned line has its terminator removed but is otherwise
    /// untouched.
    fn ask(&mut self, prompt: &str) -> Result<Option<String>>;
}

/// Interactive terminal prompter backed by rustyline.
pub struct LinePrompter {
    editor: DefaultEditor,
}

impl LinePrompter {
    pub fn new() -> Result<Self> {
        let editor = DefaultEditor::new().map_err(|e| anyhow!("failed to set up line editor: {e}"))?;
        Ok(Self { editor })
    }
}

impl Prompter for LinePrompter {
    fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                if !line.is_empty() {
                    let _ = self.editor.add_history_entry(line.as_str());
                }
                Ok(Some(line))
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                debug!("Input closed");
                Ok(None)
            }
            Err(e) => Err(anyhow!("failed to read answer: {e}")),
        }
    }
}

/// Prompter over plain reader/writer pairs, for piped stdin.
pub struct ReaderPrompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ReaderPrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> Prompter for ReaderPrompter<R, W> {
    fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{prompt}").context("failed to write prompt")?;
        self.output.flush().context("failed to flush prompt")?;

        let mut line = String::new();
        if self.input.read_line(&mut line).context("failed to read answer")? == 0 {
            debug!("Input closed");
            return Ok(None);
        }

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }
}
