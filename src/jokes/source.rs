use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use thiserror::Error;
use tracing::{debug, info};

/// Errors returned when pulling the next joke from a [`JokeSource`].
#[derive(Debug, Error)]
pub enum SourceError {
    /// Every line has already been delivered.
    #[error("no more jokes")]
    Exhausted,
    /// The underlying reader failed.
    #[error("failed to read joke: {0}")]
    Read(#[from] io::Error),
}

/// A lazy, front-to-back cursor over line-delimited jokes.
///
/// Lines are read one at a time on demand and handed out exactly once,
/// keeping the line terminator as stored. Once the reader reports end of
/// input the source stays exhausted for good.
pub struct JokeSource<R> {
    reader: R,
    delivered: usize,
    exhausted: bool,
}

impl JokeSource<BufReader<File>> {
    /// Opens a joke file for reading.
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        info!("Opened joke file: {}", path.display());
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> JokeSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            delivered: 0,
            exhausted: false,
        }
    }

    /// Advances the cursor and returns the next line.
    pub fn next_joke(&mut self) -> Result<String, SourceError> {
        if self.exhausted {
            return Err(SourceError::Exhausted);
        }

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            debug!("Joke source exhausted after {} lines", self.delivered);
            self.exhausted = true;
            return Err(SourceError::Exhausted);
        }

        self.delivered += 1;
        Ok(line)
    }

    /// Number of lines handed out so far.
    pub fn delivered(&self) -> usize {
        self.delivered
    }
}
