// Prompt sources (terminal and plain readers)
mod prompt;

// The session loop itself
mod session;

pub use prompt::{LinePrompter, Prompter, ReaderPrompter};
pub use session::{is_yes, JokeSession, SessionState, SessionSummary, EXHAUSTED_MESSAGE, PROMPT};
