mod source;

pub use source::{JokeSource, SourceError};
