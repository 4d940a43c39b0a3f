// error.rs

use std::io;

use rustyline::error::ReadlineError;
use thiserror::Error;

/// Input that none of the boolean rules recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("parsing {input:?}: invalid boolean syntax")]
pub struct ParseBoolError {
    pub input: String,
}

/// Errors surfaced by a [`LineReader`](crate::reader::LineReader).
///
/// `Interrupted` and `Eof` are the cancellation values: every read loop
/// returns them untouched.
#[derive(Debug, Error)]
pub enum ReaderError {
    #[error("interrupted")]
    Interrupted,
    #[error("end of input")]
    Eof,
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("line editor error: {0}")]
    Editor(String),
}

impl ReaderError {
    pub fn is_cancellation(&self) -> bool {
        matches!(self, ReaderError::Interrupted | ReaderError::Eof)
    }
}

impl From<ReadlineError> for ReaderError {
    fn from(err: ReadlineError) -> Self {
        match err {
            ReadlineError::Interrupted => ReaderError::Interrupted,
            ReadlineError::Eof => ReaderError::Eof,
            ReadlineError::Io(e) => ReaderError::Io(e),
            other => ReaderError::Editor(other.to_string()),
        }
    }
}

#[derive(Debug, Error)]
pub enum QuestionError {
    /// A configured boolean literal is not itself a boolean.
    #[error("the string {literal:?} does not represent a boolean '{expected}'")]
    Config {
        literal: String,
        expected: bool,
        #[source]
        source: ParseBoolError,
    },
    #[error("choice {index} is not in a list of {len} options")]
    Index { index: usize, len: usize },
    #[error(transparent)]
    Reader(#[from] ReaderError),
    #[error("cannot write to output: {0}")]
    Output(#[from] io::Error),
}

#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("history capacity must be greater than zero, got {0}")]
    Size(usize),
    #[error("history file: {0}")]
    Io(#[from] io::Error),
}
