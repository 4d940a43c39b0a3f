// lib.rs
//
// Typed question prompts and a persistent, bounded input history for
// line-oriented terminal programs. Line editing itself is delegated to a
// `LineReader`; `RustylineReader` is the interactive one.

pub mod coerce;
pub mod config;
pub mod error;
pub mod format;
pub mod history;
pub mod question;
pub mod reader;
pub mod util;

pub use coerce::BoolCoercer;
pub use config::{HistoryConfig, QuestionConfig};
pub use error::{HistoryError, ParseBoolError, QuestionError, ReaderError};
pub use format::FloatFormat;
pub use history::History;
pub use question::{DefaultKind, Question};
pub use reader::{LineReader, Prompt, RustylineReader, ScriptedReader};
