// reader.rs

use std::collections::VecDeque;

use rustyline::{Config, DefaultEditor};

use crate::error::ReaderError;
use crate::history::History;

/// A rendered prompt.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Prompt {
    pub text: String,
    /// Bytes of `text` that are terminal styling rather than visible glyphs.
    pub ansi_len: usize,
}

impl Prompt {
    pub fn new(text: impl Into<String>, ansi_len: usize) -> Self {
        Self {
            text: text.into(),
            ansi_len,
        }
    }

    /// Columns the prompt occupies once styling escapes are dropped.
    pub fn visible_len(&self) -> usize {
        self.text.chars().count().saturating_sub(self.ansi_len)
    }
}

/// Something that turns a prompt into one completed line of input.
pub trait LineReader {
    fn read_line(&mut self, prompt: &Prompt) -> Result<String, ReaderError>;

    /// Offers an accepted line for later recall. Readers without recall
    /// ignore it.
    fn add_history(&mut self, _line: &str) {}
}

impl<T: LineReader + ?Sized> LineReader for &mut T {
    fn read_line(&mut self, prompt: &Prompt) -> Result<String, ReaderError> {
        (**self).read_line(prompt)
    }

    fn add_history(&mut self, line: &str) {
        (**self).add_history(line)
    }
}

/// Interactive reader backed by rustyline.
pub struct RustylineReader {
    editor: DefaultEditor,
}

impl RustylineReader {
    pub fn new() -> Result<Self, ReaderError> {
        let config = Config::builder()
            .auto_add_history(false)
            .history_ignore_space(true)
            .build();
        let editor = DefaultEditor::with_config(config)?;
        Ok(Self { editor })
    }

    /// A reader whose up/down recall starts with the entries of `history`.
    pub fn with_history(history: &History) -> Result<Self, ReaderError> {
        let mut reader = Self::new()?;
        for entry in history.iter() {
            reader.add_history(entry);
        }
        Ok(reader)
    }
}

impl LineReader for RustylineReader {
    fn read_line(&mut self, prompt: &Prompt) -> Result<String, ReaderError> {
        Ok(self.editor.readline(&prompt.text)?)
    }

    fn add_history(&mut self, line: &str) {
        if let Err(e) = self.editor.add_history_entry(line) {
            log::warn!("cannot add {:?} to line editor history: {}", line, e);
        }
    }
}

#[derive(Debug)]
enum Scripted {
    Line(String),
    Interrupt,
}

/// Replays prepared input. Returns [`ReaderError::Eof`] once the script is
/// used up.
#[derive(Debug, Default)]
pub struct ScriptedReader {
    script: VecDeque<Scripted>,
    prompts: Vec<String>,
}

impl ScriptedReader {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            script: lines.into_iter().map(|l| Scripted::Line(l.into())).collect(),
            prompts: Vec::new(),
        }
    }

    pub fn push_line(&mut self, line: impl Into<String>) -> &mut Self {
        self.script.push_back(Scripted::Line(line.into()));
        self
    }

    pub fn push_interrupt(&mut self) -> &mut Self {
        self.script.push_back(Scripted::Interrupt);
        self
    }

    /// Prompt texts shown so far, one per read.
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl LineReader for ScriptedReader {
    fn read_line(&mut self, prompt: &Prompt) -> Result<String, ReaderError> {
        self.prompts.push(prompt.text.clone());
        match self.script.pop_front() {
            Some(Scripted::Line(line)) => Ok(line),
            Some(Scripted::Interrupt) => Err(ReaderError::Interrupted),
            None => Err(ReaderError::Eof),
        }
    }
}
