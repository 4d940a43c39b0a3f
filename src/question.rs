// question.rs

use std::fmt::Debug;
use std::io::{self, Stdout, Write};
use std::str::FromStr;

use itertools::Itertools;

use crate::config::QuestionConfig;
use crate::error::QuestionError;
use crate::format::format_float;
use crate::reader::{LineReader, Prompt};
use crate::util::write_crlf_ignore_broken_pipe;

/// All attributes off.
pub const SET_OFF: &str = "\x1b[0m";
/// Bold on.
pub const SET_BOLD: &str = "\x1b[1m";

/// How the default answer shows up in a prompt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DefaultKind {
    None,
    /// One value, rendered bold.
    Single,
    /// An options list already highlighted by the caller.
    Multiple,
}

/// Asks typed questions, re-prompting until the answer validates.
///
/// Validation messages go to `output`; errors from the reader (including
/// interrupts) end the current question untouched.
pub struct Question<R, W = Stdout> {
    reader: R,
    output: W,
    config: QuestionConfig,
    true_string: String,
    false_string: String,
}

impl<R: LineReader> Question<R, Stdout> {
    pub fn new(reader: R, config: QuestionConfig) -> Result<Self, QuestionError> {
        Self::with_output(reader, io::stdout(), config)
    }
}

impl<R: LineReader, W: Write> Question<R, W> {
    /// Fails with [`QuestionError::Config`] unless both configured boolean
    /// strings coerce to a boolean.
    pub fn with_output(reader: R, output: W, config: QuestionConfig) -> Result<Self, QuestionError> {
        for (literal, expected) in [(&config.true_string, true), (&config.false_string, false)] {
            if let Err(source) = config.bools.coerce(literal) {
                return Err(QuestionError::Config {
                    literal: literal.clone(),
                    expected,
                    source,
                });
            }
        }
        let true_string = config.true_string.to_lowercase();
        let false_string = config.false_string.to_lowercase();
        Ok(Self {
            reader,
            output,
            config,
            true_string,
            false_string,
        })
    }

    pub fn true_string(&self) -> &str {
        &self.true_string
    }

    pub fn false_string(&self) -> &str {
        &self.false_string
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn into_parts(self) -> (R, W) {
        (self.reader, self.output)
    }

    /// Renders `text` with the question prefix, the bracketed default and
    /// the trailing separator.
    pub fn prompt(&self, text: &str, default: &str, kind: DefaultKind) -> Prompt {
        let mut rendered = format!("{}{}", self.config.prefix, text);
        let mut ansi_len = 0;
        match kind {
            DefaultKind::None => {}
            DefaultKind::Single => {
                rendered.push_str(&format!(" [{}{}{}]", SET_BOLD, default, SET_OFF));
                ansi_len = SET_BOLD.len() + SET_OFF.len();
            }
            DefaultKind::Multiple => {
                rendered.push_str(&format!(" [{}]", default));
                ansi_len = SET_BOLD.len() + SET_OFF.len();
            }
        }
        if rendered.ends_with('?') {
            rendered.push(' ');
        } else {
            rendered.push_str(": ");
        }
        Prompt::new(rendered, ansi_len)
    }

    /// Any non-empty line.
    pub fn read(&mut self, prompt: &str) -> Result<String, QuestionError> {
        let prompt = self.prompt(prompt, "", DefaultKind::None);
        loop {
            let answer = self.reader.read_line(&prompt)?;
            if !answer.is_empty() {
                return Ok(answer);
            }
        }
    }

    /// A non-empty line that does not read as a number.
    pub fn read_string(&mut self, prompt: &str) -> Result<String, QuestionError> {
        self.read_string_base(prompt, None)
    }

    pub fn read_string_default(&mut self, prompt: &str, default: &str) -> Result<String, QuestionError> {
        self.read_string_base(prompt, Some(default))
    }

    fn read_string_base(&mut self, prompt: &str, default: Option<&str>) -> Result<String, QuestionError> {
        let prompt = match default {
            Some(d) => self.prompt(prompt, d, DefaultKind::Single),
            None => self.prompt(prompt, "", DefaultKind::None),
        };
        loop {
            let answer = self.reader.read_line(&prompt)?;
            if answer.is_empty() {
                match default {
                    Some(d) => return Ok(d.to_string()),
                    None => continue,
                }
            }
            if is_numeric(&answer) {
                self.report(&format!("{}: the value has to be a string", answer))?;
                continue;
            }
            return Ok(answer);
        }
    }

    pub fn read_int(&mut self, prompt: &str) -> Result<i64, QuestionError> {
        let prompt = self.prompt(prompt, "", DefaultKind::None);
        self.read_parsed(&prompt, None, "an integer")
    }

    pub fn read_int_default(&mut self, prompt: &str, default: i64) -> Result<i64, QuestionError> {
        let prompt = self.prompt(prompt, &default.to_string(), DefaultKind::Single);
        self.read_parsed(&prompt, Some(default), "an integer")
    }

    pub fn read_float(&mut self, prompt: &str) -> Result<f64, QuestionError> {
        let prompt = self.prompt(prompt, "", DefaultKind::None);
        self.read_parsed(&prompt, None, "a float")
    }

    pub fn read_float_default(&mut self, prompt: &str, default: f64) -> Result<f64, QuestionError> {
        let shown = format_float(default, self.config.float_format, self.config.float_precision);
        let prompt = self.prompt(prompt, &shown, DefaultKind::Single);
        self.read_parsed(&prompt, Some(default), "a float")
    }

    fn read_parsed<T: FromStr + Copy>(&mut self, prompt: &Prompt, default: Option<T>, what: &str) -> Result<T, QuestionError> {
        loop {
            let input = self.reader.read_line(prompt)?;
            if input.is_empty() {
                if let Some(d) = default {
                    return Ok(d);
                }
            }
            match input.parse::<T>() {
                Ok(v) => return Ok(v),
                Err(_) => self.report(&format!("{:?}: the value has to be {}", input, what))?,
            }
        }
    }

    /// Answers with the configured boolean strings; the one matching
    /// `default` is shown bold.
    pub fn read_bool(&mut self, prompt: &str, default: bool) -> Result<bool, QuestionError> {
        let options = if default {
            format!("{}{}{}/{}", SET_BOLD, self.true_string, SET_OFF, self.false_string)
        } else {
            format!("{}/{}{}{}", self.true_string, SET_BOLD, self.false_string, SET_OFF)
        };
        let prompt = self.prompt(prompt, &options, DefaultKind::Multiple);
        loop {
            let input = self.reader.read_line(&prompt)?;
            if input.is_empty() {
                return Ok(default);
            }
            match self.config.bools.coerce(&input) {
                Ok(v) => return Ok(v),
                Err(_) => self.report(&format!("{}: the value does not represent a boolean", input))?,
            }
        }
    }

    /// One of `options`; empty input picks the first.
    pub fn read_choice<S: AsRef<str>>(&mut self, prompt: &str, options: &[S]) -> Result<String, QuestionError> {
        self.read_choice_default(prompt, options, 0)
    }

    /// One of `options`; empty input picks `options[default]`.
    ///
    /// An out-of-range `default` is a caller bug and fails with
    /// [`QuestionError::Index`] before anything is shown. Unknown answers
    /// are re-asked without a message.
    pub fn read_choice_default<S: AsRef<str>>(
        &mut self,
        prompt: &str,
        options: &[S],
        default: usize,
    ) -> Result<String, QuestionError> {
        if default >= options.len() {
            return Err(QuestionError::Index {
                index: default,
                len: options.len(),
            });
        }
        let shown = options
            .iter()
            .enumerate()
            .map(|(i, o)| {
                if i == default {
                    format!("{}{}{}", SET_BOLD, o.as_ref(), SET_OFF)
                } else {
                    o.as_ref().to_string()
                }
            })
            .join(",");
        let prompt = self.prompt(prompt, &shown, DefaultKind::Multiple);
        loop {
            let input = self.reader.read_line(&prompt)?;
            if input.is_empty() {
                return Ok(options[default].as_ref().to_string());
            }
            if options.iter().any(|o| o.as_ref() == input) {
                return Ok(input);
            }
            log::debug!("{:?} is not one of the offered choices", input);
        }
    }

    fn report(&mut self, message: &str) -> Result<(), QuestionError> {
        write_crlf_ignore_broken_pipe(&mut self.output, &self.config.err_prefix, message)?;
        Ok(())
    }
}

impl<R, W> Debug for Question<R, W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Question")
            .field("true_string", &self.true_string)
            .field("false_string", &self.false_string)
            .finish_non_exhaustive()
    }
}

fn is_numeric(s: &str) -> bool {
    s.parse::<i64>().is_ok() || s.parse::<f64>().is_ok()
}
