// repl.rs

use std::io::Write;
use std::path::Path;

use askline::{History, LineReader, Prompt, Question, QuestionConfig, QuestionError, ReaderError, RustylineReader};

#[derive(Debug, PartialEq)]
pub struct Answers {
    pub name: String,
    pub age: i64,
    pub ratio: f64,
    pub color: String,
    pub subscribe: bool,
}

pub fn ask_all<R: LineReader, W: Write>(q: &mut Question<R, W>) -> Result<Answers, QuestionError> {
    Ok(Answers {
        name: q.read_string("What is your name?")?,
        age: q.read_int_default("Age", 30)?,
        ratio: q.read_float_default("Coffee to milk ratio", 0.5)?,
        color: q.read_choice_default("Favourite color", &["red", "green", "blue"], 1)?,
        subscribe: q.read_bool("Subscribe to the newsletter?", false)?,
    })
}

/// Echoes every line until interrupt or end of input. Accepted lines go to
/// `history` and to the reader's own recall list.
pub fn echo_loop<R: LineReader, W: Write>(
    reader: &mut R,
    history: &mut History,
    mut out: W,
) -> Result<(), ReaderError> {
    let prompt = Prompt::new("$ ", 0);
    loop {
        match reader.read_line(&prompt) {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                reader.add_history(&line);
                history.add(line.as_str());
                write!(out, "{}\r\n", line.trim())?;
                out.flush()?;
            }
            Err(err) if err.is_cancellation() => return Ok(()),
            Err(err) => return Err(err),
        }
    }
}

pub fn start_repl(histfile: &Path) -> anyhow::Result<()> {
    let mut question = Question::new(RustylineReader::new()?, QuestionConfig::default())?;
    match ask_all(&mut question) {
        Ok(answers) => println!("{:?}", answers),
        Err(QuestionError::Reader(err)) if err.is_cancellation() => return Ok(()),
        Err(err) => return Err(err.into()),
    }

    let mut history = History::open(histfile)?;
    history.load()?;
    let mut reader = RustylineReader::with_history(&history)?;
    let result = echo_loop(&mut reader, &mut history, std::io::stdout());
    history.save()?;
    Ok(result?)
}
