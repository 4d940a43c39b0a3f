// config.rs
//
// Session settings. Build them once, before the first `Question` or
// `History` is created; nothing here is read again after construction.

use crate::coerce::BoolCoercer;
use crate::format::FloatFormat;

pub const DEFAULT_HISTORY_CAPACITY: usize = 500;
pub const DEFAULT_FILE_MODE: u32 = 0o600;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionConfig {
    /// Placed before every question.
    pub prefix: String,
    /// Placed before every validation message.
    pub err_prefix: String,
    pub true_string: String,
    pub false_string: String,
    pub float_format: FloatFormat,
    /// `None` renders the shortest exact representation.
    pub float_precision: Option<usize>,
    pub bools: BoolCoercer,
}

impl Default for QuestionConfig {
    fn default() -> Self {
        Self {
            prefix: " + ".to_string(),
            err_prefix: "  ".to_string(),
            true_string: "y".to_string(),
            false_string: "n".to_string(),
            float_format: FloatFormat::General,
            float_precision: None,
            bools: BoolCoercer::new(),
        }
    }
}

impl QuestionConfig {
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn with_err_prefix(mut self, err_prefix: impl Into<String>) -> Self {
        self.err_prefix = err_prefix.into();
        self
    }

    pub fn with_bool_strings(mut self, t: impl Into<String>, f: impl Into<String>) -> Self {
        self.true_string = t.into();
        self.false_string = f.into();
        self
    }

    pub fn with_float(mut self, format: FloatFormat, precision: Option<usize>) -> Self {
        self.float_format = format;
        self.float_precision = precision;
        self
    }

    pub fn with_bools(mut self, bools: BoolCoercer) -> Self {
        self.bools = bools;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryConfig {
    pub capacity: usize,
    /// Permission bits used when the history file is created.
    pub file_mode: u32,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_HISTORY_CAPACITY,
            file_mode: DEFAULT_FILE_MODE,
        }
    }
}
