// coerce.rs

use std::collections::HashMap;

use crate::error::ParseBoolError;

/// Strict boolean literals: `1 t T true TRUE True` and their false twins.
pub fn parse_bool_literal(s: &str) -> Result<bool, ParseBoolError> {
    match s {
        "1" | "t" | "T" | "true" | "TRUE" | "True" => Ok(true),
        "0" | "f" | "F" | "false" | "FALSE" | "False" => Ok(false),
        _ => Err(ParseBoolError { input: s.to_string() }),
    }
}

/// Maps free-form answers to booleans.
///
/// Resolution order: strict literals, then the English `y`/`yes`/`n`/`no`
/// spellings, then the `extra` table (for answers in other languages).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoolCoercer {
    extra: HashMap<String, bool>,
}

impl BoolCoercer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_extra<I, S>(extra: I) -> Self
    where
        I: IntoIterator<Item = (S, bool)>,
        S: Into<String>,
    {
        Self {
            extra: extra.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }

    pub fn insert(&mut self, word: impl Into<String>, value: bool) -> Option<bool> {
        self.extra.insert(word.into(), value)
    }

    pub fn coerce(&self, input: &str) -> Result<bool, ParseBoolError> {
        let err = match parse_bool_literal(input) {
            Ok(v) => return Ok(v),
            Err(e) => e,
        };
        match input {
            "y" | "Y" | "yes" | "YES" | "Yes" => return Ok(true),
            "n" | "N" | "no" | "NO" | "No" => return Ok(false),
            _ => {}
        }
        self.extra.get(input).copied().ok_or(err)
    }
}
