//! Error types for phrase conversion.
//!
//! None of these are fatal to a parse run: the pipeline logs a rule's error and
//! moves on to the next rule. They exist so that rules can use `?` on numeric
//! and calendar construction instead of hand-threading `Option`s.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    #[error("Invalid number: {0}")]
    InvalidNumber(#[from] std::num::ParseIntError),

    #[error("Invalid date: {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },

    #[error("Invalid clock time: {hour:02}:{minute:02}")]
    InvalidTime { hour: u32, minute: u32 },

    #[error("Fallback parser rejected phrase: {0}")]
    Fallback(String),

    #[error("Invalid cleaning pattern: {0}")]
    Pattern(String),
}

impl From<regex::Error> for ConvertError {
    fn from(err: regex::Error) -> Self {
        ConvertError::Pattern(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;
