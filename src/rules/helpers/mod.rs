use regex::Captures;

pub mod calendar;
pub mod clock;
pub mod day_specifier;
pub mod general;

// Re-export commonly used functions
pub use calendar::*;
pub use clock::*;
pub use day_specifier::match_day_specifier;

/// Text of a named capture group, lowercased, if it participated in the match.
pub fn group(caps: &Captures<'_>, name: &str) -> Option<String> {
    caps.name(name).map(|m| m.as_str().to_lowercase()).filter(|s| !s.is_empty())
}
