use chrono::Weekday;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

/// Month names and abbreviations, in the alternation order used by patterns.
pub(crate) const MONTH_NAMES: &[(&str, u32)] = &[
    ("jan", 1),
    ("january", 1),
    ("feb", 2),
    ("february", 2),
    ("mar", 3),
    ("march", 3),
    ("apr", 4),
    ("april", 4),
    ("may", 5),
    ("jun", 6),
    ("june", 6),
    ("jul", 7),
    ("july", 7),
    ("aug", 8),
    ("august", 8),
    ("sep", 9),
    ("september", 9),
    ("oct", 10),
    ("october", 10),
    ("nov", 11),
    ("november", 11),
    ("dec", 12),
    ("december", 12),
];

/// Short month forms accepted after "beginning/middle/end of".
pub(crate) const MONTH_ABBREVIATIONS: &str = "jan|feb|mar|apr|may|june|july|aug|sep|oct|nov|dec";

pub(crate) const ASAP_KEYWORDS: &[&str] = &["asap", "as soon as possible", "immediate", "immediately"];

/// Part-of-day words handled by the day-part rules.
pub(crate) const PARTS_OF_DAY: &[&str] = &["morning", "afternoon", "evening"];

pub(crate) static MONTH_NUMBER: Lazy<HashMap<&'static str, u32>> = Lazy::new(|| MONTH_NAMES.iter().copied().collect());

/// `jan|january|feb|...` for embedding in larger patterns.
pub(crate) static MONTH_ALTERNATION: Lazy<String> =
    Lazy::new(|| MONTH_NAMES.iter().map(|(name, _)| *name).collect::<Vec<_>>().join("|"));

pub(crate) const WEEKDAY_PATTERN: &str =
    r"mon(?:day)?|tue(?:s|sday)?|wed(?:nesday)?|thu(?:rs|rsday)?|fri(?:day)?|sat(?:urday)?|sun(?:day)?";

/// `<month> <day>` anywhere in a phrase, e.g. "feb 3", "september12".
pub(crate) static MONTH_DAY_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"(?i)(?P<month>{})\s*(?P<day>\d{{1,2}})", *MONTH_ALTERNATION)).unwrap()
});

pub(crate) fn month_number(name: &str) -> Option<u32> {
    MONTH_NUMBER.get(name.to_lowercase().as_str()).copied()
}

/// Map a weekday name or common abbreviation to a `Weekday`.
pub(crate) fn weekday_from_name(name: &str) -> Option<Weekday> {
    let lower = name.to_lowercase();
    let weekday = match lower.get(..3)? {
        "mon" => Weekday::Mon,
        "tue" => Weekday::Tue,
        "wed" => Weekday::Wed,
        "thu" => Weekday::Thu,
        "fri" => Weekday::Fri,
        "sat" => Weekday::Sat,
        "sun" => Weekday::Sun,
        _ => return None,
    };
    Some(weekday)
}

pub(crate) fn mentions_part_of_day(phrase: &str) -> bool {
    let lower = phrase.to_lowercase();
    PARTS_OF_DAY.iter().any(|part| lower.contains(part))
}

pub(crate) fn mentions_asap(phrase: &str) -> bool {
    let lower = phrase.to_lowercase();
    ASAP_KEYWORDS.iter().any(|word| lower.contains(word))
}
