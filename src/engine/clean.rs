//! Phrase pre-cleaning.

use regex::Regex;

/// Characters removed from a phrase before rules see it.
pub const DEFAULT_CLEAN_PATTERN: &str = r"[\(,\)]";

/// Remove `pattern` matches, fold "a.m."/"p.m." into "am"/"pm", lowercase.
pub fn clean_phrase(phrase: &str, pattern: &Regex) -> String {
    let stripped = pattern.replace_all(phrase, "");
    stripped
        .replace(" a.m.", "am")
        .replace("a.m.", "am")
        .replace(" p.m.", "pm")
        .replace("p.m.", "pm")
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_pattern() -> Regex {
        Regex::new(DEFAULT_CLEAN_PATTERN).unwrap()
    }

    #[test]
    fn strips_parentheses_and_commas() {
        assert_eq!(clean_phrase("Friday (Jan 12), 3pm", &default_pattern()), "friday jan 12 3pm");
    }

    #[test]
    fn folds_dotted_meridiem_markers() {
        assert_eq!(clean_phrase("Tomorrow at 10 a.m.", &default_pattern()), "tomorrow at 10am");
        assert_eq!(clean_phrase("4p.m. or later", &default_pattern()), "4pm or later");
    }

    #[test]
    fn custom_pattern_replaces_default() {
        let pattern = Regex::new(r"!+").unwrap();
        assert_eq!(clean_phrase("ASAP!!", &pattern), "asap");
    }
}
