//! General-purpose parser fallback

use log::trace;

use crate::rules::helpers::general::parse_with_fallback_parser;
use crate::rules::rules_qualifiers::day_or_instant;
use crate::Rule;

/// Hand the phrase to `chrono-english`. Midnight results become whole days.
///
/// Short all-digit phrases are left alone: the general parser reads "3" as a
/// day of the month.
pub fn rule_general_parser() -> Rule {
    rule! {
        name: "general parser",
        prod: |phrase, ctx| {
            let trimmed = phrase.trim();
            if trimmed.len() <= 2 && trimmed.bytes().all(|b| b.is_ascii_digit()) {
                return Ok(None);
            }

            match parse_with_fallback_parser(trimmed, ctx.relative_base, ctx.timezone) {
                Ok(resolved) => Ok(Some(day_or_instant(resolved))),
                Err(err) => {
                    trace!("general parser declined {:?}: {}", trimmed, err);
                    Ok(None)
                }
            }
        }
    }
}
