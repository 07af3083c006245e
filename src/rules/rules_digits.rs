//! Bare numeric hours: "3", "11"

use crate::engine::BucketMask;
use crate::range::DateTimeRange;
use crate::rules::helpers::at_time;
use crate::Rule;

/// A lone one- or two-digit number is an hour on the message day, not a day
/// of the month. Hours outside 1..=22 are not claimed.
pub fn rule_bare_hour() -> Rule {
    rule! {
        name: "<hour>",
        buckets: BucketMask::HAS_DIGITS.bits(),
        prod: |phrase, ctx| {
            let phrase = phrase.trim();
            if phrase.is_empty() || phrase.len() > 2 || !phrase.bytes().all(|b| b.is_ascii_digit()) {
                return Ok(None);
            }

            let hour: u32 = phrase.parse()?;
            if !(1..23).contains(&hour) {
                return Ok(None);
            }

            Ok(Some(DateTimeRange::instant(at_time(ctx.message_day, hour, 0)?)))
        }
    }
}
