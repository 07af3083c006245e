//! "asap", "as soon as possible", "immediately"

use crate::range::DateTimeRange;
use crate::rules::lexicon::ASAP_KEYWORDS;
use crate::Rule;

/// Urgency keywords mean the message day. With exact matching the whole
/// phrase must be a keyword; otherwise containing one is enough.
pub fn rule_asap() -> Rule {
    rule! {
        name: "asap",
        prod: |phrase, ctx| {
            let lower = phrase.to_lowercase();
            let lower = lower.trim();

            let matched = if ctx.exact_match {
                ASAP_KEYWORDS.iter().any(|word| *word == lower)
            } else {
                ASAP_KEYWORDS.iter().any(|word| lower.contains(word))
            };

            Ok(matched.then(|| DateTimeRange::whole_day(ctx.message_day)))
        }
    }
}
