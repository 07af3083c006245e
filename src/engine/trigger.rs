//! Trigger scanning (phrase pre-classification).
//!
//! This module inspects the cleaned phrase and produces coarse buckets that
//! let the pipeline skip rules which cannot possibly match.
//!
//! This is a *heuristic* scan. False positives are acceptable because the
//! rule still has to match its full pattern; false negatives are not, so a
//! bucket must be set whenever any bucketed rule could match.

bitflags::bitflags! {
    /// Coarse buckets for fast phrase classification.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct BucketMask: u32 {
        const HAS_DIGITS = 1 << 0;
        const MONTHISH   = 1 << 1;
    }
}

/// Month prefixes; month patterns are not word-bounded ("late-june",
/// "3pm-4pm-sep11"), so neither is the scan.
const MONTH_PREFIXES: &[&str] = &["jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec"];

/// Phrase characteristics used to gate rule activation.
#[derive(Debug, Clone, Copy)]
pub struct TriggerInfo {
    pub buckets: BucketMask,
}

impl TriggerInfo {
    pub fn scan(phrase: &str) -> Self {
        let mut buckets = BucketMask::empty();
        let lower = phrase.to_lowercase();

        if phrase.bytes().any(|b| b.is_ascii_digit()) {
            buckets |= BucketMask::HAS_DIGITS;
        }

        if MONTH_PREFIXES.iter().any(|month| lower.contains(month)) {
            buckets |= BucketMask::MONTHISH;
        }

        Self { buckets }
    }

    /// Whether a rule requiring `rule_buckets` may match this phrase.
    pub fn admits(&self, rule_buckets: u32) -> bool {
        self.buckets.contains(BucketMask::from_bits_truncate(rule_buckets))
    }
}
