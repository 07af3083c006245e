//! The rule library and the two priority orders built from it.
//!
//! Order matters: the pipeline takes the first rule that produces a set range,
//! so more specific phrasings come before general ones. The bare-hour rule in
//! particular must run before the general parser, which would read "3" as the
//! 3rd of the month.

pub mod helpers;
pub mod lexicon;

mod rules_asap;
mod rules_digits;
mod rules_fallback;
mod rules_intervals;
mod rules_listings;
mod rules_month_parts;
mod rules_months;
mod rules_parts_of_day;
mod rules_qualifiers;
mod rules_today_tomorrow;
mod rules_weekend;


use crate::Rule;

/// Rules for tour scheduling, in priority order.
pub fn appointment() -> Vec<Rule> {
    vec![
        rules_weekend::rule_this_week(),
        rules_month_parts::rule_part_of_month(),
        rules_qualifiers::rule_time_qualifier_around(),
        rules_today_tomorrow::rule_tomorrow_at_time(),
        rules_today_tomorrow::rule_today_at_time(),
        rules_intervals::rule_time_range_between(),
        rules_intervals::rule_open_time_range(),
        rules_digits::rule_bare_hour(),
        rules_listings::rule_listing_slot(),
        rules_fallback::rule_general_parser(),
        rules_weekend::rule_this_weekend(),
        rules_month_parts::rule_end_of_month(),
        rules_month_parts::rule_qualified_month(),
        rules_asap::rule_asap(),
        rules_months::rule_month_and_day(),
        rules_parts_of_day::rule_part_of_day(),
    ]
}

/// Rules for move-in dates, in priority order. No clock-time rules.
pub fn move_in() -> Vec<Rule> {
    vec![
        rules_weekend::rule_this_week(),
        rules_month_parts::rule_part_of_month(),
        rules_qualifiers::rule_time_qualifier(),
        rules_fallback::rule_general_parser(),
        rules_weekend::rule_this_weekend(),
        rules_month_parts::rule_end_of_month(),
        rules_month_parts::rule_qualified_month(),
        rules_asap::rule_asap(),
        rules_months::rule_month_and_day(),
    ]
}
