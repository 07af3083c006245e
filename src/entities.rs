//! Best-effort normalization of layout and budget phrases.

use std::fmt;

/// Canonical apartment layouts understood by the scheduling API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layout {
    OneBedroom,
    TwoBedroom,
    ThreeBedroom,
    FourPlusBedroom,
    Studio,
}

impl Layout {
    pub fn as_str(self) -> &'static str {
        match self {
            Layout::OneBedroom => "1br",
            Layout::TwoBedroom => "2br",
            Layout::ThreeBedroom => "3br",
            Layout::FourPlusBedroom => "4+br",
            Layout::Studio => "studio",
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

const LAYOUT_KEYWORDS: &[(Layout, &[&str])] = &[
    (Layout::OneBedroom, &["1", "one", "single"]),
    (Layout::TwoBedroom, &["2", "two"]),
    (Layout::ThreeBedroom, &["3", "three"]),
    (Layout::FourPlusBedroom, &["4", "four"]),
    (Layout::Studio, &["studio", "studios"]),
];

/// Map layout mentions ("2 bed", "one bedroom", "studios") to layouts.
///
/// Keywords are matched as substrings. Each layout appears once, in the
/// order first mentioned.
pub fn normalize_layout(layouts: &[&str]) -> Vec<Layout> {
    let mut found = Vec::new();
    for layout in layouts {
        let lower = layout.to_lowercase();
        for (kind, keywords) in LAYOUT_KEYWORDS {
            if keywords.iter().any(|word| lower.contains(word)) && !found.contains(kind) {
                found.push(*kind);
            }
        }
    }
    found
}

/// The largest budget among `budgets`, in whole dollars.
///
/// "2.5k" is 2500; for ranges ("$1,500 - $2,000", "2k-3k") the upper end
/// counts. Entries without a recognizable figure are ignored.
pub fn normalize_budget(budgets: &[&str]) -> Option<u64> {
    budgets.iter().filter_map(|budget| parse_budget(budget)).max()
}

fn parse_budget(budget: &str) -> Option<u64> {
    let thousands = regex!(r"\$?([0-9]*\.?[0-9]+)\s?k");
    let lower = budget.to_lowercase();
    if let Some(caps) = thousands.captures_iter(&lower).last() {
        let value: f64 = caps[1].parse().ok()?;
        return Some((value * 1000.0) as u64);
    }

    let edges = regex!(r"^([^0-9]+)|([^0-9]+)$");
    let figure = regex!(r"\$?([0-9]+,?[0-9]+\.?[0-9]+)");
    let stripped = edges.replace_all(budget, "");
    let caps = figure.captures_iter(&stripped).last()?;
    let value: f64 = caps[1].replace(',', "").parse().ok()?;
    Some(value as u64)
}
