use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::modules::periods::models::MonthKey;

/// Literal keys produced when an upstream date failed to parse
const FORBIDDEN_KEYS: [&str; 4] = ["null", "undefined", "invalid date", "nat"];

/// Whether a raw summary-map key may take part in any aggregation.
///
/// Trims and lower-cases the key, then rejects the empty string and the
/// date-parsing failure markers (`null`, `undefined`, `invalid date`, `NaT`).
/// Passing this check does not guarantee the key parses as a [`MonthKey`];
/// [`sorted_valid_months`] additionally drops keys that do not.
pub fn is_valid_month_key(key: &str) -> bool {
    let normalized = key.trim().to_lowercase();
    !normalized.is_empty() && !FORBIDDEN_KEYS.contains(&normalized.as_str())
}

/// Chronological comparison of two raw month keys.
///
/// Year first, then month by its position in the calendar. Keys that do not
/// parse sort after every parseable key (and among themselves by text), so
/// the comparison stays a total order even on malformed input.
pub fn compare_month_keys(a: &str, b: &str) -> Ordering {
    match (a.parse::<MonthKey>(), b.parse::<MonthKey>()) {
        (Ok(a), Ok(b)) => a.cmp(&b),
        (Ok(_), Err(_)) => Ordering::Less,
        (Err(_), Ok(_)) => Ordering::Greater,
        (Err(_), Err(_)) => a.cmp(b),
    }
}

/// Canonical iteration order for every chart and selector: valid, parseable
/// months ascending, each month once
pub fn sorted_valid_months<S>(summaries: &BTreeMap<String, S>) -> Vec<MonthKey> {
    let mut months: Vec<MonthKey> = summaries
        .keys()
        .filter(|key| is_valid_month_key(key))
        .filter_map(|key| key.parse::<MonthKey>().ok())
        .collect();
    months.sort();
    months.dedup();
    months
}
