// Month key validation and chronological ordering shared by every chart and selector

use std::cmp::Ordering;
use std::collections::BTreeMap;

use proptest::prelude::*;
use serviboard::modules::periods::{
    compare_month_keys, is_valid_month_key, sorted_valid_months, MonthKey, MONTH_NAMES,
};

fn map_of(keys: &[&str]) -> BTreeMap<String, ()> {
    keys.iter().map(|k| (k.to_string(), ())).collect()
}

fn labels(months: &[MonthKey]) -> Vec<String> {
    months.iter().map(|m| m.to_string()).collect()
}

#[test]
fn test_months_sort_chronologically() {
    let months = sorted_valid_months(&map_of(&["Marzo 2024", "Enero 2023", "Febrero 2024"]));

    assert_eq!(
        labels(&months),
        vec!["Enero 2023", "Febrero 2024", "Marzo 2024"],
        "Year first, then calendar position"
    );
}

#[test]
fn test_calendar_order_beats_alphabetical() {
    // Alphabetically "Abril" < "Diciembre" < "Enero"
    let months = sorted_valid_months(&map_of(&["Diciembre 2024", "Abril 2024", "Enero 2024"]));
    assert_eq!(labels(&months), vec!["Enero 2024", "Abril 2024", "Diciembre 2024"]);
}

#[test]
fn test_invalid_keys_are_excluded() {
    let months = sorted_valid_months(&map_of(&[
        "NaT",
        "Invalid Date",
        "null",
        "undefined",
        "",
        "Garbage",
        "Enero 2024",
    ]));
    assert_eq!(labels(&months), vec!["Enero 2024"]);
}

#[test]
fn test_both_key_forms_name_the_same_month() {
    let named: MonthKey = "Enero 2024".parse().unwrap();
    let period: MonthKey = "2024-01".parse().unwrap();
    assert_eq!(named, period);

    let months = sorted_valid_months(&map_of(&["2024-01", "Enero 2024", "2023-12"]));
    assert_eq!(labels(&months), vec!["Diciembre 2023", "Enero 2024"]);
}

#[test]
fn test_comparator_stays_total_on_malformed_keys() {
    assert_eq!(compare_month_keys("Enero 2024", "Febrero 2024"), Ordering::Less);
    assert_eq!(compare_month_keys("Enero 2025", "Diciembre 2024"), Ordering::Greater);
    assert_eq!(compare_month_keys("Enero 2024", "2024-01"), Ordering::Equal);
    assert_eq!(compare_month_keys("Enero 2024", "Garbage"), Ordering::Less);
    assert_eq!(compare_month_keys("Garbage", "Enero 2024"), Ordering::Greater);
}

#[test]
fn test_validity_is_literal_and_case_insensitive() {
    assert!(!is_valid_month_key("  NAT  "));
    assert!(!is_valid_month_key("INVALID DATE"));
    assert!(is_valid_month_key("Enero 2024"));
}

fn month_key_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        (0usize..12, 2000i32..2100).prop_map(|(m, y)| format!("{} {}", MONTH_NAMES[m], y)),
        (1u32..=12, 2000i32..2100).prop_map(|(m, y)| format!("{}-{:02}", y, m)),
        Just("NaT".to_string()),
        Just("Invalid Date".to_string()),
        Just("null".to_string()),
        "[a-z]{0,8}",
    ]
}

proptest! {
    /// Property: re-filtering an already sorted valid list never drops anything
    #[test]
    fn prop_validity_filter_is_idempotent(keys in prop::collection::vec(month_key_strategy(), 0..20)) {
        let once = sorted_valid_months(&keys.iter().map(|k| (k.clone(), ())).collect());
        let rebuilt: BTreeMap<String, ()> = once.iter().map(|m| (m.to_string(), ())).collect();
        let twice = sorted_valid_months(&rebuilt);

        prop_assert_eq!(once, twice);
    }

    /// Property: output is strictly ascending and agrees with the comparator
    #[test]
    fn prop_sorted_months_are_strictly_ascending(keys in prop::collection::vec(month_key_strategy(), 0..20)) {
        let months = sorted_valid_months(&keys.iter().map(|k| (k.clone(), ())).collect());

        for pair in months.windows(2) {
            prop_assert!(pair[0] < pair[1]);
            prop_assert_eq!(
                compare_month_keys(&pair[0].to_string(), &pair[1].to_string()),
                Ordering::Less
            );
        }
    }

    /// Property: forbidden literals never survive
    #[test]
    fn prop_forbidden_keys_never_appear(keys in prop::collection::vec(month_key_strategy(), 0..20)) {
        let months = sorted_valid_months(&keys.iter().map(|k| (k.clone(), ())).collect());
        for month in months {
            prop_assert!(is_valid_month_key(&month.to_string()));
        }
    }
}
