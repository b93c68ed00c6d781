// Global and per-period aggregation over month-keyed summaries

use std::collections::BTreeMap;

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::json;
use serviboard::modules::analytics::{AnalyticsKpis, GeneralAnalytics, MonthSummary};
use serviboard::modules::pending::{CollectionMonthSummary, PendingCollectionReport};
use serviboard::modules::periods::{
    aggregate_global, filter_by_month, select_period, DatedRecord, MonthKey, Selection,
    MONTH_NAMES,
};

fn summaries(value: serde_json::Value) -> BTreeMap<String, MonthSummary> {
    let report: GeneralAnalytics =
        serde_json::from_value(json!({ "resumen": value })).expect("valid analytics payload");
    report.resumen
}

fn month(key: &str) -> Selection {
    key.parse().expect("valid selection")
}

#[test]
fn test_global_aggregation_sums_not_averages() {
    let map = summaries(json!({
        "Enero 2024": {"efectivo_total": 100, "efectivo_cantidad": 1},
        "Febrero 2024": {"efectivo_total": 200, "efectivo_cantidad": 3}
    }));

    let global = aggregate_global(&map);
    assert_eq!(global.cash_total, dec!(300));
    assert_eq!(global.cash_count, 4);
}

#[test]
fn test_missing_fields_default_to_zero() {
    let map = summaries(json!({
        "Enero 2024": {"efectivo_total": 1000, "transferencia_total": null, "total_general": "NaN"}
    }));

    let january = select_period(&map, &month("Enero 2024"));
    assert_eq!(january.cash_count, 0, "missing efectivo_cantidad must be 0");
    assert_eq!(january.transfer_total, Decimal::ZERO);
    assert_eq!(january.general_total, Decimal::ZERO);
}

#[test]
fn test_invalid_keys_do_not_contribute() {
    let map = summaries(json!({
        "Enero 2024": {"efectivo_total": 100},
        "NaT": {"efectivo_total": 5000},
        "Invalid Date": {"efectivo_total": 7000},
        "": {"efectivo_total": 9000}
    }));

    assert_eq!(aggregate_global(&map).cash_total, dec!(100));
}

#[test]
fn test_empty_map_yields_zero_summary() {
    let map: BTreeMap<String, MonthSummary> = BTreeMap::new();
    assert_eq!(aggregate_global(&map), MonthSummary::default());
    assert_eq!(select_period(&map, &Selection::Global), MonthSummary::default());
}

#[test]
fn test_absent_month_yields_zero_summary() {
    let map = summaries(json!({"Enero 2024": {"efectivo_total": 100}}));
    assert_eq!(select_period(&map, &month("Marzo 2024")), MonthSummary::default());
}

#[test]
fn test_single_month_global_matches_month() {
    let map = summaries(json!({
        "Enero 2024": {
            "efectivo_total": 1000, "efectivo_cantidad": 2,
            "transferencia_total": 500, "transferencia_cantidad": 1,
            "total_general": 1500, "cantidad_general": 3
        }
    }));

    let global = select_period(&map, &Selection::Global);
    let january = select_period(&map, &month("Enero 2024"));

    assert_eq!(global.cash_total, dec!(1000));
    assert_eq!(global.transfer_total, dec!(500));
    assert_eq!(global.general_total, dec!(1500));
    assert_eq!(global, january);
}

#[test]
fn test_collection_global_takes_max_and_earliest() {
    let report: PendingCollectionReport = serde_json::from_value(json!({
        "resumen": {
            "2024-01": {"total_servicios": 2, "max_dias_retraso": 70, "fecha_mas_antigua": "2024-01-03"},
            "2024-02": {"total_servicios": 1, "max_dias_retraso": 35, "fecha_mas_antigua": "2024-02-10"}
        },
        "detalle": []
    }))
    .unwrap();

    let global: CollectionMonthSummary = aggregate_global(&report.resumen);
    assert_eq!(global.total_services, 3);
    assert_eq!(global.max_delay_days, 70, "max delay is a maximum, not a sum");
    assert_eq!(global.earliest_date.map(|d| d.to_string()), Some("2024-01-03".to_string()));
}

#[test]
fn test_oversized_amounts_saturate_instead_of_panicking() {
    let map = summaries(json!({
        "Enero 2024": {"efectivo_total": "7e28", "efectivo_cantidad": 9.0e18},
        "Febrero 2024": {"efectivo_total": "7e28", "efectivo_cantidad": 9.0e18}
    }));

    let global = aggregate_global(&map);
    assert_eq!(global.cash_total, Decimal::MAX);
    assert_eq!(global.cash_count, i64::MAX);

    let kpis = AnalyticsKpis::for_selection(
        &GeneralAnalytics {
            resumen: map,
            ..GeneralAnalytics::default()
        },
        &Selection::Global,
    );
    assert_eq!(kpis.summary.cash_total, Decimal::MAX);
}

#[test]
fn test_oversized_pending_counts_saturate() {
    let report: PendingCollectionReport = serde_json::from_value(json!({
        "resumen": {
            "2024-01": {"total_servicios": i64::MAX, "servicios_retraso": i64::MAX},
            "2024-02": {"total_servicios": 1, "servicios_retraso": 1}
        }
    }))
    .unwrap();

    let global: CollectionMonthSummary = aggregate_global(&report.resumen);
    assert_eq!(global.total_services, i64::MAX);
    assert_eq!(global.overdue_services, i64::MAX);
}

#[test]
fn test_filter_by_month_excludes_unparseable_dates() {
    let report: PendingCollectionReport = serde_json::from_value(json!({
        "resumen": {},
        "detalle": [
            {"fecha": "2024-01-15"},
            {"fecha": "2024-01-31T18:30:00"},
            {"fecha": "2024-02-01"},
            {"fecha": "not a date"},
            {"fecha": ""}
        ]
    }))
    .unwrap();

    let january = filter_by_month(&report.records, &month("Enero 2024"));
    let dates: Vec<&str> = january.iter().map(|r| r.date()).collect();
    assert_eq!(dates, vec!["2024-01-15", "2024-01-31T18:30:00"]);

    let all = filter_by_month(&report.records, &Selection::Global);
    assert_eq!(all.len(), 5, "global keeps every record");
}

fn month_entries() -> impl Strategy<Value = Vec<(MonthKey, i64, i64)>> {
    prop::collection::vec((2020i32..2026, 1u32..=12, 0i64..1_000_000, 0i64..500), 0..24).prop_map(
        |entries| {
            entries
                .into_iter()
                .filter_map(|(y, m, amount, count)| MonthKey::new(y, m).map(|k| (k, amount, count)))
                .collect()
        },
    )
}

proptest! {
    /// Property: global cash total equals the sum over distinct months
    #[test]
    fn prop_global_equals_sum_of_months(entries in month_entries()) {
        let mut by_month: BTreeMap<MonthKey, (i64, i64)> = BTreeMap::new();
        for (key, amount, count) in &entries {
            by_month.insert(*key, (*amount, *count));
        }

        let map: BTreeMap<String, MonthSummary> = by_month
            .iter()
            .map(|(key, (amount, count))| {
                (key.to_string(), MonthSummary {
                    cash_total: Decimal::from(*amount),
                    cash_count: *count,
                    ..Default::default()
                })
            })
            .collect();

        let global = aggregate_global(&map);
        let expected_total: i64 = by_month.values().map(|(a, _)| a).sum();
        let expected_count: i64 = by_month.values().map(|(_, c)| c).sum();

        prop_assert_eq!(global.cash_total, Decimal::from(expected_total));
        prop_assert_eq!(global.cash_count, expected_count);
    }

    /// Property: adding an invalid key never changes the global total
    #[test]
    fn prop_invalid_key_is_inert(amount in 0i64..1_000_000, junk in 0i64..1_000_000, m in 0usize..12) {
        let mut map = BTreeMap::new();
        map.insert(format!("{} 2024", MONTH_NAMES[m]), MonthSummary {
            cash_total: Decimal::from(amount),
            ..Default::default()
        });
        let before = aggregate_global(&map);

        map.insert("NaT".to_string(), MonthSummary {
            cash_total: Decimal::from(junk),
            ..Default::default()
        });
        prop_assert_eq!(aggregate_global(&map), before);
    }
}
