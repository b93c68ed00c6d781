use rust_decimal::Decimal;
use serde::Serialize;

use crate::core::money::share_percent;
use crate::modules::analytics::models::{
    GeneralAnalytics, MonthSummary, PendingCounts, SpecialStatusCounts,
};
use crate::modules::periods::{select_period, MonthKey, PeriodIndex, Selection};

/// Everything the KPI cards show for one selected period
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyticsKpis {
    pub selection: Selection,
    pub summary: MonthSummary,
    pub pending: PendingCounts,
    pub special_statuses: SpecialStatusCounts,
    /// Cash share of `cash_total + transfer_total`, in percent
    pub cash_share: Decimal,
    /// Transfer share of `cash_total + transfer_total`, in percent
    pub transfer_share: Decimal,
}

impl AnalyticsKpis {
    /// Derive KPIs for `selection`; every month-keyed section of the report
    /// goes through the same period selection
    pub fn for_selection(report: &GeneralAnalytics, selection: &Selection) -> Self {
        let summary = select_period(&report.resumen, selection);
        let pending = select_period(&report.pending_by_month, selection);
        let special_statuses = select_period(&report.special_statuses_by_month, selection);

        let paid = summary.cash_total.saturating_add(summary.transfer_total);

        Self {
            selection: *selection,
            cash_share: share_percent(summary.cash_total, paid),
            transfer_share: share_percent(summary.transfer_total, paid),
            summary,
            pending,
            special_statuses,
        }
    }
}

/// One point of the monthly cash/transfer chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesPoint {
    pub month: MonthKey,
    pub cash: Decimal,
    pub transfer: Decimal,
    pub total: Decimal,
    pub cash_count: i64,
    pub transfer_count: i64,
}

/// Chronological cash/transfer series over every valid month
pub fn monthly_series(index: &PeriodIndex<MonthSummary>) -> Vec<SeriesPoint> {
    index
        .series()
        .map(|(month, summary)| SeriesPoint {
            month,
            cash: summary.cash_total,
            transfer: summary.transfer_total,
            total: summary.general_total,
            cash_count: summary.cash_count,
            transfer_count: summary.transfer_count,
        })
        .collect()
}
