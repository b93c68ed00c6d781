use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::core::coerce::{lenient_count, lenient_decimal, lenient_flag, lenient_text, to_text};
use crate::core::dates::parse_summary_date;
use crate::modules::periods::PeriodSummary;

fn lenient_summary_date<'de, D>(deserializer: D) -> std::result::Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().map(to_text).as_deref().and_then(parse_summary_date))
}

fn earliest(a: Option<NaiveDate>, b: Option<NaiveDate>) -> Option<NaiveDate> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (a, b) => a.or(b),
    }
}

/// Month summary of the pending-to-collect view
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionMonthSummary {
    #[serde(rename = "total_servicios", default, deserialize_with = "lenient_count")]
    pub total_services: i64,
    /// Services past the overdue threshold
    #[serde(rename = "servicios_retraso", default, deserialize_with = "lenient_count")]
    pub overdue_services: i64,
    #[serde(rename = "max_dias_retraso", default, deserialize_with = "lenient_count")]
    pub max_delay_days: i64,
    #[serde(rename = "fecha_mas_antigua", default, deserialize_with = "lenient_summary_date")]
    pub earliest_date: Option<NaiveDate>,
}

impl PeriodSummary for CollectionMonthSummary {
    fn merge(&mut self, other: &Self) {
        self.total_services = self.total_services.saturating_add(other.total_services);
        self.overdue_services = self.overdue_services.saturating_add(other.overdue_services);
        self.max_delay_days = self.max_delay_days.max(other.max_delay_days);
        self.earliest_date = earliest(self.earliest_date, other.earliest_date);
    }
}

/// Month summary of the pending-cash view
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CashMonthSummary {
    #[serde(rename = "total_servicios", default, deserialize_with = "lenient_count")]
    pub total_services: i64,
    #[serde(rename = "total_valor", default, deserialize_with = "lenient_decimal")]
    pub total_value: Decimal,
    /// Largest day count in the group
    #[serde(rename = "dias_sin_relacionar", default, deserialize_with = "lenient_count")]
    pub max_days_unrelated: i64,
    #[serde(rename = "tiene_pendientes", default, deserialize_with = "lenient_flag")]
    pub has_pending: bool,
    #[serde(rename = "tiene_antiguos", default, deserialize_with = "lenient_flag")]
    pub has_old: bool,
    #[serde(rename = "num_antiguos", default, deserialize_with = "lenient_count")]
    pub old_services: i64,
    #[serde(rename = "fecha_mas_antigua", default, deserialize_with = "lenient_summary_date")]
    pub earliest_date: Option<NaiveDate>,
    /// Advisory text as the backend phrased it for this one month
    #[serde(rename = "advertencia", default, deserialize_with = "lenient_text")]
    pub backend_advisory: String,
}

impl PeriodSummary for CashMonthSummary {
    fn merge(&mut self, other: &Self) {
        self.total_services = self.total_services.saturating_add(other.total_services);
        self.total_value = self.total_value.saturating_add(other.total_value);
        self.max_days_unrelated = self.max_days_unrelated.max(other.max_days_unrelated);
        self.has_pending |= other.has_pending;
        self.has_old |= other.has_old;
        self.old_services = self.old_services.saturating_add(other.old_services);
        self.earliest_date = earliest(self.earliest_date, other.earliest_date);
        // A merged text would be meaningless; callers use `advisory()`
        self.backend_advisory.clear();
    }
}

impl CashMonthSummary {
    /// Advisory derived from the counts, valid for single months and merged totals alike
    pub fn advisory(&self) -> CashAdvisory {
        if self.old_services > 0 || self.has_old {
            CashAdvisory::Stale(self.old_services)
        } else if self.total_services > 0 || self.has_pending {
            CashAdvisory::RecentPending(self.total_services)
        } else {
            CashAdvisory::UpToDate
        }
    }
}

/// Day count behind the backend's `es_antiguo` flag and `num_antiguos`
///
/// Fixed on the backend side; it does not follow `OVERDUE_DAYS`.
pub const BACKEND_STALE_DAYS: i64 = 30;

/// Advisory line of the pending-cash view; `Stale` counts the backend's
/// `num_antiguos`, so its text quotes [`BACKEND_STALE_DAYS`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "count", rename_all = "snake_case")]
pub enum CashAdvisory {
    UpToDate,
    RecentPending(i64),
    Stale(i64),
}

impl fmt::Display for CashAdvisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UpToDate => write!(f, "Todos los servicios en efectivo están al día"),
            Self::RecentPending(n) => {
                write!(f, "Hay {} servicios pendientes por relacionar (recientes)", n)
            }
            Self::Stale(n) => write!(
                f,
                "ADVERTENCIA: Hay {} servicios en efectivo con más de {} días sin relacionar",
                n, BACKEND_STALE_DAYS
            ),
        }
    }
}
