//! Month keys, period selection, and the aggregation shared by every view.

pub mod models;
pub mod services;

pub use models::{MonthKey, Selection, GLOBAL_SELECTION, MONTH_NAMES};
pub use services::{
    aggregate_global, compare_month_keys, filter_by_month, is_valid_month_key, select_period,
    sorted_valid_months, DatedRecord, PeriodIndex, PeriodSummary,
};
