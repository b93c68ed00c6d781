pub mod aggregator;
pub mod ordering;

pub use aggregator::{
    aggregate_global, filter_by_month, select_period, DatedRecord, PeriodIndex, PeriodSummary,
};
pub use ordering::{compare_month_keys, is_valid_month_key, sorted_valid_months};
