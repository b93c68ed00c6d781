//! General analytics payload: monthly cash/transfer totals and KPIs.

pub mod models;
pub mod services;

pub use models::{GeneralAnalytics, MonthSummary};
pub use services::{monthly_series, AnalyticsKpis, SeriesPoint};
