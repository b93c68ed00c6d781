pub mod kpis;

pub use kpis::{monthly_series, AnalyticsKpis, SeriesPoint};
