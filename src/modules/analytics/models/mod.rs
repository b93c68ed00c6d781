pub mod general_report;
pub mod month_summary;

pub use general_report::{ClientCategory, GeneralAnalytics, StatusChart};
pub use month_summary::{MonthSummary, PendingCounts, SpecialStatusCounts};
