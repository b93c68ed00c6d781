pub mod delay;
pub mod records;
pub mod reports;
pub mod summaries;

pub use delay::{DelayAssessment, DelayPolicy, DelayTier};
pub use records::{CashRecord, CollectionRecord, PendingRecord};
pub use reports::{PendingCashReport, PendingCollectionReport};
pub use summaries::{
    CashAdvisory, CashMonthSummary, CollectionMonthSummary, BACKEND_STALE_DAYS,
};
