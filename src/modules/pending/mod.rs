//! Pending-to-collect and pending-cash payloads with their delay policy.

pub mod models;
pub mod services;

pub use models::{
    CashAdvisory, CashMonthSummary, CashRecord, CollectionMonthSummary, CollectionRecord,
    DelayAssessment, DelayPolicy, DelayTier, PendingCashReport, PendingCollectionReport,
    PendingRecord, BACKEND_STALE_DAYS,
};
pub use services::{assess_records, derive_delay, AssessedRecord};
