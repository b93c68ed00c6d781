//! Per-view state machines and the period projections presentation reads.

pub mod models;
pub mod services;

pub use models::{Dataset, FetchTicket, LoadedData, PendingDataset, ViewError, ViewState};
pub use services::{AnalyticsView, Dashboard};
