//! Serviboard analytics client
//!
//! Uploads a service-records spreadsheet to the analytics backend and turns
//! the month-keyed responses into period selections, global totals, and
//! delay-tiered pending lists for the dashboard views.

pub mod config;
pub mod core;
pub mod modules;

// Re-export commonly used types
pub use modules::analytics;
pub use modules::backend;
pub use modules::dashboard;
pub use modules::pending;
pub use modules::periods;
