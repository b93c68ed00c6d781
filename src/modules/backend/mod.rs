//! Upload seam to the external analytics backend.

pub mod models;
pub mod services;

pub use models::{DateRange, UploadRequest};
pub use services::{parse_envelope, AnalyticsBackend, Endpoint, HttpBackend};
