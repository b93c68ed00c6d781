pub mod backend_trait;
pub mod http_backend;

pub use backend_trait::{AnalyticsBackend, Endpoint};
pub use http_backend::{parse_envelope, HttpBackend};
