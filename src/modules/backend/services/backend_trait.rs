use std::fmt;

use async_trait::async_trait;
use serde_json::Value;

use crate::core::Result;
use crate::modules::backend::models::UploadRequest;

/// Analytics endpoints of the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    General,
    PendingCollection,
    PendingCash,
}

impl Endpoint {
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::General => "/api/analytics",
            Endpoint::PendingCollection => "/api/analytics_pendientes_cobrar",
            Endpoint::PendingCash => "/api/analytics_pendientes_efectivo",
        }
    }

    /// Short name used in log fields
    pub fn name(&self) -> &'static str {
        match self {
            Endpoint::General => "general",
            Endpoint::PendingCollection => "pending_collection",
            Endpoint::PendingCash => "pending_cash",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Seam to the analytics backend.
///
/// Implementations return the success payload as raw JSON; an error body,
/// a non-2xx status, or a transport failure must come back as `Err`.
#[async_trait]
pub trait AnalyticsBackend: Send + Sync {
    /// Upload the file to `endpoint` and return the decoded JSON payload
    async fn upload(&self, endpoint: Endpoint, request: &UploadRequest) -> Result<Value>;

    /// Backend name for logging
    fn name(&self) -> &str;
}
