use std::sync::Arc;

use tracing::info;

use crate::config::Config;
use crate::core::Result;
use crate::modules::analytics::GeneralAnalytics;
use crate::modules::backend::{AnalyticsBackend, HttpBackend, UploadRequest};
use crate::modules::pending::{PendingCashReport, PendingCollectionReport};

use super::view::AnalyticsView;

/// The three analytics views fed by one uploaded file
pub struct Dashboard {
    pub general: AnalyticsView<GeneralAnalytics>,
    pub collection: AnalyticsView<PendingCollectionReport>,
    pub cash: AnalyticsView<PendingCashReport>,
}

impl Dashboard {
    pub fn new(backend: Arc<dyn AnalyticsBackend>, config: &Config) -> Self {
        Self {
            general: AnalyticsView::from_config(Arc::clone(&backend), config.thresholds, &config.backend),
            collection: AnalyticsView::from_config(Arc::clone(&backend), config.thresholds, &config.backend),
            cash: AnalyticsView::from_config(backend, config.thresholds, &config.backend),
        }
    }

    /// Dashboard backed by the HTTP backend described in `config`
    pub fn connect(config: &Config) -> Result<Self> {
        let backend = HttpBackend::new(config.backend.clone())?;
        Ok(Self::new(Arc::new(backend), config))
    }

    /// Upload `request` to every view concurrently; views fail independently
    pub async fn upload_all(&mut self, request: UploadRequest) {
        info!(file = %request.file_name, "Uploading file to all views");

        let Self {
            general,
            collection,
            cash,
        } = self;
        tokio::join!(
            general.upload(request.clone()),
            collection.upload(request.clone()),
            cash.upload(request),
        );
    }

    pub fn reset(&mut self) {
        self.general.reset();
        self.collection.reset();
        self.cash.reset();
    }
}
