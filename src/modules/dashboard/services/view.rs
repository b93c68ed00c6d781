use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;
use futures_util::future::BoxFuture;
use tracing::{debug, info, warn};

use crate::config::{BackendConfig, ThresholdConfig};
use crate::core::dates::today;
use crate::core::{AppError, Result};
use crate::modules::analytics::{monthly_series, AnalyticsKpis, GeneralAnalytics, SeriesPoint};
use crate::modules::backend::{AnalyticsBackend, UploadRequest};
use crate::modules::dashboard::models::{
    Dataset, FetchTicket, LoadedData, PendingDataset, ViewError, ViewState,
};
use crate::modules::pending::{assess_records, AssessedRecord, DelayPolicy};
use crate::modules::periods::{filter_by_month, MonthKey, PeriodIndex, Selection};

/// One analytics view: its state machine and the period projections over it.
///
/// Every upload bumps the generation counter; a response is applied only if
/// it carries the current generation, so a slow earlier fetch can never
/// overwrite a newer one.
pub struct AnalyticsView<D: Dataset> {
    backend: Arc<dyn AnalyticsBackend>,
    thresholds: ThresholdConfig,
    timeout: Duration,
    reference_date: Option<NaiveDate>,
    generation: u64,
    state: ViewState<D>,
}

impl<D: Dataset> AnalyticsView<D> {
    pub fn new(backend: Arc<dyn AnalyticsBackend>, thresholds: ThresholdConfig, timeout: Duration) -> Self {
        Self {
            backend,
            thresholds,
            timeout,
            reference_date: None,
            generation: 0,
            state: ViewState::NoFile,
        }
    }

    pub fn from_config(
        backend: Arc<dyn AnalyticsBackend>,
        thresholds: ThresholdConfig,
        config: &BackendConfig,
    ) -> Self {
        Self::new(backend, thresholds, config.timeout())
    }

    /// Pin the date delays are measured against (defaults to today at load time)
    pub fn with_reference_date(mut self, date: NaiveDate) -> Self {
        self.reference_date = Some(date);
        self
    }

    pub fn name(&self) -> &'static str {
        D::ENDPOINT.name()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn get_state(&self) -> &ViewState<D> {
        &self.state
    }

    /// Enter `Loading` for a new upload, dropping any previous data or error
    pub fn begin_upload(&mut self) -> FetchTicket {
        self.generation += 1;
        self.state = ViewState::Loading {
            generation: self.generation,
        };
        debug!(view = self.name(), generation = self.generation, "Upload started");
        FetchTicket {
            generation: self.generation,
        }
    }

    /// Fetch and decode this view's payload.
    ///
    /// The returned future does not borrow the view, so a newer upload may
    /// begin while it is still pending.
    pub fn fetch(&self, request: UploadRequest) -> BoxFuture<'static, Result<D>> {
        let backend = Arc::clone(&self.backend);
        let timeout = self.timeout;

        Box::pin(async move {
            let payload = tokio::time::timeout(timeout, backend.upload(D::ENDPOINT, &request))
                .await
                .map_err(|_| AppError::Timeout(timeout))??;
            D::decode(payload)
        })
    }

    /// Apply a fetch result; returns `false` when the ticket is stale and the
    /// result was discarded
    pub fn complete(&mut self, ticket: FetchTicket, result: Result<D>) -> bool {
        let current = matches!(
            self.state,
            ViewState::Loading { generation } if generation == ticket.generation
        );
        if !current {
            debug!(
                view = self.name(),
                generation = ticket.generation,
                current = self.generation,
                "Discarding stale response"
            );
            return false;
        }

        self.state = match result {
            Ok(data) => {
                let index = PeriodIndex::from_summaries(data.summaries());
                let selection = D::default_selection(&index);
                info!(
                    view = self.name(),
                    generation = ticket.generation,
                    months = index.len(),
                    selection = %selection,
                    "View loaded"
                );
                ViewState::Loaded(LoadedData {
                    data,
                    index,
                    selection,
                    reference_date: self.reference_date.unwrap_or_else(today),
                    generation: ticket.generation,
                })
            }
            Err(e) => {
                warn!(
                    view = self.name(),
                    generation = ticket.generation,
                    error = %e,
                    "View failed to load"
                );
                ViewState::Error(ViewError::from(&e))
            }
        };
        true
    }

    /// Begin, fetch, and complete in one step
    pub async fn upload(&mut self, request: UploadRequest) -> bool {
        let ticket = self.begin_upload();
        let result = self.fetch(request).await;
        self.complete(ticket, result)
    }

    /// Back to `NoFile`; any fetch still in flight will be discarded
    pub fn reset(&mut self) {
        self.generation += 1;
        self.state = ViewState::NoFile;
        debug!(view = self.name(), generation = self.generation, "View reset");
    }

    /// Change the selected period without refetching.
    ///
    /// Accepts `"Total Global"` or a month that is present in the loaded data.
    pub fn set_selection(&mut self, key: &str) -> Result<()> {
        let loaded = match &mut self.state {
            ViewState::Loaded(loaded) => loaded,
            other => {
                return Err(AppError::validation(format!(
                    "Cannot select a period while the view is {}",
                    other.name()
                )))
            }
        };

        let selection: Selection = key.parse().map_err(AppError::Validation)?;
        if let Selection::Month(month) = selection {
            if loaded.index.get(&month).is_none() {
                return Err(AppError::validation(format!("No data for {}", month)));
            }
        }

        loaded.selection = selection;
        Ok(())
    }

    pub fn selection(&self) -> Option<Selection> {
        self.state.loaded().map(|loaded| loaded.selection)
    }

    /// Valid months of the loaded payload, oldest first
    pub fn get_sorted_months(&self) -> Vec<MonthKey> {
        self.state
            .loaded()
            .map(|loaded| loaded.index.months())
            .unwrap_or_default()
    }

    /// Summary for `selection`; zero-valued when nothing is loaded
    pub fn get_period_summary(&self, selection: &Selection) -> D::Summary {
        self.state
            .loaded()
            .map(|loaded| loaded.index.select(selection))
            .unwrap_or_default()
    }

    /// Summary for the current selection
    pub fn current_summary(&self) -> D::Summary {
        self.selection()
            .map(|selection| self.get_period_summary(&selection))
            .unwrap_or_default()
    }

    pub fn data(&self) -> Option<&D> {
        self.state.loaded().map(|loaded| &loaded.data)
    }
}

impl<D: PendingDataset> AnalyticsView<D> {
    pub fn delay_policy(&self) -> DelayPolicy {
        D::policy(&self.thresholds)
    }

    /// Records of `selection` with their delay, most-delayed first
    pub fn get_filtered_records(&self, selection: &Selection) -> Vec<AssessedRecord<'_, D::Record>> {
        let Some(loaded) = self.state.loaded() else {
            return Vec::new();
        };
        let policy = self.delay_policy();
        let records = filter_by_month(loaded.data.records(), selection);
        assess_records(records, loaded.reference_date, &policy)
    }

    pub fn current_records(&self) -> Vec<AssessedRecord<'_, D::Record>> {
        match self.selection() {
            Some(selection) => self.get_filtered_records(&selection),
            None => Vec::new(),
        }
    }
}

impl AnalyticsView<GeneralAnalytics> {
    pub fn get_kpis(&self, selection: &Selection) -> Option<AnalyticsKpis> {
        self.data()
            .map(|report| AnalyticsKpis::for_selection(report, selection))
    }

    /// Monthly cash/transfer series for the chart
    pub fn get_series(&self) -> Vec<SeriesPoint> {
        self.state
            .loaded()
            .map(|loaded| monthly_series(&loaded.index))
            .unwrap_or_default()
    }
}
