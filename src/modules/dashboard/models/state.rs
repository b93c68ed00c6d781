use chrono::NaiveDate;
use serde::Serialize;

use crate::core::{AppError, ErrorKind};
use crate::modules::dashboard::models::dataset::Dataset;
use crate::modules::periods::{PeriodIndex, Selection};

/// Handle for one in-flight fetch; only the latest ticket may complete a view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    pub generation: u64,
}

/// Failure shown in the view's error panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewError {
    pub kind: ErrorKind,
    pub message: String,
}

impl From<&AppError> for ViewError {
    fn from(error: &AppError) -> Self {
        Self {
            kind: error.kind(),
            message: error.user_message(),
        }
    }
}

/// A successfully loaded payload with its derived period index
#[derive(Debug, Clone)]
pub struct LoadedData<D: Dataset> {
    pub data: D,
    pub index: PeriodIndex<D::Summary>,
    pub selection: Selection,
    /// Date delays are measured against
    pub reference_date: NaiveDate,
    pub generation: u64,
}

/// Lifecycle of one analytics view.
///
/// Loading, data, and error are mutually exclusive: a new upload drops the
/// previous payload and selection before its own fetch resolves.
#[derive(Debug, Clone)]
pub enum ViewState<D: Dataset> {
    NoFile,
    Loading {
        generation: u64,
    },
    Loaded(LoadedData<D>),
    Error(ViewError),
}

impl<D: Dataset> Default for ViewState<D> {
    fn default() -> Self {
        ViewState::NoFile
    }
}

impl<D: Dataset> ViewState<D> {
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading { .. })
    }

    pub fn loaded(&self) -> Option<&LoadedData<D>> {
        match self {
            ViewState::Loaded(loaded) => Some(loaded),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ViewError> {
        match self {
            ViewState::Error(error) => Some(error),
            _ => None,
        }
    }

    /// Short state name for logs
    pub fn name(&self) -> &'static str {
        match self {
            ViewState::NoFile => "no_file",
            ViewState::Loading { .. } => "loading",
            ViewState::Loaded(_) => "loaded",
            ViewState::Error(_) => "error",
        }
    }
}
