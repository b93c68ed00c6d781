pub mod dataset;
pub mod state;

pub use dataset::{Dataset, PendingDataset};
pub use state::{FetchTicket, LoadedData, ViewError, ViewState};
