pub mod upload;

pub use upload::{DateRange, UploadRequest};
