pub mod coerce;
pub mod dates;
pub mod error;
pub mod money;

pub use error::{AppError, ErrorKind, Result};
