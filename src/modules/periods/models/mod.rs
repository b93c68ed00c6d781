pub mod month_key;
pub mod selection;

pub use month_key::{MonthKey, MONTH_NAMES};
pub use selection::{Selection, GLOBAL_SELECTION};
