pub mod delay;

pub use delay::{assess_records, derive_delay, AssessedRecord};
