pub mod analytics;
pub mod backend;
pub mod dashboard;
pub mod pending;
pub mod periods;
