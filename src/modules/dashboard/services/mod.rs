pub mod dashboard;
pub mod view;

pub use dashboard::Dashboard;
pub use view::AnalyticsView;
