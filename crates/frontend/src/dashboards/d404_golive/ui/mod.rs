pub mod dashboard;

pub use dashboard::GoLiveDashboard;
