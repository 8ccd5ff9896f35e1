pub mod dashboard;

pub use dashboard::AlertsDashboard;
