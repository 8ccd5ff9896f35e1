pub mod dashboard;

pub use dashboard::TtvDashboard;
