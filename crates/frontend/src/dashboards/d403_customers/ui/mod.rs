pub mod dashboard;

pub use dashboard::CustomersDashboard;
