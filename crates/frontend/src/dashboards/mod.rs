pub mod d400_overview;
pub mod d401_alerts;
pub mod d402_churn;
pub mod d403_customers;
pub mod d404_golive;
pub mod d405_performance;
pub mod d406_ttv;

pub use d400_overview::ui::OverviewDashboard;
pub use d401_alerts::ui::AlertsDashboard;
pub use d402_churn::ui::ChurnDashboard;
pub use d403_customers::ui::CustomersDashboard;
pub use d404_golive::ui::GoLiveDashboard;
pub use d405_performance::ui::PerformanceDashboard;
pub use d406_ttv::ui::TtvDashboard;
