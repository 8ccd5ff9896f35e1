pub mod chart_section;
pub mod filter_select;
pub mod kpi_card;
pub mod risk_badge;

pub use chart_section::{BarList, ChartSection};
pub use filter_select::{time_window_options, FilterSelect};
pub use kpi_card::{KpiCard, KpiRow};
pub use risk_badge::RiskBadge;
