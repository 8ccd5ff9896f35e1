//! Per-page derivations. Each `build` turns the account snapshot into the
//! cards, chart series and tables of one dashboard page.

pub mod d400_overview;
pub mod d401_alerts;
pub mod d402_churn;
pub mod d403_customers;
pub mod d404_golive;
pub mod d405_performance;
pub mod d406_ttv;
