use serde::{Deserialize, Serialize};

use crate::shared::grid::{column, CellValue, Column, GridRow, GridTable};
use crate::shared::indicators::{ChartPoint, Kpi};
use crate::shared::pipeline::TimeWindow;

/// Page parameters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverviewParams {
    /// Look-back window for completed onboardings
    pub window: TimeWindow,
}

/// Account that completed onboarding inside the window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletedRow {
    pub name: String,
    pub product: String,
    pub arr: f64,
    pub guru: String,
    pub completed_date: Option<String>,
}

impl GridRow for CompletedRow {
    fn field(&self, field: &str) -> CellValue {
        match field {
            "name" => self.name.as_str().into(),
            "product" => self.product.as_str().into(),
            "arr" => self.arr.into(),
            "guru" => self.guru.as_str().into(),
            "completed_date" => self.completed_date.clone().into(),
            _ => CellValue::Null,
        }
    }
}

pub fn completed_columns() -> Vec<Column> {
    vec![
        Column::new("Account", "name"),
        Column::new("Product", "product"),
        Column::new("ARR", "arr").render_with(column::money).align_right(),
        Column::new("Onboarding Guru", "guru"),
        Column::new("Completed Date", "completed_date"),
    ]
}

/// Everything the overview page renders
#[derive(Debug, Clone)]
pub struct OverviewView {
    pub total_arr: Kpi,
    pub active_onboarding: Kpi,
    pub completed_onboarding: Kpi,
    pub stuck: Kpi,
    pub completed: GridTable<CompletedRow>,
    pub arr_by_guru: Vec<ChartPoint>,
    /// Account count per guru and product
    pub guru_products: Vec<ChartPoint>,
    pub implementation_count: Vec<ChartPoint>,
    pub implementation_arr: Vec<ChartPoint>,
}

impl OverviewView {
    pub fn kpis(&self) -> [&Kpi; 4] {
        [
            &self.total_arr,
            &self.active_onboarding,
            &self.completed_onboarding,
            &self.stuck,
        ]
    }
}
