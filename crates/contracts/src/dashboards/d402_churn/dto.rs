use serde::{Deserialize, Serialize};

use crate::shared::grid::{column, CellValue, Column, GridRow, GridTable};
use crate::shared::indicators::{ChartPoint, Kpi};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChurnParams {
    /// Creation year of the churned accounts; `None` means the current year
    pub year: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChurnRow {
    pub name: String,
    pub arr: f64,
    pub product: String,
    pub guru: String,
    pub reason: Option<String>,
    pub churn_notes: Vec<String>,
}

impl GridRow for ChurnRow {
    fn field(&self, field: &str) -> CellValue {
        match field {
            "name" => self.name.as_str().into(),
            "arr" => self.arr.into(),
            "product" => self.product.as_str().into(),
            "guru" => self.guru.as_str().into(),
            "reason" => self.reason.clone().into(),
            "churn_notes" => self.churn_notes.clone().into(),
            _ => CellValue::Null,
        }
    }
}

pub fn churn_columns() -> Vec<Column> {
    vec![
        Column::new("Account", "name"),
        Column::new("ARR", "arr").render_with(column::money).align_right(),
        Column::new("Product", "product"),
        Column::new("Guru", "guru"),
        Column::new("Churn Reason", "reason"),
        Column::new("Latest Note", "churn_notes").render_with(column::latest_note),
    ]
}

#[derive(Debug, Clone)]
pub struct ChurnView {
    pub year: i32,
    pub churned_count: Kpi,
    pub churned_arr: Kpi,
    pub churn_rate: Kpi,
    pub average_churned_arr: Kpi,
    pub by_product: Vec<ChartPoint>,
    pub by_guru: Vec<ChartPoint>,
    pub churned: GridTable<ChurnRow>,
}

impl ChurnView {
    pub fn kpis(&self) -> [&Kpi; 4] {
        [
            &self.churned_count,
            &self.churned_arr,
            &self.churn_rate,
            &self.average_churned_arr,
        ]
    }
}
