use serde::{Deserialize, Serialize};

use crate::shared::grid::{column, CellValue, Column, GridRow, GridTable};
use crate::shared::indicators::Kpi;

/// Products with their own TTV card
pub const TTV_PRODUCTS: [&str; 3] = ["Fresh QMS", "Migrated QMS", "Enterprise QMS"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TtvRow {
    pub name: String,
    pub product: String,
    pub start_date: String,
    pub validation_date: Option<String>,
    /// `None` when a date is missing or unparseable
    pub days: Option<f64>,
    pub guru: String,
}

impl GridRow for TtvRow {
    fn field(&self, field: &str) -> CellValue {
        match field {
            "name" => self.name.as_str().into(),
            "product" => self.product.as_str().into(),
            "start_date" => self.start_date.as_str().into(),
            "validation_date" => self.validation_date.clone().into(),
            "days" => self.days.into(),
            "guru" => self.guru.as_str().into(),
            _ => CellValue::Null,
        }
    }
}

pub fn ttv_columns() -> Vec<Column> {
    vec![
        Column::new("Account", "name"),
        Column::new("Product", "product"),
        Column::new("Start Date", "start_date"),
        Column::new("Validation Date", "validation_date"),
        Column::new("Days to TTV", "days")
            .render_with(column::fixed_1)
            .align_right(),
        Column::new("Guru", "guru"),
    ]
}

#[derive(Debug, Clone)]
pub struct TtvView {
    pub overall: Kpi,
    /// One card per entry of `TTV_PRODUCTS`
    pub by_product: Vec<Kpi>,
    pub details: GridTable<TtvRow>,
}

impl TtvView {
    pub fn kpis(&self) -> Vec<&Kpi> {
        std::iter::once(&self.overall)
            .chain(self.by_product.iter())
            .collect()
    }
}
