use serde::{Deserialize, Serialize};

use crate::shared::grid::{column, CellValue, Column, GridRow, GridTable};
use crate::shared::indicators::Kpi;

/// Row shared by the new-customer and active-onboarding tables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerRow {
    pub name: String,
    pub product: String,
    pub arr: f64,
    pub created_at: String,
    pub start_date: String,
    pub guru: String,
    pub csat: f64,
}

impl GridRow for CustomerRow {
    fn field(&self, field: &str) -> CellValue {
        match field {
            "name" => self.name.as_str().into(),
            "product" => self.product.as_str().into(),
            "arr" => self.arr.into(),
            "created_at" => self.created_at.as_str().into(),
            "start_date" => self.start_date.as_str().into(),
            "guru" => self.guru.as_str().into(),
            "csat" => self.csat.into(),
            _ => CellValue::Null,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtRiskRow {
    pub name: String,
    pub arr: f64,
    pub product: String,
    pub guru: String,
    /// First three risk notes joined by ", "
    pub notes: String,
}

impl GridRow for AtRiskRow {
    fn field(&self, field: &str) -> CellValue {
        match field {
            "name" => self.name.as_str().into(),
            "arr" => self.arr.into(),
            "product" => self.product.as_str().into(),
            "guru" => self.guru.as_str().into(),
            "notes" => self.notes.as_str().into(),
            _ => CellValue::Null,
        }
    }
}

pub fn new_customer_columns() -> Vec<Column> {
    vec![
        Column::new("Account", "name"),
        Column::new("Product", "product"),
        Column::new("ARR", "arr").render_with(column::money).align_right(),
        Column::new("Created Date", "created_at"),
        Column::new("Guru", "guru"),
    ]
}

pub fn active_onboarding_columns() -> Vec<Column> {
    vec![
        Column::new("Account", "name"),
        Column::new("Product", "product"),
        Column::new("ARR", "arr").render_with(column::money).align_right(),
        Column::new("Start Date", "start_date"),
        Column::new("Guru", "guru"),
        Column::new("CSAT", "csat").render_with(column::fixed_1).align_right(),
    ]
}

pub fn at_risk_columns() -> Vec<Column> {
    vec![
        Column::new("Account", "name"),
        Column::new("ARR", "arr").render_with(column::money).align_right(),
        Column::new("Product", "product"),
        Column::new("Guru", "guru"),
        Column::new("Risk Notes", "notes"),
    ]
}

#[derive(Debug, Clone)]
pub struct CustomersView {
    pub active_customers: Kpi,
    pub new_customers: Kpi,
    pub active_onboarding_count: Kpi,
    pub at_risk_count: Kpi,
    pub new_customers_table: GridTable<CustomerRow>,
    pub active_onboarding: GridTable<CustomerRow>,
    pub at_risk: GridTable<AtRiskRow>,
}

impl CustomersView {
    pub fn kpis(&self) -> [&Kpi; 4] {
        [
            &self.active_customers,
            &self.new_customers,
            &self.active_onboarding_count,
            &self.at_risk_count,
        ]
    }
}
