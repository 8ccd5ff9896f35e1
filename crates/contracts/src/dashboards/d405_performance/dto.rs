use serde::{Deserialize, Serialize};

use crate::shared::grid::{column, CellValue, Column, GridRow, GridTable};
use crate::shared::indicators::{ChartPoint, Kpi};

/// Rows in the top and bottom tables
pub const RANKING_SIZE: usize = 5;

/// CSAT score band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CsatBand {
    Excellent,
    Good,
    Average,
    Poor,
}

impl CsatBand {
    pub const ALL: [CsatBand; 4] = [
        CsatBand::Excellent,
        CsatBand::Good,
        CsatBand::Average,
        CsatBand::Poor,
    ];

    pub fn of(csat: f64) -> Self {
        if csat >= 4.5 {
            CsatBand::Excellent
        } else if csat >= 4.0 {
            CsatBand::Good
        } else if csat >= 3.5 {
            CsatBand::Average
        } else {
            CsatBand::Poor
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CsatBand::Excellent => "Excellent (4.5+)",
            CsatBand::Good => "Good (4.0-4.5)",
            CsatBand::Average => "Average (3.5-4.0)",
            CsatBand::Poor => "Poor (<3.5)",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedAccountRow {
    pub name: String,
    pub csat: f64,
    pub product: String,
    pub guru: String,
    pub arr: f64,
}

impl GridRow for RankedAccountRow {
    fn field(&self, field: &str) -> CellValue {
        match field {
            "name" => self.name.as_str().into(),
            "csat" => self.csat.into(),
            "product" => self.product.as_str().into(),
            "guru" => self.guru.as_str().into(),
            "arr" => self.arr.into(),
            _ => CellValue::Null,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuruPerformanceRow {
    pub guru: String,
    pub average_csat: f64,
    pub accounts: usize,
}

impl GridRow for GuruPerformanceRow {
    fn field(&self, field: &str) -> CellValue {
        match field {
            "guru" => self.guru.as_str().into(),
            "average_csat" => self.average_csat.into(),
            "accounts" => self.accounts.into(),
            _ => CellValue::Null,
        }
    }
}

pub fn ranked_columns() -> Vec<Column> {
    vec![
        Column::new("Account", "name"),
        Column::new("CSAT", "csat").render_with(column::fixed_1).align_right(),
        Column::new("Product", "product"),
        Column::new("Guru", "guru"),
    ]
}

pub fn guru_columns() -> Vec<Column> {
    vec![
        Column::new("Guru", "guru"),
        Column::new("Average CSAT", "average_csat")
            .render_with(column::fixed_2)
            .align_right(),
        Column::new("Number of Accounts", "accounts").align_right(),
    ]
}

#[derive(Debug, Clone)]
pub struct PerformanceView {
    pub overall_csat: Kpi,
    pub excellent: Kpi,
    pub good: Kpi,
    pub poor: Kpi,
    pub distribution: Vec<ChartPoint>,
    pub csat_by_guru: Vec<ChartPoint>,
    pub top: GridTable<RankedAccountRow>,
    pub bottom: GridTable<RankedAccountRow>,
    pub gurus: GridTable<GuruPerformanceRow>,
}

impl PerformanceView {
    pub fn kpis(&self) -> [&Kpi; 4] {
        [&self.overall_csat, &self.excellent, &self.good, &self.poor]
    }
}
