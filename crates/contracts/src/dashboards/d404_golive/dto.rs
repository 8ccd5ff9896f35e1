use serde::{Deserialize, Serialize};

use crate::shared::grid::{column, CellValue, Column, GridRow, GridTable};
use crate::shared::indicators::{ChartPoint, Kpi};
use crate::shared::pipeline::TimeWindow;

/// Phase filter options; "All" disables the filter
pub const PHASES: [&str; 6] = [
    "All",
    "Kickoff",
    "Planning",
    "Implementation",
    "Testing",
    "Go Live",
];

pub const ALL_PHASES: &str = "All";

/// Bars shown in the progress charts
pub const CHART_LIMIT: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoLiveParams {
    /// Look-ahead window on the milestone date
    pub window: TimeWindow,
    pub phase: String,
}

impl Default for GoLiveParams {
    fn default() -> Self {
        Self {
            window: TimeWindow::Week,
            phase: ALL_PHASES.to_string(),
        }
    }
}

impl GoLiveParams {
    pub fn matches_phase(&self, phase: &str) -> bool {
        self.phase == ALL_PHASES || self.phase == phase
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MilestoneRow {
    pub name: String,
    pub product: String,
    pub arr: f64,
    pub phase: String,
    pub milestone_date: Option<String>,
    pub guru: String,
}

impl GridRow for MilestoneRow {
    fn field(&self, field: &str) -> CellValue {
        match field {
            "name" => self.name.as_str().into(),
            "product" => self.product.as_str().into(),
            "arr" => self.arr.into(),
            "phase" => self.phase.as_str().into(),
            "milestone_date" => self.milestone_date.clone().into(),
            "guru" => self.guru.as_str().into(),
            _ => CellValue::Null,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpcomingGoLiveRow {
    pub name: String,
    pub go_live_date: Option<String>,
    pub phase: String,
    pub progress: f64,
    pub arr: f64,
    pub guru: String,
}

impl GridRow for UpcomingGoLiveRow {
    fn field(&self, field: &str) -> CellValue {
        match field {
            "name" => self.name.as_str().into(),
            "go_live_date" => self.go_live_date.clone().into(),
            "phase" => self.phase.as_str().into(),
            "progress" => self.progress.into(),
            "arr" => self.arr.into(),
            "guru" => self.guru.as_str().into(),
            _ => CellValue::Null,
        }
    }
}

/// Progress tuple of one onboarding account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressRow {
    pub name: String,
    pub current: f64,
    pub previous: f64,
    pub variance: f64,
    pub phase: String,
    pub guru: String,
}

impl GridRow for ProgressRow {
    fn field(&self, field: &str) -> CellValue {
        match field {
            "name" => self.name.as_str().into(),
            "current" => self.current.into(),
            "previous" => self.previous.into(),
            "variance" => self.variance.into(),
            "phase" => self.phase.as_str().into(),
            "guru" => self.guru.as_str().into(),
            _ => CellValue::Null,
        }
    }
}

pub fn milestone_columns() -> Vec<Column> {
    vec![
        Column::new("Account", "name"),
        Column::new("Product", "product"),
        Column::new("ARR", "arr").render_with(column::money).align_right(),
        Column::new("Phase", "phase"),
        Column::new("Milestone Date", "milestone_date"),
        Column::new("Onboarding Guru", "guru"),
    ]
}

pub fn upcoming_columns() -> Vec<Column> {
    vec![
        Column::new("Account", "name"),
        Column::new("Go Live Date", "go_live_date"),
        Column::new("Phase", "phase"),
        Column::new("Progress %", "progress").render_with(column::percent_1),
        Column::new("ARR", "arr").render_with(column::money).align_right(),
        Column::new("Onboarding Guru", "guru"),
    ]
}

pub fn progress_columns() -> Vec<Column> {
    vec![
        Column::new("Account", "name"),
        Column::new("Current Progress %", "current").render_with(column::percent_1),
        Column::new("Previous Week %", "previous").render_with(column::percent_1),
        Column::new("Variance", "variance")
            .render_with(column::signed_percent_1)
            .tone_with(column::variance_tone),
        Column::new("Phase", "phase"),
        Column::new("Onboarding Guru", "guru"),
    ]
}

#[derive(Debug, Clone)]
pub struct GoLiveView {
    pub average_progress: Kpi,
    pub average_variance: Kpi,
    pub milestone_count: Kpi,
    pub upcoming_count: Kpi,
    pub progress_chart: Vec<ChartPoint>,
    pub variance_chart: Vec<ChartPoint>,
    pub by_phase: Vec<ChartPoint>,
    pub by_milestone: GridTable<MilestoneRow>,
    pub upcoming: GridTable<UpcomingGoLiveRow>,
    pub progress: GridTable<ProgressRow>,
}

impl GoLiveView {
    pub fn kpis(&self) -> [&Kpi; 4] {
        [
            &self.average_progress,
            &self.average_variance,
            &self.milestone_count,
            &self.upcoming_count,
        ]
    }
}
