use serde::{Deserialize, Serialize};

use crate::shared::grid::{column, CellValue, Column, GridRow, GridTable, Tone};
use crate::shared::indicators::Kpi;
use crate::shared::pipeline::{GoLiveReadiness, RiskTier};

/// Critical account: stuck, or progress dropping fast
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriticalRow {
    pub name: String,
    pub issue: String,
    pub progress: f64,
    pub variance: f64,
    pub phase: String,
    pub arr: f64,
    pub guru: String,
}

impl GridRow for CriticalRow {
    fn field(&self, field: &str) -> CellValue {
        match field {
            "name" => self.name.as_str().into(),
            "issue" => self.issue.as_str().into(),
            "progress" => self.progress.into(),
            "variance" => self.variance.into(),
            "phase" => self.phase.as_str().into(),
            "arr" => self.arr.into(),
            "guru" => self.guru.as_str().into(),
            _ => CellValue::Null,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HighRiskRow {
    pub name: String,
    pub issue: String,
    pub progress: f64,
    pub journey_status: String,
    pub phase: String,
    pub product: String,
    pub guru: String,
}

impl GridRow for HighRiskRow {
    fn field(&self, field: &str) -> CellValue {
        match field {
            "name" => self.name.as_str().into(),
            "issue" => self.issue.as_str().into(),
            "progress" => self.progress.into(),
            "journey_status" => self.journey_status.as_str().into(),
            "phase" => self.phase.as_str().into(),
            "product" => self.product.as_str().into(),
            "guru" => self.guru.as_str().into(),
            _ => CellValue::Null,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NearGoLiveRow {
    pub name: String,
    pub days_until_go_live: i64,
    pub go_live_date: Option<String>,
    pub progress: f64,
    pub readiness: GoLiveReadiness,
    pub arr: f64,
    pub guru: String,
}

impl GridRow for NearGoLiveRow {
    fn field(&self, field: &str) -> CellValue {
        match field {
            "name" => self.name.as_str().into(),
            "days_until_go_live" => self.days_until_go_live.into(),
            "go_live_date" => self.go_live_date.clone().into(),
            "progress" => self.progress.into(),
            "readiness" => self.readiness.label().into(),
            "arr" => self.arr.into(),
            "guru" => self.guru.as_str().into(),
            _ => CellValue::Null,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StalledRow {
    pub name: String,
    pub issue: String,
    pub progress: f64,
    pub phase: String,
    pub product: String,
    pub risk_notes: Vec<String>,
    pub guru: String,
}

impl GridRow for StalledRow {
    fn field(&self, field: &str) -> CellValue {
        match field {
            "name" => self.name.as_str().into(),
            "issue" => self.issue.as_str().into(),
            "progress" => self.progress.into(),
            "phase" => self.phase.as_str().into(),
            "product" => self.product.as_str().into(),
            "risk_notes" => self.risk_notes.clone().into(),
            "guru" => self.guru.as_str().into(),
            _ => CellValue::Null,
        }
    }
}

fn progress_tone(value: &CellValue) -> Tone {
    match value.as_number() {
        Some(n) if n < 30.0 => Tone::Negative,
        Some(n) if n < 50.0 => Tone::Warning,
        _ => Tone::Neutral,
    }
}

fn readiness_tone(value: &CellValue) -> Tone {
    match value.to_string().as_str() {
        "On Track" => Tone::Positive,
        "At Risk" => Tone::Warning,
        _ => Tone::Negative,
    }
}

fn days_tone(value: &CellValue) -> Tone {
    match value.as_number() {
        Some(n) if n <= 7.0 => Tone::Negative,
        _ => Tone::Warning,
    }
}

pub fn critical_columns() -> Vec<Column> {
    vec![
        Column::new("Account", "name"),
        Column::new("Issue", "issue"),
        Column::new("Progress", "progress")
            .render_with(column::percent_1)
            .tone_with(|_| Tone::Negative),
        Column::new("Variance", "variance")
            .render_with(column::signed_percent_1)
            .tone_with(column::variance_tone),
        Column::new("Phase", "phase"),
        Column::new("ARR", "arr").render_with(column::money).align_right(),
        Column::new("Onboarding Guru", "guru"),
    ]
}

pub fn high_risk_columns() -> Vec<Column> {
    vec![
        Column::new("Account", "name"),
        Column::new("Issue", "issue"),
        Column::new("Progress", "progress")
            .render_with(column::percent_1)
            .tone_with(progress_tone),
        Column::new("Journey Status", "journey_status"),
        Column::new("Phase", "phase"),
        Column::new("Product", "product"),
        Column::new("Onboarding Guru", "guru"),
    ]
}

pub fn near_go_live_columns() -> Vec<Column> {
    vec![
        Column::new("Account", "name"),
        Column::new("Days Until Go Live", "days_until_go_live")
            .render_with(column::days)
            .tone_with(days_tone),
        Column::new("Go Live Date", "go_live_date"),
        Column::new("Progress", "progress").render_with(column::percent_1),
        Column::new("Status", "readiness").tone_with(readiness_tone),
        Column::new("ARR", "arr").render_with(column::money).align_right(),
        Column::new("Onboarding Guru", "guru"),
    ]
}

pub fn stalled_columns() -> Vec<Column> {
    vec![
        Column::new("Account", "name"),
        Column::new("Issue", "issue"),
        Column::new("Progress", "progress").render_with(column::percent_1),
        Column::new("Phase", "phase"),
        Column::new("Product", "product"),
        Column::new("Risk Notes", "risk_notes").render_with(column::latest_note),
        Column::new("Onboarding Guru", "guru"),
    ]
}

#[derive(Debug, Clone)]
pub struct AlertsView {
    pub critical_count: Kpi,
    pub high_risk_count: Kpi,
    pub near_go_live_count: Kpi,
    pub stalled_count: Kpi,
    /// Onboarding accounts per badge tier, every tier listed
    pub tiers: Vec<(RiskTier, usize)>,
    pub critical: GridTable<CriticalRow>,
    pub high_risk: GridTable<HighRiskRow>,
    pub near_go_live: GridTable<NearGoLiveRow>,
    pub stalled: GridTable<StalledRow>,
}

impl AlertsView {
    pub fn kpis(&self) -> [&Kpi; 4] {
        [
            &self.critical_count,
            &self.high_risk_count,
            &self.near_go_live_count,
            &self.stalled_count,
        ]
    }
}
