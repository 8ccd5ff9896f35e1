use super::dto::*;
use crate::domain::a001_account::Account;
use crate::shared::grid::GridTable;
use crate::shared::indicators::{Kpi, Trend};
use crate::shared::pipeline::risk::{self, RiskThresholds};
use crate::shared::pipeline::{classify, GoLiveReadiness, Pipeline, PipelineContext, RiskTier};

pub fn build(accounts: &[Account], ctx: &PipelineContext, t: &RiskThresholds) -> AlertsView {
    let onboarding = Pipeline::new(accounts, ctx).select(|i| i.account.is_onboarding);

    let critical = onboarding.clone().select(|i| risk::is_critical(i, t));
    let high_risk = onboarding.clone().select(|i| risk::is_high_risk(i, t));
    let near = onboarding
        .clone()
        .select(|i| risk::is_near(i.days_to_go_live, t.milestone_window_days));
    let stalled = onboarding.clone().select(risk::is_stalled);

    let tiers = RiskTier::ALL
        .iter()
        .map(|tier| {
            let n = onboarding
                .items()
                .iter()
                .filter(|i| classify(i, t) == *tier)
                .count();
            (*tier, n)
        })
        .collect();

    let critical_rows = critical.shape(|i| CriticalRow {
        name: i.account.name.clone(),
        issue: risk::critical_issue(i).to_string(),
        progress: i.progress.current,
        variance: i.progress.variance,
        phase: i.account.phase.clone(),
        arr: i.account.arr,
        guru: i.account.guru.clone(),
    });
    let high_risk_rows = high_risk.shape(|i| HighRiskRow {
        name: i.account.name.clone(),
        issue: risk::high_risk_issue(i, t),
        progress: i.progress.current,
        journey_status: i.account.journey_status.display_name().to_string(),
        phase: i.account.phase.clone(),
        product: i.account.product.clone(),
        guru: i.account.guru.clone(),
    });
    let near_rows = near.shape(|i| NearGoLiveRow {
        name: i.account.name.clone(),
        days_until_go_live: i.days_to_go_live.unwrap_or_default(),
        go_live_date: i.account.go_live_date.clone(),
        progress: i.progress.current,
        readiness: GoLiveReadiness::from_progress(i.progress.current),
        arr: i.account.arr,
        guru: i.account.guru.clone(),
    });
    let stalled_rows = stalled.shape(|i| StalledRow {
        name: i.account.name.clone(),
        issue: "No Progress This Week".to_string(),
        progress: i.progress.current,
        phase: i.account.phase.clone(),
        product: i.account.product.clone(),
        risk_notes: i.account.risk_notes.clone(),
        guru: i.account.guru.clone(),
    });

    let window = t.milestone_window_days;
    AlertsView {
        critical_count: Kpi::count("Critical Alerts", critical.count())
            .subtitle("Stuck or declining")
            .trend(Trend::Down),
        high_risk_count: Kpi::count("High Risk", high_risk.count())
            .subtitle("Low progress or multiple risks")
            .trend(Trend::Down),
        near_go_live_count: Kpi::count("Near Go Live", near.count())
            .subtitle(format!("Within {} days", window)),
        stalled_count: Kpi::count("Stalled Projects", stalled.count())
            .subtitle("No progress this week")
            .trend(Trend::Down),
        tiers,
        critical: GridTable::new(
            "Critical Accounts - Immediate Action Required",
            critical_columns(),
            critical_rows,
        ),
        high_risk: GridTable::new("High Risk Accounts", high_risk_columns(), high_risk_rows),
        near_go_live: GridTable::new(
            format!("Near Go Live - Next {} Days", window),
            near_go_live_columns(),
            near_rows,
        ),
        stalled: GridTable::new(
            "Stalled Projects - No Progress This Week",
            stalled_columns(),
            stalled_rows,
        ),
    }
}
