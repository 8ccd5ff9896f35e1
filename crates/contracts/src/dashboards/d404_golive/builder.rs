use super::dto::*;
use crate::domain::a001_account::Account;
use crate::shared::grid::GridTable;
use crate::shared::indicators::{count_series, ChartPoint, Kpi, ValueFormat};
use crate::shared::metrics::{self, parse_date};
use crate::shared::pipeline::{
    EnrichedAccount, GroupSpec, Pipeline, PipelineContext, WindowDirection,
};

pub fn build(accounts: &[Account], ctx: &PipelineContext, params: &GoLiveParams) -> GoLiveView {
    let onboarding = Pipeline::new(accounts, ctx).select(|i| i.account.is_onboarding);

    // zero-hour accounts have no progress and stay out of the averages
    let average_progress = metrics::average(
        onboarding
            .items()
            .iter()
            .map(|i| i.progress.current)
            .filter(|v| v.is_finite()),
    );
    let average_variance = metrics::average(
        onboarding
            .items()
            .iter()
            .map(|i| i.progress.variance)
            .filter(|v| v.is_finite()),
    );

    let by_milestone = onboarding
        .clone()
        .select(|i| {
            i.account
                .milestone_date
                .as_deref()
                .is_some_and(|d| params.window.contains(d, ctx.now, WindowDirection::LookAhead))
        })
        .select(|i| params.matches_phase(&i.account.phase));

    // unparseable dates sort last
    let upcoming = onboarding
        .clone()
        .select(|i| i.account.go_live_date.is_some())
        .sorted_by(|a, b| {
            let da = a.account.go_live_date.as_deref().and_then(parse_date);
            let db = b.account.go_live_date.as_deref().and_then(parse_date);
            (da.is_none(), da).cmp(&(db.is_none(), db))
        });

    let by_phase = onboarding.group(&GroupSpec::by(|i: &EnrichedAccount| i.account.phase.clone()));

    let chart = onboarding.clone().take(CHART_LIMIT);
    let progress_chart = chart.shape(|i| ChartPoint::new(i.account.name.clone(), i.progress.current));
    let variance_chart =
        chart.shape(|i| ChartPoint::new(i.account.name.clone(), i.progress.variance));

    let milestone_rows = by_milestone.shape(|i| MilestoneRow {
        name: i.account.name.clone(),
        product: i.account.product.clone(),
        arr: i.account.arr,
        phase: i.account.phase.clone(),
        milestone_date: i.account.milestone_date.clone(),
        guru: i.account.guru.clone(),
    });
    let upcoming_rows = upcoming.shape(|i| UpcomingGoLiveRow {
        name: i.account.name.clone(),
        go_live_date: i.account.go_live_date.clone(),
        phase: i.account.phase.clone(),
        progress: i.progress.current,
        arr: i.account.arr,
        guru: i.account.guru.clone(),
    });
    let progress_rows = onboarding.shape(|i| ProgressRow {
        name: i.account.name.clone(),
        current: i.progress.current,
        previous: i.progress.previous,
        variance: i.progress.variance,
        phase: i.account.phase.clone(),
        guru: i.account.guru.clone(),
    });

    let window = params.window.code();
    GoLiveView {
        average_progress: Kpi::new(
            "Avg Implementation Progress",
            average_progress,
            ValueFormat::Percent { decimals: 1 },
        )
        .subtitle("Weighted by hours"),
        average_variance: Kpi::new(
            "Week-to-Week Variance",
            average_variance,
            ValueFormat::SignedPercent { decimals: 1 },
        )
        .subtitle("Progress change"),
        milestone_count: Kpi::count(
            format!("Customers by Milestone ({})", window),
            by_milestone.count(),
        )
        .subtitle(format!("Phase: {}", params.phase)),
        upcoming_count: Kpi::count("Upcoming Go Lives", upcoming.count()).subtitle("Total scheduled"),
        progress_chart,
        variance_chart,
        by_phase: count_series(&by_phase),
        by_milestone: GridTable::new(
            format!(
                "Customers by Milestone Date ({}) & Phase ({})",
                window, params.phase
            ),
            milestone_columns(),
            milestone_rows,
        ),
        upcoming: GridTable::new("Upcoming Go Lives", upcoming_columns(), upcoming_rows),
        progress: GridTable::new(
            "Implementation Progress Details (Weighted by Hours)",
            progress_columns(),
            progress_rows,
        ),
    }
}
