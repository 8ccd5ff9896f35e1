use super::dto::{completed_columns, CompletedRow, OverviewParams, OverviewView};
use crate::domain::a001_account::{Account, AccountStatus, JourneyStatus};
use crate::shared::grid::GridTable;
use crate::shared::indicators::{count_series, sum_series, Kpi, Trend, ValueFormat};
use crate::shared::pipeline::{
    EnrichedAccount, GroupSpec, Pipeline, PipelineContext, WindowDirection,
};

/// Onboarding overview. Completed onboardings are taken from every account,
/// the rest of the page from onboarding accounts only.
pub fn build(accounts: &[Account], ctx: &PipelineContext, params: &OverviewParams) -> OverviewView {
    let onboarding = Pipeline::new(accounts, ctx).select(|i| i.account.is_onboarding);

    let completed = Pipeline::new(accounts, ctx)
        .select(|i| i.account.journey_status == JourneyStatus::Complete)
        .select(|i| {
            i.account
                .completed_date
                .as_deref()
                .is_some_and(|d| params.window.contains(d, ctx.now, WindowDirection::LookBack))
        });

    let active = onboarding
        .clone()
        .select(|i| i.account.status == AccountStatus::Open)
        .count();
    let stuck = onboarding
        .clone()
        .select(|i| i.account.journey_status == JourneyStatus::Stuck)
        .count();

    let arr_by_guru = onboarding.group(
        &GroupSpec::by(|i: &EnrichedAccount| i.account.guru.clone())
            .summing(|i: &EnrichedAccount| i.account.arr),
    );
    let guru_products = onboarding.group(&GroupSpec::by(|i: &EnrichedAccount| {
        format!("{} / {}", i.account.guru, i.account.product)
    }));
    let implementation = onboarding.group(
        &GroupSpec::by(|i: &EnrichedAccount| i.account.implementation_type.clone())
            .summing(|i: &EnrichedAccount| i.account.arr),
    );

    let rows = completed.shape(|i| CompletedRow {
        name: i.account.name.clone(),
        product: i.account.product.clone(),
        arr: i.account.arr,
        guru: i.account.guru.clone(),
        completed_date: i.account.completed_date.clone(),
    });

    let window = params.window.code();
    OverviewView {
        total_arr: Kpi::new(
            "Total ARR (Onboarding)",
            Some(onboarding.sum(|i| i.account.arr)),
            ValueFormat::Money,
        )
        .subtitle("Onboarding accounts only")
        .trend(Trend::Up),
        active_onboarding: Kpi::count("Active Onboarding", active).subtitle("Currently onboarding"),
        completed_onboarding: Kpi::count("Complete Onboarding", completed.count())
            .subtitle(format!("This {}", window))
            .trend(Trend::Up),
        stuck: Kpi::count("Stuck (At Risk)", stuck)
            .subtitle("Journey Status: Stuck")
            .trend(Trend::Down),
        completed: GridTable::new(
            format!("Complete Onboarding Accounts ({})", window),
            completed_columns(),
            rows,
        ),
        arr_by_guru: sum_series(&arr_by_guru),
        guru_products: count_series(&guru_products),
        implementation_count: count_series(&implementation),
        implementation_arr: sum_series(&implementation),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::metrics::parse_date;
    use crate::shared::pipeline::TimeWindow;

    fn ctx() -> PipelineContext {
        PipelineContext::new(parse_date("2025-03-15").unwrap())
    }

    fn snapshot() -> Vec<Account> {
        let mut a = Account::new_onboarding("Acme", "Ana", "Fresh QMS", 1000.0);
        a.implementation_type = "Standard".into();

        let mut b = Account::new_onboarding("Beta", "Sam", "Migrated QMS", 2000.0);
        b.journey_status = JourneyStatus::Stuck;
        b.status = AccountStatus::AtRisk;
        b.implementation_type = "Custom".into();

        let mut c = Account::new_onboarding("Core", "Ana", "Fresh QMS", 500.0);
        c.implementation_type = "Standard".into();

        // completed recently, no longer onboarding
        let mut d = Account::new_onboarding("Done", "Sam", "Fresh QMS", 9000.0);
        d.is_onboarding = false;
        d.journey_status = JourneyStatus::Complete;
        d.completed_date = Some("2025-03-10".into());

        let mut e = Account::new_onboarding("Old", "Sam", "Fresh QMS", 100.0);
        e.is_onboarding = false;
        e.journey_status = JourneyStatus::Complete;
        e.completed_date = Some("2025-01-02".into());

        vec![a, b, c, d, e]
    }

    #[test]
    fn test_kpis() {
        let view = build(&snapshot(), &ctx(), &OverviewParams::default());
        assert_eq!(view.total_arr.value, Some(3500.0));
        assert_eq!(view.active_onboarding.value, Some(2.0));
        assert_eq!(view.stuck.value, Some(1.0));
        assert_eq!(view.completed_onboarding.value, Some(1.0));
        assert_eq!(view.completed_onboarding.subtitle, "This week");
        assert_eq!(view.completed.rows[0].name, "Done");
    }

    #[test]
    fn test_window_widens_completed() {
        let params = OverviewParams {
            window: TimeWindow::Quarter,
        };
        let view = build(&snapshot(), &ctx(), &params);
        assert_eq!(view.completed.len(), 2);
        assert_eq!(view.completed.title, "Complete Onboarding Accounts (quarter)");
    }

    #[test]
    fn test_groupings() {
        let view = build(&snapshot(), &ctx(), &OverviewParams::default());
        assert_eq!(view.arr_by_guru[0].label, "Ana");
        assert_eq!(view.arr_by_guru[0].value, 1500.0);
        assert_eq!(view.arr_by_guru[1].value, 2000.0);

        assert_eq!(view.guru_products.len(), 2);
        assert_eq!(view.guru_products[0].label, "Ana / Fresh QMS");
        assert_eq!(view.guru_products[0].value, 2.0);

        assert_eq!(view.implementation_count[0].label, "Standard");
        assert_eq!(view.implementation_count[0].value, 2.0);
        assert_eq!(view.implementation_arr[1].value, 2000.0);
    }

    #[test]
    fn test_empty_snapshot() {
        let view = build(&[], &ctx(), &OverviewParams::default());
        assert_eq!(view.total_arr.value, Some(0.0));
        assert!(view.completed.is_empty());
        assert!(view.arr_by_guru.is_empty());
    }
}
