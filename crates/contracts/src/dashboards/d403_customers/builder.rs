use super::dto::*;
use crate::domain::a001_account::{Account, AccountStatus};
use crate::shared::grid::GridTable;
use crate::shared::indicators::{Kpi, Trend};
use crate::shared::pipeline::{
    EnrichedAccount, Pipeline, PipelineContext, TimeWindow, WindowDirection,
};

/// Risk notes shown per at-risk account
const NOTES_SHOWN: usize = 3;

fn customer_row(i: &EnrichedAccount<'_>) -> CustomerRow {
    CustomerRow {
        name: i.account.name.clone(),
        product: i.account.product.clone(),
        arr: i.account.arr,
        created_at: i.account.created_at.clone(),
        start_date: i.account.start_date.clone(),
        guru: i.account.guru.clone(),
        csat: i.account.csat,
    }
}

/// Customer lists over the whole snapshot. "At risk" here is the status flag
/// or any risk note, looser than the alert rules.
pub fn build(accounts: &[Account], ctx: &PipelineContext) -> CustomersView {
    let all = Pipeline::new(accounts, ctx);

    let new_customers = all.clone().select(|i| {
        TimeWindow::Week.contains(&i.account.created_at, ctx.now, WindowDirection::LookBack)
    });
    let active_onboarding = all
        .clone()
        .select(|i| i.account.status == AccountStatus::Open);
    let at_risk = all
        .clone()
        .select(|i| i.account.status == AccountStatus::AtRisk || !i.account.risk_notes.is_empty());
    let active_customers = all.clone().select(|i| !i.account.churned).count();

    let at_risk_rows = at_risk.shape(|i| AtRiskRow {
        name: i.account.name.clone(),
        arr: i.account.arr,
        product: i.account.product.clone(),
        guru: i.account.guru.clone(),
        notes: i
            .account
            .risk_notes
            .iter()
            .take(NOTES_SHOWN)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", "),
    });

    CustomersView {
        active_customers: Kpi::count("Active Customers", active_customers)
            .subtitle("Non-churned accounts"),
        new_customers: Kpi::count("New Customers", new_customers.count())
            .subtitle("Last 7 days")
            .trend(Trend::Up),
        active_onboarding_count: Kpi::count("Active Onboarding", active_onboarding.count())
            .subtitle("Currently onboarding"),
        at_risk_count: Kpi::count("At Risk", at_risk.count())
            .subtitle("Need attention")
            .trend(Trend::Down),
        new_customers_table: GridTable::new(
            "New Customers (Last 7 Days)",
            new_customer_columns(),
            new_customers.shape(customer_row),
        ),
        active_onboarding: GridTable::new(
            "Active Onboarding",
            active_onboarding_columns(),
            active_onboarding.shape(customer_row),
        ),
        at_risk: GridTable::new("At Risk Accounts", at_risk_columns(), at_risk_rows),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::metrics::parse_date;

    fn ctx() -> PipelineContext {
        PipelineContext::new(parse_date("2025-03-15T10:00:00Z").unwrap())
    }

    fn account(name: &str, created: &str) -> Account {
        let mut a = Account::new_onboarding(name, "Ana", "Fresh QMS", 1000.0);
        a.created_at = created.into();
        a
    }

    #[test]
    fn test_new_customers_last_seven_days() {
        let snapshot = vec![
            account("Fresh", "2025-03-12"),
            account("Edge", "2025-03-08T10:00:00Z"),
            account("Stale", "2025-03-08"),
        ];
        let view = build(&snapshot, &ctx());
        assert_eq!(view.new_customers.value, Some(2.0));
        assert_eq!(view.new_customers_table.rows[1].name, "Edge");
    }

    #[test]
    fn test_at_risk_notes_truncated() {
        let mut noted = account("Noted", "2025-01-01");
        noted.risk_notes = vec!["a".into(), "b".into(), "c".into(), "d".into()];
        let mut flagged = account("Flagged", "2025-01-01");
        flagged.status = AccountStatus::AtRisk;
        let mut churned = account("Gone", "2025-01-01");
        churned.churned = true;
        churned.status = AccountStatus::Closed;

        let view = build(&[noted, flagged, churned], &ctx());
        assert_eq!(view.at_risk.len(), 2);
        assert_eq!(view.at_risk.rows[0].notes, "a, b, c");
        assert_eq!(view.at_risk.rows[1].notes, "");
        assert_eq!(view.active_customers.value, Some(2.0));
        assert_eq!(view.active_onboarding_count.value, Some(1.0));
    }
}
