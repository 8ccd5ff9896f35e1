use chrono::Datelike;

use super::dto::{churn_columns, ChurnParams, ChurnRow, ChurnView};
use crate::domain::a001_account::Account;
use crate::shared::format;
use crate::shared::grid::GridTable;
use crate::shared::indicators::{count_series, Kpi, Trend, ValueFormat};
use crate::shared::metrics::parse_date;
use crate::shared::pipeline::{EnrichedAccount, GroupSpec, Pipeline, PipelineContext};

pub fn build(accounts: &[Account], ctx: &PipelineContext, params: &ChurnParams) -> ChurnView {
    let year = params.year.unwrap_or_else(|| ctx.now.year());

    let churned = Pipeline::new(accounts, ctx).select(|i| {
        i.account.churned
            && parse_date(&i.account.created_at).is_some_and(|d| d.year() == year)
    });

    let count = churned.count();
    let lost_arr = churned.sum(|i| i.account.arr);
    // share of every account, churned or not
    let rate = if accounts.is_empty() {
        None
    } else {
        Some(count as f64 / accounts.len() as f64 * 100.0)
    };

    let by_product = churned.group(&GroupSpec::by(|i: &EnrichedAccount| i.account.product.clone()));
    let by_guru = churned.group(&GroupSpec::by(|i: &EnrichedAccount| i.account.guru.clone()));

    let rows = churned.shape(|i| ChurnRow {
        name: i.account.name.clone(),
        arr: i.account.arr,
        product: i.account.product.clone(),
        guru: i.account.guru.clone(),
        reason: i.account.churn_reason.clone(),
        churn_notes: i.account.churn_notes.clone(),
    });

    ChurnView {
        year,
        churned_count: Kpi::count("Churned Accounts", count)
            .subtitle(format!("This year ({})", year))
            .trend(Trend::Down),
        churned_arr: Kpi::new("Total Churned ARR", Some(lost_arr), ValueFormat::Money)
            .subtitle("Lost revenue")
            .trend(Trend::Down),
        churn_rate: Kpi::new("Churn Rate", rate, ValueFormat::Percent { decimals: 1 })
            .subtitle("Of total accounts")
            .trend(Trend::Down),
        average_churned_arr: Kpi::new(
            "Avg Churned ARR",
            churned.average(|i| i.account.arr).map(f64::round),
            ValueFormat::Money,
        )
        .subtitle("Per churned account"),
        by_product: count_series(&by_product),
        by_guru: count_series(&by_guru),
        churned: GridTable::new(
            format!(
                "Churned Accounts ({}) - Total ARR: {}",
                year,
                format::format_money(lost_arr)
            ),
            churn_columns(),
            rows,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> PipelineContext {
        PipelineContext::new(parse_date("2025-06-01").unwrap())
    }

    fn churned(name: &str, product: &str, created: &str, arr: f64) -> Account {
        let mut a = Account::new_onboarding(name, "Ana", product, arr);
        a.is_onboarding = false;
        a.churned = true;
        a.churn_reason = Some("Budget".into());
        a.created_at = created.into();
        a
    }

    #[test]
    fn test_churn_kpis() {
        let mut active = Account::new_onboarding("Live", "Sam", "Fresh QMS", 500.0);
        active.created_at = "2025-02-01".into();
        let snapshot = vec![
            churned("A", "Fresh QMS", "2025-01-10", 1000.0),
            churned("B", "Enterprise QMS", "2025-03-10", 2001.0),
            churned("Old", "Fresh QMS", "2024-11-01", 9999.0),
            active,
        ];

        let view = build(&snapshot, &ctx(), &ChurnParams::default());
        assert_eq!(view.year, 2025);
        assert_eq!(view.churned_count.value, Some(2.0));
        assert_eq!(view.churned_arr.value, Some(3001.0));
        assert_eq!(view.churn_rate.display_value(), "50.0%");
        assert_eq!(view.average_churned_arr.value, Some(1501.0));
        assert_eq!(view.by_product.len(), 2);
        assert_eq!(view.by_guru[0].value, 2.0);
        assert_eq!(view.churned.title, "Churned Accounts (2025) - Total ARR: $3,001");
    }

    #[test]
    fn test_explicit_year() {
        let snapshot = vec![churned("Old", "Fresh QMS", "2024-11-01", 9999.0)];
        let view = build(&snapshot, &ctx(), &ChurnParams { year: Some(2024) });
        assert_eq!(view.churned.len(), 1);
        assert_eq!(view.churned.rows[0].reason.as_deref(), Some("Budget"));
    }

    #[test]
    fn test_empty_guards() {
        let view = build(&[], &ctx(), &ChurnParams::default());
        assert_eq!(view.churn_rate.value, None);
        assert_eq!(view.average_churned_arr.value, None);
        assert_eq!(view.average_churned_arr.display_value(), format::DASH);
    }
}
