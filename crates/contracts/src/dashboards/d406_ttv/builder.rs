use super::dto::{ttv_columns, TtvRow, TtvView, TTV_PRODUCTS};
use crate::domain::a001_account::Account;
use crate::shared::grid::GridTable;
use crate::shared::indicators::{Kpi, Trend, ValueFormat};
use crate::shared::metrics;
use crate::shared::pipeline::{EnrichedAccount, Pipeline, PipelineContext};

fn average_ttv<'a, 'b: 'a, I>(items: I) -> Option<f64>
where
    I: IntoIterator<Item = &'a EnrichedAccount<'b>>,
{
    metrics::average(items.into_iter().filter_map(|i| i.ttv_days))
}

/// Start-to-validation time. Accounts without both dates are listed but left
/// out of the averages.
pub fn build(accounts: &[Account], ctx: &PipelineContext) -> TtvView {
    let all = Pipeline::new(accounts, ctx);
    let days = ValueFormat::Number { decimals: 1 };

    let by_product = TTV_PRODUCTS
        .iter()
        .map(|product| {
            let value = average_ttv(
                all.items()
                    .iter()
                    .filter(|i| i.account.product == *product),
            );
            Kpi::new(format!("{} TTV", product), value, days)
                .subtitle("days average")
                .trend(Trend::Down)
        })
        .collect();

    let rows = all.shape(|i| TtvRow {
        name: i.account.name.clone(),
        product: i.account.product.clone(),
        start_date: i.account.start_date.clone(),
        validation_date: i.account.validation_date.clone(),
        days: i.ttv_days,
        guru: i.account.guru.clone(),
    });

    TtvView {
        overall: Kpi::new("Overall Average TTV", average_ttv(all.items()), days)
            .subtitle("days average"),
        by_product,
        details: GridTable::new("TTV Details by Account", ttv_columns(), rows),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::metrics::parse_date;

    fn ctx() -> PipelineContext {
        PipelineContext::new(parse_date("2025-06-01").unwrap())
    }

    fn account(name: &str, product: &str, start: &str, validation: Option<&str>) -> Account {
        let mut a = Account::new_onboarding(name, "Ana", product, 1000.0);
        a.start_date = start.into();
        a.validation_date = validation.map(str::to_string);
        a
    }

    #[test]
    fn test_ttv_averages() {
        let snapshot = vec![
            account("A", "Fresh QMS", "2025-01-01", Some("2025-01-31")),
            account("B", "Fresh QMS", "2025-01-01", Some("2025-01-11")),
            account("C", "Enterprise QMS", "2025-01-01", Some("2025-01-01T12:00:00Z")),
            account("D", "Migrated QMS", "2025-01-01", None),
        ];
        let view = build(&snapshot, &ctx());

        assert_eq!(view.by_product[0].value, Some(20.0));
        assert_eq!(view.by_product[0].title, "Fresh QMS TTV");
        assert_eq!(view.by_product[1].value, None);
        assert_eq!(view.by_product[1].display_value(), "—");
        assert_eq!(view.by_product[2].display_value(), "0.5");
        assert_eq!(view.overall.display_value(), "13.5");

        assert_eq!(view.details.len(), 4);
        assert_eq!(view.details.rows[3].days, None);
        assert_eq!(view.kpis().len(), 4);
    }

    #[test]
    fn test_empty_snapshot() {
        let view = build(&[], &ctx());
        assert_eq!(view.overall.value, None);
        assert!(view.details.is_empty());
    }
}
