use super::dto::*;
use crate::domain::a001_account::Account;
use crate::shared::grid::GridTable;
use crate::shared::indicators::{ChartPoint, Kpi, Trend, ValueFormat};
use crate::shared::pipeline::{EnrichedAccount, GroupSpec, Pipeline, PipelineContext};

fn ranked_row(i: &EnrichedAccount<'_>) -> RankedAccountRow {
    RankedAccountRow {
        name: i.account.name.clone(),
        csat: i.account.csat,
        product: i.account.product.clone(),
        guru: i.account.guru.clone(),
        arr: i.account.arr,
    }
}

/// CSAT over every account in the snapshot
pub fn build(accounts: &[Account], ctx: &PipelineContext) -> PerformanceView {
    let all = Pipeline::new(accounts, ctx);

    let by_guru = all.group(
        &GroupSpec::by(|i: &EnrichedAccount| i.account.guru.clone())
            .summing(|i: &EnrichedAccount| i.account.csat),
    );
    let guru_rows: Vec<GuruPerformanceRow> = by_guru
        .iter()
        .map(|b| GuruPerformanceRow {
            guru: b.key.clone(),
            average_csat: b.average().unwrap_or_default(),
            accounts: b.count,
        })
        .collect();

    let band_count = |band: CsatBand| {
        all.items()
            .iter()
            .filter(|i| CsatBand::of(i.account.csat) == band)
            .count()
    };
    let distribution = CsatBand::ALL
        .iter()
        .map(|band| ChartPoint::new(band.label(), band_count(*band) as f64))
        .collect();

    // stable sorts, ties keep snapshot order
    let top = all
        .clone()
        .sorted_by(|a, b| b.account.csat.total_cmp(&a.account.csat))
        .take(RANKING_SIZE);
    let bottom = all
        .clone()
        .sorted_by(|a, b| a.account.csat.total_cmp(&b.account.csat))
        .take(RANKING_SIZE);

    PerformanceView {
        overall_csat: Kpi::new(
            "Overall CSAT",
            all.average(|i| i.account.csat),
            ValueFormat::Number { decimals: 2 },
        )
        .subtitle("Average score"),
        excellent: Kpi::count("Excellent Ratings", band_count(CsatBand::Excellent))
            .subtitle("4.5+ CSAT score")
            .trend(Trend::Up),
        good: Kpi::count("Good Ratings", band_count(CsatBand::Good)).subtitle("4.0-4.5 CSAT score"),
        poor: Kpi::count("Need Improvement", band_count(CsatBand::Poor))
            .subtitle("< 3.5 CSAT score")
            .trend(Trend::Down),
        distribution,
        csat_by_guru: guru_rows
            .iter()
            .map(|r| ChartPoint::new(r.guru.clone(), r.average_csat))
            .collect(),
        top: GridTable::new("Top 5 Performing Accounts", ranked_columns(), top.shape(ranked_row)),
        bottom: GridTable::new(
            "Bottom 5 Performing Accounts",
            ranked_columns(),
            bottom.shape(ranked_row),
        ),
        gurus: GridTable::new("Guru Performance Summary", guru_columns(), guru_rows),
    }
}
