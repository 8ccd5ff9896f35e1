use contracts::shared::indicators::{Kpi, Trend};
use leptos::prelude::*;

fn trend_arrow(trend: Trend) -> Option<(&'static str, &'static str)> {
    match trend {
        Trend::Up => Some(("\u{2191}", "kpi-card__trend kpi-card__trend--up")),
        Trend::Down => Some(("\u{2193}", "kpi-card__trend kpi-card__trend--down")),
        Trend::Neutral => None,
    }
}

/// Headline number with optional subtitle and trend arrow
#[component]
pub fn KpiCard(kpi: Kpi) -> impl IntoView {
    let value = kpi.display_value();
    let arrow = trend_arrow(kpi.trend).map(|(arrow, cls)| view! { <span class=cls>{arrow}</span> });
    let subtitle = (!kpi.subtitle.is_empty())
        .then(|| view! { <div class="kpi-card__subtitle">{kpi.subtitle.clone()}</div> });

    view! {
        <div class="kpi-card">
            <div class="kpi-card__title">{kpi.title}</div>
            <div class="kpi-card__value">
                {value}
                {arrow}
            </div>
            {subtitle}
        </div>
    }
}

/// Responsive row of KPI cards
#[component]
pub fn KpiRow(kpis: Vec<Kpi>) -> impl IntoView {
    view! {
        <div class="kpi-row">
            {kpis.into_iter().map(|kpi| view! { <KpiCard kpi=kpi /> }).collect_view()}
        </div>
    }
}
