use contracts::dashboards::d401_alerts;
use contracts::shared::grid::GridOptions;
use contracts::shared::pipeline::RiskThresholds;
use leptos::prelude::*;

use crate::layout::use_account_store;
use crate::shared::components::{KpiRow, RiskBadge};
use crate::shared::data_grid::DataGrid;
use crate::shared::date_utils::pipeline_context;
use crate::shared::page_frame::DashboardPage;

#[component]
pub fn AlertsDashboard() -> impl IntoView {
    let store = use_account_store();
    let ctx = pipeline_context();
    let thresholds = RiskThresholds::default();

    let model = store.derive(move |accounts| d401_alerts::build(accounts, &ctx, &thresholds));

    view! {
        <DashboardPage
            page_id="d401_alerts--dashboard"
            title="Alerts & Notifications"
            subtitle="Accounts requiring immediate attention"
            actions=|| ().into_any()
        >
            {move || view! { <KpiRow kpis=model.with(|v| v.kpis().into_iter().cloned().collect()) /> }}

            <div class="risk-summary">
                {move || model.with(|v| {
                    v.tiers
                        .iter()
                        .map(|(tier, count)| view! { <RiskBadge tier=*tier count=*count /> })
                        .collect_view()
                })}
            </div>

            <DataGrid table=Signal::derive(move || model.with(|v| v.critical.clone())) options=GridOptions::with_max_height(500) />
            <DataGrid table=Signal::derive(move || model.with(|v| v.high_risk.clone())) options=GridOptions::with_max_height(500) />
            <DataGrid table=Signal::derive(move || model.with(|v| v.near_go_live.clone())) options=GridOptions::with_max_height(500) />
            <DataGrid table=Signal::derive(move || model.with(|v| v.stalled.clone())) options=GridOptions::with_max_height(500) />
        </DashboardPage>
    }
}
