use contracts::dashboards::d402_churn::{self, ChurnParams};
use contracts::shared::grid::GridOptions;
use leptos::prelude::*;

use crate::layout::use_account_store;
use crate::shared::components::{BarList, ChartSection, KpiRow};
use crate::shared::data_grid::DataGrid;
use crate::shared::date_utils::pipeline_context;
use crate::shared::page_frame::DashboardPage;

#[component]
pub fn ChurnDashboard() -> impl IntoView {
    let store = use_account_store();
    let ctx = pipeline_context();

    let model = store.derive(move |accounts| {
        d402_churn::build(accounts, &ctx, &ChurnParams::default())
    });

    view! {
        <DashboardPage
            page_id="d402_churn--dashboard"
            title="Churn Analysis"
            subtitle="Churned accounts and reasons"
            actions=|| ().into_any()
        >
            {move || view! { <KpiRow kpis=model.with(|v| v.kpis().into_iter().cloned().collect()) /> }}

            <div class="chart-grid">
                <ChartSection title="Churn by Product" subtitle="Number of churned accounts">
                    {move || view! { <BarList points=model.with(|v| v.by_product.clone()) /> }}
                </ChartSection>
                <ChartSection title="Churn by Guru" subtitle="Number of churned accounts">
                    {move || view! { <BarList points=model.with(|v| v.by_guru.clone()) /> }}
                </ChartSection>
            </div>

            <DataGrid table=Signal::derive(move || model.with(|v| v.churned.clone())) options=GridOptions::with_max_height(600) />
        </DashboardPage>
    }
}
