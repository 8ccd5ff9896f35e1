use contracts::dashboards::d405_performance;
use contracts::shared::indicators::ValueFormat;
use leptos::prelude::*;

use crate::layout::use_account_store;
use crate::shared::components::{BarList, ChartSection, KpiRow};
use crate::shared::data_grid::DataGrid;
use crate::shared::date_utils::pipeline_context;
use crate::shared::page_frame::DashboardPage;

#[component]
pub fn PerformanceDashboard() -> impl IntoView {
    let store = use_account_store();
    let ctx = pipeline_context();

    let model = store.derive(move |accounts| d405_performance::build(accounts, &ctx));

    view! {
        <DashboardPage
            page_id="d405_performance--dashboard"
            title="Performance & CSAT"
            subtitle="Customer satisfaction metrics and trends"
            actions=|| ().into_any()
        >
            {move || view! { <KpiRow kpis=model.with(|v| v.kpis().into_iter().cloned().collect()) /> }}

            <div class="chart-grid">
                <ChartSection title="CSAT by Guru" subtitle="Average score per Onboarding Guru">
                    {move || view! {
                        <BarList
                            points=model.with(|v| v.csat_by_guru.clone())
                            format=ValueFormat::Number { decimals: 2 }
                        />
                    }}
                </ChartSection>
                <ChartSection title="CSAT Distribution" subtitle="Accounts by rating range">
                    {move || view! { <BarList points=model.with(|v| v.distribution.clone()) /> }}
                </ChartSection>
            </div>

            <div class="grid-pair">
                <DataGrid table=Signal::derive(move || model.with(|v| v.top.clone())) />
                <DataGrid table=Signal::derive(move || model.with(|v| v.bottom.clone())) />
            </div>
            <DataGrid table=Signal::derive(move || model.with(|v| v.gurus.clone())) />
        </DashboardPage>
    }
}
