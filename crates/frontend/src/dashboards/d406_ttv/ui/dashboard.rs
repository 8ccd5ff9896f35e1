use contracts::dashboards::d406_ttv;
use contracts::shared::grid::GridOptions;
use leptos::prelude::*;

use crate::layout::use_account_store;
use crate::shared::components::KpiRow;
use crate::shared::data_grid::DataGrid;
use crate::shared::date_utils::pipeline_context;
use crate::shared::page_frame::DashboardPage;

#[component]
pub fn TtvDashboard() -> impl IntoView {
    let store = use_account_store();
    let ctx = pipeline_context();

    let model = store.derive(move |accounts| d406_ttv::build(accounts, &ctx));

    view! {
        <DashboardPage
            page_id="d406_ttv--dashboard"
            title="Time to Value (TTV)"
            subtitle="Average days from start to validation"
            actions=|| ().into_any()
        >
            {move || view! { <KpiRow kpis=model.with(|v| v.kpis().into_iter().cloned().collect()) /> }}

            <DataGrid table=Signal::derive(move || model.with(|v| v.details.clone())) options=GridOptions::with_max_height(600) />
        </DashboardPage>
    }
}
