use contracts::dashboards::d403_customers;
use leptos::prelude::*;

use crate::layout::use_account_store;
use crate::shared::components::KpiRow;
use crate::shared::data_grid::DataGrid;
use crate::shared::date_utils::pipeline_context;
use crate::shared::page_frame::DashboardPage;

#[component]
pub fn CustomersDashboard() -> impl IntoView {
    let store = use_account_store();
    let ctx = pipeline_context();

    let model = store.derive(move |accounts| d403_customers::build(accounts, &ctx));

    view! {
        <DashboardPage
            page_id="d403_customers--dashboard"
            title="Customers"
            subtitle="Customer accounts and onboarding status"
            actions=|| ().into_any()
        >
            {move || view! { <KpiRow kpis=model.with(|v| v.kpis().into_iter().cloned().collect()) /> }}

            <DataGrid table=Signal::derive(move || model.with(|v| v.new_customers_table.clone())) />
            <DataGrid table=Signal::derive(move || model.with(|v| v.active_onboarding.clone())) />
            <DataGrid table=Signal::derive(move || model.with(|v| v.at_risk.clone())) />
        </DashboardPage>
    }
}
