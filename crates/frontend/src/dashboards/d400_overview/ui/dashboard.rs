use contracts::dashboards::d400_overview::{self, OverviewParams};
use contracts::shared::indicators::ValueFormat;
use contracts::shared::pipeline::TimeWindow;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::layout::use_account_store;
use crate::shared::components::{time_window_options, BarList, ChartSection, FilterSelect, KpiRow};
use crate::shared::data_grid::DataGrid;
use crate::shared::date_utils::pipeline_context;
use crate::shared::page_frame::DashboardPage;

#[component]
pub fn OverviewDashboard() -> impl IntoView {
    let store = use_account_store();
    let ctx = pipeline_context();
    let window = RwSignal::new(TimeWindow::default());

    let model = store.derive(move |accounts| {
        d400_overview::build(accounts, &ctx, &OverviewParams { window: window.get() })
    });

    let window_code = Signal::derive(move || window.get().code().to_string());
    let on_window = Callback::new(move |code: String| {
        if let Some(w) = TimeWindow::from_code(&code) {
            window.set(w);
        }
    });

    let stuck = move || model.with(|v| v.stuck.value.unwrap_or(0.0) as usize);
    let has_stuck = move || stuck() != 0;

    view! {
        <DashboardPage
            page_id="d400_overview--dashboard"
            title="Overview"
            subtitle="General metrics and insights (Onboarding Accounts Only)"
            actions=move || view! {
                <FilterSelect value=window_code on_change=on_window options=time_window_options() />
            }.into_any()
        >
            {move || view! { <KpiRow kpis=model.with(|v| v.kpis().into_iter().cloned().collect()) /> }}

            <Show when=has_stuck>
                <div class="alert-banner">
                    <span class="alert-banner__icon">"🚨"</span>
                    <div class="alert-banner__text">
                        <h3>
                            {move || {
                                let n = stuck();
                                format!(
                                    "{} Account{} Require Immediate Attention",
                                    n,
                                    if n > 1 { "s" } else { "" }
                                )
                            }}
                        </h3>
                        <p>"Journey status is stuck. Review alerts page for details."</p>
                    </div>
                    <A href="/alerts" attr:class="alert-banner__link">"View Alerts"</A>
                </div>
            </Show>

            <DataGrid table=Signal::derive(move || model.with(|v| v.completed.clone())) />

            <div class="chart-grid">
                <ChartSection title="ARR by Onboarding Guru" subtitle="Total ARR per Onboarding Guru">
                    {move || view! {
                        <BarList points=model.with(|v| v.arr_by_guru.clone()) format=ValueFormat::Money />
                    }}
                </ChartSection>
                <ChartSection title="Guru by Products" subtitle="Account count by Guru and Product">
                    {move || view! { <BarList points=model.with(|v| v.guru_products.clone()) /> }}
                </ChartSection>
                <ChartSection title="Implementation Type - Count" subtitle="Accounts by Implementation Type">
                    {move || view! { <BarList points=model.with(|v| v.implementation_count.clone()) /> }}
                </ChartSection>
                <ChartSection title="Implementation Type - Total ARR" subtitle="ARR distribution">
                    {move || view! {
                        <BarList points=model.with(|v| v.implementation_arr.clone()) format=ValueFormat::Money />
                    }}
                </ChartSection>
            </div>
        </DashboardPage>
    }
}
