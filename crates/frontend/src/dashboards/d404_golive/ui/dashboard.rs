use contracts::dashboards::d404_golive::{self, GoLiveParams, PHASES};
use contracts::shared::indicators::ValueFormat;
use contracts::shared::pipeline::TimeWindow;
use leptos::prelude::*;

use crate::layout::use_account_store;
use crate::shared::components::{time_window_options, BarList, ChartSection, FilterSelect, KpiRow};
use crate::shared::data_grid::DataGrid;
use crate::shared::date_utils::pipeline_context;
use crate::shared::page_frame::DashboardPage;

fn phase_options() -> Vec<(String, String)> {
    PHASES
        .iter()
        .map(|p| (p.to_string(), p.to_string()))
        .collect()
}

#[component]
pub fn GoLiveDashboard() -> impl IntoView {
    let store = use_account_store();
    let ctx = pipeline_context();
    let defaults = GoLiveParams::default();
    let window = RwSignal::new(defaults.window);
    let phase = RwSignal::new(defaults.phase);

    let model = store.derive(move |accounts| {
        let params = GoLiveParams {
            window: window.get(),
            phase: phase.get(),
        };
        d404_golive::build(accounts, &ctx, &params)
    });

    let window_code = Signal::derive(move || window.get().code().to_string());
    let on_window = Callback::new(move |code: String| {
        if let Some(w) = TimeWindow::from_code(&code) {
            window.set(w);
        }
    });
    let phase_value = Signal::derive(move || phase.get());
    let on_phase = Callback::new(move |p: String| phase.set(p));

    view! {
        <DashboardPage
            page_id="d404_golive--dashboard"
            title="Go Live Dashboard"
            subtitle="Implementation progress and Go Live tracking"
            actions=move || view! {
                <FilterSelect value=phase_value on_change=on_phase options=phase_options() />
                <FilterSelect value=window_code on_change=on_window options=time_window_options() />
            }.into_any()
        >
            {move || view! { <KpiRow kpis=model.with(|v| v.kpis().into_iter().cloned().collect()) /> }}

            <div class="chart-grid">
                <ChartSection
                    title="Implementation Progress by Account"
                    subtitle="Current completion % (weighted by hours)"
                >
                    {move || view! {
                        <BarList
                            points=model.with(|v| v.progress_chart.clone())
                            format=ValueFormat::Percent { decimals: 1 }
                        />
                    }}
                </ChartSection>
                <ChartSection title="Week-to-Week Variance" subtitle="Progress change from previous week">
                    {move || view! {
                        <BarList
                            points=model.with(|v| v.variance_chart.clone())
                            format=ValueFormat::SignedPercent { decimals: 1 }
                        />
                    }}
                </ChartSection>
                <ChartSection title="Customers by Journey Phase" subtitle="Total accounts in each phase">
                    {move || view! { <BarList points=model.with(|v| v.by_phase.clone()) /> }}
                </ChartSection>
            </div>

            <DataGrid table=Signal::derive(move || model.with(|v| v.by_milestone.clone())) />
            <DataGrid table=Signal::derive(move || model.with(|v| v.upcoming.clone())) />
            <DataGrid table=Signal::derive(move || model.with(|v| v.progress.clone())) />
        </DashboardPage>
    }
}
