use crate::dashboards::{
    AlertsDashboard, ChurnDashboard, CustomersDashboard, GoLiveDashboard, OverviewDashboard,
    PerformanceDashboard, TtvDashboard,
};
use crate::layout::{AccountStore, TopHeader};
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn App() -> impl IntoView {
    // One snapshot for all pages, fetched on mount
    let store = AccountStore::new();
    store.load();
    provide_context(store);

    view! {
        <Router>
            <div class="app-layout">
                <TopHeader />
                <main class="app-main">
                    <Routes fallback=|| view! { <div class="page__empty">"Page not found"</div> }>
                        <Route path=path!("/") view=OverviewDashboard />
                        <Route path=path!("/alerts") view=AlertsDashboard />
                        <Route path=path!("/churn") view=ChurnDashboard />
                        <Route path=path!("/customers") view=CustomersDashboard />
                        <Route path=path!("/golive") view=GoLiveDashboard />
                        <Route path=path!("/performance") view=PerformanceDashboard />
                        <Route path=path!("/ttv") view=TtvDashboard />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}
