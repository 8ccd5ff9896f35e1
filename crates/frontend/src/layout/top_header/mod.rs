use leptos::prelude::*;
use leptos_router::components::A;

/// Dashboard pages in navigation order: (path, label)
pub const PAGES: [(&str, &str); 7] = [
    ("/", "Overview"),
    ("/alerts", "Alerts"),
    ("/churn", "Churn"),
    ("/customers", "Customers"),
    ("/golive", "Go Live"),
    ("/performance", "Performance"),
    ("/ttv", "Time to Value"),
];

#[component]
pub fn TopHeader() -> impl IntoView {
    view! {
        <header class="top-header">
            <div class="top-header__brand">"Onboarding Insights"</div>
            <nav class="top-header__nav">
                {PAGES
                    .into_iter()
                    .map(|(path, label)| view! {
                        <A href=path exact=true attr:class="top-header__link">{label}</A>
                    })
                    .collect_view()}
            </nav>
        </header>
    }
}
