//! Root wrapper for every dashboard route.
//!
//! Sets `id="{page_id}"` and `data-page-category="dashboard"` on the root
//! element, renders the page header and shows the snapshot's loading or
//! error state above the content.

use leptos::prelude::*;
use thaw::Spinner;

use crate::layout::use_account_store;

#[component]
pub fn DashboardPage<A>(
    /// HTML id, e.g. `"d400_overview--dashboard"`
    page_id: &'static str,
    #[prop(into)] title: String,
    #[prop(optional, into)] subtitle: MaybeProp<String>,
    /// Header controls (filters)
    actions: A,
    children: Children,
) -> impl IntoView
where
    A: Fn() -> AnyView + 'static + Send,
{
    let store = use_account_store();

    view! {
        <div id=page_id data-page-category="dashboard" class="page page--dashboard">
            <div class="page-header">
                <div class="page-header__text">
                    <h1 class="page-header__title">{title}</h1>
                    {move || subtitle.get().map(|s| view! {
                        <div class="page-header__subtitle">{s}</div>
                    })}
                </div>
                <div class="page-header__actions">{actions()}</div>
            </div>

            <Show when=move || store.loading.get()>
                <div class="page__loading">
                    <Spinner />
                    <span>"Loading accounts..."</span>
                </div>
            </Show>

            {move || store.error.get().map(|err| view! {
                <div class="page__error">
                    <strong>"⚠ Failed to load accounts: "</strong>
                    {err}
                </div>
            })}

            <div class="page__content">{children()}</div>
        </div>
    }
}
