/// Search box and sort-arrow helpers shared by list views
use contracts::shared::grid::SortDirection;
use leptos::prelude::*;

/// Header suffix for a column's sort state
pub fn sort_indicator(direction: Option<SortDirection>) -> &'static str {
    direction.as_ref().map(SortDirection::arrow).unwrap_or("")
}

pub fn sort_class(direction: Option<SortDirection>) -> &'static str {
    if direction.is_some() {
        "data-grid__sort-icon data-grid__sort-icon--active"
    } else {
        "data-grid__sort-icon"
    }
}

/// Search box; every keystroke is reported through `on_change`
#[component]
pub fn SearchInput(
    /// Current search term
    #[prop(into)]
    value: Signal<String>,
    #[prop(into)]
    on_change: Callback<String>,
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    let is_filter_active = move || !value.get().is_empty();

    view! {
        <div class="search-input">
            <input
                type="text"
                placeholder=placeholder
                class=move || {
                    if is_filter_active() {
                        "search-input__field search-input__field--active"
                    } else {
                        "search-input__field"
                    }
                }
                prop:value=move || value.get()
                on:input=move |ev| on_change.run(event_target_value(&ev))
            />
            <Show when=is_filter_active>
                <button
                    class="search-input__clear"
                    title="Clear"
                    on:click=move |_| on_change.run(String::new())
                >
                    "×"
                </button>
            </Show>
        </div>
    }
}
