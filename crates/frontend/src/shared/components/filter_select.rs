use contracts::shared::pipeline::TimeWindow;
use leptos::prelude::*;

/// Labelled `<select>` over fixed `(value, label)` options
#[component]
pub fn FilterSelect(
    #[prop(optional, into)] label: MaybeProp<String>,
    /// Currently selected option value
    #[prop(into)]
    value: Signal<String>,
    on_change: Callback<String>,
    options: Vec<(String, String)>,
) -> impl IntoView {
    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! { <label class="form__label">{l}</label> })}
            <select
                class="form__select"
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                {options
                    .into_iter()
                    .map(|(val, text)| {
                        let selected_val = val.clone();
                        view! {
                            <option value=val selected=move || value.get() == selected_val>
                                {text}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}

/// Options for a `TimeWindow` selector: ("week", "This Week"), ...
pub fn time_window_options() -> Vec<(String, String)> {
    TimeWindow::ALL
        .iter()
        .map(|w| (w.code().to_string(), format!("This {}", w.label())))
        .collect()
}
