use contracts::shared::indicators::{ChartPoint, ValueFormat};
use leptos::prelude::*;

/// Titled panel around a chart
#[component]
pub fn ChartSection(
    #[prop(into)] title: String,
    #[prop(optional, into)] subtitle: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="chart-section">
            <div class="chart-section__header">
                <h3 class="chart-section__title">{title}</h3>
                {move || subtitle.get().map(|s| view! { <p class="chart-section__subtitle">{s}</p> })}
            </div>
            <div class="chart-section__body">{children()}</div>
        </div>
    }
}

/// Bar width in percent of the largest magnitude in the series
fn bar_width(value: f64, max: f64) -> f64 {
    if max > 0.0 && value.is_finite() {
        (value.abs() / max * 100.0).min(100.0)
    } else {
        0.0
    }
}

/// Horizontal bar chart, one row per point
#[component]
pub fn BarList(
    points: Vec<ChartPoint>,
    #[prop(optional, into)] format: Option<ValueFormat>,
) -> impl IntoView {
    let format = format.unwrap_or(ValueFormat::Integer);
    let max = points
        .iter()
        .map(|p| p.value.abs())
        .filter(|v| v.is_finite())
        .fold(0.0_f64, f64::max);

    if points.is_empty() {
        return view! { <div class="bar-list__empty">"No data available"</div> }.into_any();
    }

    view! {
        <div class="bar-list">
            {points
                .into_iter()
                .map(|point| {
                    let fill = if point.value < 0.0 {
                        "bar-list__fill bar-list__fill--negative"
                    } else {
                        "bar-list__fill"
                    };
                    let style = format!("width: {:.1}%;", bar_width(point.value, max));
                    let title = point.label.clone();
                    view! {
                        <div class="bar-list__row">
                            <div class="bar-list__label" title=title>{point.label}</div>
                            <div class="bar-list__track">
                                <div class=fill style=style></div>
                            </div>
                            <div class="bar-list__value">{format.apply(point.value)}</div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_width_scales_to_largest() {
        assert_eq!(bar_width(50.0, 200.0), 25.0);
        assert_eq!(bar_width(200.0, 200.0), 100.0);
    }

    #[test]
    fn test_bar_width_uses_magnitude_for_negatives() {
        assert_eq!(bar_width(-10.0, 20.0), 50.0);
    }

    #[test]
    fn test_bar_width_guards() {
        assert_eq!(bar_width(5.0, 0.0), 0.0);
        assert_eq!(bar_width(f64::NAN, 10.0), 0.0);
    }
}
