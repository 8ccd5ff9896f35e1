use contracts::shared::pipeline::RiskTier;
use leptos::prelude::*;

/// Pill showing a risk tier's icon and label
#[component]
pub fn RiskBadge(
    tier: RiskTier,
    /// Optional count appended after the label
    #[prop(optional, into)]
    count: Option<usize>,
) -> impl IntoView {
    let class = format!("risk-badge risk-badge--{}", tier.code());
    let label = match count {
        Some(n) => format!("{} {}", tier.label(), n),
        None => tier.label().to_string(),
    };

    view! {
        <span class=class>
            <span class="risk-badge__icon">{tier.icon()}</span>
            {label}
        </span>
    }
}
