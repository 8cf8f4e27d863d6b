//! Single headline number on the dashboard.

use leptos::prelude::*;

#[component]
pub fn MetricCard(
    title: &'static str,
    #[prop(into)] value: String,
    /// Highlight the card as a problem indicator.
    #[prop(optional)]
    danger: bool,
) -> impl IntoView {
    view! {
        <div class="dashboard-card" class:dashboard-card--danger=danger role="region" aria-label=title>
            <div class="dashboard-card__title">{title}</div>
            <div class="dashboard-card__value">{value}</div>
        </div>
    }
}
