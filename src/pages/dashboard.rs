//! Team dashboard page: headline metrics, overdue items and per-assignee stats.

use leptos::prelude::*;

use crate::components::metric_card::MetricCard;
use crate::components::overdue_list::OverdueList;
use crate::components::team_stats::TeamStats;
use crate::net::backend::HttpBackend;
use crate::net::types::DashboardMetrics;
use crate::state::dashboard::{format_rate, load_dashboard};
use crate::state::load::LoadState;
use crate::state::sequence::MountFlag;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let state = RwSignal::new(LoadState::<DashboardMetrics>::Loading);
    let mounted = MountFlag::new();
    on_cleanup({
        let mounted = mounted.clone();
        move || mounted.unmount()
    });

    leptos::task::spawn_local(async move {
        let loaded = load_dashboard(&HttpBackend).await;
        if mounted.is_mounted() {
            state.set(loaded);
        }
    });

    view! {
        <div class="dashboard-page">
            {move || match state.get() {
                LoadState::Loading => view! { <div class="dashboard-loading">"Loading..."</div> }.into_any(),
                LoadState::Failed(message) => {
                    view! { <div class="dashboard-error" role="alert">{message}</div> }.into_any()
                }
                LoadState::Loaded(metrics) => metrics_view(metrics).into_any(),
            }}
        </div>
    }
}

fn metrics_view(metrics: DashboardMetrics) -> impl IntoView {
    let summary = metrics.summary;
    view! {
        <h2>"Team Dashboard"</h2>
        <div class="dashboard-cards">
            <MetricCard title="Total Action Items" value=summary.total_action_items.to_string()/>
            <MetricCard title="Completion Rate" value=format_rate(summary.completion_rate)/>
            <MetricCard title="Overdue Items" value=summary.overdue_count.to_string() danger=true/>
        </div>
        <section>
            <h3>"Overdue Items"</h3>
            <OverdueList items=metrics.overdue_items/>
        </section>
        <section>
            <h3>"Team Stats"</h3>
            <TeamStats stats=metrics.team_stats/>
        </section>
    }
}
