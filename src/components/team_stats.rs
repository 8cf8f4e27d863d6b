//! Dashboard table of per-assignee totals.

use leptos::prelude::*;

use crate::net::types::TeamStat;
use crate::state::dashboard::NO_TEAM_STATS;

#[component]
pub fn TeamStats(stats: Vec<TeamStat>) -> impl IntoView {
    if stats.is_empty() {
        return view! { <div class="dashboard-empty">{NO_TEAM_STATS}</div> }.into_any();
    }

    let rows = stats
        .into_iter()
        .map(|s| {
            let test_id = format!("teamstat-row-{}", s.assignee);
            view! {
                <tr data-testid=test_id>
                    <td>{s.assignee}</td>
                    <td>{s.total}</td>
                    <td>{s.completed}</td>
                    <td>{s.overdue}</td>
                </tr>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="dashboard-team-stats">
            <table class="dashboard-table" aria-label="Team stats table">
                <thead>
                    <tr>
                        <th>"Assignee"</th>
                        <th>"Total Items"</th>
                        <th>"Completed"</th>
                        <th>"Overdue"</th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        </div>
    }
    .into_any()
}
