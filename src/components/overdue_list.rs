//! Dashboard table of overdue action items.

use chrono::Local;
use leptos::prelude::*;

use crate::net::types::OverdueItem;
use crate::state::dashboard::NO_OVERDUE;
use crate::util::time::format_due_date;

#[component]
pub fn OverdueList(items: Vec<OverdueItem>) -> impl IntoView {
    if items.is_empty() {
        return view! { <div class="dashboard-empty">{NO_OVERDUE}</div> }.into_any();
    }

    let rows = items
        .into_iter()
        .map(|it| {
            let due = format_due_date(&it.due_date, &Local);
            view! {
                <tr data-testid=format!("overdue-row-{}", it.id)>
                    <td>{it.description}</td>
                    <td>{it.assignee}</td>
                    <td>{due}</td>
                    <td>{it.meeting_title}</td>
                </tr>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="dashboard-overdue-list">
            <table class="dashboard-table" aria-label="Overdue items table">
                <thead>
                    <tr>
                        <th>"Description"</th>
                        <th>"Assignee"</th>
                        <th>"Due Date"</th>
                        <th>"Meeting"</th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        </div>
    }
    .into_any()
}
