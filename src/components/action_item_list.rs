//! Flat action-item list with a per-item status selector.
//!
//! DESIGN
//! ======
//! Pure renderer: it never mutates items. A status change is forwarded to
//! `on_item_update`, and the item's selector stays disabled until that call
//! settles. The pending marks outlive re-renders of individual rows.
//!
//! The selector is rebuilt whenever its pending mark changes, so once a
//! call settles it shows the item's stored status even when a failed update
//! left the refetched list unchanged.

use chrono::{Local, Utc};
use leptos::prelude::*;

pub use crate::state::action_items::ItemUpdate;
use crate::net::types::{ActionItem, ActionItemStatus};
use crate::state::action_items::{EMPTY_MESSAGE, PendingUpdates, is_overdue, run_status_update};
use crate::util::time::format_due_date;

/// Run the update in the background under a pending mark.
pub(crate) fn dispatch_update(
    pending: RwSignal<PendingUpdates>,
    on_item_update: &ItemUpdate,
    id: String,
    status: ActionItemStatus,
) {
    let on_item_update = on_item_update.clone();
    leptos::task::spawn_local(async move {
        run_status_update(&pending, &on_item_update, id, status).await;
    });
}

#[component]
pub fn ActionItemList(#[prop(into)] items: Signal<Vec<ActionItem>>, on_item_update: ItemUpdate) -> impl IntoView {
    let pending = RwSignal::new(PendingUpdates::default());

    view! {
        <Show
            when=move || items.with(|list| !list.is_empty())
            fallback=|| view! { <div class="action-items__empty">{EMPTY_MESSAGE}</div> }
        >
            <ul class="action-item-list">
                {
                    let on_item_update = on_item_update.clone();
                    move || {
                        let now = Utc::now();
                        items
                            .get()
                            .into_iter()
                            .map(|item| action_item_row(item, now, pending, on_item_update.clone()))
                            .collect::<Vec<_>>()
                    }
                }
            </ul>
        </Show>
    }
}

fn action_item_row(
    item: ActionItem,
    now: chrono::DateTime<Utc>,
    pending: RwSignal<PendingUpdates>,
    on_item_update: ItemUpdate,
) -> impl IntoView {
    let overdue = is_overdue(&item, now);
    let select_id = format!("status-{}", item.id);
    let aria_label = format!("status-select-{}", item.id);

    let status_select = {
        let item = item.clone();
        let select_id = select_id.clone();
        move || {
            let (shown, busy) = pending.with(|p| (p.shown_status(&item), p.is_pending(&item.id)));
            let id = item.id.clone();
            let on_item_update = on_item_update.clone();
            let on_change = move |ev: leptos::ev::Event| {
                let Some(status) = ActionItemStatus::from_label(&event_target_value(&ev)) else {
                    return;
                };
                dispatch_update(pending, &on_item_update, id.clone(), status);
            };
            let options = ActionItemStatus::ALL
                .into_iter()
                .map(|status| view! { <option value=status.label() selected={status == shown}>{status.label()}</option> })
                .collect::<Vec<_>>();
            view! {
                <select
                    id=select_id.clone()
                    aria-label=aria_label.clone()
                    prop:value=shown.label()
                    on:change=on_change
                    disabled=busy
                >
                    {options}
                </select>
            }
        }
    };

    view! {
        <li
            class="action-item"
            class:action-item--overdue=overdue
            data-testid="action-item"
            data-overdue=overdue.then_some("true")
        >
            <div class="action-item__description">
                <strong>{item.description}</strong>
            </div>
            {item.assignee.map(|assignee| view! {
                <div class="action-item__meta">
                    <span>"Assignee: "</span>
                    <span>{assignee}</span>
                </div>
            })}
            {item.due_date.map(|due| view! {
                <div class="action-item__meta">
                    <span>"Due: "</span>
                    <span>{format_due_date(&due, &Local)}</span>
                </div>
            })}
            <div class="action-item__status">
                <label for=select_id>"Status"</label>
                {status_select}
            </div>
        </li>
    }
}
