//! Three-column board of action items with HTML5 drag and drop.
//!
//! DESIGN
//! ======
//! A drag is tracked in a local signal from `dragstart` to `drop`/`dragend`.
//! Releasing a card over a column produces one `DropEvent`, which
//! `resolve_drop` turns into a status-change intent or discards. Releasing
//! outside every column never reaches `drop`, so nothing is dispatched.

use chrono::{Local, Utc};
use leptos::prelude::*;

use super::action_item_list::{ItemUpdate, dispatch_update};
use crate::net::types::{ActionItem, ActionItemStatus};
use crate::state::action_items::{DropEvent, PendingUpdates, group_by_status, is_overdue, resolve_drop};
use crate::util::time::format_due_date;

#[component]
pub fn KanbanBoard(#[prop(into)] items: Signal<Vec<ActionItem>>, on_item_update: ItemUpdate) -> impl IntoView {
    let pending = RwSignal::new(PendingUpdates::default());
    let dragged = RwSignal::new(None::<String>);
    let hovered = RwSignal::new(None::<ActionItemStatus>);

    let columns = move || {
        let now = Utc::now();
        group_by_status(&items.get())
            .into_iter()
            .map(|(status, column_items)| {
                kanban_column(status, column_items, now, items, dragged, hovered, pending, on_item_update.clone())
            })
            .collect::<Vec<_>>()
    };

    view! { <div class="kanban-board">{columns}</div> }
}

#[allow(clippy::too_many_arguments)]
fn kanban_column(
    status: ActionItemStatus,
    column_items: Vec<ActionItem>,
    now: chrono::DateTime<Utc>,
    items: Signal<Vec<ActionItem>>,
    dragged: RwSignal<Option<String>>,
    hovered: RwSignal<Option<ActionItemStatus>>,
    pending: RwSignal<PendingUpdates>,
    on_item_update: ItemUpdate,
) -> impl IntoView {
    let label = status.label();

    let on_drop = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        hovered.set(None);
        let Some(dragged_id) = dragged.get_untracked() else {
            return;
        };
        dragged.set(None);
        let event = DropEvent { dragged_id, target_container_id: Some(label.to_owned()) };
        if let Some((id, next)) = items.with_untracked(|list| resolve_drop(list, &event)) {
            dispatch_update(pending, &on_item_update, id, next);
        }
    };

    let cards = column_items.into_iter().map(|item| kanban_card(item, now, dragged, pending)).collect::<Vec<_>>();

    view! {
        <section
            class="kanban-column"
            class:kanban-column--over=move || hovered.get() == Some(status)
            aria-label=format!("Column {label}")
            data-testid=format!("kanban-column-{label}")
            on:dragover=move |ev: leptos::ev::DragEvent| {
                ev.prevent_default();
                if hovered.get_untracked() != Some(status) {
                    hovered.set(Some(status));
                }
            }
            on:dragleave=move |_| hovered.set(None)
            on:drop=on_drop
        >
            <h4 class="kanban-column__title">{label}</h4>
            <div class="kanban-column__cards">{cards}</div>
        </section>
    }
}

fn kanban_card(
    item: ActionItem,
    now: chrono::DateTime<Utc>,
    dragged: RwSignal<Option<String>>,
    pending: RwSignal<PendingUpdates>,
) -> impl IntoView {
    let overdue = is_overdue(&item, now);
    let test_id = format!("kanban-card-{}", item.id);
    let aria_label = format!("Card {}", item.description);
    let is_pending = {
        let id = item.id.clone();
        move || pending.with(|p| p.is_pending(&id))
    };
    let draggable = {
        let is_pending = is_pending.clone();
        move || if is_pending() { "false" } else { "true" }
    };
    let on_dragstart = {
        let id = item.id.clone();
        move |ev: leptos::ev::DragEvent| {
            set_drag_payload(&ev, &id);
            dragged.set(Some(id.clone()));
        }
    };

    view! {
        <article
            class="kanban-card"
            class:kanban-card--overdue=overdue
            class:kanban-card--pending=is_pending
            data-testid=test_id
            data-overdue=overdue.then_some("true")
            aria-label=aria_label
            tabindex="0"
            draggable=draggable
            on:dragstart=on_dragstart
            on:dragend=move |_| dragged.set(None)
        >
            <div class="kanban-card__description">
                <strong>{item.description}</strong>
            </div>
            {item.assignee.map(|assignee| view! {
                <div class="kanban-card__meta">
                    <small>"Assignee: " {assignee}</small>
                </div>
            })}
            {item.due_date.map(|due| view! {
                <div class="kanban-card__meta">
                    <small>"Due: " {format_due_date(&due, &Local)}</small>
                </div>
            })}
        </article>
    }
}

/// Some browsers refuse to start a drag without payload data.
fn set_drag_payload(ev: &leptos::ev::DragEvent, id: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(transfer) = ev.data_transfer() {
            if let Err(e) = transfer.set_data("text/plain", id) {
                log::warn!("KanbanBoard: setData failed: {e:?}");
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        log::debug!("KanbanBoard: drag of {id} started outside the browser ({})", ev.type_());
    }
}
