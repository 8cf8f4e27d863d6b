//! Pure projections shared by the action-item list and board renderers.
//!
//! DESIGN
//! ======
//! Renderers never mutate items. They compute overdue flags and columns
//! here and turn user gestures into `(id, status)` intents for the owner.
//! A drag-and-drop gesture is reduced to one `DropEvent` and resolved by
//! `resolve_drop`, which filters out every no-op drop.
//!
//! While an intent is in flight its item is pending: further edits to it are
//! refused and its selector shows the requested status. Settling the call,
//! whatever its outcome, clears the mark so the selector falls back to the
//! item's stored status.

#[cfg(test)]
#[path = "action_items_test.rs"]
mod action_items_test;

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use leptos::prelude::*;

use crate::net::types::{ActionItem, ActionItemStatus};
use crate::util::callback::AsyncCallback;
use crate::util::time::parse_instant;

pub const EMPTY_MESSAGE: &str = "No action items.";

/// Past due and not done. Missing or unparsable due dates are never overdue.
pub fn is_overdue(item: &ActionItem, now: DateTime<Utc>) -> bool {
    if item.status == ActionItemStatus::Done {
        return false;
    }
    item.due_date.as_deref().and_then(parse_instant).is_some_and(|due| due < now)
}

/// Items split into board columns, in `ActionItemStatus::ALL` order.
pub fn group_by_status(items: &[ActionItem]) -> Vec<(ActionItemStatus, Vec<ActionItem>)> {
    ActionItemStatus::ALL
        .into_iter()
        .map(|status| (status, items.iter().filter(|it| it.status == status).cloned().collect()))
        .collect()
}

/// A completed drag gesture.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DropEvent {
    pub dragged_id: String,
    /// Column the card was released over; `None` when outside every column.
    pub target_container_id: Option<String>,
}

/// Turn a drop into a status-change intent, or `None` for a no-op drop.
///
/// No-ops: no target, an unknown column id, an unknown card id, or the
/// card's current column.
pub fn resolve_drop(items: &[ActionItem], event: &DropEvent) -> Option<(String, ActionItemStatus)> {
    let target = ActionItemStatus::from_label(event.target_container_id.as_deref()?)?;
    let dragged = items.iter().find(|it| it.id == event.dragged_id)?;
    if dragged.status == target {
        return None;
    }
    Some((dragged.id.clone(), target))
}

/// Status-change intent sink shared by the list and board renderers.
pub type ItemUpdate = AsyncCallback<(String, ActionItemStatus)>;

/// Items with a status change in flight, keyed by id, with the requested status.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PendingUpdates(HashMap<String, ActionItemStatus>);

impl PendingUpdates {
    pub fn is_pending(&self, id: &str) -> bool {
        self.0.contains_key(id)
    }

    /// Mark `id` pending. Refused (returns `false`) while it already is.
    pub fn begin(&mut self, id: &str, status: ActionItemStatus) -> bool {
        if self.is_pending(id) {
            return false;
        }
        self.0.insert(id.to_owned(), status);
        true
    }

    pub fn finish(&mut self, id: &str) {
        self.0.remove(id);
    }

    /// Status a selector should show: the requested one while pending,
    /// otherwise the item's own.
    pub fn shown_status(&self, item: &ActionItem) -> ActionItemStatus {
        self.0.get(&item.id).copied().unwrap_or(item.status)
    }
}

/// Where the renderers keep their pending marks.
pub trait PendingStore: Clone + 'static {
    /// Run `f` against the marks; `None` once the store is gone.
    fn with_pending<R>(&self, f: impl FnOnce(&mut PendingUpdates) -> R) -> Option<R>;
}

impl PendingStore for RwSignal<PendingUpdates> {
    fn with_pending<R>(&self, f: impl FnOnce(&mut PendingUpdates) -> R) -> Option<R> {
        self.try_update(f)
    }
}

/// Mark `id` pending, await `on_item_update`, then clear the mark.
///
/// Returns `false` without calling the owner when `id` is already pending.
pub async fn run_status_update<P: PendingStore>(
    pending: &P,
    on_item_update: &ItemUpdate,
    id: String,
    status: ActionItemStatus,
) -> bool {
    if !pending.with_pending(|p| p.begin(&id, status)).unwrap_or(false) {
        log::debug!("ActionItems: update for {id} ignored while one is pending");
        return false;
    }
    on_item_update.call((id.clone(), status)).await;
    pending.with_pending(|p| p.finish(&id));
    true
}
