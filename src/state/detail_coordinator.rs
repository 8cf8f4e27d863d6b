//! Fetch lifecycle of the meeting detail page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page creates one coordinator per mount, calls `load` whenever the
//! `:id` route parameter changes, forwards status-change intents from the
//! list/board renderers to `update_status`, and calls `unmount` from
//! `on_cleanup`.
//!
//! DESIGN
//! ======
//! Two independent fetches (meeting, action items) each carry a
//! `FetchSequence`. A response is applied only if the page is still mounted
//! and no newer fetch of the same resource has started; superseded responses
//! are dropped silently. Every mutation is followed by a full re-fetch of the
//! action items, and the last fetch to resolve wins.
//!
//! ERROR HANDLING
//! ==============
//! A failed meeting fetch becomes the "Meeting not found" error phase.
//! Action-item fetch and update failures are logged only. Analysis failures
//! are returned so the page can alert.

#[cfg(test)]
#[path = "detail_coordinator_test.rs"]
mod detail_coordinator_test;

use leptos::prelude::*;

use super::meeting_detail::{DetailPhase, MeetingDetailState, NOT_FOUND, ViewMode};
use super::sequence::{FetchSequence, MountFlag};
use crate::net::backend::Backend;
use crate::net::error::ApiError;
use crate::net::types::{ActionItemStatus, UpdateActionItem};

/// Sink the coordinator writes `MeetingDetailState` into.
pub trait DetailStore: Clone + 'static {
    fn apply(&self, f: impl FnOnce(&mut MeetingDetailState));

    /// `None` once the store is gone.
    fn read<R>(&self, f: impl FnOnce(&MeetingDetailState) -> R) -> Option<R>;
}

impl DetailStore for RwSignal<MeetingDetailState> {
    fn apply(&self, f: impl FnOnce(&mut MeetingDetailState)) {
        if self.try_update(f).is_none() {
            log::debug!("MeetingDetailPage: state disposed, update dropped");
        }
    }

    fn read<R>(&self, f: impl FnOnce(&MeetingDetailState) -> R) -> Option<R> {
        self.try_with_untracked(f)
    }
}

/// Owns the sequence tokens and mount flag of one detail page instance.
#[derive(Clone)]
pub struct DetailCoordinator<B, S> {
    backend: B,
    store: S,
    meeting_seq: FetchSequence,
    items_seq: FetchSequence,
    mounted: MountFlag,
}

impl<B: Backend, S: DetailStore> DetailCoordinator<B, S> {
    pub fn new(backend: B, store: S) -> Self {
        Self {
            backend,
            store,
            meeting_seq: FetchSequence::new(),
            items_seq: FetchSequence::new(),
            mounted: MountFlag::new(),
        }
    }

    /// Stop applying responses; in-flight requests still complete.
    pub fn unmount(&self) {
        self.mounted.unmount();
    }

    fn displayed_meeting_id(&self) -> Option<String> {
        self.store.read(|s| s.meeting().map(|m| m.id.clone())).flatten()
    }

    /// Load the meeting for a new route id, then its action items.
    ///
    /// A missing or blank id goes straight to the not-found error and still
    /// supersedes any fetch already in flight.
    pub async fn load(&self, id: Option<String>) {
        let token = self.meeting_seq.begin();
        let Some(id) = id.filter(|id| !id.trim().is_empty()) else {
            self.store.apply(|s| s.phase = DetailPhase::Error(NOT_FOUND.to_owned()));
            return;
        };
        self.store.apply(|s| s.phase = DetailPhase::Loading);

        let result = self.backend.get_meeting(&id).await;
        if !self.mounted.is_mounted() || !self.meeting_seq.is_latest(token) {
            log::debug!("MeetingDetailPage: dropping stale meeting response for {id}");
            return;
        }
        match result {
            Ok(meeting) => {
                self.store.apply(|s| {
                    s.phase = DetailPhase::Ready(meeting);
                    s.action_items.clear();
                    s.analysis = None;
                    s.review_open = false;
                });
                self.refresh_action_items(&id).await;
            }
            Err(e) => {
                log::error!("MeetingDetailPage: {e}");
                self.store.apply(|s| s.phase = DetailPhase::Error(NOT_FOUND.to_owned()));
            }
        }
    }

    /// Re-fetch the action items of `meeting_id` under the items sequence.
    pub async fn refresh_action_items(&self, meeting_id: &str) {
        let token = self.items_seq.begin();
        match self.backend.get_action_items(meeting_id).await {
            Ok(items) => {
                if !self.mounted.is_mounted() || !self.items_seq.is_latest(token) {
                    log::debug!("MeetingDetailPage: dropping stale action items for {meeting_id}");
                    return;
                }
                self.store.apply(|s| {
                    if s.meeting().is_some_and(|m| m.id == meeting_id) {
                        s.action_items = items;
                    }
                });
            }
            Err(e) => log::error!("MeetingDetailPage: {e}"),
        }
    }

    /// Apply a status change, then re-fetch whether or not it succeeded.
    pub async fn update_status(&self, item_id: String, status: ActionItemStatus) {
        if let Err(e) = self.backend.update_action_item(&item_id, &UpdateActionItem::status(status)).await {
            log::error!("MeetingDetailPage: {e}");
        }
        if !self.mounted.is_mounted() {
            return;
        }
        if let Some(meeting_id) = self.displayed_meeting_id() {
            self.refresh_action_items(&meeting_id).await;
        }
    }

    /// Analyze the displayed meeting and open the review modal with its
    /// suggestions. A call while an analysis is running does nothing.
    ///
    /// # Errors
    ///
    /// Returns the analysis failure; the modal stays closed. Failures that
    /// land after unmount are only logged.
    pub async fn review(&self) -> Result<(), ApiError> {
        let target = self.store.read(|s| if s.analyzing { None } else { s.meeting().map(|m| m.id.clone()) });
        let Some(meeting_id) = target.flatten() else {
            return Ok(());
        };
        self.store.apply(|s| s.analyzing = true);

        let result = self.backend.analyze_meeting(&meeting_id).await;
        if !self.mounted.is_mounted() {
            if let Err(e) = result {
                log::debug!("MeetingDetailPage: analysis failed after unmount: {e}");
            }
            return Ok(());
        }
        match result {
            Ok(analysis) => {
                self.store.apply(|s| {
                    s.analyzing = false;
                    if s.meeting().is_some_and(|m| m.id == meeting_id) {
                        s.review_drafts.clone_from(&analysis.suggested_action_items);
                        s.review_open = true;
                        s.review_generation += 1;
                        s.analysis = Some(analysis);
                    }
                });
                Ok(())
            }
            Err(e) => {
                log::error!("MeetingDetailPage: {e}");
                self.store.apply(|s| s.analyzing = false);
                Err(e)
            }
        }
    }

    pub fn close_review(&self) {
        self.store.apply(|s| s.review_open = false);
    }

    /// The review modal saved its drafts: close it and re-fetch.
    pub async fn drafts_saved(&self) {
        self.close_review();
        if !self.mounted.is_mounted() {
            return;
        }
        if let Some(meeting_id) = self.displayed_meeting_id() {
            self.refresh_action_items(&meeting_id).await;
        }
    }

    pub fn set_view_mode(&self, mode: ViewMode) {
        self.store.apply(|s| s.view_mode = mode);
    }

    pub fn set_assignee_filter(&self, value: &str) {
        self.store.apply(|s| s.filters.set_assignee(value));
    }

    pub fn set_priority_filter(&self, value: &str) {
        self.store.apply(|s| s.filters.set_priority(value));
    }
}
