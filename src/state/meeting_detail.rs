//! View state of the meeting detail page and its derived projections.
//!
//! SYSTEM CONTEXT
//! ==============
//! `DetailCoordinator` is the only writer of `MeetingDetailState`; the page
//! renders it and forwards user intents back to the coordinator. Filter
//! options and the filtered item list are derived on every read, never
//! stored.

#[cfg(test)]
#[path = "meeting_detail_test.rs"]
mod meeting_detail_test;

use std::collections::BTreeSet;

use crate::net::types::{ActionItem, ActionItemDraft, ActionItemPriority, Meeting, MeetingAnalysis};

pub const NOT_FOUND: &str = "Meeting not found";
pub const ANALYZE_FAILED: &str = "Failed to analyze meeting";
/// Filter option matching every item.
pub const ALL: &str = "All";

/// Meeting fetch lifecycle.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum DetailPhase {
    #[default]
    Loading,
    Error(String),
    Ready(Meeting),
}

/// Action item presentation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewMode {
    #[default]
    List,
    Board,
}

/// Selected filters; `None` means "All".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ActionItemFilters {
    pub assignee: Option<String>,
    pub priority: Option<ActionItemPriority>,
}

impl ActionItemFilters {
    /// Select-box value for the assignee filter.
    pub fn assignee_value(&self) -> String {
        self.assignee.clone().unwrap_or_else(|| ALL.to_owned())
    }

    /// Select-box value for the priority filter.
    pub fn priority_value(&self) -> &'static str {
        self.priority.map_or(ALL, ActionItemPriority::label)
    }

    pub fn set_assignee(&mut self, value: &str) {
        self.assignee = (value != ALL).then(|| value.to_owned());
    }

    /// Unknown values reset the filter to "All".
    pub fn set_priority(&mut self, value: &str) {
        self.priority = ActionItemPriority::from_label(value);
    }

    fn matches(&self, item: &ActionItem) -> bool {
        let assignee_ok = self.assignee.as_ref().is_none_or(|want| item.assignee.as_ref() == Some(want));
        let priority_ok = self.priority.is_none_or(|want| item.priority == Some(want));
        assignee_ok && priority_ok
    }
}

/// Everything the detail page renders.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeetingDetailState {
    pub phase: DetailPhase,
    /// Items of the displayed meeting, as last fetched.
    pub action_items: Vec<ActionItem>,
    pub view_mode: ViewMode,
    pub filters: ActionItemFilters,
    pub analyzing: bool,
    pub review_open: bool,
    /// Suggestions the review modal is seeded from.
    pub review_drafts: Vec<ActionItemDraft>,
    /// Bumped each time the review modal opens so it reseeds its rows.
    pub review_generation: u64,
    /// Last successful analysis of the displayed meeting.
    pub analysis: Option<MeetingAnalysis>,
}

impl MeetingDetailState {
    pub fn meeting(&self) -> Option<&Meeting> {
        match &self.phase {
            DetailPhase::Ready(meeting) => Some(meeting),
            _ => None,
        }
    }

    pub fn assignee_options(&self) -> Vec<String> {
        assignee_options(&self.action_items)
    }

    pub fn filtered_items(&self) -> Vec<ActionItem> {
        filter_action_items(&self.action_items, &self.filters)
    }
}

/// "All" followed by the sorted, de-duplicated non-blank assignees.
pub fn assignee_options(items: &[ActionItem]) -> Vec<String> {
    let unique: BTreeSet<&str> = items
        .iter()
        .filter_map(|it| it.assignee.as_deref())
        .filter(|a| !a.trim().is_empty())
        .collect();
    std::iter::once(ALL).chain(unique).map(str::to_owned).collect()
}

/// Priority filter options in display order.
pub fn priority_options() -> Vec<&'static str> {
    std::iter::once(ALL).chain(ActionItemPriority::ALL.map(ActionItemPriority::label)).collect()
}

/// Items matching both filters. Items lacking a filtered field are excluded.
pub fn filter_action_items(items: &[ActionItem], filters: &ActionItemFilters) -> Vec<ActionItem> {
    items.iter().filter(|it| filters.matches(it)).cloned().collect()
}
