//! Editable draft list behind the action-item review modal.
//!
//! DESIGN
//! ======
//! Rows are keyed by a client-generated UUID so the view can diff them while
//! rows are added and removed; keys never leave the client. Edits stay local
//! until `submit_drafts` batch-creates the list.

#[cfg(test)]
#[path = "review_test.rs"]
mod review_test;

use uuid::Uuid;

use crate::net::backend::Backend;
use crate::net::types::{ActionItemDraft, ActionItemPriority};
use crate::util::time::{date_input_to_iso, iso_to_date_input};

pub const SAVE_FAILED: &str = "Failed to save action items";
pub const EMPTY_MESSAGE: &str = "No action items. Add one to continue.";

/// One editable row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DraftRow {
    pub key: Uuid,
    pub draft: ActionItemDraft,
}

impl DraftRow {
    fn new(draft: ActionItemDraft) -> Self {
        Self { key: Uuid::new_v4(), draft }
    }

    /// `<input type="date">` value for the due date.
    pub fn due_date_input(&self) -> String {
        self.draft.due_date.as_deref().map(iso_to_date_input).unwrap_or_default()
    }
}

/// A single field edit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DraftEdit {
    Description(String),
    /// Raw input; blank clears the assignee.
    Assignee(String),
    /// Raw `YYYY-MM-DD`; blank or malformed clears the due date.
    DueDate(String),
    /// Priority label; anything else clears it.
    Priority(String),
}

/// Local modal state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DraftEditor {
    pub rows: Vec<DraftRow>,
    pub saving: bool,
    pub error: Option<String>,
}

impl DraftEditor {
    /// Fresh editor seeded with `drafts`; clears any previous error.
    pub fn seeded(drafts: &[ActionItemDraft]) -> Self {
        Self { rows: drafts.iter().cloned().map(DraftRow::new).collect(), saving: false, error: None }
    }

    pub fn drafts(&self) -> Vec<ActionItemDraft> {
        self.rows.iter().map(|row| row.draft.clone()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn add(&mut self) {
        self.rows.push(DraftRow::new(ActionItemDraft::default()));
    }

    pub fn remove(&mut self, key: Uuid) {
        self.rows.retain(|row| row.key != key);
    }

    pub fn edit(&mut self, key: Uuid, edit: DraftEdit) {
        let Some(row) = self.rows.iter_mut().find(|row| row.key == key) else {
            return;
        };
        let draft = &mut row.draft;
        match edit {
            DraftEdit::Description(value) => draft.description = value,
            DraftEdit::Assignee(value) => draft.assignee = (!value.is_empty()).then_some(value),
            DraftEdit::DueDate(value) => draft.due_date = date_input_to_iso(&value),
            DraftEdit::Priority(value) => draft.priority = ActionItemPriority::from_label(&value),
        }
    }

    /// Enter the saving phase and return the payload.
    pub fn begin_save(&mut self) -> Vec<ActionItemDraft> {
        self.saving = true;
        self.error = None;
        self.drafts()
    }

    /// Leave the saving phase, recording the failure message if any.
    pub fn finish_save(&mut self, result: &Result<(), String>) {
        self.saving = false;
        self.error = result.as_ref().err().cloned();
    }
}

/// Batch-create `drafts` for `meeting_id`.
///
/// # Errors
///
/// Returns the message shown inline in the modal: the server's error text
/// when it sent one, otherwise a generic failure.
pub async fn submit_drafts<B: Backend>(
    backend: &B,
    meeting_id: &str,
    drafts: &[ActionItemDraft],
) -> Result<(), String> {
    backend.create_action_items(meeting_id, drafts).await.map_err(|e| {
        log::error!("ActionItemReviewModal: {e}");
        let message = e.user_message();
        if message.trim().is_empty() { SAVE_FAILED.to_owned() } else { message }
    })
}
