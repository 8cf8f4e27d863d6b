//! Meeting create/edit form model.
//!
//! DESIGN
//! ======
//! Validation is all-or-nothing: every failing field gets its own message and
//! nothing is submitted until all pass. The form converts its raw inputs into
//! a `CreateMeeting` payload; hosts decide whether that becomes a create or an
//! update call.

#[cfg(test)]
#[path = "meeting_form_test.rs"]
mod meeting_form_test;

use chrono::TimeZone;

use crate::net::error::ApiError;
use crate::net::types::{CreateMeeting, Meeting};
use crate::util::callback::AsyncCallback;
use crate::util::time::{datetime_local_to_iso, iso_to_datetime_local};

pub const TITLE_REQUIRED: &str = "Title is required";
pub const DATE_REQUIRED: &str = "Date is required";
pub const ATTENDEES_REQUIRED: &str = "At least one attendee is required";
pub const NOTES_REQUIRED: &str = "Notes are required";
pub const NOTES_TOO_SHORT: &str = "Notes must be at least 50 characters";
pub const SUBMIT_FAILED: &str = "Failed to submit form";

const MIN_NOTES_CHARS: usize = 50;

/// Raw input values as typed by the user.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MeetingFormInput {
    pub title: String,
    /// `<input type="datetime-local">` value.
    pub date_input: String,
    /// Comma-separated attendee names.
    pub attendees_text: String,
    pub notes: String,
}

impl MeetingFormInput {
    /// Seed the form from an existing meeting, rendering its date in `tz`.
    pub fn from_meeting<Tz>(meeting: &Meeting, tz: &Tz) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        Self {
            title: meeting.title.clone(),
            date_input: iso_to_datetime_local(&meeting.date, tz),
            attendees_text: meeting.attendees.join(", "),
            notes: meeting.notes.clone(),
        }
    }
}

/// One optional message per field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormErrors {
    pub title: Option<&'static str>,
    pub date: Option<&'static str>,
    pub attendees: Option<&'static str>,
    pub notes: Option<&'static str>,
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.date.is_none() && self.attendees.is_none() && self.notes.is_none()
    }
}

/// Split on commas, trim, drop empties. Order and duplicates are kept.
pub fn parse_attendees(text: &str) -> Vec<String> {
    text.split(',').map(str::trim).filter(|s| !s.is_empty()).map(str::to_owned).collect()
}

/// Check every field and build the payload, interpreting the date in `tz`.
///
/// # Errors
///
/// Returns every failing field's message; nothing partial is produced.
pub fn validate<Tz: TimeZone>(input: &MeetingFormInput, tz: &Tz) -> Result<CreateMeeting, FormErrors> {
    let mut errors = FormErrors::default();

    let title = input.title.trim();
    if title.is_empty() {
        errors.title = Some(TITLE_REQUIRED);
    }

    // A value the browser would never produce counts as missing.
    let date = datetime_local_to_iso(&input.date_input, tz);
    if date.is_none() {
        errors.date = Some(DATE_REQUIRED);
    }

    let attendees = parse_attendees(&input.attendees_text);
    if attendees.is_empty() {
        errors.attendees = Some(ATTENDEES_REQUIRED);
    }

    let notes = input.notes.trim();
    if notes.is_empty() {
        errors.notes = Some(NOTES_REQUIRED);
    } else if notes.chars().count() < MIN_NOTES_CHARS {
        errors.notes = Some(NOTES_TOO_SHORT);
    }

    match date {
        Some(date) if errors.is_empty() => Ok(CreateMeeting {
            title: title.to_owned(),
            date,
            attendees,
            notes: notes.to_owned(),
        }),
        _ => Err(errors),
    }
}

/// Result of one submit attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation blocked the submit; the handler was not called.
    Invalid(FormErrors),
    Submitted,
    /// The handler failed; carries the form-level message.
    Failed(&'static str),
}

/// Validate, then hand the payload to the host's submit handler.
pub async fn submit<Tz: TimeZone>(
    input: &MeetingFormInput,
    tz: &Tz,
    on_submit: &AsyncCallback<CreateMeeting, Result<(), ApiError>>,
) -> SubmitOutcome {
    let payload = match validate(input, tz) {
        Ok(payload) => payload,
        Err(errors) => return SubmitOutcome::Invalid(errors),
    };
    match on_submit.call(payload).await {
        Ok(()) => SubmitOutcome::Submitted,
        Err(e) => {
            log::error!("MeetingForm: {e}");
            SubmitOutcome::Failed(SUBMIT_FAILED)
        }
    }
}
