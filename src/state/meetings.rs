//! Meeting list projection and loading.

#[cfg(test)]
#[path = "meetings_test.rs"]
mod meetings_test;

use std::cmp::Reverse;

use super::load::LoadState;
use crate::net::backend::Backend;
use crate::net::types::Meeting;
use crate::util::time::timestamp_millis_or_epoch;

pub const LOAD_ERROR: &str = "Failed to load meetings";
pub const MEETING_LOAD_ERROR: &str = "Failed to load meeting";
pub const NOT_FOUND: &str = "Meeting not found";

/// Newest first. Unparsable dates sort as the epoch; ties keep input order.
pub fn sort_meetings_by_date_desc(meetings: &[Meeting]) -> Vec<Meeting> {
    let mut sorted = meetings.to_vec();
    sorted.sort_by_key(|m| Reverse(timestamp_millis_or_epoch(&m.date)));
    sorted
}

/// One-line attendee summary for list rows.
pub fn format_attendees_summary(attendees: &[String]) -> String {
    match attendees.len() {
        0 => "No attendees".to_owned(),
        1..=3 => attendees.join(", "),
        n => format!("{} (+{})", attendees[..2].join(", "), n - 2),
    }
}

/// Fetch and sort every meeting.
pub async fn load_meetings<B: Backend>(backend: &B) -> LoadState<Vec<Meeting>> {
    match backend.get_meetings().await {
        Ok(meetings) => LoadState::Loaded(sort_meetings_by_date_desc(&meetings)),
        Err(e) => {
            log::error!("MeetingListPage: {e}");
            LoadState::Failed(LOAD_ERROR.to_owned())
        }
    }
}

/// Fetch one meeting for the edit form. A missing or blank route id never
/// reaches the backend.
pub async fn load_meeting_for_edit<B: Backend>(backend: &B, id: Option<&str>) -> LoadState<Meeting> {
    let Some(id) = id.map(str::trim).filter(|id| !id.is_empty()) else {
        return LoadState::Failed(NOT_FOUND.to_owned());
    };
    match backend.get_meeting(id).await {
        Ok(meeting) => LoadState::Loaded(meeting),
        Err(e) => {
            log::error!("MeetingEditPage: {e}");
            LoadState::Failed(MEETING_LOAD_ERROR.to_owned())
        }
    }
}
