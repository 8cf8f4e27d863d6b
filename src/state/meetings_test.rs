use futures::executor::block_on;

use super::*;
use crate::net::fake::{FakeBackend, meeting};

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| (*s).to_owned()).collect()
}

fn ids(meetings: &[Meeting]) -> Vec<&str> {
    meetings.iter().map(|m| m.id.as_str()).collect()
}

// =============================================================
// format_attendees_summary
// =============================================================

#[test]
fn summary_for_empty_attendees() {
    assert_eq!(format_attendees_summary(&[]), "No attendees");
}

#[test]
fn summary_joins_up_to_three() {
    assert_eq!(format_attendees_summary(&names(&["Alice"])), "Alice");
    assert_eq!(format_attendees_summary(&names(&["Alice", "Bob", "Cara"])), "Alice, Bob, Cara");
}

#[test]
fn summary_truncates_beyond_three() {
    assert_eq!(format_attendees_summary(&names(&["Alice", "Bob", "Cara", "Dan"])), "Alice, Bob (+2)");
    assert_eq!(
        format_attendees_summary(&names(&["A", "B", "C", "D", "E", "F"])),
        "A, B (+4)"
    );
}

// =============================================================
// sort_meetings_by_date_desc
// =============================================================

#[test]
fn sort_orders_newest_first() {
    let input = vec![
        meeting("old", "Old", "2023-01-01T00:00:00Z"),
        meeting("new", "New", "2024-06-01T00:00:00Z"),
        meeting("mid", "Mid", "2024-01-01"),
    ];
    assert_eq!(ids(&sort_meetings_by_date_desc(&input)), vec!["new", "mid", "old"]);
}

#[test]
fn sort_puts_unparsable_dates_last_and_is_stable() {
    let input = vec![
        meeting("bad1", "Bad", "soon"),
        meeting("ok", "Ok", "2024-01-01T00:00:00Z"),
        meeting("bad2", "Bad", ""),
    ];
    let sorted = sort_meetings_by_date_desc(&input);
    assert_eq!(ids(&sorted), vec!["ok", "bad1", "bad2"]);
    assert_eq!(sorted.len(), input.len());
}

// =============================================================
// load_meetings
// =============================================================

#[test]
fn load_returns_sorted_meetings() {
    let backend = FakeBackend::new()
        .with_meeting(meeting("a", "A", "2024-01-01T00:00:00Z"))
        .with_meeting(meeting("b", "B", "2024-02-01T00:00:00Z"));
    let state = block_on(load_meetings(&backend));
    assert_eq!(state.loaded().map(|m| ids(m)), Some(vec!["b", "a"]));
}

#[test]
fn load_failure_maps_to_message() {
    let backend = FakeBackend::new().failing("get_meetings");
    assert_eq!(block_on(load_meetings(&backend)), LoadState::Failed(LOAD_ERROR.to_owned()));
}

#[test]
fn sort_understands_short_iso_instants() {
    let list = vec![meeting("old", "Old", "2023-01-01T00:00:00Z"), meeting("new", "New", "2024-01-15T10:00Z")];
    assert_eq!(ids(&sort_meetings_by_date_desc(&list)), vec!["new", "old"]);
}

// =============================================================
// load_meeting_for_edit
// =============================================================

#[test]
fn edit_load_returns_the_meeting() {
    let backend = FakeBackend::new().with_meeting(meeting("m1", "Planning", "2024-01-15T10:00:00Z"));
    let state = block_on(load_meeting_for_edit(&backend, Some("m1")));
    assert_eq!(state.loaded().map(|m| m.title.as_str()), Some("Planning"));
}

#[test]
fn edit_load_without_id_skips_the_backend() {
    let backend = FakeBackend::new();
    assert_eq!(block_on(load_meeting_for_edit(&backend, None)), LoadState::Failed(NOT_FOUND.to_owned()));
    assert_eq!(block_on(load_meeting_for_edit(&backend, Some("  "))), LoadState::Failed(NOT_FOUND.to_owned()));
    assert!(backend.calls().is_empty());
}

#[test]
fn edit_load_failure_maps_to_message() {
    let backend = FakeBackend::new();
    let state = block_on(load_meeting_for_edit(&backend, Some("missing")));
    assert_eq!(state.error(), Some(MEETING_LOAD_ERROR));
    assert_eq!(backend.calls(), vec!["get_meeting:missing".to_owned()]);
}
