use std::cell::RefCell;
use std::rc::Rc;

use futures::executor::block_on;
use futures::future::join;

use super::*;
use crate::net::fake::{FakeBackend, item, meeting};
use crate::net::types::{ActionItem, ActionItemDraft, Meeting, MeetingAnalysis};

#[derive(Clone, Default)]
struct TestStore(Rc<RefCell<MeetingDetailState>>);

impl TestStore {
    fn snapshot(&self) -> MeetingDetailState {
        self.0.borrow().clone()
    }
}

impl DetailStore for TestStore {
    fn apply(&self, f: impl FnOnce(&mut MeetingDetailState)) {
        f(&mut *self.0.borrow_mut());
    }

    fn read<R>(&self, f: impl FnOnce(&MeetingDetailState) -> R) -> Option<R> {
        Some(f(&*self.0.borrow()))
    }
}

fn team_sync() -> Meeting {
    meeting("m1", "Team Sync", "2024-01-15T10:00:00Z")
}

fn setup(backend: FakeBackend) -> (DetailCoordinator<FakeBackend, TestStore>, TestStore) {
    let store = TestStore::default();
    (DetailCoordinator::new(backend, store.clone()), store)
}

fn item_ids(items: &[ActionItem]) -> Vec<&str> {
    items.iter().map(|it| it.id.as_str()).collect()
}

// =============================================================
// load
// =============================================================

#[test]
fn successful_load_shows_meeting_and_fetches_its_action_items() {
    let backend = FakeBackend::new()
        .with_meeting(team_sync())
        .with_action_items("m1", vec![item("a1", "m1", ActionItemStatus::ToDo)]);
    let (coordinator, store) = setup(backend.clone());

    block_on(coordinator.load(Some("m1".to_owned())));

    let state = store.snapshot();
    let shown = state.meeting().expect("ready");
    assert_eq!(shown.title, "Team Sync");
    assert_eq!(shown.attendees, vec!["Alice", "Bob"]);
    assert_eq!(item_ids(&state.action_items), vec!["a1"]);
    assert_eq!(backend.calls(), vec!["get_meeting:m1", "get_action_items:m1"]);
}

#[test]
fn failed_load_shows_not_found() {
    let (coordinator, store) = setup(FakeBackend::new());
    block_on(coordinator.load(Some("missing".to_owned())));
    assert_eq!(store.snapshot().phase, DetailPhase::Error(NOT_FOUND.to_owned()));
}

#[test]
fn missing_id_short_circuits_without_fetching() {
    let backend = FakeBackend::new();
    let (coordinator, store) = setup(backend.clone());
    block_on(coordinator.load(None));
    block_on(coordinator.load(Some("  ".to_owned())));
    assert_eq!(store.snapshot().phase, DetailPhase::Error(NOT_FOUND.to_owned()));
    assert!(backend.calls().is_empty());
}

#[test]
fn missing_id_supersedes_in_flight_fetch() {
    let backend = FakeBackend::new();
    let release = backend.gate_meeting("m1");
    let (coordinator, store) = setup(backend);

    block_on(join(coordinator.load(Some("m1".to_owned())), async {
        coordinator.load(None).await;
        release.send(Ok(team_sync())).expect("receiver alive");
    }));

    assert_eq!(store.snapshot().phase, DetailPhase::Error(NOT_FOUND.to_owned()));
}

#[test]
fn stale_meeting_response_never_overwrites_newer_one() {
    let backend = FakeBackend::new().with_meeting(meeting("m2", "Retro", "2024-02-01T00:00:00Z"));
    let release_m1 = backend.gate_meeting("m1");
    let (coordinator, store) = setup(backend.clone());

    block_on(join(coordinator.load(Some("m1".to_owned())), async {
        coordinator.load(Some("m2".to_owned())).await;
        release_m1.send(Ok(team_sync())).expect("receiver alive");
    }));

    assert_eq!(store.snapshot().meeting().map(|m| m.id.as_str()), Some("m2"));
    assert_eq!(backend.count("get_action_items"), 1);
    assert_eq!(backend.count("get_action_items:m1"), 0);
}

#[test]
fn responses_after_unmount_are_discarded() {
    let backend = FakeBackend::new();
    let release = backend.gate_meeting("m1");
    let (coordinator, store) = setup(backend.clone());

    block_on(join(coordinator.load(Some("m1".to_owned())), async {
        coordinator.unmount();
        release.send(Ok(team_sync())).expect("receiver alive");
    }));

    assert_eq!(store.snapshot().phase, DetailPhase::Loading);
    assert_eq!(backend.count("get_action_items"), 0);
}

#[test]
fn stale_action_items_response_is_discarded() {
    let backend = FakeBackend::new()
        .with_meeting(team_sync())
        .with_action_items("m1", vec![item("fresh", "m1", ActionItemStatus::Done)]);
    let (coordinator, store) = setup(backend.clone());
    block_on(coordinator.load(Some("m1".to_owned())));

    let release_old = backend.gate_action_items("m1");
    block_on(join(coordinator.refresh_action_items("m1"), async {
        coordinator.refresh_action_items("m1").await;
        release_old.send(Ok(vec![item("old", "m1", ActionItemStatus::ToDo)])).expect("receiver alive");
    }));

    assert_eq!(item_ids(&store.snapshot().action_items), vec!["fresh"]);
}

#[test]
fn action_item_fetch_failure_keeps_previous_items() {
    let backend = FakeBackend::new()
        .with_meeting(team_sync())
        .with_action_items("m1", vec![item("a1", "m1", ActionItemStatus::ToDo)]);
    let (coordinator, store) = setup(backend.clone());
    block_on(coordinator.load(Some("m1".to_owned())));

    let release = backend.gate_action_items("m1");
    block_on(join(coordinator.refresh_action_items("m1"), async {
        release.send(Err(ApiError::Network("offline".to_owned()))).expect("receiver alive");
    }));

    assert_eq!(item_ids(&store.snapshot().action_items), vec!["a1"]);
}

// =============================================================
// update_status
// =============================================================

#[test]
fn status_update_patches_then_refreshes() {
    let backend = FakeBackend::new()
        .with_meeting(team_sync())
        .with_action_items("m1", vec![item("a1", "m1", ActionItemStatus::ToDo)]);
    let (coordinator, store) = setup(backend.clone());
    block_on(coordinator.load(Some("m1".to_owned())));

    block_on(coordinator.update_status("a1".to_owned(), ActionItemStatus::Done));

    assert_eq!(store.snapshot().action_items[0].status, ActionItemStatus::Done);
    assert_eq!(backend.count("update_action_item:a1"), 1);
    assert_eq!(backend.count("get_action_items"), 2);
}

#[test]
fn repeating_same_update_refreshes_once_per_call() {
    let backend = FakeBackend::new()
        .with_meeting(team_sync())
        .with_action_items("m1", vec![item("a1", "m1", ActionItemStatus::ToDo)]);
    let (coordinator, store) = setup(backend.clone());
    block_on(coordinator.load(Some("m1".to_owned())));
    let before = backend.count("get_action_items");

    block_on(coordinator.update_status("a1".to_owned(), ActionItemStatus::InProgress));
    block_on(coordinator.update_status("a1".to_owned(), ActionItemStatus::InProgress));

    assert_eq!(backend.count("get_action_items") - before, 2);
    assert_eq!(store.snapshot().action_items[0].status, ActionItemStatus::InProgress);
}

#[test]
fn failed_update_still_refreshes() {
    let backend = FakeBackend::new()
        .with_meeting(team_sync())
        .with_action_items("m1", vec![item("a1", "m1", ActionItemStatus::ToDo)])
        .failing("update_action_item");
    let (coordinator, store) = setup(backend.clone());
    block_on(coordinator.load(Some("m1".to_owned())));

    block_on(coordinator.update_status("a1".to_owned(), ActionItemStatus::Done));

    assert_eq!(backend.count("get_action_items"), 2);
    assert_eq!(store.snapshot().action_items[0].status, ActionItemStatus::ToDo);
}

#[test]
fn update_after_unmount_does_not_refresh() {
    let backend = FakeBackend::new()
        .with_meeting(team_sync())
        .with_action_items("m1", vec![item("a1", "m1", ActionItemStatus::ToDo)]);
    let (coordinator, _store) = setup(backend.clone());
    block_on(coordinator.load(Some("m1".to_owned())));
    coordinator.unmount();

    block_on(coordinator.update_status("a1".to_owned(), ActionItemStatus::Done));

    assert_eq!(backend.count("get_action_items"), 1);
}

// =============================================================
// review
// =============================================================

fn analysis() -> MeetingAnalysis {
    MeetingAnalysis {
        summary: "Planned Q1".to_owned(),
        key_discussion_points: vec!["Hiring".to_owned()],
        decisions: vec!["Ship in March".to_owned()],
        suggested_action_items: vec![ActionItemDraft {
            description: "Draft roadmap".to_owned(),
            ..ActionItemDraft::default()
        }],
    }
}

#[test]
fn review_opens_modal_with_suggestions() {
    let backend = FakeBackend::new().with_meeting(team_sync()).with_analysis(analysis());
    let (coordinator, store) = setup(backend);
    block_on(coordinator.load(Some("m1".to_owned())));

    block_on(coordinator.review()).expect("analysis ok");

    let state = store.snapshot();
    assert!(state.review_open);
    assert!(!state.analyzing);
    assert_eq!(state.review_drafts, analysis().suggested_action_items);
    assert_eq!(state.review_generation, 1);
    assert_eq!(state.analysis, Some(analysis()));
}

#[test]
fn review_failure_leaves_modal_closed() {
    let backend = FakeBackend::new().with_meeting(team_sync()).failing("analyze_meeting");
    let (coordinator, store) = setup(backend);
    block_on(coordinator.load(Some("m1".to_owned())));

    assert!(block_on(coordinator.review()).is_err());

    let state = store.snapshot();
    assert!(!state.review_open);
    assert!(!state.analyzing);
}

#[test]
fn review_failure_after_unmount_is_not_reported() {
    let backend = FakeBackend::new().with_meeting(team_sync()).failing("analyze_meeting");
    let (coordinator, store) = setup(backend.clone());
    block_on(coordinator.load(Some("m1".to_owned())));
    coordinator.unmount();

    assert_eq!(block_on(coordinator.review()), Ok(()));

    assert_eq!(backend.count("analyze_meeting"), 1);
    assert!(!store.snapshot().review_open);
}

#[test]
fn review_while_analyzing_is_noop() {
    let backend = FakeBackend::new().with_meeting(team_sync());
    let (coordinator, store) = setup(backend.clone());
    block_on(coordinator.load(Some("m1".to_owned())));
    store.apply(|s| s.analyzing = true);

    block_on(coordinator.review()).expect("noop");

    assert_eq!(backend.count("analyze_meeting"), 0);
}

#[test]
fn review_without_meeting_is_noop() {
    let backend = FakeBackend::new();
    let (coordinator, _store) = setup(backend.clone());
    block_on(coordinator.review()).expect("noop");
    assert_eq!(backend.count("analyze_meeting"), 0);
}

#[test]
fn saved_drafts_close_modal_and_refresh() {
    let backend = FakeBackend::new().with_meeting(team_sync()).with_analysis(analysis());
    let (coordinator, store) = setup(backend.clone());
    block_on(coordinator.load(Some("m1".to_owned())));
    block_on(coordinator.review()).expect("analysis ok");

    block_on(crate::state::review::submit_drafts(&backend, "m1", &analysis().suggested_action_items))
        .expect("saved");
    block_on(coordinator.drafts_saved());

    let state = store.snapshot();
    assert!(!state.review_open);
    assert_eq!(state.action_items.len(), 1);
    assert_eq!(state.action_items[0].description, "Draft roadmap");
}

#[test]
fn view_and_filter_setters_update_state() {
    let (coordinator, store) = setup(FakeBackend::new());
    coordinator.set_view_mode(ViewMode::Board);
    coordinator.set_assignee_filter("Alice");
    coordinator.set_priority_filter("High");
    let state = store.snapshot();
    assert_eq!(state.view_mode, ViewMode::Board);
    assert_eq!(state.filters.assignee_value(), "Alice");
    assert_eq!(state.filters.priority_value(), "High");
}
