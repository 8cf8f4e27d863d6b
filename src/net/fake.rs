//! In-memory `Backend` for native tests.
//!
//! Records every call, serves canned data, fails named operations on demand,
//! and can hold individual responses open until the test releases them so
//! out-of-order completions can be staged deterministically.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet, VecDeque};
use std::rc::Rc;

use futures::channel::oneshot;

use super::backend::Backend;
use super::error::ApiError;
use super::types::{
    ActionItem, ActionItemDraft, ActionItemStatus, CreateMeeting, DashboardMetrics, LoginCredentials, Meeting,
    MeetingAnalysis, UpdateActionItem, UpdateMeeting,
};

type Gate<T> = oneshot::Receiver<Result<T, ApiError>>;

#[derive(Default)]
struct Inner {
    meetings: RefCell<Vec<Meeting>>,
    action_items: RefCell<HashMap<String, Vec<ActionItem>>>,
    analysis: RefCell<MeetingAnalysis>,
    dashboard: RefCell<DashboardMetrics>,
    login_response: RefCell<serde_json::Value>,
    failing: RefCell<HashSet<&'static str>>,
    meeting_gates: RefCell<HashMap<String, VecDeque<Gate<Meeting>>>>,
    item_gates: RefCell<HashMap<String, VecDeque<Gate<Vec<ActionItem>>>>>,
    created: RefCell<Vec<(String, Vec<ActionItemDraft>)>>,
    calls: RefCell<Vec<String>>,
}

#[derive(Clone, Default)]
pub(crate) struct FakeBackend {
    inner: Rc<Inner>,
}

pub(crate) fn meeting(id: &str, title: &str, date: &str) -> Meeting {
    Meeting {
        id: id.to_owned(),
        title: title.to_owned(),
        date: date.to_owned(),
        attendees: vec!["Alice".to_owned(), "Bob".to_owned()],
        notes: "Discuss Q1".to_owned(),
    }
}

pub(crate) fn item(id: &str, meeting_id: &str, status: ActionItemStatus) -> ActionItem {
    ActionItem {
        id: id.to_owned(),
        meeting_id: meeting_id.to_owned(),
        description: format!("Task {id}"),
        status,
        assignee: None,
        due_date: None,
        priority: None,
    }
}

fn failure(op: &str) -> ApiError {
    ApiError::Status { status: 500, body: format!("{op} failed") }
}

impl FakeBackend {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_meeting(self, meeting: Meeting) -> Self {
        self.inner.meetings.borrow_mut().push(meeting);
        self
    }

    pub(crate) fn with_action_items(self, meeting_id: &str, items: Vec<ActionItem>) -> Self {
        self.inner.action_items.borrow_mut().insert(meeting_id.to_owned(), items);
        self
    }

    pub(crate) fn with_analysis(self, analysis: MeetingAnalysis) -> Self {
        *self.inner.analysis.borrow_mut() = analysis;
        self
    }

    pub(crate) fn with_dashboard(self, metrics: DashboardMetrics) -> Self {
        *self.inner.dashboard.borrow_mut() = metrics;
        self
    }

    pub(crate) fn with_login_response(self, value: serde_json::Value) -> Self {
        *self.inner.login_response.borrow_mut() = value;
        self
    }

    /// Make every call to `op` fail with a 500.
    pub(crate) fn failing(self, op: &'static str) -> Self {
        self.inner.failing.borrow_mut().insert(op);
        self
    }

    /// Hold the next `get_meeting(id)` open until the returned sender fires.
    pub(crate) fn gate_meeting(&self, id: &str) -> oneshot::Sender<Result<Meeting, ApiError>> {
        let (tx, rx) = oneshot::channel();
        self.inner.meeting_gates.borrow_mut().entry(id.to_owned()).or_default().push_back(rx);
        tx
    }

    /// Hold the next `get_action_items(meeting_id)` open until the returned sender fires.
    pub(crate) fn gate_action_items(&self, meeting_id: &str) -> oneshot::Sender<Result<Vec<ActionItem>, ApiError>> {
        let (tx, rx) = oneshot::channel();
        self.inner.item_gates.borrow_mut().entry(meeting_id.to_owned()).or_default().push_back(rx);
        tx
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.inner.calls.borrow().clone()
    }

    /// Number of recorded calls whose name starts with `prefix`.
    pub(crate) fn count(&self, prefix: &str) -> usize {
        self.inner.calls.borrow().iter().filter(|c| c.starts_with(prefix)).count()
    }

    pub(crate) fn created(&self) -> Vec<(String, Vec<ActionItemDraft>)> {
        self.inner.created.borrow().clone()
    }

    pub(crate) fn stored_items(&self, meeting_id: &str) -> Vec<ActionItem> {
        self.inner.action_items.borrow().get(meeting_id).cloned().unwrap_or_default()
    }

    fn record(&self, call: String) {
        self.inner.calls.borrow_mut().push(call);
    }

    fn check(&self, op: &'static str) -> Result<(), ApiError> {
        if self.inner.failing.borrow().contains(op) { Err(failure(op)) } else { Ok(()) }
    }
}

async fn release<T>(gate: Gate<T>) -> Result<T, ApiError> {
    gate.await.unwrap_or_else(|_| Err(ApiError::Network("gate dropped".to_owned())))
}

impl Backend for FakeBackend {
    async fn login(&self, _credentials: &LoginCredentials) -> Result<serde_json::Value, ApiError> {
        self.record("login".to_owned());
        if self.inner.failing.borrow().contains("login") {
            return Err(ApiError::Status { status: 401, body: "Invalid credentials".to_owned() });
        }
        Ok(self.inner.login_response.borrow().clone())
    }

    async fn logout(&self) -> Result<(), ApiError> {
        self.record("logout".to_owned());
        self.check("logout")
    }

    async fn get_meetings(&self) -> Result<Vec<Meeting>, ApiError> {
        self.record("get_meetings".to_owned());
        self.check("get_meetings")?;
        Ok(self.inner.meetings.borrow().clone())
    }

    async fn get_meeting(&self, id: &str) -> Result<Meeting, ApiError> {
        self.record(format!("get_meeting:{id}"));
        let gate = self.inner.meeting_gates.borrow_mut().get_mut(id).and_then(VecDeque::pop_front);
        if let Some(gate) = gate {
            return release(gate).await;
        }
        self.check("get_meeting")?;
        self.inner
            .meetings
            .borrow()
            .iter()
            .find(|m| m.id == id)
            .cloned()
            .ok_or(ApiError::Status { status: 404, body: "Not Found".to_owned() })
    }

    async fn create_meeting(&self, data: &CreateMeeting) -> Result<Meeting, ApiError> {
        self.record("create_meeting".to_owned());
        self.check("create_meeting")?;
        let created = Meeting {
            id: format!("m{}", self.inner.meetings.borrow().len() + 1),
            title: data.title.clone(),
            date: data.date.clone(),
            attendees: data.attendees.clone(),
            notes: data.notes.clone(),
        };
        self.inner.meetings.borrow_mut().push(created.clone());
        Ok(created)
    }

    async fn update_meeting(&self, id: &str, data: &UpdateMeeting) -> Result<Meeting, ApiError> {
        self.record(format!("update_meeting:{id}"));
        self.check("update_meeting")?;
        let mut meetings = self.inner.meetings.borrow_mut();
        let meeting = meetings
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or(ApiError::Status { status: 404, body: "Not Found".to_owned() })?;
        if let Some(title) = &data.title {
            meeting.title.clone_from(title);
        }
        if let Some(date) = &data.date {
            meeting.date.clone_from(date);
        }
        if let Some(attendees) = &data.attendees {
            meeting.attendees.clone_from(attendees);
        }
        if let Some(notes) = &data.notes {
            meeting.notes.clone_from(notes);
        }
        Ok(meeting.clone())
    }

    async fn analyze_meeting(&self, id: &str) -> Result<MeetingAnalysis, ApiError> {
        self.record(format!("analyze_meeting:{id}"));
        self.check("analyze_meeting")?;
        Ok(self.inner.analysis.borrow().clone())
    }

    async fn create_action_items(&self, meeting_id: &str, items: &[ActionItemDraft]) -> Result<(), ApiError> {
        self.record(format!("create_action_items:{meeting_id}"));
        self.check("create_action_items")?;
        self.inner.created.borrow_mut().push((meeting_id.to_owned(), items.to_vec()));
        let mut stored = self.inner.action_items.borrow_mut();
        let list = stored.entry(meeting_id.to_owned()).or_default();
        for draft in items {
            list.push(ActionItem {
                id: format!("new-{}", list.len() + 1),
                meeting_id: meeting_id.to_owned(),
                description: draft.description.clone(),
                status: ActionItemStatus::ToDo,
                assignee: draft.assignee.clone(),
                due_date: draft.due_date.clone(),
                priority: draft.priority,
            });
        }
        Ok(())
    }

    async fn get_action_items(&self, meeting_id: &str) -> Result<Vec<ActionItem>, ApiError> {
        self.record(format!("get_action_items:{meeting_id}"));
        let gate = self.inner.item_gates.borrow_mut().get_mut(meeting_id).and_then(VecDeque::pop_front);
        if let Some(gate) = gate {
            return release(gate).await;
        }
        self.check("get_action_items")?;
        Ok(self.stored_items(meeting_id))
    }

    async fn update_action_item(&self, id: &str, data: &UpdateActionItem) -> Result<ActionItem, ApiError> {
        self.record(format!("update_action_item:{id}"));
        self.check("update_action_item")?;
        let mut stored = self.inner.action_items.borrow_mut();
        let item = stored
            .values_mut()
            .flat_map(|items| items.iter_mut())
            .find(|it| it.id == id)
            .ok_or(ApiError::Status { status: 404, body: "Not Found".to_owned() })?;
        if let Some(status) = data.status {
            item.status = status;
        }
        Ok(item.clone())
    }

    async fn get_dashboard_metrics(&self) -> Result<DashboardMetrics, ApiError> {
        self.record("get_dashboard_metrics".to_owned());
        self.check("get_dashboard_metrics")?;
        Ok(self.inner.dashboard.borrow().clone())
    }
}
