//! Wire DTOs for the meetings REST API.
//!
//! DESIGN
//! ======
//! Field names follow the backend's camelCase JSON. Optional fields are
//! omitted on requests when absent. Enum decoding is lenient where the server
//! is known to send free-form strings, so one odd record cannot sink a whole
//! list response.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// A meeting as stored by the backend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meeting {
    /// Backend-assigned identifier.
    pub id: String,
    pub title: String,
    /// ISO-8601 date string.
    pub date: String,
    /// Attendee names in the order they were entered.
    #[serde(default)]
    pub attendees: Vec<String>,
    #[serde(default)]
    pub notes: String,
}

/// Payload for `POST /meetings`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMeeting {
    pub title: String,
    /// ISO-8601 instant.
    pub date: String,
    pub attendees: Vec<String>,
    pub notes: String,
}

/// Partial payload for `PUT /meetings/:id`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMeeting {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attendees: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl From<CreateMeeting> for UpdateMeeting {
    fn from(value: CreateMeeting) -> Self {
        Self {
            title: Some(value.title),
            date: Some(value.date),
            attendees: Some(value.attendees),
            notes: Some(value.notes),
        }
    }
}

/// Workflow status of an action item. Any transition is allowed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum ActionItemStatus {
    #[default]
    #[serde(rename = "To Do")]
    ToDo,
    #[serde(rename = "In Progress")]
    InProgress,
    #[serde(rename = "Done")]
    Done,
}

impl ActionItemStatus {
    /// Board column order.
    pub const ALL: [ActionItemStatus; 3] = [Self::ToDo, Self::InProgress, Self::Done];

    /// Display label, identical to the wire value.
    pub fn label(self) -> &'static str {
        match self {
            Self::ToDo => "To Do",
            Self::InProgress => "In Progress",
            Self::Done => "Done",
        }
    }

    /// Parse an exact wire label.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.label() == label)
    }
}

impl From<String> for ActionItemStatus {
    /// Unrecognized statuses land in the first column.
    fn from(value: String) -> Self {
        Self::from_label(&value).unwrap_or_default()
    }
}

/// Relative priority of an action item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionItemPriority {
    Low,
    Medium,
    High,
}

impl ActionItemPriority {
    pub const ALL: [ActionItemPriority; 3] = [Self::Low, Self::Medium, Self::High];

    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.label() == label)
    }
}

/// A persisted action item belonging to exactly one meeting.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionItem {
    pub id: String,
    pub meeting_id: String,
    pub description: String,
    pub status: ActionItemStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    /// ISO-8601 date string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_lenient_priority"
    )]
    pub priority: Option<ActionItemPriority>,
}

/// An unpersisted action item, as suggested by analysis or edited in review.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionItemDraft {
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    /// ISO-8601 date string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_lenient_priority"
    )]
    pub priority: Option<ActionItemPriority>,
}

/// Partial payload for `PATCH /action-items/:id`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateActionItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ActionItemStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<ActionItemPriority>,
}

impl UpdateActionItem {
    /// A status-only patch.
    pub fn status(status: ActionItemStatus) -> Self {
        Self { status: Some(status), ..Self::default() }
    }
}

/// Payload for `POST /action-items`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateActionItems {
    pub meeting_id: String,
    pub items: Vec<ActionItemDraft>,
}

/// Response of `POST /meetings/:id/analyze`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeetingAnalysis {
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub key_discussion_points: Vec<String>,
    #[serde(default)]
    pub decisions: Vec<String>,
    #[serde(default)]
    pub suggested_action_items: Vec<ActionItemDraft>,
}

/// Aggregate metrics from `GET /dashboard/metrics`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardMetrics {
    pub summary: MetricsSummary,
    #[serde(default)]
    pub overdue_items: Vec<OverdueItem>,
    #[serde(default)]
    pub team_stats: Vec<TeamStat>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsSummary {
    #[serde(deserialize_with = "deserialize_u64_from_number")]
    pub total_action_items: u64,
    /// Completion percentage as computed by the server.
    pub completion_rate: f64,
    #[serde(deserialize_with = "deserialize_u64_from_number")]
    pub overdue_count: u64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverdueItem {
    pub id: String,
    pub description: String,
    #[serde(default)]
    pub assignee: String,
    /// ISO-8601 date string.
    pub due_date: String,
    #[serde(default)]
    pub meeting_title: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamStat {
    pub assignee: String,
    #[serde(deserialize_with = "deserialize_u64_from_number")]
    pub total: u64,
    #[serde(deserialize_with = "deserialize_u64_from_number")]
    pub completed: u64,
    #[serde(deserialize_with = "deserialize_u64_from_number")]
    pub overdue: u64,
}

/// Opaque identity record returned by login and persisted locally.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthUser(pub serde_json::Map<String, serde_json::Value>);

impl AuthUser {
    /// Best-effort label for the navbar: `name`, then `email`, then `id`.
    pub fn display_name(&self) -> Option<String> {
        ["name", "email", "id"].iter().find_map(|key| match self.0.get(*key) {
            Some(serde_json::Value::String(s)) if !s.trim().is_empty() => Some(s.clone()),
            Some(serde_json::Value::Number(n)) => Some(n.to_string()),
            _ => None,
        })
    }
}

/// Credentials posted to `/auth/login`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

/// Accept both `{ "user": {...} }` and a bare user object.
///
/// Returns `None` when the payload carries no object at all.
pub fn normalize_login_response(value: serde_json::Value) -> Option<AuthUser> {
    let serde_json::Value::Object(mut map) = value else {
        return None;
    };
    match map.remove("user") {
        Some(serde_json::Value::Object(user)) => Some(AuthUser(user)),
        Some(other) => {
            map.insert("user".to_owned(), other);
            Some(AuthUser(map))
        }
        None => Some(AuthUser(map)),
    }
}

fn deserialize_lenient_priority<'de, D>(deserializer: D) -> Result<Option<ActionItemPriority>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.as_deref().and_then(ActionItemPriority::from_label))
}

fn deserialize_u64_from_number<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_u64() {
                return Ok(int);
            }
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
                && float >= 0.0
                && float <= u64::MAX as f64
            {
                return Ok(float as u64);
            }
            Err(D::Error::custom("expected non-negative integer"))
        }
        _ => Err(D::Error::custom("expected number")),
    }
}
