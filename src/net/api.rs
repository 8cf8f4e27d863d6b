//! REST API helpers, one per backend operation.
//!
//! Each helper issues exactly one request through `client`, returns the
//! decoded payload, and on failure logs the error under its resource group
//! before returning it unchanged.
//!
//! ERROR HANDLING
//! ==============
//! Nothing here converts an `ApiError` into UI text; pages and the session
//! store own that decision.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::client::{Method, send_json, send_no_content};
use super::error::ApiError;
use super::types::{
    ActionItem, ActionItemDraft, CreateActionItems, CreateMeeting, DashboardMetrics, LoginCredentials, Meeting,
    MeetingAnalysis, UpdateActionItem, UpdateMeeting,
};

const AUTH: &str = "auth API";
const MEETINGS: &str = "meetings API";
const ACTION_ITEMS: &str = "actionItems API";
const DASHBOARD: &str = "dashboard API";

const NO_BODY: Option<&()> = None;

pub(crate) const LOGIN_PATH: &str = "/auth/login";
pub(crate) const LOGOUT_PATH: &str = "/auth/logout";
pub(crate) const MEETINGS_PATH: &str = "/meetings";
pub(crate) const ACTION_ITEMS_PATH: &str = "/action-items";
pub(crate) const DASHBOARD_METRICS_PATH: &str = "/dashboard/metrics";

pub(crate) fn meeting_path(id: &str) -> String {
    format!("{MEETINGS_PATH}/{id}")
}

pub(crate) fn meeting_analyze_path(id: &str) -> String {
    format!("{MEETINGS_PATH}/{id}/analyze")
}

pub(crate) fn meeting_action_items_path(meeting_id: &str) -> String {
    format!("{MEETINGS_PATH}/{meeting_id}/action-items")
}

pub(crate) fn action_item_path(id: &str) -> String {
    format!("{ACTION_ITEMS_PATH}/{id}")
}

fn logged<T>(group: &str, result: Result<T, ApiError>) -> Result<T, ApiError> {
    if let Err(e) = &result {
        log::error!("{group}: {e}");
    }
    result
}

/// `POST /auth/login`. Returns the raw payload; the session store normalizes it.
///
/// # Errors
///
/// Returns the gateway error unchanged.
pub async fn login(credentials: &LoginCredentials) -> Result<serde_json::Value, ApiError> {
    logged(AUTH, send_json(Method::Post, LOGIN_PATH, Some(credentials)).await)
}

/// `POST /auth/logout`.
///
/// # Errors
///
/// Returns the gateway error unchanged.
pub async fn logout() -> Result<(), ApiError> {
    logged(AUTH, send_no_content(Method::Post, LOGOUT_PATH, NO_BODY).await)
}

/// `GET /meetings`.
///
/// # Errors
///
/// Returns the gateway error unchanged.
pub async fn get_meetings() -> Result<Vec<Meeting>, ApiError> {
    logged(MEETINGS, send_json(Method::Get, MEETINGS_PATH, NO_BODY).await)
}

/// `GET /meetings/:id`.
///
/// # Errors
///
/// Returns the gateway error unchanged.
pub async fn get_meeting(id: &str) -> Result<Meeting, ApiError> {
    logged(MEETINGS, send_json(Method::Get, &meeting_path(id), NO_BODY).await)
}

/// `POST /meetings`.
///
/// # Errors
///
/// Returns the gateway error unchanged.
pub async fn create_meeting(data: &CreateMeeting) -> Result<Meeting, ApiError> {
    logged(MEETINGS, send_json(Method::Post, MEETINGS_PATH, Some(data)).await)
}

/// `PUT /meetings/:id` with the fields to change.
///
/// # Errors
///
/// Returns the gateway error unchanged.
pub async fn update_meeting(id: &str, data: &UpdateMeeting) -> Result<Meeting, ApiError> {
    logged(MEETINGS, send_json(Method::Put, &meeting_path(id), Some(data)).await)
}

/// `POST /meetings/:id/analyze`.
///
/// # Errors
///
/// Returns the gateway error unchanged.
pub async fn analyze_meeting(id: &str) -> Result<MeetingAnalysis, ApiError> {
    logged(MEETINGS, send_json(Method::Post, &meeting_analyze_path(id), NO_BODY).await)
}

/// `POST /action-items` with `{ meetingId, items }`.
///
/// # Errors
///
/// Returns the gateway error unchanged.
pub async fn create_action_items(meeting_id: &str, items: &[ActionItemDraft]) -> Result<(), ApiError> {
    let payload = CreateActionItems { meeting_id: meeting_id.to_owned(), items: items.to_vec() };
    logged(ACTION_ITEMS, send_no_content(Method::Post, ACTION_ITEMS_PATH, Some(&payload)).await)
}

/// `GET /meetings/:id/action-items`.
///
/// # Errors
///
/// Returns the gateway error unchanged.
pub async fn get_action_items(meeting_id: &str) -> Result<Vec<ActionItem>, ApiError> {
    logged(
        ACTION_ITEMS,
        send_json(Method::Get, &meeting_action_items_path(meeting_id), NO_BODY).await,
    )
}

/// `PATCH /action-items/:id`.
///
/// # Errors
///
/// Returns the gateway error unchanged.
pub async fn update_action_item(id: &str, data: &UpdateActionItem) -> Result<ActionItem, ApiError> {
    logged(ACTION_ITEMS, send_json(Method::Patch, &action_item_path(id), Some(data)).await)
}

/// `GET /dashboard/metrics`.
///
/// # Errors
///
/// Returns the gateway error unchanged.
pub async fn get_dashboard_metrics() -> Result<DashboardMetrics, ApiError> {
    logged(DASHBOARD, send_json(Method::Get, DASHBOARD_METRICS_PATH, NO_BODY).await)
}
