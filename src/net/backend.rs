//! Backend abstraction over the REST gateway.
//!
//! DESIGN
//! ======
//! Stateful flows (session store, detail coordinator, page loaders) are
//! generic over `Backend` so they run against `HttpBackend` in the browser
//! and against in-memory fakes in native tests. The trait is used through
//! generics only, never as a trait object.

#![allow(async_fn_in_trait)]

use super::api;
use super::error::ApiError;
use super::types::{
    ActionItem, ActionItemDraft, CreateMeeting, DashboardMetrics, LoginCredentials, Meeting, MeetingAnalysis,
    UpdateActionItem, UpdateMeeting,
};

/// One async method per backend operation.
pub trait Backend: Clone + 'static {
    async fn login(&self, credentials: &LoginCredentials) -> Result<serde_json::Value, ApiError>;
    async fn logout(&self) -> Result<(), ApiError>;
    async fn get_meetings(&self) -> Result<Vec<Meeting>, ApiError>;
    async fn get_meeting(&self, id: &str) -> Result<Meeting, ApiError>;
    async fn create_meeting(&self, data: &CreateMeeting) -> Result<Meeting, ApiError>;
    async fn update_meeting(&self, id: &str, data: &UpdateMeeting) -> Result<Meeting, ApiError>;
    async fn analyze_meeting(&self, id: &str) -> Result<MeetingAnalysis, ApiError>;
    async fn create_action_items(&self, meeting_id: &str, items: &[ActionItemDraft]) -> Result<(), ApiError>;
    async fn get_action_items(&self, meeting_id: &str) -> Result<Vec<ActionItem>, ApiError>;
    async fn update_action_item(&self, id: &str, data: &UpdateActionItem) -> Result<ActionItem, ApiError>;
    async fn get_dashboard_metrics(&self) -> Result<DashboardMetrics, ApiError>;
}

/// The real gateway: delegates to the `api` helpers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HttpBackend;

impl Backend for HttpBackend {
    async fn login(&self, credentials: &LoginCredentials) -> Result<serde_json::Value, ApiError> {
        api::login(credentials).await
    }

    async fn logout(&self) -> Result<(), ApiError> {
        api::logout().await
    }

    async fn get_meetings(&self) -> Result<Vec<Meeting>, ApiError> {
        api::get_meetings().await
    }

    async fn get_meeting(&self, id: &str) -> Result<Meeting, ApiError> {
        api::get_meeting(id).await
    }

    async fn create_meeting(&self, data: &CreateMeeting) -> Result<Meeting, ApiError> {
        api::create_meeting(data).await
    }

    async fn update_meeting(&self, id: &str, data: &UpdateMeeting) -> Result<Meeting, ApiError> {
        api::update_meeting(id, data).await
    }

    async fn analyze_meeting(&self, id: &str) -> Result<MeetingAnalysis, ApiError> {
        api::analyze_meeting(id).await
    }

    async fn create_action_items(&self, meeting_id: &str, items: &[ActionItemDraft]) -> Result<(), ApiError> {
        api::create_action_items(meeting_id, items).await
    }

    async fn get_action_items(&self, meeting_id: &str) -> Result<Vec<ActionItem>, ApiError> {
        api::get_action_items(meeting_id).await
    }

    async fn update_action_item(&self, id: &str, data: &UpdateActionItem) -> Result<ActionItem, ApiError> {
        api::update_action_item(id, data).await
    }

    async fn get_dashboard_metrics(&self) -> Result<DashboardMetrics, ApiError> {
        api::get_dashboard_metrics().await
    }
}
