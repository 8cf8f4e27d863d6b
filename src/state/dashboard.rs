//! Dashboard metrics loading and display helpers.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use super::load::LoadState;
use crate::net::backend::Backend;
use crate::net::types::DashboardMetrics;

pub const LOAD_ERROR: &str = "Failed to load dashboard metrics.";
pub const NO_OVERDUE: &str = "No overdue items.";
pub const NO_TEAM_STATS: &str = "No team stats.";

/// Fetch metrics once; failures collapse to a single message.
pub async fn load_dashboard<B: Backend>(backend: &B) -> LoadState<DashboardMetrics> {
    match backend.get_dashboard_metrics().await {
        Ok(metrics) => LoadState::Loaded(metrics),
        Err(e) => {
            log::error!("DashboardPage: {e}");
            LoadState::Failed(LOAD_ERROR.to_owned())
        }
    }
}

/// Completion rate exactly as the server sent it, with a percent sign.
pub fn format_rate(rate: f64) -> String {
    format!("{rate}%")
}
