use futures::executor::block_on;

use super::*;
use crate::net::fake::FakeBackend;
use crate::net::types::{MetricsSummary, TeamStat};

#[test]
fn rate_keeps_server_precision() {
    assert_eq!(format_rate(75.0), "75%");
    assert_eq!(format_rate(66.67), "66.67%");
    assert_eq!(format_rate(0.0), "0%");
}

#[test]
fn load_failure_shows_message_and_leaves_loading() {
    let backend = FakeBackend::new().failing("get_dashboard_metrics");
    let state = block_on(load_dashboard(&backend));
    assert_eq!(state.error(), Some(LOAD_ERROR));
    assert!(!state.is_loading());
}

#[test]
fn load_success_returns_metrics() {
    let metrics = DashboardMetrics {
        summary: MetricsSummary { total_action_items: 9, completion_rate: 50.0, overdue_count: 2 },
        overdue_items: Vec::new(),
        team_stats: vec![TeamStat { assignee: "Alice".to_owned(), total: 5, completed: 4, overdue: 1 }],
    };
    let backend = FakeBackend::new().with_dashboard(metrics.clone());
    assert_eq!(block_on(load_dashboard(&backend)), LoadState::Loaded(metrics));
    assert_eq!(backend.count("get_dashboard_metrics"), 1);
}
