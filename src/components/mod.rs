//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render meeting, action-item and dashboard surfaces. Renderers
//! receive read-only data plus callbacks; the owning page performs every
//! mutation.

pub mod action_item_list;
pub mod kanban_board;
pub mod meeting_form;
pub mod metric_card;
pub mod navbar;
pub mod overdue_list;
pub mod require_auth;
pub mod review_modal;
pub mod team_stats;
