//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (fetching, sequencing,
//! navigation) and delegates rendering details to `components`.

pub mod dashboard;
pub mod login;
pub mod meeting_create;
pub mod meeting_detail;
pub mod meeting_edit;
pub mod meeting_list;
