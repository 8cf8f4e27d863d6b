//! Utility helpers shared across pages and components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, location,
//! clocks, async callbacks) from page and state logic so the latter stays
//! testable natively.

pub mod auth;
pub mod browser;
pub mod callback;
pub mod storage;
pub mod time;
