//! Client-side application state and the logic that drives it.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages own reactive signals; the types and functions here decide what goes
//! into them. Everything in this module is free of browser APIs so it can be
//! exercised natively against fake backends and stores.

pub mod action_items;
pub mod auth;
pub mod dashboard;
pub mod detail_coordinator;
pub mod load;
pub mod meeting_detail;
pub mod meeting_form;
pub mod meetings;
pub mod review;
pub mod sequence;
