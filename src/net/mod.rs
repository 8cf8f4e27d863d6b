//! Networking modules for the REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `client` executes requests and runs the response interceptor, `api` holds
//! one helper per endpoint, `backend` exposes them behind a trait, `types`
//! defines the wire schema and `error` the failure type.

pub mod api;
pub mod backend;
pub mod client;
pub mod error;
pub mod types;

#[cfg(test)]
pub(crate) mod fake;
