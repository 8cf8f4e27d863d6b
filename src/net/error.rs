//! Gateway error type.
//!
//! ERROR HANDLING
//! ==============
//! Every REST helper returns `ApiError` unchanged to its caller after logging
//! it once. Views decide how to phrase the failure for the user.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure of a single backend call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-success status.
    #[error("request failed with status {status}")]
    Status { status: u16, body: String },
    /// The response body did not match the expected shape.
    #[error("invalid response: {0}")]
    Decode(String),
    /// HTTP is only wired up in the browser build.
    #[error("backend not available outside the browser")]
    Unavailable,
}

impl ApiError {
    /// HTTP status code, when the server responded.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    /// Message shown inline to the user: the server's body text when it sent
    /// one, otherwise the error's own description.
    pub fn user_message(&self) -> String {
        match self {
            Self::Status { body, .. } if !body.trim().is_empty() => body.trim().to_owned(),
            other => other.to_string(),
        }
    }
}
