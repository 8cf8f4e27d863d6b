//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided once at the app root as `AuthContext`; the route guard, navbar and
//! login page read it. The user record is restored from `localStorage` on
//! startup and written only by login/logout.
//!
//! ERROR HANDLING
//! ==============
//! Login failures propagate to the login page. Logout never fails: a rejected
//! remote call is logged and local state is cleared anyway. Storage problems
//! are logged and otherwise ignored.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::net::backend::Backend;
use crate::net::error::ApiError;
use crate::net::types::{AuthUser, LoginCredentials, normalize_login_response};
use crate::util::storage::KeyValueStore;

/// Storage key holding the JSON-serialized user.
pub const STORAGE_KEY: &str = "auth_user";

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthState {
    pub user: Option<AuthUser>,
    /// True until the stored session has been restored.
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { user: None, loading: true }
    }
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

/// Read the persisted user. Malformed records are removed and logged.
pub fn restore_user(storage: &impl KeyValueStore) -> Option<AuthUser> {
    let raw = storage.get(STORAGE_KEY)?;
    match serde_json::from_str::<AuthUser>(&raw) {
        Ok(user) => Some(user),
        Err(e) => {
            log::error!("AuthContext: failed to parse stored user: {e}");
            storage.remove(STORAGE_KEY);
            None
        }
    }
}

fn persist_user(storage: &impl KeyValueStore, user: &AuthUser) {
    let encoded = match serde_json::to_string(user) {
        Ok(encoded) => encoded,
        Err(e) => {
            log::error!("AuthContext: failed to encode user: {e}");
            return;
        }
    };
    if let Err(e) = storage.set(STORAGE_KEY, &encoded) {
        log::error!("AuthContext: failed to persist user: {e}");
    }
}

/// Call the backend, normalize the returned identity and persist it.
///
/// # Errors
///
/// Returns the backend error unchanged, or `ApiError::Decode` when the
/// response is not a JSON object.
pub async fn login_user<B: Backend>(
    backend: &B,
    storage: &impl KeyValueStore,
    credentials: &LoginCredentials,
) -> Result<AuthUser, ApiError> {
    let payload = backend.login(credentials).await.inspect_err(|e| log::error!("AuthContext: {e}"))?;
    let user = normalize_login_response(payload).ok_or_else(|| {
        log::error!("AuthContext: login response is not an object");
        ApiError::Decode("login response is not an object".to_owned())
    })?;
    persist_user(storage, &user);
    Ok(user)
}

/// Best-effort remote logout followed by an unconditional local clear.
pub async fn logout_user<B: Backend>(backend: &B, storage: &impl KeyValueStore) {
    if let Err(e) = backend.logout().await {
        log::error!("AuthContext: logout error: {e}");
    }
    storage.remove(STORAGE_KEY);
}

/// Reactive session handle provided at the app root.
#[derive(Clone, Copy, Debug)]
pub struct AuthContext {
    state: RwSignal<AuthState>,
}

impl AuthContext {
    pub fn new() -> Self {
        Self { state: RwSignal::new(AuthState::default()) }
    }

    pub fn state(&self) -> RwSignal<AuthState> {
        self.state
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.with(AuthState::is_authenticated)
    }

    pub fn is_loading(&self) -> bool {
        self.state.with(|s| s.loading)
    }

    /// Restore the persisted session and end the loading phase.
    pub fn init(&self, storage: &impl KeyValueStore) {
        let user = restore_user(storage);
        self.state.set(AuthState { user, loading: false });
    }

    /// # Errors
    ///
    /// See [`login_user`]; the session stays unauthenticated on failure.
    pub async fn login<B: Backend>(
        &self,
        backend: &B,
        storage: &impl KeyValueStore,
        credentials: &LoginCredentials,
    ) -> Result<(), ApiError> {
        let result = login_user(backend, storage, credentials).await;
        self.state.update(|s| {
            s.loading = false;
            if let Ok(user) = &result {
                s.user = Some(user.clone());
            }
        });
        result.map(|_| ())
    }

    pub async fn logout<B: Backend>(&self, backend: &B, storage: &impl KeyValueStore) {
        logout_user(backend, storage).await;
        self.state.update(|s| s.user = None);
    }
}

impl Default for AuthContext {
    fn default() -> Self {
        Self::new()
    }
}
