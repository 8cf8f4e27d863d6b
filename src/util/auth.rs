//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The route guard and the login page apply the same session checks; both
//! navigate with `replace` so the redirect does not pollute history.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::{AuthContext, AuthState};

/// Router path of the login page (relative to the router base).
pub const LOGIN_ROUTE: &str = "/login";
/// Router path of the dashboard.
pub const HOME_ROUTE: &str = "/";

/// True once the initial restore finished without finding a user.
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.loading && state.user.is_none()
}

/// True once the initial restore finished and a user is present.
pub fn should_redirect_authenticated(state: &AuthState) -> bool {
    !state.loading && state.user.is_some()
}

fn replace() -> NavigateOptions {
    NavigateOptions { replace: true, ..NavigateOptions::default() }
}

/// Redirect to `/login` whenever auth has loaded and no user is present.
pub fn install_unauth_redirect<F>(auth: AuthContext, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if auth.state().with(should_redirect_unauth) {
            navigate(LOGIN_ROUTE, replace());
        }
    });
}

/// Redirect to the dashboard whenever auth has loaded and a user is present.
pub fn install_auth_redirect<F>(auth: AuthContext, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if auth.state().with(should_redirect_authenticated) {
            navigate(HOME_ROUTE, replace());
        }
    });
}
