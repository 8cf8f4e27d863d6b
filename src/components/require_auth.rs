//! Route guard for authenticated views.
//!
//! Renders nothing while the session is being restored, redirects to the
//! login route once it is known to be absent, and renders its children only
//! for a signed-in user.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthContext;
use crate::util::auth::install_unauth_redirect;

#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    install_unauth_redirect(auth, use_navigate());

    view! {
        <Show when=move || auth.state().with(|s| !s.loading && s.user.is_some())>
            {children()}
        </Show>
    }
}
