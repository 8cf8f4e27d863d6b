//! Top navigation bar with session-aware links and logout.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::net::backend::HttpBackend;
use crate::state::auth::AuthContext;
use crate::util::auth::LOGIN_ROUTE;
use crate::util::storage::BrowserStorage;

/// App title plus, while signed in, navigation links and a logout button.
#[component]
pub fn Navbar() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let navigate = use_navigate();
    let logged_out = RwSignal::new(false);

    Effect::new(move || {
        if logged_out.get() {
            logged_out.set(false);
            navigate(LOGIN_ROUTE, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    let user_label = move || auth.state().with(|s| s.user.as_ref().and_then(|u| u.display_name())).unwrap_or_default();

    let on_logout = move |_| {
        leptos::task::spawn_local(async move {
            auth.logout(&HttpBackend, &BrowserStorage).await;
            logged_out.set(true);
        });
    };

    view! {
        <nav class="app-navbar">
            <h1 class="app-navbar__title">"Meeting Web"</h1>
            <Show when=move || auth.is_authenticated()>
                <div class="app-navbar__links">
                    <A href="/">"Dashboard"</A>
                    <A href="/meetings">"Meetings"</A>
                    <span class="app-navbar__user">{user_label}</span>
                    <button type="button" class="btn" aria-label="logout-button" on:click=on_logout>
                        "Logout"
                    </button>
                </div>
            </Show>
        </nav>
    }
}
