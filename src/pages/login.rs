//! Email + password login page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::backend::HttpBackend;
use crate::net::types::LoginCredentials;
use crate::state::auth::AuthContext;
use crate::util::auth::{HOME_ROUTE, install_auth_redirect};
use crate::util::storage::BrowserStorage;

const INVALID_CREDENTIALS: &str = "Invalid credentials";

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let navigate = use_navigate();
    install_auth_redirect(auth, navigate.clone());

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<&'static str>);
    let busy = RwSignal::new(false);
    let signed_in = RwSignal::new(false);

    Effect::new(move || {
        if signed_in.get() {
            signed_in.set(false);
            navigate(HOME_ROUTE, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        error.set(None);
        let credentials = LoginCredentials { email: email.get_untracked(), password: password.get_untracked() };
        leptos::task::spawn_local(async move {
            match auth.login(&HttpBackend, &BrowserStorage, &credentials).await {
                Ok(()) => signed_in.set(true),
                Err(e) => {
                    log::warn!("LoginPage: login failed: {e}");
                    error.set(Some(INVALID_CREDENTIALS));
                }
            }
            busy.set(false);
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Meeting Web"</h1>
                <p class="login-card__subtitle">"Sign in"</p>
                <form class="login-form" on:submit=on_submit>
                    <label for="login-email">"Email"</label>
                    <input
                        id="login-email"
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <label for="login-password">"Password"</label>
                    <input
                        id="login-password"
                        class="login-input"
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Login" }}
                    </button>
                </form>
                {move || error.get().map(|message| view! { <p class="login-message" role="alert">{message}</p> })}
            </div>
        </div>
    }
}
