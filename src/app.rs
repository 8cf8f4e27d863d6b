//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::navbar::Navbar;
use crate::components::require_auth::RequireAuth;
use crate::config::AppConfig;
use crate::pages::{
    dashboard::DashboardPage, login::LoginPage, meeting_create::MeetingCreatePage, meeting_detail::MeetingDetailPage,
    meeting_edit::MeetingEditPage, meeting_list::MeetingListPage,
};
use crate::state::auth::AuthContext;
use crate::util::storage::BrowserStorage;

/// Root application component.
///
/// Restores the persisted session, provides it as context, and sets up
/// client-side routing under the configured base path.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = AuthContext::new();
    auth.init(&BrowserStorage);
    provide_context(auth);

    view! {
        <Title text="Meeting Web"/>

        <Router base=AppConfig::get().router_base()>
            <Navbar/>
            <main class="app-main">
                // `new` must be matched before the `:id` segment.
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("") view=|| view! { <RequireAuth><DashboardPage/></RequireAuth> }/>
                    <Route
                        path=StaticSegment("meetings")
                        view=|| view! { <RequireAuth><MeetingListPage/></RequireAuth> }
                    />
                    <Route
                        path=(StaticSegment("meetings"), StaticSegment("new"))
                        view=|| view! { <RequireAuth><MeetingCreatePage/></RequireAuth> }
                    />
                    <Route
                        path=(StaticSegment("meetings"), ParamSegment("id"))
                        view=|| view! { <RequireAuth><MeetingDetailPage/></RequireAuth> }
                    />
                    <Route
                        path=(StaticSegment("meetings"), ParamSegment("id"), StaticSegment("edit"))
                        view=|| view! { <RequireAuth><MeetingEditPage/></RequireAuth> }
                    />
                </Routes>
            </main>
        </Router>
    }
}
