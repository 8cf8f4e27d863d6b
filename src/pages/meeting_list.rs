//! Meeting list page, newest first.

use chrono::Local;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::net::backend::HttpBackend;
use crate::net::types::Meeting;
use crate::state::load::LoadState;
use crate::state::meetings::{format_attendees_summary, load_meetings};
use crate::state::sequence::MountFlag;
use crate::util::time::format_meeting_date;

#[component]
pub fn MeetingListPage() -> impl IntoView {
    let state = RwSignal::new(LoadState::<Vec<Meeting>>::Loading);
    let mounted = MountFlag::new();
    on_cleanup({
        let mounted = mounted.clone();
        move || mounted.unmount()
    });

    leptos::task::spawn_local(async move {
        let loaded = load_meetings(&HttpBackend).await;
        if mounted.is_mounted() {
            state.set(loaded);
        }
    });

    view! {
        <div class="meeting-list-page">
            <header class="page-header">
                <h2>"Meetings"</h2>
                <A href="/meetings/new" attr:class="btn btn--primary">"New Meeting"</A>
            </header>
            {move || match state.get() {
                LoadState::Loading => view! { <div class="page-loading">"Loading meetings..."</div> }.into_any(),
                LoadState::Failed(message) => view! { <div class="page-error" role="alert">{message}</div> }.into_any(),
                LoadState::Loaded(meetings) => meeting_rows(meetings).into_any(),
            }}
        </div>
    }
}

fn meeting_rows(meetings: Vec<Meeting>) -> impl IntoView {
    let rows = meetings
        .into_iter()
        .map(|m| {
            let date = format_meeting_date(&m.date, &Local);
            let attendees = format_attendees_summary(&m.attendees);
            let href = format!("/meetings/{}", m.id);
            view! {
                <li class="meeting-row" data-testid=format!("meeting-row-{}", m.id)>
                    <div class="meeting-row__title">{m.title}</div>
                    <div class="meeting-row__date">{date}</div>
                    <div class="meeting-row__attendees">{attendees}</div>
                    <A href=href>"View"</A>
                </li>
            }
        })
        .collect::<Vec<_>>();

    view! { <ul class="meeting-list">{rows}</ul> }
}
