//! Edit page for an existing meeting.
//!
//! The route id is re-read on every parameter change; each load takes a
//! fresh `FetchSequence` token so only the latest response is rendered.

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::meeting_form::MeetingForm;
use crate::net::backend::{Backend, HttpBackend};
use crate::net::types::{CreateMeeting, Meeting, UpdateMeeting};
use crate::state::load::LoadState;
use crate::state::meetings::load_meeting_for_edit;
use crate::state::sequence::{FetchSequence, MountFlag};
use crate::util::callback::AsyncCallback;

#[component]
pub fn MeetingEditPage() -> impl IntoView {
    let params = use_params_map();
    let navigate = use_navigate();
    let state = RwSignal::new(LoadState::<Meeting>::Loading);
    let saving = RwSignal::new(false);
    let saved = RwSignal::new(None::<String>);
    let sequence = FetchSequence::new();
    let mounted = MountFlag::new();
    on_cleanup({
        let mounted = mounted.clone();
        move || mounted.unmount()
    });

    Effect::new(move || {
        if let Some(id) = saved.get() {
            saved.set(None);
            navigate(&format!("/meetings/{id}"), Default::default());
        }
    });

    Effect::new(move || {
        let id = params.with(|p| p.get("id"));
        let token = sequence.begin();
        let sequence = sequence.clone();
        let mounted = mounted.clone();
        state.set(LoadState::Loading);
        leptos::task::spawn_local(async move {
            let loaded = load_meeting_for_edit(&HttpBackend, id.as_deref()).await;
            if mounted.is_mounted() && sequence.is_latest(token) {
                state.set(loaded);
            }
        });
    });

    let form = move |meeting: Meeting| {
        let id = meeting.id.clone();
        let on_submit = AsyncCallback::new(move |payload: CreateMeeting| {
            let id = id.clone();
            async move {
                saving.set(true);
                let result = HttpBackend.update_meeting(&id, &UpdateMeeting::from(payload)).await;
                saving.set(false);
                result.map(|_| saved.set(Some(id)))
            }
        });
        view! { <MeetingForm initial=meeting on_submit=on_submit saving=saving/> }
    };

    view! {
        <div class="meeting-form-page">
            <h2>"Edit Meeting"</h2>
            {move || match state.get() {
                LoadState::Loading => view! { <div class="page-loading">"Loading meeting..."</div> }.into_any(),
                LoadState::Failed(message) => view! { <div class="page-error" role="alert">{message}</div> }.into_any(),
                LoadState::Loaded(meeting) => form(meeting).into_any(),
            }}
        </div>
    }
}
