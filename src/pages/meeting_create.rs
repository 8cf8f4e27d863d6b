//! New meeting page.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::meeting_form::MeetingForm;
use crate::net::backend::{Backend, HttpBackend};
use crate::net::types::CreateMeeting;
use crate::util::callback::AsyncCallback;

#[component]
pub fn MeetingCreatePage() -> impl IntoView {
    let navigate = use_navigate();
    let saving = RwSignal::new(false);
    let created = RwSignal::new(false);

    Effect::new(move || {
        if created.get() {
            created.set(false);
            navigate("/meetings", Default::default());
        }
    });

    let on_submit = AsyncCallback::new(move |payload: CreateMeeting| async move {
        saving.set(true);
        let result = HttpBackend.create_meeting(&payload).await;
        saving.set(false);
        result.map(|meeting| {
            log::info!("MeetingCreatePage: created meeting {}", meeting.id);
            created.set(true);
        })
    });

    view! {
        <div class="meeting-form-page">
            <h2>"Create Meeting"</h2>
            <MeetingForm on_submit=on_submit saving=saving/>
        </div>
    }
}
