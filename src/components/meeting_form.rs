//! Create/edit form for a meeting.
//!
//! SYSTEM CONTEXT
//! ==============
//! Hosted by the create and edit pages, which supply the submit handler and
//! the `saving` flag. Validation and payload building live in
//! `state::meeting_form`; this component only binds inputs and messages.

use chrono::Local;
use leptos::prelude::*;

use crate::net::error::ApiError;
use crate::net::types::{CreateMeeting, Meeting};
use crate::state::meeting_form::{FormErrors, MeetingFormInput, SubmitOutcome, submit};
use crate::util::callback::AsyncCallback;

#[component]
pub fn MeetingForm(
    /// Existing meeting when editing.
    #[prop(optional)]
    initial: Option<Meeting>,
    on_submit: AsyncCallback<CreateMeeting, Result<(), ApiError>>,
    #[prop(into)] saving: Signal<bool>,
) -> impl IntoView {
    let seed = initial.as_ref().map(|m| MeetingFormInput::from_meeting(m, &Local)).unwrap_or_default();
    let input = RwSignal::new(seed);
    let errors = RwSignal::new(FormErrors::default());
    let form_error = RwSignal::new(None::<&'static str>);

    let on_form_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }
        form_error.set(None);
        let snapshot = input.get_untracked();
        let on_submit = on_submit.clone();
        leptos::task::spawn_local(async move {
            match submit(&snapshot, &Local, &on_submit).await {
                SubmitOutcome::Invalid(next) => {
                    errors.set(next);
                }
                SubmitOutcome::Submitted => {
                    errors.set(FormErrors::default());
                }
                SubmitOutcome::Failed(message) => {
                    errors.set(FormErrors::default());
                    form_error.set(Some(message));
                }
            }
        });
    };

    let field_error = move |pick: fn(&FormErrors) -> Option<&'static str>| {
        move || errors.with(pick).map(|message| view! { <div class="form-error" role="alert">{message}</div> })
    };

    view! {
        <form class="meeting-form" aria-label="meeting-form" on:submit=on_form_submit>
            <div class="form-field">
                <label for="title">"Title"</label>
                <input
                    id="title"
                    name="title"
                    prop:value=move || input.with(|i| i.title.clone())
                    on:input=move |ev| input.update(|i| i.title = event_target_value(&ev))
                />
                {field_error(|e| e.title)}
            </div>

            <div class="form-field">
                <label for="date">"Date"</label>
                <input
                    id="date"
                    name="date"
                    type="datetime-local"
                    prop:value=move || input.with(|i| i.date_input.clone())
                    on:input=move |ev| input.update(|i| i.date_input = event_target_value(&ev))
                />
                {field_error(|e| e.date)}
            </div>

            <div class="form-field">
                <label for="attendees">"Attendees (comma separated)"</label>
                <input
                    id="attendees"
                    name="attendees"
                    prop:value=move || input.with(|i| i.attendees_text.clone())
                    on:input=move |ev| input.update(|i| i.attendees_text = event_target_value(&ev))
                />
                {field_error(|e| e.attendees)}
            </div>

            <div class="form-field">
                <label for="notes">"Notes"</label>
                <textarea
                    id="notes"
                    name="notes"
                    prop:value=move || input.with(|i| i.notes.clone())
                    on:input=move |ev| input.update(|i| i.notes = event_target_value(&ev))
                ></textarea>
                {field_error(|e| e.notes)}
            </div>

            {move || form_error.get().map(|message| view! { <div class="form-error" role="alert">{message}</div> })}

            <div class="form-actions">
                <button type="submit" class="btn btn--primary" disabled=move || saving.get()>
                    {move || if saving.get() { "Saving..." } else { "Save" }}
                </button>
            </div>
        </form>
    }
}
