//! Modal for reviewing suggested action items before saving them.
//!
//! SYSTEM CONTEXT
//! ==============
//! Opened by the meeting detail page after a successful analysis. The modal
//! owns a local `DraftEditor` reseeded every time it opens; nothing reaches
//! the backend until Save batch-creates the rows.
//!
//! ERROR HANDLING
//! ==============
//! A failed save keeps the modal open with an inline message so the user can
//! retry; success closes it through `on_saved`.

use leptos::prelude::*;
use uuid::Uuid;

use crate::net::backend::HttpBackend;
use crate::net::types::{ActionItemDraft, ActionItemPriority};
use crate::state::review::{DraftEdit, DraftEditor, DraftRow, EMPTY_MESSAGE, submit_drafts};

#[component]
pub fn ActionItemReviewModal(
    #[prop(into)] open: Signal<bool>,
    /// Bumped by the owner each time the modal opens.
    #[prop(into)]
    generation: Signal<u64>,
    meeting_id: String,
    #[prop(into)] initial_items: Signal<Vec<ActionItemDraft>>,
    on_close: Callback<()>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let editor = RwSignal::new(DraftEditor::default());
    let saving = Signal::derive(move || editor.with(|e| e.saving));

    Effect::new(move || {
        generation.track();
        if open.get() {
            editor.set(DraftEditor::seeded(&initial_items.get_untracked()));
        }
    });

    let on_save = move |_| {
        if editor.with_untracked(|e| e.saving) {
            return;
        }
        let mut payload = Vec::new();
        editor.update(|e| payload = e.begin_save());
        let meeting_id = meeting_id.clone();
        leptos::task::spawn_local(async move {
            let result = submit_drafts(&HttpBackend, &meeting_id, &payload).await;
            editor.update(|e| e.finish_save(&result));
            if result.is_ok() {
                on_saved.run(());
            }
        });
    };

    let row_keys = move || editor.with(|e| e.rows.iter().map(|row| row.key).collect::<Vec<_>>());

    view! {
        <Show when=move || open.get()>
            <div class="modal-overlay" data-testid="action-item-modal-overlay" on:click=move |_| on_close.run(())>
                <div
                    class="modal-content"
                    role="dialog"
                    aria-modal="true"
                    aria-label="Review Action Items"
                    on:click=move |ev| ev.stop_propagation()
                >
                    <header class="modal-header">
                        <h2>"Review Action Items"</h2>
                        <button aria-label="close" on:click=move |_| on_close.run(()) disabled=move || saving.get()>
                            "×"
                        </button>
                    </header>

                    <div class="modal-body">
                        <Show when=move || editor.with(DraftEditor::is_empty)>
                            <div class="modal-empty">{EMPTY_MESSAGE}</div>
                        </Show>

                        <ul class="draft-list">
                            <For
                                each=row_keys
                                key=|key| *key
                                children=move |key| view! { <DraftRowEditor row_key=key editor=editor saving=saving/> }
                            />
                        </ul>

                        <div>
                            <button type="button" class="btn" on:click=move |_| editor.update(DraftEditor::add) disabled=move || saving.get()>
                                "Add item"
                            </button>
                        </div>

                        {move || editor.with(|e| e.error.clone()).map(|message| view! {
                            <div class="form-error" role="alert">{message}</div>
                        })}

                        <div class="modal-actions">
                            <button type="button" class="btn" on:click=move |_| on_close.run(()) disabled=move || saving.get()>
                                "Cancel"
                            </button>
                            <button type="button" class="btn btn--primary" on:click=on_save.clone() disabled=move || saving.get()>
                                {move || if saving.get() { "Saving..." } else { "Save" }}
                            </button>
                        </div>
                    </div>
                </div>
            </div>
        </Show>
    }
}

/// One editable draft, looked up by key on every read so edits to other
/// rows do not rebuild it.
#[component]
fn DraftRowEditor(row_key: Uuid, editor: RwSignal<DraftEditor>, saving: Signal<bool>) -> impl IntoView {
    let field = move |read: fn(&DraftRow) -> String| {
        move || editor.with(|e| e.rows.iter().find(|row| row.key == row_key).map(read).unwrap_or_default())
    };
    let edit = move |make: fn(String) -> DraftEdit| {
        move |ev: leptos::ev::Event| editor.update(|e| e.edit(row_key, make(event_target_value(&ev))))
    };

    let desc_id = format!("desc-{row_key}");
    let assignee_id = format!("assignee-{row_key}");
    let due_id = format!("due-{row_key}");
    let priority_id = format!("priority-{row_key}");

    let priority_options = std::iter::once("")
        .chain(ActionItemPriority::ALL.map(ActionItemPriority::label))
        .map(|label| view! { <option value=label>{if label.is_empty() { "None" } else { label }}</option> })
        .collect::<Vec<_>>();

    view! {
        <li class="action-item-row">
            <div class="form-field">
                <label for=desc_id.clone()>"Description"</label>
                <input
                    id=desc_id
                    prop:value=field(|row| row.draft.description.clone())
                    on:input=edit(DraftEdit::Description)
                    disabled=move || saving.get()
                />
            </div>
            <div class="form-field">
                <label for=assignee_id.clone()>"Assignee"</label>
                <input
                    id=assignee_id
                    prop:value=field(|row| row.draft.assignee.clone().unwrap_or_default())
                    on:input=edit(DraftEdit::Assignee)
                    disabled=move || saving.get()
                />
            </div>
            <div class="form-field">
                <label for=due_id.clone()>"Due date"</label>
                <input
                    id=due_id
                    type="date"
                    prop:value=field(DraftRow::due_date_input)
                    on:input=edit(DraftEdit::DueDate)
                    disabled=move || saving.get()
                />
            </div>
            <div class="form-field">
                <label for=priority_id.clone()>"Priority"</label>
                <select
                    id=priority_id
                    prop:value=field(|row| row.draft.priority.map(ActionItemPriority::label).unwrap_or_default().to_owned())
                    on:change=edit(DraftEdit::Priority)
                    disabled=move || saving.get()
                >
                    {priority_options}
                </select>
            </div>
            <div>
                <button
                    type="button"
                    class="btn"
                    on:click=move |_| editor.update(|e| e.remove(row_key))
                    disabled=move || saving.get()
                >
                    "Remove"
                </button>
            </div>
        </li>
    }
}
