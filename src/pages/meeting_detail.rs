//! Meeting detail page: meeting header, action items and the analysis review.
//!
//! SYSTEM CONTEXT
//! ==============
//! All fetch sequencing lives in `DetailCoordinator`; this page wires it to
//! the route parameter, the renderers and the review modal, and projects
//! `MeetingDetailState` into memos so each section re-renders on its own.
//!
//! ERROR HANDLING
//! ==============
//! A failed analysis is the only blocking error and is shown with an alert.
//! Everything else is logged by the coordinator.

use chrono::Local;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::components::action_item_list::{ActionItemList, ItemUpdate};
use crate::components::kanban_board::KanbanBoard;
use crate::components::review_modal::ActionItemReviewModal;
use crate::net::backend::HttpBackend;
use crate::net::types::{Meeting, MeetingAnalysis};
use crate::state::detail_coordinator::DetailCoordinator;
use crate::state::meeting_detail::{ANALYZE_FAILED, DetailPhase, MeetingDetailState, ViewMode, priority_options};
use crate::util::browser::alert;
use crate::util::time::format_meeting_date;

type Coordinator = DetailCoordinator<HttpBackend, RwSignal<MeetingDetailState>>;

#[component]
pub fn MeetingDetailPage() -> impl IntoView {
    let params = use_params_map();
    let state = RwSignal::new(MeetingDetailState::default());
    let coordinator: Coordinator = DetailCoordinator::new(HttpBackend, state);

    on_cleanup({
        let coordinator = coordinator.clone();
        move || coordinator.unmount()
    });

    Effect::new({
        let coordinator = coordinator.clone();
        move || {
            let id = params.with(|p| p.get("id"));
            let coordinator = coordinator.clone();
            leptos::task::spawn_local(async move { coordinator.load(id).await });
        }
    });

    let phase = Memo::new(move |_| state.with(|s| s.phase.clone()));

    view! {
        <div class="meeting-detail-page">
            {move || match phase.get() {
                DetailPhase::Loading => view! { <div class="page-loading">"Loading meeting..."</div> }.into_any(),
                DetailPhase::Error(message) => view! { <div class="page-error" role="alert">{message}</div> }.into_any(),
                DetailPhase::Ready(meeting) => ready_view(meeting, state, coordinator.clone()).into_any(),
            }}
        </div>
    }
}

fn ready_view(meeting: Meeting, state: RwSignal<MeetingDetailState>, coordinator: Coordinator) -> impl IntoView {
    let analyzing = Memo::new(move |_| state.with(|s| s.analyzing));
    let analysis = Memo::new(move |_| state.with(|s| s.analysis.clone()));
    let review_open = Signal::derive(move || state.with(|s| s.review_open));
    let review_drafts = Signal::derive(move || state.with(|s| s.review_drafts.clone()));
    let review_generation = Signal::derive(move || state.with(|s| s.review_generation));

    let on_review = {
        let coordinator = coordinator.clone();
        move |_| {
            let coordinator = coordinator.clone();
            leptos::task::spawn_local(async move {
                if coordinator.review().await.is_err() {
                    alert(ANALYZE_FAILED);
                }
            });
        }
    };

    let on_close = Callback::new({
        let coordinator = coordinator.clone();
        move |()| coordinator.close_review()
    });
    let on_saved = Callback::new({
        let coordinator = coordinator.clone();
        move |()| {
            let coordinator = coordinator.clone();
            leptos::task::spawn_local(async move { coordinator.drafts_saved().await });
        }
    });

    let date = format_meeting_date(&meeting.date, &Local);
    let edit_href = format!("/meetings/{}/edit", meeting.id);
    let attendees = meeting.attendees.into_iter().map(|name| view! { <li>{name}</li> }).collect::<Vec<_>>();

    view! {
        <article class="meeting-detail">
            <header class="page-header">
                <h2>{meeting.title}</h2>
                <A href=edit_href attr:class="btn">"Edit"</A>
            </header>
            <div class="meeting-detail__date">{date}</div>
            <section>
                <h3>"Attendees"</h3>
                <ul class="meeting-detail__attendees">{attendees}</ul>
            </section>
            <section>
                <h3>"Notes"</h3>
                <p class="meeting-detail__notes">{meeting.notes}</p>
            </section>

            <button type="button" class="btn btn--primary" on:click=on_review disabled=move || analyzing.get()>
                {move || if analyzing.get() { "Analyzing..." } else { "Review Action Items" }}
            </button>

            {move || analysis.get().map(analysis_view)}

            {action_items_section(state, coordinator)}

            <ActionItemReviewModal
                open=review_open
                generation=review_generation
                meeting_id=meeting.id
                initial_items=review_drafts
                on_close=on_close
                on_saved=on_saved
            />
        </article>
    }
}

fn analysis_view(analysis: MeetingAnalysis) -> impl IntoView {
    let points = analysis.key_discussion_points.into_iter().map(|p| view! { <li>{p}</li> }).collect::<Vec<_>>();
    let decisions = analysis.decisions.into_iter().map(|d| view! { <li>{d}</li> }).collect::<Vec<_>>();
    view! {
        <section class="meeting-analysis" aria-label="Meeting analysis">
            <h3>"Summary"</h3>
            <p>{analysis.summary}</p>
            <h4>"Key Discussion Points"</h4>
            <ul>{points}</ul>
            <h4>"Decisions"</h4>
            <ul>{decisions}</ul>
        </section>
    }
}

fn action_items_section(state: RwSignal<MeetingDetailState>, coordinator: Coordinator) -> impl IntoView {
    let view_mode = Memo::new(move |_| state.with(|s| s.view_mode));
    let filtered = Memo::new(move |_| state.with(MeetingDetailState::filtered_items));
    let assignees = Memo::new(move |_| state.with(MeetingDetailState::assignee_options));
    let assignee_value = Memo::new(move |_| state.with(|s| s.filters.assignee_value()));
    let priority_value = Memo::new(move |_| state.with(|s| s.filters.priority_value()));

    let on_item_update: ItemUpdate = {
        let coordinator = coordinator.clone();
        ItemUpdate::new(move |(id, status)| {
            let coordinator = coordinator.clone();
            async move { coordinator.update_status(id, status).await }
        })
    };

    let set_mode = {
        let coordinator = coordinator.clone();
        move |mode: ViewMode| coordinator.set_view_mode(mode)
    };
    let set_list = set_mode.clone();
    let set_board = set_mode;
    let on_assignee = {
        let coordinator = coordinator.clone();
        move |ev: leptos::ev::Event| coordinator.set_assignee_filter(&event_target_value(&ev))
    };
    let on_priority = move |ev: leptos::ev::Event| coordinator.set_priority_filter(&event_target_value(&ev));

    let priority_choices = priority_options()
        .into_iter()
        .map(|label| view! { <option value=label selected=move || priority_value.get() == label>{label}</option> })
        .collect::<Vec<_>>();

    view! {
        <section class="action-items">
            <header class="action-items__header">
                <h3>"Action Items"</h3>
                <div class="action-items__toggle">
                    <button
                        type="button"
                        class="btn"
                        on:click=move |_| set_list(ViewMode::List)
                        disabled=move || view_mode.get() == ViewMode::List
                    >
                        "List"
                    </button>
                    <button
                        type="button"
                        class="btn"
                        on:click=move |_| set_board(ViewMode::Board)
                        disabled=move || view_mode.get() == ViewMode::Board
                    >
                        "Board"
                    </button>
                </div>
            </header>
            <div class="action-items__filters">
                <label for="assignee-filter">"Assignee"</label>
                <select id="assignee-filter" on:change=on_assignee>
                    {move || {
                        assignees
                            .get()
                            .into_iter()
                            .map(|name| {
                                let selected = assignee_value.with(|current| *current == name);
                                let value = name.clone();
                                view! { <option value=value selected=selected>{name}</option> }
                            })
                            .collect::<Vec<_>>()
                    }}
                </select>
                <label for="priority-filter">"Priority"</label>
                <select id="priority-filter" on:change=on_priority>
                    {priority_choices}
                </select>
            </div>
            {move || match view_mode.get() {
                ViewMode::List => view! { <ActionItemList items=filtered on_item_update=on_item_update.clone()/> }.into_any(),
                ViewMode::Board => view! { <KanbanBoard items=filtered on_item_update=on_item_update.clone()/> }.into_any(),
            }}
        </section>
    }
}
