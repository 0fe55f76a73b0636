use api::{ApiError, Note, NotesApi};
use dioxus::prelude::*;

use crate::actions::{perform, report, NoteAction};
use crate::dialog::use_dialogs;
use crate::format::format_date;
use crate::i18n::Text;
use crate::icons::{FaArrowLeft, FaBoxArchive, FaBoxOpen, FaTrashCan};
use crate::preferences::use_language;
use crate::services::use_services;
use crate::timer::sleep_ms;
use crate::views::LoadingView;
use crate::Icon;

#[derive(Clone, Debug, PartialEq)]
enum Loaded {
    Pending,
    Found(Note),
    Missing,
    Failed(String),
}

/// Shared note detail view.
///
/// Archive and unarchive flip the note in place; delete navigates away once
/// the success notification has had time to show.
#[component]
pub fn NoteDetailView(
    id: String,
    /// Back to the list the note belongs to; carries the note's archived flag.
    on_back: EventHandler<bool>,
    /// Called after a delete, with the deleted note's archived flag.
    on_deleted: EventHandler<bool>,
) -> Element {
    let services = use_services();
    let dialogs = use_dialogs();
    let language = use_language();

    // Track the id in a signal so use_resource re-runs on route param change
    let mut id_signal = use_signal(|| id.clone());
    if *id_signal.peek() != id {
        id_signal.set(id.clone());
    }

    let mut loaded = use_signal(|| Loaded::Pending);
    let mut busy = use_signal(|| Option::<NoteAction>::None);
    let mut reload = use_signal(|| 0u32);

    let api = services.api.clone();
    let _loader = use_resource(move || {
        let id = id_signal();
        let _ = reload();
        let api = api.clone();
        async move {
            let next = match api.get_note(&id).await {
                Ok(note) => Loaded::Found(note),
                // The backend answers a bad id with a fail envelope.
                Err(ApiError::Rejected(_)) => Loaded::Missing,
                Err(e) => {
                    tracing::warn!(note = %id, error = %e, "failed to load note");
                    Loaded::Failed(e.to_string())
                }
            };
            loaded.set(next);
        }
    });

    let navigation_delay = services.config.ui.navigation_delay_ms;
    let run = use_callback(move |action: NoteAction| {
        let api = services.api.clone();
        let id = id_signal();
        spawn(async move {
            let lang = language();
            let outcome = perform(action, &api, &dialogs, lang, &id, |b| {
                busy.set(b.then_some(action))
            })
            .await;
            if !report(dialogs, lang, action, &outcome) {
                return;
            }
            let was_archived = match &*loaded.peek() {
                Loaded::Found(note) => note.archived,
                _ => false,
            };
            match action {
                NoteAction::Archive | NoteAction::Unarchive => {
                    if let Loaded::Found(note) = &mut *loaded.write() {
                        note.archived = action == NoteAction::Archive;
                    }
                }
                NoteAction::Delete => {
                    sleep_ms(navigation_delay).await;
                    on_deleted.call(was_archived);
                }
            }
        });
    });

    let lang = language();
    let note = match loaded() {
        Loaded::Pending => return rsx! { LoadingView {} },
        Loaded::Missing => {
            return rsx! {
                div {
                    class: "page-container",
                    div {
                        class: "empty-state",
                        h3 { {Text::NoteNotFound.get(lang)} }
                        p { {Text::NoteNotFoundDesc.get(lang)} }
                        button {
                            class: "btn btn-primary",
                            onclick: move |_| on_back.call(false),
                            {Text::BackToNotes.get(lang)}
                        }
                    }
                }
            };
        }
        Loaded::Failed(message) => {
            return rsx! {
                div {
                    class: "page-container",
                    div {
                        class: "error-state",
                        h3 { {Text::ErrorLoadingNotes.get(lang)} }
                        p { "{message}" }
                        button {
                            class: "btn btn-primary",
                            onclick: move |_| {
                                loaded.set(Loaded::Pending);
                                reload += 1;
                            },
                            {Text::TryAgain.get(lang)}
                        }
                    }
                }
            };
        }
        Loaded::Found(note) => note,
    };

    let toggle = NoteAction::toggle_archive(&note);
    let archived = note.archived;
    let in_progress = busy();

    rsx! {
        div {
            class: "page-container detail-page",
            button {
                class: "link-btn back-btn",
                onclick: move |_| on_back.call(archived),
                Icon { icon: FaArrowLeft, width: 14, height: 14 }
                span { {Text::Back.get(lang)} }
            }
            article {
                class: "note-detail",
                header {
                    class: "note-detail-header",
                    h1 { class: "note-detail-title", "{note.title}" }
                    span {
                        class: if archived { "status-badge archived" } else { "status-badge active" },
                        if archived {
                            {Text::Archived.get(lang)}
                        } else {
                            {Text::Active.get(lang)}
                        }
                    }
                }
                p { class: "note-detail-date", {format_date(&note.created_at, lang)} }
                div { class: "note-detail-body", dangerous_inner_html: "{note.body}" }
            }
            div {
                class: "detail-actions",
                button {
                    class: "btn btn-secondary",
                    disabled: in_progress.is_some(),
                    onclick: move |_| run.call(toggle),
                    if toggle == NoteAction::Archive {
                        Icon { icon: FaBoxArchive, width: 14, height: 14 }
                    } else {
                        Icon { icon: FaBoxOpen, width: 14, height: 14 }
                    }
                    if in_progress == Some(toggle) {
                        span { {Text::Processing.get(lang)} }
                    } else {
                        span { {toggle.label().get(lang)} }
                    }
                }
                button {
                    class: "btn btn-danger",
                    disabled: in_progress.is_some(),
                    title: Text::DeleteNotePermanently.get(lang),
                    onclick: move |_| run.call(NoteAction::Delete),
                    Icon { icon: FaTrashCan, width: 14, height: 14 }
                    if in_progress == Some(NoteAction::Delete) {
                        span { {Text::Processing.get(lang)} }
                    } else {
                        span { {Text::Delete.get(lang)} }
                    }
                }
            }
        }
    }
}
