use api::Note;
use dioxus::prelude::*;

use crate::actions::{perform, report, NoteAction};
use crate::dialog::use_dialogs;
use crate::format::{format_date, preview, PREVIEW_LEN};
use crate::i18n::Text;
use crate::icons::{FaBoxArchive, FaBoxOpen, FaTrashCan};
use crate::preferences::use_language;
use crate::services::use_services;
use crate::timer::sleep_ms;
use crate::Icon;

/// Note card with archive/unarchive and delete actions.
///
/// After a successful action the card waits for the list refresh delay so the
/// notification is seen, then calls `on_changed`.
#[component]
pub fn NoteItem(note: Note, on_open: EventHandler<String>, on_changed: EventHandler<()>) -> Element {
    let services = use_services();
    let dialogs = use_dialogs();
    let language = use_language();
    let mut busy = use_signal(|| false);

    let delay = services.config.ui.list_refresh_delay_ms;
    let note_id = note.id.clone();
    let run = use_callback(move |action: NoteAction| {
        let api = services.api.clone();
        let id = note_id.clone();
        spawn(async move {
            let lang = language();
            let outcome = perform(action, &api, &dialogs, lang, &id, |b| busy.set(b)).await;
            if report(dialogs, lang, action, &outcome) {
                sleep_ms(delay).await;
                on_changed.call(());
            }
        });
    });

    let lang = language();
    let toggle = NoteAction::toggle_archive(&note);
    let open_id = note.id.clone();
    let title_id = note.id.clone();

    rsx! {
        article {
            class: if busy() { "note-item note-item-busy" } else { "note-item" },
            div {
                class: "note-item-header",
                h3 {
                    class: "note-item-title",
                    onclick: move |_| on_open.call(title_id.clone()),
                    "{note.title}"
                }
                span {
                    class: if note.archived { "status-badge archived" } else { "status-badge active" },
                    if note.archived {
                        {Text::Archived.get(lang)}
                    } else {
                        {Text::Active.get(lang)}
                    }
                }
            }
            p { class: "note-item-date", {format_date(&note.created_at, lang)} }
            p { class: "note-item-body", {preview(&note.body, PREVIEW_LEN)} }
            div {
                class: "note-item-actions",
                button {
                    class: "link-btn",
                    onclick: move |_| on_open.call(open_id.clone()),
                    {Text::ReadMore.get(lang)}
                }
                if busy() {
                    span { class: "note-item-progress", {Text::Processing.get(lang)} }
                } else {
                    button {
                        class: "icon-btn",
                        title: toggle.label().get(lang),
                        onclick: move |_| run.call(toggle),
                        if toggle == NoteAction::Archive {
                            Icon { icon: FaBoxArchive, width: 14, height: 14 }
                        } else {
                            Icon { icon: FaBoxOpen, width: 14, height: 14 }
                        }
                        span { {toggle.label().get(lang)} }
                    }
                    button {
                        class: "icon-btn danger",
                        title: Text::DeleteNotePermanently.get(lang),
                        onclick: move |_| run.call(NoteAction::Delete),
                        Icon { icon: FaTrashCan, width: 14, height: 14 }
                        span { {Text::Delete.get(lang)} }
                    }
                }
            }
        }
    }
}

#[component]
pub fn NotesList(notes: Vec<Note>, on_open: EventHandler<String>, on_changed: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "notes-list",
            for note in notes {
                NoteItem {
                    key: "{note.id}",
                    note: note.clone(),
                    on_open: on_open,
                    on_changed: on_changed,
                }
            }
        }
    }
}
