use api::NewNote;
use dioxus::prelude::*;
use store::Note;

use crate::actions::{confirm_discard, error_message, submit_note, SubmitError};
use crate::dialog::use_dialogs;
use crate::format::{preview, text_to_html, PREVIEW_LEN};
use crate::i18n::{tr, validation_message, Text};
use crate::preferences::use_language;
use crate::services::use_services;
use crate::timer::sleep_ms;

/// New note form with a live title counter and a preview card.
#[component]
pub fn AddNoteView(on_created: EventHandler<()>, on_cancel: EventHandler<()>) -> Element {
    let services = use_services();
    let dialogs = use_dialogs();
    let language = use_language();

    let mut draft = use_signal(NewNote::default);
    let mut submitting = use_signal(|| false);

    let navigation_delay = services.config.ui.navigation_delay_ms;
    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if submitting() {
            return;
        }
        let api = services.api.clone();
        let current = draft();
        spawn(async move {
            let lang = language();
            let payload = NewNote::new(current.title.clone(), text_to_html(&current.body));
            // Validate the typed text: blank lines are not blank once converted.
            if let Err(e) = current.validate() {
                dialogs.error(&validation_message(lang, &e), Text::ValidationError.get(lang));
                return;
            }
            submitting.set(true);
            let result = submit_note(&api, &payload).await;
            submitting.set(false);
            match result {
                Ok(_) => {
                    dialogs.success(Text::NoteCreated.get(lang), Text::Success.get(lang));
                    sleep_ms(navigation_delay).await;
                    on_created.call(());
                }
                Err(SubmitError::Invalid(e)) => {
                    dialogs.error(&validation_message(lang, &e), Text::ValidationError.get(lang));
                }
                Err(SubmitError::Api(e)) => {
                    let message = error_message(&e, Text::FailedToCreateNote.get(lang));
                    dialogs.error(&message, Text::Error.get(lang));
                }
            }
        });
    };

    let handle_cancel = move |_| {
        let current = draft();
        spawn(async move {
            if confirm_discard(&dialogs, language(), &current).await {
                on_cancel.call(());
            }
        });
    };

    let lang = language();
    let current = draft();
    let remaining = current.remaining_title_chars().to_string();
    let counter = tr(lang, Text::CharactersRemaining, &[("count", &remaining)]);
    let body_preview = preview(&text_to_html(&current.body), PREVIEW_LEN);

    rsx! {
        div {
            class: "page-container add-page",
            h1 { class: "page-title", {Text::AddNewNote.get(lang)} }
            form {
                class: "note-form",
                onsubmit: handle_submit,
                div {
                    class: "form-field",
                    label { r#for: "note-title", {Text::NoteTitle.get(lang)} }
                    input {
                        id: "note-title",
                        r#type: "text",
                        maxlength: Note::MAX_TITLE_LEN as i64,
                        placeholder: Text::EnterNoteTitle.get(lang),
                        value: "{current.title}",
                        disabled: submitting(),
                        oninput: move |evt| {
                            // Over-long input is dropped; the field keeps the last accepted title.
                            let _ = draft.write().set_title(&evt.value());
                        },
                    }
                    span {
                        class: if current.remaining_title_chars() == 0 { "char-counter limit" } else { "char-counter" },
                        "{counter}"
                    }
                }
                div {
                    class: "form-field",
                    label { r#for: "note-body", {Text::NoteContent.get(lang)} }
                    textarea {
                        id: "note-body",
                        rows: 10,
                        placeholder: Text::StartWritingNote.get(lang),
                        value: "{current.body}",
                        disabled: submitting(),
                        oninput: move |evt| draft.write().body = evt.value(),
                    }
                }
                if current.is_dirty() {
                    div {
                        class: "note-preview",
                        h4 { {Text::Preview.get(lang)} }
                        div {
                            class: "note-item",
                            h3 { class: "note-item-title", "{current.title}" }
                            p { class: "note-item-body", "{body_preview}" }
                        }
                    }
                }
                div {
                    class: "form-actions",
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        disabled: submitting(),
                        onclick: handle_cancel,
                        {Text::Cancel.get(lang)}
                    }
                    button {
                        class: "btn btn-primary",
                        r#type: "submit",
                        disabled: submitting(),
                        if submitting() {
                            {Text::Creating.get(lang)}
                        } else {
                            {Text::CreateNote.get(lang)}
                        }
                    }
                }
            }
        }
    }
}
