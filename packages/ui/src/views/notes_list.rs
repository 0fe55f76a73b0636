use api::{Note, NotesApi};
use dioxus::prelude::*;
use store::{DateRange, NoteFilter, SortOrder};

use crate::filters::{DateFilter, SearchInput, SortToggle};
use crate::i18n::{tr, Text};
use crate::icons::{FaBoxArchive, FaFileLines, FaPlus};
use crate::note_item::NotesList;
use crate::preferences::use_language;
use crate::services::use_services;
use crate::views::LoadingView;
use crate::Icon;

#[derive(Clone, Debug, PartialEq)]
enum Loaded {
    Pending,
    Ready(Vec<Note>),
    Failed(String),
}

/// Active or archived notes with search, date filter and sort.
///
/// The keyword is owned by the caller (it lives in the URL); every edit is
/// reported through `on_search`. Date range and sort order are page-local.
#[component]
pub fn NotesListView(
    archived: bool,
    keyword: String,
    on_search: EventHandler<String>,
    on_open: EventHandler<String>,
    /// Active view: the add button. Archived view: "view active notes".
    on_navigate: EventHandler<()>,
) -> Element {
    let services = use_services();
    let language = use_language();

    // Track the view in a signal so the loader re-runs if the prop changes
    let mut archived_signal = use_signal(|| archived);
    if *archived_signal.peek() != archived {
        archived_signal.set(archived);
    }

    let mut reload = use_signal(|| 0u32);
    let mut loaded = use_signal(|| Loaded::Pending);
    let mut date_range = use_signal(|| Option::<DateRange>::None);
    let mut sort = use_signal(SortOrder::default);

    let _loader = use_resource(move || {
        let archived = archived_signal();
        let _ = reload();
        let api = services.api.clone();
        async move {
            let result = if archived {
                api.list_archived_notes().await
            } else {
                api.list_active_notes().await
            };
            match result {
                Ok(notes) => loaded.set(Loaded::Ready(notes)),
                Err(e) => {
                    tracing::warn!(archived, error = %e, "failed to load notes");
                    loaded.set(Loaded::Failed(e.to_string()));
                }
            }
        }
    });

    let lang = language();
    let source = match loaded() {
        Loaded::Pending => {
            return rsx! {
                LoadingView {
                    message: if archived { Text::LoadingArchivedNotes } else { Text::LoadingNotes },
                }
            };
        }
        Loaded::Failed(message) => {
            let title = if archived {
                Text::ErrorLoadingArchivedNotes
            } else {
                Text::ErrorLoadingNotes
            };
            return rsx! {
                div {
                    class: "page-container",
                    div {
                        class: "error-state",
                        h3 { {title.get(lang)} }
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
        Loaded::Ready(notes) => notes,
    };

    let filter = NoteFilter::new(keyword.clone())
        .with_date_range(date_range())
        .with_sort(sort());
    let visible = filter.apply(&source);
    let count = visible.len().to_string();

    let (heading, showing, none_found, search_hint) = if archived {
        (Text::Archives, Text::ShowingArchivedNotes, Text::ArchiveEmpty, Text::SearchArchived)
    } else {
        (Text::AllNotes, Text::ShowingActiveNotes, Text::NoActiveNotesFound, Text::SearchNotes)
    };
    let subtitle = if visible.is_empty() {
        none_found.get(lang).to_string()
    } else {
        tr(lang, showing, &[("count", &count)])
    };
    let empty_message = match (archived, keyword.is_empty()) {
        (false, true) => Text::NoActiveNotes.get(lang).to_string(),
        (true, true) => Text::NoArchivedNotes.get(lang).to_string(),
        (false, false) => tr(lang, Text::NoNotesMatchSearch, &[("keyword", &keyword)]),
        (true, false) => tr(lang, Text::NoArchivedNotesMatchSearch, &[("keyword", &keyword)]),
    };

    rsx! {
        div {
            class: "page-container",
            div {
                class: "page-header",
                h1 {
                    class: "page-title",
                    if archived {
                        Icon { icon: FaBoxArchive, width: 28, height: 28 }
                    } else {
                        Icon { icon: FaFileLines, width: 28, height: 28 }
                    }
                    {heading.get(lang)}
                }
                p { class: "page-subtitle", "{subtitle}" }
            }

            SearchInput {
                keyword: keyword.clone(),
                placeholder: search_hint.get(lang).to_string(),
                on_search: on_search,
            }

            div {
                class: "filter-controls",
                DateFilter {
                    active: filter.is_date_filtered(),
                    on_filter: move |range| date_range.set(range),
                }
                SortToggle {
                    order: sort(),
                    on_toggle: move |order| sort.set(order),
                }
            }

            div {
                class: "notes-container",
                if visible.is_empty() {
                    div {
                        class: "empty-state",
                        h3 { {Text::NoNotesFound.get(lang)} }
                        p { "{empty_message}" }
                        if keyword.is_empty() {
                            if archived {
                                button {
                                    class: "btn btn-primary",
                                    onclick: move |_| on_navigate.call(()),
                                    {Text::ViewActiveNotes.get(lang)}
                                }
                            } else {
                                p { class: "empty-hint", {Text::UseAddButton.get(lang)} }
                            }
                        }
                    }
                } else {
                    NotesList {
                        notes: visible,
                        on_open: on_open,
                        on_changed: move |_| reload += 1,
                    }
                }
            }

            if !archived {
                button {
                    class: "fab",
                    title: Text::CreateNewNote.get(lang),
                    onclick: move |_| on_navigate.call(()),
                    Icon { icon: FaPlus, width: 24, height: 24 }
                }
            }
        }
    }
}
