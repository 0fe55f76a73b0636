use dioxus::prelude::*;

use ui::views::NotesListView;

use crate::query::ListQuery;
use crate::Route;

/// Active notes. The search keyword lives in the query string; an empty
/// search drops it.
#[component]
pub fn Home(query: ListQuery) -> Element {
    let nav = use_navigator();

    rsx! {
        NotesListView {
            archived: false,
            keyword: query.keyword,
            on_search: move |keyword: String| {
                nav.replace(Route::Home { query: ListQuery::new(keyword) });
            },
            on_open: move |id: String| {
                nav.push(Route::NoteDetail { id });
            },
            on_navigate: move |_| {
                nav.push(Route::AddNote {});
            },
        }
    }
}

#[component]
pub fn Archives(query: ListQuery) -> Element {
    let nav = use_navigator();

    rsx! {
        NotesListView {
            archived: true,
            keyword: query.keyword,
            on_search: move |keyword: String| {
                nav.replace(Route::Archives { query: ListQuery::new(keyword) });
            },
            on_open: move |id: String| {
                nav.push(Route::NoteDetail { id });
            },
            on_navigate: move |_| {
                nav.push(Route::home());
            },
        }
    }
}
