use dioxus::prelude::*;

use ui::views::NoteDetailView;

use crate::Route;

#[component]
pub fn NoteDetail(id: String) -> Element {
    let nav = use_navigator();

    rsx! {
        NoteDetailView {
            id,
            on_back: move |archived: bool| {
                nav.push(Route::list_for(archived));
            },
            on_deleted: move |archived: bool| {
                // The note is gone; keep it out of the history stack.
                nav.replace(Route::list_for(archived));
            },
        }
    }
}
