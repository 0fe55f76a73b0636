use dioxus::prelude::*;

use ui::views::AddNoteView;

use crate::Route;

#[component]
pub fn AddNote() -> Element {
    let nav = use_navigator();

    rsx! {
        AddNoteView {
            on_created: move |_| {
                nav.replace(Route::home());
            },
            on_cancel: move |_| {
                nav.push(Route::home());
            },
        }
    }
}
