use dioxus::prelude::*;

use ui::views::NotFoundView;

use crate::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let nav = use_navigator();
    let path = format!("/{}", segments.join("/"));

    rsx! {
        NotFoundView {
            path,
            on_home: move |_| {
                nav.push(Route::home());
            },
            on_add: move |_| {
                nav.push(Route::AddNote {});
            },
            on_back: move |_| nav.go_back(),
        }
    }
}
