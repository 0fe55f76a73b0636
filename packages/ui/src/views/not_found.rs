use dioxus::prelude::*;

use crate::i18n::Text;
use crate::icons::{FaArrowLeft, FaHouse, FaPlus};
use crate::preferences::use_language;
use crate::Icon;

/// Fallback for unknown paths.
#[component]
pub fn NotFoundView(
    path: String,
    on_home: EventHandler<()>,
    on_add: EventHandler<()>,
    on_back: EventHandler<()>,
) -> Element {
    let language = use_language();
    let lang = language();

    rsx! {
        div {
            class: "page-container not-found",
            h1 { class: "not-found-code", "404" }
            h2 { {Text::PageNotFound.get(lang)} }
            p { {Text::PageNotFoundDesc.get(lang)} }
            p {
                class: "not-found-path",
                span { {Text::RequestedUrl.get(lang)} }
                " "
                code { "{path}" }
            }
            div {
                class: "not-found-actions",
                button {
                    class: "btn btn-primary",
                    onclick: move |_| on_home.call(()),
                    Icon { icon: FaHouse, width: 14, height: 14 }
                    span { {Text::GoToHomepage.get(lang)} }
                }
                button {
                    class: "btn btn-secondary",
                    onclick: move |_| on_add.call(()),
                    Icon { icon: FaPlus, width: 14, height: 14 }
                    span { {Text::CreateNewNote.get(lang)} }
                }
                button {
                    class: "btn btn-secondary",
                    onclick: move |_| on_back.call(()),
                    Icon { icon: FaArrowLeft, width: 14, height: 14 }
                    span { {Text::GoBack.get(lang)} }
                }
            }
        }
    }
}
