use dioxus::prelude::*;

use crate::i18n::Text;
use crate::preferences::use_language;

/// Neutral placeholder shown while something resolves.
#[component]
pub fn LoadingView(#[props(default = Text::Loading)] message: Text) -> Element {
    let language = use_language();

    rsx! {
        div {
            class: "loading-state",
            div { class: "spinner" }
            p { {message.get(language())} }
        }
    }
}
