use dioxus::prelude::*;

use crate::auth::{use_auth, LogoutButton};
use crate::preferences::{LanguageToggle, ThemeToggle};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Top bar. `children` holds the brand and section links, `guest_links` the
/// login/register links shown while signed out.
#[component]
pub fn Navbar(
    children: Element,
    guest_links: Element,
    #[props(default)] on_logout: EventHandler<()>,
) -> Element {
    let auth = use_auth();
    let state = auth();

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        nav {
            class: "navbar",
            div { class: "navbar-links", {children} }
            div {
                class: "navbar-controls",
                LanguageToggle {}
                ThemeToggle {}
                if let Some(user) = state.user.as_ref() {
                    span { class: "navbar-user", {user.first_name()} }
                    LogoutButton { class: "logout-btn", on_logout: on_logout }
                } else if !state.loading {
                    {guest_links}
                }
            }
        }
    }
}
