use dioxus::prelude::*;

use ui::i18n::Text;
use ui::{use_auth, use_language, Navbar};

use crate::Route;

/// App chrome around every page.
#[component]
pub fn Shell() -> Element {
    let language = use_language();
    let auth = use_auth();
    let route = use_route::<Route>();
    let lang = language();

    let section = |active: bool| if active { "active" } else { "" };
    let on_home = section(matches!(route, Route::Home { .. }));
    let on_archives = section(matches!(route, Route::Archives { .. }));
    let on_login = section(matches!(route, Route::Login {}));
    let on_register = section(matches!(route, Route::Register {}));

    rsx! {
        div {
            class: "app-shell",
            Navbar {
                guest_links: rsx! {
                    Link { to: Route::Login {}, class: on_login, {Text::Login.get(lang)} }
                    Link { to: Route::Register {}, class: on_register, {Text::Register.get(lang)} }
                },
                Link { to: Route::home(), class: "brand", {Text::PersonalNotes.get(lang)} }
                if auth().is_authenticated() {
                    Link { to: Route::home(), class: on_home, {Text::AllNotes.get(lang)} }
                    Link { to: Route::archives(), class: on_archives, {Text::Archives.get(lang)} }
                }
            }
            main {
                class: "app-main",
                Outlet::<Route> {}
            }
        }
    }
}
