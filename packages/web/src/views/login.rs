use dioxus::prelude::*;

use ui::views::LoginView;

use crate::Route;

/// Login page. Leaving it after a successful sign-in is the gate's job.
#[component]
pub fn Login() -> Element {
    let nav = use_navigator();

    rsx! {
        LoginView {
            on_register: move |_| {
                nav.push(Route::Register {});
            },
        }
    }
}
