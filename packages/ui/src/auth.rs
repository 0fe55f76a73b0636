//! Authentication context and hooks for the UI.

use api::AuthState;
use dioxus::prelude::*;

use crate::i18n::Text;
use crate::icons::FaRightFromBracket;
use crate::preferences::use_language;
use crate::services::use_services;
use crate::Icon;

/// Get the current authentication state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Provider component that owns the session.
/// Starts in the loading state and resolves any stored token on mount.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let services = use_services();
    let mut auth_state = use_signal(AuthState::default);

    let _ = use_resource(move || {
        let auth = services.auth.clone();
        async move {
            auth_state.set(auth.initialize().await);
        }
    });

    use_context_provider(|| auth_state);

    rsx! {
        {children}
    }
}

/// Button to log out the current user.
#[component]
pub fn LogoutButton(
    #[props(default = "".to_string())] class: String,
    #[props(default)] on_logout: EventHandler<()>,
) -> Element {
    let services = use_services();
    let mut auth_state = use_auth();
    let language = use_language();

    let onclick = move |_| {
        auth_state.set(services.auth.logout());
        on_logout.call(());
    };

    rsx! {
        button {
            class: "{class}",
            title: Text::Logout.get(language()),
            onclick: onclick,
            Icon { icon: FaRightFromBracket, width: 14, height: 14 }
            span { {Text::Logout.get(language())} }
        }
    }
}
