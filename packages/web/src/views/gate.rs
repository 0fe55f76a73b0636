use dioxus::prelude::*;

use ui::i18n::Text;
use ui::views::LoadingView;
use ui::{sleep_ms, use_auth, use_services, Access, GateDecision};

use crate::{ReturnTo, Route};

/// Pages that need a session. Visitors are sent to the login page and
/// brought back after signing in.
#[component]
pub fn SignedInGate() -> Element {
    rsx! { Gate { access: Access::SignedIn } }
}

/// Login and register. A signed-in user is moved on to the home page, or to
/// the page they were originally after.
#[component]
pub fn SignedOutGate() -> Element {
    rsx! { Gate { access: Access::SignedOut } }
}

#[component]
fn Gate(access: Access) -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let services = use_services();
    let mut return_to = use_context::<ReturnTo>();
    // Set once this gate has rendered its pages.
    let mut shown = use_signal(|| false);
    let navigation_delay = services.config.ui.navigation_delay_ms;

    use_effect(move || {
        let target = match access.decide(&auth()) {
            GateDecision::Redirect(target) => target,
            GateDecision::Render => {
                shown.set(true);
                return;
            }
            GateDecision::Pending => return,
        };
        let destination = target.destination(
            router().current::<Route>(),
            &mut *return_to.write(),
            Route::Login {},
            Route::home(),
        );
        let delay = target.delay_ms(*shown.peek(), navigation_delay);
        tracing::debug!(?destination, delay, "auth gate redirect");
        if delay == 0 {
            nav.replace(destination);
            return;
        }
        spawn(async move {
            sleep_ms(delay).await;
            nav.replace(destination);
        });
    });

    if access.decide(&auth()).shows_content(shown()) {
        rsx! { Outlet::<Route> {} }
    } else {
        rsx! { LoadingView { message: Text::CheckingAuth } }
    }
}
