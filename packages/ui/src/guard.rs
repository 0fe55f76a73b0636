//! Route gating by session state.
//!
//! One gate, parameterised by the session it requires. The platform crate maps
//! [`GateDecision::Redirect`] onto its own routes through
//! [`RedirectTarget::destination`].

use api::AuthState;

/// Session a view requires.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    /// Notes, detail, add, archives.
    SignedIn,
    /// Login and registration forms.
    SignedOut,
}

/// Where a redirecting gate sends the user.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RedirectTarget {
    Login,
    Home,
}

impl RedirectTarget {
    /// Route to navigate to. Going to login remembers `requested`; going home
    /// returns to the remembered route once and otherwise lands on `home`.
    pub fn destination<R>(self, requested: R, return_to: &mut Option<R>, login: R, home: R) -> R {
        match self {
            RedirectTarget::Login => {
                *return_to = Some(requested);
                login
            }
            RedirectTarget::Home => return_to.take().unwrap_or(home),
        }
    }

    /// Milliseconds to wait before redirecting. A signed-out page that was on
    /// screen when the session arrived stays up for `navigation_delay_ms`, so
    /// the welcome notification is seen before the page changes.
    pub fn delay_ms(self, content_shown: bool, navigation_delay_ms: u64) -> u64 {
        match self {
            RedirectTarget::Home if content_shown => navigation_delay_ms,
            _ => 0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateDecision {
    /// Session still resolving; show the neutral placeholder.
    Pending,
    Render,
    Redirect(RedirectTarget),
}

impl GateDecision {
    /// Whether the gated pages stay on screen. Signed-out pages already shown
    /// remain until the delayed redirect home; signed-in pages never outlive
    /// the session.
    pub fn shows_content(self, content_shown: bool) -> bool {
        match self {
            GateDecision::Render => true,
            GateDecision::Redirect(RedirectTarget::Home) => content_shown,
            GateDecision::Pending | GateDecision::Redirect(RedirectTarget::Login) => false,
        }
    }
}

impl Access {
    pub fn decide(self, state: &AuthState) -> GateDecision {
        if state.loading {
            return GateDecision::Pending;
        }
        match (self, state.is_authenticated()) {
            (Access::SignedIn, true) | (Access::SignedOut, false) => GateDecision::Render,
            (Access::SignedIn, false) => GateDecision::Redirect(RedirectTarget::Login),
            (Access::SignedOut, true) => GateDecision::Redirect(RedirectTarget::Home),
        }
    }
}
