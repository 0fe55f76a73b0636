//! This crate contains all shared UI for the workspace.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod actions;
pub mod dialog;
pub mod format;
pub mod guard;
pub mod i18n;
pub mod views;

mod services;
pub use services::{make_services, use_services, AppAuth, AppBackend, PlatformStore, Services, ServicesProvider};

mod timer;
pub use timer::sleep_ms;

mod preferences;
pub use preferences::{apply_theme, use_language, use_theme, LanguageToggle, PreferencesProvider, ThemeToggle};

mod auth;
pub use auth::{use_auth, AuthProvider, LogoutButton};

mod navbar;
pub use navbar::Navbar;

mod filters;
pub use filters::{DateFilter, SearchInput, SortToggle};

mod note_item;
pub use note_item::{NoteItem, NotesList};

pub use dialog::{use_dialogs, DialogProvider, Dialogs};
pub use guard::{Access, GateDecision, RedirectTarget};
pub use i18n::Text;
