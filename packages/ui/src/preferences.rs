//! Language and theme contexts.
//!
//! Both are loaded from the persisted [`store::Preferences`] once, then held in
//! signals. Toggling writes through to storage immediately.

use dioxus::prelude::*;
use store::{Language, Theme};

use crate::i18n::Text;
use crate::icons::{FaLanguage, FaMoon, FaSun};
use crate::services::use_services;
use crate::Icon;

pub type LanguageSignal = Signal<Language>;
pub type ThemeSignal = Signal<Theme>;

pub fn use_language() -> LanguageSignal {
    use_context::<LanguageSignal>()
}

pub fn use_theme() -> ThemeSignal {
    use_context::<ThemeSignal>()
}

/// Set `data-theme` on the document root so the stylesheet can switch palettes.
pub fn apply_theme(theme: Theme) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(root) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            let _ = root.set_attribute("data-theme", theme.as_str());
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = theme;
}

fn apply_language(language: Language) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(root) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            let _ = root.set_attribute("lang", language.code());
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = language;
}

/// Provides [`LanguageSignal`] and [`ThemeSignal`]. Must sit inside a services
/// provider.
#[component]
pub fn PreferencesProvider(children: Element) -> Element {
    let services = use_services();
    let prefs = services.prefs.clone();
    let language = use_context_provider(|| Signal::new(prefs.language()));
    let theme = use_context_provider(|| Signal::new(prefs.theme()));

    use_effect(move || apply_theme(theme()));
    use_effect(move || apply_language(language()));

    rsx! {
        {children}
    }
}

#[component]
pub fn LanguageToggle() -> Element {
    let services = use_services();
    let mut language = use_language();
    let current = language();

    rsx! {
        button {
            class: "toggle-btn",
            title: Text::SwitchLanguage.get(current),
            onclick: move |_| {
                let next = language().toggled();
                services.prefs.set_language(next);
                language.set(next);
            },
            Icon { icon: FaLanguage, width: 16, height: 16 }
            span { {current.toggled().code().to_uppercase()} }
        }
    }
}

#[component]
pub fn ThemeToggle() -> Element {
    let services = use_services();
    let mut theme = use_theme();
    let language = use_language();
    let current = theme();
    let hint = match current {
        Theme::Light => Text::SwitchToDark.get(language()),
        Theme::Dark => Text::SwitchToLight.get(language()),
    };

    rsx! {
        button {
            class: "toggle-btn",
            title: hint,
            onclick: move |_| {
                let next = theme().toggled();
                services.prefs.set_theme(next);
                theme.set(next);
            },
            if current == Theme::Light {
                Icon { icon: FaMoon, width: 16, height: 16 }
            } else {
                Icon { icon: FaSun, width: 16, height: 16 }
            }
        }
    }
}
