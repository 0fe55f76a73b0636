//! Platform services shared through context.
//!
//! [`make_services`] builds every long-lived object over one
//! [`store::KeyValueStore`] chosen per platform:
//! - **Web** (WASM + `web` feature): `localStorage` via [`store::LocalStorageStore`]
//! - **Native / tests**: process memory via [`store::MemoryStore`]
//!
//! The token store, the backend and the preferences all share that store, so a
//! token written by login is the one the backend attaches.

use api::{AuthService, Backend};
use dioxus::prelude::*;
use store::{AppConfig, Preferences, TokenStore};

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformStore = store::LocalStorageStore;
#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub type PlatformStore = store::MemoryStore;

pub type AppBackend = Backend<PlatformStore>;
pub type AppAuth = AuthService<AppBackend, PlatformStore>;

#[derive(Clone, Debug)]
pub struct Services {
    pub config: AppConfig,
    pub api: AppBackend,
    pub auth: AppAuth,
    pub prefs: Preferences<PlatformStore>,
}

pub fn make_services(config: AppConfig) -> Services {
    let kv = PlatformStore::new();
    let tokens = TokenStore::new(kv.clone());
    let api = Backend::from_config(&config.api, tokens.clone());
    Services {
        auth: AuthService::new(api.clone(), tokens),
        api,
        prefs: Preferences::new(kv),
        config,
    }
}

pub fn use_services() -> Services {
    use_context::<Services>()
}

/// Provides [`Services`] built from `config` to `children`.
#[component]
pub fn ServicesProvider(config: AppConfig, children: Element) -> Element {
    use_context_provider(move || make_services(config));

    rsx! {
        {children}
    }
}
