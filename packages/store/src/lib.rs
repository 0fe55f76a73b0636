pub mod config;
pub mod filter;
pub mod models;
pub mod prefs;
pub mod text;
pub mod token;

mod memory;
pub use memory::MemoryStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStorageStore;

pub use config::AppConfig;
pub use filter::{DateRange, KeywordScope, NoteFilter, SortOrder};
pub use models::Note;
pub use prefs::{Language, Preferences, Theme};
pub use text::plain_text;
pub use token::TokenStore;

/// Synchronous string key/value persistence.
///
/// Implementations are cheap handles: clones share the same underlying storage,
/// so a [`TokenStore`] and a [`Preferences`] built from clones of one store see
/// each other's writes. Failures are swallowed; an unavailable backend reads as
/// empty.
pub trait KeyValueStore: Clone {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}
