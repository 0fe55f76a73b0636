//! Runtime selection between the remote and in-memory backends.

use store::config::{ApiConfig, BackendKind};
use store::{KeyValueStore, Note, TokenStore};

use crate::models::{Credentials, NewNote, Registration, UserInfo};
use crate::{ApiClient, ApiResult, LocalNotesApi, NotesApi};

/// The configured notes backend.
#[derive(Clone, Debug)]
pub enum Backend<S> {
    Remote(ApiClient<S>),
    Local(LocalNotesApi<S>),
}

impl<S: KeyValueStore> Backend<S> {
    pub fn from_config(config: &ApiConfig, tokens: TokenStore<S>) -> Self {
        match config.backend {
            BackendKind::Remote => {
                tracing::info!(base_url = %config.base_url, "using remote notes backend");
                Self::Remote(ApiClient::new(config.base_url.clone(), tokens))
            }
            BackendKind::Local => {
                tracing::info!("using in-memory notes backend");
                Self::Local(LocalNotesApi::new(tokens))
            }
        }
    }
}

macro_rules! dispatch {
    ($self:ident, $api:ident => $call:expr) => {
        match $self {
            Backend::Remote($api) => $call.await,
            Backend::Local($api) => $call.await,
        }
    };
}

impl<S: KeyValueStore> NotesApi for Backend<S> {
    async fn login(&self, credentials: &Credentials) -> ApiResult<String> {
        dispatch!(self, api => api.login(credentials))
    }

    async fn register(&self, registration: &Registration) -> ApiResult<()> {
        dispatch!(self, api => api.register(registration))
    }

    async fn get_current_user(&self) -> ApiResult<UserInfo> {
        dispatch!(self, api => api.get_current_user())
    }

    async fn list_active_notes(&self) -> ApiResult<Vec<Note>> {
        dispatch!(self, api => api.list_active_notes())
    }

    async fn list_archived_notes(&self) -> ApiResult<Vec<Note>> {
        dispatch!(self, api => api.list_archived_notes())
    }

    async fn get_note(&self, id: &str) -> ApiResult<Note> {
        dispatch!(self, api => api.get_note(id))
    }

    async fn create_note(&self, note: &NewNote) -> ApiResult<Note> {
        dispatch!(self, api => api.create_note(note))
    }

    async fn archive_note(&self, id: &str) -> ApiResult<()> {
        dispatch!(self, api => api.archive_note(id))
    }

    async fn unarchive_note(&self, id: &str) -> ApiResult<()> {
        dispatch!(self, api => api.unarchive_note(id))
    }

    async fn delete_note(&self, id: &str) -> ApiResult<()> {
        dispatch!(self, api => api.delete_note(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::{AppConfig, MemoryStore};

    #[test]
    fn test_from_config() {
        let tokens = TokenStore::new(MemoryStore::new());

        let remote = Backend::from_config(&AppConfig::default().api, tokens.clone());
        assert!(matches!(remote, Backend::Remote(ref c) if c.base_url() == "https://notes-api.dicoding.dev/v1"));

        let local = Backend::from_config(&AppConfig::default().with_local_backend().api, tokens);
        assert!(matches!(local, Backend::Local(_)));
    }

    #[tokio::test]
    async fn test_local_dispatch() {
        let tokens = TokenStore::new(MemoryStore::new());
        let backend = Backend::from_config(&AppConfig::default().with_local_backend().api, tokens);
        backend
            .register(&Registration::new("Ana", "ana@mail.com", "123456"))
            .await
            .unwrap();
        assert!(backend
            .login(&Credentials::new("ana@mail.com", "123456"))
            .await
            .is_ok());
    }
}
