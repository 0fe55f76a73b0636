//! # In-memory notes backend
//!
//! [`LocalNotesApi`] implements [`NotesApi`] entirely in process. It keeps
//! registered users, issued tokens and per-user notes behind an
//! `Arc<Mutex<_>>`, so clones share one backend, and reads the caller's token from
//! the same [`TokenStore`] the session writes to, exactly like [`crate::ApiClient`].
//!
//! It backs the `backend = "local"` configuration and is the test double for the
//! session and UI logic. [`LocalNotesApi::request_count`] counts every call, which
//! lets tests assert that an operation never reached the backend.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{DateTime, Utc};
use store::{KeyValueStore, Note, TokenStore};

use crate::error::ApiError;
use crate::models::{Credentials, NewNote, Registration, UserInfo};
use crate::{ApiResult, NotesApi};

#[derive(Debug)]
struct StoredNote {
    owner: String,
    note: Note,
}

#[derive(Debug, Default)]
struct LocalState {
    users: Vec<(String, Registration)>,
    /// token -> user id
    sessions: HashMap<String, String>,
    notes: Vec<StoredNote>,
    next_id: u64,
}

impl LocalState {
    fn next_id(&mut self, prefix: &str) -> String {
        self.next_id += 1;
        format!("{prefix}-{}", self.next_id)
    }
}

/// In-memory NotesApi for tests and offline use.
#[derive(Clone, Debug)]
pub struct LocalNotesApi<S> {
    backend: Arc<Mutex<LocalState>>,
    requests: Arc<AtomicUsize>,
    tokens: TokenStore<S>,
}

impl<S: KeyValueStore> LocalNotesApi<S> {
    pub fn new(tokens: TokenStore<S>) -> Self {
        Self {
            backend: Arc::default(),
            requests: Arc::default(),
            tokens,
        }
    }

    fn lock(&self) -> ApiResult<MutexGuard<'_, LocalState>> {
        self.backend
            .lock()
            .map_err(|_| ApiError::Network("local backend unavailable".to_string()))
    }

    fn begin(&self) -> ApiResult<MutexGuard<'_, LocalState>> {
        self.requests.fetch_add(1, Ordering::SeqCst);
        self.lock()
    }

    /// Number of `NotesApi` calls made so far.
    pub fn request_count(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }

    /// Register a user directly, bypassing validation. Returns the user id.
    pub fn seed_user(&self, registration: Registration) -> String {
        let Ok(mut backend) = self.lock() else {
            return String::new();
        };
        let id = backend.next_id("user");
        backend.users.push((id.clone(), registration));
        id
    }

    /// Insert a note owned by `user_id` with an explicit creation time.
    pub fn seed_note(
        &self,
        user_id: &str,
        title: &str,
        body: &str,
        created_at: DateTime<Utc>,
        archived: bool,
    ) -> Note {
        let Ok(mut backend) = self.lock() else {
            return Note {
                id: String::new(),
                title: title.to_string(),
                body: body.to_string(),
                created_at,
                archived,
            };
        };
        let note = Note {
            id: backend.next_id("notes"),
            title: title.to_string(),
            body: body.to_string(),
            created_at,
            archived,
        };
        backend.notes.push(StoredNote {
            owner: user_id.to_string(),
            note: note.clone(),
        });
        note
    }

    /// Issue a token for `user_id` without a login call.
    pub fn issue_token(&self, user_id: &str) -> String {
        let Ok(mut backend) = self.lock() else {
            return String::new();
        };
        let token = backend.next_id("token");
        backend.sessions.insert(token.clone(), user_id.to_string());
        token
    }

    /// Drop every issued token, as if they all expired.
    pub fn expire_tokens(&self) {
        if let Ok(mut backend) = self.lock() {
            backend.sessions.clear();
        }
    }

    /// Current state of a note regardless of owner, for assertions.
    pub fn peek_note(&self, id: &str) -> Option<Note> {
        let backend = self.lock().ok()?;
        backend
            .notes
            .iter()
            .find(|s| s.note.id == id)
            .map(|s| s.note.clone())
    }

    fn current_user_id(&self, backend: &LocalState) -> ApiResult<String> {
        let token = self
            .tokens
            .get()
            .ok_or_else(|| ApiError::rejected("Missing authentication"))?;
        backend
            .sessions
            .get(&token)
            .cloned()
            .ok_or_else(|| ApiError::rejected("Invalid access token"))
    }

    fn list(&self, archived: bool) -> ApiResult<Vec<Note>> {
        let backend = self.begin()?;
        let owner = self.current_user_id(&backend)?;
        Ok(backend
            .notes
            .iter()
            .filter(|s| s.owner == owner && s.note.archived == archived)
            .map(|s| s.note.clone())
            .collect())
    }

    fn with_owned_note<T>(&self, id: &str, f: impl FnOnce(&mut LocalState, usize) -> T) -> ApiResult<T> {
        let mut backend = self.begin()?;
        let owner = self.current_user_id(&backend)?;
        let index = backend
            .notes
            .iter()
            .position(|s| s.note.id == id && s.owner == owner)
            .ok_or_else(|| ApiError::rejected("Note is not found"))?;
        Ok(f(&mut backend, index))
    }
}

impl<S: KeyValueStore> NotesApi for LocalNotesApi<S> {
    async fn login(&self, credentials: &Credentials) -> ApiResult<String> {
        let mut backend = self.begin()?;
        let user_id = backend
            .users
            .iter()
            .find(|(_, r)| r.email == credentials.email && r.password == credentials.password)
            .map(|(id, _)| id.clone())
            .ok_or_else(|| ApiError::rejected("Email or password is wrong"))?;
        let token = backend.next_id("token");
        backend.sessions.insert(token.clone(), user_id);
        Ok(token)
    }

    async fn register(&self, registration: &Registration) -> ApiResult<()> {
        let mut backend = self.begin()?;
        if backend.users.iter().any(|(_, r)| r.email == registration.email) {
            return Err(ApiError::rejected("Email is already in use"));
        }
        let id = backend.next_id("user");
        backend.users.push((id, registration.clone()));
        Ok(())
    }

    async fn get_current_user(&self) -> ApiResult<UserInfo> {
        let backend = self.begin()?;
        let user_id = self.current_user_id(&backend)?;
        backend
            .users
            .iter()
            .find(|(id, _)| *id == user_id)
            .map(|(id, r)| UserInfo {
                id: id.clone(),
                name: r.name.clone(),
                email: r.email.clone(),
            })
            .ok_or_else(|| ApiError::rejected("User is not found"))
    }

    async fn list_active_notes(&self) -> ApiResult<Vec<Note>> {
        self.list(false)
    }

    async fn list_archived_notes(&self) -> ApiResult<Vec<Note>> {
        self.list(true)
    }

    async fn get_note(&self, id: &str) -> ApiResult<Note> {
        self.with_owned_note(id, |backend, i| backend.notes[i].note.clone())
    }

    async fn create_note(&self, note: &NewNote) -> ApiResult<Note> {
        let mut backend = self.begin()?;
        let owner = self.current_user_id(&backend)?;
        let payload = note.normalized();
        let note = Note {
            id: backend.next_id("notes"),
            title: payload.title,
            body: payload.body,
            created_at: Utc::now(),
            archived: false,
        };
        backend.notes.push(StoredNote {
            owner,
            note: note.clone(),
        });
        Ok(note)
    }

    async fn archive_note(&self, id: &str) -> ApiResult<()> {
        self.with_owned_note(id, |backend, i| backend.notes[i].note.archived = true)
    }

    async fn unarchive_note(&self, id: &str) -> ApiResult<()> {
        self.with_owned_note(id, |backend, i| backend.notes[i].note.archived = false)
    }

    async fn delete_note(&self, id: &str) -> ApiResult<()> {
        self.with_owned_note(id, |backend, i| {
            backend.notes.remove(i);
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use store::MemoryStore;

    fn signed_in() -> (LocalNotesApi<MemoryStore>, TokenStore<MemoryStore>, String) {
        let tokens = TokenStore::new(MemoryStore::new());
        let api = LocalNotesApi::new(tokens.clone());
        let user = api.seed_user(Registration::new("Dimas", "dimas@mail.com", "secret"));
        tokens.set(&api.issue_token(&user));
        (api, tokens, user)
    }

    #[tokio::test]
    async fn test_register_then_login() {
        let tokens = TokenStore::new(MemoryStore::new());
        let api = LocalNotesApi::new(tokens.clone());

        api.register(&Registration::new("Ana", "ana@mail.com", "123456"))
            .await
            .unwrap();
        let dup = api
            .register(&Registration::new("Ana", "ana@mail.com", "654321"))
            .await;
        assert_eq!(dup, Err(ApiError::rejected("Email is already in use")));

        let bad = api.login(&Credentials::new("ana@mail.com", "nope")).await;
        assert!(matches!(bad, Err(ApiError::Rejected(_))));

        let token = api
            .login(&Credentials::new("ana@mail.com", "123456"))
            .await
            .unwrap();
        tokens.set(&token);
        assert_eq!(api.get_current_user().await.unwrap().name, "Ana");
    }

    #[tokio::test]
    async fn test_requires_token() {
        let tokens = TokenStore::new(MemoryStore::new());
        let api = LocalNotesApi::new(tokens.clone());
        assert!(api.list_active_notes().await.is_err());

        tokens.set("forged");
        assert_eq!(
            api.get_current_user().await,
            Err(ApiError::rejected("Invalid access token"))
        );
    }

    #[tokio::test]
    async fn test_archive_cycle_and_delete() {
        let (api, _tokens, _user) = signed_in();
        let note = api
            .create_note(&NewNote::new(" Groceries ", "<p>milk</p>"))
            .await
            .unwrap();
        assert_eq!(note.title, "Groceries");
        assert_eq!(api.list_active_notes().await.unwrap().len(), 1);

        api.archive_note(&note.id).await.unwrap();
        assert!(api.list_active_notes().await.unwrap().is_empty());
        assert_eq!(api.list_archived_notes().await.unwrap()[0].id, note.id);

        api.unarchive_note(&note.id).await.unwrap();
        assert!(!api.get_note(&note.id).await.unwrap().archived);

        api.delete_note(&note.id).await.unwrap();
        assert_eq!(
            api.get_note(&note.id).await,
            Err(ApiError::rejected("Note is not found"))
        );
        assert!(api.peek_note(&note.id).is_none());
    }

    #[tokio::test]
    async fn test_notes_are_scoped_to_owner() {
        let (api, tokens, user) = signed_in();
        let when = Utc.with_ymd_and_hms(2022, 4, 14, 4, 27, 34).unwrap();
        let mine = api.seed_note(&user, "Mine", "b", when, false);

        let other = api.seed_user(Registration::new("Eve", "eve@mail.com", "secret"));
        tokens.set(&api.issue_token(&other));
        assert!(api.list_active_notes().await.unwrap().is_empty());
        assert!(api.delete_note(&mine.id).await.is_err());
        assert!(api.peek_note(&mine.id).is_some());
    }

    #[tokio::test]
    async fn test_request_count() {
        let (api, _tokens, _user) = signed_in();
        assert_eq!(api.request_count(), 0);
        let _ = api.list_active_notes().await;
        let _ = api.get_note("missing").await;
        assert_eq!(api.request_count(), 2);
    }
}
