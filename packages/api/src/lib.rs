//! # API crate - notes backend access for the Personal Notes client
//!
//! This crate is everything the UI needs to talk to a notes backend and to track
//! who is signed in. It has no UI dependencies, so all of it runs under plain
//! `#[tokio::test]`.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`auth`] | Session state machine: [`AuthState`] and the [`AuthService`] that drives it |
//! | [`client`] | [`ApiClient`], the HTTP implementation of [`NotesApi`] over `reqwest` |
//! | [`local`] | [`LocalNotesApi`], an in-memory backend for tests and offline use |
//! | [`backend`] | [`Backend`], the runtime choice between the two |
//! | [`models`] | Request payloads (`Credentials`, `Registration`, `NewNote`) with input validation, and [`UserInfo`] |
//! | [`error`] | [`ApiError`] and [`ValidationError`] |
//!
//! ## The `NotesApi` contract
//!
//! Every operation returns `Result<T, ApiError>` and never panics, so callers
//! handle every failure with a single `match`. Implementations attach the stored
//! bearer token, when there is one, to every request.

pub mod auth;
pub mod backend;
pub mod client;
pub mod error;
pub mod local;
pub mod models;

pub use auth::{AuthError, AuthService, AuthState};
pub use backend::Backend;
pub use client::ApiClient;
pub use error::{ApiError, ValidationError};
pub use local::LocalNotesApi;
pub use models::{Credentials, NewNote, Registration, UserInfo};
pub use store::Note;

pub type ApiResult<T> = Result<T, ApiError>;

/// Remote operations for authentication and note CRUD/archive.
#[allow(async_fn_in_trait)]
pub trait NotesApi {
    /// Exchange credentials for an access token.
    async fn login(&self, credentials: &Credentials) -> ApiResult<String>;

    async fn register(&self, registration: &Registration) -> ApiResult<()>;

    /// Resolve the user the stored token belongs to.
    async fn get_current_user(&self) -> ApiResult<UserInfo>;

    async fn list_active_notes(&self) -> ApiResult<Vec<Note>>;

    async fn list_archived_notes(&self) -> ApiResult<Vec<Note>>;

    async fn get_note(&self, id: &str) -> ApiResult<Note>;

    async fn create_note(&self, note: &NewNote) -> ApiResult<Note>;

    async fn archive_note(&self, id: &str) -> ApiResult<()>;

    async fn unarchive_note(&self, id: &str) -> ApiResult<()>;

    async fn delete_note(&self, id: &str) -> ApiResult<()>;
}
