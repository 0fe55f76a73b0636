//! # Session state machine
//!
//! ```text
//! INITIALIZING ──► AUTHENTICATED(user)
//!       │               │ logout
//!       ▼               ▼
//!       └──────► UNAUTHENTICATED ◄── failed login
//! ```
//!
//! [`AuthState`] is the observable session value; [`AuthService`] performs the
//! transitions against a [`NotesApi`] and the shared [`TokenStore`]. The service
//! returns new states and results instead of mutating shared state itself, so the
//! UI decides when to publish them.

use store::{KeyValueStore, TokenStore};
use thiserror::Error;

use crate::error::{ApiError, ValidationError};
use crate::models::{Credentials, Registration, UserInfo};
use crate::NotesApi;

/// Authentication state for the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<UserInfo>,
    /// True until the stored token (if any) has been resolved.
    pub loading: bool,
    /// Message of the last failed login or registration.
    pub error: Option<String>,
}

impl Default for AuthState {
    fn default() -> Self {
        Self::initializing()
    }
}

impl AuthState {
    pub fn initializing() -> Self {
        Self {
            user: None,
            loading: true,
            error: None,
        }
    }

    pub fn authenticated(user: UserInfo) -> Self {
        Self {
            user: Some(user),
            loading: false,
            error: None,
        }
    }

    pub fn unauthenticated() -> Self {
        Self {
            user: None,
            loading: false,
            error: None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Same state with an error message attached.
    pub fn with_error(mut self, message: impl Into<String>) -> Self {
        self.error = Some(message.into());
        self
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }
}

/// Why a login or registration did not go through.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Drives session transitions.
#[derive(Clone, Debug)]
pub struct AuthService<A, S> {
    api: A,
    tokens: TokenStore<S>,
}

impl<A: NotesApi, S: KeyValueStore> AuthService<A, S> {
    /// `tokens` must be the store `api` reads its bearer token from.
    pub fn new(api: A, tokens: TokenStore<S>) -> Self {
        Self { api, tokens }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Resolve the startup state from the stored token, if any. A token the
    /// backend no longer accepts is cleared.
    pub async fn initialize(&self) -> AuthState {
        if self.tokens.get().is_none() {
            tracing::info!("no stored token; starting signed out");
            return AuthState::unauthenticated();
        }
        match self.api.get_current_user().await {
            Ok(user) => {
                tracing::info!(user = %user.email, "restored session");
                AuthState::authenticated(user)
            }
            Err(e) => {
                tracing::warn!(error = %e, "stored token rejected; clearing it");
                self.tokens.clear();
                AuthState::unauthenticated()
            }
        }
    }

    /// Log in and resolve the full profile. Nothing is left in the token store
    /// unless both steps succeed.
    pub async fn login(&self, credentials: &Credentials) -> Result<UserInfo, AuthError> {
        credentials.validate()?;
        let token = self.api.login(credentials).await?;
        self.tokens.set(&token);
        match self.api.get_current_user().await {
            Ok(user) => {
                tracing::info!(user = %user.email, "logged in");
                Ok(user)
            }
            Err(e) => {
                tracing::warn!(error = %e, "profile lookup after login failed");
                self.tokens.clear();
                Err(e.into())
            }
        }
    }

    /// Create an account. The session is unchanged; the user logs in afterwards.
    pub async fn register(
        &self,
        registration: &Registration,
        confirm_password: &str,
    ) -> Result<(), AuthError> {
        registration.validate(confirm_password)?;
        self.api.register(registration).await?;
        tracing::info!(user = %registration.email, "registered");
        Ok(())
    }

    /// Forget the token. No network call.
    pub fn logout(&self) -> AuthState {
        self.tokens.clear();
        tracing::info!("logged out");
        AuthState::unauthenticated()
    }
}
