//! Error types shared by every backend.

use thiserror::Error;

/// Failure of a backend call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// The backend answered with a failure; carries its message verbatim.
    #[error("{0}")]
    Rejected(String),
    /// The response could not be understood.
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected(message.into())
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            Self::Decode(e.to_string())
        } else {
            Self::Network(e.to_string())
        }
    }
}

/// Input rejected before any request is sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a note title")]
    EmptyTitle,
    #[error("Title must be at most {max} characters")]
    TitleTooLong { max: usize },
    #[error("Please enter note content")]
    EmptyBody,
    #[error("Please enter your full name")]
    EmptyName,
    #[error("Name must be at least {min} characters long")]
    NameTooShort { min: usize },
    #[error("Please enter your email address")]
    EmptyEmail,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Please enter your password")]
    EmptyPassword,
    #[error("Password must be at least {min} characters long")]
    PasswordTooShort { min: usize },
    #[error("Passwords do not match")]
    PasswordMismatch,
}
