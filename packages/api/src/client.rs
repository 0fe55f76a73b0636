//! # HTTP notes backend
//!
//! [`ApiClient`] implements [`NotesApi`] against the remote notes REST API. Every
//! response is a JSON envelope:
//!
//! ```json
//! { "status": "success", "message": "...", "data": { ... } }
//! ```
//!
//! A call succeeds only when the HTTP status is 2xx **and** `status` is
//! `"success"`; otherwise the envelope's `message` becomes [`ApiError::Rejected`].
//! Transport failures map to [`ApiError::Network`], unreadable bodies to
//! [`ApiError::Decode`].
//!
//! The bearer token is read from the shared [`TokenStore`] on every request, so a
//! login or logout elsewhere takes effect on the next call without rebuilding
//! the client.

use reqwest::{Method, RequestBuilder};
use serde::de::{DeserializeOwned, IgnoredAny};
use serde::Deserialize;
use store::{KeyValueStore, Note, TokenStore};

use crate::error::ApiError;
use crate::models::{Credentials, NewNote, Registration, UserInfo};
use crate::{ApiResult, NotesApi};

#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
struct Envelope<T> {
    #[serde(default)]
    status: String,
    #[serde(default)]
    message: String,
    #[serde(default)]
    data: Option<T>,
}

#[derive(Debug, Deserialize)]
struct LoginData {
    #[serde(rename = "accessToken")]
    access_token: String,
}

/// Interpret a response body given the HTTP status code.
fn decode_envelope<T: DeserializeOwned>(status: u16, body: &str) -> ApiResult<Option<T>> {
    let success = (200..300).contains(&status);
    match serde_json::from_str::<Envelope<T>>(body) {
        Ok(envelope) if success && envelope.status == "success" => Ok(envelope.data),
        Ok(envelope) if !envelope.message.is_empty() => Err(ApiError::Rejected(envelope.message)),
        Ok(_) => Err(ApiError::Rejected(format!(
            "request failed with status {status}"
        ))),
        Err(_) if !success => Err(ApiError::Rejected(format!(
            "request failed with status {status}"
        ))),
        Err(e) => Err(ApiError::Decode(e.to_string())),
    }
}

fn require<T>(data: Option<T>) -> ApiResult<T> {
    data.ok_or_else(|| ApiError::Decode("response has no data".to_string()))
}

/// REST client for the notes API.
#[derive(Clone, Debug)]
pub struct ApiClient<S> {
    http: reqwest::Client,
    base_url: String,
    tokens: TokenStore<S>,
}

impl<S: KeyValueStore> ApiClient<S> {
    pub fn new(base_url: impl Into<String>, tokens: TokenStore<S>) -> Self {
        let base_url: String = base_url.into();
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            tokens,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%method, %url, "notes api request");
        let builder = self.http.request(method, url);
        match self.tokens.get() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn send<T: DeserializeOwned>(&self, builder: RequestBuilder) -> ApiResult<Option<T>> {
        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        let result = decode_envelope(status, &body);
        if let Err(e) = &result {
            tracing::warn!(status, error = %e, "notes api call failed");
        }
        result
    }
}

impl<S: KeyValueStore> NotesApi for ApiClient<S> {
    async fn login(&self, credentials: &Credentials) -> ApiResult<String> {
        let builder = self.request(Method::POST, "/login").json(credentials);
        let data: LoginData = require(self.send(builder).await?)?;
        Ok(data.access_token)
    }

    async fn register(&self, registration: &Registration) -> ApiResult<()> {
        let builder = self.request(Method::POST, "/register").json(registration);
        self.send::<IgnoredAny>(builder).await.map(|_| ())
    }

    async fn get_current_user(&self) -> ApiResult<UserInfo> {
        require(self.send(self.request(Method::GET, "/users/me")).await?)
    }

    async fn list_active_notes(&self) -> ApiResult<Vec<Note>> {
        require(self.send(self.request(Method::GET, "/notes")).await?)
    }

    async fn list_archived_notes(&self) -> ApiResult<Vec<Note>> {
        require(self.send(self.request(Method::GET, "/notes/archived")).await?)
    }

    async fn get_note(&self, id: &str) -> ApiResult<Note> {
        let path = format!("/notes/{id}");
        require(self.send(self.request(Method::GET, &path)).await?)
    }

    async fn create_note(&self, note: &NewNote) -> ApiResult<Note> {
        let builder = self
            .request(Method::POST, "/notes")
            .json(&note.normalized());
        require(self.send(builder).await?)
    }

    async fn archive_note(&self, id: &str) -> ApiResult<()> {
        let path = format!("/notes/{id}/archive");
        self.send::<IgnoredAny>(self.request(Method::POST, &path))
            .await
            .map(|_| ())
    }

    async fn unarchive_note(&self, id: &str) -> ApiResult<()> {
        let path = format!("/notes/{id}/unarchive");
        self.send::<IgnoredAny>(self.request(Method::POST, &path))
            .await
            .map(|_| ())
    }

    async fn delete_note(&self, id: &str) -> ApiResult<()> {
        let path = format!("/notes/{id}");
        self.send::<IgnoredAny>(self.request(Method::DELETE, &path))
            .await
            .map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::MemoryStore;

    #[test]
    fn test_success_envelope_yields_data() {
        let body = r#"{"status":"success","message":"User retrieved","data":{"id":"user-1","name":"Dimas","email":"dimas@dicoding.com"}}"#;
        let user: Option<UserInfo> = decode_envelope(200, body).unwrap();
        assert_eq!(user.unwrap().name, "Dimas");
    }

    #[test]
    fn test_success_without_data() {
        let body = r#"{"status":"success","message":"Note archived"}"#;
        let data: Option<IgnoredAny> = decode_envelope(200, body).unwrap();
        assert!(data.is_none());
    }

    #[test]
    fn test_fail_envelope_carries_message() {
        let body = r#"{"status":"fail","message":"Email or password is wrong"}"#;
        let err = decode_envelope::<LoginData>(401, body).unwrap_err();
        assert_eq!(err, ApiError::rejected("Email or password is wrong"));
        assert_eq!(err.to_string(), "Email or password is wrong");
    }

    #[test]
    fn test_fail_status_inside_2xx_is_rejected() {
        let body = r#"{"status":"fail","message":"Note not found"}"#;
        let err = decode_envelope::<Note>(200, body).unwrap_err();
        assert_eq!(err, ApiError::rejected("Note not found"));
    }

    #[test]
    fn test_non_json_error_page() {
        let err = decode_envelope::<Note>(502, "<html>Bad Gateway</html>").unwrap_err();
        assert_eq!(err, ApiError::rejected("request failed with status 502"));
    }

    #[test]
    fn test_garbage_success_body_is_decode_error() {
        let err = decode_envelope::<Note>(200, "not json").unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn test_login_data_field_name() {
        let body = r#"{"status":"success","message":"","data":{"accessToken":"tok"}}"#;
        let data: LoginData = require(decode_envelope(200, body).unwrap()).unwrap();
        assert_eq!(data.access_token, "tok");
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = ApiClient::new("https://example.test/v1/", TokenStore::new(MemoryStore::new()));
        assert_eq!(client.base_url(), "https://example.test/v1");
    }
}
