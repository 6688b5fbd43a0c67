//! # HTTP client for the notes service
//!
//! [`NotesApi`] is the async seam between the UI controller and the network. It has
//! one method per endpoint; [`HttpClient`] implements it with [`reqwest`], and tests
//! substitute scripted fakes.
//!
//! ## Endpoints
//!
//! | Method | Request | Success body |
//! |--------|---------|--------------|
//! | [`register`](NotesApi::register) | `POST {base}register` | `{success, message}` |
//! | [`login`](NotesApi::login) | `POST {base}auth` | `{token, user}` |
//! | [`list_notes`](NotesApi::list_notes) | `GET {base}notes` | `{success, data: Note[]}` |
//! | [`create_note`](NotesApi::create_note) | `POST {base}notes` | `{success, data: Note}` |
//! | [`update_note`](NotesApi::update_note) | `PUT {base}notes/{id}` | `{success, data: Note}` |
//! | [`delete_note`](NotesApi::delete_note) | `DELETE {base}notes/{id}` | `{success}` |
//!
//! Every note endpoint sends `Authorization: Bearer <token>`. A 2xx answer whose
//! envelope says `success: false` is treated exactly like a non-2xx answer.
//! Each call is a single attempt with no retry.

use reqwest::{Client, RequestBuilder, Url};
use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::models::{ApiResponse, AuthResponse, Credentials, Note, NoteDraft};

/// Async interface to the notes service.
pub trait NotesApi {
    /// Register an account. Returns the service's confirmation message.
    fn register(
        &self,
        credentials: &Credentials,
    ) -> impl std::future::Future<Output = Result<String, ApiError>>;
    fn login(
        &self,
        credentials: &Credentials,
    ) -> impl std::future::Future<Output = Result<AuthResponse, ApiError>>;
    fn list_notes(
        &self,
        token: &str,
    ) -> impl std::future::Future<Output = Result<Vec<Note>, ApiError>>;
    fn create_note(
        &self,
        token: &str,
        draft: &NoteDraft,
    ) -> impl std::future::Future<Output = Result<Note, ApiError>>;
    fn update_note(
        &self,
        token: &str,
        id: &str,
        draft: &NoteDraft,
    ) -> impl std::future::Future<Output = Result<Note, ApiError>>;
    fn delete_note(
        &self,
        token: &str,
        id: &str,
    ) -> impl std::future::Future<Output = Result<(), ApiError>>;
}

/// reqwest-backed [`NotesApi`].
#[derive(Clone, Debug)]
pub struct HttpClient {
    http: Client,
    base_url: String,
}

impl HttpClient {
    /// Create a client for `base_url`. A trailing `/` is added when missing so
    /// endpoint paths can be appended directly.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(http: Client, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// `{base}notes/{id}` with `id` percent-encoded as a single path segment.
    fn note_url(&self, id: &str) -> Result<Url, ApiError> {
        let mut url =
            Url::parse(&self.url("notes")).map_err(|e| ApiError::InvalidUrl(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidUrl(self.base_url.clone()))?
            .push(id);
        Ok(url)
    }

    /// Send a request and return the status plus raw body text.
    async fn send(&self, request: RequestBuilder) -> Result<(u16, String), ApiError> {
        let response = request.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok((status, body))
    }

    /// Send a request whose answer uses the `{success, message, data}` envelope.
    async fn send_enveloped<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<ApiResponse<T>, ApiError> {
        let (status, body) = self.send(request).await?;
        if !is_success(status) {
            return Err(rejection(status, &body));
        }

        let envelope: ApiResponse<T> = serde_json::from_str(&body)
            .map_err(|e| ApiError::InvalidResponse(e.to_string()))?;

        if !envelope.success {
            return Err(ApiError::Rejected {
                status,
                message: envelope.message,
            });
        }
        Ok(envelope)
    }
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Build a rejection, keeping the service's `message` when the body carries one.
fn rejection(status: u16, body: &str) -> ApiError {
    let message = serde_json::from_str::<ApiResponse<serde_json::Value>>(body)
        .ok()
        .and_then(|envelope| envelope.message);
    ApiError::Rejected { status, message }
}

fn require_data<T>(envelope: ApiResponse<T>) -> Result<T, ApiError> {
    envelope
        .data
        .ok_or_else(|| ApiError::InvalidResponse("missing data".to_string()))
}

impl NotesApi for HttpClient {
    async fn register(&self, credentials: &Credentials) -> Result<String, ApiError> {
        tracing::debug!("POST register");
        let envelope: ApiResponse<serde_json::Value> = self
            .send_enveloped(self.http.post(self.url("register")).json(credentials))
            .await?;
        Ok(envelope.message.unwrap_or_default())
    }

    async fn login(&self, credentials: &Credentials) -> Result<AuthResponse, ApiError> {
        tracing::debug!("POST auth");
        let (status, body) = self
            .send(self.http.post(self.url("auth")).json(credentials))
            .await?;
        if !is_success(status) {
            return Err(rejection(status, &body));
        }
        serde_json::from_str(&body).map_err(|e| ApiError::InvalidResponse(e.to_string()))
    }

    async fn list_notes(&self, token: &str) -> Result<Vec<Note>, ApiError> {
        tracing::debug!("GET notes");
        let envelope: ApiResponse<Vec<Note>> = self
            .send_enveloped(self.http.get(self.url("notes")).bearer_auth(token))
            .await?;
        Ok(envelope.data.unwrap_or_default())
    }

    async fn create_note(&self, token: &str, draft: &NoteDraft) -> Result<Note, ApiError> {
        tracing::debug!("POST notes");
        let envelope = self
            .send_enveloped(
                self.http
                    .post(self.url("notes"))
                    .bearer_auth(token)
                    .json(draft),
            )
            .await?;
        require_data(envelope)
    }

    async fn update_note(&self, token: &str, id: &str, draft: &NoteDraft) -> Result<Note, ApiError> {
        tracing::debug!(note_id = id, "PUT notes");
        let envelope = self
            .send_enveloped(self.http.put(self.note_url(id)?).bearer_auth(token).json(draft))
            .await?;
        require_data(envelope)
    }

    async fn delete_note(&self, token: &str, id: &str) -> Result<(), ApiError> {
        tracing::debug!(note_id = id, "DELETE notes");
        self.send_enveloped::<serde_json::Value>(
            self.http.delete(self.note_url(id)?).bearer_auth(token),
        )
        .await?;
        Ok(())
    }
}
