//! HTTP client for the public demo REST service.
//!
//! Every call follows the same contract: the loading gate is held for the
//! whole request and released on every exit path, non-success statuses and
//! transport faults are folded into [`FetchError`], and callers get a plain
//! `Result` to match on. Nothing is raised past this boundary.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use log::{debug, warn};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::api::types::{Comment, NewComment, NewPost, NewUser, Post, User};

pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

// ============================================================================
// Errors
// ============================================================================

/// Errors produced by HTTP calls. Callers treat all variants the same way
/// (inline failure text plus a manual retry); the split exists for logging
/// and tests.
#[derive(Debug)]
pub enum FetchError {
    /// The server answered with a non-success status code.
    Status { status: u16, message: String },
    /// The request never completed (DNS, connection refused, timeout).
    Transport(String),
    /// A 2xx body that was not the documented shape.
    Decode(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Status { status, .. } => write!(f, "HTTP error! status: {status}"),
            FetchError::Transport(msg) => write!(f, "network error: {msg}"),
            FetchError::Decode(msg) => write!(f, "invalid response body: {msg}"),
        }
    }
}

impl std::error::Error for FetchError {}

// ============================================================================
// Loading gate
// ============================================================================

/// Shared loading indicator, depth-counted so overlapping calls keep it on
/// until the last one settles.
///
/// [`LoadingGate::hold`] returns a guard that releases on drop, which makes
/// the indicator a scoped resource: acquired at request entry, released
/// unconditionally at request exit whatever the outcome.
#[derive(Clone, Debug, Default)]
pub struct LoadingGate {
    depth: Arc<AtomicUsize>,
}

impl LoadingGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// True while at least one request is in flight.
    pub fn is_loading(&self) -> bool {
        self.depth.load(Ordering::SeqCst) > 0
    }

    pub(crate) fn hold(&self) -> LoadingGuard {
        self.depth.fetch_add(1, Ordering::SeqCst);
        LoadingGuard {
            depth: Arc::clone(&self.depth),
        }
    }
}

pub(crate) struct LoadingGuard {
    depth: Arc<AtomicUsize>,
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        self.depth.fetch_sub(1, Ordering::SeqCst);
    }
}

// ============================================================================
// Client
// ============================================================================

/// Thin reqwest wrapper bound to one base URL.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    gate: LoadingGate,
}

impl ApiClient {
    /// Creates a new client.
    ///
    /// # Arguments
    /// * `base_url` - Optional custom base URL (defaults to the public demo service)
    pub fn new(base_url: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            gate: LoadingGate::new(),
        }
    }

    /// A handle to the loading gate, for whoever draws the indicator.
    pub fn gate(&self) -> LoadingGate {
        self.gate.clone()
    }

    /// `GET {base_url}{endpoint}`, decoding a JSON body on success.
    pub async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, FetchError> {
        let _held = self.gate.hold();
        let url = format!("{}{}", self.base_url, endpoint);
        debug!("GET {url}");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        decode_response(response).await
    }

    /// `POST {base_url}{endpoint}` with a JSON body, decoding the echo.
    pub async fn post<B, T>(&self, endpoint: &str, body: &B) -> Result<T, FetchError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let _held = self.gate.hold();
        let url = format!("{}{}", self.base_url, endpoint);
        debug!("POST {url}");

        let response = self
            .http
            .post(&url)
            .header("Content-Type", "application/json; charset=UTF-8")
            .json(body)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        decode_response(response).await
    }

    // ------------------------------------------------------------------------
    // Endpoint bindings. No logic of their own.
    // ------------------------------------------------------------------------

    pub async fn users(&self) -> Result<Vec<User>, FetchError> {
        self.get("/users").await
    }

    pub async fn user(&self, id: u64) -> Result<User, FetchError> {
        self.get(&format!("/users/{id}")).await
    }

    pub async fn create_user(&self, user: &NewUser) -> Result<User, FetchError> {
        self.post("/users", user).await
    }

    pub async fn posts(&self) -> Result<Vec<Post>, FetchError> {
        self.get("/posts").await
    }

    pub async fn post_by_id(&self, id: u64) -> Result<Post, FetchError> {
        self.get(&format!("/posts/{id}")).await
    }

    pub async fn create_post(&self, post: &NewPost) -> Result<Post, FetchError> {
        self.post("/posts", post).await
    }

    pub async fn comments(&self, post_id: u64) -> Result<Vec<Comment>, FetchError> {
        self.get(&format!("/posts/{post_id}/comments")).await
    }

    pub async fn create_comment(&self, comment: &NewComment) -> Result<Comment, FetchError> {
        self.post("/comments", comment).await
    }
}

/// Shared tail of get/post: status check, then body decode.
async fn decode_response<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, FetchError> {
    let status = response.status();
    if !status.is_success() {
        let status = status.as_u16();
        let message = response.text().await.unwrap_or_default();
        warn!("request failed: HTTP {status} ({message})");
        return Err(FetchError::Status { status, message });
    }

    let body = response
        .text()
        .await
        .map_err(|e| FetchError::Transport(e.to_string()))?;
    serde_json::from_str(&body).map_err(|e| {
        warn!("response body did not decode: {e}");
        FetchError::Decode(e.to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_starts_released() {
        let gate = LoadingGate::new();
        assert!(!gate.is_loading());
    }

    #[test]
    fn test_gate_releases_on_drop() {
        let gate = LoadingGate::new();
        {
            let _held = gate.hold();
            assert!(gate.is_loading());
        }
        assert!(!gate.is_loading());
    }

    /// Overlapping holds keep the gate closed until the last guard drops.
    #[test]
    fn test_gate_depth_counts_overlapping_holds() {
        let gate = LoadingGate::new();
        let first = gate.hold();
        let second = gate.hold();
        drop(first);
        assert!(gate.is_loading());
        drop(second);
        assert!(!gate.is_loading());
    }

    #[test]
    fn test_default_base_url() {
        let client = ApiClient::new(None);
        assert_eq!(client.base_url, DEFAULT_BASE_URL);
    }

    /// The status message surfaced to pages matches the upstream wording.
    #[test]
    fn test_fetch_error_display() {
        let err = FetchError::Status {
            status: 500,
            message: "Internal Server Error".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP error! status: 500");

        let err = FetchError::Transport("connection refused".to_string());
        assert_eq!(err.to_string(), "network error: connection refused");
    }
}
