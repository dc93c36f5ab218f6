/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! Cross-platform REST client for the Scriptide meeting store and session
//! service.
//!
//! Works on WASM (browser) and native targets via [`reqwest`].
//!
//! # Example
//!
//! ```no_run
//! use scriptide_client::{AuthMode, MeetingApiClient, MeetingStore};
//!
//! # async fn example() -> Result<(), scriptide_client::ApiError> {
//! let client = MeetingApiClient::new("http://localhost:8081", AuthMode::Cookie);
//!
//! if let Some(meeting) = client.get_meeting("weekly sync").await? {
//!     println!("found {}", meeting.meeting_id);
//! }
//! # Ok(())
//! # }
//! ```

pub mod attendees;
pub mod error;
pub mod meetings;
pub mod sessions;
pub mod store;

pub use error::ApiError;
pub use scriptide_types;
pub use store::{MeetingStore, SessionService};

use reqwest::Client;
use scriptide_types::{APIError, APIResponse};

/// How the client authenticates with the meeting API.
#[derive(Debug, Clone)]
pub enum AuthMode {
    /// Browser mode: send credentials (cookies) automatically via `fetch`.
    Cookie,
    /// Bearer token mode: attach `Authorization: Bearer <token>` to every
    /// request. Used by CLI tools and integration tests.
    Bearer(String),
}

/// A typed REST client for the meeting store and the session service.
///
/// All methods return strongly-typed responses from [`scriptide_types`] and
/// map HTTP errors to [`ApiError`].
#[derive(Debug, Clone)]
pub struct MeetingApiClient {
    base_url: String,
    auth: AuthMode,
    http: Client,
}

impl MeetingApiClient {
    /// Create a new client pointing at the given API base URL.
    ///
    /// # Arguments
    ///
    /// * `base_url` - e.g. `"http://localhost:8081"`
    /// * `auth` - how to authenticate requests
    pub fn new(base_url: &str, auth: AuthMode) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            auth,
            http: Client::new(),
        }
    }

    /// Build a GET request with auth applied.
    pub(crate) fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.apply_auth(self.http.get(self.url(path)))
    }

    /// Build a POST request with auth applied.
    pub(crate) fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.apply_auth(self.http.post(self.url(path)))
    }

    fn url(&self, path: &str) -> String {
        let url = format!("{}{}", self.base_url, path);
        log::debug!("meeting api request: {url}");
        url
    }

    fn apply_auth(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.auth {
            AuthMode::Cookie => {
                #[cfg(target_arch = "wasm32")]
                {
                    builder.fetch_credentials_include()
                }
                #[cfg(not(target_arch = "wasm32"))]
                {
                    builder
                }
            }
            AuthMode::Bearer(token) => {
                builder.header(reqwest::header::AUTHORIZATION, format!("Bearer {token}"))
            }
        }
    }
}

/// Describe a failed response body. Bodies in the `APIResponse<APIError>`
/// envelope are reduced to `[CODE] message`; anything else is kept as-is.
pub(crate) fn error_detail(body: String) -> String {
    match serde_json::from_str::<APIResponse<APIError>>(&body) {
        Ok(envelope) if !envelope.success => envelope.result.to_string(),
        _ => body,
    }
}

/// Parse a standard `APIResponse<T>` body, returning `T` on success or
/// mapping the error to [`ApiError`].
pub(crate) async fn parse_api_response<T: serde::de::DeserializeOwned + serde::Serialize>(
    response: reqwest::Response,
) -> Result<T, ApiError> {
    let status = response.status().as_u16();
    match status {
        200 | 201 => {
            let wrapper: APIResponse<T> = response.json().await?;
            Ok(wrapper.result)
        }
        404 => {
            let text = response.text().await.unwrap_or_default();
            Err(ApiError::NotFound(error_detail(text)))
        }
        _ => {
            let body = error_detail(response.text().await.unwrap_or_default());
            log::warn!("meeting api returned {status}: {body}");
            Err(ApiError::ServerError { status, body })
        }
    }
}

/// Parse a response where we only care about the status code, not the body.
pub(crate) async fn parse_status_only(response: reqwest::Response) -> Result<(), ApiError> {
    let status = response.status().as_u16();
    match status {
        200..=299 => Ok(()),
        404 => {
            let text = response.text().await.unwrap_or_default();
            Err(ApiError::NotFound(error_detail(text)))
        }
        _ => {
            let body = error_detail(response.text().await.unwrap_or_default());
            log::warn!("meeting api returned {status}: {body}");
            Err(ApiError::ServerError { status, body })
        }
    }
}
