//! Request helpers for the inventory service
//!
//! Every API module goes through [`get`], [`post`], [`put`] and friends so
//! URL building, the bearer header and status handling live in one place.

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::system::auth::storage::StoredSession;

/// Port the inventory service listens on.
pub const API_PORT: u16 = 3000;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Nicht angemeldet")]
    NotAuthenticated,
    /// 401/403: the server refused the credentials.
    #[error("Zugriff verweigert ({0})")]
    Rejected(u16),
    #[error("Serverfehler: {0}")]
    Status(u16),
    #[error("Netzwerkfehler: {0}")]
    Network(String),
    #[error("Anfrage konnte nicht erstellt werden: {0}")]
    Encode(String),
    #[error("Ungültige Antwort: {0}")]
    Decode(String),
}

impl ApiError {
    /// True when the server answered and refused the credentials, as opposed
    /// to the server being unreachable or failing.
    pub fn is_rejection(&self) -> bool {
        matches!(self, ApiError::NotAuthenticated | ApiError::Rejected(_))
    }
}

/// Maps an HTTP status to success or the matching error.
pub fn check_status(status: u16) -> Result<(), ApiError> {
    match status {
        200..=299 => Ok(()),
        401 | 403 => Err(ApiError::Rejected(status)),
        other => Err(ApiError::Status(other)),
    }
}

/// Which credentials a request carries.
#[derive(Debug, Clone, Copy)]
pub enum Auth<'a> {
    Anonymous,
    /// Access token of the stored session.
    Session,
    Token(&'a str),
}

impl Auth<'_> {
    fn bearer(&self) -> Result<Option<String>, ApiError> {
        let token = match self {
            Auth::Anonymous => return Ok(None),
            Auth::Session => StoredSession::access_token().ok_or(ApiError::NotAuthenticated)?,
            Auth::Token(token) => token.to_string(),
        };
        Ok(Some(format!("Bearer {}", token)))
    }
}

/// Get the base URL for API requests
///
/// Built from the current window location, with the port replaced by
/// [`API_PORT`].
///
/// # Returns
/// - API base URL like "http://localhost:3000"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    base_url(&protocol, &hostname)
}

fn base_url(protocol: &str, hostname: &str) -> String {
    format!("{}//{}:{}", protocol, hostname, API_PORT)
}

/// Build a full API URL from a path starting with "/api/"
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

async fn send<B: Serialize>(
    builder: RequestBuilder,
    auth: Auth<'_>,
    body: Option<&B>,
) -> Result<Response, ApiError> {
    let builder = match auth.bearer()? {
        Some(header) => builder.header("Authorization", &header),
        None => builder,
    };
    let request: Request = match body {
        Some(body) => builder.json(body),
        None => builder.build(),
    }
    .map_err(|e| ApiError::Encode(e.to_string()))?;

    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    check_status(response.status())?;
    Ok(response)
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

pub async fn get<T: DeserializeOwned>(path: &str, auth: Auth<'_>) -> Result<T, ApiError> {
    let response = send::<()>(Request::get(&api_url(path)), auth, None).await?;
    decode(response).await
}

pub async fn post<B: Serialize, T: DeserializeOwned>(
    path: &str,
    auth: Auth<'_>,
    body: &B,
) -> Result<T, ApiError> {
    let response = send(Request::post(&api_url(path)), auth, Some(body)).await?;
    decode(response).await
}

/// POST whose response body is ignored. `body` may be `None` for action endpoints.
pub async fn post_no_content<B: Serialize>(
    path: &str,
    auth: Auth<'_>,
    body: Option<&B>,
) -> Result<(), ApiError> {
    send(Request::post(&api_url(path)), auth, body).await?;
    Ok(())
}

pub async fn put<B: Serialize, T: DeserializeOwned>(
    path: &str,
    auth: Auth<'_>,
    body: &B,
) -> Result<T, ApiError> {
    let response = send(Request::put(&api_url(path)), auth, Some(body)).await?;
    decode(response).await
}
