use gloo_net::http::{Request, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

use crate::utils::storage;
use crate::utils::{
    BACKEND_URL, STORAGE_KEY_TOKEN, STORAGE_KEY_USERNAME, STORAGE_KEY_USER_ROLE,
};

/// Categorized API failure. `Display` carries the user-facing message, so UI
/// code can show an error with `format!("{}", err)` and still branch on the
/// category where the flow demands it (booking submit, guards).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Server is unreachable. Please check if the backend is running.")]
    Unreachable,
    #[error("Authentication failed. Please log in again.")]
    Auth,
    #[error("You do not have permission to perform this action.")]
    Forbidden,
    #[error("The requested resource was not found.")]
    NotFound,
    #[error("Internal server error. Please try again later.")]
    Server,
    /// Server-supplied message, surfaced verbatim.
    #[error("{0}")]
    Http(String),
    #[error("Invalid JSON response from server")]
    Parse,
}

fn url(endpoint: &str) -> String {
    format!("{}{}", BACKEND_URL, endpoint)
}

/// Attaches the bearer token when one is stored.
fn with_auth(builder: RequestBuilder) -> RequestBuilder {
    match storage::get_string(STORAGE_KEY_TOKEN) {
        Some(token) if !token.is_empty() => {
            builder.header("Authorization", &format!("Bearer {}", token))
        }
        _ => builder,
    }
}

/// Maps a non-ok response to an error category. A 401 also clears the stored
/// credentials so a stale token cannot keep gating the UI open.
async fn error_from(response: Response) -> ApiError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let server_message = serde_json::from_str::<serde_json::Value>(&body)
        .ok()
        .and_then(|v| {
            v.get("error")
                .or_else(|| v.get("message"))
                .and_then(|m| m.as_str())
                .map(String::from)
        })
        .or_else(|| (!body.is_empty()).then(|| body.clone()));

    match status {
        401 => {
            log::error!("❌ Authentication error: invalid or expired token");
            storage::remove(STORAGE_KEY_TOKEN);
            storage::remove(STORAGE_KEY_USER_ROLE);
            storage::remove(STORAGE_KEY_USERNAME);
            ApiError::Auth
        }
        403 => ApiError::Forbidden,
        404 => ApiError::NotFound,
        s if s >= 500 => {
            log::error!("❌ Server error {}: {:?}", s, server_message);
            ApiError::Server
        }
        s => {
            log::error!("❌ HTTP {} error: {:?}", s, server_message);
            ApiError::Http(server_message.unwrap_or_else(|| format!("HTTP error: {}", s)))
        }
    }
}

async fn send(request: Request) -> Result<Response, ApiError> {
    log::info!("📤 API request: {}", request.url());
    let response = request.send().await.map_err(|e| {
        log::error!("❌ Network error: {}", e);
        ApiError::Unreachable
    })?;
    if !response.ok() {
        return Err(error_from(response).await);
    }
    Ok(response)
}

pub async fn get_json<T: DeserializeOwned>(endpoint: &str) -> Result<T, ApiError> {
    let request = with_auth(Request::get(&url(endpoint)))
        .build()
        .map_err(|e| {
            log::error!("❌ Request build error: {}", e);
            ApiError::Unreachable
        })?;
    let response = send(request).await?;
    response.json::<T>().await.map_err(|e| {
        log::error!("❌ Parse error: {}", e);
        ApiError::Parse
    })
}

pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    endpoint: &str,
    body: &B,
) -> Result<T, ApiError> {
    let request = with_auth(Request::post(&url(endpoint)))
        .json(body)
        .map_err(|e| {
            log::error!("❌ Request build error: {}", e);
            ApiError::Unreachable
        })?;
    let response = send(request).await?;
    response.json::<T>().await.map_err(|e| {
        log::error!("❌ Parse error: {}", e);
        ApiError::Parse
    })
}

/// POST where the caller only cares that the server accepted the request.
pub async fn post_ok<B: Serialize>(endpoint: &str, body: &B) -> Result<(), ApiError> {
    let request = with_auth(Request::post(&url(endpoint)))
        .json(body)
        .map_err(|e| {
            log::error!("❌ Request build error: {}", e);
            ApiError::Unreachable
        })?;
    send(request).await.map(|_| ())
}

/// Bodyless POST, used by the session heartbeat.
pub async fn post_empty(endpoint: &str) -> Result<(), ApiError> {
    let request = with_auth(Request::post(&url(endpoint)))
        .build()
        .map_err(|e| {
            log::error!("❌ Request build error: {}", e);
            ApiError::Unreachable
        })?;
    send(request).await.map(|_| ())
}

/// Bodyless POST with an explicit bearer token. Needed when the call races a
/// local credential wipe (logout clears storage before the future runs).
pub async fn post_empty_with_token(endpoint: &str, token: &str) -> Result<(), ApiError> {
    let request = Request::post(&url(endpoint))
        .header("Authorization", &format!("Bearer {}", token))
        .build()
        .map_err(|e| {
            log::error!("❌ Request build error: {}", e);
            ApiError::Unreachable
        })?;
    send(request).await.map(|_| ())
}
