use crate::models::{LoginRequest, LoginResponse, ProfileResponse, RegisterRequest};
use crate::services::api_client::{self, ApiError};

/// Perform login against the villa backend.
pub async fn login(email: &str, password: &str) -> Result<LoginResponse, ApiError> {
    let body = LoginRequest {
        username: email.to_string(),
        password: password.to_string(),
    };
    api_client::post_json("/api/auth/login", &body).await
}

/// Register a new account. The backend keys accounts by username (the
/// email) and stores the display name separately.
pub async fn register(name: &str, email: &str, password: &str) -> Result<(), ApiError> {
    let body = RegisterRequest {
        username: email.to_string(),
        password: password.to_string(),
        full_name: name.to_string(),
    };
    api_client::post_ok("/api/auth/register", &body).await
}

/// Best-effort server-side logout. The caller hands over the token it read
/// before wiping local state, and ignores the result beyond logging.
pub async fn logout_remote(token: &str) -> Result<(), ApiError> {
    api_client::post_empty_with_token("/api/auth/logout", token).await
}

/// Best-effort profile fetch used to pre-fill booking forms.
pub async fn fetch_profile() -> Result<ProfileResponse, ApiError> {
    api_client::get_json("/api/auth/profile").await
}

/// Lightweight token check exposed by the bookings API.
pub async fn check_auth() -> Result<(), ApiError> {
    api_client::get_json::<serde_json::Value>("/api/bookings/auth-check")
        .await
        .map(|_| ())
}

/// Session keep-alive for managed admin/manager sessions.
pub async fn heartbeat() -> Result<(), ApiError> {
    api_client::post_empty("/api/auth/heartbeat").await
}
