use crate::models::ContactRequest;
use crate::services::api_client::{self, ApiError};

pub async fn send_message(name: &str, email: &str, message: &str) -> Result<(), ApiError> {
    let body = ContactRequest {
        name: name.to_string(),
        email: email.to_string(),
        message: message.to_string(),
    };
    api_client::post_ok("/api/contact", &body).await
}
