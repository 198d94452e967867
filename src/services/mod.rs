// Services: API communication only. State lives in stores and hooks.

pub mod api_client;
pub mod auth_service;
pub mod booking_service;
pub mod contact_service;

pub use api_client::ApiError;
