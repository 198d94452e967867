use crate::models::{BookingRecord, BookingRequest};
use crate::services::api_client::{self, ApiError};

/// Submit a booking. The backend replies with the stored record; the client
/// only needs success/failure, so the body is left untyped.
pub async fn create_booking(booking: &BookingRequest) -> Result<(), ApiError> {
    api_client::post_json::<_, serde_json::Value>("/api/bookings/create", booking)
        .await
        .map(|_| ())
}

/// Booking history for the client dashboard.
pub async fn my_bookings() -> Result<Vec<BookingRecord>, ApiError> {
    api_client::get_json("/api/bookings/my-bookings").await
}
