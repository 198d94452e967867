use serde::{Deserialize, Serialize};

/// A bookable offering shown on the rooms / events / tour pages. This is
/// also the payload stashed under `pendingBooking` when an unauthenticated
/// visitor selects one, so the serialized shape is part of the storage
/// contract.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct BookingPackage {
    #[serde(rename = "packageId")]
    pub package_id: String,
    #[serde(rename = "packageName")]
    pub package_name: String,
    #[serde(default)]
    pub price: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

impl BookingPackage {
    pub fn new(package_id: &str, package_name: &str) -> Self {
        Self {
            package_id: package_id.to_string(),
            package_name: package_name.to_string(),
            price: None,
            image: None,
        }
    }

    pub fn with_price(package_id: &str, package_name: &str, price: &str, image: &str) -> Self {
        Self {
            package_id: package_id.to_string(),
            package_name: package_name.to_string(),
            price: Some(price.to_string()),
            image: Some(image.to_string()),
        }
    }
}

/// Wire payload of POST /api/bookings/create.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct BookingRequest {
    #[serde(rename = "packageId")]
    pub package_id: String,
    #[serde(rename = "packageName")]
    pub package_name: String,
    #[serde(rename = "customerName")]
    pub customer_name: String,
    #[serde(rename = "customerEmail")]
    pub customer_email: String,
    #[serde(rename = "customerPhone")]
    pub customer_phone: String,
    #[serde(rename = "eventDate")]
    pub event_date: String,
    #[serde(rename = "guestCount")]
    pub guest_count: String,
    #[serde(rename = "specialRequests")]
    pub special_requests: String,
}

/// A booking as returned by GET /api/bookings/my-bookings.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct BookingRecord {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default, rename = "packageName")]
    pub package_name: Option<String>,
    #[serde(default, rename = "eventDate")]
    pub event_date: Option<String>,
    #[serde(default, rename = "guestCount")]
    pub guest_count: Option<String>,
    #[serde(default, rename = "bookingStatus")]
    pub booking_status: Option<String>,
}
