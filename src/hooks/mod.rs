pub mod use_auth;
pub mod use_booking_flow;
pub mod use_login_status;

pub use use_auth::{use_auth, RegisterSubmission, UseAuthHandle};
pub use use_booking_flow::{
    use_booking_flow, BookingFormData, BookingStage, UseBookingFlowHandle,
};
pub use use_login_status::use_login_status;
