pub mod auth;
pub mod booking;
pub mod role;

pub use auth::{ContactRequest, LoginRequest, LoginResponse, ProfileResponse, RegisterRequest};
pub use booking::{BookingPackage, BookingRecord, BookingRequest};
pub use role::{authorize, post_login_landing, GuardDecision, Landing, RedirectTarget, Role, RouteArea};
