pub mod about;
pub mod admin_dashboard;
pub mod auth;
pub mod client_dashboard;
pub mod contact;
pub mod event_booking;
pub mod facilities;
pub mod gallery;
pub mod guide_dashboard;
pub mod guide_detail;
pub mod home;
pub mod rooms_booking;
pub mod tour_book;
pub mod travel;
