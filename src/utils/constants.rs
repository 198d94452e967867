/// Backend base URL.
/// Configured at compile time:
/// - Development: http://localhost:8080 (default)
/// - Production: via BACKEND_URL env var (see build.rs / .env)
pub const BACKEND_URL: &str = match option_env!("BACKEND_URL") {
    Some(url) => url,
    None => "http://localhost:8080",
};

// Browser storage keys. Shared with the backend integration tests, so the
// strings must stay byte-identical.
pub const STORAGE_KEY_TOKEN: &str = "token";
pub const STORAGE_KEY_USER_ROLE: &str = "userRole";
pub const STORAGE_KEY_USER_FULL_NAME: &str = "userFullName";
pub const STORAGE_KEY_USER_ID: &str = "userId";
pub const STORAGE_KEY_USERNAME: &str = "username";
pub const STORAGE_KEY_SESSION_ID: &str = "sessionId";
pub const STORAGE_KEY_SESSION_MANAGED: &str = "sessionManaged";
pub const STORAGE_KEY_JUST_LOGGED_IN: &str = "justLoggedIn";
pub const STORAGE_KEY_PENDING_BOOKING: &str = "pendingBooking";

/// Window event dispatched after a successful login so mounted components
/// (navbar) re-read the session without a page reload.
pub const LOGIN_EVENT: &str = "userLogin";

/// Delay before a stashed booking is resumed after returning from login.
pub const PENDING_BOOKING_RESUME_DELAY_MS: u32 = 400;

/// Delay before the register panel flips back to login after success.
pub const REGISTER_SWITCH_DELAY_MS: u32 = 2_000;
