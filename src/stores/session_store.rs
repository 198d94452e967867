use web_sys::CustomEvent;

use crate::models::{BookingPackage, LoginResponse};
use crate::utils::jwt;
use crate::utils::storage;
use crate::utils::{
    LOGIN_EVENT, STORAGE_KEY_JUST_LOGGED_IN, STORAGE_KEY_PENDING_BOOKING, STORAGE_KEY_SESSION_ID,
    STORAGE_KEY_SESSION_MANAGED, STORAGE_KEY_TOKEN, STORAGE_KEY_USERNAME,
    STORAGE_KEY_USER_FULL_NAME, STORAGE_KEY_USER_ID, STORAGE_KEY_USER_ROLE,
};

/// Snapshot of the persisted session. Guards and pages read this instead of
/// poking at individual storage keys.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Session {
    pub token: Option<String>,
    pub user_id: Option<String>,
    pub role: Option<String>,
    pub display_name: Option<String>,
    pub username: Option<String>,
    pub session_id: Option<String>,
    pub session_managed: bool,
}

impl Session {
    /// Loads the session from storage. Without a token every other field is
    /// treated as absent, whatever leftovers storage still holds.
    pub fn load() -> Session {
        let token = storage::get_string(STORAGE_KEY_TOKEN).filter(|t| !t.is_empty());
        if token.is_none() {
            return Session::default();
        }
        Session {
            token,
            user_id: storage::get_string(STORAGE_KEY_USER_ID),
            role: storage::get_string(STORAGE_KEY_USER_ROLE),
            display_name: storage::get_string(STORAGE_KEY_USER_FULL_NAME),
            username: storage::get_string(STORAGE_KEY_USERNAME),
            session_id: storage::get_string(STORAGE_KEY_SESSION_ID),
            session_managed: storage::get_string(STORAGE_KEY_SESSION_MANAGED)
                .map(|v| v == "true")
                .unwrap_or(false),
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.token.is_some()
    }

    /// Name shown in the navbar. Older site versions managed to persist the
    /// literal string "undefined"; treat it as missing.
    pub fn navbar_name(&self) -> String {
        match self.display_name.as_deref() {
            Some(name) if !name.is_empty() && name != "undefined" => name.to_string(),
            _ => "User".to_string(),
        }
    }
}

/// Role to persist for a login response: the response body wins, then the
/// bearer token payload, then the "USER" default. Token decode failure is
/// logged and falls through to the default.
pub fn derive_role(explicit: Option<&str>, token: &str) -> String {
    if let Some(role) = explicit {
        if !role.is_empty() {
            return role.to_string();
        }
    }
    match jwt::decode_payload(token) {
        Ok(claims) => match claims.role() {
            Some(role) => role.to_string(),
            None => "USER".to_string(),
        },
        Err(e) => {
            log::warn!("⚠️ Could not decode token payload: {}", e);
            "USER".to_string()
        }
    }
}

/// Display name for a login response: explicit name fields first, then the
/// local part of an email-shaped username, then the literal "User".
pub fn derive_display_name(
    full_name: Option<&str>,
    name: Option<&str>,
    display_name: Option<&str>,
    response_username: Option<&str>,
    login_email: &str,
) -> String {
    for candidate in [full_name, name, display_name].into_iter().flatten() {
        if !candidate.is_empty() {
            return candidate.to_string();
        }
    }
    let username = response_username
        .filter(|u| !u.is_empty())
        .unwrap_or(login_email);
    if let Some(local) = username.split('@').next().filter(|_| username.contains('@')) {
        return local.to_string();
    }
    if username.is_empty() {
        "User".to_string()
    } else {
        username.to_string()
    }
}

/// Persists a successful login and broadcasts the login event. Returns the
/// stored role so the caller can route by it.
pub fn store_login(response: &LoginResponse, login_email: &str) -> String {
    storage::set_string(STORAGE_KEY_TOKEN, &response.token);

    if let Some(user_id) = response.user_id_string() {
        storage::set_string(STORAGE_KEY_USER_ID, &user_id);
        log::info!("💾 Stored user id: {}", user_id);
    }

    // Managed sessions only exist for admin/manager accounts; both fields
    // arrive together or not at all.
    if let (Some(session_id), Some(managed)) = (&response.session_id, response.session_managed) {
        log::info!("🔐 Session management enabled for this user");
        storage::set_string(STORAGE_KEY_SESSION_ID, session_id);
        storage::set_string(STORAGE_KEY_SESSION_MANAGED, &managed.to_string());
    }

    let role = derive_role(response.role.as_deref(), &response.token);
    storage::set_string(STORAGE_KEY_USER_ROLE, &role);

    let display_name = derive_display_name(
        response.full_name.as_deref(),
        response.name.as_deref(),
        response.display_name.as_deref(),
        response.username.as_deref(),
        login_email,
    );
    storage::set_string(STORAGE_KEY_USER_FULL_NAME, &display_name);
    storage::set_string(STORAGE_KEY_USERNAME, login_email);

    // One-shot flag, consumed by the pending-booking resume.
    storage::set_string(STORAGE_KEY_JUST_LOGGED_IN, "true");

    log::info!("✅ Login stored: {} ({})", display_name, role);
    broadcast_login();
    role
}

/// Clears the session keys and the one-shot login flag. A stashed pending
/// booking survives: it belongs to the not-yet-logged-in flow.
pub fn clear() {
    for key in [
        STORAGE_KEY_TOKEN,
        STORAGE_KEY_USER_ROLE,
        STORAGE_KEY_USER_FULL_NAME,
        STORAGE_KEY_USER_ID,
        STORAGE_KEY_USERNAME,
        STORAGE_KEY_SESSION_ID,
        STORAGE_KEY_SESSION_MANAGED,
        STORAGE_KEY_JUST_LOGGED_IN,
    ] {
        storage::remove(key);
    }
    log::info!("👋 Session cleared");
}

/// Stashes the selected offering for an unauthenticated visitor.
pub fn stash_pending_booking(package: &BookingPackage) {
    if let Err(e) = storage::save_json(STORAGE_KEY_PENDING_BOOKING, package) {
        log::warn!("⚠️ Could not stash pending booking: {}", e);
    } else {
        log::info!("💾 Pending booking stashed: {}", package.package_name);
    }
}

/// Consumes a stashed booking after a fresh login. Both keys are removed no
/// matter what; an unparseable payload aborts the resume with a warning.
/// Returns `None` unless the one-shot flag and a stashed payload are both
/// present and the payload decodes.
pub fn take_pending_booking() -> Option<BookingPackage> {
    let just_logged_in = storage::get_string(STORAGE_KEY_JUST_LOGGED_IN)
        .map(|v| v == "true")
        .unwrap_or(false);
    if !just_logged_in {
        return None;
    }
    let raw = storage::get_string(STORAGE_KEY_PENDING_BOOKING)?;

    storage::remove(STORAGE_KEY_PENDING_BOOKING);
    storage::remove(STORAGE_KEY_JUST_LOGGED_IN);

    match serde_json::from_str::<BookingPackage>(&raw) {
        Ok(package) => {
            log::info!("📦 Resuming pending booking: {}", package.package_name);
            Some(package)
        }
        Err(e) => {
            log::warn!("⚠️ Discarding unparseable pending booking: {}", e);
            None
        }
    }
}

/// Notifies mounted components (navbar) that the session changed.
pub fn broadcast_login() {
    if let Some(window) = web_sys::window() {
        if let Ok(event) = CustomEvent::new(LOGIN_EVENT) {
            if window.dispatch_event(&event).is_err() {
                log::warn!("⚠️ Could not dispatch {} event", LOGIN_EVENT);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;
    use base64::Engine;

    fn token_with_payload(json: &str) -> String {
        format!("hdr.{}.sig", URL_SAFE_NO_PAD.encode(json))
    }

    #[test]
    fn explicit_role_wins_over_token() {
        let token = token_with_payload(r#"{"role":"GUIDE"}"#);
        assert_eq!(derive_role(Some("ADMIN"), &token), "ADMIN");
    }

    #[test]
    fn role_falls_back_to_token_payload() {
        let token = token_with_payload(r#"{"roles":["MANAGER"]}"#);
        assert_eq!(derive_role(None, &token), "MANAGER");
        assert_eq!(derive_role(Some(""), &token), "MANAGER");
    }

    #[test]
    fn undecodable_token_defaults_to_user() {
        assert_eq!(derive_role(None, "abc.def.ghi"), "USER");
        assert_eq!(derive_role(None, "not-a-jwt"), "USER");
    }

    #[test]
    fn token_without_role_claim_defaults_to_user() {
        let token = token_with_payload(r#"{"sub":"1"}"#);
        assert_eq!(derive_role(None, &token), "USER");
    }

    #[test]
    fn display_name_prefers_response_fields_in_order() {
        assert_eq!(
            derive_display_name(Some("Full"), Some("Name"), Some("Display"), None, "a@b.com"),
            "Full"
        );
        assert_eq!(
            derive_display_name(None, Some("Name"), Some("Display"), None, "a@b.com"),
            "Name"
        );
        assert_eq!(
            derive_display_name(None, None, Some("Display"), None, "a@b.com"),
            "Display"
        );
    }

    #[test]
    fn display_name_falls_back_to_email_local_part() {
        assert_eq!(
            derive_display_name(None, None, None, None, "jane.doe@wegavilla.com"),
            "jane.doe"
        );
        assert_eq!(
            derive_display_name(None, None, None, Some("guest@example.com"), "ignored@x.com"),
            "guest"
        );
    }

    #[test]
    fn display_name_last_resorts() {
        // username without an @ is used as-is
        assert_eq!(derive_display_name(None, None, None, None, "plainuser"), "plainuser");
        // nothing at all
        assert_eq!(derive_display_name(None, None, None, None, ""), "User");
    }
}
