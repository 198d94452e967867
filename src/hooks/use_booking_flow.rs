use gloo_timers::callback::Timeout;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::models::{BookingPackage, BookingRequest, ProfileResponse};
use crate::services::{auth_service, booking_service, ApiError};
use crate::stores::session_store::{self, Session};
use crate::utils::PENDING_BOOKING_RESUME_DELAY_MS;
use crate::Route;

/// Stages of a booking page. "Failed" from the site's flow is represented
/// as FormOpen with a non-empty submit error: the form stays open either way.
#[derive(Clone, Copy, PartialEq)]
pub enum BookingStage {
    Browsing,
    /// Profile fetch in flight after an authenticated selection.
    AuthCheckPending,
    /// Unauthenticated selection stashed; login prompt showing.
    AwaitingLogin,
    FormOpen,
    Submitting,
    Success,
}

/// Values collected by the reservation form at submit time.
#[derive(Clone, PartialEq, Default)]
pub struct BookingFormData {
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub event_date: String,
    pub guest_count: String,
    pub special_requests: String,
}

pub struct UseBookingFlowHandle {
    pub stage: UseStateHandle<BookingStage>,
    pub selected: UseStateHandle<Option<BookingPackage>>,
    pub prefill_name: UseStateHandle<String>,
    pub prefill_email: UseStateHandle<String>,
    pub submit_error: UseStateHandle<String>,
    pub select_package: Callback<BookingPackage>,
    pub dismiss_prompt: Callback<()>,
    pub close_form: Callback<()>,
    pub submit: Callback<BookingFormData>,
    pub reset: Callback<()>,
}

/// Booking-form identity pre-fill. Name: fetched profile fields, stored
/// display name, local part of an email-shaped stored username, the literal
/// "User". Email: fetched profile email, stored username, empty.
pub fn prefill_identity(
    profile: Option<&ProfileResponse>,
    stored_name: Option<&str>,
    stored_username: Option<&str>,
) -> (String, String) {
    let name = profile
        .and_then(|p| {
            p.full_name
                .as_deref()
                .filter(|s| !s.is_empty())
                .or_else(|| p.name.as_deref().filter(|s| !s.is_empty()))
        })
        .map(String::from)
        .or_else(|| {
            stored_name
                .filter(|s| !s.is_empty() && *s != "undefined")
                .map(String::from)
        })
        .or_else(|| {
            stored_username
                .filter(|u| u.contains('@'))
                .and_then(|u| u.split('@').next())
                .map(String::from)
        })
        .unwrap_or_else(|| "User".to_string());

    let email = profile
        .and_then(|p| p.email.as_deref().filter(|s| !s.is_empty()))
        .map(String::from)
        .or_else(|| stored_username.filter(|s| !s.is_empty()).map(String::from))
        .unwrap_or_default();

    (name, email)
}

#[hook]
pub fn use_booking_flow() -> UseBookingFlowHandle {
    let navigator = use_navigator().expect("booking page rendered outside the router");
    let stage = use_state(|| BookingStage::Browsing);
    let selected = use_state(|| None::<BookingPackage>);
    let prefill_name = use_state(String::new);
    let prefill_email = use_state(String::new);
    let submit_error = use_state(String::new);

    let select_package = {
        let stage = stage.clone();
        let selected = selected.clone();
        let prefill_name = prefill_name.clone();
        let prefill_email = prefill_email.clone();
        Callback::from(move |package: BookingPackage| {
            let session = Session::load();
            if !session.is_logged_in() {
                // Stash the offering so it survives the trip through /auth.
                session_store::stash_pending_booking(&package);
                selected.set(Some(package));
                stage.set(BookingStage::AwaitingLogin);
                return;
            }

            selected.set(Some(package.clone()));
            stage.set(BookingStage::AuthCheckPending);

            let stage = stage.clone();
            let selected = selected.clone();
            let prefill_name = prefill_name.clone();
            let prefill_email = prefill_email.clone();
            wasm_bindgen_futures::spawn_local(async move {
                // The stored token may have expired since the last visit; a
                // definitive auth rejection falls back to the stash-and-login
                // path. Any other outcome is ignored.
                if let Err(ApiError::Auth) = auth_service::check_auth().await {
                    log::warn!("⚠️ Stored token rejected, asking for login");
                    session_store::stash_pending_booking(&package);
                    selected.set(Some(package));
                    stage.set(BookingStage::AwaitingLogin);
                    return;
                }

                // Best effort: a failed profile fetch never blocks the form.
                let profile = match auth_service::fetch_profile().await {
                    Ok(profile) => Some(profile),
                    Err(e) => {
                        log::warn!("⚠️ Profile fetch failed, using stored identity: {}", e);
                        None
                    }
                };
                let (name, email) = prefill_identity(
                    profile.as_ref(),
                    session.display_name.as_deref(),
                    session.username.as_deref(),
                );
                prefill_name.set(name);
                prefill_email.set(email);
                stage.set(BookingStage::FormOpen);
            });
        })
    };

    // Resume a booking stashed before a login redirect. The timer fires on
    // every mount; it only does something when the one-shot flag and the
    // stashed payload are both present.
    {
        let select_package = select_package.clone();
        use_effect_with((), move |_| {
            Timeout::new(PENDING_BOOKING_RESUME_DELAY_MS, move || {
                if let Some(package) = session_store::take_pending_booking() {
                    select_package.emit(package);
                }
            })
            .forget();
            || ()
        });
    }

    let dismiss_prompt = {
        let stage = stage.clone();
        let selected = selected.clone();
        Callback::from(move |_| {
            selected.set(None);
            stage.set(BookingStage::Browsing);
        })
    };

    let close_form = {
        let stage = stage.clone();
        let selected = selected.clone();
        let submit_error = submit_error.clone();
        Callback::from(move |_| {
            selected.set(None);
            submit_error.set(String::new());
            stage.set(BookingStage::Browsing);
        })
    };

    let submit = {
        let navigator = navigator.clone();
        let stage = stage.clone();
        let selected = selected.clone();
        let submit_error = submit_error.clone();
        Callback::from(move |form: BookingFormData| {
            let Some(package) = (*selected).clone() else {
                return;
            };
            let navigator = navigator.clone();
            let stage = stage.clone();
            let submit_error = submit_error.clone();
            submit_error.set(String::new());
            stage.set(BookingStage::Submitting);

            let booking = BookingRequest {
                package_id: package.package_id,
                package_name: package.package_name,
                customer_name: form.customer_name,
                customer_email: form.customer_email,
                customer_phone: form.customer_phone,
                event_date: form.event_date,
                guest_count: form.guest_count,
                special_requests: form.special_requests,
            };

            wasm_bindgen_futures::spawn_local(async move {
                match booking_service::create_booking(&booking).await {
                    Ok(()) => {
                        log::info!("✅ Booking created: {}", booking.package_name);
                        stage.set(BookingStage::Success);
                    }
                    Err(ApiError::Auth) => {
                        // Token went stale mid-flow; back through login.
                        log::error!("❌ Booking rejected: authentication failed");
                        navigator.push(&Route::Auth);
                    }
                    Err(e @ ApiError::Unreachable) => {
                        submit_error.set(e.to_string());
                        stage.set(BookingStage::FormOpen);
                    }
                    Err(e) => {
                        log::error!("❌ Booking failed: {}", e);
                        submit_error.set(format!("Booking failed: {}", e));
                        stage.set(BookingStage::FormOpen);
                    }
                }
            });
        })
    };

    let reset = {
        let stage = stage.clone();
        let selected = selected.clone();
        let submit_error = submit_error.clone();
        Callback::from(move |_| {
            selected.set(None);
            submit_error.set(String::new());
            stage.set(BookingStage::Browsing);
        })
    };

    UseBookingFlowHandle {
        stage,
        selected,
        prefill_name,
        prefill_email,
        submit_error,
        select_package,
        dismiss_prompt,
        close_form,
        submit,
        reset,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(full_name: Option<&str>, name: Option<&str>, email: Option<&str>) -> ProfileResponse {
        ProfileResponse {
            full_name: full_name.map(String::from),
            name: name.map(String::from),
            email: email.map(String::from),
            username: None,
            phone: None,
        }
    }

    #[test]
    fn profile_fields_win() {
        let p = profile(Some("Jane Doe"), None, Some("jane@wegavilla.com"));
        let (name, email) = prefill_identity(Some(&p), Some("Stored"), Some("stored@x.com"));
        assert_eq!(name, "Jane Doe");
        assert_eq!(email, "jane@wegavilla.com");
    }

    #[test]
    fn profile_name_field_backs_up_full_name() {
        let p = profile(None, Some("Jane"), None);
        let (name, email) = prefill_identity(Some(&p), None, Some("stored@x.com"));
        assert_eq!(name, "Jane");
        // profile had no email: stored username steps in
        assert_eq!(email, "stored@x.com");
    }

    #[test]
    fn stored_display_name_is_second_choice() {
        let (name, _) = prefill_identity(None, Some("Stored Name"), Some("user@x.com"));
        assert_eq!(name, "Stored Name");
    }

    #[test]
    fn email_local_part_is_third_choice() {
        let (name, email) = prefill_identity(None, None, Some("jane.doe@wegavilla.com"));
        assert_eq!(name, "jane.doe");
        assert_eq!(email, "jane.doe@wegavilla.com");
    }

    #[test]
    fn literal_user_and_empty_email_are_the_floor() {
        let (name, email) = prefill_identity(None, None, None);
        assert_eq!(name, "User");
        assert_eq!(email, "");
        // a non-email username cannot provide a name, but is still the email fallback
        let (name, email) = prefill_identity(None, None, Some("plainuser"));
        assert_eq!(name, "User");
        assert_eq!(email, "plainuser");
    }
}
