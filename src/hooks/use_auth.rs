use gloo_timers::callback::Timeout;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::models::{post_login_landing, Landing};
use crate::services::auth_service;
use crate::stores::session_store;
use crate::utils::validation::RegisterValidation;
use crate::utils::REGISTER_SWITCH_DELAY_MS;
use crate::Route;

/// Values collected by the register panel at submit time.
#[derive(Clone, PartialEq)]
pub struct RegisterSubmission {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub agreed: bool,
}

pub struct UseAuthHandle {
    /// true = login panel, false = register panel.
    pub is_login_panel: UseStateHandle<bool>,
    pub login_error: UseStateHandle<String>,
    pub register_error: UseStateHandle<String>,
    pub register_success: UseStateHandle<String>,
    pub login: Callback<(String, String)>,
    pub register: Callback<RegisterSubmission>,
}

#[hook]
pub fn use_auth() -> UseAuthHandle {
    let navigator = use_navigator().expect("auth page rendered outside the router");
    let is_login_panel = use_state(|| true);
    let login_error = use_state(String::new);
    let register_error = use_state(String::new);
    let register_success = use_state(String::new);

    let login = {
        let navigator = navigator.clone();
        let login_error = login_error.clone();
        Callback::from(move |(email, password): (String, String)| {
            let navigator = navigator.clone();
            let login_error = login_error.clone();
            login_error.set(String::new());
            wasm_bindgen_futures::spawn_local(async move {
                match auth_service::login(&email, &password).await {
                    Ok(response) => {
                        let role = session_store::store_login(&response, &email);
                        match post_login_landing(&role) {
                            Landing::AdminDashboard => navigator.push(&Route::AdminDashboard),
                            Landing::GuideDashboard => navigator.push(&Route::GuideDashboard),
                            Landing::Home => navigator.push(&Route::Home),
                        }
                    }
                    Err(e) => {
                        log::error!("❌ Login failed: {}", e);
                        login_error.set(e.to_string());
                    }
                }
            });
        })
    };

    let register = {
        let is_login_panel = is_login_panel.clone();
        let register_error = register_error.clone();
        let register_success = register_success.clone();
        Callback::from(move |submission: RegisterSubmission| {
            let is_login_panel = is_login_panel.clone();
            let register_error = register_error.clone();
            let register_success = register_success.clone();
            register_error.set(String::new());
            register_success.set(String::new());

            if !submission.agreed {
                register_error.set("You must agree to the terms & conditions".to_string());
                return;
            }
            let errors = RegisterValidation::validate_all(
                &submission.name,
                &submission.email,
                &submission.password,
                &submission.confirm_password,
            );
            if errors.has_errors() {
                register_error.set("Please fix the validation errors above".to_string());
                return;
            }

            wasm_bindgen_futures::spawn_local(async move {
                match auth_service::register(
                    &submission.name,
                    &submission.email,
                    &submission.password,
                )
                .await
                {
                    Ok(()) => {
                        log::info!("✅ Registration successful");
                        register_success
                            .set("Registration successful! You can now login.".to_string());
                        // Flip back to the login panel after a short pause.
                        Timeout::new(REGISTER_SWITCH_DELAY_MS, move || {
                            is_login_panel.set(true);
                        })
                        .forget();
                    }
                    Err(e) => {
                        log::error!("❌ Registration failed: {}", e);
                        register_error.set(e.to_string());
                    }
                }
            });
        })
    };

    UseAuthHandle {
        is_login_panel,
        login_error,
        register_error,
        register_success,
        login,
        register,
    }
}
