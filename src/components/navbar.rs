use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::use_login_status;
use crate::services::auth_service;
use crate::stores::session_store::{self, Session};
use crate::Route;

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let navigator = use_navigator().expect("navbar rendered outside the router");
    let session = use_login_status();
    let show_profile = use_state(|| false);

    let toggle_profile = {
        let show_profile = show_profile.clone();
        Callback::from(move |_: MouseEvent| {
            show_profile.set(!*show_profile);
        })
    };

    let on_logout = {
        let navigator = navigator.clone();
        let session = session.clone();
        let show_profile = show_profile.clone();
        Callback::from(move |_: MouseEvent| {
            // Tell the backend, but never block the local logout on it. The
            // token is snapshotted here because clear() runs first.
            if let Some(token) = session.token.clone() {
                wasm_bindgen_futures::spawn_local(async move {
                    if let Err(e) = auth_service::logout_remote(&token).await {
                        log::warn!("⚠️ Remote logout failed: {}", e);
                    }
                });
            }
            session_store::clear();
            session.set(Session::load());
            show_profile.set(false);
            navigator.push(&Route::Home);
        })
    };

    html! {
        <nav class="navbar">
            <Link<Route> to={Route::Home} classes="navbar-logo">
                {"Wega Villa "}<span class="logo-accent">{"98"}</span>
            </Link<Route>>

            <div class="navbar-links">
                <Link<Route> to={Route::Home} classes="nav-link">{"Home"}</Link<Route>>
                <Link<Route> to={Route::About} classes="nav-link">{"About Us"}</Link<Route>>

                <div class="nav-dropdown">
                    <button class="nav-link">{"Travel ▾"}</button>
                    <div class="nav-dropdown-menu">
                        <Link<Route> to={Route::TourGuide} classes="nav-dropdown-item">
                            {"Book Tour Guide"}
                        </Link<Route>>
                        <Link<Route> to={Route::Gallery} classes="nav-dropdown-item">
                            {"Tour Places"}
                        </Link<Route>>
                    </div>
                </div>

                <div class="nav-dropdown">
                    <button class="nav-link">{"Booking ▾"}</button>
                    <div class="nav-dropdown-menu">
                        <Link<Route> to={Route::RoomsBooking} classes="nav-dropdown-item">
                            {"Rooms Booking"}
                        </Link<Route>>
                        <Link<Route> to={Route::EventBooking} classes="nav-dropdown-item">
                            {"Events Booking"}
                        </Link<Route>>
                    </div>
                </div>

                <Link<Route> to={Route::Facilities} classes="nav-link">{"Facilities"}</Link<Route>>
                <Link<Route> to={Route::Contact} classes="nav-link">{"Contact Us"}</Link<Route>>
            </div>

            {
                if session.is_logged_in() {
                    html! {
                        <div class="navbar-profile">
                            <button class="profile-button" onclick={toggle_profile}>
                                {session.navbar_name()}{" ▾"}
                            </button>
                            {
                                if *show_profile {
                                    html! {
                                        <div class="profile-menu">
                                            <div class="profile-menu-header">
                                                <p class="profile-name">{session.navbar_name()}</p>
                                                <p class="profile-greeting">{"Welcome back!"}</p>
                                            </div>
                                            <button class="profile-logout" onclick={on_logout}>
                                                {"Logout"}
                                            </button>
                                        </div>
                                    }
                                } else {
                                    html!()
                                }
                            }
                        </div>
                    }
                } else {
                    html! {
                        <Link<Route> to={Route::Auth} classes="btn btn-login">
                            {"Login / Join"}
                        </Link<Route>>
                    }
                }
            }
        </nav>
    }
}
