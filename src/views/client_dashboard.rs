use yew::prelude::*;

use crate::components::Navbar;
use crate::models::BookingRecord;
use crate::services::booking_service;
use crate::stores::session_store::Session;

#[function_component(ClientDashboard)]
pub fn client_dashboard() -> Html {
    let session = use_state(Session::load);
    let bookings = use_state(Vec::<BookingRecord>::new);
    let loading = use_state(|| true);

    {
        let bookings = bookings.clone();
        let loading = loading.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match booking_service::my_bookings().await {
                    Ok(records) => {
                        log::info!("📋 Loaded {} bookings", records.len());
                        bookings.set(records);
                    }
                    Err(e) => {
                        // History is best-effort; the dashboard stays usable.
                        log::warn!("⚠️ Could not load booking history: {}", e);
                    }
                }
                loading.set(false);
            });
            || ()
        });
    }

    html! {
        <div class="page dashboard client-dashboard">
            <Navbar />
            <main class="dashboard-body">
                <h1>{"My Dashboard"}</h1>
                <div class="identity-panel">
                    <p class="identity-name">{session.navbar_name()}</p>
                    <p class="identity-email">{session.username.clone().unwrap_or_default()}</p>
                    {
                        if let Some(user_id) = &session.user_id {
                            html!(<p class="identity-id">{"Guest #"}{user_id.clone()}</p>)
                        } else {
                            html!()
                        }
                    }
                </div>

                <section class="booking-history">
                    <h2>{"My Bookings"}</h2>
                    {
                        if *loading {
                            html!(<p class="history-empty">{"Loading your bookings..."}</p>)
                        } else if bookings.is_empty() {
                            html!(<p class="history-empty">{"No bookings yet. Time to plan a getaway!"}</p>)
                        } else {
                            html! {
                                <ul class="history-list">
                                    {
                                        for bookings.iter().map(|booking| html! {
                                            <li class="history-item">
                                                <span class="history-package">
                                                    {booking.package_name.clone().unwrap_or_else(|| "Booking".to_string())}
                                                </span>
                                                <span class="history-date">
                                                    {booking.event_date.clone().unwrap_or_default()}
                                                </span>
                                                <span class="history-status">
                                                    {booking.booking_status.clone().unwrap_or_else(|| "Pending".to_string())}
                                                </span>
                                            </li>
                                        })
                                    }
                                </ul>
                            }
                        }
                    }
                </section>
            </main>
        </div>
    }
}
