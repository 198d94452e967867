use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::components::Navbar;
use crate::services::auth_service;
use crate::stores::session_store::Session;

const HEARTBEAT_INTERVAL_MS: u32 = 60_000;

#[function_component(AdminDashboard)]
pub fn admin_dashboard() -> Html {
    let session = use_state(Session::load);

    // Managed admin sessions keep themselves alive while the dashboard is
    // open. Failures are logged and ignored; the server decides expiry.
    {
        let managed = session.session_managed && session.session_id.is_some();
        use_effect_with(managed, move |managed| {
            let interval = managed.then(|| {
                log::info!("🔐 Starting session heartbeat");
                Interval::new(HEARTBEAT_INTERVAL_MS, || {
                    wasm_bindgen_futures::spawn_local(async {
                        if let Err(e) = auth_service::heartbeat().await {
                            log::warn!("⚠️ Session heartbeat failed: {}", e);
                        }
                    });
                })
            });
            move || drop(interval)
        });
    }

    html! {
        <div class="page dashboard admin-dashboard">
            <Navbar />
            <main class="dashboard-body">
                <h1>{"Admin Dashboard"}</h1>
                <div class="identity-panel">
                    <p class="identity-name">{session.navbar_name()}</p>
                    <p class="identity-role">{session.role.clone().unwrap_or_default()}</p>
                    {
                        if session.session_managed {
                            html!(<p class="identity-session">{"Managed session active"}</p>)
                        } else {
                            html!()
                        }
                    }
                </div>
                <section class="dashboard-cards">
                    <div class="dashboard-card">
                        <h3>{"Bookings"}</h3>
                        <p>{"Review and confirm incoming room and event bookings."}</p>
                    </div>
                    <div class="dashboard-card">
                        <h3>{"Tour Guides"}</h3>
                        <p>{"Manage guide profiles and assignments."}</p>
                    </div>
                    <div class="dashboard-card">
                        <h3>{"Rooms"}</h3>
                        <p>{"Update room types, rates and availability."}</p>
                    </div>
                </section>
            </main>
        </div>
    }
}
