use yew::prelude::*;

use crate::components::Navbar;
use crate::stores::session_store::Session;

#[function_component(GuideDashboard)]
pub fn guide_dashboard() -> Html {
    let session = use_state(Session::load);

    html! {
        <div class="page dashboard guide-dashboard">
            <Navbar />
            <main class="dashboard-body">
                <h1>{"Guide Dashboard"}</h1>
                <div class="identity-panel">
                    <p class="identity-name">{session.navbar_name()}</p>
                    <p class="identity-role">{session.role.clone().unwrap_or_default()}</p>
                </div>
                <section class="dashboard-cards">
                    <div class="dashboard-card">
                        <h3>{"Upcoming Tours"}</h3>
                        <p>{"Tours assigned to you appear here once confirmed."}</p>
                    </div>
                    <div class="dashboard-card">
                        <h3>{"Profile"}</h3>
                        <p>{"Keep your languages, bio and photo up to date."}</p>
                    </div>
                </section>
            </main>
        </div>
    }
}
