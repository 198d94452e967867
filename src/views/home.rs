use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{Footer, Navbar};
use crate::Route;

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div class="page home">
            <Navbar />

            <div class="hero home-hero">
                <h1>{"Wega Villa 98"}</h1>
                <p>{"A beachside escape in Unawatuna — rooms, events and guided tours"}</p>
                <div class="hero-actions">
                    <Link<Route> to={Route::RoomsBooking} classes="btn btn-primary">
                        {"Book a Room"}
                    </Link<Route>>
                    <Link<Route> to={Route::TourGuide} classes="btn btn-secondary">
                        {"Meet Our Guides"}
                    </Link<Route>>
                </div>
            </div>

            <section class="home-highlights">
                <div class="highlight-card">
                    <h3>{"Rooms"}</h3>
                    <p>{"Four room types from cosy singles to family suites, steps from the beach."}</p>
                </div>
                <div class="highlight-card">
                    <h3>{"Events"}</h3>
                    <p>{"Birthdays, BBQs and pool parties with the Indian Ocean as your backdrop."}</p>
                </div>
                <div class="highlight-card">
                    <h3>{"Tours"}</h3>
                    <p>{"Local guides for Galle Fort walks, jungle trails and food adventures."}</p>
                </div>
            </section>

            <Footer />
        </div>
    }
}
