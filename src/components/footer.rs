use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="footer">
            <div class="footer-columns">
                <div class="footer-column">
                    <h4>{"Wega Villa 98"}</h4>
                    <p>{"Your beachside escape in Unawatuna, Sri Lanka."}</p>
                </div>
                <div class="footer-column">
                    <h4>{"Explore"}</h4>
                    <Link<Route> to={Route::RoomsBooking} classes="footer-link">{"Rooms"}</Link<Route>>
                    <Link<Route> to={Route::EventBooking} classes="footer-link">{"Events"}</Link<Route>>
                    <Link<Route> to={Route::TourGuide} classes="footer-link">{"Tour Guides"}</Link<Route>>
                    <Link<Route> to={Route::Gallery} classes="footer-link">{"Gallery"}</Link<Route>>
                </div>
                <div class="footer-column">
                    <h4>{"Contact"}</h4>
                    <p>{"Matara Road, Unawatuna"}</p>
                    <p>{"hello@wegavilla98.lk"}</p>
                    <Link<Route> to={Route::Contact} classes="footer-link">{"Contact Us"}</Link<Route>>
                </div>
            </div>
            <p class="footer-copyright">{"© 2025 Wega Villa 98. All rights reserved."}</p>
        </footer>
    }
}
