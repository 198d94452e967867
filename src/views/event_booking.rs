use yew::prelude::*;

use crate::components::{Footer, Navbar};
use crate::hooks::use_booking_flow;
use crate::models::BookingPackage;
use crate::views::rooms_booking::render_flow_overlays;

const EVENT_TYPES: [(&str, &str); 6] = [
    ("EVENT_BIRTHDAY", "Birthday"),
    ("EVENT_NIGHT_FUNCTION", "Night Function"),
    ("EVENT_BBQ", "BBQ"),
    ("EVENT_POOL_PARTY", "Pool Party"),
    ("EVENT_GET_TOGETHER", "Get Together"),
    ("EVENT_CUSTOM", "Custom"),
];

#[function_component(EventBooking)]
pub fn event_booking() -> Html {
    let flow = use_booking_flow();

    html! {
        <div class="page event-booking">
            <Navbar />

            <div class="hero event-hero">
                <h1>{"Celebrate your day with us"}</h1>
                <p>{"Birthdays, BBQs, pool parties and more by the beach"}</p>
            </div>

            <section class="packages-section">
                <h2>{"Event Packages"}</h2>
                <div class="packages-grid event-grid">
                    {
                        for EVENT_TYPES.iter().map(|(id, name)| {
                            let on_click = {
                                let select = flow.select_package.clone();
                                let package = BookingPackage::new(id, name);
                                Callback::from(move |_: MouseEvent| select.emit(package.clone()))
                            };
                            html! {
                                <div class="package-card event-card" onclick={on_click}>
                                    <p class="event-name">{*name}</p>
                                </div>
                            }
                        })
                    }
                </div>
            </section>

            <section class="reviews-section">
                <h2>{"Reviews"}</h2>
                <div class="reviews-row">
                    <div class="review-card">
                        <p class="review-text">{"\"Our wedding reception was magical — the garden setup at sunset was unreal.\""}</p>
                        <div class="review-stars">{"⭐⭐⭐⭐⭐"}</div>
                    </div>
                    <div class="review-card">
                        <p class="review-text">{"\"Booked the BBQ package for a team outing. Food and music were spot on.\""}</p>
                        <div class="review-stars">{"⭐⭐⭐⭐☆"}</div>
                    </div>
                    <div class="review-card">
                        <p class="review-text">{"\"Pool party for my daughter's 10th — the kids still talk about it.\""}</p>
                        <div class="review-stars">{"⭐⭐⭐⭐⭐"}</div>
                    </div>
                </div>
            </section>

            { render_flow_overlays(&flow) }

            <Footer />
        </div>
    }
}
