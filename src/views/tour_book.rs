use yew::prelude::*;

use crate::components::{Footer, Navbar};
use crate::hooks::use_booking_flow;
use crate::models::BookingPackage;
use crate::views::rooms_booking::render_flow_overlays;
use crate::views::travel::guides;

#[function_component(TourBook)]
pub fn tour_book() -> Html {
    let flow = use_booking_flow();

    html! {
        <div class="page tour-book">
            <Navbar />

            <div class="hero tour-hero">
                <h1>{"Book a Tour"}</h1>
                <p>{"Pick a guide and we will plan the rest"}</p>
            </div>

            <section class="packages-section">
                <h2>{"Available Guides"}</h2>
                <div class="packages-grid">
                    {
                        for guides().into_iter().map(|guide| {
                            let package = BookingPackage::new(
                                &format!("TOUR_GUIDE_{}", guide.id),
                                &format!("Tour with {}", guide.name),
                            );
                            let on_click = {
                                let select = flow.select_package.clone();
                                let package = package.clone();
                                Callback::from(move |_: MouseEvent| select.emit(package.clone()))
                            };
                            html! {
                                <div class="package-card guide-card" onclick={on_click}>
                                    <img src={guide.image} alt={guide.name} class="guide-photo" />
                                    <h3>{guide.name}</h3>
                                    <p class="guide-rating">{"★ "}{guide.rating}</p>
                                    <p class="guide-languages">{guide.languages.join(", ")}</p>
                                </div>
                            }
                        })
                    }
                </div>
            </section>

            { render_flow_overlays(&flow) }

            <Footer />
        </div>
    }
}
