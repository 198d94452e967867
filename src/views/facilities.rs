use yew::prelude::*;

use crate::components::{Footer, Navbar};

const FACILITIES: [(&str, &str); 6] = [
    ("Pool", "Outdoor pool with a shallow end for kids"),
    ("Restaurant", "Sri Lankan and international dishes, open to 10pm"),
    ("Event Garden", "Beachfront lawn for up to 120 guests"),
    ("Free Wi-Fi", "Covers all rooms and common areas"),
    ("Airport Shuttle", "Pickup from Koggala or Colombo on request"),
    ("Bicycle Rental", "Explore Unawatuna on two wheels"),
];

#[function_component(Facilities)]
pub fn facilities() -> Html {
    html! {
        <div class="page facilities">
            <Navbar />
            <main class="content-page">
                <h1>{"Facilities"}</h1>
                <div class="facilities-grid">
                    {
                        for FACILITIES.iter().map(|(name, description)| html! {
                            <div class="facility-card">
                                <h3>{*name}</h3>
                                <p>{*description}</p>
                            </div>
                        })
                    }
                </div>
            </main>
            <Footer />
        </div>
    }
}
