use yew::prelude::*;

use crate::components::{Footer, Navbar};

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <div class="page about">
            <Navbar />
            <main class="content-page">
                <h1>{"About Us"}</h1>
                <p>
                    {"Wega Villa 98 is a family-run villa on the southern coast of Sri Lanka. \
                      What started as a two-room guesthouse in 1998 has grown into a small \
                      resort with rooms, an event garden and a network of local tour guides."}
                </p>
                <p>
                    {"We keep things personal: breakfast cooked to order, guides who grew up \
                      in the villages they show you, and a team that remembers your name."}
                </p>
            </main>
            <Footer />
        </div>
    }
}
