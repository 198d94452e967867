use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{Footer, Navbar};
use crate::Route;

#[derive(Clone, PartialEq)]
pub struct Guide {
    pub id: u32,
    pub name: &'static str,
    pub description: &'static str,
    pub languages: &'static [&'static str],
    pub rating: &'static str,
    pub image: &'static str,
}

pub fn guides() -> Vec<Guide> {
    vec![
        Guide {
            id: 1,
            name: "Nimal Perera",
            description: "Your local storyteller and hiking companion around the Galle Fort and countryside.",
            languages: &["English"],
            rating: "4.7",
            image: "https://randomuser.me/api/portraits/men/32.jpg",
        },
        Guide {
            id: 2,
            name: "Dilani Fernando",
            description: "Offers peaceful cultural tours and spiritual site visits near Unawatuna.",
            languages: &["English", "Japanese"],
            rating: "4.8",
            image: "https://randomuser.me/api/portraits/women/44.jpg",
        },
        Guide {
            id: 3,
            name: "Kavinda Japasconiya",
            description: "Adventure lover with kayaking, jungle trails, and eco-tour experiences across Unawatuna and beyond.",
            languages: &["English", "Tamil"],
            rating: "4.3",
            image: "https://randomuser.me/api/portraits/men/75.jpg",
        },
        Guide {
            id: 4,
            name: "Rashmi",
            description: "Specializes in food tours, cooking sessions, and hidden village markets in southern Sri Lanka.",
            languages: &["English", "French", "Chinese"],
            rating: "4.9",
            image: "https://randomuser.me/api/portraits/women/68.jpg",
        },
    ]
}

#[function_component(TourGuides)]
pub fn tour_guides() -> Html {
    let navigator = use_navigator().expect("travel page rendered outside the router");

    html! {
        <div class="page travel">
            <Navbar />

            <div class="hero travel-hero">
                <h1>{"Meet Our Expert Guides"}</h1>
            </div>

            <main class="guides-grid">
                {
                    for guides().into_iter().map(|guide| {
                        let on_click = {
                            let navigator = navigator.clone();
                            let id = guide.id;
                            Callback::from(move |_: MouseEvent| {
                                navigator.push(&Route::GuideDetail { id });
                            })
                        };
                        html! {
                            <div class="guide-card" onclick={on_click}>
                                <img src={guide.image} alt={guide.name} class="guide-photo" />
                                <h2>{guide.name}</h2>
                                <p>{guide.description}</p>
                                <p class="guide-languages">
                                    <span>{"Languages: "}</span>{guide.languages.join(", ")}
                                </p>
                                <p class="guide-rating">{"★ "}{guide.rating}</p>
                            </div>
                        }
                    })
                }
            </main>

            <Footer />
        </div>
    }
}
