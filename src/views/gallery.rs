use yew::prelude::*;

use crate::components::{Footer, Navbar};

const GALLERY_IMAGES: [&str; 6] = [
    "https://images.unsplash.com/photo-1506744038136-46273834b3fb",
    "https://images.unsplash.com/photo-1592194996308-7b43878e84a6",
    "https://images.unsplash.com/photo-1526045612212-70caf35c14df",
    "https://images.unsplash.com/photo-1494526585095-c41746248156",
    "https://images.unsplash.com/photo-1593642634367-d91a135587b5",
    "https://images.unsplash.com/photo-1470770903676-69b98201ea1c",
];

#[function_component(Gallery)]
pub fn gallery() -> Html {
    html! {
        <div class="page gallery">
            <Navbar />
            <main class="content-page">
                <h1>{"Gallery"}</h1>
                <div class="gallery-grid">
                    {
                        for GALLERY_IMAGES.iter().enumerate().map(|(i, url)| html! {
                            <div class="gallery-item">
                                <img src={*url} alt={format!("Gallery {}", i + 1)} />
                            </div>
                        })
                    }
                </div>
            </main>
            <Footer />
        </div>
    }
}
