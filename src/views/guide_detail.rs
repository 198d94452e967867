use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{Footer, Navbar};
use crate::views::travel::guides;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct GuideDetailProps {
    pub id: u32,
}

#[function_component(GuideDetail)]
pub fn guide_detail(props: &GuideDetailProps) -> Html {
    let guide = guides().into_iter().find(|g| g.id == props.id);

    let Some(guide) = guide else {
        return html!(<Redirect<Route> to={Route::TourGuide} />);
    };

    html! {
        <div class="page guide-detail">
            <Navbar />

            <main class="guide-profile">
                <img src={guide.image} alt={guide.name} class="guide-photo-large" />
                <h1>{guide.name}</h1>
                <p class="guide-rating">{"★ "}{guide.rating}</p>
                <p class="guide-bio">{guide.description}</p>
                <p class="guide-languages">
                    <span>{"Languages: "}</span>{guide.languages.join(", ")}
                </p>
                <Link<Route> to={Route::TourBook} classes="btn btn-primary">
                    {"Book This Guide"}
                </Link<Route>>
            </main>

            <Footer />
        </div>
    }
}
