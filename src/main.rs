use yew::prelude::*;
use yew_router::prelude::*;

mod components;
mod hooks;
mod models;
mod services;
mod stores;
mod utils;
mod views;

use components::guards::{RequireAdmin, RequireClient, RequireGuide};

/* -------------------- routing -------------------- */

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/auth")]
    Auth,
    #[at("/tour-guide")]
    TourGuide,
    #[at("/guides/:id")]
    GuideDetail { id: u32 },
    #[at("/tour-book")]
    TourBook,
    #[at("/gallery")]
    Gallery,
    #[at("/about")]
    About,
    #[at("/facilities")]
    Facilities,
    #[at("/event-booking")]
    EventBooking,
    #[at("/rooms-booking")]
    RoomsBooking,
    #[at("/contact")]
    Contact,
    #[at("/admin-dashboard")]
    AdminDashboard,
    #[at("/guide-dashboard")]
    GuideDashboard,
    #[at("/client-dashboard")]
    ClientDashboard,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html!(<views::home::Home />),
        Route::Auth => html!(<views::auth::AuthPage />),
        Route::TourGuide => html!(<views::travel::TourGuides />),
        Route::GuideDetail { id } => html!(<views::guide_detail::GuideDetail {id} />),
        Route::TourBook => html!(<views::tour_book::TourBook />),
        Route::Gallery => html!(<views::gallery::Gallery />),
        Route::About => html!(<views::about::About />),
        Route::Facilities => html!(<views::facilities::Facilities />),
        Route::EventBooking => html!(<views::event_booking::EventBooking />),
        Route::RoomsBooking => html!(<views::rooms_booking::RoomsBooking />),
        Route::Contact => html!(<views::contact::Contact />),
        Route::AdminDashboard => html! {
            <RequireAdmin><views::admin_dashboard::AdminDashboard /></RequireAdmin>
        },
        Route::GuideDashboard => html! {
            <RequireGuide><views::guide_dashboard::GuideDashboard /></RequireGuide>
        },
        Route::ClientDashboard => html! {
            <RequireClient><views::client_dashboard::ClientDashboard /></RequireClient>
        },
        Route::NotFound => html!(<h1 class="not-found">{"404 – Not Found"}</h1>),
    }
}

/* -------------------- entry point ---------------- */

#[function_component(App)]
fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("🏝️ Wega Villa 98 web client starting...");

    yew::Renderer::<App>::new().render();
}
