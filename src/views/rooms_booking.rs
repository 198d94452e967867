use yew::prelude::*;

use crate::components::{AuthRequiredPrompt, BookingFormModal, Footer, Navbar};
use crate::hooks::{use_booking_flow, BookingStage};
use crate::models::BookingPackage;

fn room_packages() -> Vec<BookingPackage> {
    vec![
        BookingPackage::with_price(
            "ROOM_STANDARD",
            "Standard Room",
            "LKR 7000",
            "https://amorgoshotel.com/wp-content/uploads/2014/12/Amorgos-Standard-Room1.jpg",
        ),
        BookingPackage::with_price(
            "ROOM_DELUXE",
            "Deluxe Room",
            "LKR 9000",
            "https://www.oberoihotels.com/images/deluxe-room-1.jpg",
        ),
        BookingPackage::with_price(
            "ROOM_FAMILY",
            "Family Room",
            "LKR 10000",
            "https://images.unsplash.com/photo-1566665797739-1674de7a421a",
        ),
        BookingPackage::with_price(
            "ROOM_SINGLE",
            "Single Room",
            "LKR 5000",
            "https://images.unsplash.com/photo-1505693416388-ac5ce068fe85",
        ),
    ]
}

#[function_component(RoomsBooking)]
pub fn rooms_booking() -> Html {
    let flow = use_booking_flow();

    let packages = room_packages();

    html! {
        <div class="page rooms-booking">
            <Navbar />

            <div class="hero rooms-hero">
                <h1>{"Stay With Us"}</h1>
                <p>{"Choose a room and reserve your dates"}</p>
            </div>

            <section class="packages-section">
                <h2>{"Room Packages"}</h2>
                <div class="packages-grid">
                    {
                        for packages.into_iter().map(|package| {
                            let on_click = {
                                let select = flow.select_package.clone();
                                let package = package.clone();
                                Callback::from(move |_: MouseEvent| select.emit(package.clone()))
                            };
                            html! {
                                <div class="package-card" onclick={on_click}>
                                    {
                                        if let Some(image) = &package.image {
                                            html!(<img src={image.clone()} alt={package.package_name.clone()} />)
                                        } else {
                                            html!()
                                        }
                                    }
                                    <h3>{&package.package_name}</h3>
                                    {
                                        if let Some(price) = &package.price {
                                            html!(<p class="package-price">{price}</p>)
                                        } else {
                                            html!()
                                        }
                                    }
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

/// Overlays driven by the booking flow stage; shared verbatim by the three
/// booking pages through this helper.
pub fn render_flow_overlays(flow: &crate::hooks::UseBookingFlowHandle) -> Html {
    match *flow.stage {
        BookingStage::Browsing => html!(),
        BookingStage::AuthCheckPending => html! {
            <div class="modal-backdrop">
                <div class="modal loading">{"Preparing your booking..."}</div>
            </div>
        },
        BookingStage::AwaitingLogin => html! {
            <AuthRequiredPrompt on_dismiss={flow.dismiss_prompt.clone()} />
        },
        BookingStage::FormOpen | BookingStage::Submitting => {
            match (*flow.selected).clone() {
                Some(package) => html! {
                    <BookingFormModal
                        {package}
                        prefill_name={(*flow.prefill_name).clone()}
                        prefill_email={(*flow.prefill_email).clone()}
                        submitting={*flow.stage == BookingStage::Submitting}
                        error={(*flow.submit_error).clone()}
                        on_submit={flow.submit.clone()}
                        on_close={flow.close_form.clone()}
                    />
                },
                None => html!(),
            }
        }
        BookingStage::Success => html! {
            <div class="modal-backdrop">
                <div class="modal booking-success">
                    <h3>{"Booking confirmed!"}</h3>
                    <p>{"We have received your reservation and will be in touch shortly."}</p>
                    <button
                        type="button"
                        class="btn btn-primary"
                        onclick={flow.reset.reform(|_| ())}
                    >
                        {"Done"}
                    </button>
                </div>
            </div>
        },
    }
}
