use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::hooks::BookingFormData;
use crate::models::BookingPackage;

const GUEST_COUNT_OPTIONS: [&str; 6] = ["1-5", "6-10", "11-20", "21-35", "36-50", "50+"];

#[derive(Properties, PartialEq)]
pub struct BookingFormProps {
    pub package: BookingPackage,
    pub prefill_name: String,
    pub prefill_email: String,
    pub submitting: bool,
    #[prop_or_default]
    pub error: String,
    pub on_submit: Callback<BookingFormData>,
    pub on_close: Callback<()>,
}

/// Reservation modal shared by the rooms, events and tour pages. Pre-filled
/// identity fields stay editable; the package is read-only.
#[function_component(BookingFormModal)]
pub fn booking_form_modal(props: &BookingFormProps) -> Html {
    let name = use_state(|| props.prefill_name.clone());
    let email = use_state(|| props.prefill_email.clone());
    let phone = use_state(String::new);
    let event_date = use_state(String::new);
    let guest_count = use_state(|| GUEST_COUNT_OPTIONS[0].to_string());
    let special_requests = use_state(String::new);
    let field_error = use_state(String::new);

    let on_name = {
        let name = name.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            name.set(input.value());
        })
    };
    let on_email = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };
    let on_phone = {
        let phone = phone.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            phone.set(input.value());
        })
    };
    let on_date = {
        let event_date = event_date.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            event_date.set(input.value());
        })
    };
    let on_guest_count = {
        let guest_count = guest_count.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            guest_count.set(select.value());
        })
    };
    let on_special_requests = {
        let special_requests = special_requests.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            special_requests.set(area.value());
        })
    };

    let on_submit = {
        let name = name.clone();
        let email = email.clone();
        let phone = phone.clone();
        let event_date = event_date.clone();
        let guest_count = guest_count.clone();
        let special_requests = special_requests.clone();
        let field_error = field_error.clone();
        let submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if name.trim().is_empty()
                || email.trim().is_empty()
                || phone.trim().is_empty()
                || event_date.trim().is_empty()
            {
                field_error.set("Please fill in all required fields".to_string());
                return;
            }
            field_error.set(String::new());

            submit.emit(BookingFormData {
                customer_name: (*name).clone(),
                customer_email: (*email).clone(),
                customer_phone: (*phone).clone(),
                event_date: (*event_date).clone(),
                guest_count: (*guest_count).clone(),
                special_requests: (*special_requests).clone(),
            });
        })
    };

    html! {
        <div class="modal-backdrop">
            <form class="modal booking-form" onsubmit={on_submit}>
                <button
                    type="button"
                    class="modal-close"
                    onclick={props.on_close.reform(|_| ())}
                >
                    {"×"}
                </button>
                <h3>{"Reserve: "}{&props.package.package_name}</h3>
                {
                    if let Some(price) = &props.package.price {
                        html!(<p class="package-price">{price}</p>)
                    } else {
                        html!()
                    }
                }

                <input
                    type="text"
                    placeholder="Full Name"
                    value={(*name).clone()}
                    oninput={on_name}
                    required=true
                />
                <input
                    type="email"
                    placeholder="Email"
                    value={(*email).clone()}
                    oninput={on_email}
                    required=true
                />
                <input
                    type="tel"
                    placeholder="Contact Number"
                    value={(*phone).clone()}
                    oninput={on_phone}
                    required=true
                />
                <input
                    type="date"
                    value={(*event_date).clone()}
                    oninput={on_date}
                    required=true
                />
                <label class="form-label">
                    {"Guests"}
                    <select onchange={on_guest_count}>
                        {
                            for GUEST_COUNT_OPTIONS.iter().map(|option| html! {
                                <option
                                    value={*option}
                                    selected={*option == guest_count.as_str()}
                                >
                                    {option}
                                </option>
                            })
                        }
                    </select>
                </label>
                <textarea
                    placeholder="Special Requests"
                    value={(*special_requests).clone()}
                    oninput={on_special_requests}
                />

                {
                    if !field_error.is_empty() {
                        html!(<p class="form-error">{(*field_error).clone()}</p>)
                    } else {
                        html!()
                    }
                }
                {
                    if !props.error.is_empty() {
                        html!(<p class="form-error">{props.error.clone()}</p>)
                    } else {
                        html!()
                    }
                }

                <button type="submit" class="btn btn-primary" disabled={props.submitting}>
                    { if props.submitting { "Booking..." } else { "Confirm" } }
                </button>
            </form>
        </div>
    }
}
