use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::{Footer, Navbar};
use crate::services::contact_service;

#[function_component(Contact)]
pub fn contact() -> Html {
    let name = use_state(String::new);
    let email = use_state(String::new);
    let message = use_state(String::new);
    let status = use_state(String::new);
    let sending = use_state(|| false);

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
    let on_message = {
        let message = message.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            message.set(area.value());
        })
    };

    let on_submit = {
        let name = name.clone();
        let email = email.clone();
        let message = message.clone();
        let status = status.clone();
        let sending = sending.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let name_val = (*name).clone();
            let email_val = (*email).clone();
            let message_val = (*message).clone();
            if name_val.trim().is_empty() || email_val.trim().is_empty() || message_val.trim().is_empty() {
                status.set("Please fill in all fields".to_string());
                return;
            }

            let name = name.clone();
            let email = email.clone();
            let message = message.clone();
            let status = status.clone();
            let sending = sending.clone();
            sending.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                match contact_service::send_message(&name_val, &email_val, &message_val).await {
                    Ok(()) => {
                        log::info!("✅ Contact message sent");
                        status.set("Thanks! We'll get back to you soon.".to_string());
                        name.set(String::new());
                        email.set(String::new());
                        message.set(String::new());
                    }
                    Err(e) => {
                        log::error!("❌ Contact message failed: {}", e);
                        status.set(e.to_string());
                    }
                }
                sending.set(false);
            });
        })
    };

    html! {
        <div class="page contact">
            <Navbar />
            <main class="content-page">
                <h1>{"Contact Us"}</h1>
                <form class="contact-form" onsubmit={on_submit}>
                    <input
                        type="text"
                        placeholder="Name"
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
                    <textarea
                        placeholder="Your message"
                        value={(*message).clone()}
                        oninput={on_message}
                        required=true
                    />
                    {
                        if !status.is_empty() {
                            html!(<p class="form-status">{(*status).clone()}</p>)
                        } else {
                            html!()
                        }
                    }
                    <button type="submit" class="btn btn-primary" disabled={*sending}>
                        { if *sending { "Sending..." } else { "Send Message" } }
                    </button>
                </form>
            </main>
            <Footer />
        </div>
    }
}
