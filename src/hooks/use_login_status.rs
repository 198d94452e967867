use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::stores::session_store::Session;
use crate::utils::LOGIN_EVENT;

/// Session snapshot that tracks login/logout without a page reload: re-reads
/// storage when the login event fires in this tab or the `storage` event
/// fires from another tab.
#[hook]
pub fn use_login_status() -> UseStateHandle<Session> {
    let session = use_state(Session::load);

    {
        let session = session.clone();
        use_effect_with((), move |_| {
            let callback = Closure::wrap(Box::new(move |_: web_sys::Event| {
                session.set(Session::load());
            }) as Box<dyn FnMut(web_sys::Event)>);

            let window = web_sys::window();
            if let Some(win) = &window {
                let _ = win
                    .add_event_listener_with_callback(LOGIN_EVENT, callback.as_ref().unchecked_ref());
                let _ = win
                    .add_event_listener_with_callback("storage", callback.as_ref().unchecked_ref());
            }

            move || {
                if let Some(win) = window {
                    let _ = win.remove_event_listener_with_callback(
                        LOGIN_EVENT,
                        callback.as_ref().unchecked_ref(),
                    );
                    let _ = win.remove_event_listener_with_callback(
                        "storage",
                        callback.as_ref().unchecked_ref(),
                    );
                }
                drop(callback);
            }
        });
    }

    session
}
