use yew::prelude::*;
use yew_router::prelude::*;

use crate::models::{authorize, GuardDecision, RedirectTarget, RouteArea};
use crate::stores::session_store::Session;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct GuardProps {
    #[prop_or_default]
    pub children: Children,
}

fn render_guard(area: RouteArea, children: &Children) -> Html {
    let session = Session::load();
    match authorize(area, session.token.as_deref(), session.role.as_deref()) {
        GuardDecision::Allow => html! { for children.iter() },
        GuardDecision::Redirect(RedirectTarget::Auth) => {
            html!(<Redirect<Route> to={Route::Auth} />)
        }
        GuardDecision::Redirect(RedirectTarget::Home) => {
            html!(<Redirect<Route> to={Route::Home} />)
        }
        // Dashboards never prompt inline; this arm is unreachable for them.
        GuardDecision::ShowPrompt => html!(),
    }
}

#[function_component(RequireAdmin)]
pub fn require_admin(props: &GuardProps) -> Html {
    render_guard(RouteArea::AdminDashboard, &props.children)
}

#[function_component(RequireGuide)]
pub fn require_guide(props: &GuardProps) -> Html {
    render_guard(RouteArea::GuideDashboard, &props.children)
}

#[function_component(RequireClient)]
pub fn require_client(props: &GuardProps) -> Html {
    render_guard(RouteArea::ClientDashboard, &props.children)
}

#[derive(Properties, PartialEq)]
pub struct AuthPromptProps {
    pub on_dismiss: Callback<()>,
}

/// The booking-required guard's inline prompt: the visitor picked an
/// offering without being logged in. The selection is already stashed, so
/// either choice is safe.
#[function_component(AuthRequiredPrompt)]
pub fn auth_required_prompt(props: &AuthPromptProps) -> Html {
    html! {
        <div class="modal-backdrop">
            <div class="modal auth-prompt">
                <button
                    type="button"
                    class="modal-close"
                    onclick={props.on_dismiss.reform(|_| ())}
                >
                    {"×"}
                </button>
                <h3>{"Login required"}</h3>
                <p>{"Please log in to complete your booking. Your selection will be waiting for you."}</p>
                <div class="auth-prompt-actions">
                    <Link<Route> to={Route::Auth} classes="btn btn-primary">
                        {"Login / Join"}
                    </Link<Route>>
                    <Link<Route> to={Route::Home} classes="btn btn-secondary">
                        {"Back to Home"}
                    </Link<Route>>
                </div>
            </div>
        </div>
    }
}
