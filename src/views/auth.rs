use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::Navbar;
use crate::hooks::{use_auth, RegisterSubmission};
use crate::utils::validation::{
    can_submit_registration, validate_confirm_password, validate_email, validate_name,
    validate_password, RegisterValidation,
};

#[function_component(AuthPage)]
pub fn auth_page() -> Html {
    let auth = use_auth();

    // Login panel state
    let login_email = use_state(String::new);
    let login_password = use_state(String::new);

    // Register panel state
    let reg_name = use_state(String::new);
    let reg_email = use_state(String::new);
    let reg_password = use_state(String::new);
    let reg_confirm = use_state(String::new);
    let agree = use_state(|| false);
    let validation = use_state(RegisterValidation::default);

    // Successful registration clears the form, like the live site does.
    {
        let reg_name = reg_name.clone();
        let reg_email = reg_email.clone();
        let reg_password = reg_password.clone();
        let reg_confirm = reg_confirm.clone();
        let agree = agree.clone();
        let validation = validation.clone();
        use_effect_with((*auth.register_success).clone(), move |success| {
            if !success.is_empty() {
                reg_name.set(String::new());
                reg_email.set(String::new());
                reg_password.set(String::new());
                reg_confirm.set(String::new());
                agree.set(false);
                validation.set(RegisterValidation::default());
            }
            || ()
        });
    }

    let on_login_email = {
        let login_email = login_email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            login_email.set(input.value());
        })
    };
    let on_login_password = {
        let login_password = login_password.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            login_password.set(input.value());
        })
    };
    let on_login_submit = {
        let login_email = login_email.clone();
        let login_password = login_password.clone();
        let login = auth.login.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            login.emit(((*login_email).clone(), (*login_password).clone()));
        })
    };

    let on_reg_name = {
        let reg_name = reg_name.clone();
        let validation = validation.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let value = input.value();
            let mut errors = (*validation).clone();
            errors.name = validate_name(&value).unwrap_or_default();
            validation.set(errors);
            reg_name.set(value);
        })
    };
    let on_reg_email = {
        let reg_email = reg_email.clone();
        let validation = validation.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let value = input.value();
            let mut errors = (*validation).clone();
            errors.email = validate_email(&value).unwrap_or_default();
            validation.set(errors);
            reg_email.set(value);
        })
    };
    let on_reg_password = {
        let reg_password = reg_password.clone();
        let reg_confirm = reg_confirm.clone();
        let validation = validation.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let value = input.value();
            let mut errors = (*validation).clone();
            errors.password = validate_password(&value).unwrap_or_default();
            // Editing the password re-checks an already-typed confirmation.
            if !reg_confirm.is_empty() {
                errors.confirm_password =
                    validate_confirm_password(&reg_confirm, &value).unwrap_or_default();
            }
            validation.set(errors);
            reg_password.set(value);
        })
    };
    let on_reg_confirm = {
        let reg_confirm = reg_confirm.clone();
        let reg_password = reg_password.clone();
        let validation = validation.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let value = input.value();
            let mut errors = (*validation).clone();
            errors.confirm_password =
                validate_confirm_password(&value, &reg_password).unwrap_or_default();
            validation.set(errors);
            reg_confirm.set(value);
        })
    };
    let on_agree = {
        let agree = agree.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            agree.set(input.checked());
        })
    };

    let on_register_submit = {
        let reg_name = reg_name.clone();
        let reg_email = reg_email.clone();
        let reg_password = reg_password.clone();
        let reg_confirm = reg_confirm.clone();
        let agree = agree.clone();
        let validation = validation.clone();
        let register = auth.register.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            // Re-validate everything on submit so stale state cannot slip by.
            validation.set(RegisterValidation::validate_all(
                &reg_name,
                &reg_email,
                &reg_password,
                &reg_confirm,
            ));
            register.emit(RegisterSubmission {
                name: (*reg_name).clone(),
                email: (*reg_email).clone(),
                password: (*reg_password).clone(),
                confirm_password: (*reg_confirm).clone(),
                agreed: *agree,
            });
        })
    };

    let show_login = {
        let is_login_panel = auth.is_login_panel.clone();
        Callback::from(move |_: MouseEvent| is_login_panel.set(true))
    };
    let show_register = {
        let is_login_panel = auth.is_login_panel.clone();
        Callback::from(move |_: MouseEvent| is_login_panel.set(false))
    };

    let submit_enabled = can_submit_registration(
        &validation,
        &reg_name,
        &reg_email,
        &reg_password,
        &reg_confirm,
        *agree,
    );

    let field_error = |error: &str| -> Html {
        if error.is_empty() {
            html!()
        } else {
            html!(<p class="field-error">{error.to_string()}</p>)
        }
    };

    html! {
        <div class="auth-page">
            <Navbar />
            <div class="auth-card">
                <div class="auth-side-panel">
                    {
                        if *auth.is_login_panel {
                            html! {
                                <>
                                    <h2>{"New here?"}</h2>
                                    <p>{"Create your account to join us today!"}</p>
                                    <button class="btn btn-invert" onclick={show_register}>
                                        {"Register"}
                                    </button>
                                </>
                            }
                        } else {
                            html! {
                                <>
                                    <h2>{"Already registered?"}</h2>
                                    <p>{"Log in and continue your journey!"}</p>
                                    <button class="btn btn-invert" onclick={show_login}>
                                        {"Login"}
                                    </button>
                                </>
                            }
                        }
                    }
                </div>

                {
                    if *auth.is_login_panel {
                        html! {
                            <form class="auth-form" onsubmit={on_login_submit}>
                                <h3>{"Login"}</h3>
                                <input
                                    type="email"
                                    placeholder="Email"
                                    value={(*login_email).clone()}
                                    oninput={on_login_email}
                                />
                                <input
                                    type="password"
                                    placeholder="Password"
                                    value={(*login_password).clone()}
                                    oninput={on_login_password}
                                />
                                { field_error(&auth.login_error) }
                                <button type="submit" class="btn btn-primary">{"Login"}</button>
                            </form>
                        }
                    } else {
                        html! {
                            <form class="auth-form" onsubmit={on_register_submit}>
                                <h3>{"Register"}</h3>
                                <input
                                    type="text"
                                    placeholder="Full Name"
                                    value={(*reg_name).clone()}
                                    oninput={on_reg_name}
                                    required=true
                                />
                                { field_error(&validation.name) }
                                <input
                                    type="email"
                                    placeholder="Email"
                                    value={(*reg_email).clone()}
                                    oninput={on_reg_email}
                                    required=true
                                />
                                { field_error(&validation.email) }
                                <input
                                    type="password"
                                    placeholder="Password"
                                    value={(*reg_password).clone()}
                                    oninput={on_reg_password}
                                    required=true
                                />
                                { field_error(&validation.password) }
                                <input
                                    type="password"
                                    placeholder="Confirm Password"
                                    value={(*reg_confirm).clone()}
                                    oninput={on_reg_confirm}
                                    required=true
                                />
                                { field_error(&validation.confirm_password) }

                                <label class="terms-label">
                                    <input type="checkbox" checked={*agree} onchange={on_agree} />
                                    {"I agree to the terms & conditions"}
                                </label>

                                { field_error(&auth.register_error) }
                                {
                                    if !auth.register_success.is_empty() {
                                        html!(<p class="field-success">{(*auth.register_success).clone()}</p>)
                                    } else {
                                        html!()
                                    }
                                }

                                <button
                                    type="submit"
                                    class="btn btn-primary"
                                    disabled={!submit_enabled}
                                >
                                    {"Register"}
                                </button>
                            </form>
                        }
                    }
                }
            </div>
        </div>
    }
}
