//! Patient self-registration screen.

use smilecare_frontend_common::auth::use_role;
use smilecare_frontend_common::services::AuthApiService;
use smilecare_frontend_common::ErrorBanner;
use smilecare_http::types::{RegisterRequest, Role};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::login::RegisteredQuery;
use crate::routes::Route;

#[derive(Clone, Default, PartialEq)]
struct RegisterForm {
    first_name: String,
    last_name: String,
    email: String,
    phone: String,
    gender: String,
    password: String,
    confirm_password: String,
}

impl RegisterForm {
    /// Client-side checks before anything hits the network.
    fn validate(&self) -> Result<(), &'static str> {
        if self.gender.is_empty() {
            return Err("Please select a gender");
        }
        if self.password.len() < 6 {
            return Err("Password must be at least 6 characters");
        }
        if self.password != self.confirm_password {
            return Err("Passwords do not match");
        }
        Ok(())
    }
}

#[function_component(Register)]
pub fn register() -> Html {
    let navigator = use_navigator().expect("navigator available under BrowserRouter");
    // A signed-in dentist filling this form is creating a colleague account.
    let as_dentist = use_role() == Some(Role::Dentist);

    let form = use_state(RegisterForm::default);
    let error = use_state(|| Option::<String>::None);
    let busy = use_state(|| false);

    let text_field = |apply: fn(&mut RegisterForm, String)| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            apply(&mut next, input.value());
            form.set(next);
        })
    };

    let on_gender = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.gender = select.value();
            form.set(next);
        })
    };

    let on_submit = {
        let navigator = navigator.clone();
        let form = form.clone();
        let error = error.clone();
        let busy = busy.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *busy {
                return;
            }
            let current = (*form).clone();
            if let Err(message) = current.validate() {
                error.set(Some(message.to_string()));
                return;
            }

            let navigator = navigator.clone();
            let error = error.clone();
            let busy = busy.clone();

            error.set(None);
            busy.set(true);
            spawn_local(async move {
                let profile = RegisterRequest {
                    first_name: current.first_name,
                    last_name: current.last_name,
                    email: current.email,
                    phone: current.phone,
                    gender: Some(current.gender),
                    password: current.password,
                    role_id: if as_dentist {
                        Role::Dentist.role_id()
                    } else {
                        Role::Patient.role_id()
                    },
                };
                match AuthApiService::new().register(profile).await {
                    Ok(()) => {
                        if as_dentist {
                            navigator.push(&Route::Dentists);
                        } else {
                            let _ = navigator.push_with_query(
                                &Route::Login,
                                &RegisteredQuery { registered: true },
                            );
                        }
                    }
                    Err(err) => {
                        error.set(Some(err.display_message()));
                        busy.set(false);
                    }
                }
            });
        })
    };

    let input_class = "w-full border border-gray-300 rounded-lg px-3 py-2 focus:outline-none focus:ring-2 focus:ring-teal-500";
    let label_class = "block text-sm font-medium text-gray-700 mb-1";

    html! {
        <div class="max-w-md mx-auto px-4 py-12">
            <div class="bg-white rounded-xl shadow-sm border border-gray-100 p-8">
                <h1 class="text-2xl font-bold text-gray-900 mb-6">{"Create your account"}</h1>

                if let Some(message) = (*error).clone() {
                    <div class="mb-4">
                        <ErrorBanner message={message} />
                    </div>
                }

                <form onsubmit={on_submit} class="space-y-4">
                    <div class="grid grid-cols-2 gap-4">
                        <div>
                            <label class={label_class}>{"First name"}</label>
                            <input type="text" required=true class={input_class}
                                value={form.first_name.clone()}
                                oninput={text_field(|f, v| f.first_name = v)} />
                        </div>
                        <div>
                            <label class={label_class}>{"Last name"}</label>
                            <input type="text" required=true class={input_class}
                                value={form.last_name.clone()}
                                oninput={text_field(|f, v| f.last_name = v)} />
                        </div>
                    </div>

                    <div>
                        <label class={label_class}>{"Email"}</label>
                        <input type="email" required=true class={input_class}
                            value={form.email.clone()}
                            oninput={text_field(|f, v| f.email = v)} />
                    </div>

                    <div>
                        <label class={label_class}>{"Phone"}</label>
                        <input type="tel" required=true class={input_class}
                            value={form.phone.clone()}
                            oninput={text_field(|f, v| f.phone = v)} />
                    </div>

                    <div>
                        <label class={label_class}>{"Gender"}</label>
                        <select class={input_class} onchange={on_gender} value={form.gender.clone()}>
                            <option value="" selected={form.gender.is_empty()}>{"Select..."}</option>
                            <option value="M" selected={form.gender == "M"}>{"Male"}</option>
                            <option value="F" selected={form.gender == "F"}>{"Female"}</option>
                            <option value="O" selected={form.gender == "O"}>{"Other"}</option>
                        </select>
                    </div>

                    <div>
                        <label class={label_class}>{"Password"}</label>
                        <input type="password" required=true class={input_class}
                            value={form.password.clone()}
                            oninput={text_field(|f, v| f.password = v)} />
                    </div>

                    <div>
                        <label class={label_class}>{"Confirm password"}</label>
                        <input type="password" required=true class={input_class}
                            value={form.confirm_password.clone()}
                            oninput={text_field(|f, v| f.confirm_password = v)} />
                    </div>

                    <button type="submit" disabled={*busy}
                        class="w-full px-4 py-2 bg-teal-600 text-white rounded-lg hover:bg-teal-700 disabled:opacity-50">
                        { if *busy { "Creating account..." } else { "Sign up" } }
                    </button>
                </form>

                <p class="text-sm text-gray-500 mt-6 text-center">
                    {"Already have an account? "}
                    <Link<Route> to={Route::Login} classes="text-teal-600 hover:underline">
                        {"Log in"}
                    </Link<Route>>
                </p>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> RegisterForm {
        RegisterForm {
            first_name: "Maya".into(),
            last_name: "Cruz".into(),
            email: "maya@example.com".into(),
            phone: "555-0102".into(),
            gender: "F".into(),
            password: "hunter22".into(),
            confirm_password: "hunter22".into(),
        }
    }

    #[test]
    fn valid_form_passes() {
        assert!(valid_form().validate().is_ok());
    }

    #[test]
    fn mismatched_passwords_are_rejected() {
        let mut form = valid_form();
        form.confirm_password = "hunter23".into();
        assert_eq!(form.validate(), Err("Passwords do not match"));
    }

    #[test]
    fn missing_gender_is_rejected() {
        let mut form = valid_form();
        form.gender.clear();
        assert_eq!(form.validate(), Err("Please select a gender"));
    }

    #[test]
    fn short_password_is_rejected() {
        let mut form = valid_form();
        form.password = "abc".into();
        form.confirm_password = "abc".into();
        assert_eq!(form.validate(), Err("Password must be at least 6 characters"));
    }
}
