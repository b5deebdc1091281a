//! Login screen.

use serde::{Deserialize, Serialize};
use smilecare_frontend_common::auth::{use_session, SessionAction};
use smilecare_frontend_common::services::AuthApiService;
use smilecare_frontend_common::{ErrorBanner, SuccessBanner};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::Route;

/// Query string attached when registration hands off to login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisteredQuery {
    pub registered: bool,
}

#[function_component(Login)]
pub fn login() -> Html {
    let session = use_session();
    let navigator = use_navigator().expect("navigator available under BrowserRouter");
    let location = use_location();

    let email = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(|| Option::<String>::None);
    let busy = use_state(|| false);

    let just_registered = location
        .as_ref()
        .and_then(|loc| loc.query::<RegisteredQuery>().ok())
        .map(|q| q.registered)
        .unwrap_or(false);

    let on_email = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };
    let on_password = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    let on_submit = {
        let session = session.clone();
        let navigator = navigator.clone();
        let email = email.clone();
        let password = password.clone();
        let error = error.clone();
        let busy = busy.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *busy {
                return;
            }
            let session = session.clone();
            let navigator = navigator.clone();
            let error = error.clone();
            let busy = busy.clone();
            let email_value = (*email).clone();
            let password_value = (*password).clone();

            error.set(None);
            busy.set(true);
            spawn_local(async move {
                match AuthApiService::new().login(email_value, password_value).await {
                    Ok((user, token)) => {
                        session.dispatch(SessionAction::LoggedIn { user, token });
                        navigator.push(&Route::Home);
                    }
                    Err(err) => {
                        error.set(Some(err.display_message()));
                    }
                }
                busy.set(false);
            });
        })
    };

    html! {
        <div class="max-w-md mx-auto px-4 py-12">
            <div class="bg-white rounded-xl shadow-sm border border-gray-100 p-8">
                <h1 class="text-2xl font-bold text-gray-900 mb-6">{"Log in"}</h1>

                if just_registered {
                    <div class="mb-4">
                        <SuccessBanner message="Account created. You can log in now." />
                    </div>
                }
                if let Some(message) = (*error).clone() {
                    <div class="mb-4">
                        <ErrorBanner message={message} />
                    </div>
                }

                <form onsubmit={on_submit}>
                    <label class="block text-sm font-medium text-gray-700 mb-1">{"Email"}</label>
                    <input
                        type="email"
                        required=true
                        value={(*email).clone()}
                        oninput={on_email}
                        class="w-full border border-gray-300 rounded-lg px-3 py-2 mb-4 focus:outline-none focus:ring-2 focus:ring-teal-500"
                    />

                    <label class="block text-sm font-medium text-gray-700 mb-1">{"Password"}</label>
                    <input
                        type="password"
                        required=true
                        value={(*password).clone()}
                        oninput={on_password}
                        class="w-full border border-gray-300 rounded-lg px-3 py-2 mb-6 focus:outline-none focus:ring-2 focus:ring-teal-500"
                    />

                    <button
                        type="submit"
                        disabled={*busy}
                        class="w-full px-4 py-2 bg-teal-600 text-white rounded-lg hover:bg-teal-700 disabled:opacity-50"
                    >
                        { if *busy { "Logging in..." } else { "Log in" } }
                    </button>
                </form>

                <p class="text-sm text-gray-500 mt-6 text-center">
                    {"No account yet? "}
                    <Link<Route> to={Route::Register} classes="text-teal-600 hover:underline">
                        {"Sign up"}
                    </Link<Route>>
                </p>
            </div>
        </div>
    }
}
