//! Top navigation bar with role-aware links.

use smilecare_frontend_common::auth::{use_session, SessionAction, SessionPhase};
use smilecare_frontend_common::services::AuthApiService;
use smilecare_http::types::Role;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::Route;

#[function_component(Navigation)]
pub fn navigation() -> Html {
    let session = use_session();
    let navigator = use_navigator().expect("navigator available under BrowserRouter");

    let on_logout = {
        let session = session.clone();
        let navigator = navigator.clone();
        Callback::from(move |_| {
            let session = session.clone();
            let navigator = navigator.clone();
            spawn_local(async move {
                // Server-side revocation is best effort; the cookie is
                // cleared locally either way.
                if let Err(err) = AuthApiService::new().logout().await {
                    log::debug!("logout request failed: {err}");
                }
                session.dispatch(SessionAction::LoggedOut);
                navigator.push(&Route::Home);
            });
        })
    };

    let links = match &session.phase {
        SessionPhase::Authenticated(user) => {
            let role = user.role();
            html! {
                <>
                    <Link<Route> to={Route::Appointments} classes="hover:text-teal-600">
                        {"Appointments"}
                    </Link<Route>>
                    if role == Some(Role::Patient) {
                        <Link<Route> to={Route::Schedule} classes="hover:text-teal-600">
                            {"Book"}
                        </Link<Route>>
                    }
                    if role == Some(Role::Dentist) {
                        <Link<Route> to={Route::Dentists} classes="hover:text-teal-600">
                            {"Dentists"}
                        </Link<Route>>
                        <Link<Route> to={Route::Services} classes="hover:text-teal-600">
                            {"Services"}
                        </Link<Route>>
                    }
                    <button onclick={on_logout}
                        class="px-3 py-1.5 bg-teal-600 text-white rounded-lg hover:bg-teal-700">
                        {"Log out"}
                    </button>
                </>
            }
        }
        _ => html! {
            <>
                <Link<Route> to={Route::Login} classes="hover:text-teal-600">
                    {"Log in"}
                </Link<Route>>
                <Link<Route> to={Route::Register}
                    classes="px-3 py-1.5 bg-teal-600 text-white rounded-lg hover:bg-teal-700">
                    {"Sign up"}
                </Link<Route>>
            </>
        },
    };

    html! {
        <nav class="bg-white border-b border-gray-200">
            <div class="max-w-5xl mx-auto px-4 h-14 flex items-center justify-between">
                <Link<Route> to={Route::Home} classes="text-lg font-bold text-teal-700">
                    {"SmileCare"}
                </Link<Route>>
                <div class="flex items-center gap-4 text-sm text-gray-700">
                    { links }
                </div>
            </div>
        </nav>
    }
}
