//! Home screen: marketing landing for visitors, role dashboard for
//! signed-in users.

use smilecare_frontend_common::auth::use_identity;
use smilecare_frontend_common::{ErrorBanner, Spinner};
use smilecare_http::types::Appointment;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{DentistDashboard, PatientDashboard};
use crate::routes::Route;
use crate::services::AppointmentService;

#[function_component(Home)]
pub fn home() -> Html {
    let identity = use_identity();

    match identity {
        Some(user) => html! { <Dashboard user={user} /> },
        None => html! { <Landing /> },
    }
}

#[function_component(Landing)]
fn landing() -> Html {
    html! {
        <div class="max-w-5xl mx-auto px-4 py-20 text-center">
            <h1 class="text-4xl font-bold text-gray-900">
                {"Healthy smiles start here"}
            </h1>
            <p class="text-lg text-gray-500 mt-4 max-w-2xl mx-auto">
                {"Book dental appointments online, track your visits, and keep your \
                  whole family's teeth in great shape."}
            </p>
            <div class="mt-8 flex justify-center gap-4">
                <Link<Route> to={Route::Register}
                    classes="px-6 py-3 bg-teal-600 text-white rounded-lg hover:bg-teal-700 font-medium">
                    {"Get started"}
                </Link<Route>>
                <Link<Route> to={Route::Login}
                    classes="px-6 py-3 bg-white border border-teal-600 text-teal-700 rounded-lg hover:bg-teal-50 font-medium">
                    {"Log in"}
                </Link<Route>>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct DashboardContainerProps {
    user: smilecare_http::types::UserInfo,
}

#[function_component(Dashboard)]
fn dashboard(props: &DashboardContainerProps) -> Html {
    let appointments = use_state(|| Option::<Vec<Appointment>>::None);
    let error = use_state(|| Option::<String>::None);

    {
        let appointments = appointments.clone();
        let error = error.clone();
        let user_id = props.user.user_id;
        use_effect_with(user_id, move |_| {
            spawn_local(async move {
                match AppointmentService::new().list_for_user(user_id).await {
                    Ok(list) => appointments.set(Some(list)),
                    Err(err) => {
                        log::error!("failed to load appointments: {err}");
                        error.set(Some(err.display_message()));
                    }
                }
            });
            || ()
        });
    }

    if let Some(message) = (*error).clone() {
        return html! {
            <div class="max-w-5xl mx-auto px-4 py-8">
                <ErrorBanner message={message} />
            </div>
        };
    }

    let Some(list) = (*appointments).clone() else {
        return html! { <Spinner text="Loading your dashboard..." /> };
    };

    if props.user.is_dentist() {
        html! { <DentistDashboard user={props.user.clone()} appointments={list} /> }
    } else {
        html! { <PatientDashboard user={props.user.clone()} appointments={list} /> }
    }
}
