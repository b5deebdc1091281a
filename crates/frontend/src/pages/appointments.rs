//! Appointment list screen, shared by both roles.
//!
//! Dentists see confirm and cancel on pending appointments; patients only
//! cancel. The role check runs locally before any request goes out.

use gloo::timers::callback::Timeout;
use smilecare_frontend_common::auth::use_identity;
use smilecare_frontend_common::{EmptyState, ErrorBanner, Spinner, SuccessBanner};
use smilecare_http::types::{Appointment, AppointmentUpdate};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::AppointmentCard;
use crate::services::AppointmentService;
use crate::stats::{check_action, AppointmentAction};

const NOTICE_MILLIS: u32 = 3_000;

#[derive(Clone, PartialEq)]
struct Notice {
    message: String,
    is_error: bool,
}

#[function_component(Appointments)]
pub fn appointments() -> Html {
    let identity = use_identity();

    let appointments = use_state(|| Option::<Vec<Appointment>>::None);
    let load_error = use_state(|| Option::<String>::None);
    let notice = use_state(|| Option::<Notice>::None);
    // Appointment currently being updated, so only its card shows a spinner.
    let busy_id = use_state(|| Option::<i64>::None);
    let reload = use_state(|| 0u32);

    {
        let appointments = appointments.clone();
        let load_error = load_error.clone();
        let user_id = identity.as_ref().map(|u| u.user_id);
        use_effect_with((user_id, *reload), move |(user_id, _)| {
            if let Some(user_id) = *user_id {
                spawn_local(async move {
                    match AppointmentService::new().list_for_user(user_id).await {
                        Ok(list) => appointments.set(Some(list)),
                        Err(err) => {
                            log::error!("failed to load appointments: {err}");
                            load_error.set(Some(err.display_message()));
                        }
                    }
                });
            }
            || ()
        });
    }

    // Notices clear themselves after a few seconds.
    {
        let notice_handle = notice.clone();
        use_effect_with((*notice).clone(), move |current| {
            let timer = current.as_ref().map(|_| {
                Timeout::new(NOTICE_MILLIS, move || notice_handle.set(None))
            });
            move || drop(timer)
        });
    }

    let is_dentist = identity.as_ref().map(|u| u.is_dentist()).unwrap_or(false);
    let role = identity.as_ref().and_then(|u| u.role());

    let on_action = {
        let notice = notice.clone();
        let busy_id = busy_id.clone();
        let reload = reload.clone();
        Callback::from(move |(appointment, action): (Appointment, AppointmentAction)| {
            if busy_id.is_some() {
                return;
            }
            let Some(role) = role else {
                return;
            };
            if let Err(message) = check_action(role, appointment.status(), action) {
                notice.set(Some(Notice {
                    message: message.to_string(),
                    is_error: true,
                }));
                return;
            }

            let notice = notice.clone();
            let busy_id = busy_id.clone();
            let reload = reload.clone();

            busy_id.set(Some(appointment.appointment_id));
            spawn_local(async move {
                let update = AppointmentUpdate {
                    status: action.status_code().to_string(),
                    patient_user_id: appointment.patient.user_id,
                    dentist_user_id: appointment.dentist.user_id,
                    appointment_date: appointment.appointment_date.clone(),
                };
                let result = AppointmentService::new()
                    .update(appointment.appointment_id, update)
                    .await;
                busy_id.set(None);
                match result {
                    Ok(()) => {
                        notice.set(Some(Notice {
                            message: format!("Appointment {}", action.past_tense()),
                            is_error: false,
                        }));
                        reload.set(*reload + 1);
                    }
                    Err(err) => {
                        notice.set(Some(Notice {
                            message: err.display_message(),
                            is_error: true,
                        }));
                    }
                }
            });
        })
    };

    if let Some(message) = (*load_error).clone() {
        return html! {
            <div class="max-w-5xl mx-auto px-4 py-8">
                <ErrorBanner message={message} />
            </div>
        };
    }
    let Some(list) = (*appointments).clone() else {
        return html! { <Spinner text="Loading appointments..." /> };
    };

    html! {
        <div class="max-w-5xl mx-auto px-4 py-8">
            <h1 class="text-2xl font-bold text-gray-900 mb-6">
                { if is_dentist { "Patient appointments" } else { "My appointments" } }
            </h1>

            if let Some(current) = (*notice).clone() {
                <div class="mb-4">
                    if current.is_error {
                        <ErrorBanner message={current.message} />
                    } else {
                        <SuccessBanner message={current.message} />
                    }
                </div>
            }

            if list.is_empty() {
                <EmptyState
                    title="No appointments yet"
                    description="Appointments you book will show up here." />
            } else {
                <div class="grid gap-4 md:grid-cols-2">
                    { for list.iter().map(|appt| html! {
                        <AppointmentCard
                            key={appt.appointment_id}
                            appointment={appt.clone()}
                            is_dentist={is_dentist}
                            busy={*busy_id == Some(appt.appointment_id)}
                            on_action={Some(on_action.clone())}
                        />
                    }) }
                </div>
            }
        </div>
    }
}
