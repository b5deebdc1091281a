//! Appointment booking screen (patients only).

use chrono::Local;
use smilecare_frontend_common::auth::use_identity;
use smilecare_frontend_common::{EmptyState, ErrorBanner, Spinner, SuccessBanner};
use smilecare_http::types::{Dentist, NewAppointment, ServiceInfo};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::services::{AppointmentService, DentistService, ServiceRegistryService};

#[derive(Clone, Default, PartialEq)]
struct BookingForm {
    dentist_user_id: Option<i64>,
    service_id: Option<i64>,
    appointment_date: String,
    notes: String,
}

#[function_component(Schedule)]
pub fn schedule() -> Html {
    let identity = use_identity();

    let dentists = use_state(|| Option::<Vec<Dentist>>::None);
    let services = use_state(|| Option::<Vec<ServiceInfo>>::None);
    let form = use_state(BookingForm::default);
    let error = use_state(|| Option::<String>::None);
    let success = use_state(|| false);
    let busy = use_state(|| false);

    // Both option lists load in parallel; the form is unusable until both
    // are in.
    {
        let dentists = dentists.clone();
        let services = services.clone();
        let error = error.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let dentist_service = DentistService::new();
                let service_registry = ServiceRegistryService::new();
                let (dentist_result, service_result) = futures::join!(
                    dentist_service.list(),
                    service_registry.list(),
                );
                match (dentist_result, service_result) {
                    (Ok(d), Ok(s)) => {
                        dentists.set(Some(d));
                        services.set(Some(s));
                    }
                    (Err(err), _) | (_, Err(err)) => {
                        log::error!("failed to load booking options: {err}");
                        error.set(Some(err.display_message()));
                    }
                }
            });
            || ()
        });
    }

    let on_dentist = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.dentist_user_id = select.value().parse().ok();
            form.set(next);
        })
    };
    let on_service = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.service_id = select.value().parse().ok();
            form.set(next);
        })
    };
    let on_date = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.appointment_date = input.value();
            form.set(next);
        })
    };
    let on_notes = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.notes = area.value();
            form.set(next);
        })
    };

    let on_submit = {
        let identity = identity.clone();
        let form = form.clone();
        let error = error.clone();
        let success = success.clone();
        let busy = busy.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *busy {
                return;
            }
            let Some(user) = identity.clone() else {
                return;
            };
            let current = (*form).clone();
            let (Some(dentist_user_id), Some(service_id)) =
                (current.dentist_user_id, current.service_id)
            else {
                error.set(Some("Please choose a dentist and a service".to_string()));
                return;
            };
            if current.appointment_date.is_empty() {
                error.set(Some("Please pick a date and time".to_string()));
                return;
            }

            let form = form.clone();
            let error = error.clone();
            let success = success.clone();
            let busy = busy.clone();

            error.set(None);
            success.set(false);
            busy.set(true);
            spawn_local(async move {
                let request = NewAppointment {
                    appointment_date: current.appointment_date,
                    dentist_user_id,
                    service_id,
                    patient_user_id: user.user_id,
                    notes: current.notes,
                    status: "P".to_string(),
                };
                match AppointmentService::new().create(request).await {
                    Ok(()) => {
                        form.set(BookingForm::default());
                        success.set(true);
                    }
                    Err(err) => {
                        error.set(Some(err.display_message()));
                    }
                }
                busy.set(false);
            });
        })
    };

    let (Some(dentist_list), Some(service_list)) = ((*dentists).clone(), (*services).clone())
    else {
        return match (*error).clone() {
            Some(message) => html! {
                <div class="max-w-2xl mx-auto px-4 py-8">
                    <ErrorBanner message={message} />
                </div>
            },
            None => html! { <Spinner text="Loading available options..." /> },
        };
    };

    if dentist_list.is_empty() || service_list.is_empty() {
        return html! {
            <div class="max-w-2xl mx-auto px-4 py-8">
                <EmptyState
                    title="Booking unavailable"
                    description="No dentists or services are available yet. Please check back later." />
            </div>
        };
    }

    let min_datetime = Local::now().format("%Y-%m-%dT%H:%M").to_string();
    let input_class = "w-full border border-gray-300 rounded-lg px-3 py-2 focus:outline-none focus:ring-2 focus:ring-teal-500";
    let label_class = "block text-sm font-medium text-gray-700 mb-1";

    html! {
        <div class="max-w-2xl mx-auto px-4 py-8">
            <h1 class="text-2xl font-bold text-gray-900 mb-6">{"Book an appointment"}</h1>

            if *success {
                <div class="mb-4">
                    <SuccessBanner message="Appointment requested. You'll see it in your list as pending." />
                </div>
            }
            if let Some(message) = (*error).clone() {
                <div class="mb-4">
                    <ErrorBanner message={message} />
                </div>
            }

            <form onsubmit={on_submit}
                class="bg-white rounded-xl shadow-sm border border-gray-100 p-6 space-y-4">
                <div>
                    <label class={label_class}>{"Dentist"}</label>
                    <select class={input_class} onchange={on_dentist} required=true>
                        <option value="" selected={form.dentist_user_id.is_none()}>
                            {"Select a dentist..."}
                        </option>
                        { for dentist_list.iter().map(|d| html! {
                            <option value={d.user_id.to_string()}
                                selected={form.dentist_user_id == Some(d.user_id)}>
                                {format!("Dr. {} {}", d.first_name, d.last_name)}
                            </option>
                        }) }
                    </select>
                </div>

                <div>
                    <label class={label_class}>{"Service"}</label>
                    <select class={input_class} onchange={on_service} required=true>
                        <option value="" selected={form.service_id.is_none()}>
                            {"Select a service..."}
                        </option>
                        { for service_list.iter().map(|s| html! {
                            <option value={s.service_id.to_string()}
                                selected={form.service_id == Some(s.service_id)}>
                                {s.description.clone()}
                            </option>
                        }) }
                    </select>
                </div>

                <div>
                    <label class={label_class}>{"Date and time"}</label>
                    <input type="datetime-local" required=true class={input_class}
                        min={min_datetime}
                        value={form.appointment_date.clone()}
                        oninput={on_date} />
                </div>

                <div>
                    <label class={label_class}>{"Notes (optional)"}</label>
                    <textarea class={input_class} rows="3"
                        placeholder="Anything your dentist should know beforehand"
                        value={form.notes.clone()}
                        oninput={on_notes} />
                </div>

                <button type="submit" disabled={*busy}
                    class="w-full px-4 py-2 bg-teal-600 text-white rounded-lg hover:bg-teal-700 disabled:opacity-50">
                    { if *busy { "Booking..." } else { "Book appointment" } }
                </button>
            </form>
        </div>
    }
}
