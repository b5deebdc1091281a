//! Dentist registry management (dentists only).

use smilecare_frontend_common::services::AuthApiService;
use smilecare_frontend_common::{EmptyState, ErrorBanner, Spinner, SuccessBanner};
use smilecare_http::types::{Dentist, DentistUpdate, RegisterRequest, Role};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::ConfirmModal;
use crate::services::DentistService;

#[derive(Clone, Default, PartialEq)]
struct NewDentistForm {
    first_name: String,
    last_name: String,
    email: String,
    phone: String,
    password: String,
}

#[derive(Clone, PartialEq)]
struct EditDentistForm {
    user_id: i64,
    first_name: String,
    last_name: String,
    email: String,
    phone: String,
}

impl EditDentistForm {
    fn from_record(record: &Dentist) -> Self {
        Self {
            user_id: record.user_id,
            first_name: record.first_name.clone(),
            last_name: record.last_name.clone(),
            email: record.email.clone(),
            phone: record.phone.clone().unwrap_or_default(),
        }
    }
}

#[function_component(Dentists)]
pub fn dentists() -> Html {
    let dentists = use_state(|| Option::<Vec<Dentist>>::None);
    let load_error = use_state(|| Option::<String>::None);
    let reload = use_state(|| 0u32);

    let form = use_state(NewDentistForm::default);
    let editing = use_state(|| Option::<EditDentistForm>::None);
    let delete_target = use_state(|| Option::<Dentist>::None);

    let notice = use_state(|| Option::<Result<String, String>>::None);

    // One flag per mutation so the rest of the screen stays interactive.
    let creating = use_state(|| false);
    let updating = use_state(|| false);
    let deleting = use_state(|| false);

    {
        let dentists = dentists.clone();
        let load_error = load_error.clone();
        use_effect_with(*reload, move |_| {
            spawn_local(async move {
                match DentistService::new().list().await {
                    Ok(list) => dentists.set(Some(list)),
                    Err(err) => {
                        log::error!("failed to load dentists: {err}");
                        load_error.set(Some(err.display_message()));
                    }
                }
            });
            || ()
        });
    }

    let form_field = |apply: fn(&mut NewDentistForm, String)| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            apply(&mut next, input.value());
            form.set(next);
        })
    };

    let edit_field = |apply: fn(&mut EditDentistForm, String)| {
        let editing = editing.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Some(current) = (*editing).clone() {
                let mut next = current;
                apply(&mut next, input.value());
                editing.set(Some(next));
            }
        })
    };

    let on_create = {
        let form = form.clone();
        let notice = notice.clone();
        let creating = creating.clone();
        let reload = reload.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *creating {
                return;
            }
            let current = (*form).clone();
            let form = form.clone();
            let notice = notice.clone();
            let creating = creating.clone();
            let reload = reload.clone();

            notice.set(None);
            creating.set(true);
            spawn_local(async move {
                // New dentists go through the same registration endpoint as
                // patients, with the dentist role.
                let profile = RegisterRequest {
                    first_name: current.first_name,
                    last_name: current.last_name,
                    email: current.email,
                    phone: current.phone,
                    gender: None,
                    password: current.password,
                    role_id: Role::Dentist.role_id(),
                };
                match AuthApiService::new().register(profile).await {
                    Ok(()) => {
                        form.set(NewDentistForm::default());
                        notice.set(Some(Ok("Dentist registered".to_string())));
                        reload.set(*reload + 1);
                    }
                    Err(err) => {
                        notice.set(Some(Err(err.display_message())));
                    }
                }
                creating.set(false);
            });
        })
    };

    let on_save_edit = {
        let editing = editing.clone();
        let notice = notice.clone();
        let updating = updating.clone();
        let reload = reload.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *updating {
                return;
            }
            let Some(current) = (*editing).clone() else {
                return;
            };
            let editing = editing.clone();
            let notice = notice.clone();
            let updating = updating.clone();
            let reload = reload.clone();

            notice.set(None);
            updating.set(true);
            spawn_local(async move {
                let update = DentistUpdate {
                    first_name: current.first_name,
                    last_name: current.last_name,
                    email: current.email,
                    phone: current.phone,
                };
                match DentistService::new().update(current.user_id, update).await {
                    Ok(()) => {
                        editing.set(None);
                        notice.set(Some(Ok("Dentist updated".to_string())));
                        reload.set(*reload + 1);
                    }
                    Err(err) => {
                        notice.set(Some(Err(err.display_message())));
                    }
                }
                updating.set(false);
            });
        })
    };

    let on_confirm_delete = {
        let delete_target = delete_target.clone();
        let notice = notice.clone();
        let deleting = deleting.clone();
        let reload = reload.clone();
        Callback::from(move |_| {
            if *deleting {
                return;
            }
            let Some(target) = (*delete_target).clone() else {
                return;
            };
            let delete_target = delete_target.clone();
            let notice = notice.clone();
            let deleting = deleting.clone();
            let reload = reload.clone();

            deleting.set(true);
            spawn_local(async move {
                match DentistService::new().delete(target.user_id).await {
                    Ok(()) => {
                        notice.set(Some(Ok("Dentist removed".to_string())));
                        reload.set(*reload + 1);
                    }
                    Err(err) => {
                        notice.set(Some(Err(err.display_message())));
                    }
                }
                delete_target.set(None);
                deleting.set(false);
            });
        })
    };

    let on_cancel_delete = {
        let delete_target = delete_target.clone();
        Callback::from(move |_| delete_target.set(None))
    };

    if let Some(message) = (*load_error).clone() {
        return html! {
            <div class="max-w-5xl mx-auto px-4 py-8">
                <ErrorBanner message={message} />
            </div>
        };
    }
    let Some(list) = (*dentists).clone() else {
        return html! { <Spinner text="Loading dentists..." /> };
    };

    let input_class = "w-full border border-gray-300 rounded-lg px-3 py-2 focus:outline-none focus:ring-2 focus:ring-teal-500";
    let label_class = "block text-sm font-medium text-gray-700 mb-1";

    html! {
        <div class="max-w-5xl mx-auto px-4 py-8">
            <h1 class="text-2xl font-bold text-gray-900 mb-6">{"Dentists"}</h1>

            if let Some(current) = (*notice).clone() {
                <div class="mb-4">
                    { match current {
                        Ok(message) => html! { <SuccessBanner message={message} /> },
                        Err(message) => html! { <ErrorBanner message={message} /> },
                    } }
                </div>
            }

            <form onsubmit={on_create}
                class="bg-white rounded-xl shadow-sm border border-gray-100 p-6 mb-8">
                <h2 class="text-lg font-semibold text-gray-800 mb-4">{"Register a dentist"}</h2>
                <div class="grid md:grid-cols-2 gap-4">
                    <div>
                        <label class={label_class}>{"First name"}</label>
                        <input type="text" required=true class={input_class}
                            value={form.first_name.clone()}
                            oninput={form_field(|f, v| f.first_name = v)} />
                    </div>
                    <div>
                        <label class={label_class}>{"Last name"}</label>
                        <input type="text" required=true class={input_class}
                            value={form.last_name.clone()}
                            oninput={form_field(|f, v| f.last_name = v)} />
                    </div>
                    <div>
                        <label class={label_class}>{"Email"}</label>
                        <input type="email" required=true class={input_class}
                            value={form.email.clone()}
                            oninput={form_field(|f, v| f.email = v)} />
                    </div>
                    <div>
                        <label class={label_class}>{"Phone"}</label>
                        <input type="tel" required=true class={input_class}
                            value={form.phone.clone()}
                            oninput={form_field(|f, v| f.phone = v)} />
                    </div>
                    <div>
                        <label class={label_class}>{"Temporary password"}</label>
                        <input type="password" required=true class={input_class}
                            value={form.password.clone()}
                            oninput={form_field(|f, v| f.password = v)} />
                    </div>
                </div>
                <button type="submit" disabled={*creating}
                    class="mt-4 px-4 py-2 bg-teal-600 text-white rounded-lg hover:bg-teal-700 disabled:opacity-50">
                    { if *creating { "Registering..." } else { "Register dentist" } }
                </button>
            </form>

            if list.is_empty() {
                <EmptyState
                    title="No dentists registered"
                    description="Register the first dentist with the form above." />
            } else {
                <div class="bg-white rounded-xl shadow-sm border border-gray-100 divide-y divide-gray-100">
                    { for list.iter().map(|record| {
                        let is_editing =
                            editing.as_ref().map(|e| e.user_id) == Some(record.user_id);
                        if is_editing {
                            let current = (*editing).clone();
                            html! {
                                <form onsubmit={on_save_edit.clone()} class="p-4 grid md:grid-cols-5 gap-3 items-end"
                                    key={record.user_id}>
                                    <input type="text" required=true class={input_class}
                                        value={current.as_ref().map(|c| c.first_name.clone()).unwrap_or_default()}
                                        oninput={edit_field(|f, v| f.first_name = v)} />
                                    <input type="text" required=true class={input_class}
                                        value={current.as_ref().map(|c| c.last_name.clone()).unwrap_or_default()}
                                        oninput={edit_field(|f, v| f.last_name = v)} />
                                    <input type="email" required=true class={input_class}
                                        value={current.as_ref().map(|c| c.email.clone()).unwrap_or_default()}
                                        oninput={edit_field(|f, v| f.email = v)} />
                                    <input type="tel" class={input_class}
                                        value={current.as_ref().map(|c| c.phone.clone()).unwrap_or_default()}
                                        oninput={edit_field(|f, v| f.phone = v)} />
                                    <div class="flex gap-2">
                                        <button type="submit" disabled={*updating}
                                            class="px-3 py-2 bg-teal-600 text-white rounded-lg hover:bg-teal-700 disabled:opacity-50">
                                            { if *updating { "Saving..." } else { "Save" } }
                                        </button>
                                        <button type="button"
                                            onclick={{
                                                let editing = editing.clone();
                                                Callback::from(move |_| editing.set(None))
                                            }}
                                            class="px-3 py-2 bg-gray-200 text-gray-800 rounded-lg hover:bg-gray-300">
                                            {"Cancel"}
                                        </button>
                                    </div>
                                </form>
                            }
                        } else {
                            html! {
                                <div class="p-4 flex items-center justify-between" key={record.user_id}>
                                    <div>
                                        <p class="font-medium text-gray-900">
                                            {format!("Dr. {} {}", record.first_name, record.last_name)}
                                        </p>
                                        <p class="text-sm text-gray-500">
                                            {&record.email}
                                            if let Some(phone) = &record.phone {
                                                {format!(" · {phone}")}
                                            }
                                        </p>
                                    </div>
                                    <div class="flex gap-2">
                                        <button
                                            onclick={{
                                                let editing = editing.clone();
                                                let record = record.clone();
                                                Callback::from(move |_| {
                                                    editing.set(Some(EditDentistForm::from_record(&record)))
                                                })
                                            }}
                                            class="px-3 py-1.5 text-sm bg-white border border-gray-300 rounded-lg hover:bg-gray-50">
                                            {"Edit"}
                                        </button>
                                        <button
                                            onclick={{
                                                let delete_target = delete_target.clone();
                                                let record = record.clone();
                                                Callback::from(move |_| delete_target.set(Some(record.clone())))
                                            }}
                                            class="px-3 py-1.5 text-sm bg-white border border-red-300 text-red-600 rounded-lg hover:bg-red-50">
                                            {"Delete"}
                                        </button>
                                    </div>
                                </div>
                            }
                        }
                    }) }
                </div>
            }

            if let Some(target) = (*delete_target).clone() {
                <ConfirmModal
                    title="Remove dentist"
                    message={format!("Remove Dr. {} {} from the registry? This cannot be undone.",
                        target.first_name, target.last_name)}
                    busy={*deleting}
                    on_confirm={on_confirm_delete.clone()}
                    on_cancel={on_cancel_delete.clone()}
                />
            }
        </div>
    }
}
