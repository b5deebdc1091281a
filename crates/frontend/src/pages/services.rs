//! Service catalog management (dentists only).

use smilecare_frontend_common::{EmptyState, ErrorBanner, Spinner, SuccessBanner};
use smilecare_http::types::ServiceInfo;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::ConfirmModal;
use crate::services::ServiceRegistryService;

#[function_component(Services)]
pub fn services() -> Html {
    let services = use_state(|| Option::<Vec<ServiceInfo>>::None);
    let load_error = use_state(|| Option::<String>::None);
    let reload = use_state(|| 0u32);

    let new_description = use_state(String::new);
    // (service_id, draft description) of the row being edited.
    let editing = use_state(|| Option::<(i64, String)>::None);
    let delete_target = use_state(|| Option::<ServiceInfo>::None);

    let notice = use_state(|| Option::<Result<String, String>>::None);

    let creating = use_state(|| false);
    let updating = use_state(|| false);
    let deleting = use_state(|| false);

    {
        let services = services.clone();
        let load_error = load_error.clone();
        use_effect_with(*reload, move |_| {
            spawn_local(async move {
                match ServiceRegistryService::new().list().await {
                    Ok(list) => services.set(Some(list)),
                    Err(err) => {
                        log::error!("failed to load services: {err}");
                        load_error.set(Some(err.display_message()));
                    }
                }
            });
            || ()
        });
    }

    let on_new_description = {
        let new_description = new_description.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            new_description.set(input.value());
        })
    };

    let on_create = {
        let new_description = new_description.clone();
        let notice = notice.clone();
        let creating = creating.clone();
        let reload = reload.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *creating {
                return;
            }
            let description = new_description.trim().to_string();
            if description.is_empty() {
                notice.set(Some(Err("Description cannot be empty".to_string())));
                return;
            }
            let new_description = new_description.clone();
            let notice = notice.clone();
            let creating = creating.clone();
            let reload = reload.clone();

            notice.set(None);
            creating.set(true);
            spawn_local(async move {
                match ServiceRegistryService::new().create(description).await {
                    Ok(()) => {
                        new_description.set(String::new());
                        notice.set(Some(Ok("Service added".to_string())));
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

    let on_edit_input = {
        let editing = editing.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Some((service_id, _)) = *editing {
                editing.set(Some((service_id, input.value())));
            }
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
            let Some((service_id, description)) = (*editing).clone() else {
                return;
            };
            let description = description.trim().to_string();
            if description.is_empty() {
                notice.set(Some(Err("Description cannot be empty".to_string())));
                return;
            }
            let editing = editing.clone();
            let notice = notice.clone();
            let updating = updating.clone();
            let reload = reload.clone();

            notice.set(None);
            updating.set(true);
            spawn_local(async move {
                match ServiceRegistryService::new().update(service_id, description).await {
                    Ok(()) => {
                        editing.set(None);
                        notice.set(Some(Ok("Service updated".to_string())));
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
                match ServiceRegistryService::new().delete(target.service_id).await {
                    Ok(()) => {
                        notice.set(Some(Ok("Service removed".to_string())));
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
            <div class="max-w-3xl mx-auto px-4 py-8">
                <ErrorBanner message={message} />
            </div>
        };
    }
    let Some(list) = (*services).clone() else {
        return html! { <Spinner text="Loading services..." /> };
    };

    let input_class = "w-full border border-gray-300 rounded-lg px-3 py-2 focus:outline-none focus:ring-2 focus:ring-teal-500";

    html! {
        <div class="max-w-3xl mx-auto px-4 py-8">
            <h1 class="text-2xl font-bold text-gray-900 mb-6">{"Services"}</h1>

            if let Some(current) = (*notice).clone() {
                <div class="mb-4">
                    { match current {
                        Ok(message) => html! { <SuccessBanner message={message} /> },
                        Err(message) => html! { <ErrorBanner message={message} /> },
                    } }
                </div>
            }

            <form onsubmit={on_create}
                class="bg-white rounded-xl shadow-sm border border-gray-100 p-6 mb-8 flex gap-3">
                <input type="text" required=true class={input_class}
                    placeholder="e.g. Teeth cleaning"
                    value={(*new_description).clone()}
                    oninput={on_new_description} />
                <button type="submit" disabled={*creating}
                    class="px-4 py-2 bg-teal-600 text-white rounded-lg hover:bg-teal-700 disabled:opacity-50 whitespace-nowrap">
                    { if *creating { "Adding..." } else { "Add service" } }
                </button>
            </form>

            if list.is_empty() {
                <EmptyState
                    title="No services yet"
                    description="Add the first service your clinic offers." />
            } else {
                <div class="bg-white rounded-xl shadow-sm border border-gray-100 divide-y divide-gray-100">
                    { for list.iter().map(|record| {
                        let is_editing = editing.as_ref().map(|(id, _)| *id) == Some(record.service_id);
                        if is_editing {
                            let draft = (*editing)
                                .as_ref()
                                .map(|(_, d)| d.clone())
                                .unwrap_or_default();
                            html! {
                                <form onsubmit={on_save_edit.clone()} class="p-4 flex gap-3"
                                    key={record.service_id}>
                                    <input type="text" required=true class={input_class}
                                        value={draft}
                                        oninput={on_edit_input.clone()} />
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
                                </form>
                            }
                        } else {
                            html! {
                                <div class="p-4 flex items-center justify-between" key={record.service_id}>
                                    <p class="font-medium text-gray-900">{&record.description}</p>
                                    <div class="flex gap-2">
                                        <button
                                            onclick={{
                                                let editing = editing.clone();
                                                let record = record.clone();
                                                Callback::from(move |_| {
                                                    editing.set(Some((record.service_id, record.description.clone())))
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
                    title="Remove service"
                    message={format!("Remove \"{}\" from the catalog? This cannot be undone.",
                        target.description)}
                    busy={*deleting}
                    on_confirm={on_confirm_delete.clone()}
                    on_cancel={on_cancel_delete.clone()}
                />
            }
        </div>
    }
}
