//! Delete confirmation modal

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ConfirmModalProps {
    pub title: String,
    pub message: String,
    pub busy: bool,
    pub on_confirm: Callback<()>,
    pub on_cancel: Callback<()>,
}

#[function_component(ConfirmModal)]
pub fn confirm_modal(props: &ConfirmModalProps) -> Html {
    let on_confirm = {
        let cb = props.on_confirm.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let on_cancel = {
        let cb = props.on_cancel.clone();
        Callback::from(move |_| cb.emit(()))
    };

    html! {
        <div class="fixed inset-0 bg-black/50 flex items-center justify-center z-50">
            <div class="bg-white rounded-lg p-6 max-w-sm w-full mx-4">
                <h3 class="text-lg font-semibold mb-2 text-gray-900">{&props.title}</h3>
                <p class="text-sm text-gray-600 mb-6">{&props.message}</p>
                <div class="flex gap-3">
                    <button
                        onclick={on_confirm}
                        disabled={props.busy}
                        class="flex-1 px-4 py-2 bg-red-600 text-white rounded-lg hover:bg-red-700 disabled:opacity-50"
                    >
                        if props.busy {
                            <span class="inline-block w-3 h-3 border-2 border-white/40 border-t-white rounded-full animate-spin mr-2"></span>
                        }
                        {"Delete"}
                    </button>
                    <button
                        onclick={on_cancel}
                        disabled={props.busy}
                        class="flex-1 px-4 py-2 bg-gray-200 text-gray-800 rounded-lg hover:bg-gray-300"
                    >
                        {"Cancel"}
                    </button>
                </div>
            </div>
        </div>
    }
}
