//! Loading spinner components

use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct SpinnerProps {
    #[prop_or_default]
    pub text: Option<String>,
}

#[function_component(LoadingSpinner)]
pub fn loading_spinner(props: &SpinnerProps) -> Html {
    html! {
        <div class="text-center p-10">
            <div class="w-10 h-10 border-4 border-gray-200 border-t-teal-500 rounded-full animate-spin mx-auto mb-5"></div>
            if let Some(text) = &props.text {
                <p class="text-gray-600 text-sm m-0">{text}</p>
            }
        </div>
    }
}

/// Full-page loading screen shown while the session resolves. Nothing else
/// renders behind it.
#[function_component(LoadingScreen)]
pub fn loading_screen() -> Html {
    html! {
        <div class="min-h-screen flex items-center justify-center bg-gray-50">
            <div class="text-center">
                <div class="inline-flex items-center justify-center w-20 h-20 bg-teal-100 rounded-full mb-6 animate-pulse">
                    <svg class="w-10 h-10 text-teal-600" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2"
                            d="M12 6.253v13m0-13C10.832 5.477 9.246 5 7.5 5S4.168 5.477 3 6.253v13C4.168 18.477 5.754 18 7.5 18s3.332.477 4.5 1.253m0-13C13.168 5.477 14.754 5 16.5 5c1.747 0 3.332.477 4.5 1.253v13C19.832 18.477 18.247 18 16.5 18c-1.746 0-3.332.477-4.5 1.253"></path>
                    </svg>
                </div>
                <div class="w-10 h-10 border-4 border-gray-200 border-t-teal-500 rounded-full animate-spin mx-auto"></div>
            </div>
        </div>
    }
}
