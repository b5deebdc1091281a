//! Inline alert banners for form and mutation feedback

use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct BannerProps {
    pub message: String,
}

#[function_component(ErrorBanner)]
pub fn error_banner(props: &BannerProps) -> Html {
    html! {
        <div class="mb-4 p-4 bg-red-50 border border-red-200 rounded-md" role="alert">
            <p class="text-sm text-red-700 m-0">{&props.message}</p>
        </div>
    }
}

#[function_component(SuccessBanner)]
pub fn success_banner(props: &BannerProps) -> Html {
    html! {
        <div class="mb-4 p-4 bg-green-50 border border-green-200 rounded-md" role="alert">
            <p class="text-sm text-green-700 m-0">{&props.message}</p>
        </div>
    }
}
