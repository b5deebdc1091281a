//! Empty state component

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct EmptyStateProps {
    pub title: String,
    pub description: String,
}

#[function_component(EmptyState)]
pub fn empty_state(props: &EmptyStateProps) -> Html {
    html! {
        <div class="text-center py-12">
            <h3 class="mt-2 text-sm font-medium text-gray-900">
                {&props.title}
            </h3>
            <p class="mt-1 text-sm text-gray-500">
                {&props.description}
            </p>
        </div>
    }
}
