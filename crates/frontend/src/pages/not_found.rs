use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="max-w-2xl mx-auto px-4 py-24 text-center">
            <p class="text-6xl font-bold text-teal-600">{"404"}</p>
            <h1 class="text-xl font-semibold text-gray-900 mt-4">{"Page not found"}</h1>
            <p class="text-gray-500 mt-2">{"The page you are looking for does not exist."}</p>
            <Link<Route> to={Route::Home}
                classes="inline-block mt-6 px-4 py-2 bg-teal-600 text-white rounded-lg hover:bg-teal-700">
                {"Back to home"}
            </Link<Route>>
        </div>
    }
}
