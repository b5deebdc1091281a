//! Application shell: session provider, router, and route switch.

use smilecare_frontend_common::auth::SessionProvider;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::Navigation;
use crate::guard::Guarded;
use crate::pages;
use crate::routes::Route;

fn switch(route: Route) -> Html {
    let page = match route {
        Route::Home => html! { <pages::Home /> },
        Route::Login => html! { <pages::Login /> },
        Route::Register => html! { <pages::Register /> },
        Route::Schedule => html! { <pages::Schedule /> },
        Route::Appointments => html! { <pages::Appointments /> },
        Route::Dentists => html! { <pages::Dentists /> },
        Route::Services => html! { <pages::Services /> },
        Route::NotFound => html! { <pages::NotFound /> },
    };
    html! { <Guarded route={route}>{page}</Guarded> }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <SessionProvider>
            <BrowserRouter>
                <div class="min-h-screen bg-gray-50">
                    <Navigation />
                    <Switch<Route> render={switch} />
                </div>
            </BrowserRouter>
        </SessionProvider>
    }
}
