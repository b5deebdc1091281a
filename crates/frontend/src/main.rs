mod app;
mod components;
mod guard;
mod pages;
mod routes;
mod services;
mod stats;

use app::App;

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    yew::Renderer::<App>::new().render();
}
