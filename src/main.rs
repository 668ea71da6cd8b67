mod api;
mod components;
mod config;
mod engine;
mod error;
mod geometry;
mod model;
mod render;
mod route;
mod state;

use components::{App, AppProps};
use config::BoardConfig;
use route::Route;

const HOST_ID: &str = "game-board";

fn main() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        web_sys::console::warn_1(&"logger already initialised".into());
    }

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::error!("no document available; cannot mount board");
        return;
    };
    let Some(host) = document.get_element_by_id(HOST_ID) else {
        log::error!("no #{} element on the page", HOST_ID);
        return;
    };

    let config = BoardConfig::from_element(&host);
    let route = Route::current();
    log::info!(
        "mounting {}x{} board ({} cells) for {:?}",
        config.cells_in_row,
        config.rows(),
        config.cells_count,
        route
    );
    yew::Renderer::<App>::with_root_and_props(host, AppProps { config, route }).render();
}
