//! Forecasting Future Water Requirements
//!
//! Six-page informational site for a water demand forecasting and
//! reservoir assessment project, built with Dioxus 0.7 and D3.js.
//!
//! Page content comes from the `wdf-content` catalog; shared components,
//! selection state and the D3 chart bridge come from `wdf-chart-ui`. This
//! crate only owns the router, the navigation shell and the page layouts.

mod pages;
mod routes;

use dioxus::prelude::*;
use routes::Route;
use wdf_chart_ui::theme::GLOBAL_CSS;

/// Id of the element the app mounts into.
const ROOT_ID: &str = "main";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    log::info!("Starting water demand forecasting site");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname(ROOT_ID))
        .launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        style { "{GLOBAL_CSS}" }
        Router::<Route> {}
    }
}
