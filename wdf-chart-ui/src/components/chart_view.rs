//! A D3 chart bound to a spec and its data.

use crate::chart::{ChartData, ChartSpec};
use crate::components::ChartContainer;
use crate::js_bridge;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartViewProps {
    /// DOM id of the chart container; must be unique on the page
    pub id: String,
    pub spec: ChartSpec,
    pub data: ChartData,
    /// Accessible name, usually the chart title
    #[props(default = String::new())]
    pub label: String,
}

/// Renders its chart once the container is mounted.
///
/// The chart is redrawn whenever the component remounts, e.g. when a
/// dashboard tab is reopened.
#[component]
pub fn ChartView(props: ChartViewProps) -> Element {
    let id = props.id.clone();
    let spec = props.spec.clone();
    let data = props.data.clone();

    use_effect(move || {
        if let Err(e) = js_bridge::render_chart(&id, &spec, &data) {
            log::error!("Failed to render chart {}: {}", id, e);
        }
    });

    rsx! {
        ChartContainer {
            id: props.id.clone(),
            label: props.label.clone(),
            min_height: props.spec.height,
        }
    }
}
