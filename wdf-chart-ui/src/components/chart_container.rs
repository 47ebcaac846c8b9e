//! Mount point for a D3 chart.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// DOM id the D3 renderer draws into
    pub id: String,
    /// Accessible name of the drawn chart
    #[props(default = String::new())]
    pub label: String,
    /// Reserved height in pixels, so the page does not jump when D3 draws
    #[props(default = 384)]
    pub min_height: u32,
}

/// Empty figure sized for its chart. The renderer replaces its contents,
/// so nothing Dioxus-managed lives inside the inner div.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    rsx! {
        figure {
            role: "img",
            aria_label: "{props.label}",
            style: "margin: 0; width: 100%; min-height: {props.min_height}px; position: relative;",
            div {
                id: "{props.id}",
                style: "width: 100%;",
            }
        }
    }
}
