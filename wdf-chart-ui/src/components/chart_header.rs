//! Chart header component with icon, title and description.

use crate::theme::OCEAN_DEEP;
use dioxus::prelude::*;
use wdf_content::models::Icon;

#[derive(Props, Clone, PartialEq)]
pub struct ChartHeaderProps {
    pub icon: Icon,
    /// Chart title
    pub title: String,
    /// What the chart compares (e.g., "Projected water demand compared to ...")
    #[props(default = String::new())]
    pub description: String,
}

/// Header for chart cards showing an icon, the title and an optional description.
#[component]
pub fn ChartHeader(props: ChartHeaderProps) -> Element {
    rsx! {
        div {
            style: "padding: 20px 24px 8px 24px;",
            h3 {
                style: "display: flex; align-items: center; gap: 8px; font-size: 20px; font-weight: 600;",
                span { style: "color: {OCEAN_DEEP};", "{props.icon.glyph()}" }
                span { "{props.title}" }
            }
            if !props.description.is_empty() {
                p {
                    style: "margin: 4px 0 0 0; font-size: 14px; color: #64748b;",
                    "{props.description}"
                }
            }
        }
    }
}
