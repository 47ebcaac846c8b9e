//! Inline error panel.

use crate::theme::{tone_colors, ALERT_RED};
use dioxus::prelude::*;
use wdf_content::models::{Icon, Tone};

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
    #[props(default = "This section could not be shown".to_string())]
    pub title: String,
}

/// Shown in place of a page section whose selection failed to resolve.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    let (fg, bg) = tone_colors(Tone::Critical);

    rsx! {
        div {
            role: "alert",
            style: "display: flex; gap: 12px; align-items: flex-start; padding: 16px 20px; margin: 16px 0; background: {bg}; color: {fg}; border-left: 4px solid {ALERT_RED}; border-radius: 8px;",
            span { style: "font-size: 20px;", "{Icon::AlertTriangle.glyph()}" }
            div {
                div { style: "font-weight: 600; margin-bottom: 4px;", "{props.title}" }
                div { style: "font-size: 14px;", "{props.message}" }
            }
        }
    }
}
