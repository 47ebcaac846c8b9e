//! Status and category badges.

use crate::theme::tone_colors;
use dioxus::prelude::*;
use wdf_content::models::Tone;

#[derive(Props, Clone, PartialEq)]
pub struct BadgeProps {
    pub label: String,
    #[props(default = Tone::Neutral)]
    pub tone: Tone,
    /// Outline style ignores the tone and draws a plain bordered pill.
    #[props(default = false)]
    pub outline: bool,
}

/// A small rounded pill with a label.
#[component]
pub fn Badge(props: BadgeProps) -> Element {
    let style = if props.outline {
        "border: 1px solid #e2e8f0; color: #0f172a; background: white;".to_string()
    } else {
        let (fg, bg) = tone_colors(props.tone);
        format!("color: {}; background: {};", fg, bg)
    };

    rsx! {
        span {
            style: "display: inline-block; padding: 2px 10px; border-radius: 9999px; font-size: 12px; font-weight: 600; {style}",
            "{props.label}"
        }
    }
}
