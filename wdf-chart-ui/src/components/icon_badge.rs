//! Gradient icon bubbles.

use crate::theme::gradient;
use dioxus::prelude::*;
use wdf_content::models::Icon;

#[derive(Props, Clone, PartialEq)]
pub struct IconBadgeProps {
    pub icon: Icon,
    pub from: String,
    pub to: String,
    /// Edge length in pixels
    #[props(default = 48)]
    pub size: u32,
    /// Circle instead of rounded square
    #[props(default = true)]
    pub round: bool,
}

/// An icon glyph on a gradient background.
#[component]
pub fn IconBadge(props: IconBadgeProps) -> Element {
    let background = gradient(&props.from, &props.to);
    let radius = if props.round { "9999px" } else { "10px" };
    let font_size = props.size / 2;

    rsx! {
        div {
            style: "display: inline-flex; align-items: center; justify-content: center; flex-shrink: 0; width: {props.size}px; height: {props.size}px; border-radius: {radius}; background: {background}; color: white; font-size: {font_size}px;",
            "{props.icon.glyph()}"
        }
    }
}
