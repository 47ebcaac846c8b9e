//! Card container used by every page.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct CardProps {
    /// Optional header title; no header is drawn when empty
    #[props(default = String::new())]
    pub title: String,
    #[props(default = String::new())]
    pub subtitle: String,
    /// CSS background of the header band
    #[props(default = String::new())]
    pub header_background: String,
    #[props(default = String::new())]
    pub title_color: String,
    #[props(default = false)]
    pub centered: bool,
    /// Lift the card on hover
    #[props(default = false)]
    pub hoverable: bool,
    /// Extra inline style for the outer card
    #[props(default = String::new())]
    pub style: String,
    pub children: Element,
}

/// White rounded card with an optional header band.
#[component]
pub fn Card(props: CardProps) -> Element {
    let class = if props.hoverable { "wdf-card hoverable" } else { "wdf-card" };
    let align = if props.centered { "center" } else { "left" };
    let title_color = if props.title_color.is_empty() {
        "inherit".to_string()
    } else {
        props.title_color.clone()
    };
    let header_background = if props.header_background.is_empty() {
        "transparent".to_string()
    } else {
        props.header_background.clone()
    };

    rsx! {
        div {
            class: "{class}",
            style: "{props.style}",
            if !props.title.is_empty() {
                div {
                    style: "padding: 20px 24px; background: {header_background}; text-align: {align};",
                    h3 {
                        style: "font-size: 22px; font-weight: 600; color: {title_color};",
                        "{props.title}"
                    }
                    if !props.subtitle.is_empty() {
                        p {
                            style: "margin: 6px 0 0 0; color: #64748b;",
                            "{props.subtitle}"
                        }
                    }
                }
            }
            div {
                style: "padding: 24px;",
                {props.children}
            }
        }
    }
}
