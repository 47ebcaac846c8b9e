//! Bulleted lists with check or dot markers.

use dioxus::prelude::*;
use wdf_content::models::Icon;

#[derive(Props, Clone, PartialEq)]
pub struct CheckListProps {
    pub items: Vec<&'static str>,
    /// Marker color
    #[props(default = "#059669".to_string())]
    pub color: String,
    /// Use a round dot instead of a check mark
    #[props(default = false)]
    pub dots: bool,
    #[props(default = 15)]
    pub font_size: u32,
}

/// An ordered list rendered in catalog order.
#[component]
pub fn CheckList(props: CheckListProps) -> Element {
    rsx! {
        ul {
            style: "display: flex; flex-direction: column; gap: 8px;",
            for (i, item) in props.items.iter().enumerate() {
                li {
                    key: "{i}",
                    style: "display: flex; align-items: flex-start; gap: 10px;",
                    if props.dots {
                        span {
                            style: "width: 8px; height: 8px; margin-top: 8px; border-radius: 9999px; background: {props.color}; flex-shrink: 0;",
                        }
                    } else {
                        span {
                            style: "color: {props.color}; flex-shrink: 0;",
                            "{Icon::CheckCircle.glyph()}"
                        }
                    }
                    span {
                        style: "color: #64748b; font-size: {props.font_size}px; line-height: 1.6;",
                        "{item}"
                    }
                }
            }
        }
    }
}
