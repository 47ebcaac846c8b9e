//! Row of headline figures.

use crate::theme::{tone_accent, tone_colors};
use dioxus::prelude::*;
use wdf_content::models::HeadlineStat;

#[derive(Props, Clone, PartialEq)]
pub struct StatGridProps {
    pub stats: Vec<HeadlineStat>,
    /// Draw each stat on a tinted tile instead of bare text
    #[props(default = false)]
    pub tiles: bool,
}

/// Big numbers with captions, one grid column per stat.
#[component]
pub fn StatGrid(props: StatGridProps) -> Element {
    let class = match props.stats.len() {
        0..=2 => "wdf-grid cols-2",
        3 => "wdf-grid cols-3",
        _ => "wdf-grid cols-4",
    };

    rsx! {
        div {
            class: "{class}",
            style: "text-align: center;",
            for stat in props.stats.iter() {
                {
                    let accent = tone_accent(stat.tone);
                    let tile = if props.tiles {
                        let (_, bg) = tone_colors(stat.tone);
                        format!("padding: 16px; border-radius: 8px; background: {};", bg)
                    } else {
                        String::new()
                    };
                    rsx! {
                        div {
                            key: "{stat.caption}",
                            style: "{tile}",
                            div {
                                style: "font-size: 30px; font-weight: 700; color: {accent};",
                                "{stat.value}"
                            }
                            div {
                                style: "font-size: 14px; color: #64748b;",
                                "{stat.caption}"
                            }
                        }
                    }
                }
            }
        }
    }
}
