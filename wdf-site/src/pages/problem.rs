//! The problem statement: current state, challenges and what is at stake.

use super::PageFrame;
use dioxus::prelude::*;
use wdf_chart_ui::components::{Card, CheckList, IconBadge, PageHeader, StatGrid};
use wdf_chart_ui::theme::{gradient, ALERT_ORANGE, ALERT_RED, OCEAN_DEEP, WATER_FRESH};
use wdf_content::models::Icon;
use wdf_content::problem;

#[component]
pub fn Problem() -> Element {
    let comparison_header = "linear-gradient(90deg, rgba(14, 165, 233, 0.1), rgba(34, 211, 238, 0.1))";

    rsx! {
        PageFrame {
            title: "The Problem".to_string(),
            PageHeader {
                icon: Icon::AlertTriangle,
                title: problem::TITLE.to_string(),
                intro: problem::INTRO.to_string(),
                from: ALERT_ORANGE.to_string(),
                to: ALERT_RED.to_string(),
            }

            Card {
                title: problem::OVERVIEW_TITLE.to_string(),
                title_color: OCEAN_DEEP.to_string(),
                header_background: gradient("#fff7ed", "#fef2f2"),
                centered: true,
                style: "margin-bottom: 64px;".to_string(),
                StatGrid { stats: problem::current_state() }
            }

            div {
                class: "wdf-grid cols-2",
                style: "margin-bottom: 64px;",
                for challenge in problem::challenges() {
                    Card {
                        key: "{challenge.title}",
                        hoverable: true,
                        div {
                            style: "display: flex; align-items: center; gap: 12px; margin-bottom: 16px;",
                            IconBadge {
                                icon: challenge.icon,
                                from: ALERT_ORANGE.to_string(),
                                to: ALERT_RED.to_string(),
                                size: 40,
                                round: false,
                            }
                            h3 {
                                style: "font-size: 20px; font-weight: 600;",
                                "{challenge.title}"
                            }
                        }
                        p {
                            style: "margin: 0 0 16px 0; color: #64748b; line-height: 1.6;",
                            "{challenge.description}"
                        }
                        div {
                            style: "padding: 12px; background: #fff7ed; border-left: 4px solid #fb923c; border-radius: 8px;",
                            div {
                                style: "font-size: 14px; font-weight: 600; color: #9a3412;",
                                "Key Impact:"
                            }
                            div {
                                style: "font-size: 14px; color: #c2410c;",
                                "{challenge.impact}"
                            }
                        }
                    }
                }
            }

            Card {
                title: problem::COMPARISON_TITLE.to_string(),
                title_color: OCEAN_DEEP.to_string(),
                header_background: comparison_header.to_string(),
                centered: true,
                div {
                    class: "wdf-grid cols-2",
                    div {
                        h3 {
                            style: "font-size: 20px; font-weight: 600; color: {OCEAN_DEEP}; margin-bottom: 16px;",
                            "Without Proper Planning:"
                        }
                        CheckList {
                            items: problem::without_planning(),
                            color: "#ef4444".to_string(),
                            dots: true,
                        }
                    }
                    div {
                        h3 {
                            style: "font-size: 20px; font-weight: 600; color: {WATER_FRESH}; margin-bottom: 16px;",
                            "With Data-Driven Solutions:"
                        }
                        CheckList {
                            items: problem::with_data_driven_solutions(),
                            color: "#22c55e".to_string(),
                            dots: true,
                        }
                    }
                }
            }
        }
    }
}
