//! Community recommendations: urgent actions, strategies and roadmap.

use super::PageFrame;
use dioxus::prelude::*;
use wdf_chart_ui::components::{Badge, Card, CheckList, IconBadge, PageHeader, PhaseSteps};
use wdf_chart_ui::theme::{OCEAN_DEEP, SECONDARY_LIGHT, WATER_FRESH};
use wdf_content::models::{Icon, Tone};
use wdf_content::recommendations;

#[component]
pub fn Recommendations() -> Element {
    let urgent_title = format!("{} {}", Icon::Shield.glyph(), recommendations::URGENT_TITLE);

    rsx! {
        PageFrame {
            title: "Recommendations".to_string(),
            PageHeader {
                icon: Icon::Lightbulb,
                title: recommendations::TITLE.to_string(),
                intro: recommendations::INTRO.to_string(),
                from: WATER_FRESH.to_string(),
                to: SECONDARY_LIGHT.to_string(),
            }

            Card {
                title: urgent_title,
                subtitle: recommendations::URGENT_SUBTITLE.to_string(),
                title_color: "#9a3412".to_string(),
                header_background: "linear-gradient(90deg, #fff7ed, #fef2f2)".to_string(),
                style: "margin-bottom: 64px; border-color: #fed7aa;".to_string(),
                div {
                    class: "wdf-grid cols-3",
                    for action in recommendations::urgent_actions() {
                        div {
                            key: "{action.title}",
                            style: "padding: 16px; border: 1px solid #fed7aa; border-radius: 8px; background: rgba(255, 247, 237, 0.5);",
                            h4 {
                                style: "font-weight: 600; color: #9a3412; margin-bottom: 8px;",
                                "{action.title}"
                            }
                            p {
                                style: "margin: 0 0 12px 0; font-size: 14px; color: #c2410c;",
                                "{action.description}"
                            }
                            div {
                                style: "font-size: 12px; font-weight: 500; color: #ea580c;",
                                "Deadline: {action.deadline}"
                            }
                            div {
                                style: "font-size: 12px; color: #ea580c;",
                                "Responsible: {action.responsible}"
                            }
                        }
                    }
                }
            }

            div {
                style: "display: flex; flex-direction: column; gap: 32px;",
                for strategy in recommendations::strategies() {
                    Card {
                        key: "{strategy.title}",
                        hoverable: true,
                        div {
                            style: "display: flex; align-items: flex-start; gap: 16px; margin-bottom: 24px;",
                            IconBadge {
                                icon: strategy.icon,
                                from: WATER_FRESH.to_string(),
                                to: SECONDARY_LIGHT.to_string(),
                                round: false,
                            }
                            div {
                                div {
                                    style: "display: flex; align-items: center; gap: 12px; margin-bottom: 8px;",
                                    Badge { label: strategy.category.to_string(), tone: Tone::Neutral, outline: true }
                                    Badge {
                                        label: format!("{} Priority", strategy.priority.label()),
                                        tone: strategy.priority.tone(),
                                    }
                                }
                                h3 {
                                    style: "font-size: 22px; font-weight: 600;",
                                    "{strategy.title}"
                                }
                            }
                        }
                        h4 {
                            style: "font-weight: 600; color: {WATER_FRESH}; margin-bottom: 12px;",
                            "Recommended Strategies:"
                        }
                        CheckList { items: strategy.strategies.clone(), font_size: 14 }
                        div {
                            class: "wdf-grid cols-3",
                            style: "gap: 16px; margin-top: 24px; padding-top: 16px; border-top: 1px solid #e2e8f0;",
                            StrategyFact { label: "Expected Impact", value: strategy.impact }
                            StrategyFact { label: "Implementation", value: strategy.implementation }
                            StrategyFact { label: "Timeframe", value: strategy.timeframe }
                        }
                    }
                }
            }

            Card {
                title: recommendations::ROADMAP_TITLE.to_string(),
                subtitle: recommendations::ROADMAP_SUBTITLE.to_string(),
                title_color: OCEAN_DEEP.to_string(),
                header_background: "linear-gradient(90deg, rgba(14, 165, 233, 0.1), rgba(34, 211, 238, 0.1))".to_string(),
                centered: true,
                style: "margin-top: 64px;".to_string(),
                PhaseSteps { phases: recommendations::roadmap() }
            }

            div {
                style: "max-width: 672px; margin: 64px auto 0 auto;",
                Card {
                    centered: true,
                    div {
                        style: "text-align: center;",
                        div {
                            style: "font-size: 48px; color: {WATER_FRESH}; margin-bottom: 16px;",
                            "{Icon::TrendingDown.glyph()}"
                        }
                        h3 {
                            style: "font-size: 24px; font-weight: 700; color: {WATER_FRESH}; margin-bottom: 16px;",
                            "{recommendations::CTA_TITLE}"
                        }
                        p {
                            style: "margin: 0 0 24px 0; color: #64748b;",
                            "{recommendations::CTA_BODY}"
                        }
                        div {
                            style: "display: flex; flex-wrap: wrap; gap: 16px; justify-content: center;",
                            button { class: "wdf-button active large", "Download Action Guide" }
                            button { class: "wdf-button large", "Join Community Program" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn StrategyFact(label: &'static str, value: &'static str) -> Element {
    rsx! {
        div {
            div {
                style: "font-size: 14px; font-weight: 500; color: {OCEAN_DEEP}; margin-bottom: 4px;",
                "{label}"
            }
            div {
                style: "font-size: 14px; color: #64748b;",
                "{value}"
            }
        }
    }
}
