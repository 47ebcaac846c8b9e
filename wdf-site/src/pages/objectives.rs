//! Project objectives, expected outcomes and timeline.

use super::PageFrame;
use dioxus::prelude::*;
use wdf_chart_ui::components::{Card, CheckList, IconBadge, PageHeader, PhaseSteps};
use wdf_chart_ui::theme::{gradient, AQUA_BRIGHT, OCEAN_DEEP, OCEAN_MEDIUM, SECONDARY_LIGHT, WATER_FRESH};
use wdf_content::layout::objective_cards;
use wdf_content::models::Icon;
use wdf_content::objectives;

#[component]
pub fn Objectives() -> Element {
    let number_gradient = gradient(OCEAN_DEEP, AQUA_BRIGHT);
    let outcome_badge = gradient(WATER_FRESH, SECONDARY_LIGHT);

    rsx! {
        PageFrame {
            title: objectives::TITLE.to_string(),
            PageHeader {
                icon: Icon::Target,
                title: objectives::TITLE.to_string(),
                intro: objectives::INTRO.to_string(),
            }

            div {
                style: "display: flex; flex-direction: column; gap: 32px; margin-bottom: 64px;",
                for card in objective_cards() {
                    Card {
                        key: "{card.number}",
                        hoverable: true,
                        div {
                            style: "display: flex; align-items: flex-start; gap: 16px;",
                            IconBadge {
                                icon: card.objective.icon,
                                from: OCEAN_DEEP.to_string(),
                                to: OCEAN_MEDIUM.to_string(),
                                round: false,
                            }
                            div {
                                style: "flex: 1;",
                                div {
                                    style: "display: flex; align-items: center; gap: 12px; margin-bottom: 8px;",
                                    span {
                                        style: "font-size: 18px; font-weight: 700; background: {number_gradient}; -webkit-background-clip: text; background-clip: text; color: transparent;",
                                        "#{card.number}"
                                    }
                                    h3 {
                                        style: "font-size: 22px; font-weight: 600;",
                                        "{card.objective.title}"
                                    }
                                }
                                p {
                                    style: "margin: 0; color: #64748b; line-height: 1.6;",
                                    "{card.objective.description}"
                                }
                            }
                        }
                        div {
                            style: "margin: 20px 0 0 64px;",
                            h4 {
                                style: "font-weight: 600; color: {OCEAN_DEEP}; margin-bottom: 12px;",
                                "Key Deliverables:"
                            }
                            CheckList { items: card.objective.deliverables.clone() }
                        }
                    }
                }
            }

            Card {
                title: objectives::OUTCOMES_TITLE.to_string(),
                subtitle: objectives::OUTCOMES_SUBTITLE.to_string(),
                title_color: WATER_FRESH.to_string(),
                header_background: "linear-gradient(90deg, rgba(5, 150, 105, 0.1), rgba(52, 211, 153, 0.1))".to_string(),
                centered: true,
                style: "margin-bottom: 64px;".to_string(),
                div {
                    class: "wdf-grid cols-2",
                    for outcome in objectives::outcomes() {
                        div {
                            key: "{outcome.title}",
                            style: "display: flex; align-items: flex-start; gap: 16px; padding: 16px; border-radius: 8px; background: rgba(5, 150, 105, 0.05);",
                            span {
                                style: "flex-shrink: 0; width: 32px; height: 32px; border-radius: 9999px; background: {outcome_badge}; color: white; display: flex; align-items: center; justify-content: center; font-size: 14px;",
                                "{Icon::CheckCircle.glyph()}"
                            }
                            div {
                                h4 {
                                    style: "font-weight: 600; color: {WATER_FRESH}; margin-bottom: 8px;",
                                    "{outcome.title}"
                                }
                                p {
                                    style: "margin: 0; font-size: 14px; color: #64748b; line-height: 1.6;",
                                    "{outcome.description}"
                                }
                            }
                        }
                    }
                }
            }

            Card {
                title: objectives::TIMELINE_TITLE.to_string(),
                title_color: OCEAN_DEEP.to_string(),
                header_background: "linear-gradient(90deg, rgba(14, 165, 233, 0.1), rgba(34, 211, 238, 0.1))".to_string(),
                centered: true,
                PhaseSteps { phases: objectives::timeline() }
            }
        }
    }
}
