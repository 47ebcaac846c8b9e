//! Numbered phase circles for timelines and roadmaps.

use crate::theme::{gradient, AQUA_BRIGHT, OCEAN_DEEP};
use dioxus::prelude::*;
use wdf_content::models::TimelinePhase;

#[derive(Props, Clone, PartialEq)]
pub struct PhaseStepsProps {
    pub phases: Vec<TimelinePhase>,
}

#[component]
pub fn PhaseSteps(props: PhaseStepsProps) -> Element {
    let circle = gradient(OCEAN_DEEP, AQUA_BRIGHT);

    rsx! {
        div {
            class: "wdf-grid cols-4",
            for phase in props.phases.iter() {
                div {
                    key: "{phase.step}",
                    style: "text-align: center; display: flex; flex-direction: column; gap: 12px; align-items: center;",
                    div {
                        style: "width: 64px; height: 64px; border-radius: 9999px; background: {circle}; display: flex; align-items: center; justify-content: center; color: white; font-weight: 700;",
                        "{phase.step}"
                    }
                    h4 { style: "font-weight: 600; color: {OCEAN_DEEP};", "{phase.title}" }
                    p { style: "margin: 0; font-size: 14px; color: #64748b;", "{phase.duration}" }
                    if let Some(focus) = phase.focus {
                        p {
                            style: "margin: 0; font-size: 12px; color: #64748b; line-height: 1.6;",
                            "{focus}"
                        }
                    }
                }
            }
        }
    }
}
