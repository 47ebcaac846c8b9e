//! Weekly activity log with a week selector.

use super::PageFrame;
use dioxus::prelude::*;
use wdf_chart_ui::components::{Badge, Card, CheckList, ErrorDisplay, PageHeader, StatGrid};
use wdf_chart_ui::state::ActivityLogState;
use wdf_chart_ui::theme::{gradient, AQUA_BRIGHT, OCEAN_DEEP, WATER_FRESH};
use wdf_content::activity;
use wdf_content::layout::ActivityLogView;
use wdf_content::models::{DayRecord, Icon};

#[component]
pub fn ActivityLog() -> Element {
    let mut state = use_context_provider(ActivityLogState::new);
    let selection = state.week.read().clone();

    let view = match ActivityLogView::build(&selection) {
        Ok(view) => view,
        Err(e) => {
            log::error!("Activity log: {}", e);
            return rsx! {
                PageFrame {
                    title: activity::TITLE.to_string(),
                    ErrorDisplay { message: e.to_string() }
                }
            };
        }
    };
    let week = view.week;

    rsx! {
        PageFrame {
            title: activity::TITLE.to_string(),
            PageHeader {
                icon: Icon::BookOpen,
                title: activity::TITLE.to_string(),
                intro: activity::INTRO.to_string(),
            }

            div {
                style: "display: flex; flex-wrap: wrap; justify-content: center; gap: 16px; margin-bottom: 48px;",
                for week_button in view.buttons {
                    {
                        let key = week_button.key;
                        rsx! {
                            button {
                                key: "{key}",
                                class: if week_button.active { "wdf-button active" } else { "wdf-button" },
                                onclick: move |_| state.select_week(key),
                                span { "{Icon::Calendar.glyph()}" }
                                span { "{week_button.label}" }
                            }
                        }
                    }
                }
            }

            Card {
                style: "margin-bottom: 32px;".to_string(),
                div {
                    style: "display: flex; justify-content: space-between; align-items: flex-start; gap: 16px; margin-bottom: 24px;",
                    div {
                        h2 {
                            style: "font-size: 24px; font-weight: 600; color: {OCEAN_DEEP}; margin-bottom: 8px;",
                            "{week.title}"
                        }
                        p {
                            style: "margin: 0; font-size: 18px; color: #64748b;",
                            "{view.date_label}"
                        }
                    }
                    Badge { label: week.status.label().to_string(), tone: week.status.tone() }
                }
                h4 {
                    style: "font-weight: 600; color: {OCEAN_DEEP}; margin-bottom: 12px;",
                    "{Icon::Target.glyph()} Week Objectives"
                }
                CheckList { items: week.objectives.clone() }
            }

            div {
                style: "display: flex; flex-direction: column; gap: 24px;",
                for (index, day) in week.days.iter().enumerate() {
                    DayCard { key: "{week.key}-{index}", number: index + 1, day: day.clone() }
                }
            }

            Card {
                title: activity::SUMMARY_TITLE.to_string(),
                title_color: WATER_FRESH.to_string(),
                header_background: "linear-gradient(90deg, rgba(5, 150, 105, 0.1), rgba(52, 211, 153, 0.1))".to_string(),
                centered: true,
                style: "margin-top: 64px;".to_string(),
                StatGrid { stats: activity::progress_summary() }
            }
        }
    }
}

/// One day of a week: tasks, data collected and analysis side by side.
#[component]
fn DayCard(number: usize, day: DayRecord) -> Element {
    let circle = gradient(OCEAN_DEEP, AQUA_BRIGHT);
    let heading = format!("font-weight: 600; color: {}; margin-bottom: 12px;", OCEAN_DEEP);

    rsx! {
        Card {
            hoverable: true,
            div {
                style: "display: flex; align-items: center; gap: 12px; margin-bottom: 20px;",
                span {
                    style: "width: 32px; height: 32px; border-radius: 9999px; background: {circle}; color: white; font-size: 14px; font-weight: 700; display: flex; align-items: center; justify-content: center;",
                    "{number}"
                }
                h3 { style: "font-size: 20px; font-weight: 600;", "{day.day}" }
            }
            div {
                class: "wdf-grid cols-3",
                div {
                    h4 { style: "{heading}", "{Icon::Clock.glyph()} Tasks Completed" }
                    CheckList { items: day.tasks.clone(), font_size: 14 }
                }
                div {
                    h4 { style: "{heading}", "{Icon::FileText.glyph()} Data Collected" }
                    p {
                        style: "margin: 0; font-size: 14px; color: #64748b; line-height: 1.6;",
                        "{day.data_collected}"
                    }
                }
                div {
                    h4 { style: "{heading}", "{Icon::BarChart.glyph()} Key Analysis" }
                    p {
                        style: "margin: 0; font-size: 14px; color: #64748b; line-height: 1.6;",
                        "{day.analysis}"
                    }
                }
            }
        }
    }
}
