//! Landing page: hero, approach cards and call to action.

use crate::routes::Route;
use dioxus::prelude::*;
use wdf_chart_ui::components::{Card, IconBadge};
use wdf_chart_ui::theme::{gradient, AQUA_BRIGHT, OCEAN_DEEP, OCEAN_LIGHT, WATER_FRESH};
use wdf_content::home;
use wdf_content::models::Icon;

const HERO_IMAGE: Asset = asset!("/assets/water-hero.svg");

#[component]
pub fn Home() -> Element {
    super::use_scroll_to_top();

    let overlay = "linear-gradient(90deg, rgba(12, 74, 110, 0.8), rgba(3, 105, 161, 0.6), transparent)";
    let accent = gradient(AQUA_BRIGHT, "#7dd3fc");
    let cta_background = gradient(OCEAN_DEEP, WATER_FRESH);
    let title = super::page_title("Home");

    rsx! {
        document::Title { "{title}" }

        // Hero
        section {
            style: "position: relative; height: calc(100vh - 64px); display: flex; align-items: center; justify-content: center; overflow: hidden; background-image: url({HERO_IMAGE}); background-size: cover; background-position: center;",
            div { style: "position: absolute; inset: 0; background: {overlay};" }
            div {
                class: "wdf-float",
                style: "position: relative; z-index: 1; max-width: 1280px; padding: 0 24px; text-align: center;",
                h1 {
                    style: "font-size: 64px; font-weight: 700; color: white; line-height: 1.15; margin-bottom: 24px;",
                    "{home::HERO_TITLE}"
                    span {
                        style: "display: block; background: {accent}; -webkit-background-clip: text; background-clip: text; color: transparent;",
                        "{home::HERO_TITLE_ACCENT}"
                    }
                }
                p {
                    style: "font-size: 24px; color: #dbeafe; max-width: 768px; margin: 0 auto 32px auto; line-height: 1.6;",
                    "{home::HERO_SUBTITLE}"
                }
                div {
                    style: "display: flex; flex-wrap: wrap; gap: 16px; justify-content: center;",
                    Link {
                        to: Route::Problem {},
                        span {
                            class: "wdf-button aqua large",
                            "Explore the Problem"
                            span { "{Icon::ArrowRight.glyph()}" }
                        }
                    }
                    Link {
                        to: Route::DataVisualization {},
                        span { class: "wdf-button ghost large", "View Data Analysis" }
                    }
                }
            }
            div {
                class: "wdf-bounce",
                style: "position: absolute; bottom: 40px; left: 50%; width: 24px; height: 40px; border: 2px solid rgba(255, 255, 255, 0.4); border-radius: 12px; padding: 4px;",
                div { style: "width: 4px; height: 12px; margin: 0 auto; border-radius: 2px; background: rgba(255, 255, 255, 0.6);" }
            }
        }

        // Approach
        section {
            style: "padding: 80px 0; background: white;",
            div {
                style: "max-width: 1280px; margin: 0 auto; padding: 0 24px;",
                div {
                    style: "text-align: center; margin-bottom: 64px;",
                    h2 {
                        style: "font-size: 36px; font-weight: 700; margin-bottom: 16px;",
                        "{home::APPROACH_TITLE}"
                    }
                    p {
                        style: "font-size: 20px; color: #64748b; max-width: 768px; margin: 0 auto;",
                        "{home::APPROACH_SUBTITLE}"
                    }
                }
                div {
                    class: "wdf-grid cols-4",
                    for feature in home::features() {
                        Card {
                            key: "{feature.title}",
                            hoverable: true,
                            centered: true,
                            div {
                                style: "text-align: center;",
                                div {
                                    style: "margin-bottom: 16px;",
                                    IconBadge {
                                        icon: feature.icon,
                                        from: OCEAN_LIGHT.to_string(),
                                        to: AQUA_BRIGHT.to_string(),
                                        size: 56,
                                    }
                                }
                                h3 {
                                    style: "font-size: 20px; font-weight: 600; margin-bottom: 12px;",
                                    "{feature.title}"
                                }
                                p {
                                    style: "margin: 0; color: #64748b;",
                                    "{feature.description}"
                                }
                            }
                        }
                    }
                }
            }
        }

        // Call to action
        section {
            style: "padding: 80px 0; background: {cta_background};",
            div {
                style: "max-width: 896px; margin: 0 auto; padding: 0 24px; text-align: center;",
                h2 {
                    style: "font-size: 36px; font-weight: 700; color: white; margin-bottom: 24px;",
                    "{home::CTA_TITLE}"
                }
                p {
                    style: "font-size: 20px; color: #dbeafe; margin-bottom: 32px;",
                    "{home::CTA_SUBTITLE}"
                }
                div {
                    style: "display: flex; flex-wrap: wrap; gap: 16px; justify-content: center;",
                    Link {
                        to: Route::Objectives {},
                        span { class: "wdf-button aqua large", "View Project Objectives" }
                    }
                    Link {
                        to: Route::Recommendations {},
                        span { class: "wdf-button ghost large", "See Recommendations" }
                    }
                }
            }
        }
    }
}
