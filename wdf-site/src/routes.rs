//! Route table and the navigation shell shared by every page.

use crate::pages::{ActivityLog, DataVisualization, Home, Objectives, Problem, Recommendations};
use dioxus::prelude::*;
use wdf_chart_ui::theme::{gradient, AQUA_BRIGHT, BORDER, OCEAN_DEEP, SKY_LIGHT};
use wdf_content::models::Icon;

#[derive(Routable, Clone, PartialEq, Debug)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/")]
        Home {},
        #[route("/problem")]
        Problem {},
        #[route("/objectives")]
        Objectives {},
        #[route("/data")]
        DataVisualization {},
        #[route("/activity-log")]
        ActivityLog {},
        #[route("/recommendations")]
        Recommendations {},
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

/// Navigation bar entries in display order.
pub const NAV_LINKS: [(&str, Route); 6] = [
    ("Home", Route::Home {}),
    ("Problem", Route::Problem {}),
    ("Objectives", Route::Objectives {}),
    ("Data Analysis", Route::DataVisualization {}),
    ("Activity Log", Route::ActivityLog {}),
    ("Recommendations", Route::Recommendations {}),
];

/// Site name shown in the navigation bar.
const BRAND: &str = "Water Forecasting";

/// Page frame: fixed navigation bar above the routed page.
#[component]
fn Layout() -> Element {
    let background = format!("linear-gradient(135deg, {}, #ffffff, #f1f5f9)", SKY_LIGHT);

    rsx! {
        div {
            style: "min-height: 100vh; background: {background};",
            Navigation {}
            main {
                style: "padding-top: 64px;",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn Navigation() -> Element {
    let current = use_route::<Route>();
    let brand_background = gradient(OCEAN_DEEP, AQUA_BRIGHT);

    rsx! {
        nav {
            style: "position: fixed; top: 0; left: 0; right: 0; z-index: 50; height: 64px; background: rgba(255, 255, 255, 0.92); border-bottom: 1px solid {BORDER}; backdrop-filter: blur(8px);",
            div {
                style: "max-width: 1280px; height: 100%; margin: 0 auto; padding: 0 24px; display: flex; align-items: center; justify-content: space-between;",
                Link {
                    to: Route::Home {},
                    span {
                        style: "display: flex; align-items: center; gap: 10px; font-size: 18px; font-weight: 700; color: {OCEAN_DEEP};",
                        span {
                            style: "display: inline-flex; align-items: center; justify-content: center; width: 36px; height: 36px; border-radius: 8px; background: {brand_background}; color: white;",
                            "{Icon::Droplets.glyph()}"
                        }
                        "{BRAND}"
                    }
                }
                div {
                    style: "display: flex; gap: 4px; flex-wrap: wrap;",
                    for (label, route) in NAV_LINKS {
                        Link {
                            key: "{label}",
                            to: route.clone(),
                            span {
                                class: if current == route { "wdf-nav-link active" } else { "wdf-nav-link" },
                                "{label}"
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Catch-all page for unknown paths.
#[component]
fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    log::warn!("No page at {}", path);

    rsx! {
        document::Title { "Page Not Found | Water Forecasting" }
        div {
            style: "max-width: 640px; margin: 0 auto; padding: 120px 24px; text-align: center;",
            h1 {
                style: "font-size: 64px; font-weight: 700; color: {OCEAN_DEEP}; margin-bottom: 16px;",
                "404"
            }
            p {
                style: "font-size: 20px; color: #64748b; margin-bottom: 32px;",
                "Oops! There is no page at {path}."
            }
            Link {
                to: Route::Home {},
                span { class: "wdf-button active", "Return to Home" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_parse_to_routes() {
        let cases = [
            ("/", Route::Home {}),
            ("/problem", Route::Problem {}),
            ("/objectives", Route::Objectives {}),
            ("/data", Route::DataVisualization {}),
            ("/activity-log", Route::ActivityLog {}),
            ("/recommendations", Route::Recommendations {}),
        ];
        for (path, route) in cases {
            assert_eq!(path.parse::<Route>().ok(), Some(route.clone()), "{}", path);
            assert_eq!(route.to_string(), path);
        }
    }

    #[test]
    fn test_unknown_path_is_not_found() {
        match "/reservoirs/shasta".parse::<Route>() {
            Ok(Route::NotFound { segments }) => {
                assert_eq!(segments, vec!["reservoirs".to_string(), "shasta".to_string()]);
            }
            other => panic!("expected NotFound, got {:?}", other.ok()),
        }
    }

    #[test]
    fn test_nav_links_cover_every_page() {
        let paths: Vec<String> = NAV_LINKS.iter().map(|(_, route)| route.to_string()).collect();
        assert_eq!(
            paths,
            vec!["/", "/problem", "/objectives", "/data", "/activity-log", "/recommendations"]
        );
        assert_eq!(NAV_LINKS[3].0, "Data Analysis");
    }
}
