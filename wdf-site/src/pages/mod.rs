//! One component per route, plus the frame they share.

mod activity_log;
mod data;
mod home;
mod objectives;
mod problem;
mod recommendations;

pub use activity_log::ActivityLog;
pub use data::DataVisualization;
pub use home::Home;
pub use objectives::Objectives;
pub use problem::Problem;
pub use recommendations::Recommendations;

use dioxus::prelude::*;

/// Browser tab title for a page.
fn page_title(page: &str) -> String {
    format!("{} | Water Forecasting", page)
}

/// Scroll the window back to the top when a page mounts.
fn use_scroll_to_top() {
    use_effect(|| {
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    });
}

#[derive(Props, Clone, PartialEq)]
struct PageFrameProps {
    title: String,
    children: Element,
}

/// Centered content column with vertical padding, used by every page but
/// the landing page.
#[component]
fn PageFrame(props: PageFrameProps) -> Element {
    use_scroll_to_top();
    let title = page_title(&props.title);

    rsx! {
        document::Title { "{title}" }
        div {
            style: "padding: 80px 0;",
            div {
                style: "max-width: 1280px; margin: 0 auto; padding: 0 24px;",
                {props.children}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_title() {
        assert_eq!(page_title("Project Objectives"), "Project Objectives | Water Forecasting");
    }
}
