//! Reusable Dioxus RSX components for the site's pages.

mod badge;
mod card;
mod chart_container;
mod chart_header;
mod chart_view;
mod check_list;
mod error_display;
mod icon_badge;
mod page_header;
mod phase_steps;
mod stat_grid;
mod tab_bar;

pub use badge::Badge;
pub use card::Card;
pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use chart_view::ChartView;
pub use check_list::CheckList;
pub use error_display::ErrorDisplay;
pub use icon_badge::IconBadge;
pub use page_header::PageHeader;
pub use phase_steps::PhaseSteps;
pub use stat_grid::StatGrid;
pub use tab_bar::TabBar;
