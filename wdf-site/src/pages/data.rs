//! Data visualization dashboard: four tabs of charts and reservoir gauges.

use super::PageFrame;
use dioxus::prelude::*;
use wdf_chart_ui::chart::{ChartData, ChartKind, ChartSpec, SeriesStyle};
use wdf_chart_ui::components::{
    Badge, Card, ChartHeader, ChartView, ErrorDisplay, PageHeader, StatGrid, TabBar,
};
use wdf_chart_ui::state::DashboardState;
use wdf_chart_ui::theme::{gradient, tone_accent, AQUA_BRIGHT, OCEAN_DEEP, WATER_FRESH};
use wdf_content::dashboard;
use wdf_content::layout::{reservoir_gauges, tab_buttons, ReservoirGauge};
use wdf_content::models::Icon;

const FORECAST_CHART_ID: &str = "demand-forecast-chart";
const USAGE_CHART_ID: &str = "monthly-usage-chart";
const DISTRIBUTION_CHART_ID: &str = "reservoir-status-chart";

/// Demand vs capacity, 2020-2030. Capacity is drawn first so demand sits on top.
fn forecast_chart() -> ChartSpec {
    ChartSpec::new(ChartKind::Area, "year")
        .series(SeriesStyle::new("capacity", 1, "Storage Capacity (ML)", "#22c55e").fill_opacity(0.3))
        .series(SeriesStyle::new("demand", 0, "Projected Demand (ML)", "#3b82f6").fill_opacity(0.6))
}

fn usage_chart() -> ChartSpec {
    ChartSpec::new(ChartKind::Bar, "month")
        .series(SeriesStyle::new("usage", 0, "Water Usage (ML)", "#3b82f6"))
        .series(SeriesStyle::new("rainfall", 1, "Rainfall (mm)", "#22c55e"))
}

fn distribution_chart() -> ChartSpec {
    ChartSpec::new(ChartKind::Pie, "name").height(256)
}

#[component]
pub fn DataVisualization() -> Element {
    let mut state = use_context_provider(DashboardState::new);
    let selection = state.tab.read().clone();

    let content = match dashboard::tab(selection.active()) {
        Ok(tab) => match tab.key {
            "usage" => rsx! { UsageTab {} },
            "reservoirs" => rsx! { ReservoirsTab {} },
            "map" => rsx! { MapTab {} },
            _ => rsx! { ForecastTab {} },
        },
        Err(e) => {
            log::error!("Dashboard: {}", e);
            rsx! { ErrorDisplay { message: e.to_string() } }
        }
    };

    rsx! {
        PageFrame {
            title: "Data Analysis".to_string(),
            PageHeader {
                icon: Icon::BarChart,
                title: dashboard::TITLE.to_string(),
                intro: dashboard::INTRO.to_string(),
            }
            TabBar {
                tabs: tab_buttons(&selection),
                on_select: move |key: &'static str| state.select_tab(key),
            }
            {content}
        }
    }
}

#[component]
fn ForecastTab() -> Element {
    rsx! {
        div {
            class: "wdf-card",
            ChartHeader {
                icon: Icon::TrendingUp,
                title: dashboard::FORECAST_TITLE.to_string(),
                description: dashboard::FORECAST_SUBTITLE.to_string(),
            }
            div {
                style: "padding: 16px 24px 24px 24px;",
                ChartView {
                    id: FORECAST_CHART_ID.to_string(),
                    label: dashboard::FORECAST_TITLE.to_string(),
                    spec: forecast_chart(),
                    data: ChartData::Series(dashboard::demand_forecast()),
                }
                div {
                    style: "margin-top: 24px;",
                    StatGrid { stats: dashboard::forecast_highlights(), tiles: true }
                }
            }
        }
    }
}

#[component]
fn UsageTab() -> Element {
    rsx! {
        div {
            class: "wdf-card",
            ChartHeader {
                icon: Icon::Activity,
                title: dashboard::USAGE_TITLE.to_string(),
                description: dashboard::USAGE_SUBTITLE.to_string(),
            }
            div {
                style: "padding: 16px 24px 24px 24px;",
                ChartView {
                    id: USAGE_CHART_ID.to_string(),
                    label: dashboard::USAGE_TITLE.to_string(),
                    spec: usage_chart(),
                    data: ChartData::Series(dashboard::monthly_usage()),
                }
                div {
                    class: "wdf-grid cols-2",
                    style: "margin-top: 24px;",
                    BulletList {
                        heading: "Key Insights:",
                        color: OCEAN_DEEP,
                        items: dashboard::usage_insights(),
                    }
                    BulletList {
                        heading: "Recommendations:",
                        color: WATER_FRESH,
                        items: dashboard::usage_recommendations(),
                    }
                }
            }
        }
    }
}

#[component]
fn BulletList(heading: &'static str, color: &'static str, items: Vec<&'static str>) -> Element {
    rsx! {
        div {
            h4 { style: "font-weight: 600; color: {color}; margin-bottom: 12px;", "{heading}" }
            ul {
                style: "display: flex; flex-direction: column; gap: 8px; font-size: 14px; color: #64748b;",
                for item in items {
                    li { key: "{item}", "\u{2022} {item}" }
                }
            }
        }
    }
}

#[component]
fn ReservoirsTab() -> Element {
    let mut state = use_context::<DashboardState>();
    let gauges = reservoir_gauges(&state.reservoir.read());

    rsx! {
        div {
            class: "wdf-grid cols-2",
            style: "gap: 32px;",
            div {
                class: "wdf-card",
                ChartHeader {
                    icon: Icon::Droplets,
                    title: dashboard::DISTRIBUTION_TITLE.to_string(),
                }
                div {
                    style: "padding: 16px 24px 24px 24px;",
                    ChartView {
                        id: DISTRIBUTION_CHART_ID.to_string(),
                        label: dashboard::DISTRIBUTION_TITLE.to_string(),
                        spec: distribution_chart(),
                        data: ChartData::Slices(dashboard::status_distribution()),
                    }
                }
            }
            Card {
                title: dashboard::DETAILS_TITLE.to_string(),
                subtitle: dashboard::DETAILS_SUBTITLE.to_string(),
                div {
                    style: "display: flex; flex-direction: column; gap: 16px;",
                    for gauge in gauges {
                        {
                            let key = gauge.key;
                            rsx! {
                                GaugeRow {
                                    key: "{key}",
                                    gauge: gauge.clone(),
                                    on_select: move |_| state.select_reservoir(key),
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// A reservoir's fill level as a progress bar; click to highlight it.
#[component]
fn GaugeRow(gauge: ReservoirGauge, on_select: EventHandler<()>) -> Element {
    let border = if gauge.selected { OCEAN_DEEP } else { "#e2e8f0" };
    let bar = gradient(OCEAN_DEEP, AQUA_BRIGHT);

    rsx! {
        div {
            style: "padding: 16px; border: 2px solid {border}; border-radius: 8px; cursor: pointer;",
            onclick: move |_| on_select.call(()),
            div {
                style: "display: flex; justify-content: space-between; align-items: flex-start; margin-bottom: 8px;",
                h4 { style: "font-weight: 600;", "{gauge.name}" }
                Badge { label: gauge.status.to_string(), tone: gauge.tone }
            }
            div { style: "font-size: 14px; color: #64748b; margin-bottom: 8px;", "{gauge.location}" }
            div {
                style: "display: flex; justify-content: space-between; font-size: 14px; margin-bottom: 8px;",
                span { "Current: {gauge.current_ml} ML" }
                span { "Capacity: {gauge.capacity_ml} ML" }
            }
            div {
                style: "width: 100%; height: 8px; border-radius: 9999px; background: #e5e7eb;",
                div { style: "width: {gauge.bar_width}%; height: 8px; border-radius: 9999px; background: {bar};" }
            }
            div { style: "margin-top: 8px; font-size: 12px; color: #64748b;", "{gauge.percent}% capacity" }
        }
    }
}

#[component]
fn MapTab() -> Element {
    let mut state = use_context::<DashboardState>();
    let gauges = reservoir_gauges(&state.reservoir.read());
    let selected = gauges.iter().find(|g| g.selected).cloned();

    rsx! {
        div {
            class: "wdf-card",
            ChartHeader {
                icon: Icon::MapPin,
                title: dashboard::MAP_TITLE.to_string(),
                description: dashboard::MAP_SUBTITLE.to_string(),
            }
            div {
                style: "padding: 16px 24px 24px 24px;",
                div {
                    style: "min-height: 384px; border-radius: 8px; background: linear-gradient(135deg, #eff6ff, #f0fdf4); display: flex; align-items: center; justify-content: center; padding: 24px;",
                    div {
                        style: "text-align: center; max-width: 448px;",
                        div { style: "font-size: 64px; color: {OCEAN_DEEP};", "{Icon::MapPin.glyph()}" }
                        h3 {
                            style: "font-size: 20px; font-weight: 600; color: {OCEAN_DEEP}; margin: 16px 0;",
                            "Interactive Map"
                        }
                        p { style: "margin: 0 0 16px 0; color: #64748b;", "{dashboard::MAP_PLACEHOLDER}" }
                        if let Some(gauge) = selected {
                            p {
                                style: "margin: 0 0 16px 0; font-weight: 500; color: {OCEAN_DEEP};",
                                "Selected: {gauge.name}, {gauge.location} ({gauge.percent}% capacity)"
                            }
                        }
                        button { class: "wdf-button active", "View Full Map Integration" }
                    }
                }
                div {
                    class: "wdf-grid cols-4",
                    style: "gap: 16px; margin-top: 24px;",
                    for gauge in gauges {
                        {
                            let key = gauge.key;
                            let dot = tone_accent(gauge.tone);
                            let border = if gauge.selected { OCEAN_DEEP } else { "#e2e8f0" };
                            rsx! {
                                div {
                                    key: "{key}",
                                    style: "text-align: center; padding: 12px; border: 2px solid {border}; border-radius: 8px; background: white; cursor: pointer;",
                                    onclick: move |_| state.select_reservoir(key),
                                    div { style: "width: 16px; height: 16px; border-radius: 9999px; margin: 0 auto 8px auto; background: {dot};" }
                                    div { style: "font-size: 14px; font-weight: 500;", "{gauge.name}" }
                                    div { style: "font-size: 12px; color: #64748b;", "{gauge.location}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wdf_content::Selection;

    #[test]
    fn test_forecast_chart_draws_capacity_under_demand() {
        let spec = forecast_chart();
        let keys: Vec<&str> = spec.series.iter().map(|s| s.key).collect();
        assert_eq!(keys, vec!["capacity", "demand"]);
        let data = ChartData::Series(dashboard::demand_forecast());
        assert_eq!(spec.x_ticks(&data).len(), 11);
    }

    #[test]
    fn test_usage_chart_has_a_tick_per_month() {
        let data = ChartData::Series(dashboard::monthly_usage());
        assert_eq!(usage_chart().x_ticks(&data).len(), 12);
    }

    #[test]
    fn test_distribution_chart_serializes_slices() {
        let data = ChartData::Slices(dashboard::status_distribution());
        let (data_json, config_json) = distribution_chart().to_json(&data).unwrap();
        assert!(data_json.contains("\"Moderate Level\""));
        assert!(config_json.contains("\"kind\":\"pie\""));
        assert!(config_json.contains("\"height\":256"));
    }

    #[test]
    fn test_chart_ids_are_unique() {
        let ids = [FORECAST_CHART_ID, USAGE_CHART_ID, DISTRIBUTION_CHART_ID];
        for (i, a) in ids.iter().enumerate() {
            for b in &ids[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_every_tab_resolves() {
        for button in tab_buttons(&Selection::new("forecast")) {
            assert!(dashboard::tab(button.key).is_ok(), "{}", button.key);
        }
    }
}
