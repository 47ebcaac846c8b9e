//! Chart descriptions handed to the D3.js renderers.
//!
//! A [`ChartSpec`] says how to draw (kind, axis label, one [`SeriesStyle`]
//! per y-series) and a [`ChartData`] says what to draw. Points are passed
//! through in order without aggregation or validation; the renderers draw
//! one element per point and one x tick per point label.

use serde::Serialize;
use serde_json::{Map, Value};
use wdf_content::models::{PieSlice, SeriesPoint};

/// Which D3 renderer draws the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Area,
    Bar,
    Pie,
}

impl ChartKind {
    /// Name of the global JS function that renders this kind.
    pub fn render_fn(self) -> &'static str {
        match self {
            ChartKind::Area => "renderAreaChart",
            ChartKind::Bar => "renderBarChart",
            ChartKind::Pie => "renderPieChart",
        }
    }
}

/// How one y-series is drawn.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesStyle {
    /// JSON field the series is written under in each data row.
    pub key: &'static str,
    /// Index into [`SeriesPoint::values`].
    #[serde(skip)]
    pub value_index: usize,
    /// Legend and tooltip label.
    pub label: &'static str,
    pub color: &'static str,
    pub fill_opacity: f64,
}

impl SeriesStyle {
    pub fn new(key: &'static str, value_index: usize, label: &'static str, color: &'static str) -> Self {
        Self {
            key,
            value_index,
            label,
            color,
            fill_opacity: 1.0,
        }
    }

    pub fn fill_opacity(mut self, opacity: f64) -> Self {
        self.fill_opacity = opacity;
        self
    }
}

/// Rendering configuration for one chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSpec {
    pub kind: ChartKind,
    /// JSON field holding the x label in each data row.
    pub x_key: &'static str,
    pub y_axis_label: &'static str,
    pub series: Vec<SeriesStyle>,
    /// Height in pixels; width follows the container.
    pub height: u32,
    pub grid_color: &'static str,
    pub axis_color: &'static str,
}

impl ChartSpec {
    pub fn new(kind: ChartKind, x_key: &'static str) -> Self {
        Self {
            kind,
            x_key,
            y_axis_label: "",
            series: Vec::new(),
            height: 384,
            grid_color: "#e2e8f0",
            axis_color: "#64748b",
        }
    }

    pub fn y_axis_label(mut self, label: &'static str) -> Self {
        self.y_axis_label = label;
        self
    }

    pub fn series(mut self, style: SeriesStyle) -> Self {
        self.series.push(style);
        self
    }

    pub fn height(mut self, height: u32) -> Self {
        self.height = height;
        self
    }

    /// Labels the x axis will carry, one per point.
    ///
    /// ```rust
    /// use wdf_chart_ui::chart::{ChartData, ChartKind, ChartSpec};
    /// use wdf_content::dashboard::demand_forecast;
    ///
    /// let spec = ChartSpec::new(ChartKind::Area, "year");
    /// let data = ChartData::Series(demand_forecast());
    /// assert_eq!(spec.x_ticks(&data).len(), 11);
    /// ```
    pub fn x_ticks<'a>(&self, data: &'a ChartData) -> Vec<&'a str> {
        match (self.kind, data) {
            (ChartKind::Pie, _) | (_, ChartData::Slices(_)) => Vec::new(),
            (_, ChartData::Series(points)) => points.iter().map(|p| p.label).collect(),
        }
    }

    /// Serialize data rows and config for the JS renderer.
    ///
    /// Returns `(data_json, config_json)`. Series rows are objects keyed by
    /// `x_key` and each series `key`; a point without a value for some
    /// series simply lacks that field.
    pub fn to_json(&self, data: &ChartData) -> anyhow::Result<(String, String)> {
        let data_json = match data {
            ChartData::Series(points) => serde_json::to_string(&self.rows(points))?,
            ChartData::Slices(slices) => serde_json::to_string(slices)?,
        };
        let config_json = serde_json::to_string(self)?;
        Ok((data_json, config_json))
    }

    fn rows(&self, points: &[SeriesPoint]) -> Vec<Value> {
        points
            .iter()
            .map(|point| {
                let mut row = Map::new();
                row.insert(self.x_key.to_string(), Value::from(point.label));
                for style in &self.series {
                    if let Some(value) = point.values.get(style.value_index) {
                        row.insert(style.key.to_string(), Value::from(*value));
                    }
                }
                Value::Object(row)
            })
            .collect()
    }
}

/// What a chart draws.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartData {
    Series(Vec<SeriesPoint>),
    Slices(Vec<PieSlice>),
}

impl ChartData {
    /// Number of points or slices.
    pub fn len(&self) -> usize {
        match self {
            ChartData::Series(points) => points.len(),
            ChartData::Slices(slices) => slices.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wdf_content::dashboard::{demand_forecast, monthly_usage, status_distribution};

    fn forecast_spec() -> ChartSpec {
        ChartSpec::new(ChartKind::Area, "year")
            .y_axis_label("ML")
            .series(SeriesStyle::new("capacity", 1, "Storage Capacity (ML)", "#22c55e").fill_opacity(0.3))
            .series(SeriesStyle::new("demand", 0, "Projected Demand (ML)", "#3b82f6").fill_opacity(0.6))
    }

    #[test]
    fn test_forecast_has_eleven_ticks() {
        let data = ChartData::Series(demand_forecast());
        let ticks = forecast_spec().x_ticks(&data);
        assert_eq!(ticks.len(), 11);
        assert_eq!(ticks[0], "2020");
        assert_eq!(ticks[10], "2030");
    }

    #[test]
    fn test_rows_pass_values_through_in_order() {
        let data = ChartData::Series(demand_forecast());
        let (data_json, _) = forecast_spec().to_json(&data).unwrap();
        let rows: Vec<Value> = serde_json::from_str(&data_json).unwrap();
        assert_eq!(rows.len(), 11);
        assert_eq!(rows[0]["year"], "2020");
        assert_eq!(rows[0]["demand"], 1200.0);
        assert_eq!(rows[0]["capacity"], 1500.0);
        assert_eq!(rows[10]["demand"], 2065.0);
    }

    #[test]
    fn test_missing_value_is_omitted() {
        let spec = ChartSpec::new(ChartKind::Bar, "month")
            .series(SeriesStyle::new("usage", 0, "Usage", "#3b82f6"))
            .series(SeriesStyle::new("rainfall", 1, "Rainfall", "#22c55e"));
        let data = ChartData::Series(vec![SeriesPoint::new("Jan", &[95.0])]);
        let (data_json, _) = spec.to_json(&data).unwrap();
        let rows: Vec<Value> = serde_json::from_str(&data_json).unwrap();
        assert_eq!(rows[0]["usage"], 95.0);
        assert!(rows[0].get("rainfall").is_none());
    }

    #[test]
    fn test_config_json() {
        let (_, config_json) = forecast_spec().to_json(&ChartData::Series(Vec::new())).unwrap();
        let config: Value = serde_json::from_str(&config_json).unwrap();
        assert_eq!(config["kind"], "area");
        assert_eq!(config["xKey"], "year");
        assert_eq!(config["series"][0]["key"], "capacity");
        assert_eq!(config["series"][0]["fillOpacity"], 0.3);
        assert!(config["series"][0].get("valueIndex").is_none());
    }

    #[test]
    fn test_pie_has_no_axis() {
        let spec = ChartSpec::new(ChartKind::Pie, "name");
        let data = ChartData::Slices(status_distribution());
        assert!(spec.x_ticks(&data).is_empty());
        assert_eq!(data.len(), 4);
        let (data_json, _) = spec.to_json(&data).unwrap();
        assert!(data_json.contains("\"Full Capacity\""));
    }

    #[test]
    fn test_usage_ticks() {
        let spec = ChartSpec::new(ChartKind::Bar, "month");
        let data = ChartData::Series(monthly_usage());
        assert_eq!(spec.x_ticks(&data).len(), 12);
    }

    #[test]
    fn test_render_fn_names() {
        assert_eq!(ChartKind::Area.render_fn(), "renderAreaChart");
        assert_eq!(ChartKind::Pie.render_fn(), "renderPieChart");
    }
}
