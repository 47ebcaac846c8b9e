//! Data visualization dashboard content.
//!
//! All chart series are sample literals. Their numbers are shown as-is;
//! the only derived figure on the dashboard is reservoir utilization.

use crate::error::{CatalogError, Result};
use crate::models::{
    DashboardTab, HeadlineStat, Icon, PieSlice, Reservoir, ReservoirStatus, SeriesPoint, Tone,
};

pub const TITLE: &str = "Data Visualization Dashboard";
pub const INTRO: &str = "Interactive charts and real-time data analysis for water demand forecasting and reservoir capacity management";

pub const FORECAST_TITLE: &str = "Water Demand vs. Storage Capacity Forecast (2020-2030)";
pub const FORECAST_SUBTITLE: &str =
    "Projected water demand compared to planned reservoir capacity expansion";

pub const USAGE_TITLE: &str = "Monthly Water Usage vs. Rainfall Patterns";
pub const USAGE_SUBTITLE: &str =
    "Seasonal water consumption trends correlated with precipitation data";

pub const DISTRIBUTION_TITLE: &str = "Overall Reservoir Status Distribution";
pub const DETAILS_TITLE: &str = "Individual Reservoir Details";
pub const DETAILS_SUBTITLE: &str = "Current capacity and status of each reservoir";

pub const MAP_TITLE: &str = "Reservoir Location and Status Map";
pub const MAP_SUBTITLE: &str = "Geographic distribution of water storage facilities with real-time status indicators";
pub const MAP_PLACEHOLDER: &str = "This section would contain an interactive map showing reservoir locations, current water levels, and status indicators. Integration with mapping services would provide real-time geographic context for water resource management.";

/// Dashboard tabs in display order. The first is the default.
pub fn tabs() -> Vec<DashboardTab> {
    vec![
        DashboardTab {
            key: "forecast",
            label: "Demand Forecast",
            icon: Icon::TrendingUp,
        },
        DashboardTab {
            key: "usage",
            label: "Usage Patterns",
            icon: Icon::Activity,
        },
        DashboardTab {
            key: "reservoirs",
            label: "Reservoir Status",
            icon: Icon::Droplets,
        },
        DashboardTab {
            key: "map",
            label: "Location Map",
            icon: Icon::MapPin,
        },
    ]
}

pub fn tab(key: &str) -> Result<DashboardTab> {
    tabs()
        .into_iter()
        .find(|t| t.key == key)
        .ok_or_else(|| CatalogError::UnknownKey {
            collection: "tab",
            key: key.to_string(),
        })
}

/// Yearly demand and capacity in ML: values are `[demand, capacity]`.
pub fn demand_forecast() -> Vec<SeriesPoint> {
    vec![
        SeriesPoint::new("2020", &[1200.0, 1500.0]),
        SeriesPoint::new("2021", &[1280.0, 1500.0]),
        SeriesPoint::new("2022", &[1350.0, 1500.0]),
        SeriesPoint::new("2023", &[1420.0, 1500.0]),
        SeriesPoint::new("2024", &[1495.0, 1500.0]),
        SeriesPoint::new("2025", &[1580.0, 1500.0]),
        SeriesPoint::new("2026", &[1670.0, 1600.0]),
        SeriesPoint::new("2027", &[1765.0, 1700.0]),
        SeriesPoint::new("2028", &[1860.0, 1800.0]),
        SeriesPoint::new("2029", &[1960.0, 1900.0]),
        SeriesPoint::new("2030", &[2065.0, 2000.0]),
    ]
}

/// Monthly usage (ML) and rainfall (mm): values are `[usage, rainfall]`.
pub fn monthly_usage() -> Vec<SeriesPoint> {
    vec![
        SeriesPoint::new("Jan", &[95.0, 45.0]),
        SeriesPoint::new("Feb", &[88.0, 52.0]),
        SeriesPoint::new("Mar", &[102.0, 38.0]),
        SeriesPoint::new("Apr", &[118.0, 25.0]),
        SeriesPoint::new("May", &[135.0, 15.0]),
        SeriesPoint::new("Jun", &[158.0, 8.0]),
        SeriesPoint::new("Jul", &[175.0, 5.0]),
        SeriesPoint::new("Aug", &[168.0, 12.0]),
        SeriesPoint::new("Sep", &[142.0, 28.0]),
        SeriesPoint::new("Oct", &[125.0, 42.0]),
        SeriesPoint::new("Nov", &[108.0, 55.0]),
        SeriesPoint::new("Dec", &[98.0, 48.0]),
    ]
}

/// Share of reservoirs per fill level, in percent.
pub fn status_distribution() -> Vec<PieSlice> {
    vec![
        PieSlice {
            name: "Full Capacity",
            value: 35.0,
            color: "#22c55e",
        },
        PieSlice {
            name: "Good Level",
            value: 40.0,
            color: "#3b82f6",
        },
        PieSlice {
            name: "Moderate Level",
            value: 20.0,
            color: "#f59e0b",
        },
        PieSlice {
            name: "Low Level",
            value: 5.0,
            color: "#ef4444",
        },
    ]
}

pub fn forecast_highlights() -> Vec<HeadlineStat> {
    vec![
        HeadlineStat {
            value: "+72%",
            caption: "Demand Growth by 2030",
            tone: Tone::Info,
        },
        HeadlineStat {
            value: "+33%",
            caption: "Capacity Expansion Required",
            tone: Tone::Positive,
        },
        HeadlineStat {
            value: "2026",
            caption: "Critical Year for Expansion",
            tone: Tone::Warning,
        },
    ]
}

pub fn usage_insights() -> Vec<&'static str> {
    vec![
        "Peak usage occurs during summer months (June-August)",
        "Inverse correlation between rainfall and consumption",
        "40% increase in usage during dry season",
    ]
}

pub fn usage_recommendations() -> Vec<&'static str> {
    vec![
        "Implement water restrictions during peak months",
        "Develop rainwater harvesting programs",
        "Increase storage capacity for dry season",
    ]
}

/// Reservoirs in display order. The first is the default selection.
pub fn reservoirs() -> Vec<Reservoir> {
    vec![
        Reservoir {
            key: "reservoir1",
            name: "Central Reservoir",
            capacity_ml: 500,
            current_ml: 425,
            status: ReservoirStatus::Good,
            location: "Central District",
        },
        Reservoir {
            key: "reservoir2",
            name: "North Reservoir",
            capacity_ml: 350,
            current_ml: 315,
            status: ReservoirStatus::Good,
            location: "North District",
        },
        Reservoir {
            key: "reservoir3",
            name: "South Reservoir",
            capacity_ml: 450,
            current_ml: 180,
            status: ReservoirStatus::Moderate,
            location: "South District",
        },
        Reservoir {
            key: "reservoir4",
            name: "East Reservoir",
            capacity_ml: 300,
            current_ml: 75,
            status: ReservoirStatus::Low,
            location: "East District",
        },
    ]
}

pub fn reservoir(key: &str) -> Result<Reservoir> {
    reservoirs()
        .into_iter()
        .find(|r| r.key == key)
        .ok_or_else(|| CatalogError::UnknownKey {
            collection: "reservoir",
            key: key.to_string(),
        })
}

impl Reservoir {
    /// Stored volume as a percentage of capacity, unrounded.
    ///
    /// A zero capacity reports 0 rather than dividing by zero.
    pub fn fill_percent(&self) -> f64 {
        if self.capacity_ml == 0 {
            return 0.0;
        }
        f64::from(self.current_ml) / f64::from(self.capacity_ml) * 100.0
    }

    /// Utilization as displayed: `round(current / capacity * 100)`.
    ///
    /// ```rust
    /// let central = wdf_content::dashboard::reservoir("reservoir1").unwrap();
    /// assert_eq!(central.utilization_percent(), 85);
    /// ```
    pub fn utilization_percent(&self) -> u32 {
        self.fill_percent().round() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forecast_spans_2020_to_2030() {
        let forecast = demand_forecast();
        assert_eq!(forecast.len(), 11);
        assert_eq!(forecast.first().map(|p| p.label), Some("2020"));
        assert_eq!(forecast.last().map(|p| p.label), Some("2030"));
        assert!(forecast.iter().all(|p| p.values.len() == 2));
    }

    #[test]
    fn test_monthly_usage_has_twelve_months() {
        assert_eq!(monthly_usage().len(), 12);
    }

    #[test]
    fn test_distribution_sums_to_hundred() {
        let total: f64 = status_distribution().iter().map(|s| s.value).sum();
        assert_eq!(total, 100.0);
    }

    #[test]
    fn test_utilization_rounds() {
        let expected = [85, 90, 40, 25];
        for (reservoir, pct) in reservoirs().iter().zip(expected) {
            assert_eq!(reservoir.utilization_percent(), pct, "{}", reservoir.name);
        }
    }

    #[test]
    fn test_utilization_rounds_half_up() {
        let reservoir = Reservoir {
            key: "r",
            name: "r",
            capacity_ml: 8,
            current_ml: 7,
            status: ReservoirStatus::Good,
            location: "",
        };
        // 87.5 -> 88
        assert_eq!(reservoir.utilization_percent(), 88);
    }

    #[test]
    fn test_zero_capacity() {
        let reservoir = Reservoir {
            key: "r",
            name: "r",
            capacity_ml: 0,
            current_ml: 10,
            status: ReservoirStatus::Low,
            location: "",
        };
        assert_eq!(reservoir.utilization_percent(), 0);
    }

    #[test]
    fn test_lookups() {
        assert_eq!(tab("usage").unwrap().label, "Usage Patterns");
        assert_eq!(reservoir("reservoir4").unwrap().name, "East Reservoir");
        assert!(reservoir("reservoir5").is_err());
    }
}
