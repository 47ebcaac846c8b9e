//! Landing page content.

use crate::models::{Feature, Icon};

pub const HERO_TITLE: &str = "Forecasting Future Water";
pub const HERO_TITLE_ACCENT: &str = "Requirements";
pub const HERO_SUBTITLE: &str =
    "Assessing Storage Capacities in Reservoirs Through Data-Driven Analysis and Predictive Modeling";

pub const APPROACH_TITLE: &str = "Our Approach to Water Management";
pub const APPROACH_SUBTITLE: &str =
    "Combining advanced analytics with environmental science to create sustainable water resource solutions";

pub const CTA_TITLE: &str = "Ready to Explore Our Research?";
pub const CTA_SUBTITLE: &str =
    "Discover how our data-driven approach can help communities prepare for future water challenges";

/// The four "approach" cards, in display order.
pub fn features() -> Vec<Feature> {
    vec![
        Feature {
            icon: Icon::TrendingUp,
            title: "Demand Forecasting",
            description: "Advanced algorithms predict future water requirements based on historical data and trends",
        },
        Feature {
            icon: Icon::BarChart,
            title: "Capacity Assessment",
            description: "Real-time evaluation of reservoir storage capacities and utilization rates",
        },
        Feature {
            icon: Icon::Shield,
            title: "Risk Management",
            description: "Early warning systems for potential water shortages and overflow scenarios",
        },
        Feature {
            icon: Icon::Droplets,
            title: "Conservation Strategies",
            description: "Data-driven recommendations for efficient water resource management",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_features() {
        let features = features();
        assert_eq!(features.len(), 4);
        assert_eq!(features[0].title, "Demand Forecasting");
        assert_eq!(features[3].icon, Icon::Droplets);
    }
}
