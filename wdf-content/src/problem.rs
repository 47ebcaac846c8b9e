//! Problem statement content.

use crate::models::{Challenge, HeadlineStat, Icon, Tone};

pub const TITLE: &str = "The Water Management Crisis";
pub const INTRO: &str = "Water resource management faces unprecedented challenges as demand increases while supply becomes more unpredictable. Understanding these challenges is crucial for developing effective forecasting and storage solutions.";

pub const OVERVIEW_TITLE: &str = "Current State of Water Resources";
pub const COMPARISON_TITLE: &str = "Why Accurate Forecasting and Assessment Matter";

/// Global figures shown above the challenge cards.
pub fn current_state() -> Vec<HeadlineStat> {
    vec![
        HeadlineStat {
            value: "2.2B",
            caption: "People lack access to safely managed water",
            tone: Tone::Warning,
        },
        HeadlineStat {
            value: "40%",
            caption: "Of global population affected by water scarcity",
            tone: Tone::Critical,
        },
        HeadlineStat {
            value: "70%",
            caption: "Increase in water demand expected by 2050",
            tone: Tone::Warning,
        },
    ]
}

pub fn challenges() -> Vec<Challenge> {
    vec![
        Challenge {
            icon: Icon::TrendingUp,
            title: "Rapid Urbanization",
            description: "Growing cities are placing unprecedented demand on existing water infrastructure, often outpacing supply capacity.",
            impact: "300% increase in urban water demand over the past decade",
        },
        Challenge {
            icon: Icon::Thermometer,
            title: "Climate Change Effects",
            description: "Altered precipitation patterns and extreme weather events are disrupting traditional water supply cycles.",
            impact: "40% reduction in seasonal rainfall predictability",
        },
        Challenge {
            icon: Icon::Users,
            title: "Population Growth",
            description: "Exponential population increases are straining water resources beyond sustainable levels.",
            impact: "Expected 50% population growth in the next 20 years",
        },
        Challenge {
            icon: Icon::Droplets,
            title: "Aging Infrastructure",
            description: "Deteriorating pipes, outdated storage systems, and inefficient distribution networks cause significant water loss.",
            impact: "25-30% water loss through infrastructure leakage",
        },
    ]
}

/// Consequences of planning without forecasts.
pub fn without_planning() -> Vec<&'static str> {
    vec![
        "Emergency water shortages during peak demand periods",
        "Inefficient allocation of resources and budget overruns",
        "Environmental degradation from over-extraction",
        "Public health risks from inadequate water supply",
    ]
}

/// Benefits of planning with forecasts.
pub fn with_data_driven_solutions() -> Vec<&'static str> {
    vec![
        "Proactive infrastructure planning and investment",
        "Optimized reservoir management and storage utilization",
        "Sustainable water conservation strategies",
        "Community resilience against water-related challenges",
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_problem_sections() {
        assert_eq!(current_state().len(), 3);
        assert_eq!(challenges().len(), 4);
        assert_eq!(
            challenges()[3].impact,
            "25-30% water loss through infrastructure leakage"
        );
        assert_eq!(without_planning().len(), with_data_driven_solutions().len());
    }
}
