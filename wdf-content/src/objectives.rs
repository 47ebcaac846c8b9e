//! Project objectives, outcomes and timeline.

use crate::models::{Icon, Objective, Outcome, TimelinePhase};

pub const TITLE: &str = "Project Objectives";
pub const INTRO: &str = "Our comprehensive approach to water forecasting and reservoir assessment focuses on five key objectives that will drive sustainable water resource management for communities.";

pub const OUTCOMES_TITLE: &str = "Expected Project Outcomes";
pub const OUTCOMES_SUBTITLE: &str = "The tangible benefits our community will achieve through this comprehensive water management initiative";

pub const TIMELINE_TITLE: &str = "Project Timeline";

pub fn objectives() -> Vec<Objective> {
    vec![
        Objective {
            icon: Icon::BarChart,
            title: "Analyze Historical Water Data",
            description: "Comprehensive analysis of water usage patterns, rainfall data, and reservoir inflow/outflow records to identify trends and seasonal variations.",
            deliverables: vec![
                "10-year water usage trend analysis",
                "Seasonal rainfall pattern mapping",
                "Reservoir capacity utilization reports",
            ],
        },
        Objective {
            icon: Icon::TrendingUp,
            title: "Forecast Future Water Demand",
            description: "Utilize demographic data, population growth projections, and climate change models to predict future water requirements accurately.",
            deliverables: vec![
                "20-year demand projection models",
                "Population growth impact analysis",
                "Climate-adjusted demand scenarios",
            ],
        },
        Objective {
            icon: Icon::Eye,
            title: "Evaluate Current Storage Capacities",
            description: "Assess existing reservoir infrastructure, storage efficiency, and capacity to meet projected future demands.",
            deliverables: vec![
                "Reservoir capacity assessment reports",
                "Infrastructure efficiency analysis",
                "Gap analysis documentation",
            ],
        },
        Objective {
            icon: Icon::MapPin,
            title: "Develop Interactive Visualization Tools",
            description: "Create user-friendly dashboards and mapping tools to present complex data in accessible formats for stakeholders.",
            deliverables: vec![
                "Interactive water demand dashboard",
                "Reservoir status mapping system",
                "Real-time monitoring interface",
            ],
        },
        Objective {
            icon: Icon::Users,
            title: "Provide Community-Level Recommendations",
            description: "Generate actionable insights and conservation strategies tailored to local community needs and resources.",
            deliverables: vec![
                "Community conservation guidelines",
                "Resource optimization strategies",
                "Implementation roadmaps",
            ],
        },
    ]
}

pub fn outcomes() -> Vec<Outcome> {
    vec![
        Outcome {
            title: "Enhanced Water Security",
            description: "Communities will have better understanding of their water resources and future needs",
        },
        Outcome {
            title: "Informed Decision Making",
            description: "Data-driven insights for infrastructure planning and resource allocation",
        },
        Outcome {
            title: "Sustainable Resource Management",
            description: "Long-term strategies for efficient water use and conservation",
        },
        Outcome {
            title: "Risk Mitigation",
            description: "Early warning systems for potential water shortages or oversupply scenarios",
        },
    ]
}

pub fn timeline() -> Vec<TimelinePhase> {
    vec![
        TimelinePhase {
            step: 1,
            title: "Data Collection",
            duration: "Months 1-3",
            focus: None,
        },
        TimelinePhase {
            step: 2,
            title: "Analysis & Modeling",
            duration: "Months 4-8",
            focus: None,
        },
        TimelinePhase {
            step: 3,
            title: "Visualization Development",
            duration: "Months 9-11",
            focus: None,
        },
        TimelinePhase {
            step: 4,
            title: "Implementation & Recommendations",
            duration: "Months 12-15",
            focus: None,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_five_objectives() {
        let objectives = objectives();
        assert_eq!(objectives.len(), 5);
        assert!(objectives.iter().all(|o| o.deliverables.len() == 3));
    }

    #[test]
    fn test_first_objective_deliverables_in_order() {
        let first = &objectives()[0];
        assert_eq!(first.title, "Analyze Historical Water Data");
        assert_eq!(
            first.deliverables,
            vec![
                "10-year water usage trend analysis",
                "Seasonal rainfall pattern mapping",
                "Reservoir capacity utilization reports",
            ]
        );
    }

    #[test]
    fn test_timeline_steps_are_sequential() {
        let steps: Vec<u8> = timeline().iter().map(|p| p.step).collect();
        assert_eq!(steps, vec![1, 2, 3, 4]);
        assert_eq!(outcomes().len(), 4);
    }
}
