//! Community recommendations.

use crate::models::{Icon, Priority, Strategy, TimelinePhase, UrgentAction};

pub const TITLE: &str = "Community Recommendations";
pub const INTRO: &str = "Practical strategies for conserving water and optimizing resource efficiency at every level of our community";

pub const URGENT_TITLE: &str = "Immediate Action Items";
pub const URGENT_SUBTITLE: &str = "Critical steps that need to be implemented within the next 90 days";

pub const ROADMAP_TITLE: &str = "Implementation Roadmap";
pub const ROADMAP_SUBTITLE: &str =
    "Step-by-step guide to implementing water conservation strategies in your community";

pub const CTA_TITLE: &str = "Start Conserving Today";
pub const CTA_BODY: &str = "Every drop counts. Begin with simple household changes and gradually expand to community-wide initiatives.";

pub fn urgent_actions() -> Vec<UrgentAction> {
    vec![
        UrgentAction {
            title: "Immediate Water Audit",
            description: "Conduct comprehensive assessment of current usage patterns",
            deadline: "Next 30 days",
            responsible: "Water management team",
        },
        UrgentAction {
            title: "Emergency Conservation Plan",
            description: "Develop protocols for drought conditions and water shortages",
            deadline: "Next 60 days",
            responsible: "Emergency management",
        },
        UrgentAction {
            title: "Public Awareness Campaign",
            description: "Launch community education about water conservation benefits",
            deadline: "Next 90 days",
            responsible: "Community outreach team",
        },
    ]
}

pub fn strategies() -> Vec<Strategy> {
    vec![
        Strategy {
            icon: Icon::Home,
            category: "Household Level",
            title: "Smart Water Usage at Home",
            priority: Priority::High,
            strategies: vec![
                "Install low-flow faucets and showerheads to reduce consumption by 30%",
                "Fix leaks immediately - a dripping tap can waste 15L per day",
                "Use drought-resistant native plants in gardens",
                "Collect rainwater for outdoor use with simple barrel systems",
                "Run dishwashers and washing machines only with full loads",
            ],
            impact: "20-30% reduction in household water use",
            implementation: "Individual homeowners",
            timeframe: "1-3 months",
        },
        Strategy {
            icon: Icon::Users,
            category: "Community Level",
            title: "Neighborhood Conservation Programs",
            priority: Priority::High,
            strategies: vec![
                "Establish community gardens with shared irrigation systems",
                "Organize neighborhood leak detection and repair workshops",
                "Create water-sharing networks for emergency situations",
                "Implement greywater recycling for common area irrigation",
                "Start education campaigns about seasonal water conservation",
            ],
            impact: "15-25% reduction in community water demand",
            implementation: "Local community groups",
            timeframe: "6-12 months",
        },
        Strategy {
            icon: Icon::Factory,
            category: "Infrastructure",
            title: "Smart Water Management Systems",
            priority: Priority::Medium,
            strategies: vec![
                "Install smart meters for real-time usage monitoring",
                "Upgrade aging pipes to reduce system-wide leakage",
                "Implement tiered pricing to encourage conservation",
                "Deploy IoT sensors for early leak detection",
                "Build decentralized storage systems in each district",
            ],
            impact: "25-40% improvement in distribution efficiency",
            implementation: "Local government and utilities",
            timeframe: "1-3 years",
        },
        Strategy {
            icon: Icon::Leaf,
            category: "Environmental",
            title: "Natural Water Conservation",
            priority: Priority::Medium,
            strategies: vec![
                "Restore wetlands and natural water retention areas",
                "Plant trees and vegetation to reduce evaporation",
                "Create permeable surfaces to improve groundwater recharge",
                "Establish buffer zones around water sources",
                "Implement sustainable agriculture practices",
            ],
            impact: "10-20% improvement in natural water retention",
            implementation: "Environmental agencies and communities",
            timeframe: "2-5 years",
        },
    ]
}

pub fn roadmap() -> Vec<TimelinePhase> {
    vec![
        TimelinePhase {
            step: 1,
            title: "Assessment",
            duration: "Month 1",
            focus: Some("Audit current usage and identify opportunities"),
        },
        TimelinePhase {
            step: 2,
            title: "Planning",
            duration: "Month 2-3",
            focus: Some("Develop detailed implementation plans and budgets"),
        },
        TimelinePhase {
            step: 3,
            title: "Implementation",
            duration: "Month 4-12",
            focus: Some("Roll out conservation measures across the community"),
        },
        TimelinePhase {
            step: 4,
            title: "Monitoring",
            duration: "Ongoing",
            focus: Some("Track progress and adjust strategies as needed"),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategies() {
        let strategies = strategies();
        assert_eq!(strategies.len(), 4);
        assert!(strategies.iter().all(|s| s.strategies.len() == 5));
        let high = strategies
            .iter()
            .filter(|s| s.priority == Priority::High)
            .count();
        assert_eq!(high, 2);
    }

    #[test]
    fn test_urgent_actions_and_roadmap() {
        assert_eq!(urgent_actions().len(), 3);
        assert_eq!(urgent_actions()[2].deadline, "Next 90 days");
        assert!(roadmap().iter().all(|p| p.focus.is_some()));
    }
}
