//! Record types for the content catalog.
//!
//! Every struct derives `Serialize` so chart-bound records can be handed to
//! D3.js as JSON from the Dioxus WASM frontend. All text is `&'static str`
//! because the catalog is literal data baked into the binary.

use crate::dates::DateSpan;
use serde::Serialize;

/// Icon names used by cards, headers and buttons.
///
/// The site ships no icon font; each icon renders as a single glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Icon {
    Activity,
    AlertTriangle,
    ArrowRight,
    BarChart,
    BookOpen,
    Calendar,
    CheckCircle,
    Clock,
    Droplets,
    Eye,
    Factory,
    FileText,
    Home,
    Leaf,
    Lightbulb,
    MapPin,
    Shield,
    Target,
    Thermometer,
    TrendingDown,
    TrendingUp,
    Users,
}

impl Icon {
    /// The glyph drawn for this icon.
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Activity => "\u{2248}",
            Icon::AlertTriangle => "\u{26A0}",
            Icon::ArrowRight => "\u{2192}",
            Icon::BarChart => "\u{1F4CA}",
            Icon::BookOpen => "\u{1F4D6}",
            Icon::Calendar => "\u{1F4C5}",
            Icon::CheckCircle => "\u{2714}",
            Icon::Clock => "\u{23F1}",
            Icon::Droplets => "\u{1F4A7}",
            Icon::Eye => "\u{1F441}",
            Icon::Factory => "\u{1F3ED}",
            Icon::FileText => "\u{1F4C4}",
            Icon::Home => "\u{1F3E0}",
            Icon::Leaf => "\u{1F343}",
            Icon::Lightbulb => "\u{1F4A1}",
            Icon::MapPin => "\u{1F4CD}",
            Icon::Shield => "\u{1F6E1}",
            Icon::Target => "\u{1F3AF}",
            Icon::Thermometer => "\u{1F321}",
            Icon::TrendingDown => "\u{1F4C9}",
            Icon::TrendingUp => "\u{1F4C8}",
            Icon::Users => "\u{1F465}",
        }
    }
}

/// Semantic color family for badges, stats and status dots.
///
/// The UI crate maps each tone onto concrete theme colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Tone {
    Positive,
    Info,
    Warning,
    Critical,
    Neutral,
}

/// A feature card on the landing page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Feature {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
}

/// A big number with a caption, used by every stat summary row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeadlineStat {
    pub value: &'static str,
    pub caption: &'static str,
    pub tone: Tone,
}

/// One of the water-management challenges on the problem page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Challenge {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
    /// Shown in the "Key Impact" callout.
    pub impact: &'static str,
}

/// A numbered project objective with its ordered deliverables.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Objective {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
    pub deliverables: Vec<&'static str>,
}

/// An expected project outcome.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Outcome {
    pub title: &'static str,
    pub description: &'static str,
}

/// A step in the project timeline or the implementation roadmap.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelinePhase {
    pub step: u8,
    pub title: &'static str,
    pub duration: &'static str,
    pub focus: Option<&'static str>,
}

/// Progress status of a logged week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum WeekStatus {
    Completed,
    InProgress,
    Planned,
}

impl WeekStatus {
    pub fn label(self) -> &'static str {
        match self {
            WeekStatus::Completed => "Completed",
            WeekStatus::InProgress => "In Progress",
            WeekStatus::Planned => "Planned",
        }
    }

    pub fn tone(self) -> Tone {
        match self {
            WeekStatus::Completed => Tone::Positive,
            WeekStatus::InProgress => Tone::Info,
            WeekStatus::Planned => Tone::Neutral,
        }
    }
}

/// One working day inside a logged week.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayRecord {
    pub day: &'static str,
    pub tasks: Vec<&'static str>,
    pub data_collected: &'static str,
    pub analysis: &'static str,
}

/// A week of the activity log, selected by `key` (`week1`, `week2`, ...).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeekRecord {
    pub key: &'static str,
    pub title: &'static str,
    pub dates: DateSpan,
    pub status: WeekStatus,
    pub objectives: Vec<&'static str>,
    pub days: Vec<DayRecord>,
}

impl WeekRecord {
    /// Ordinal of the week, taken from the trailing digits of its key.
    pub fn number(&self) -> &'static str {
        let digits = self.key.trim_start_matches(|c: char| !c.is_ascii_digit());
        if digits.is_empty() { self.key } else { digits }
    }
}

/// Fill-level status of a reservoir.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ReservoirStatus {
    Good,
    Moderate,
    Low,
}

impl ReservoirStatus {
    pub fn label(self) -> &'static str {
        match self {
            ReservoirStatus::Good => "Good",
            ReservoirStatus::Moderate => "Moderate",
            ReservoirStatus::Low => "Low",
        }
    }

    pub fn tone(self) -> Tone {
        match self {
            ReservoirStatus::Good => Tone::Positive,
            ReservoirStatus::Moderate => Tone::Warning,
            ReservoirStatus::Low => Tone::Critical,
        }
    }
}

/// A storage reservoir. Volumes are in megalitres (ML).
///
/// `current_ml <= capacity_ml` is expected but not enforced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Reservoir {
    pub key: &'static str,
    pub name: &'static str,
    pub capacity_ml: u32,
    pub current_ml: u32,
    pub status: ReservoirStatus,
    pub location: &'static str,
}

/// A tab of the data dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardTab {
    pub key: &'static str,
    pub label: &'static str,
    pub icon: Icon,
}

/// One x-axis position of a chart with its y-values, one per series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesPoint {
    pub label: &'static str,
    pub values: Vec<f64>,
}

impl SeriesPoint {
    pub fn new(label: &'static str, values: &[f64]) -> Self {
        Self {
            label,
            values: values.to_vec(),
        }
    }
}

/// A slice of a pie chart. `value` is a percentage share.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieSlice {
    pub name: &'static str,
    pub value: f64,
    pub color: &'static str,
}

/// Priority of a recommended strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn label(self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }

    pub fn tone(self) -> Tone {
        match self {
            Priority::High => Tone::Critical,
            Priority::Medium => Tone::Warning,
            Priority::Low => Tone::Positive,
        }
    }
}

/// A group of conservation strategies for one level of the community.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Strategy {
    pub icon: Icon,
    pub category: &'static str,
    pub title: &'static str,
    pub priority: Priority,
    pub strategies: Vec<&'static str>,
    pub impact: &'static str,
    pub implementation: &'static str,
    pub timeframe: &'static str,
}

/// An action item due within the next 90 days.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UrgentAction {
    pub title: &'static str,
    pub description: &'static str,
    pub deadline: &'static str,
    pub responsible: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_labels_match_badges() {
        assert_eq!(WeekStatus::InProgress.label(), "In Progress");
        assert_eq!(WeekStatus::Completed.tone(), Tone::Positive);
        assert_eq!(ReservoirStatus::Low.tone(), Tone::Critical);
        assert_eq!(Priority::Medium.tone(), Tone::Warning);
    }

    #[test]
    fn week_number_comes_from_key() {
        let week = WeekRecord {
            key: "week3",
            title: "",
            dates: DateSpan::within_month(2024, 1, 15, 21),
            status: WeekStatus::Planned,
            objectives: Vec::new(),
            days: Vec::new(),
        };
        assert_eq!(week.number(), "3");
    }
}
