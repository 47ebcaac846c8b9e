//! Display-ready view models.
//!
//! Each builder is a pure function of catalog data and the current
//! [`Selection`]: it resolves keys, numbers cards and derives the few
//! display values (button labels, utilization) so the Dioxus components only
//! have to lay them out.

use crate::activity;
use crate::dashboard;
use crate::error::Result;
use crate::models::{Icon, Objective, Reservoir, Tone, WeekRecord};
use crate::selection::Selection;

/// A week button in the activity log selector.
#[derive(Debug, Clone, PartialEq)]
pub struct WeekButton {
    pub key: &'static str,
    pub label: String,
    pub active: bool,
}

/// Everything the activity log shows for the selected week.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityLogView {
    pub buttons: Vec<WeekButton>,
    pub week: WeekRecord,
    pub date_label: String,
}

impl ActivityLogView {
    /// Resolve the selected week and mark its button active.
    ///
    /// ```rust
    /// use wdf_content::layout::ActivityLogView;
    /// use wdf_content::Selection;
    ///
    /// let view = ActivityLogView::build(&Selection::new("week1")).unwrap();
    /// assert_eq!(view.date_label, "January 1-7, 2024");
    /// ```
    pub fn build(selection: &Selection) -> Result<Self> {
        let week = activity::week(selection.active())?;
        let buttons = activity::weeks()
            .iter()
            .map(|w| WeekButton {
                key: w.key,
                label: format!("Week {}", w.number()),
                active: selection.is_active(w.key),
            })
            .collect();
        let date_label = week.dates.label();
        Ok(Self {
            buttons,
            week,
            date_label,
        })
    }
}

/// Default selection for the activity log page.
pub fn default_week() -> Selection {
    Selection::first_of(activity::week_keys())
}

/// Default selection for the dashboard tabs.
pub fn default_tab() -> Selection {
    Selection::first_of(dashboard::tabs().iter().map(|t| t.key))
}

/// Default selection for the dashboard reservoir list.
pub fn default_reservoir() -> Selection {
    Selection::first_of(dashboard::reservoirs().iter().map(|r| r.key))
}

/// A dashboard tab trigger.
#[derive(Debug, Clone, PartialEq)]
pub struct TabButton {
    pub key: &'static str,
    pub label: &'static str,
    pub icon: Icon,
    pub active: bool,
}

pub fn tab_buttons(selection: &Selection) -> Vec<TabButton> {
    dashboard::tabs()
        .into_iter()
        .map(|t| TabButton {
            key: t.key,
            label: t.label,
            icon: t.icon,
            active: selection.is_active(t.key),
        })
        .collect()
}

/// One row of the reservoir details list.
#[derive(Debug, Clone, PartialEq)]
pub struct ReservoirGauge {
    pub key: &'static str,
    pub name: &'static str,
    pub location: &'static str,
    pub status: &'static str,
    pub tone: Tone,
    pub current_ml: u32,
    pub capacity_ml: u32,
    /// Rounded utilization shown as text.
    pub percent: u32,
    /// Unrounded fill used for the progress bar width.
    pub bar_width: f64,
    pub selected: bool,
}

impl ReservoirGauge {
    pub fn from_reservoir(reservoir: &Reservoir, selected: bool) -> Self {
        Self {
            key: reservoir.key,
            name: reservoir.name,
            location: reservoir.location,
            status: reservoir.status.label(),
            tone: reservoir.status.tone(),
            current_ml: reservoir.current_ml,
            capacity_ml: reservoir.capacity_ml,
            percent: reservoir.utilization_percent(),
            bar_width: reservoir.fill_percent(),
            selected,
        }
    }
}

/// Gauges for every reservoir, flagging the selected one.
pub fn reservoir_gauges(selection: &Selection) -> Vec<ReservoirGauge> {
    dashboard::reservoirs()
        .iter()
        .map(|r| ReservoirGauge::from_reservoir(r, selection.is_active(r.key)))
        .collect()
}

/// An objective card with its 1-based position.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectiveCard {
    pub number: usize,
    pub objective: Objective,
}

pub fn objective_cards() -> Vec<ObjectiveCard> {
    crate::objectives::objectives()
        .into_iter()
        .enumerate()
        .map(|(i, objective)| ObjectiveCard {
            number: i + 1,
            objective,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WeekStatus;

    #[test]
    fn test_defaults_are_first_keys() {
        assert_eq!(default_week().active(), "week1");
        assert_eq!(default_tab().active(), "forecast");
        assert_eq!(default_reservoir().active(), "reservoir1");
    }

    #[test]
    fn test_initial_view_shows_week_one() {
        let view = ActivityLogView::build(&default_week()).unwrap();
        assert_eq!(
            view.week.title,
            "Week 1: Project Initiation & Data Collection Setup"
        );
        assert_eq!(view.week.status, WeekStatus::Completed);
        let active: Vec<&str> = view
            .buttons
            .iter()
            .filter(|b| b.active)
            .map(|b| b.key)
            .collect();
        assert_eq!(active, vec!["week1"]);
    }

    #[test]
    fn test_each_week_displays_its_own_record() {
        for week in activity::weeks() {
            let view = ActivityLogView::build(&Selection::new(week.key)).unwrap();
            assert_eq!(view.week.title, week.title);
            assert_eq!(view.date_label, week.dates.label());
            assert_eq!(view.week.status, week.status);
            assert_eq!(view.week.objectives, week.objectives);
            assert_eq!(view.week.days, week.days);
        }
    }

    #[test]
    fn test_switching_week_leaves_other_selections_alone() {
        let mut weeks = default_week();
        let tabs = default_tab();
        let reservoirs = default_reservoir();

        weeks.select("week2");
        let view = ActivityLogView::build(&weeks).unwrap();

        assert_eq!(view.week.title, "Week 2: Historical Data Analysis");
        assert_eq!(view.date_label, "January 8-14, 2024");
        assert_eq!(tabs.active(), "forecast");
        assert_eq!(reservoirs.active(), "reservoir1");
    }

    #[test]
    fn test_button_labels() {
        let view = ActivityLogView::build(&default_week()).unwrap();
        let labels: Vec<&str> = view.buttons.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, vec!["Week 1", "Week 2", "Week 3"]);
    }

    #[test]
    fn test_unknown_week_is_an_error() {
        assert!(ActivityLogView::build(&Selection::new("week7")).is_err());
    }

    #[test]
    fn test_gauges() {
        let gauges = reservoir_gauges(&default_reservoir());
        assert_eq!(gauges.len(), 4);
        assert_eq!(gauges[0].percent, 85);
        assert!(gauges[0].selected);
        assert!(gauges[1..].iter().all(|g| !g.selected));
        assert_eq!(gauges[3].status, "Low");
        assert_eq!(gauges[3].tone, Tone::Critical);
    }

    #[test]
    fn test_tab_buttons() {
        let mut selection = default_tab();
        selection.select("map");
        let buttons = tab_buttons(&selection);
        assert_eq!(buttons.len(), 4);
        assert!(buttons[3].active);
        assert!(!buttons[0].active);
    }

    #[test]
    fn test_objective_cards_numbered() {
        let cards = objective_cards();
        assert_eq!(cards.len(), 5);
        assert_eq!(cards[0].number, 1);
        assert_eq!(cards[0].objective.deliverables.len(), 3);
        assert_eq!(
            cards[4].objective.title,
            "Provide Community-Level Recommendations"
        );
    }
}
