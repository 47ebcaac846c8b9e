//! Per-page selection state managed via Dioxus context.
//!
//! Each selectable page provides its own state struct with
//! `use_context_provider` when it mounts; child components retrieve it with
//! `use_context::<...>()`. The signals are owned by the page scope, so the
//! selection resets to its default whenever the page is navigated away from
//! and back.

use dioxus::prelude::*;
use wdf_content::layout::{default_reservoir, default_tab, default_week};
use wdf_content::Selection;

/// Selection state of the activity log page.
#[derive(Clone, Copy)]
pub struct ActivityLogState {
    /// Active week key (`week1`, `week2`, ...)
    pub week: Signal<Selection>,
}

impl ActivityLogState {
    /// Create the state with the first week selected.
    pub fn new() -> Self {
        Self {
            week: Signal::new(default_week()),
        }
    }

    pub fn select_week(&mut self, key: &str) {
        log::debug!("Selecting week {}", key);
        self.week.write().select(key);
    }
}

impl Default for ActivityLogState {
    fn default() -> Self {
        Self::new()
    }
}

/// Selection state of the data dashboard page.
#[derive(Clone, Copy)]
pub struct DashboardState {
    /// Active tab key (`forecast`, `usage`, `reservoirs`, `map`)
    pub tab: Signal<Selection>,
    /// Highlighted reservoir key (`reservoir1`, ...)
    pub reservoir: Signal<Selection>,
}

impl DashboardState {
    /// Create the state on the first tab with the first reservoir highlighted.
    pub fn new() -> Self {
        Self {
            tab: Signal::new(default_tab()),
            reservoir: Signal::new(default_reservoir()),
        }
    }

    pub fn select_tab(&mut self, key: &str) {
        log::debug!("Selecting dashboard tab {}", key);
        self.tab.write().select(key);
    }

    pub fn select_reservoir(&mut self, key: &str) {
        log::debug!("Selecting reservoir {}", key);
        self.reservoir.write().select(key);
    }
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new()
    }
}
