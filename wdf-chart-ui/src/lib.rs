//! Shared Dioxus components and D3.js chart bridge for the site.
//!
//! This crate provides:
//! - `chart`: chart specs and data handed to the D3 renderers
//! - `js_bridge`: Rust wrappers for D3.js chart functions via `js_sys::eval()`
//! - `state`: per-page selection state with Dioxus Signals
//! - `theme`: palette and global CSS
//! - `components`: reusable RSX components (cards, badges, tab bar, charts, ...)

pub mod chart;
pub mod components;
pub mod js_bridge;
pub mod state;
pub mod theme;
