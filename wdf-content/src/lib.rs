//! Content catalog for the water demand forecasting project site.
//!
//! Every page of the site is backed by literal records defined here:
//! - `home`, `problem`, `objectives`, `activity`, `dashboard`,
//!   `recommendations`: one module per page, exposing read-only collections
//!   and lookup-by-key functions
//! - `models`: the record types
//! - `selection`: the active-key value behind every selectable UI group
//! - `layout`: pure view-model builders combining the two
//!
//! Nothing here performs I/O. Lookups of an unknown key return
//! [`CatalogError`].

pub mod activity;
pub mod dashboard;
pub mod dates;
pub mod error;
pub mod home;
pub mod layout;
pub mod models;
pub mod objectives;
pub mod problem;
pub mod recommendations;
pub mod selection;

pub use error::CatalogError;
pub use selection::Selection;
