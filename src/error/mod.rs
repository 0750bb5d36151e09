//! Error types for the recipe view controller.
//!
//! The controller keeps two failure channels apart: boolean accept/reject
//! for focus transitions (`set_focus` / `set_category_focus`, where `false`
//! means "nothing changed"), and [`ViewError`] for operations that are
//! invalid to call in the current state.

mod view;

pub use view::{ViewError, ViewResult};
