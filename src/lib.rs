//! Craftview - pagination and focus-tracking state for a recipe viewer overlay
//!
//! This library tracks which recipe category and which page of recipes an
//! in-game recipe viewer is showing, reacting to a user-selected focus
//! (item or fluid) and an input/output display mode. Rendering, input
//! handling, and recipe resolution stay on the host side behind the traits
//! in [`traits`].

pub mod domain;
pub mod error;
pub mod prelude;
pub mod traits;
pub mod view_state;
