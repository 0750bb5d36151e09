//! Positioned view-model entries handed to the renderer.

use crate::domain::{Focus, RecipeCategory};
use crate::traits::RecipeWrapper;

/// One recipe entry placed on the current page.
///
/// Produced by the controller for the renderer; positions are absolute
/// screen coordinates supplied by the caller plus row spacing.
#[derive(Debug)]
pub struct RecipeLayout {
    /// Sequential slot on the page. Recipes skipped for a missing handler
    /// do not consume a slot.
    pub index: usize,
    pub x: i32,
    pub y: i32,
    /// Category the recipe belongs to.
    pub category: RecipeCategory,
    /// Display wrapper produced by the recipe's handler.
    pub wrapper: Box<dyn RecipeWrapper>,
    /// Focus active when the page was built, for highlight rendering.
    pub focus: Focus,
}
