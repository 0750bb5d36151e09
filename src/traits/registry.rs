//! Recipe registry trait abstraction.
//!
//! The registry is the host's mutable, plugin-populated recipe database.
//! The controller only ever reads from it, so the seam is a read-only trait
//! injected at construction instead of a process-wide singleton.

use std::fmt::Debug;
use std::sync::Arc;

use crate::domain::{CategoryId, ContainerId, Focus, Recipe, RecipeCategory, RecipeKind};

/// Auto-fill capability for a (container, category) pair.
///
/// The host can move a recipe's ingredients from the player's open inventory
/// screen into the matching crafting grid. The controller only tests for
/// presence when picking the initial category after a focus change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferHelper {
    pub container: ContainerId,
    pub category_id: CategoryId,
}

/// Read-only view of the host's recipe registry.
///
/// All lookups are synchronous, side-effect-free queries. Order of every
/// returned sequence is registry-defined and significant: it drives
/// index-based category navigation.
pub trait RecipeRegistry: Send + Sync {
    /// All registered categories, in registry order.
    fn recipe_categories(&self) -> Vec<RecipeCategory>;

    /// All recipes registered for a category, in registry order.
    fn recipes(&self, category: &RecipeCategory) -> Vec<Recipe>;

    /// Handler registered for a recipe kind, if any.
    fn recipe_handler(&self, kind: &RecipeKind) -> Option<Arc<dyn RecipeHandler>>;

    /// Auto-fill helper for the given open container and category, if any.
    fn transfer_helper(
        &self,
        container: &ContainerId,
        category: &RecipeCategory,
    ) -> Option<TransferHelper>;

    /// Categories containing at least one recipe that consumes the focus.
    /// Deduplicated, in registry order.
    fn categories_with_input(&self, focus: &Focus) -> Vec<RecipeCategory>;

    /// Categories containing at least one recipe that produces the focus.
    /// Deduplicated, in registry order.
    fn categories_with_output(&self, focus: &Focus) -> Vec<RecipeCategory>;

    /// Recipes in `category` that consume the focus.
    fn recipes_with_input(&self, focus: &Focus, category: &RecipeCategory) -> Vec<Recipe>;

    /// Recipes in `category` that produce the focus.
    fn recipes_with_output(&self, focus: &Focus, category: &RecipeCategory) -> Vec<Recipe>;
}

/// Resolves opaque recipe records of one kind into display wrappers.
///
/// Handlers are registered with the registry by the host (or its plugins)
/// and looked up by the [`RecipeKind`] tag each recipe carries.
pub trait RecipeHandler: Send + Sync {
    /// The recipe kind this handler understands.
    fn kind(&self) -> RecipeKind;

    /// Wrap a recipe record for display.
    fn wrap(&self, recipe: &Recipe) -> Box<dyn RecipeWrapper>;
}

/// Display-side handle for a wrapped recipe.
///
/// The renderer draws from this; the controller only carries it through
/// [`RecipeLayout`](crate::domain::RecipeLayout).
pub trait RecipeWrapper: Debug + Send + Sync {
    /// Kind of the wrapped recipe.
    fn kind(&self) -> RecipeKind;

    /// Renderer-facing name for the wrapped recipe.
    fn display_name(&self) -> String;
}
