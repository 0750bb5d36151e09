//! View controller error variants.

use thiserror::Error;

/// Errors surfaced by the recipe view controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ViewError {
    /// Category navigation was requested with an empty category list.
    /// Callers gate on `has_multiple_categories()` or establish a focus
    /// before navigating.
    #[error("no recipe categories to navigate")]
    NoCategories,
}

/// Result alias for controller operations.
pub type ViewResult<T> = Result<T, ViewError>;
