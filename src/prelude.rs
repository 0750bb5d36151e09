//! Prelude module for convenient imports.
//!
//! ```ignore
//! use craftview::prelude::*;
//! ```

// Domain types
pub use crate::domain::{
    CategoryId, ContainerId, Focus, Mode, Recipe, RecipeCategory, RecipeKind, RecipeLayout,
};

// Errors
pub use crate::error::{ViewError, ViewResult};

// Trait seams
pub use crate::traits::{
    HostContext, RecipeHandler, RecipeRegistry, RecipeViewLogic, RecipeWrapper, TransferHelper,
};

// The controller
pub use crate::view_state::RecipeViewState;
