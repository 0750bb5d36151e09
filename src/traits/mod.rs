//! Trait abstractions for dependency injection and testability.
//!
//! The host environment (game client, recipe registry, open inventory
//! screens) is reached exclusively through these traits, so the controller
//! can be driven by fixtures in tests and the host can evolve its lookups
//! without touching the view logic.
//!
//! # Traits
//!
//! - [`RecipeRegistry`] - read-only view of the host's recipe registry
//! - [`RecipeHandler`] - resolves opaque recipe records of one kind
//! - [`RecipeWrapper`] - display-side handle produced by a handler
//! - [`HostContext`] - host UI queries (currently: the open container)
//! - [`RecipeViewLogic`] - the controller surface the renderer consumes

pub mod host;
pub mod logic;
pub mod registry;

pub use host::HostContext;
pub use logic::RecipeViewLogic;
pub use registry::{RecipeHandler, RecipeRegistry, RecipeWrapper, TransferHelper};
