//! Domain model for the recipe viewer.
//!
//! These are the value types exchanged between the controller, the host's
//! recipe registry, and the renderer. All of them are plain data; identity
//! resolution (what an item key actually points at) is the host's business.

mod focus;
mod layout;
mod recipe;

pub use focus::{Focus, Mode};
pub use layout::RecipeLayout;
pub use recipe::{CategoryId, ContainerId, Recipe, RecipeCategory, RecipeKind};
