//! Mutable view state for the recipe viewer overlay.

mod recipe_view;

pub use recipe_view::RecipeViewState;
