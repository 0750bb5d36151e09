//! Controller surface consumed by the renderer/UI layer.

use crate::domain::{Focus, Mode, RecipeCategory, RecipeLayout};
use crate::error::ViewResult;

/// The operations the recipe viewer's renderer and input layer drive.
///
/// Implemented by [`RecipeViewState`](crate::view_state::RecipeViewState);
/// kept as a trait so the renderer can hold a `Box<dyn RecipeViewLogic>` and
/// tests can substitute the controller.
pub trait RecipeViewLogic {
    /// Switch the view to a new focus and mode.
    ///
    /// Returns `true` on success, including the no-op case where the pair
    /// equals the current one. Returns `false` and leaves all state
    /// untouched when no category applies to the pair.
    fn set_focus(&mut self, focus: Focus, mode: Mode) -> bool;

    /// Clear the focus and pin the view on the currently selected category
    /// within the full registry category list (browse-all).
    ///
    /// Returns `false` when there is no current category or the focus is
    /// already blank.
    fn set_category_focus(&mut self) -> bool;

    /// Change the number of recipe slots per page, rebasing the page index
    /// to preserve the approximate scroll position.
    ///
    /// # Panics
    ///
    /// Panics if `page_size` is zero.
    fn set_page_size(&mut self, page_size: usize);

    /// The selected category, or `None` when the category list is empty.
    fn current_category(&self) -> Option<&RecipeCategory>;

    /// Build the view models for the current page.
    ///
    /// Entries are placed at `(pos_x, pos_y + row_spacing * slot)`. Recipes
    /// without a registered handler are logged and skipped without consuming
    /// a slot. Never returns more than the page size.
    fn page_layouts(&self, pos_x: i32, pos_y: i32, row_spacing: i32) -> Vec<RecipeLayout>;

    /// Step to the next category, wrapping around; resets to page 0.
    ///
    /// Fails with [`ViewError::NoCategories`](crate::error::ViewError) when
    /// the category list is empty.
    fn next_category(&mut self) -> ViewResult<()>;

    /// Step to the previous category, wrapping around; resets to page 0.
    ///
    /// Fails with [`ViewError::NoCategories`](crate::error::ViewError) when
    /// the category list is empty.
    fn previous_category(&mut self) -> ViewResult<()>;

    /// Step to the next page, wrapping around.
    fn next_page(&mut self);

    /// Step to the previous page, wrapping around.
    fn previous_page(&mut self);

    /// True when the recipe list spills past one page.
    fn has_multiple_pages(&self) -> bool;

    /// True when there is more than one category to navigate.
    fn has_multiple_categories(&self) -> bool;

    /// Display string of the form `"1/3"` (1-based page over page count).
    fn page_label(&self) -> String;
}
