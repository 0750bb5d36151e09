//! Pagination and focus-tracking state machine.
//!
//! This is the single stateful component of the crate: it owns the current
//! focus, display mode, category selection, and page selection, plus a
//! derived cache of the filtered recipe list. Every mutation funnels into
//! one recompute path ([`update_recipes`](RecipeViewState::update_recipes)),
//! so the cache is always a full replacement, never patched.

use std::sync::Arc;

use tracing::{error, warn};

use crate::domain::{Focus, Mode, Recipe, RecipeCategory, RecipeLayout};
use crate::error::{ViewError, ViewResult};
use crate::traits::{HostContext, RecipeRegistry, RecipeViewLogic};

/// Pagination/selection controller for the recipe viewer.
///
/// Collaborators are injected at construction; the controller performs no
/// I/O of its own and expects to run on the host's single UI thread.
pub struct RecipeViewState {
    registry: Arc<dyn RecipeRegistry>,
    host: Arc<dyn HostContext>,
    /// Whether the focus is viewed as a recipe input or output.
    mode: Mode,
    /// The focus of the view; blank means browse-all.
    focus: Focus,
    /// Categories applicable to the current focus and mode.
    categories: Vec<RecipeCategory>,
    /// Recipes for the selected category, filtered by focus and mode.
    recipes: Vec<Recipe>,
    page_size: usize,
    category_index: usize,
    page_index: usize,
}

impl RecipeViewState {
    /// Create a controller with a blank focus and an empty category
    /// selection.
    ///
    /// # Panics
    ///
    /// Panics if `page_size` is zero.
    pub fn new(
        registry: Arc<dyn RecipeRegistry>,
        host: Arc<dyn HostContext>,
        page_size: usize,
    ) -> Self {
        assert!(page_size > 0, "page_size must be at least 1");
        Self {
            registry,
            host,
            mode: Mode::Input,
            focus: Focus::Blank,
            categories: Vec::new(),
            recipes: Vec::new(),
            page_size,
            category_index: 0,
            page_index: 0,
        }
    }

    /// Current focus.
    pub fn focus(&self) -> &Focus {
        &self.focus
    }

    /// Current display mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Recipe slots per page.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// 0-based index into the category list.
    pub fn category_index(&self) -> usize {
        self.category_index
    }

    /// 0-based index of the displayed page.
    pub fn page_index(&self) -> usize {
        self.page_index
    }

    /// The cached recipe list for the current selection.
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Number of pages the recipe list splits into. Zero or one recipe is
    /// always exactly one page, whatever the page size.
    fn page_count(&self) -> usize {
        if self.recipes.len() <= 1 {
            return 1;
        }
        self.recipes.len().div_ceil(self.page_size)
    }

    /// Recompute the recipe cache for the current category, focus, and mode.
    fn update_recipes(&mut self) {
        let Some(category) = self.current_category().cloned() else {
            self.recipes = Vec::new();
            return;
        };
        self.recipes = if self.focus.is_blank() {
            self.registry.recipes(&category)
        } else {
            match self.mode {
                Mode::Input => self.registry.recipes_with_input(&self.focus, &category),
                Mode::Output => self.registry.recipes_with_output(&self.focus, &category),
            }
        };
    }
}

impl RecipeViewLogic for RecipeViewState {
    fn set_focus(&mut self, focus: Focus, mode: Mode) -> bool {
        if self.focus == focus && self.mode == mode {
            return true;
        }

        let candidates = match mode {
            Mode::Input => self.registry.categories_with_input(&focus),
            Mode::Output => self.registry.categories_with_output(&focus),
        };
        if candidates.is_empty() {
            return false;
        }

        self.categories = candidates;
        self.focus = focus;
        self.mode = mode;
        self.category_index = 0;
        self.page_index = 0;

        // Prefer the first category the player can auto-fill from the
        // inventory screen they have open right now.
        if let Some(container) = self.host.open_container() {
            if let Some(index) = self.categories.iter().position(|category| {
                self.registry
                    .transfer_helper(&container, category)
                    .is_some()
            }) {
                self.category_index = index;
            }
        }

        self.update_recipes();
        true
    }

    fn set_category_focus(&mut self) -> bool {
        let Some(category) = self.current_category().cloned() else {
            return false;
        };
        if self.focus.is_blank() {
            return false;
        }

        self.categories = self.registry.recipe_categories();
        self.focus = Focus::Blank;
        self.category_index = match self.categories.iter().position(|c| *c == category) {
            Some(index) => index,
            None => {
                warn!(
                    category = %category.id,
                    "selected category missing from registry category list"
                );
                0
            }
        };
        self.page_index = 0;

        self.update_recipes();
        true
    }

    fn set_page_size(&mut self, page_size: usize) {
        assert!(page_size > 0, "page_size must be at least 1");
        if self.page_size == page_size {
            return;
        }

        // Rebase to keep the first visible recipe roughly in view.
        let recipe_offset = self.page_index * self.page_size;
        self.page_index = recipe_offset / page_size;
        self.page_size = page_size;

        self.update_recipes();
    }

    fn current_category(&self) -> Option<&RecipeCategory> {
        if self.categories.is_empty() {
            return None;
        }
        self.categories.get(self.category_index)
    }

    fn page_layouts(&self, pos_x: i32, pos_y: i32, row_spacing: i32) -> Vec<RecipeLayout> {
        let mut layouts = Vec::new();

        let Some(category) = self.current_category() else {
            return layouts;
        };

        let mut recipe_index = self.page_index * self.page_size;
        while recipe_index < self.recipes.len() && layouts.len() < self.page_size {
            let recipe = &self.recipes[recipe_index];
            recipe_index += 1;

            let Some(handler) = self.registry.recipe_handler(&recipe.kind) else {
                // A single bad recipe must not blank the page.
                error!(kind = %recipe.kind, "no recipe handler registered for recipe kind");
                continue;
            };

            let slot = layouts.len();
            layouts.push(RecipeLayout {
                index: slot,
                x: pos_x,
                y: pos_y + row_spacing * slot as i32,
                category: category.clone(),
                wrapper: handler.wrap(recipe),
                focus: self.focus.clone(),
            });
        }

        layouts
    }

    fn next_category(&mut self) -> ViewResult<()> {
        let count = self.categories.len();
        if count == 0 {
            return Err(ViewError::NoCategories);
        }
        self.category_index = (self.category_index + 1) % count;
        self.page_index = 0;
        self.update_recipes();
        Ok(())
    }

    fn previous_category(&mut self) -> ViewResult<()> {
        let count = self.categories.len();
        if count == 0 {
            return Err(ViewError::NoCategories);
        }
        self.category_index = (count + self.category_index - 1) % count;
        self.page_index = 0;
        self.update_recipes();
        Ok(())
    }

    fn next_page(&mut self) {
        self.page_index = (self.page_index + 1) % self.page_count();
        self.update_recipes();
    }

    fn previous_page(&mut self) {
        let pages = self.page_count();
        self.page_index = (pages + self.page_index - 1) % pages;
        self.update_recipes();
    }

    fn has_multiple_pages(&self) -> bool {
        self.recipes.len() > self.page_size
    }

    fn has_multiple_categories(&self) -> bool {
        self.categories.len() > 1
    }

    fn page_label(&self) -> String {
        format!("{}/{}", self.page_index + 1, self.page_count())
    }
}
