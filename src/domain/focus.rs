//! Focus and display-mode types.

use serde::{Deserialize, Serialize};

/// The item or fluid the recipe viewer is centered on.
///
/// A focus is an opaque identity key handed over by the host. The controller
/// never resolves it; it only forwards it to registry queries and compares
/// it by value. A blank focus means "browse all recipes of the selected
/// category".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Focus {
    /// No focus.
    #[default]
    Blank,
    /// Focused on an item, identified by the host's item key.
    Item(String),
    /// Focused on a fluid, identified by the host's fluid key.
    Fluid(String),
}

impl Focus {
    /// Returns true when no item or fluid is focused.
    pub fn is_blank(&self) -> bool {
        matches!(self, Focus::Blank)
    }
}

/// Whether the focus is interpreted as a recipe input or output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    /// Show recipes that consume the focus.
    Input,
    /// Show recipes that produce the focus.
    Output,
}
