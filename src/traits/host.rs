//! Host UI context trait abstraction.

use crate::domain::ContainerId;

/// Queries against the host's live UI state.
pub trait HostContext: Send + Sync {
    /// The container/inventory screen the player currently has open, if any.
    fn open_container(&self) -> Option<ContainerId>;
}
