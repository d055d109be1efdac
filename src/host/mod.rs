//! Host tab registry.
//!
//! The popup consumes the browser's tab service through [`TabRegistry`]:
//! one snapshot query at startup, then fire-and-forget activate/close
//! commands. [`SnapshotRegistry`] is the shipped implementation: it reads the
//! snapshot as JSON and journals accepted commands for a browser-side bridge
//! to execute after the popup exits.

use crate::model::{HostError, HostTab, TabId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub mod snapshot;

pub use snapshot::SnapshotRegistry;

/// Tab service the popup talks to.
pub trait TabRegistry {
    /// All open tabs in the host's native order.
    fn query_all_tabs(&mut self) -> Result<Vec<HostTab>, HostError>;

    /// Focus the tab in its window. The caller closes the popup afterwards.
    ///
    /// # Errors
    ///
    /// Returns `HostError::StaleReference` if the tab is no longer open.
    fn activate_tab(&mut self, id: TabId) -> Result<(), HostError>;

    /// Close the tab.
    ///
    /// # Errors
    ///
    /// Returns `HostError::StaleReference` if the tab is no longer open.
    fn close_tab(&mut self, id: TabId) -> Result<(), HostError>;
}

/// Kind of command issued to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommandAction {
    Activate,
    Close,
}

/// A command the host accepted, as written to the journal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostCommand {
    pub action: CommandAction,
    pub tab_id: TabId,
    pub issued_at: DateTime<Utc>,
}

impl HostCommand {
    pub fn new(action: CommandAction, tab_id: TabId) -> Self {
        Self {
            action,
            tab_id,
            issued_at: Utc::now(),
        }
    }
}
