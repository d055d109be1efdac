//! Tab record as reported by the host registry.

use super::TabId;
use serde::{Deserialize, Serialize};

/// One tab from the host's `query` response.
///
/// Field names follow the browser's tab object (`favIconUrl`, `active`).
/// Fields the popup does not use (window id, pinned, index, ...) are ignored
/// on deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostTab {
    pub id: TabId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub url: String,
    /// Icon URL, or a placeholder sentinel, or absent.
    #[serde(default)]
    pub fav_icon_url: Option<String>,
    /// Whether this tab is the focused one in its window.
    #[serde(default)]
    pub active: bool,
}

impl HostTab {
    /// Convenience constructor for a tab without icon that is not active.
    pub fn new(id: i64, title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: TabId::new(id),
            title: title.into(),
            url: url.into(),
            fav_icon_url: None,
            active: false,
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.fav_icon_url = Some(icon.into());
        self
    }

    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }
}
