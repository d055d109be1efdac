//! Host-assigned tab identifier.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier the host registry assigns to an open tab.
///
/// Unique among the tabs open during one popup session. The popup never
/// interprets the value; it only compares and echoes it back to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TabId(i64);

impl TabId {
    pub fn new(raw: i64) -> Self {
        Self(raw)
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for TabId {
    fn from(raw: i64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
