//! Domain model types (pure).
//!
//! All types in this module are plain data; state transitions live in `state`.

pub mod entry;
pub mod error;
pub mod host_tab;
pub mod identifiers;
pub mod key_action;

// Re-export for convenience
pub use entry::{Entry, IconRef, BLANK_ICON};
pub use error::{AppError, HostError, SnapshotError};
pub use host_tab::HostTab;
pub use identifiers::TabId;
pub use key_action::KeyAction;
