//! Error types for tabjump.
//!
//! This module defines the error taxonomy using `thiserror` for structured error
//! handling. Errors compose via `?` and `From` conversions.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level application error wrapping all startup and terminal failures
//!   - [`SnapshotError`] - Reading or parsing the host's tab snapshot
//!   - [`HostError`] - Commands the host registry rejected
//!   - [`ConfigError`] - Config file problems
//!   - [`LoggingError`] - Tracing subscriber setup
//!   - `std::io::Error` - Terminal/TUI rendering failures
//!
//! # Recovery Strategy
//!
//! Host command failures are **non-fatal**: a stale tab reference drops the local entry
//! and the popup keeps running. An empty snapshot is not an error at all; it renders an
//! empty list. Snapshot, config, logging and terminal errors happen before or around the
//! event loop and are fatal.

use crate::config::ConfigError;
use crate::logging::LoggingError;
use crate::model::TabId;
use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error.
#[derive(Debug, Error)]
pub enum AppError {
    /// The tab snapshot could not be obtained.
    #[error("Failed to load tab snapshot: {0}")]
    Snapshot(#[from] SnapshotError),

    /// The host registry failed outside of a recoverable command.
    #[error("Host registry error: {0}")]
    Host(#[from] HostError),

    /// The config file exists but is unusable.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Tracing could not be initialized.
    #[error("Logging error: {0}")]
    Logging(#[from] LoggingError),

    /// Terminal or TUI rendering error.
    ///
    /// **Recovery**: Attempt graceful terminal cleanup, then exit.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Errors encountered when reading the host's tab snapshot.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// The snapshot file passed on the command line does not exist.
    #[error("Snapshot file not found: {}", .path.display())]
    FileNotFound {
        /// Path that was attempted.
        path: PathBuf,
    },

    /// No snapshot file was given and stdin is an interactive terminal.
    ///
    /// **Recovery**: Display usage help showing both invocation modes:
    /// - `tabjump tabs.json` (file mode)
    /// - `bridge --dump-tabs | tabjump` (stdin mode)
    #[error("No tab snapshot: provide a file path or pipe JSON to stdin")]
    NoInput,

    /// The snapshot is not a JSON array of tab records.
    #[error("Invalid tab snapshot: {0}")]
    Parse(#[from] serde_json::Error),

    /// Generic I/O error reading the snapshot.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors returned by a [`TabRegistry`](crate::host::TabRegistry) command.
#[derive(Debug, Error)]
pub enum HostError {
    /// The tab is no longer open in the host (closed by another actor).
    ///
    /// **Recovery**: Drop the local entry and reconcile the selection. Never shown
    /// to the user.
    #[error("Tab {id} is no longer open")]
    StaleReference {
        /// Identifier the host did not recognize.
        id: TabId,
    },

    /// Writing the command journal failed.
    #[error("Failed to write command journal: {0}")]
    Journal(#[from] std::io::Error),

    /// Serializing a journaled command failed.
    #[error("Failed to encode host command: {0}")]
    Encode(#[from] serde_json::Error),
}

impl HostError {
    /// Whether this error means the targeted tab no longer exists.
    pub fn is_stale_reference(&self) -> bool {
        matches!(self, Self::StaleReference { .. })
    }
}
