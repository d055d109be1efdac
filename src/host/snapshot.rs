//! JSON snapshot registry.
//!
//! Reads the host's tab list once (file or piped stdin), then validates
//! commands against the set of tabs still open and journals the accepted
//! ones.

use super::{CommandAction, HostCommand, TabRegistry};
use crate::model::{HostError, HostTab, SnapshotError, TabId};
use std::collections::HashSet;
use std::io::{IsTerminal, Read, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Registry backed by a JSON array of tab records.
#[derive(Debug, Clone, Default)]
pub struct SnapshotRegistry {
    tabs: Vec<HostTab>,
    open: HashSet<TabId>,
    journal: Vec<HostCommand>,
}

impl SnapshotRegistry {
    pub fn new(tabs: Vec<HostTab>) -> Self {
        let open = tabs.iter().map(|tab| tab.id).collect();
        Self {
            tabs,
            open,
            journal: Vec::new(),
        }
    }

    /// Parse a snapshot from any reader.
    ///
    /// # Errors
    ///
    /// Returns `SnapshotError::Parse` if the input is not a JSON array of tabs.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, SnapshotError> {
        let tabs: Vec<HostTab> = serde_json::from_reader(reader)?;
        Ok(Self::new(tabs))
    }

    /// Load a snapshot file.
    ///
    /// # Errors
    ///
    /// Returns `SnapshotError::FileNotFound` if the file does not exist,
    /// `SnapshotError::Io` or `SnapshotError::Parse` otherwise.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SnapshotError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(SnapshotError::FileNotFound {
                path: path.to_path_buf(),
            });
        }

        let file = std::fs::File::open(path)?;
        let registry = Self::from_reader(std::io::BufReader::new(file))?;
        info!(path = %path.display(), tabs = registry.tabs.len(), "Loaded tab snapshot");
        Ok(registry)
    }

    /// Read the snapshot from piped stdin.
    ///
    /// # Errors
    ///
    /// Returns `SnapshotError::NoInput` if stdin is an interactive terminal.
    pub fn from_stdin() -> Result<Self, SnapshotError> {
        let stdin = std::io::stdin();
        if stdin.is_terminal() {
            return Err(SnapshotError::NoInput);
        }
        let registry = Self::from_reader(stdin.lock())?;
        info!(tabs = registry.tabs.len(), "Loaded tab snapshot from stdin");
        Ok(registry)
    }

    /// Load from `path` if given, else from piped stdin.
    pub fn load(path: Option<PathBuf>) -> Result<Self, SnapshotError> {
        match path {
            Some(path) => Self::from_path(path),
            None => Self::from_stdin(),
        }
    }

    /// Commands accepted so far, oldest first.
    pub fn journal(&self) -> &[HostCommand] {
        &self.journal
    }

    /// Write the journal as JSON lines.
    ///
    /// # Errors
    ///
    /// Returns `HostError::Journal` on write failure.
    pub fn write_journal<W: Write>(&self, mut writer: W) -> Result<(), HostError> {
        for command in &self.journal {
            serde_json::to_writer(&mut writer, command)?;
            writer.write_all(b"\n")?;
        }
        writer.flush()?;
        Ok(())
    }

    fn ensure_open(&self, id: TabId) -> Result<(), HostError> {
        if self.open.contains(&id) {
            Ok(())
        } else {
            Err(HostError::StaleReference { id })
        }
    }

    fn record(&mut self, action: CommandAction, id: TabId) {
        debug!(tab_id = %id, ?action, "Journaled host command");
        self.journal.push(HostCommand::new(action, id));
    }
}

impl TabRegistry for SnapshotRegistry {
    fn query_all_tabs(&mut self) -> Result<Vec<HostTab>, HostError> {
        Ok(self
            .tabs
            .iter()
            .filter(|tab| self.open.contains(&tab.id))
            .cloned()
            .collect())
    }

    fn activate_tab(&mut self, id: TabId) -> Result<(), HostError> {
        self.ensure_open(id)?;
        self.record(CommandAction::Activate, id);
        Ok(())
    }

    fn close_tab(&mut self, id: TabId) -> Result<(), HostError> {
        self.ensure_open(id)?;
        self.open.remove(&id);
        self.record(CommandAction::Close, id);
        Ok(())
    }
}
