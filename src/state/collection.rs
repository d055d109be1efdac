//! Ordered collection of entries built from the host snapshot.

use crate::model::{Entry, HostTab, TabId};
use std::collections::HashSet;
use tracing::{debug, warn};

/// Entries in the host's native tab order.
///
/// Built once when the popup opens and never re-queried. Entries leave the
/// collection only when the user closes them through the popup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryCollection {
    entries: Vec<Entry>,
}

impl EntryCollection {
    /// Map each host tab to an entry, preserving host order.
    ///
    /// A repeated id keeps its first occurrence so no two entries share an id.
    /// Zero tabs yields an empty, displayable collection.
    pub fn build_from_snapshot(tabs: Vec<HostTab>) -> Self {
        let mut seen = HashSet::with_capacity(tabs.len());
        let mut entries = Vec::with_capacity(tabs.len());

        for tab in tabs {
            if !seen.insert(tab.id) {
                warn!(tab_id = %tab.id, "Dropping duplicate tab id from snapshot");
                continue;
            }
            entries.push(Entry::from_host(tab));
        }

        debug!(count = entries.len(), "Built entry collection from snapshot");
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Entry> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut Entry> {
        self.entries.iter_mut()
    }

    /// Index of the entry with the given id.
    pub fn position_of(&self, id: TabId) -> Option<usize> {
        self.entries.iter().position(|entry| entry.id() == id)
    }

    /// Remove the entry with the given id, returning its former index.
    pub fn remove(&mut self, id: TabId) -> Option<(usize, Entry)> {
        let index = self.position_of(id)?;
        Some((index, self.entries.remove(index)))
    }

    /// Indices of visible entries in collection order.
    pub fn visible_indices(&self) -> Vec<usize> {
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.is_visible())
            .map(|(index, _)| index)
            .collect()
    }

    pub fn visible_count(&self) -> usize {
        self.entries.iter().filter(|entry| entry.is_visible()).count()
    }

    pub fn first_visible(&self) -> Option<usize> {
        self.entries.iter().position(Entry::is_visible)
    }

    /// Position of `index` within the visible sub-sequence.
    pub fn visible_ordinal(&self, index: usize) -> Option<usize> {
        if !self.entries.get(index)?.is_visible() {
            return None;
        }
        Some(self.entries[..index].iter().filter(|e| e.is_visible()).count())
    }

    /// Collection index of the `ordinal`-th visible entry.
    pub fn nth_visible(&self, ordinal: usize) -> Option<usize> {
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.is_visible())
            .nth(ordinal)
            .map(|(index, _)| index)
    }

    /// Index of the tab the host reported as focused, if any.
    pub fn active_index(&self) -> Option<usize> {
        self.entries.iter().position(Entry::is_active)
    }
}
