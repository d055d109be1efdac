//! Selection cursor and lock policy.
//!
//! The cursor is an index into the [`EntryCollection`] or `None`. Every
//! operation leaves it pointing at a visible entry or at nothing, so callers
//! never observe a dangling selection.
//!
//! The lock flag disambiguates intent: once the user has chosen an entry with
//! the keyboard (or the popup centered on the active tab), hover events caused
//! by the list moving under a still pointer must not steal the selection.
//! Real pointer movement clears the lock.

use crate::model::{Entry, TabId};
use crate::state::EntryCollection;
use tracing::debug;

/// Direction of a keyboard move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

/// Selected entry plus the lock flag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    cursor: Option<usize>,
    locked: bool,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collection index of the selected entry.
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn lock(&mut self) {
        self.locked = true;
    }

    pub fn unlock(&mut self) {
        self.locked = false;
    }

    pub fn selected<'a>(&self, collection: &'a EntryCollection) -> Option<&'a Entry> {
        self.cursor.and_then(|index| collection.get(index))
    }

    /// Select the entry with `id` unless the lock is held.
    ///
    /// Unknown ids and hidden entries are ignored. Returns true if the cursor
    /// now points at `id`.
    pub fn set_selected(&mut self, collection: &EntryCollection, id: TabId) -> bool {
        if self.locked {
            return false;
        }

        match collection.position_of(id) {
            Some(index) if collection.get(index).is_some_and(Entry::is_visible) => {
                self.cursor = Some(index);
                true
            }
            _ => false,
        }
    }

    /// Programmatic selection that bypasses the lock, then holds it.
    pub fn center_on(&mut self, collection: &EntryCollection, id: TabId) -> bool {
        self.locked = false;
        let selected = self.set_selected(collection, id);
        self.locked = true;
        debug!(tab_id = %id, selected, "Centered selection");
        selected
    }

    /// Point at the first visible entry, or nothing.
    pub fn select_first_visible(&mut self, collection: &EntryCollection) {
        self.cursor = collection.first_visible();
    }

    /// Repair the cursor after the visible set changed.
    ///
    /// A cursor on a visible entry is kept. A cursor on a hidden or missing
    /// entry, or no cursor while something is visible, moves to the first
    /// visible entry.
    pub fn reconcile(&mut self, collection: &EntryCollection) {
        let still_valid = self
            .cursor
            .and_then(|index| collection.get(index))
            .is_some_and(Entry::is_visible);

        if !still_valid {
            self.cursor = collection.first_visible();
        }
    }

    /// Move among visible entries, clamping at both ends.
    ///
    /// A selection that is not visible counts as "before the first" when
    /// moving forward and "after the last" when moving back. Holds the lock.
    pub fn move_selection(&mut self, collection: &EntryCollection, direction: Direction) {
        let visible = collection.visible_indices();
        let Some(last) = visible.len().checked_sub(1) else {
            self.cursor = None;
            return;
        };

        let position = self
            .cursor
            .and_then(|current| visible.iter().position(|&index| index == current));

        let target = match (direction, position) {
            (Direction::Next, Some(p)) => (p + 1).min(last),
            (Direction::Next, None) => 0,
            (Direction::Previous, Some(p)) => p.saturating_sub(1),
            (Direction::Previous, None) => last,
        };

        self.cursor = Some(visible[target]);
        self.locked = true;
    }

    /// Adjust the cursor after the entry at `removed` left the collection.
    ///
    /// Must be called with the cursor as it was before the removal. If the
    /// removed entry was selected, the next visible entry takes its place,
    /// falling back to the previous visible one.
    pub fn after_removal(&mut self, collection: &EntryCollection, removed: usize) {
        self.cursor = match self.cursor {
            Some(current) if current == removed => (removed..collection.len())
                .find(|&index| collection.get(index).is_some_and(Entry::is_visible))
                .or_else(|| {
                    (0..removed)
                        .rev()
                        .find(|&index| collection.get(index).is_some_and(Entry::is_visible))
                }),
            Some(current) if current > removed => Some(current - 1),
            other => other,
        };
        self.reconcile(collection);
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "selection_tests.rs"]
mod tests;
