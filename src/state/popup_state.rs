//! Popup state: the context object every handler receives.
//!
//! PopupState owns the entry collection together with everything derived
//! from it (selection, search box, viewport, drag gesture). Mutations that
//! change the visible set go through methods here so the cursor is always
//! reconciled in the same step.

use crate::model::{Entry, HostTab, TabId};
use crate::state::filter::{apply_filter, FilterEdit, FilterInput};
use crate::state::render::{project, RowView};
use crate::state::{Direction, DragTracker, EntryCollection, Selection, Viewport};
use tracing::debug;

/// Application state. Pure data, no I/O.
#[derive(Debug, Clone)]
pub struct PopupState {
    collection: EntryCollection,
    selection: Selection,
    filter: FilterInput,
    viewport: Viewport,
    pub(crate) drag: DragTracker,
}

impl PopupState {
    /// Build the initial state for a freshly opened popup.
    ///
    /// The tab the host reports as active is centered and the lock taken;
    /// without one, the first entry is selected.
    pub fn new(collection: EntryCollection, viewport_height: usize) -> Self {
        let mut state = Self {
            collection,
            selection: Selection::new(),
            filter: FilterInput::new(),
            viewport: Viewport::new(viewport_height),
            drag: DragTracker::new(),
        };

        let active = state
            .collection
            .active_index()
            .and_then(|index| state.collection.get(index))
            .map(Entry::id);

        match active {
            Some(id) => {
                state.selection.center_on(&state.collection, id);
            }
            None => state.selection.select_first_visible(&state.collection),
        }
        state.reveal_selection();
        state
    }

    pub fn from_snapshot(tabs: Vec<HostTab>, viewport_height: usize) -> Self {
        Self::new(EntryCollection::build_from_snapshot(tabs), viewport_height)
    }

    pub fn collection(&self) -> &EntryCollection {
        &self.collection
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub(crate) fn selection_mut(&mut self) -> &mut Selection {
        &mut self.selection
    }

    pub fn filter(&self) -> &FilterInput {
        &self.filter
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn drag(&self) -> &DragTracker {
        &self.drag
    }

    pub fn selected_entry(&self) -> Option<&Entry> {
        self.selection.selected(&self.collection)
    }

    pub fn visible_row_count(&self) -> usize {
        self.collection.visible_count()
    }

    /// Rows for the renderer, recomputed from current state.
    pub fn rows(&self) -> Vec<RowView<'_>> {
        project(&self.collection, &self.selection)
    }

    /// Entry drawn at line `y` of the content area.
    pub fn entry_at_row(&self, y: i32) -> Option<TabId> {
        let ordinal = self.viewport.row_at(y, self.visible_row_count())?;
        let index = self.collection.nth_visible(ordinal)?;
        self.collection.get(index).map(Entry::id)
    }

    /// Select the entry with `id` (hover). Suppressed while locked.
    pub fn set_selected(&mut self, id: TabId) -> bool {
        self.selection.set_selected(&self.collection, id)
    }

    /// Keyboard navigation: step, take the lock, keep the cursor in view.
    pub fn move_selection(&mut self, direction: Direction) {
        self.selection.move_selection(&self.collection, direction);
        self.reveal_selection();
    }

    /// Replace the search text and re-filter.
    pub fn set_query(&mut self, text: &str) {
        self.filter = FilterInput::with_text(text);
        self.refilter();
    }

    /// Apply a search box edit; re-filters only if the text changed.
    pub fn edit_filter(&mut self, edit: FilterEdit) {
        if self.filter.apply(edit) {
            self.refilter();
        }
    }

    /// Empty the search box and show every entry.
    pub fn clear_filter(&mut self) {
        if self.filter.clear() {
            self.refilter();
        }
    }

    fn refilter(&mut self) {
        let visible = apply_filter(&mut self.collection, &self.filter.query());
        self.selection.reconcile(&self.collection);
        debug!(
            query = self.filter.text(),
            visible,
            cursor = ?self.selection.cursor(),
            "Applied filter"
        );
        self.reveal_selection();
    }

    /// Remove an entry and repair the cursor and viewport.
    pub fn remove_entry(&mut self, id: TabId) -> Option<Entry> {
        let (index, entry) = self.collection.remove(id)?;
        self.selection.after_removal(&self.collection, index);
        let rows = self.visible_row_count();
        self.viewport.scroll_by(0, rows);
        debug!(tab_id = %id, remaining = self.collection.len(), "Removed entry");
        Some(entry)
    }

    /// Scroll the selection into view; the first visible entry scrolls to the
    /// very top so the search box shows.
    pub fn reveal_selection(&mut self) {
        let rows = self.visible_row_count();
        let ordinal = self
            .selection
            .cursor()
            .and_then(|index| self.collection.visible_ordinal(index));

        match ordinal {
            Some(0) => self.viewport.scroll_to_top(),
            Some(ordinal) => self.viewport.scroll_into_view(ordinal, rows),
            None => self.viewport.scroll_by(0, rows),
        }
    }

    pub fn scroll_by(&mut self, delta: isize) {
        let rows = self.visible_row_count();
        self.viewport.scroll_by(delta, rows);
    }

    pub fn set_viewport_height(&mut self, height: usize) {
        let rows = self.visible_row_count();
        self.viewport.set_height(height, rows);
    }

    /// Whether the cursor invariant holds: no cursor, or a visible entry.
    pub fn cursor_is_consistent(&self) -> bool {
        match self.selection.cursor() {
            None => true,
            Some(index) => self.collection.get(index).is_some_and(Entry::is_visible),
        }
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "popup_state_tests.rs"]
mod tests;
