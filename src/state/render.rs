//! Pure projection of popup state into paintable rows.
//!
//! The projection is recomputed from scratch for every frame, so the
//! highlighted row can never drift from the cursor.

use crate::model::{IconRef, TabId};
use crate::state::{EntryCollection, Selection};

/// What the renderer needs to paint one entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView<'a> {
    pub id: TabId,
    pub title: &'a str,
    pub icon: &'a IconRef,
    pub visible: bool,
    pub selected: bool,
}

/// One row per entry in collection order, hidden ones included.
///
/// Exactly the entry at the cursor is marked selected.
pub fn project<'a>(collection: &'a EntryCollection, selection: &Selection) -> Vec<RowView<'a>> {
    let cursor = selection.cursor();
    collection
        .iter()
        .enumerate()
        .map(|(index, entry)| RowView {
            id: entry.id(),
            title: entry.title(),
            icon: entry.icon(),
            visible: entry.is_visible(),
            selected: cursor == Some(index),
        })
        .collect()
}
