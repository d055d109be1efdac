//! Filter engine and search box input.
//!
//! Filtering toggles entry visibility in place; it never reorders or drops
//! entries, so clearing the query restores the original list exactly.

use crate::model::Entry;
use crate::state::EntryCollection;

// ===== FilterQuery =====

/// Text typed into the search box.
///
/// Any string is a valid query. Blank (empty or whitespace-only) queries
/// match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterQuery(String);

impl FilterQuery {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// Lowercased needle, or `None` when the query matches everything.
    ///
    /// Surrounding whitespace is part of the needle, so a trailing space
    /// narrows the match to whole words.
    pub fn needle(&self) -> Option<String> {
        if self.is_blank() {
            None
        } else {
            Some(self.0.to_lowercase())
        }
    }
}

// ===== Matching =====

/// Case-insensitive substring match against title or URL.
///
/// `needle` must already be lowercased.
pub fn entry_matches(entry: &Entry, needle: &str) -> bool {
    entry.title().to_lowercase().contains(needle) || entry.url().to_lowercase().contains(needle)
}

/// Recompute visibility of every entry for `query`.
///
/// Total and idempotent: each entry receives exactly one verdict per call,
/// derived only from the query and the entry. Returns the visible count.
///
/// The caller owns the selection and must reconcile it afterwards.
pub fn apply_filter(collection: &mut EntryCollection, query: &FilterQuery) -> usize {
    let needle = query.needle();
    let mut visible = 0;

    for entry in collection.iter_mut() {
        let verdict = match &needle {
            None => true,
            Some(needle) => entry_matches(entry, needle),
        };
        entry.set_visible(verdict);
        if verdict {
            visible += 1;
        }
    }

    visible
}

// ===== FilterInput =====

/// Edit applied to the search box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterEdit {
    Insert(char),
    Backspace,
    Delete,
    Home,
    End,
}

/// Search box contents with a caret.
///
/// `cursor` counts characters, not bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterInput {
    text: String,
    cursor: usize,
}

impl FilterInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Input prefilled with `text`, caret at the end.
    pub fn with_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.chars().count();
        Self { text, cursor }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn query(&self) -> FilterQuery {
        FilterQuery::new(self.text.clone())
    }

    /// Apply an edit. Returns true if the text changed.
    pub fn apply(&mut self, edit: FilterEdit) -> bool {
        match edit {
            FilterEdit::Insert(c) => {
                let at = self.byte_offset(self.cursor);
                self.text.insert(at, c);
                self.cursor += 1;
                true
            }
            FilterEdit::Backspace => {
                if self.cursor == 0 {
                    return false;
                }
                let at = self.byte_offset(self.cursor - 1);
                self.text.remove(at);
                self.cursor -= 1;
                true
            }
            FilterEdit::Delete => {
                if self.cursor >= self.text.chars().count() {
                    return false;
                }
                let at = self.byte_offset(self.cursor);
                self.text.remove(at);
                true
            }
            FilterEdit::Home => {
                self.cursor = 0;
                false
            }
            FilterEdit::End => {
                self.cursor = self.text.chars().count();
                false
            }
        }
    }

    /// Empty the box. Returns true if there was anything to clear.
    pub fn clear(&mut self) -> bool {
        let changed = !self.text.is_empty();
        self.text.clear();
        self.cursor = 0;
        changed
    }

    fn byte_offset(&self, char_index: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_index)
            .map(|(offset, _)| offset)
            .unwrap_or(self.text.len())
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
