//! Popup state machine (pure).
//!
//! All state transitions are plain functions over owned data, testable
//! without a terminal. Host commands go through the `TabRegistry` trait.

pub mod collection;
pub mod drag;
pub mod filter;
pub mod navigation;
pub mod popup_state;
pub mod render;
pub mod selection;
pub mod viewport;

// Re-export for convenience
pub use collection::EntryCollection;
pub use drag::{DragPhase, DragTracker};
pub use filter::{apply_filter, FilterEdit, FilterInput, FilterQuery};
pub use navigation::{dispatch, Outcome, PopupEvent};
pub use popup_state::PopupState;
pub use render::{project, RowView};
pub use selection::{Direction, Selection};
pub use viewport::{Viewport, SCROLL_MARGIN, SEARCH_BOX_ROWS};
