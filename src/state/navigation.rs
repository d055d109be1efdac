//! Navigation controller.
//!
//! A single dispatcher turns input events into cursor operations and host
//! commands. Events carry the target entry id (or the content row under the
//! pointer); the dispatcher looks the entry up itself, so no per-row
//! callbacks exist.

use crate::host::TabRegistry;
use crate::model::{HostError, TabId};
use crate::state::filter::FilterEdit;
use crate::state::{Direction, PopupState};
use tracing::{debug, info, warn};

/// Input the popup reacts to.
///
/// Pointer rows are lines of the content area, counted from its top; they
/// may be negative or past the end while a drag leaves the area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupEvent {
    /// Keyboard previous/next.
    Move(Direction),
    /// Enter: switch to the selected tab.
    Activate,
    /// Click on an entry.
    ActivateEntry(TabId),
    /// Secondary click on an entry.
    CloseEntry(TabId),
    /// Escape: close the popup, leave every tab alone.
    Dismiss,
    /// Raw pointer movement with no button held.
    PointerMoved,
    /// Pointer is over an entry.
    Hover(TabId),
    /// Primary button pressed.
    PointerDown { row: i32 },
    /// Pointer moved with the primary button held.
    PointerDrag { row: i32 },
    /// Primary button released.
    PointerUp { row: i32 },
    /// Mouse wheel, in rows.
    Scroll(isize),
    /// Search box edit.
    Filter(FilterEdit),
    /// The search box clear control.
    ClearFilter,
    /// Content area height changed.
    Resize { height: u16 },
}

/// What the shell should do after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Close,
}

/// Apply one event to `state`, issuing host commands through `registry`.
pub fn dispatch(
    state: &mut PopupState,
    event: PopupEvent,
    registry: &mut dyn TabRegistry,
) -> Outcome {
    match event {
        PopupEvent::Move(direction) => {
            state.move_selection(direction);
            Outcome::Continue
        }
        PopupEvent::Activate => match state.selected_entry().map(|entry| entry.id()) {
            Some(id) => activate(state, id, registry),
            None => Outcome::Continue,
        },
        PopupEvent::ActivateEntry(id) => activate(state, id, registry),
        PopupEvent::CloseEntry(id) => {
            close(state, id, registry);
            Outcome::Continue
        }
        PopupEvent::Dismiss => {
            debug!("Popup dismissed");
            Outcome::Close
        }
        PopupEvent::PointerMoved => {
            state.selection_mut().unlock();
            Outcome::Continue
        }
        PopupEvent::Hover(id) => {
            state.set_selected(id);
            Outcome::Continue
        }
        PopupEvent::PointerDown { row } => {
            let target = state.entry_at_row(row);
            state.drag.press(row, target);
            Outcome::Continue
        }
        PopupEvent::PointerDrag { row } => {
            if let Some(moved) = state.drag.drag(row) {
                // Content follows the pointer: dragging down reveals rows above.
                state.scroll_by(-(moved as isize));
            }
            Outcome::Continue
        }
        PopupEvent::PointerUp { row } => {
            let target = state.entry_at_row(row);
            match state.drag.release(target) {
                Some(id) => activate(state, id, registry),
                None => Outcome::Continue,
            }
        }
        PopupEvent::Scroll(delta) => {
            state.scroll_by(delta);
            Outcome::Continue
        }
        PopupEvent::Filter(edit) => {
            state.edit_filter(edit);
            Outcome::Continue
        }
        PopupEvent::ClearFilter => {
            state.clear_filter();
            Outcome::Continue
        }
        PopupEvent::Resize { height } => {
            state.set_viewport_height(usize::from(height));
            Outcome::Continue
        }
    }
}

fn activate(state: &mut PopupState, id: TabId, registry: &mut dyn TabRegistry) -> Outcome {
    match registry.activate_tab(id) {
        Ok(()) => {
            info!(tab_id = %id, "Activated tab");
            Outcome::Close
        }
        Err(err) => {
            recover(state, id, &err);
            Outcome::Continue
        }
    }
}

fn close(state: &mut PopupState, id: TabId, registry: &mut dyn TabRegistry) {
    if state.remove_entry(id).is_none() {
        return;
    }
    match registry.close_tab(id) {
        Ok(()) => info!(tab_id = %id, "Closed tab"),
        Err(err) => recover(state, id, &err),
    }
}

/// Host failures never reach the user. A stale tab is dropped locally.
fn recover(state: &mut PopupState, id: TabId, err: &HostError) {
    if err.is_stale_reference() {
        debug!(tab_id = %id, "Host no longer has tab; dropping entry");
        state.remove_entry(id);
    } else {
        warn!(tab_id = %id, error = %err, "Host command failed");
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "navigation_tests.rs"]
mod tests;
