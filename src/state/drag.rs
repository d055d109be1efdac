//! Drag-to-scroll gesture detection.
//!
//! A press anchors a gesture. Any pointer motion while the button is held
//! turns it into a drag that scrolls the list; a drag never ends in a click,
//! wherever the pointer is released.

use crate::model::TabId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragPhase {
    /// Button up.
    #[default]
    Idle,
    /// Button down, pointer has not moved yet.
    Pressed { row: i32, target: Option<TabId> },
    /// Button down and the pointer has moved: the user is scrolling.
    Dragging { row: i32 },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DragTracker {
    phase: DragPhase,
}

impl DragTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, DragPhase::Dragging { .. })
    }

    /// Button pressed at `row` over `target` (if the row shows an entry).
    pub fn press(&mut self, row: i32, target: Option<TabId>) {
        self.phase = DragPhase::Pressed { row, target };
    }

    /// Pointer moved to `row` with the button held.
    ///
    /// Returns the pointer displacement in rows since the last event, or
    /// `None` when no gesture is in progress.
    pub fn drag(&mut self, row: i32) -> Option<i32> {
        let last = match self.phase {
            DragPhase::Idle => return None,
            DragPhase::Pressed { row, .. } | DragPhase::Dragging { row } => row,
        };
        self.phase = DragPhase::Dragging { row };
        Some(row - last)
    }

    /// Button released over `target`.
    ///
    /// Returns the entry to activate: only a press and release on the same
    /// entry with no motion in between counts as a click.
    pub fn release(&mut self, target: Option<TabId>) -> Option<TabId> {
        let phase = std::mem::take(&mut self.phase);
        match phase {
            DragPhase::Pressed {
                target: Some(pressed),
                ..
            } if target == Some(pressed) => Some(pressed),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_and_release_on_same_entry_is_click() {
        let mut drag = DragTracker::new();

        drag.press(5, Some(TabId::new(1)));

        assert_eq!(drag.release(Some(TabId::new(1))), Some(TabId::new(1)));
        assert_eq!(drag.phase(), DragPhase::Idle);
    }

    #[test]
    fn release_on_other_entry_is_not_click() {
        let mut drag = DragTracker::new();
        drag.press(5, Some(TabId::new(1)));

        assert_eq!(drag.release(Some(TabId::new(2))), None);
    }

    #[test]
    fn press_outside_entries_is_not_click() {
        let mut drag = DragTracker::new();
        drag.press(0, None);

        assert_eq!(drag.release(None), None);
    }

    #[test]
    fn drag_reports_displacement_since_last_event() {
        let mut drag = DragTracker::new();
        drag.press(10, Some(TabId::new(1)));

        assert_eq!(drag.drag(8), Some(-2));
        assert_eq!(drag.drag(11), Some(3));
        assert!(drag.is_dragging());
    }

    #[test]
    fn drag_end_never_activates() {
        let mut drag = DragTracker::new();
        drag.press(10, Some(TabId::new(1)));
        drag.drag(12);
        drag.drag(10);

        assert_eq!(
            drag.release(Some(TabId::new(1))),
            None,
            "returning to the pressed row after dragging is still a drag"
        );
        assert!(!drag.is_dragging());
    }

    #[test]
    fn drag_without_press_is_ignored() {
        let mut drag = DragTracker::new();

        assert_eq!(drag.drag(4), None);
        assert_eq!(drag.phase(), DragPhase::Idle);
    }

    #[test]
    fn release_without_press_is_ignored() {
        let mut drag = DragTracker::new();
        assert_eq!(drag.release(Some(TabId::new(1))), None);
    }
}
