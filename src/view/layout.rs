//! Popup placement and frame rendering.
//!
//! The popup is a centered column of the terminal, `width_scale * 40`
//! columns wide, holding the scrolling content and an optional help line.

use crate::state::PopupState;
use crate::view::constants::HELP_LINE_HEIGHT;
use crate::view::styles::PopupStyles;
use crate::view::tab_list::TabList;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::Line,
    widgets::{Clear, Paragraph},
    Frame,
};

const HELP_TEXT: &str = "↑↓ select · Enter switch · right-click close tab · Esc quit";

/// Screen areas of one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PopupLayout {
    pub popup: Rect,
    /// Search box and tab rows, scrolled by the viewport.
    pub content: Rect,
    pub help: Option<Rect>,
}

impl PopupLayout {
    /// Place a `columns`-wide popup centered in `frame_area`.
    pub fn calculate(frame_area: Rect, columns: u16, show_help: bool) -> Self {
        let width = columns.min(frame_area.width);
        let popup = Rect::new(
            frame_area.x + (frame_area.width - width) / 2,
            frame_area.y,
            width,
            frame_area.height,
        );

        if !show_help || popup.height <= HELP_LINE_HEIGHT {
            return Self {
                popup,
                content: popup,
                help: None,
            };
        }

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(HELP_LINE_HEIGHT)])
            .split(popup);

        Self {
            popup,
            content: chunks[0],
            help: Some(chunks[1]),
        }
    }

    /// Whether the screen cell lies within the content columns.
    pub fn in_content_columns(&self, column: u16) -> bool {
        column >= self.content.x && column < self.content.right()
    }

    /// Content line under screen row `row`; negative above the content.
    pub fn content_row(&self, row: u16) -> i32 {
        i32::from(row) - i32::from(self.content.y)
    }
}

pub fn render_popup(
    frame: &mut Frame,
    layout: &PopupLayout,
    state: &PopupState,
    styles: &PopupStyles,
) {
    frame.render_widget(Clear, layout.popup);
    frame.render_widget(TabList::new(state, styles), layout.content);

    if let Some(help_area) = layout.help {
        let help = Paragraph::new(Line::styled(HELP_TEXT, styles.help));
        frame.render_widget(help, help_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn popup_is_centered() {
        let layout = PopupLayout::calculate(Rect::new(0, 0, 120, 30), 80, true);

        assert_eq!(layout.popup, Rect::new(20, 0, 80, 30));
    }

    #[test]
    fn popup_is_clamped_to_frame_width() {
        let layout = PopupLayout::calculate(Rect::new(0, 0, 50, 20), 80, false);

        assert_eq!(layout.popup.width, 50);
        assert_eq!(layout.popup.x, 0);
    }

    #[test]
    fn help_line_takes_bottom_row() {
        let layout = PopupLayout::calculate(Rect::new(0, 0, 80, 24), 80, true);

        assert_eq!(layout.content.height, 23);
        assert_eq!(layout.help, Some(Rect::new(0, 23, 80, 1)));
    }

    #[test]
    fn without_help_content_fills_popup() {
        let layout = PopupLayout::calculate(Rect::new(0, 0, 80, 24), 80, false);

        assert_eq!(layout.content, layout.popup);
        assert_eq!(layout.help, None);
    }

    #[test]
    fn content_row_is_relative_and_signed() {
        let layout = PopupLayout {
            popup: Rect::new(10, 2, 40, 10),
            content: Rect::new(10, 2, 40, 9),
            help: None,
        };

        assert_eq!(layout.content_row(2), 0);
        assert_eq!(layout.content_row(5), 3);
        assert_eq!(layout.content_row(0), -2);
        assert!(layout.in_content_columns(10));
        assert!(!layout.in_content_columns(50));
    }
}
