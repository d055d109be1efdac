//! Scrolling popup content: the search box followed by one row per visible
//! tab.
//!
//! The search box scrolls with the list, so the widget paints the slice of
//! content rows the viewport currently shows.

use crate::state::{PopupState, RowView, SEARCH_BOX_ROWS};
use crate::view::constants::{BLANK_ICON_GLYPH, ICON_GLYPH};
use crate::view::search_box::SearchBox;
use crate::view::styles::PopupStyles;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

pub struct TabList<'a> {
    state: &'a PopupState,
    styles: &'a PopupStyles,
}

impl<'a> TabList<'a> {
    pub fn new(state: &'a PopupState, styles: &'a PopupStyles) -> Self {
        Self { state, styles }
    }

    fn row_line(&self, row: &RowView<'_>) -> Line<'static> {
        let (glyph, glyph_style) = if row.icon.is_blank() {
            (BLANK_ICON_GLYPH, self.styles.blank_icon)
        } else {
            (ICON_GLYPH, self.styles.icon)
        };
        Line::from(vec![
            Span::raw(" "),
            Span::styled(glyph, glyph_style),
            Span::raw(" "),
            Span::styled(row.title.to_string(), self.styles.title),
        ])
    }

    fn placeholder(&self) -> Option<Line<'static>> {
        if self.state.visible_row_count() > 0 {
            return None;
        }
        let text = if self.state.collection().is_empty() {
            " No open tabs"
        } else {
            " No matching tabs"
        };
        Some(Line::styled(text, self.styles.placeholder))
    }
}

impl Widget for TabList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let header_rows = SEARCH_BOX_ROWS as u16;
        let offset = self.state.viewport().offset();

        // Header goes to a scratch buffer so a partly scrolled box is clipped
        let header_area = Rect::new(0, 0, area.width, header_rows);
        let mut header = Buffer::empty(header_area);
        SearchBox::new(self.state.filter(), self.styles).render(header_area, &mut header);

        let rows: Vec<RowView<'_>> = self
            .state
            .rows()
            .into_iter()
            .filter(|row| row.visible)
            .collect();
        let placeholder = self.placeholder();

        for y in 0..area.height {
            let content_row = offset + usize::from(y);
            let line_area = Rect::new(area.x, area.y + y, area.width, 1);

            if content_row < SEARCH_BOX_ROWS {
                copy_row(&header, content_row as u16, buf, line_area);
                continue;
            }

            let ordinal = content_row - SEARCH_BOX_ROWS;
            if let Some(row) = rows.get(ordinal) {
                if row.selected {
                    buf.set_style(line_area, self.styles.selected);
                }
                let line = self.row_line(row);
                let line = if row.selected {
                    line.patch_style(self.styles.selected)
                } else {
                    line
                };
                line.render(line_area, buf);
            } else if ordinal == 0 {
                if let Some(placeholder) = &placeholder {
                    placeholder.clone().render(line_area, buf);
                }
            }
        }
    }
}

fn copy_row(source: &Buffer, source_y: u16, target: &mut Buffer, line_area: Rect) {
    for dx in 0..line_area.width {
        let Some(cell) = source.cell((dx, source_y)) else {
            continue;
        };
        if let Some(slot) = target.cell_mut((line_area.x + dx, line_area.y)) {
            *slot = cell.clone();
        }
    }
}
