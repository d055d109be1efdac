//! Search box widget: bordered input line with a text cursor and a clear
//! control.

use crate::state::FilterInput;
use crate::view::constants::CLEAR_CONTROL_WIDTH;
use crate::view::styles::PopupStyles;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

pub const CLEAR_CONTROL_LABEL: &str = "[x]";

/// Where the clear control sits for a search box drawn at `area`.
///
/// `None` while the box is empty or too narrow to fit it.
pub fn clear_control_area(area: Rect, has_text: bool) -> Option<Rect> {
    if !has_text || area.width < CLEAR_CONTROL_WIDTH + 4 || area.height < 3 {
        return None;
    }
    Some(Rect::new(
        area.right() - 1 - CLEAR_CONTROL_WIDTH,
        area.y + 1,
        CLEAR_CONTROL_WIDTH,
        1,
    ))
}

pub struct SearchBox<'a> {
    input: &'a FilterInput,
    styles: &'a PopupStyles,
}

impl<'a> SearchBox<'a> {
    pub fn new(input: &'a FilterInput, styles: &'a PopupStyles) -> Self {
        Self { input, styles }
    }
}

impl Widget for SearchBox<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Search ")
            .border_style(self.styles.search_border);
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let clear = clear_control_area(area, !self.input.is_empty());
        let text_width = match clear {
            // One column of padding before the control
            Some(control) => control.x.saturating_sub(inner.x + 1),
            None => inner.width,
        };
        let text_area = Rect::new(inner.x, inner.y, text_width, 1);

        let text = self.input.text();
        let cursor = self.input.cursor();
        let before: String = text.chars().take(cursor).collect();
        let mut rest = text.chars().skip(cursor);
        let under_cursor = rest.next().map(String::from).unwrap_or_else(|| " ".to_string());
        let after: String = rest.collect();

        // Keep the cursor on screen when the text is wider than the box
        let before_width = before.width() as u16;
        let scroll = before_width.saturating_sub(text_width.saturating_sub(1));

        let line = Line::from(vec![
            Span::raw(before),
            Span::styled(under_cursor, self.styles.search_cursor),
            Span::raw(after),
        ]);
        Paragraph::new(line)
            .scroll((0, scroll))
            .render(text_area, buf);

        if let Some(control) = clear {
            Line::styled(CLEAR_CONTROL_LABEL, self.styles.clear_control).render(control, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::FilterEdit;
    use crate::view::styles::ColorConfig;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn render(input: &FilterInput, width: u16) -> Vec<String> {
        let styles = PopupStyles::with_color_config(ColorConfig::enabled());
        let mut terminal = Terminal::new(TestBackend::new(width, 3)).unwrap();
        terminal
            .draw(|frame| frame.render_widget(SearchBox::new(input, &styles), frame.area()))
            .unwrap();

        let buffer = terminal.backend().buffer();
        (0..3)
            .map(|y| {
                (0..width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect()
    }

    #[test]
    fn empty_box_has_no_clear_control() {
        let lines = render(&FilterInput::new(), 20);

        assert!(lines[0].contains("Search"));
        assert!(!lines[1].contains(CLEAR_CONTROL_LABEL));
    }

    #[test]
    fn text_and_clear_control_are_drawn() {
        let lines = render(&FilterInput::with_text("mail"), 20);

        assert!(lines[1].starts_with("│mail"));
        assert!(lines[1].ends_with("[x]│"));
    }

    #[test]
    fn clear_control_area_matches_drawn_label() {
        let area = Rect::new(0, 0, 20, 3);

        let control = clear_control_area(area, true).unwrap();

        assert_eq!(control, Rect::new(16, 1, 3, 1));
        assert_eq!(clear_control_area(area, false), None);
    }

    #[test]
    fn long_text_scrolls_to_keep_cursor_visible() {
        let mut input = FilterInput::new();
        for c in "abcdefghijklmnopqrstuvwxyz".chars() {
            input.apply(FilterEdit::Insert(c));
        }

        let lines = render(&input, 16);

        assert!(lines[1].contains('z'), "end of text visible: {:?}", lines[1]);
        assert!(!lines[1].contains('a'));
    }
}
