//! Scroll position of the popup content.
//!
//! Content is the search box header followed by one row per visible entry.
//! Offsets and rows are in content coordinates; row 0 is the top border of
//! the search box.

/// Rows occupied by the search box (border, input line, border).
pub const SEARCH_BOX_ROWS: usize = 3;

/// Rows kept between the selection and the viewport edge when revealing it.
pub const SCROLL_MARGIN: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    offset: usize,
    height: usize,
    header_rows: usize,
}

impl Viewport {
    pub fn new(height: usize) -> Self {
        Self::with_header(height, SEARCH_BOX_ROWS)
    }

    pub fn with_header(height: usize, header_rows: usize) -> Self {
        Self {
            offset: 0,
            height,
            header_rows,
        }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn header_rows(&self) -> usize {
        self.header_rows
    }

    /// Total content rows for `row_count` visible entries.
    pub fn content_len(&self, row_count: usize) -> usize {
        self.header_rows + row_count
    }

    fn max_offset(&self, row_count: usize) -> usize {
        self.content_len(row_count).saturating_sub(self.height)
    }

    pub fn set_height(&mut self, height: usize, row_count: usize) {
        self.height = height;
        self.clamp(row_count);
    }

    pub fn scroll_to_top(&mut self) {
        self.offset = 0;
    }

    /// Scroll by `delta` rows (negative scrolls up), clamped to the content.
    pub fn scroll_by(&mut self, delta: isize, row_count: usize) {
        self.offset = self.offset.saturating_add_signed(delta);
        self.clamp(row_count);
    }

    /// Bring the visible entry at `ordinal` into view with [`SCROLL_MARGIN`]
    /// rows of context where the content allows it.
    pub fn scroll_into_view(&mut self, ordinal: usize, row_count: usize) {
        let content_len = self.content_len(row_count);
        let row = self.header_rows + ordinal;
        let margin = SCROLL_MARGIN.min(self.height.saturating_sub(1) / 2);

        let top = row.saturating_sub(margin);
        let bottom = (row + margin + 1).min(content_len);

        if top < self.offset {
            self.offset = top;
        } else if bottom > self.offset + self.height {
            self.offset = bottom.saturating_sub(self.height);
        }
        self.clamp(row_count);
    }

    /// Ordinal of the visible entry drawn at screen line `y` of the content
    /// area, if that line shows an entry row.
    pub fn row_at(&self, y: i32, row_count: usize) -> Option<usize> {
        let y = usize::try_from(y).ok()?;
        if y >= self.height {
            return None;
        }
        let ordinal = (self.offset + y).checked_sub(self.header_rows)?;
        (ordinal < row_count).then_some(ordinal)
    }

    fn clamp(&mut self, row_count: usize) {
        self.offset = self.offset.min(self.max_offset(row_count));
    }
}
