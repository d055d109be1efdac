//! Layout dimension constants for TUI rendering.

/// Height of the key help line under the list.
pub const HELP_LINE_HEIGHT: u16 = 1;

/// Width of the search box clear control, `[x]`.
pub const CLEAR_CONTROL_WIDTH: u16 = 3;

/// Rows scrolled per mouse wheel notch.
pub const MOUSE_SCROLL_ROWS: isize = 3;

/// Glyph drawn for a tab with a favicon.
pub const ICON_GLYPH: &str = "■";

/// Glyph drawn for a tab without a favicon.
pub const BLANK_ICON_GLYPH: &str = "□";
