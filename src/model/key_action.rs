//! Domain-level keyboard actions independent of key bindings.

/// Domain-level actions that can be mapped to configurable key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// crossterm::event::KeyEvent to KeyAction is handled by KeyBindings.
/// Keys without a binding fall through to the search box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    /// Move the selection to the previous visible tab. Default: ←/↑
    SelectPrevious,
    /// Move the selection to the next visible tab. Default: →/↓
    SelectNext,
    /// Switch to the selected tab and close the popup. Default: Enter
    Activate,
    /// Close the popup without touching any tab. Default: Esc/Ctrl+c
    Dismiss,
    /// Empty the search box and show every tab again. Default: Ctrl+u
    ClearFilter,
}
