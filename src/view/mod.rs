//! TUI rendering and terminal management (impure shell)

pub mod constants;
mod layout;
mod search_box;
mod styles;
mod tab_list;

pub use layout::{render_popup, PopupLayout};
pub use search_box::{clear_control_area, SearchBox, CLEAR_CONTROL_LABEL};
pub use styles::{ColorConfig, PopupStyles};
pub use tab_list::TabList;

use crate::config::{KeyBindings, ResolvedConfig};
use crate::host::TabRegistry;
use crate::model::{AppError, HostError, KeyAction};
use crate::state::{
    dispatch, Direction, FilterEdit, Outcome, PopupEvent, PopupState, SEARCH_BOX_ROWS,
};
use constants::MOUSE_SCROLL_ROWS;
use crossterm::{
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
        MouseEventKind,
    },
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use std::io::{self, Stderr};
use thiserror::Error;
use tracing::{debug, info};

/// Content line used for pointer events outside the popup columns.
const OUTSIDE_ROW: i32 = -1;

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),

    /// The initial tab query failed
    #[error("Host error: {0}")]
    Host(#[from] HostError),
}

impl From<TuiError> for AppError {
    fn from(err: TuiError) -> Self {
        match err {
            TuiError::Io(err) => AppError::Terminal(err),
            TuiError::Host(err) => AppError::Host(err),
        }
    }
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend, and over the
/// registry so tests can script host behavior.
pub struct TuiApp<B, R>
where
    B: ratatui::backend::Backend,
    R: TabRegistry,
{
    terminal: Terminal<B>,
    state: PopupState,
    registry: R,
    key_bindings: KeyBindings,
    config: ResolvedConfig,
    styles: PopupStyles,
    /// Layout of the last drawn frame, for mouse hit testing
    last_layout: PopupLayout,
}

impl<R: TabRegistry> TuiApp<CrosstermBackend<Stderr>, R> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen and mouse capture.
    /// The popup draws on stderr; stdout is reserved for the command journal.
    pub fn new(registry: R, config: ResolvedConfig, colors: ColorConfig) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stderr = io::stderr();
        stderr.execute(EnterAlternateScreen)?;
        stderr.execute(crossterm::event::EnableMouseCapture)?;
        let terminal = Terminal::new(CrosstermBackend::new(stderr))?;

        Self::with_terminal(terminal, registry, config, colors)
    }

    /// Run the main event loop
    ///
    /// Blocks on terminal input and returns once the popup closes (a tab was
    /// activated or the user dismissed it).
    pub fn run(&mut self) -> Result<(), TuiError> {
        self.draw()?;

        loop {
            let outcome = match event::read()? {
                Event::Key(key) => self.handle_key(key),
                Event::Mouse(mouse) => self.handle_mouse(mouse),
                Event::Resize(width, height) => self.handle_resize(width, height),
                _ => Outcome::Continue,
            };

            if outcome == Outcome::Close {
                return Ok(());
            }
            self.draw()?;
        }
    }
}

impl<B, R> TuiApp<B, R>
where
    B: ratatui::backend::Backend,
    R: TabRegistry,
{
    /// Build the popup on an already initialized terminal.
    ///
    /// Queries the registry once for the tab snapshot.
    pub fn with_terminal(
        terminal: Terminal<B>,
        mut registry: R,
        config: ResolvedConfig,
        colors: ColorConfig,
    ) -> Result<Self, TuiError> {
        let tabs = registry.query_all_tabs()?;
        info!(tabs = tabs.len(), "Opening popup");

        let size = terminal.size()?;
        let layout = PopupLayout::calculate(
            Rect::new(0, 0, size.width, size.height),
            config.popup_columns(size.width),
            config.show_help,
        );

        let mut state = PopupState::from_snapshot(tabs, usize::from(layout.content.height));
        if !config.initial_query.is_empty() {
            state.set_query(&config.initial_query);
        }

        Ok(Self {
            terminal,
            state,
            registry,
            key_bindings: KeyBindings::default(),
            config,
            styles: PopupStyles::with_color_config(colors),
            last_layout: layout,
        })
    }

    pub fn state(&self) -> &PopupState {
        &self.state
    }

    pub fn registry(&self) -> &R {
        &self.registry
    }

    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    /// Tear down the app, handing back the registry and its journal.
    pub fn into_registry(self) -> R {
        self.registry
    }

    fn dispatch(&mut self, event: PopupEvent) -> Outcome {
        dispatch(&mut self.state, event, &mut self.registry)
    }

    /// Handle a single keyboard event
    ///
    /// Bound keys drive navigation; anything else edits the search box.
    pub fn handle_key(&mut self, key: KeyEvent) -> Outcome {
        if key.kind != KeyEventKind::Press {
            return Outcome::Continue;
        }

        if let Some(action) = self.key_bindings.get(key) {
            let event = match action {
                KeyAction::SelectPrevious => PopupEvent::Move(Direction::Previous),
                KeyAction::SelectNext => PopupEvent::Move(Direction::Next),
                KeyAction::Activate => PopupEvent::Activate,
                KeyAction::Dismiss => PopupEvent::Dismiss,
                KeyAction::ClearFilter => PopupEvent::ClearFilter,
            };
            return self.dispatch(event);
        }

        let edit = match key.code {
            KeyCode::Char(ch)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                FilterEdit::Insert(ch)
            }
            KeyCode::Backspace => FilterEdit::Backspace,
            KeyCode::Delete => FilterEdit::Delete,
            KeyCode::Home => FilterEdit::Home,
            KeyCode::End => FilterEdit::End,
            _ => return Outcome::Continue,
        };
        self.dispatch(PopupEvent::Filter(edit))
    }

    /// Handle a single mouse event
    ///
    /// Coordinates are translated to content lines of the last drawn frame.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Outcome {
        let layout = self.last_layout;
        let inside = layout.in_content_columns(mouse.column);
        let row = layout.content_row(mouse.row);
        let target_row = if inside { row } else { OUTSIDE_ROW };

        match mouse.kind {
            MouseEventKind::Moved => {
                self.dispatch(PopupEvent::PointerMoved);
                match self.state.entry_at_row(target_row) {
                    Some(id) => self.dispatch(PopupEvent::Hover(id)),
                    None => Outcome::Continue,
                }
            }
            MouseEventKind::Down(MouseButton::Left) => {
                if !inside {
                    return Outcome::Continue;
                }
                if self.hits_clear_control(&layout, mouse.column, row) {
                    return self.dispatch(PopupEvent::ClearFilter);
                }
                self.dispatch(PopupEvent::PointerDown { row })
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                self.dispatch(PopupEvent::PointerDrag { row })
            }
            MouseEventKind::Up(MouseButton::Left) => {
                self.dispatch(PopupEvent::PointerUp { row: target_row })
            }
            MouseEventKind::Down(MouseButton::Right) => match self.state.entry_at_row(target_row) {
                Some(id) => self.dispatch(PopupEvent::CloseEntry(id)),
                None => Outcome::Continue,
            },
            MouseEventKind::ScrollUp => self.dispatch(PopupEvent::Scroll(-MOUSE_SCROLL_ROWS)),
            MouseEventKind::ScrollDown => self.dispatch(PopupEvent::Scroll(MOUSE_SCROLL_ROWS)),
            _ => Outcome::Continue,
        }
    }

    /// Handle a terminal resize
    ///
    /// Recomputes the popup layout and hands the new content height to the
    /// viewport.
    pub fn handle_resize(&mut self, width: u16, height: u16) -> Outcome {
        debug!(width, height, "Terminal resized");
        let layout = self.layout_for(width, height);
        self.last_layout = layout;

        if usize::from(layout.content.height) == self.state.viewport().height() {
            return Outcome::Continue;
        }
        self.dispatch(PopupEvent::Resize {
            height: layout.content.height,
        })
    }

    fn layout_for(&self, width: u16, height: u16) -> PopupLayout {
        PopupLayout::calculate(
            Rect::new(0, 0, width, height),
            self.config.popup_columns(width),
            self.config.show_help,
        )
    }

    /// Whether content line `row` at `column` is the search box clear control.
    fn hits_clear_control(&self, layout: &PopupLayout, column: u16, row: i32) -> bool {
        let Ok(row) = usize::try_from(row) else {
            return false;
        };
        let content_row = self.state.viewport().offset() + row;
        if content_row >= SEARCH_BOX_ROWS {
            return false;
        }

        let header = Rect::new(layout.content.x, 0, layout.content.width, SEARCH_BOX_ROWS as u16);
        clear_control_area(header, !self.state.filter().is_empty()).is_some_and(|control| {
            content_row == usize::from(control.y)
                && column >= control.x
                && column < control.right()
        })
    }

    /// Render the current frame
    ///
    /// Never touches popup state; size changes arrive through
    /// [`handle_resize`](Self::handle_resize).
    pub fn draw(&mut self) -> Result<(), TuiError> {
        let size = self.terminal.size()?;
        let layout = self.layout_for(size.width, size.height);
        self.last_layout = layout;

        let state = &self.state;
        let styles = &self.styles;
        self.terminal.draw(|frame| {
            render_popup(frame, &layout, state, styles);
        })?;

        Ok(())
    }
}

/// Initialize and run the popup on the real terminal
///
/// Handles terminal setup, runs the event loop, and always restores the
/// terminal before returning. Returns the registry so the caller can emit its
/// journal.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run_popup<R: TabRegistry>(
    registry: R,
    config: ResolvedConfig,
    colors: ColorConfig,
) -> Result<R, TuiError> {
    let result = TuiApp::new(registry, config, colors).and_then(|mut app| {
        app.run()?;
        Ok(app.into_registry())
    });

    // Always restore terminal state
    restore_terminal()?;

    result
}

/// Restore terminal to normal state
///
/// Disables raw mode, mouse capture, and leaves alternate screen
pub fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stderr().execute(crossterm::event::DisableMouseCapture)?;
    io::stderr().execute(LeaveAlternateScreen)?;
    Ok(())
}

#[cfg(test)]
#[path = "tui_app_tests.rs"]
mod tests;
