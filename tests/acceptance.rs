//! Acceptance tests: drive the popup through its public API the way a user
//! would, with keys and mouse events on a TestBackend terminal.

use crossterm::event::{
    KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::Terminal;
use tabjump::config::ResolvedConfig;
use tabjump::host::{CommandAction, SnapshotRegistry};
use tabjump::model::{HostTab, TabId};
use tabjump::state::{dispatch, Direction, Outcome, PopupEvent, PopupState};
use tabjump::view::{ColorConfig, TuiApp};

// ===== Test Helpers =====

type App = TuiApp<TestBackend, SnapshotRegistry>;

fn tabs() -> Vec<HostTab> {
    vec![
        HostTab::new(1, "Gmail", "http://mail.example"),
        HostTab::new(2, "Maps", "http://maps.example"),
        HostTab::new(3, "News", "http://news.example"),
    ]
}

fn open(tabs: Vec<HostTab>, width: u16, height: u16, show_help: bool) -> App {
    let terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    let config = ResolvedConfig {
        width_scale: f64::from(width) / 40.0,
        show_help,
        ..ResolvedConfig::default()
    };
    let mut app = TuiApp::with_terminal(
        terminal,
        SnapshotRegistry::new(tabs),
        config,
        ColorConfig::enabled(),
    )
    .unwrap();
    app.draw().unwrap();
    app
}

fn buffer_to_string(buffer: &Buffer) -> String {
    let area = buffer.area();
    let mut lines = Vec::new();

    for y in area.top()..area.bottom() {
        let mut line = String::new();
        for x in area.left()..area.right() {
            line.push_str(buffer[(x, y)].symbol());
        }
        lines.push(line.trim_end().to_string());
    }

    lines.join("\n")
}

fn screen(app: &App) -> String {
    buffer_to_string(app.terminal().backend().buffer())
}

fn press(app: &mut App, code: KeyCode) -> Outcome {
    let outcome = app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    app.draw().unwrap();
    outcome
}

fn type_text(app: &mut App, text: &str) {
    for ch in text.chars() {
        press(app, KeyCode::Char(ch));
    }
}

fn mouse(app: &mut App, kind: MouseEventKind, column: u16, row: u16) -> Outcome {
    let outcome = app.handle_mouse(MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    });
    app.draw().unwrap();
    outcome
}

fn selected_title(app: &App) -> Option<String> {
    app.state()
        .selected_entry()
        .map(|entry| entry.title().to_string())
}

fn visible_titles(app: &App) -> Vec<String> {
    app.state()
        .rows()
        .into_iter()
        .filter(|row| row.visible)
        .map(|row| row.title.to_string())
        .collect()
}

// ===== Rendering =====

#[test]
fn opening_popup_renders_search_box_tabs_and_help() {
    let app = open(tabs(), 64, 7, true);

    insta::assert_snapshot!(screen(&app), @r"
    ┌ Search ──────────────────────────────────────────────────────┐
    │                                                              │
    └──────────────────────────────────────────────────────────────┘
     □ Gmail
     □ Maps
     □ News
    ↑↓ select · Enter switch · right-click close tab · Esc quit
    ");
}

#[test]
fn active_tab_is_preselected() {
    let mut snapshot = tabs();
    snapshot[2].active = true;

    let app = open(snapshot, 64, 12, true);

    assert_eq!(selected_title(&app).as_deref(), Some("News"));
    assert!(app.state().selection().is_locked());
}

// ===== Filtering =====

#[test]
fn typing_filters_and_moves_cursor_off_hidden_entry() {
    let mut app = open(tabs(), 64, 12, true);
    assert_eq!(selected_title(&app).as_deref(), Some("Gmail"));

    type_text(&mut app, "ap");

    assert_eq!(visible_titles(&app), vec!["Maps"]);
    assert_eq!(selected_title(&app).as_deref(), Some("Maps"));
    let text = screen(&app);
    assert!(text.contains("[x]"));
    assert!(!text.contains("Gmail"));
}

#[test]
fn filter_matches_url_case_insensitively() {
    let mut app = open(tabs(), 64, 12, true);

    type_text(&mut app, "NEWS.EX");

    assert_eq!(visible_titles(&app), vec!["News"]);
}

#[test]
fn no_match_shows_placeholder_and_enter_does_nothing() {
    let mut app = open(tabs(), 64, 12, true);

    type_text(&mut app, "zzz");

    assert!(screen(&app).contains("No matching tabs"));
    assert_eq!(app.state().selected_entry(), None);
    assert_eq!(press(&mut app, KeyCode::Enter), Outcome::Continue);
    assert!(app.registry().journal().is_empty());
}

#[test]
fn clearing_filter_keeps_visible_selection() {
    let mut app = open(tabs(), 64, 12, true);
    press(&mut app, KeyCode::Down);
    type_text(&mut app, "ma");
    assert_eq!(visible_titles(&app), vec!["Gmail", "Maps"]);
    assert_eq!(selected_title(&app).as_deref(), Some("Maps"));

    app.handle_key(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL));

    assert_eq!(visible_titles(&app), vec!["Gmail", "Maps", "News"]);
    assert_eq!(selected_title(&app).as_deref(), Some("Maps"));
}

#[test]
fn clearing_filter_after_hidden_selection_keeps_reconciled_entry() {
    let mut app = open(tabs(), 64, 12, true);
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Down);
    assert_eq!(selected_title(&app).as_deref(), Some("News"));

    type_text(&mut app, "ma");
    assert_eq!(selected_title(&app).as_deref(), Some("Gmail"));

    // Clear control sits at the right end of the search box text row
    mouse(&mut app, MouseEventKind::Down(MouseButton::Left), 61, 1);

    assert!(app.state().filter().is_empty());
    assert_eq!(selected_title(&app).as_deref(), Some("Gmail"));
}

// ===== Empty snapshot =====

#[test]
fn empty_snapshot_is_displayable() {
    let mut app = open(Vec::new(), 64, 12, true);

    assert!(screen(&app).contains("No open tabs"));
    assert_eq!(press(&mut app, KeyCode::Down), Outcome::Continue);
    assert_eq!(press(&mut app, KeyCode::Enter), Outcome::Continue);
    assert_eq!(app.state().selected_entry(), None);
    assert_eq!(press(&mut app, KeyCode::Esc), Outcome::Close);
}

// ===== Closing tabs =====

#[test]
fn right_click_closes_selected_tab_and_selects_next() {
    let mut app = open(tabs(), 64, 12, true);

    // Row 3 is the first tab below the search box
    let outcome = mouse(&mut app, MouseEventKind::Down(MouseButton::Right), 10, 3);

    assert_eq!(outcome, Outcome::Continue);
    assert_eq!(visible_titles(&app), vec!["Maps", "News"]);
    assert_eq!(selected_title(&app).as_deref(), Some("Maps"));
    let journal = app.registry().journal();
    assert_eq!(journal.len(), 1);
    assert_eq!(journal[0].action, CommandAction::Close);
    assert_eq!(journal[0].tab_id, TabId::new(1));
    assert!(!screen(&app).contains("Gmail"));
}

#[test]
fn closing_last_tab_leaves_empty_popup() {
    let mut app = open(vec![HostTab::new(7, "Only", "http://only.example")], 64, 12, true);

    mouse(&mut app, MouseEventKind::Down(MouseButton::Right), 10, 3);

    assert_eq!(app.state().selected_entry(), None);
    assert!(screen(&app).contains("No open tabs"));
}

// ===== Activation =====

#[test]
fn keyboard_navigation_then_enter_switches_tab() {
    let mut app = open(tabs(), 64, 12, true);

    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Down);
    let outcome = press(&mut app, KeyCode::Enter);

    assert_eq!(outcome, Outcome::Close);
    let journal = app.into_registry().journal().to_vec();
    assert_eq!(journal.len(), 1);
    assert_eq!(journal[0].action, CommandAction::Activate);
    assert_eq!(journal[0].tab_id, TabId::new(3));
}

#[test]
fn click_on_row_switches_tab() {
    let mut app = open(tabs(), 64, 12, true);

    mouse(&mut app, MouseEventKind::Down(MouseButton::Left), 10, 5);
    let outcome = mouse(&mut app, MouseEventKind::Up(MouseButton::Left), 10, 5);

    assert_eq!(outcome, Outcome::Close);
    assert_eq!(app.registry().journal()[0].tab_id, TabId::new(3));
}

#[test]
fn drag_that_ends_on_a_row_does_not_switch() {
    let many: Vec<HostTab> = (1..=20_i64)
        .map(|i| HostTab::new(i, format!("Tab {i}"), format!("http://{i}.example")))
        .collect();
    let mut app = open(many, 64, 10, true);

    mouse(&mut app, MouseEventKind::Down(MouseButton::Left), 10, 8);
    mouse(&mut app, MouseEventKind::Drag(MouseButton::Left), 10, 6);
    mouse(&mut app, MouseEventKind::Drag(MouseButton::Left), 10, 4);
    let outcome = mouse(&mut app, MouseEventKind::Up(MouseButton::Left), 10, 4);

    assert_eq!(outcome, Outcome::Continue);
    assert_eq!(app.state().viewport().offset(), 4);
    assert!(app.registry().journal().is_empty());
}

#[test]
fn escape_dismisses_without_commands() {
    let mut app = open(tabs(), 64, 12, true);
    press(&mut app, KeyCode::Down);

    assert_eq!(press(&mut app, KeyCode::Esc), Outcome::Close);
    assert!(app.registry().journal().is_empty());
}

// ===== Keyboard lock =====

#[test]
fn hover_is_ignored_while_keyboard_holds_selection() {
    let tabs = tabs();
    let mut registry = SnapshotRegistry::new(tabs.clone());
    let mut state = PopupState::from_snapshot(tabs, 10);

    dispatch(&mut state, PopupEvent::Move(Direction::Next), &mut registry);
    dispatch(&mut state, PopupEvent::Hover(TabId::new(3)), &mut registry);
    assert_eq!(state.selected_entry().map(|e| e.title()), Some("Maps"));

    dispatch(&mut state, PopupEvent::PointerMoved, &mut registry);
    dispatch(&mut state, PopupEvent::Hover(TabId::new(3)), &mut registry);
    assert_eq!(state.selected_entry().map(|e| e.title()), Some("News"));
}

#[test]
fn mouse_motion_after_keyboard_selects_row_under_pointer() {
    let mut app = open(tabs(), 64, 12, true);
    press(&mut app, KeyCode::Down);
    assert!(app.state().selection().is_locked());

    mouse(&mut app, MouseEventKind::Moved, 10, 5);

    assert!(!app.state().selection().is_locked());
    assert_eq!(selected_title(&app).as_deref(), Some("News"));
}

// ===== Scrolling =====

#[test]
fn keyboard_navigation_keeps_cursor_in_view() {
    let many: Vec<HostTab> = (1..=20_i64)
        .map(|i| HostTab::new(i, format!("Tab {i}"), format!("http://{i}.example")))
        .collect();
    let mut app = open(many, 64, 9, true);

    for _ in 0..10 {
        press(&mut app, KeyCode::Down);
    }

    assert_eq!(selected_title(&app).as_deref(), Some("Tab 11"));
    assert!(screen(&app).contains("Tab 11"));

    for _ in 0..10 {
        press(&mut app, KeyCode::Up);
    }

    assert_eq!(app.state().viewport().offset(), 0);
    assert!(screen(&app).contains("Search"));
}
