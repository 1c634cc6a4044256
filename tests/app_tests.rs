//! Application state and input handling tests
//!
//! Tests for keyboard and mouse handling including palette adds, styling,
//! reordering, custom colors, copy feedback and theme cycling.

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ps1_studio::prompt::Selection;
use ps1_studio::ui::app::{FocusPane, InputMode};
use ps1_studio::ui::config::Config;
use ps1_studio::ui::render::compute_layout;
use ps1_studio::ui::App;
use ratatui::layout::Rect;
use std::time::Duration;
use tempfile::TempDir;

/// Helper to create a key event
fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::empty())
}

fn shift(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::SHIFT)
}

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::empty(),
    }
}

/// Helper to create a test app over the given segment ids
fn create_test_app(ids: &[&str]) -> App {
    App::new(Selection::from_ids(ids), Config::default())
}

fn press(app: &mut App, code: KeyCode) -> Vec<u8> {
    let mut clipboard: Vec<u8> = Vec::new();
    app.handle_key(key(code), &mut clipboard);
    clipboard
}

fn segment_ids(app: &App) -> Vec<&'static str> {
    app.selection.segments().iter().map(|s| s.id()).collect()
}

#[tokio::test]
async fn test_quit_keys() {
    for event in [
        key(KeyCode::Char('q')),
        key(KeyCode::Char('Q')),
        KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
    ] {
        let mut app = create_test_app(&["user"]);
        app.handle_key(event, &mut Vec::<u8>::new());
        assert!(app.should_quit);
    }
}

#[tokio::test]
async fn test_key_release_is_ignored() {
    let mut app = create_test_app(&["user"]);
    let mut release = key(KeyCode::Char('q'));
    release.kind = KeyEventKind::Release;
    app.handle_key(release, &mut Vec::<u8>::new());
    assert!(!app.should_quit);
}

#[tokio::test]
async fn test_enter_adds_palette_entry() {
    let mut app = create_test_app(&[]);
    assert_eq!(app.focus, FocusPane::Palette);

    press(&mut app, KeyCode::Char('j'));
    press(&mut app, KeyCode::Enter);

    assert_eq!(segment_ids(&app), vec!["host-short"]);
    assert_eq!(app.ps1(), "\\h");
}

#[tokio::test]
async fn test_add_selects_new_entry() {
    let mut app = create_test_app(&["user", "at-symbol"]);
    press(&mut app, KeyCode::Char('a'));
    assert_eq!(app.selected_index, 2);
}

#[tokio::test]
async fn test_palette_navigation_wraps() {
    let mut app = create_test_app(&[]);
    press(&mut app, KeyCode::Up);
    assert_eq!(app.palette_index, app.palette_entries().len() - 1);
    press(&mut app, KeyCode::Down);
    assert_eq!(app.palette_index, 0);
}

#[tokio::test]
async fn test_style_toggles_on_selected_entry() {
    let mut app = create_test_app(&["user", "at-symbol", "host-short"]);
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.focus, FocusPane::Selection);

    press(&mut app, KeyCode::Char('b'));
    assert_eq!(app.ps1(), "\\[\\e[1m\\]\\u\\[\\e[0m\\]@\\h");

    press(&mut app, KeyCode::Char('b'));
    assert_eq!(app.ps1(), "\\u@\\h");
}

#[tokio::test]
async fn test_preset_color_keys() {
    let mut app = create_test_app(&["path-full"]);
    press(&mut app, KeyCode::Tab);

    press(&mut app, KeyCode::Char('2'));
    assert_eq!(app.ps1(), "\\[\\e[32m\\]\\w\\[\\e[0m\\]");

    press(&mut app, KeyCode::Char('0'));
    assert_eq!(app.ps1(), "\\w");
}

#[tokio::test]
async fn test_shift_moves_selected_entry() {
    let mut app = create_test_app(&["user", "at-symbol", "host-short"]);
    press(&mut app, KeyCode::Tab);

    press(&mut app, KeyCode::Char('J'));
    assert_eq!(segment_ids(&app), vec!["at-symbol", "user", "host-short"]);
    assert_eq!(app.selected_index, 1);

    app.handle_key(shift(KeyCode::Down), &mut Vec::<u8>::new());
    assert_eq!(segment_ids(&app), vec!["at-symbol", "host-short", "user"]);
    assert_eq!(app.selected_index, 2);

    // Already last: nothing moves.
    press(&mut app, KeyCode::Char('J'));
    assert_eq!(segment_ids(&app), vec!["at-symbol", "host-short", "user"]);

    app.handle_key(shift(KeyCode::Up), &mut Vec::<u8>::new());
    assert_eq!(segment_ids(&app), vec!["at-symbol", "user", "host-short"]);
}

#[tokio::test]
async fn test_remove_selected_entry() {
    let mut app = create_test_app(&["user", "at-symbol"]);
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Char('j'));
    press(&mut app, KeyCode::Char('x'));

    assert_eq!(segment_ids(&app), vec!["user"]);
    assert_eq!(app.selected_index, 0);

    press(&mut app, KeyCode::Delete);
    assert!(app.selection.is_empty());
    assert_eq!(app.ps1(), "");

    // Nothing left to remove.
    press(&mut app, KeyCode::Char('x'));
    assert!(app.selection.is_empty());
}

#[tokio::test]
async fn test_custom_color_entry() {
    let mut app = create_test_app(&["git"]);
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Char('c'));
    assert!(matches!(app.mode, InputMode::CustomColor { .. }));

    for c in "ff8800".chars() {
        press(&mut app, KeyCode::Char(c));
    }
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.mode, InputMode::Normal);
    assert!(app.ps1().starts_with("\\[\\e[38;2;...m\\]"));
    assert_eq!(
        app.selected_instance().map(|s| s.color.value().to_string()),
        Some("#ff8800".to_string())
    );
}

#[tokio::test]
async fn test_invalid_custom_color_is_flagged() {
    let mut app = create_test_app(&["git"]);
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Char('c'));
    for c in "zz".chars() {
        press(&mut app, KeyCode::Char(c));
    }
    press(&mut app, KeyCode::Enter);

    assert!(matches!(
        app.mode,
        InputMode::CustomColor { invalid: true, .. }
    ));

    press(&mut app, KeyCode::Esc);
    assert_eq!(app.mode, InputMode::Normal);
    assert_eq!(app.ps1(), "$(git branch 2>/dev/null | grep \"^*\" | colrm 1 2)");
}

#[tokio::test]
async fn test_ctrl_c_cancels_custom_color_input() {
    let mut app = create_test_app(&["git"]);
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Char('c'));

    app.handle_key(
        KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        &mut Vec::<u8>::new(),
    );

    assert_eq!(app.mode, InputMode::Normal);
    assert_eq!(app.selected_instance().map(|s| s.color.value()), Some(""));
}

#[tokio::test]
async fn test_copy_writes_osc52_and_shows_feedback() {
    let mut app = create_test_app(&["user"]);
    assert_eq!(app.copy_label(), "Copy");

    let clipboard = press(&mut app, KeyCode::Char('y'));
    let written = String::from_utf8(clipboard).unwrap();

    assert!(written.starts_with("\x1b]52;c;"));
    assert_eq!(app.copy_label(), "Copied!");
    assert!(app.copy_active());
}

#[tokio::test]
async fn test_copy_feedback_expires() {
    let config = Config {
        copy_feedback_ms: 10,
        ..Config::default()
    };
    let mut app = App::new(Selection::seeded(), config);
    press(&mut app, KeyCode::Char('y'));
    std::thread::sleep(Duration::from_millis(30));
    assert_eq!(app.copy_label(), "Copy");
}

#[tokio::test]
async fn test_help_swallows_keys() {
    let mut app = create_test_app(&["user"]);
    press(&mut app, KeyCode::Char('?'));
    assert!(app.show_help);

    press(&mut app, KeyCode::Tab);
    assert_eq!(app.focus, FocusPane::Palette);

    press(&mut app, KeyCode::Esc);
    assert!(!app.show_help);
    assert!(!app.should_quit);
}

#[tokio::test]
async fn test_theme_cycle_is_saved() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.json");

    let mut app = create_test_app(&["user"]);
    app.config_path = Some(path.clone());
    let before = app.theme.name;

    press(&mut app, KeyCode::Char('t'));
    assert_ne!(app.theme.name, before);

    let saved = Config::load_from(&path).unwrap();
    assert_eq!(saved.theme, app.theme.name);
}

#[tokio::test]
async fn test_mouse_drag_reorders() {
    let mut app = create_test_app(&["user", "at-symbol", "host-short"]);
    let area = Rect::new(0, 0, 120, 40);
    let layout = compute_layout(area);
    let x = layout.selection.x + 2;
    let first_row = layout.selection.y + 1;

    let mut clipboard: Vec<u8> = Vec::new();
    app.handle_mouse(
        mouse(MouseEventKind::Down(MouseButton::Left), x, first_row),
        area,
        &mut clipboard,
    );
    assert_eq!(app.focus, FocusPane::Selection);
    assert!(app.drag.is_some());

    app.handle_mouse(
        mouse(MouseEventKind::Drag(MouseButton::Left), x, first_row + 2),
        area,
        &mut clipboard,
    );
    // The list shows the drag position before it is committed.
    let visual: Vec<&str> = app.visual_order().iter().map(|s| s.id()).collect();
    assert_eq!(visual, vec!["at-symbol", "host-short", "user"]);
    assert_eq!(segment_ids(&app), vec!["user", "at-symbol", "host-short"]);

    app.handle_mouse(
        mouse(MouseEventKind::Up(MouseButton::Left), x, first_row + 2),
        area,
        &mut clipboard,
    );
    assert!(app.drag.is_none());
    assert_eq!(segment_ids(&app), vec!["at-symbol", "host-short", "user"]);
    assert_eq!(app.ps1(), "@\\h\\u");
}

#[tokio::test]
async fn test_mouse_click_output_copies() {
    let mut app = create_test_app(&["user"]);
    let area = Rect::new(0, 0, 120, 40);
    let layout = compute_layout(area);

    let mut clipboard: Vec<u8> = Vec::new();
    app.handle_mouse(
        mouse(
            MouseEventKind::Down(MouseButton::Left),
            layout.output.x + 2,
            layout.output.y + 1,
        ),
        area,
        &mut clipboard,
    );
    assert!(!clipboard.is_empty());
    assert!(app.copy_active());
}

#[tokio::test(start_paused = true)]
async fn test_preview_follows_composition() {
    let mut app = App::new(Selection::seeded(), Config::default());
    tokio::time::sleep(Duration::from_secs(2)).await;
    assert_eq!(app.animator.plain_text(), "user@host dir $");

    app.handle_key(key(KeyCode::Tab), &mut Vec::<u8>::new());
    app.handle_key(key(KeyCode::Char('x')), &mut Vec::<u8>::new());
    tokio::time::sleep(Duration::from_secs(2)).await;
    assert_eq!(app.animator.plain_text(), "@host dir $");
}

#[tokio::test]
async fn test_mouse_drag_in_scrolled_list() {
    let ids = [
        "user",
        "host-short",
        "host-full",
        "path-full",
        "path-base",
        "time-24",
        "time-12",
        "date",
        "bash-version",
        "history-num",
        "command-num",
        "jobs",
    ];
    let mut app = create_test_app(&ids);
    // 24 rows leave 7 visible entries in the selection panel.
    let area = Rect::new(0, 0, 120, 24);
    let layout = compute_layout(area);
    assert_eq!(layout.selection.height, 9);

    app.focus = FocusPane::Selection;
    app.selected_index = 11;
    assert_eq!(app.selection_offset(7), 5);

    let x = layout.selection.x + 2;
    let first_row = layout.selection.y + 1;
    let mut clipboard: Vec<u8> = Vec::new();

    app.handle_mouse(
        mouse(MouseEventKind::Down(MouseButton::Left), x, first_row),
        area,
        &mut clipboard,
    );
    assert_eq!(app.selected_index, 5);
    assert_eq!(app.selection_offset(7), 5);

    // Pointer still on the pressed row: nothing moves.
    app.handle_mouse(
        mouse(MouseEventKind::Drag(MouseButton::Left), x, first_row),
        area,
        &mut clipboard,
    );
    assert_eq!(app.drag.as_ref().map(|d| d.dragging_index()), Some(5));

    app.handle_mouse(
        mouse(MouseEventKind::Drag(MouseButton::Left), x, first_row + 2),
        area,
        &mut clipboard,
    );
    app.handle_mouse(
        mouse(MouseEventKind::Up(MouseButton::Left), x, first_row + 2),
        area,
        &mut clipboard,
    );

    assert_eq!(
        segment_ids(&app),
        vec![
            "user",
            "host-short",
            "host-full",
            "path-full",
            "path-base",
            "time-12",
            "date",
            "time-24",
            "bash-version",
            "history-num",
            "command-num",
            "jobs",
        ]
    );
    assert_eq!(app.selected_index, 7);
}
