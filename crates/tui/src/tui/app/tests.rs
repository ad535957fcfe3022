use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use pretty_assertions::assert_eq;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;
use ratatui::Terminal;
use tempfile::TempDir;

use super::{App, DashboardFocus};
use crate::config::AppConfig;
use crate::core::OverlayState;
use crate::model::{TaskId, TaskStatus};
use crate::tui::form::FormRow;
use crate::tui::helpers::centered_rect;

fn app(demo: bool) -> (App, TempDir) {
    let dir = TempDir::new().expect("temp dir");
    let config = AppConfig::from_data_dir(dir.path().to_path_buf()).expect("config");
    (App::new(config, demo).expect("app"), dir)
}

fn press(app: &mut App, code: KeyCode) {
    app.on_key(KeyEvent::new(code, KeyModifiers::NONE))
        .expect("key handled");
}

fn type_text(app: &mut App, text: &str) {
    for ch in text.chars() {
        press(app, KeyCode::Char(ch));
    }
}

fn goto_row(app: &mut App, row: FormRow) {
    while app.form.row.index() > row.index() {
        press(app, KeyCode::Up);
    }
    while app.form.row.index() < row.index() {
        press(app, KeyCode::Down);
    }
}

#[test]
fn centered_rect_keeps_within_bounds() {
    let area = Rect {
        x: 0,
        y: 0,
        width: 80,
        height: 24,
    };
    let rect = centered_rect(40, 10, area);
    assert_eq!(rect.width, 40);
    assert_eq!(rect.height, 10);
    assert_eq!(rect.x, 20);
    assert_eq!(rect.y, 7);
}

#[test]
fn empty_board_focuses_new_task_button() {
    let (app, _dir) = app(false);
    assert_eq!(app.focus, DashboardFocus::NewTask);
    assert!(app.board.is_dashboard_interactive());
}

#[test]
fn create_flow_with_typed_name_and_new_responsible() {
    let (mut app, _dir) = app(false);

    press(&mut app, KeyCode::Enter);
    assert_eq!(app.board.overlay_state(), OverlayState::CreateOpen);
    assert_eq!(app.form.row, FormRow::Name);

    type_text(&mut app, "Water plants");
    goto_row(&mut app, FormRow::NewResponsible);
    type_text(&mut app, "bia ");
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.responsible_input.as_str(), "");
    assert_eq!(
        app.board.draft().map(|draft| draft.responsible.clone()),
        Some("bia".to_string())
    );

    goto_row(&mut app, FormRow::Actions);
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.board.overlay_state(), OverlayState::Closed);
    let task = &app.board.tasks()[0];
    assert_eq!(task.name, "Water plants");
    assert_eq!(task.category, "Planning");
    assert_eq!(task.responsible, "bia");
    assert_eq!(app.focus, DashboardFocus::Card(0));
}

#[test]
fn dashboard_keys_are_ignored_while_form_is_open() {
    let (mut app, _dir) = app(true);
    press(&mut app, KeyCode::Char('n'));
    assert!(app.board.overlay_state().is_open());

    // Typed into the name field instead of quitting or clearing.
    press(&mut app, KeyCode::Char('q'));
    press(&mut app, KeyCode::Char('c'));
    assert!(!app.should_quit());
    assert_eq!(app.name_input.as_str(), "qc");
    assert_eq!(app.board.stats().done, 1);

    press(&mut app, KeyCode::Esc);
    assert_eq!(app.board.overlay_state(), OverlayState::Closed);
    assert_eq!(app.board.tasks().len(), 4);
}

#[test]
fn space_clears_completed_from_dashboard() {
    let (mut app, _dir) = app(true);
    assert_eq!(app.board.stats().done, 1);

    press(&mut app, KeyCode::Char(' '));

    assert_eq!(app.board.tasks().len(), 3);
    assert!(app.board.tasks().iter().all(|task| !task.status.is_done()));
}

#[test]
fn status_button_cycles_focused_task() {
    let (mut app, _dir) = app(true);
    assert_eq!(app.focus, DashboardFocus::Card(0));
    let before = app.board.tasks()[0].status;

    press(&mut app, KeyCode::Right);
    assert_eq!(app.focus, DashboardFocus::Status(0));
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.board.tasks()[0].status, before.next());
    assert!(app.board.overlay_state() == OverlayState::Closed);
}

#[test]
fn edit_flow_changes_status_and_deletes() {
    let (mut app, _dir) = app(true);
    let id = app.board.tasks()[0].id;

    press(&mut app, KeyCode::Enter);
    assert_eq!(app.board.overlay_state(), OverlayState::EditOpen(id));
    assert_eq!(app.name_input.as_str(), app.board.tasks()[0].name);

    goto_row(&mut app, FormRow::Status);
    // Lands on the current status, then moves to the last chip.
    press(&mut app, KeyCode::Right);
    press(&mut app, KeyCode::Right);
    press(&mut app, KeyCode::Enter);
    assert_eq!(
        app.board.draft().map(|draft| draft.status),
        Some(TaskStatus::Done)
    );

    goto_row(&mut app, FormRow::Actions);
    press(&mut app, KeyCode::Left);
    press(&mut app, KeyCode::Left);
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.board.overlay_state(), OverlayState::Closed);
    assert!(app.board.task(id).is_none());
    assert_eq!(app.board.tasks().len(), 3);
}

#[test]
fn clearing_category_then_saving_shows_error() {
    let (mut app, _dir) = app(false);
    press(&mut app, KeyCode::Char('n'));
    app.dispatch(crate::core::Intent::SetField(
        crate::core::DraftField::Category(String::new()),
    ))
    .expect("dispatch");

    goto_row(&mut app, FormRow::Actions);
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.board.overlay_state(), OverlayState::CreateOpen);
    assert!(app.board.tasks().is_empty());
    let status = app.status.as_ref().map(|status| status.text.clone());
    assert!(status.unwrap_or_default().contains("Choose a category"));
}

#[test]
fn adding_blank_tag_reports_hint() {
    let (mut app, _dir) = app(false);
    press(&mut app, KeyCode::Char('n'));
    goto_row(&mut app, FormRow::NewCategory);
    type_text(&mut app, "   ");
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.board.categories().len(), 4);
    assert!(app.status.is_some());
}

#[test]
fn quit_only_from_dashboard() {
    let (mut app, _dir) = app(false);
    press(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit());
}

#[test]
fn draw_renders_dashboard_and_form() {
    let (mut app, _dir) = app(true);
    let backend = TestBackend::new(100, 30);
    let mut terminal = Terminal::new(backend).expect("terminal");

    terminal.draw(|f| app.draw(f)).expect("draw dashboard");
    press(&mut app, KeyCode::Enter);
    terminal.draw(|f| app.draw(f)).expect("draw form");

    let buffer = terminal.backend().buffer();
    let rendered: String = buffer.content().iter().map(|cell| cell.symbol()).collect();
    assert!(rendered.contains(&format!("Edit task #{}", TaskId::new(4))));
}
