use columnist::board::{Board, ColumnId, SeedData};
use columnist::config::Config;
use columnist::logger::Logger;
use columnist::ui::core::{Component, EventType};
use columnist::ui::AppComponent;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{backend::TestBackend, layout::Rect, Terminal};

fn todo() -> ColumnId {
    ColumnId::new("todo")
}

fn done() -> ColumnId {
    ColumnId::new("done")
}

/// Three 30-cell columns on a 90x30 screen; cards are 3 rows tall from row 1
fn app_with(config: &Config) -> AppComponent {
    let mut board = Board::new(config.columns()).unwrap();
    board.seed(&SeedData::new().with_column("todo", ["A", "B"]).with_column("done", ["C"]));
    let mut app = AppComponent::new(board, config, Logger::new());
    app.resize(Rect::new(0, 0, 90, 30));
    app
}

fn app() -> AppComponent {
    app_with(&Config::default())
}

/// A single tall column of five cards on a 12-row screen; D and E lie below
/// the visible area
fn overflowing_app() -> AppComponent {
    let config = Config::default();
    let mut board = Board::new(config.columns()).unwrap();
    board.seed(&SeedData::new().with_column("todo", ["A", "B", "C", "D", "E"]));
    let mut app = AppComponent::new(board, &config, Logger::new());
    app.resize(Rect::new(0, 0, 90, 12));
    app
}

fn mouse(app: &mut AppComponent, kind: MouseEventKind, column: u16, row: u16) {
    app.handle_event(EventType::Mouse(MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }));
}

fn key(app: &mut AppComponent, code: KeyCode, modifiers: KeyModifiers) {
    app.handle_event(EventType::Key(KeyEvent::new(code, modifiers)));
}

fn down(app: &mut AppComponent, column: u16, row: u16) {
    mouse(app, MouseEventKind::Down(MouseButton::Left), column, row);
}

fn drag(app: &mut AppComponent, column: u16, row: u16) {
    mouse(app, MouseEventKind::Drag(MouseButton::Left), column, row);
}

fn up(app: &mut AppComponent, column: u16, row: u16) {
    mouse(app, MouseEventKind::Up(MouseButton::Left), column, row);
}

#[test]
fn test_drag_reorders_within_column() {
    let mut app = app();
    down(&mut app, 5, 2);
    drag(&mut app, 5, 3);
    assert!(app.board().is_drag_active());
    assert!(app.board().column(&todo()).unwrap().highlighted);

    drag(&mut app, 5, 8);
    up(&mut app, 5, 8);

    assert_eq!(app.board().card_texts(&todo()), vec!["B", "A"]);
    assert!(!app.board().is_drag_active());
    assert!(app.board().columns().iter().all(|c| !c.highlighted));
}

#[test]
fn test_drag_moves_card_to_other_column() {
    let mut app = app();
    down(&mut app, 5, 2);
    drag(&mut app, 65, 1);
    up(&mut app, 65, 1);

    assert_eq!(app.board().card_texts(&done()), vec!["A", "C"]);
    assert_eq!(app.board().card_texts(&todo()), vec!["B"]);
}

#[test]
fn test_drop_position_accounts_for_hidden_cards() {
    let mut app = overflowing_app();
    down(&mut app, 5, 2);
    drag(&mut app, 5, 8);
    up(&mut app, 5, 8);

    // The pointer is above D's midpoint even though D is off-screen
    assert_eq!(app.board().card_texts(&todo()), vec!["B", "C", "A", "D", "E"]);
}

#[test]
fn test_press_without_movement_does_not_drag() {
    let mut app = app();
    down(&mut app, 5, 2);
    up(&mut app, 5, 2);
    assert!(!app.board().is_drag_active());
    assert_eq!(app.board().card_texts(&todo()), vec!["A", "B"]);
}

#[test]
fn test_escape_cancels_drag() {
    let mut app = app();
    down(&mut app, 5, 2);
    drag(&mut app, 5, 8);
    assert!(app.board().is_drag_active());

    key(&mut app, KeyCode::Esc, KeyModifiers::NONE);
    assert!(!app.board().is_drag_active());
    assert_eq!(app.board().card_texts(&todo()), vec!["A", "B"]);

    // Releasing afterwards is harmless
    up(&mut app, 5, 8);
    assert_eq!(app.board().card_texts(&todo()), vec!["A", "B"]);
}

#[test]
fn test_escape_cancels_drag_while_form_is_open() {
    let mut app = app();
    down(&mut app, 5, 27);
    key(&mut app, KeyCode::Char('x'), KeyModifiers::NONE);
    assert_eq!(app.board().open_form(), Some(&todo()));

    down(&mut app, 5, 2);
    drag(&mut app, 5, 8);
    assert!(app.board().is_drag_active());

    key(&mut app, KeyCode::Esc, KeyModifiers::NONE);
    assert!(!app.board().is_drag_active());
    assert_eq!(app.board().open_form(), Some(&todo()));
    assert_eq!(app.board().form(&todo()).unwrap().text, "x");
    assert_eq!(app.board().card_texts(&todo()), vec!["A", "B"]);
}

#[test]
fn test_drop_outside_columns_keeps_order() {
    let mut app = app();
    down(&mut app, 5, 2);
    drag(&mut app, 5, 5);
    up(&mut app, 5, 29);

    assert!(!app.board().is_drag_active());
    assert_eq!(app.board().card_texts(&todo()), vec!["A", "B"]);
    assert!(app.board().columns().iter().all(|c| !c.highlighted));
}

#[test]
fn test_click_delete_glyph_removes_card() {
    let mut app = app();
    down(&mut app, 27, 1);
    assert_eq!(app.board().card_texts(&todo()), vec!["B"]);
    assert_eq!(app.board().card_count(), 2);
}

#[test]
fn test_add_card_form_via_mouse_and_keyboard() {
    let mut app = app();
    down(&mut app, 5, 27);
    assert_eq!(app.board().open_form(), Some(&todo()));

    for c in "Hi".chars() {
        key(&mut app, KeyCode::Char(c), KeyModifiers::NONE);
    }
    key(&mut app, KeyCode::Enter, KeyModifiers::SHIFT);
    for c in "there".chars() {
        key(&mut app, KeyCode::Char(c), KeyModifiers::NONE);
    }
    key(&mut app, KeyCode::Enter, KeyModifiers::NONE);

    assert_eq!(app.board().card_texts(&todo()), vec!["A", "B", "Hi\nthere"]);
    assert_eq!(app.board().open_form(), None);
}

#[test]
fn test_blank_submission_creates_nothing() {
    let mut app = app();
    down(&mut app, 5, 27);
    key(&mut app, KeyCode::Char(' '), KeyModifiers::NONE);
    key(&mut app, KeyCode::Enter, KeyModifiers::NONE);

    assert_eq!(app.board().card_texts(&todo()), vec!["A", "B"]);
    assert_eq!(app.board().open_form(), None);
}

#[test]
fn test_opening_a_form_closes_the_other() {
    let mut app = app();
    down(&mut app, 5, 27);
    down(&mut app, 65, 27);
    assert_eq!(app.board().open_form(), Some(&done()));
    assert!(!app.board().form(&todo()).unwrap().open);
}

#[test]
fn test_mouse_disabled_ignores_pointer() {
    let mut config = Config::default();
    config.ui.mouse_enabled = false;
    let mut app = app_with(&config);

    down(&mut app, 27, 1);
    down(&mut app, 5, 2);
    drag(&mut app, 5, 8);
    assert_eq!(app.board().card_texts(&todo()), vec!["A", "B"]);
    assert!(!app.board().is_drag_active());
}

#[test]
fn test_global_keys() {
    let mut app = app();
    key(&mut app, KeyCode::Char('?'), KeyModifiers::NONE);
    assert!(app.state().show_help);
    key(&mut app, KeyCode::Esc, KeyModifiers::NONE);
    assert!(!app.state().show_help);

    key(&mut app, KeyCode::Char('G'), KeyModifiers::NONE);
    assert!(app.state().show_logs);
    key(&mut app, KeyCode::Char('G'), KeyModifiers::NONE);
    assert!(!app.state().show_logs);

    assert!(!app.should_quit());
    key(&mut app, KeyCode::Char('q'), KeyModifiers::NONE);
    assert!(app.should_quit());
}

#[test]
fn test_render_draws_columns_and_cards() {
    let mut app = app();
    let mut terminal = Terminal::new(TestBackend::new(90, 30)).unwrap();
    terminal
        .draw(|f| {
            let area = f.area();
            app.render(f, area);
        })
        .unwrap();

    let text: String = terminal.backend().buffer().content().iter().map(|c| c.symbol()).collect();
    assert!(text.contains("To Do"));
    assert!(text.contains("In Progress"));
    assert!(text.contains("Done"));
}

#[test]
fn test_render_during_drag() {
    let mut app = app();
    down(&mut app, 5, 2);
    drag(&mut app, 35, 5);

    let mut terminal = Terminal::new(TestBackend::new(90, 30)).unwrap();
    terminal
        .draw(|f| {
            let area = f.area();
            app.render(f, area);
        })
        .unwrap();
    assert!(app.board().is_drag_active());
}
