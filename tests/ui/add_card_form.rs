use columnist::board::{AddCardForm, ColumnId};
use columnist::ui::components::AddCardInput;
use columnist::ui::core::Action;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

fn open_form() -> AddCardForm {
    let mut form = AddCardForm::default();
    form.show();
    form
}

fn press(column: &ColumnId, form: &mut AddCardForm, code: KeyCode, modifiers: KeyModifiers) -> Action {
    AddCardInput::handle_key(column, form, KeyEvent::new(code, modifiers))
}

#[test]
fn test_enter_submits_without_line_break() {
    let column = ColumnId::new("todo");
    let mut form = open_form();
    for c in "Buy milk".chars() {
        press(&column, &mut form, KeyCode::Char(c), KeyModifiers::NONE);
    }

    let action = press(&column, &mut form, KeyCode::Enter, KeyModifiers::NONE);
    assert_eq!(action, Action::SubmitAddCardForm(column));
    assert_eq!(form.text, "Buy milk");
}

#[test]
fn test_shift_enter_inserts_line_break() {
    let column = ColumnId::new("todo");
    let mut form = open_form();
    press(&column, &mut form, KeyCode::Char('a'), KeyModifiers::NONE);

    let action = press(&column, &mut form, KeyCode::Enter, KeyModifiers::SHIFT);
    assert_eq!(action, Action::None);
    press(&column, &mut form, KeyCode::Char('b'), KeyModifiers::NONE);
    assert_eq!(form.text, "a\nb");
}

#[test]
fn test_escape_cancels_form() {
    let column = ColumnId::new("done");
    let mut form = open_form();
    let action = press(&column, &mut form, KeyCode::Esc, KeyModifiers::NONE);
    assert_eq!(action, Action::HideAddCardForm(column));
}

#[test]
fn test_backspace_and_control_keys() {
    let column = ColumnId::new("todo");
    let mut form = open_form();
    press(&column, &mut form, KeyCode::Char('a'), KeyModifiers::NONE);
    press(&column, &mut form, KeyCode::Char('B'), KeyModifiers::SHIFT);
    press(&column, &mut form, KeyCode::Char('c'), KeyModifiers::CONTROL);
    assert_eq!(form.text, "aB");

    press(&column, &mut form, KeyCode::Backspace, KeyModifiers::NONE);
    assert_eq!(form.text, "a");
}
