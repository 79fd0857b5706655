//! Inline add-card form shown at the bottom of a column.

use crate::board::{AddCardForm, ColumnId};
use crate::constants::{ADD_CARD_FORM_HINT, ADD_CARD_FORM_TITLE};
use crate::ui::core::Action;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub struct AddCardInput;

impl AddCardInput {
    /// Edit the draft of `column`'s form.
    ///
    /// Enter submits without adding a line break, Shift+Enter adds a line
    /// break without submitting, Esc cancels.
    pub fn handle_key(column: &ColumnId, form: &mut AddCardForm, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Enter if key.modifiers.contains(KeyModifiers::SHIFT) => {
                form.text.push('\n');
                Action::None
            }
            KeyCode::Enter => Action::SubmitAddCardForm(column.clone()),
            KeyCode::Esc => Action::HideAddCardForm(column.clone()),
            KeyCode::Backspace => {
                form.text.pop();
                Action::None
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                form.text.push(c);
                Action::None
            }
            _ => Action::None,
        }
    }

    pub fn render(f: &mut Frame, rect: Rect, form: &AddCardForm) {
        let mut lines: Vec<Line> = form.text.split('\n').map(|l| Line::from(l.to_string())).collect();
        if let Some(last) = lines.last_mut() {
            last.push_span(Span::styled("▏", Style::default().fg(Color::Yellow)));
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow))
            .title(ADD_CARD_FORM_TITLE)
            .title_bottom(Line::from(ADD_CARD_FORM_HINT).centered());

        // Keep the cursor line visible once the draft outgrows the box
        let visible = rect.height.saturating_sub(2);
        let overflow = u16::try_from(lines.len()).unwrap_or(u16::MAX).saturating_sub(visible);

        let paragraph = Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((overflow, 0))
            .style(Style::default().fg(Color::Green));
        f.render_widget(paragraph, rect);
    }
}
