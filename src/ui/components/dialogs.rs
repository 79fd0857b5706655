//! Overlay dialogs: help and logs.

use crate::constants::{DIALOG_TITLE_HELP, DIALOG_TITLE_LOGS};
use crate::ui::layout::LayoutManager;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
    Frame,
};

const HELP_TEXT: &str = r"
COLUMNIST - Terminal Kanban Board
=================================

CARDS
-----
Drag        Press a card and move the mouse to drag it
Release     Drop the card where the placeholder shows
Esc         Cancel the current drag
×           Click a card's × to delete it

ADDING CARDS
------------
+ Add       Click a column's footer to open its form
Enter       Add the card
Shift+Enter New line inside the card
Esc         Close the form

GENERAL
-------
?           Toggle this help
G           Toggle the log view
t           Cycle icon theme
q / Ctrl+C  Quit
";

pub struct HelpDialog;

impl HelpDialog {
    pub fn render(f: &mut Frame, area: Rect) {
        let help_area = LayoutManager::centered_rect(70, 80, area);
        f.render_widget(Clear, help_area);

        let help = Paragraph::new(HELP_TEXT)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(DIALOG_TITLE_HELP)
                    .title_alignment(Alignment::Center),
            )
            .style(Style::default().fg(Color::White))
            .wrap(Wrap { trim: false });
        f.render_widget(help, help_area);
    }
}

pub struct LogsDialog;

impl LogsDialog {
    pub fn render(f: &mut Frame, area: Rect, logs: &[String]) {
        let logs_area = LayoutManager::centered_rect(90, 80, area);
        f.render_widget(Clear, logs_area);

        let items: Vec<ListItem> = if logs.is_empty() {
            vec![ListItem::new(Line::from("No log entries yet"))]
        } else {
            logs.iter().map(|entry| ListItem::new(Line::from(entry.as_str()))).collect()
        };

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(DIALOG_TITLE_LOGS)
                    .title_alignment(Alignment::Center),
            )
            .style(Style::default().fg(Color::Gray));
        f.render_widget(list, logs_area);
    }
}
