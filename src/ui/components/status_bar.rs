//! Status bar component

use crate::constants::{STATUS_DRAGGING, STATUS_HINTS};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Block, Paragraph},
    Frame,
};

/// Status bar component
pub struct StatusBar;

impl StatusBar {
    /// Render the last status message, or the key hints when there is none
    pub fn render(f: &mut Frame, area: Rect, message: Option<&str>, dragging: bool) {
        let (status_text, status_color) = match message {
            _ if dragging => (STATUS_DRAGGING, Color::Yellow),
            Some(message) => (message, Color::Green),
            None => (STATUS_HINTS, Color::Gray),
        };

        let status_bar = Paragraph::new(status_text)
            .block(Block::default())
            .alignment(Alignment::Center)
            .style(Style::default().fg(status_color));

        f.render_widget(status_bar, area);
    }
}
