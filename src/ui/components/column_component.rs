//! Column rendering: title, cards, placeholder and add-card footer.

use super::{AddCardInput, CardComponent};
use crate::board::{Board, Column};
use crate::constants::ADD_CARD_LABEL;
use crate::icons::IconService;
use crate::ui::layout::ColumnArea;
use ratatui::{
    style::{Color, Modifier, Style},
    widgets::{block::BorderType, Block, Borders, Paragraph},
    Frame,
};

pub struct ColumnComponent;

impl ColumnComponent {
    pub fn render(f: &mut Frame, board: &Board, column: &Column, area: &ColumnArea, icons: &IconService) {
        if area.area.width == 0 {
            return;
        }

        let (border_style, title) = if column.highlighted {
            (
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                format!(" {} {} ({}) ", icons.drop_target(), column.title, column.len()),
            )
        } else {
            (
                Style::default().fg(Color::Blue),
                format!(" {} ({}) ", column.title, column.len()),
            )
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(title);
        f.render_widget(block, area.area);

        for card_area in &area.cards {
            if let Some(card) = board.card(card_area.card) {
                CardComponent::render(f, card, card_area.rect, icons);
            }
        }

        if let Some(rect) = area.placeholder {
            CardComponent::render_placeholder(f, rect, icons);
        }

        if area.form_open {
            AddCardInput::render(f, area.footer, &column.form);
        } else if area.footer.height > 0 {
            let trigger = Paragraph::new(format!("{} {}", icons.add_card(), ADD_CARD_LABEL))
                .style(Style::default().fg(Color::DarkGray));
            f.render_widget(trigger, area.footer);
        }
    }
}
