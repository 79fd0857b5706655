//! Card rendering: cards in their column and the drag avatar.

use crate::board::{Card, DragImage};
use crate::icons::IconService;
use crate::ui::layout::wrap_text;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{block::BorderType, Block, Borders, Clear, Paragraph},
    Frame,
};

pub struct CardComponent;

impl CardComponent {
    /// Render a card with its delete glyph in the top-right border
    pub fn render(f: &mut Frame, card: &Card, rect: Rect, icons: &IconService) {
        let lines: Vec<Line> = wrap_text(card.text(), rect.width.saturating_sub(2))
            .into_iter()
            .map(Line::from)
            .collect();

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Gray))
            .title_top(Line::from(format!(" {} ", icons.delete())).right_aligned());

        f.render_widget(Paragraph::new(lines).block(block).style(Style::default().fg(Color::White)), rect);
    }

    /// Render the semi-transparent clone following the pointer.
    ///
    /// `x` and `y` may lie partly off-screen; the avatar is clipped to `bounds`.
    pub fn render_avatar(
        f: &mut Frame,
        image: &DragImage,
        x: i32,
        y: i32,
        height: u16,
        bounds: Rect,
        icons: &IconService,
    ) {
        let left = x.max(i32::from(bounds.x));
        let top = y.max(i32::from(bounds.y));
        let right = (x + i32::from(image.width)).min(i32::from(bounds.right()));
        let bottom = (y + i32::from(height)).min(i32::from(bounds.bottom()));
        if right <= left || bottom <= top {
            return;
        }

        // Bounded by `bounds`, so the narrowing casts cannot overflow
        let rect = Rect::new(left as u16, top as u16, (right - left) as u16, (bottom - top) as u16);

        let mut style = Style::default().fg(Color::Cyan);
        if image.dimmed {
            style = style.add_modifier(Modifier::DIM);
        }

        let lines: Vec<Line> = wrap_text(&image.text, image.width.saturating_sub(2))
            .into_iter()
            .map(Line::from)
            .collect();

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .border_style(style)
            .title_top(Line::from(format!(" {} ", icons.grip())).left_aligned());

        f.render_widget(Clear, rect);
        f.render_widget(Paragraph::new(lines).block(block).style(style), rect);
    }

    /// Render the landing marker of an active drag
    pub fn render_placeholder(f: &mut Frame, rect: Rect, icons: &IconService) {
        let fill = icons.placeholder().repeat(usize::from(rect.width.saturating_sub(2)));
        let lines: Vec<Line> = (0..rect.height.saturating_sub(2)).map(|_| Line::from(fill.clone())).collect();

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Plain)
            .border_style(Style::default().fg(Color::DarkGray));

        f.render_widget(
            Paragraph::new(lines).block(block).style(Style::default().fg(Color::DarkGray)),
            rect,
        );
    }
}
