//! Layout management and calculations
//!
//! [`BoardLayout`] is the on-screen projection of the board: one rectangle per
//! column, per visible card, for the placeholder and for each column's
//! add-card footer. Pointer handling hit-tests against it and the drag logic
//! reads card geometry from it.

use crate::board::{Board, CardBounds, CardId, Column, ColumnId, InsertionPoint};
use crate::constants::{ADD_CARD_FORM_HEIGHT, ADD_CARD_TRIGGER_HEIGHT, DELETE_HIT_WIDTH};
use ratatui::layout::{Constraint, Direction, Layout, Margin, Position, Rect};

/// Manages layout calculations and constraints for the UI
pub struct LayoutManager;

impl LayoutManager {
    /// Split the screen into the board area and a one-line status bar below it
    #[must_use]
    pub fn main_layout(area: Rect) -> (Rect, Rect) {
        let board_height = area.height.saturating_sub(1);
        let board_area = Rect::new(area.x, area.y, area.width, board_height);
        let status_area = Rect::new(area.x, area.y + board_height, area.width, area.height - board_height);
        (board_area, status_area)
    }

    /// Lay out `count` columns side by side, each at least `min_width` wide.
    ///
    /// Columns that do not fit get an empty rectangle at the right edge.
    #[must_use]
    pub fn board_columns(area: Rect, count: usize, min_width: u16) -> Vec<Rect> {
        if count == 0 {
            return Vec::new();
        }

        let count16 = u16::try_from(count).unwrap_or(u16::MAX);
        let width = (area.width / count16).max(min_width);
        let right = area.right();

        (0..count16)
            .map(|i| {
                let x = area.x.saturating_add(width.saturating_mul(i));
                if x >= right {
                    return Rect::new(right, area.y, 0, area.height);
                }
                // The last column absorbs the rounding remainder
                let w = if i + 1 == count16 { right - x } else { width.min(right - x) };
                Rect::new(x, area.y, w, area.height)
            })
            .collect()
    }

    /// Calculate a centered rectangle within the given area
    #[must_use]
    pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }
}

/// Greedy word wrap on explicit line breaks and spaces. Words longer than
/// `width` are split.
pub fn wrap_text(text: &str, width: u16) -> Vec<String> {
    let width = usize::from(width.max(1));
    let mut lines = Vec::new();

    for raw in text.split('\n') {
        let mut line = String::new();
        let mut len = 0;

        for word in raw.split_whitespace() {
            let word_len = word.chars().count();
            if len > 0 && len + 1 + word_len > width {
                lines.push(std::mem::take(&mut line));
                len = 0;
            }
            if word_len > width {
                let chars: Vec<char> = word.chars().collect();
                for chunk in chars.chunks(width) {
                    if len > 0 {
                        lines.push(std::mem::take(&mut line));
                    }
                    line = chunk.iter().collect();
                    len = chunk.len();
                }
                continue;
            }
            if len > 0 {
                line.push(' ');
                len += 1;
            }
            line.push_str(word);
            len += word_len;
        }
        lines.push(line);
    }

    lines
}

/// Rows a card occupies at the given outer width, borders included.
pub fn card_height(text: &str, width: u16) -> u16 {
    let lines = wrap_text(text, width.saturating_sub(2)).len();
    u16::try_from(lines).unwrap_or(u16::MAX).saturating_add(2)
}

#[derive(Debug, Clone, PartialEq)]
pub struct CardArea {
    pub card: CardId,
    pub rect: Rect,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ColumnArea {
    pub column: ColumnId,
    pub area: Rect,
    /// Cards with at least one visible row
    pub cards: Vec<CardArea>,
    /// Unclipped geometry of every card except the dragged one, including
    /// cards pushed below the column's visible area
    pub bounds: Vec<CardBounds>,
    pub placeholder: Option<Rect>,
    /// Add-card trigger line, or the open form
    pub footer: Rect,
    pub form_open: bool,
}

/// What lies under a screen cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HitTarget {
    None,
    Column(ColumnId),
    Card { card: CardId, column: ColumnId },
    DeleteCard { card: CardId, column: ColumnId },
    AddCardTrigger(ColumnId),
    AddCardForm(ColumnId),
}

impl HitTarget {
    /// The column containing the target, if any.
    pub fn column(&self) -> Option<&ColumnId> {
        match self {
            HitTarget::None => None,
            HitTarget::Column(column)
            | HitTarget::AddCardTrigger(column)
            | HitTarget::AddCardForm(column)
            | HitTarget::Card { column, .. }
            | HitTarget::DeleteCard { column, .. } => Some(column),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoardLayout {
    pub columns: Vec<ColumnArea>,
}

/// Allocate `height` rows at `*y`, clipped to `bottom`. Always advances `*y`.
fn allocate(y: &mut u16, bottom: u16, x: u16, width: u16, height: u16) -> Option<Rect> {
    let top = *y;
    *y = y.saturating_add(height);
    if top >= bottom || height == 0 {
        return None;
    }
    Some(Rect::new(x, top, width, height.min(bottom - top)))
}

impl BoardLayout {
    pub fn compute(board: &Board, area: Rect, min_width: u16) -> Self {
        let rects = LayoutManager::board_columns(area, board.columns().len(), min_width);
        let columns = board
            .columns()
            .iter()
            .zip(rects)
            .map(|(column, rect)| Self::compute_column(board, column, rect))
            .collect();
        Self { columns }
    }

    fn compute_column(board: &Board, column: &Column, rect: Rect) -> ColumnArea {
        let inner = rect.inner(Margin::new(1, 1));
        let footer_height = if column.form.open {
            ADD_CARD_FORM_HEIGHT
        } else {
            ADD_CARD_TRIGGER_HEIGHT
        }
        .min(inner.height);
        let footer = Rect::new(inner.x, inner.bottom() - footer_height, inner.width, footer_height);
        let bottom = footer.y;

        // Placeholder position and height when it sits in this column
        let placeholder_at = board.session().and_then(|session| {
            let slot = session.placeholder.slot.as_ref()?;
            (&slot.column == column.id()).then(|| (slot.at, session.placeholder.height.round().max(1.0) as u16))
        });

        let mut y = inner.y;
        let mut cards = Vec::new();
        let mut bounds = Vec::new();
        let mut placeholder = None;
        let mut placed = false;

        for &id in column.cards() {
            // The dragged card is represented by its avatar and the placeholder
            if board.is_dragging(id) {
                continue;
            }
            if let Some((InsertionPoint::Before(anchor), height)) = placeholder_at {
                if anchor == id {
                    placeholder = allocate(&mut y, bottom, inner.x, inner.width, height);
                    placed = true;
                }
            }
            let Some(card) = board.card(id) else {
                continue;
            };
            let height = card_height(card.text(), inner.width);
            bounds.push(CardBounds::new(id, f64::from(y), f64::from(height)).with_left(f64::from(inner.x)));
            if let Some(rect) = allocate(&mut y, bottom, inner.x, inner.width, height) {
                cards.push(CardArea { card: id, rect });
            }
        }

        if let Some((_, height)) = placeholder_at {
            if !placed {
                placeholder = allocate(&mut y, bottom, inner.x, inner.width, height);
            }
        }

        ColumnArea {
            column: column.id().clone(),
            area: rect,
            cards,
            bounds,
            placeholder,
            footer,
            form_open: column.form.open,
        }
    }

    pub fn column_area(&self, column: &ColumnId) -> Option<&ColumnArea> {
        self.columns.iter().find(|c| &c.column == column)
    }

    pub fn card_rect(&self, card: CardId) -> Option<Rect> {
        self.columns
            .iter()
            .flat_map(|c| c.cards.iter())
            .find(|c| c.card == card)
            .map(|c| c.rect)
    }

    /// Geometry of every laid-out card of `column`, top to bottom, whether
    /// visible or not.
    pub fn card_bounds(&self, column: &ColumnId) -> Vec<CardBounds> {
        self.column_area(column)
            .map(|area| area.bounds.clone())
            .unwrap_or_default()
    }

    pub fn hit_test(&self, x: u16, y: u16) -> HitTarget {
        let pos = Position::new(x, y);
        let Some(column) = self.columns.iter().find(|c| c.area.contains(pos)) else {
            return HitTarget::None;
        };
        let id = column.column.clone();

        if let Some(card) = column.cards.iter().find(|c| c.rect.contains(pos)) {
            let delete_from = card.rect.right().saturating_sub(DELETE_HIT_WIDTH);
            return if y == card.rect.y && x >= delete_from {
                HitTarget::DeleteCard {
                    card: card.card,
                    column: id,
                }
            } else {
                HitTarget::Card {
                    card: card.card,
                    column: id,
                }
            };
        }

        if column.footer.contains(pos) {
            return if column.form_open {
                HitTarget::AddCardForm(id)
            } else {
                HitTarget::AddCardTrigger(id)
            };
        }

        HitTarget::Column(id)
    }
}
