//! Cards: the unit of drag-and-drop.

use super::drag::{CardBounds, Point};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Stable identity of a card, independent of where it sits on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(Uuid);

impl CardId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for CardId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Messages a card sends to the board that owns it.
#[derive(Debug, Clone, PartialEq)]
pub enum CardEvent {
    /// The user started dragging the card. `bounds` is the card's current
    /// on-screen box, used to compute the pointer offset.
    DragBegin {
        card: CardId,
        pointer: Point,
        bounds: CardBounds,
    },
    /// The drag gesture ended, whether or not a drop happened.
    DragEnd { card: CardId },
    /// The delete affordance was activated.
    Delete { card: CardId },
}

/// Cursor-following avatar shown while a card is dragged.
///
/// It only describes what to draw; it never belongs to a column.
#[derive(Debug, Clone, PartialEq)]
pub struct DragImage {
    pub text: String,
    pub width: u16,
    pub dimmed: bool,
}

/// A draggable unit of text with a delete affordance.
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    id: CardId,
    text: String,
}

impl Card {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: CardId::new(),
            text: text.into(),
        }
    }

    pub fn id(&self) -> CardId {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Report this card as the dragged entity.
    pub fn on_drag_start(&self, pointer: Point, bounds: CardBounds) -> CardEvent {
        CardEvent::DragBegin {
            card: self.id,
            pointer,
            bounds,
        }
    }

    pub fn on_drag_end(&self) -> CardEvent {
        CardEvent::DragEnd { card: self.id }
    }

    pub fn on_delete(&self) -> CardEvent {
        CardEvent::Delete { card: self.id }
    }

    /// Build the semi-transparent clone that follows the pointer, sized to the
    /// card's current width.
    pub fn drag_image(&self, width: u16) -> DragImage {
        DragImage {
            text: self.text.clone(),
            width,
            dimmed: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cards_get_distinct_ids() {
        let a = Card::new("A");
        let b = Card::new("A");
        assert_ne!(a.id(), b.id());
        assert_eq!(a.text(), b.text());
    }

    #[test]
    fn test_drag_messages_carry_card_id() {
        let card = Card::new("A");
        let bounds = CardBounds::new(card.id(), 0.0, 3.0);
        match card.on_drag_start(Point::new(1.0, 1.0), bounds) {
            CardEvent::DragBegin { card: id, .. } => assert_eq!(id, card.id()),
            other => panic!("unexpected event {other:?}"),
        }
        assert_eq!(card.on_drag_end(), CardEvent::DragEnd { card: card.id() });
    }

    #[test]
    fn test_drag_image_copies_text() {
        let card = Card::new("line one\nline two");
        let image = card.drag_image(24);
        assert_eq!(image.text, card.text());
        assert_eq!(image.width, 24);
        assert!(image.dimmed);
    }
}
