//! Drag session state and the insertion-point algorithm.
//!
//! The insertion point is computed from card geometry alone: for every card
//! except the dragged one, the signed distance from the pointer to the card's
//! vertical midpoint is `pointer_y - (top + height / 2)`. Among cards whose
//! midpoint lies below the pointer (negative distance), the one closest to
//! the pointer wins and the placeholder goes right before it. When the
//! pointer is below every midpoint the placeholder goes to the end.
//!
//! The scan is linear in the number of cards of the hovered column, which
//! keeps per-move cost bounded while pointer events arrive at high rate.

use super::{CardId, ColumnId};

/// Pointer or offset position in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Vertical extent of a rendered card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardBounds {
    pub card: CardId,
    pub left: f64,
    pub top: f64,
    pub height: f64,
}

impl CardBounds {
    pub fn new(card: CardId, top: f64, height: f64) -> Self {
        Self {
            card,
            left: 0.0,
            top,
            height,
        }
    }

    pub fn with_left(mut self, left: f64) -> Self {
        self.left = left;
        self
    }

    pub fn midpoint(&self) -> f64 {
        self.top + self.height / 2.0
    }
}

/// Where a dropped card would land within a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertionPoint {
    /// Immediately before the given card.
    Before(CardId),
    /// After every card.
    End,
}

/// Pick the insertion point for a pointer at `pointer_y` over `cards`,
/// ignoring the card currently being dragged.
pub fn find_insertion_point(cards: &[CardBounds], dragging: Option<CardId>, pointer_y: f64) -> InsertionPoint {
    let mut closest: Option<(f64, CardId)> = None;

    for bounds in cards.iter().filter(|b| Some(b.card) != dragging) {
        let offset = pointer_y - bounds.midpoint();
        if offset < 0.0 && closest.map_or(true, |(best, _)| offset > best) {
            closest = Some((offset, bounds.card));
        }
    }

    match closest {
        Some((_, card)) => InsertionPoint::Before(card),
        None => InsertionPoint::End,
    }
}

/// Resolve an insertion point to an index into `cards`, skipping `dragging`.
///
/// Anchors that are not in the list fall back to the end.
pub fn insertion_index(cards: &[CardId], dragging: Option<CardId>, at: InsertionPoint) -> usize {
    let mut remaining = cards.iter().filter(|id| Some(**id) != dragging);
    match at {
        InsertionPoint::Before(anchor) => {
            let mut index = 0;
            for id in remaining.by_ref() {
                if *id == anchor {
                    return index;
                }
                index += 1;
            }
            index
        }
        InsertionPoint::End => remaining.count(),
    }
}

/// Where the placeholder currently sits.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceholderSlot {
    pub column: ColumnId,
    pub at: InsertionPoint,
}

/// Position marker sized like the dragged card. Never part of a column's
/// card sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct Placeholder {
    pub height: f64,
    pub slot: Option<PlaceholderSlot>,
}

impl Placeholder {
    pub fn new(height: f64) -> Self {
        Self { height, slot: None }
    }

    pub fn is_in(&self, column: &ColumnId) -> bool {
        self.slot.as_ref().is_some_and(|slot| &slot.column == column)
    }
}

/// State of the single active drag gesture.
#[derive(Debug, Clone, PartialEq)]
pub struct DragSession {
    pub card: CardId,
    pub source: ColumnId,
    /// Pointer position relative to the card's top-left corner. Only used to
    /// align the drag avatar.
    pub offset: Point,
    pub placeholder: Placeholder,
}

impl DragSession {
    /// Where the avatar's top-left corner goes for a pointer at `pointer`.
    pub fn avatar_origin(&self, pointer: Point) -> Point {
        Point::new(pointer.x - self.offset.x, pointer.y - self.offset.y)
    }
}
