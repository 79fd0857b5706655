//! Board model: columns, cards, the drag lifecycle and card creation.
//!
//! The board is the single owner of every column and card and of the one
//! active [`DragSession`]. Rendering is a projection of this state: columns
//! hold ordered lists of [`CardId`]s, and the placeholder is a marker stored
//! in the session rather than an element of any column.
//!
//! Drag lifecycle:
//!
//! 1. [`Board::handle_drag_start`] records the dragged card, the pointer
//!    offset and a placeholder sized like the card.
//! 2. [`Board::handle_drag_over`] runs on every pointer move and repositions
//!    the placeholder using [`find_insertion_point`].
//! 3. [`Board::handle_drop`] moves the card to the placeholder's position.
//! 4. [`Board::handle_drag_end`] always runs last and clears the session.
//!
//! [`Board::cleanup_drag`] is idempotent, so drop and drag-end may both call it.

pub mod card;
pub mod column;
pub mod drag;
pub mod error;
pub mod seed;

pub use card::{Card, CardEvent, CardId, DragImage};
pub use column::{AddCardForm, Column, ColumnId};
pub use drag::{
    find_insertion_point, insertion_index, CardBounds, DragSession, InsertionPoint, Placeholder, PlaceholderSlot,
    Point,
};
pub use error::BoardError;
pub use seed::SeedData;

use log::{debug, info, warn};
use std::collections::{HashMap, HashSet};

/// Result of a successful drop.
#[derive(Debug, Clone, PartialEq)]
pub struct DropOutcome {
    pub card: CardId,
    pub from: ColumnId,
    pub to: ColumnId,
    pub index: usize,
}

#[derive(Debug, Clone)]
pub struct Board {
    columns: Vec<Column>,
    cards: HashMap<CardId, Card>,
    session: Option<DragSession>,
}

impl Board {
    /// Build a board from its fixed set of columns.
    pub fn new(columns: Vec<Column>) -> Result<Self, BoardError> {
        if columns.is_empty() {
            return Err(BoardError::NoColumns);
        }

        let mut seen = HashSet::new();
        for column in &columns {
            if column.id().as_str().trim().is_empty() {
                return Err(BoardError::EmptyColumnId);
            }
            if !seen.insert(column.id().clone()) {
                return Err(BoardError::DuplicateColumn(column.id().clone()));
            }
        }

        Ok(Self {
            columns,
            cards: HashMap::new(),
            session: None,
        })
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, id: &ColumnId) -> Option<&Column> {
        self.columns.iter().find(|c| c.id() == id)
    }

    fn column_mut(&mut self, id: &ColumnId) -> Result<&mut Column, BoardError> {
        self.columns
            .iter_mut()
            .find(|c| c.id() == id)
            .ok_or_else(|| BoardError::UnknownColumn(id.clone()))
    }

    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.cards.get(&id)
    }

    /// The column that currently owns `card`.
    pub fn column_of(&self, card: CardId) -> Option<&ColumnId> {
        self.columns.iter().find(|c| c.contains(card)).map(Column::id)
    }

    /// Card texts of a column in display order.
    pub fn card_texts(&self, column: &ColumnId) -> Vec<&str> {
        self.column(column)
            .map(|c| c.cards().iter().filter_map(|id| self.cards.get(id)).map(Card::text).collect())
            .unwrap_or_default()
    }

    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    pub fn is_drag_active(&self) -> bool {
        self.session.is_some()
    }

    /// Whether `card` carries the "dragging" marker.
    pub fn is_dragging(&self, card: CardId) -> bool {
        self.session.as_ref().is_some_and(|s| s.card == card)
    }

    /// Create a card at the end of `column`. Empty or whitespace-only text is
    /// ignored and yields `Ok(None)`.
    pub fn create_card(&mut self, text: &str, column: &ColumnId) -> Result<Option<CardId>, BoardError> {
        if text.trim().is_empty() {
            debug!("Ignoring empty card text for column {}", column);
            return Ok(None);
        }

        let card = Card::new(text);
        let id = card.id();
        self.column_mut(column)?.cards.push(id);
        self.cards.insert(id, card);
        debug!("Created card {} in column {}", id, column);
        Ok(Some(id))
    }

    /// Remove a card from its column. Returns `false` if it was already gone.
    pub fn delete_card(&mut self, card: CardId) -> bool {
        if self.cards.remove(&card).is_none() {
            return false;
        }
        if self.is_dragging(card) {
            self.cleanup_drag();
        }
        for column in &mut self.columns {
            if column.remove(card).is_some() {
                info!("Deleted card {} from column {}", card, column.id());
                break;
            }
        }
        true
    }

    /// Apply initial card data. Columns missing from the board are skipped.
    /// Returns the number of cards created.
    pub fn seed(&mut self, data: &SeedData) -> usize {
        let mut created = 0;
        for (column, texts) in data.iter() {
            if self.column(column).is_none() {
                warn!("Seed data refers to unknown column {}, skipping", column);
                continue;
            }
            for text in texts {
                if let Ok(Some(_)) = self.create_card(text, column) {
                    created += 1;
                }
            }
        }
        info!("Seeded board with {} cards", created);
        created
    }

    pub fn form(&self, column: &ColumnId) -> Option<&AddCardForm> {
        self.column(column).map(|c| &c.form)
    }

    pub fn form_mut(&mut self, column: &ColumnId) -> Result<&mut AddCardForm, BoardError> {
        Ok(&mut self.column_mut(column)?.form)
    }

    /// Column whose add-card form is currently open, if any.
    pub fn open_form(&self) -> Option<&ColumnId> {
        self.columns.iter().find(|c| c.form.open).map(Column::id)
    }

    pub fn show_add_card_form(&mut self, column: &ColumnId) -> Result<(), BoardError> {
        self.column_mut(column)?.form.show();
        Ok(())
    }

    pub fn hide_add_card_form(&mut self, column: &ColumnId) -> Result<(), BoardError> {
        self.column_mut(column)?.form.hide();
        Ok(())
    }

    /// Create a card from the form's trimmed draft, then close the form.
    pub fn submit_add_card_form(&mut self, column: &ColumnId) -> Result<Option<CardId>, BoardError> {
        let text = self.column_mut(column)?.form.text.trim().to_string();
        let created = self.create_card(&text, column)?;
        self.hide_add_card_form(column)?;
        Ok(created)
    }

    /// Route a card message to the matching handler.
    pub fn dispatch(&mut self, event: CardEvent) -> Result<(), BoardError> {
        match event {
            CardEvent::DragBegin { card, pointer, bounds } => self.handle_drag_start(card, pointer, bounds),
            CardEvent::DragEnd { card } => {
                self.handle_drag_end(card);
                Ok(())
            }
            CardEvent::Delete { card } => {
                self.delete_card(card);
                Ok(())
            }
        }
    }

    /// Begin a drag session for `card`.
    ///
    /// A session left over from an earlier gesture is cleared first.
    pub fn handle_drag_start(&mut self, card: CardId, pointer: Point, bounds: CardBounds) -> Result<(), BoardError> {
        let source = self.column_of(card).cloned().ok_or(BoardError::UnknownCard(card))?;

        if let Some(stale) = self.session.as_ref().map(|s| s.card) {
            warn!("Drag of card {} started while card {} was still dragging", card, stale);
            self.cleanup_drag();
        }

        let offset = Point::new(pointer.x - bounds.left, pointer.y - bounds.top);
        info!("Drag started: card {} from column {}", card, source);
        self.session = Some(DragSession {
            card,
            source,
            offset,
            placeholder: Placeholder::new(bounds.height),
        });
        Ok(())
    }

    /// Reposition the placeholder for a pointer over `column`.
    ///
    /// `bounds` is the rendered geometry of that column's cards. Returns the
    /// chosen insertion point, or `None` when no drag is active.
    pub fn handle_drag_over(
        &mut self,
        pointer: Point,
        column: &ColumnId,
        bounds: &[CardBounds],
    ) -> Result<Option<InsertionPoint>, BoardError> {
        let Some(session) = self.session.as_mut() else {
            return Ok(None);
        };
        if !self.columns.iter().any(|c| c.id() == column) {
            return Err(BoardError::UnknownColumn(column.clone()));
        }

        let at = find_insertion_point(bounds, Some(session.card), pointer.y);
        session.placeholder.slot = Some(PlaceholderSlot {
            column: column.clone(),
            at,
        });
        Ok(Some(at))
    }

    pub fn handle_drag_enter(&mut self, column: &ColumnId) -> Result<(), BoardError> {
        self.column_mut(column)?.highlighted = true;
        Ok(())
    }

    /// Clear the highlight of `column` unless the pointer moved to something
    /// inside it. `entered` is the column that contains the new target.
    pub fn handle_drag_leave(&mut self, column: &ColumnId, entered: Option<&ColumnId>) -> Result<(), BoardError> {
        let target = self.column_mut(column)?;
        if entered != Some(column) {
            target.highlighted = false;
        }
        Ok(())
    }

    /// Move the dragged card to the placeholder's position in `column`.
    ///
    /// When the placeholder is not in `column` the card is appended. The
    /// session is cleared afterwards.
    pub fn handle_drop(&mut self, column: &ColumnId) -> Result<Option<DropOutcome>, BoardError> {
        let Some(session) = self.session.as_ref() else {
            return Ok(None);
        };
        if self.column(column).is_none() {
            return Err(BoardError::UnknownColumn(column.clone()));
        }

        let card = session.card;
        let at = match &session.placeholder.slot {
            Some(slot) if session.placeholder.is_in(column) => slot.at,
            _ => InsertionPoint::End,
        };

        let Some(from) = self.column_of(card).cloned() else {
            self.cleanup_drag();
            return Err(BoardError::UnknownCard(card));
        };
        self.column_mut(&from)?.remove(card);

        let target = self.column_mut(column)?;
        let index = insertion_index(&target.cards, None, at);
        target.cards.insert(index, card);

        info!("Dropped card {} from column {} into column {} at {}", card, from, column, index);
        self.cleanup_drag();

        Ok(Some(DropOutcome {
            card,
            from,
            to: column.clone(),
            index,
        }))
    }

    /// End of a drag gesture, with or without a drop.
    pub fn handle_drag_end(&mut self, card: CardId) {
        debug!("Drag ended for card {}", card);
        self.cleanup_drag();
    }

    /// Clear the session, the placeholder and all drag highlighting.
    pub fn cleanup_drag(&mut self) {
        self.session = None;
        for column in &mut self.columns {
            column.highlighted = false;
        }
    }
}
