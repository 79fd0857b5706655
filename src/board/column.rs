//! Columns and their inline add-card forms.

use super::CardId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable per-column identifier (e.g. `todo`, `progress`, `done`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnId(String);

impl ColumnId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ColumnId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Draft state of a column's inline add-card form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AddCardForm {
    pub open: bool,
    pub text: String,
}

impl AddCardForm {
    pub fn show(&mut self) {
        self.open = true;
    }

    /// Close the form and discard the draft.
    pub fn hide(&mut self) {
        self.open = false;
        self.text.clear();
    }
}

/// A fixed container holding an ordered sequence of cards.
#[derive(Debug, Clone)]
pub struct Column {
    id: ColumnId,
    pub title: String,
    pub(super) cards: Vec<CardId>,
    /// Set while a drag hovers over the column.
    pub highlighted: bool,
    pub form: AddCardForm,
}

impl Column {
    pub fn new(id: ColumnId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            cards: Vec::new(),
            highlighted: false,
            form: AddCardForm::default(),
        }
    }

    pub fn id(&self) -> &ColumnId {
        &self.id
    }

    /// Cards in display order.
    pub fn cards(&self) -> &[CardId] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn contains(&self, card: CardId) -> bool {
        self.cards.contains(&card)
    }

    pub fn position(&self, card: CardId) -> Option<usize> {
        self.cards.iter().position(|id| *id == card)
    }

    /// Remove a card, returning the index it held.
    pub(super) fn remove(&mut self, card: CardId) -> Option<usize> {
        let index = self.position(card)?;
        self.cards.remove(index);
        Some(index)
    }
}
