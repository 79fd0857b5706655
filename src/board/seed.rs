//! Initial card data applied once at startup.

use super::{BoardError, ColumnId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Mapping from column id to the ordered texts of its initial cards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeedData(BTreeMap<ColumnId, Vec<String>>);

impl SeedData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_column<I, S>(mut self, column: impl Into<ColumnId>, texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.0.insert(column.into(), texts.into_iter().map(Into::into).collect());
        self
    }

    /// Load a JSON object of the form `{"todo": ["A", "B"], ...}`.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, BoardError> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ColumnId, &Vec<String>)> {
        self.0.iter()
    }

    pub fn columns(&self) -> impl Iterator<Item = &ColumnId> {
        self.0.keys()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sample cards shown on a fresh board.
    pub fn sample() -> Self {
        Self::new()
            .with_column(
                "todo",
                ["Welcome to Columnist!", "This is a card", "Drag a card to move it"],
            )
            .with_column(
                "progress",
                [
                    "Press + Add a card to write a new one",
                    "Drop cards between others to reorder",
                    "Use as many cards as you need",
                ],
            )
            .with_column("done", ["Click × to delete a card", "Press ? for help"])
    }
}
