//! Error types for board operations.

use super::{CardId, ColumnId};

/// Errors raised when an operation refers to board structure that does not exist
/// or when a board is built from invalid definitions.
#[derive(Debug, thiserror::Error)]
pub enum BoardError {
    #[error("Column not found: {0}")]
    UnknownColumn(ColumnId),

    #[error("Card not found: {0}")]
    UnknownCard(CardId),

    #[error("Duplicate column id: {0}")]
    DuplicateColumn(ColumnId),

    #[error("Column id cannot be empty")]
    EmptyColumnId,

    #[error("A board needs at least one column")]
    NoColumns,

    #[error("Failed to read seed file: {0}")]
    SeedIo(#[from] std::io::Error),

    #[error("Failed to parse seed file: {0}")]
    SeedParse(#[from] serde_json::Error),
}
