use crate::board::{CardId, ColumnId, Point};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // Drag lifecycle
    StartDrag { card: CardId, pointer: Point },
    DragTo(Point),
    Drop(Point),
    CancelDrag,

    // Card operations
    DeleteCard(CardId),
    ShowAddCardForm(ColumnId),
    HideAddCardForm(ColumnId),
    SubmitAddCardForm(ColumnId),

    // UI operations
    ShowHelp(bool),
    ShowLogs(bool),
    CycleIconTheme,

    // App control
    Quit,
    None,
}
