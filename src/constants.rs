//! Constants used throughout the application
//!
//! This module centralizes magic strings, UI text, and other constant values
//! to improve maintainability and consistency.

// Status Messages
pub const STATUS_CARD_CREATED: &str = "✅ Card added";
pub const STATUS_CARD_DELETED: &str = "✅ Card deleted";
pub const STATUS_CARD_MOVED: &str = "✅ Card moved";
pub const STATUS_DRAG_CANCELLED: &str = "Drag cancelled";
pub const STATUS_DRAGGING: &str = "Dragging: release over a column to drop, Esc to cancel";
pub const STATUS_HINTS: &str = "Drag cards with the mouse | click + to add | × to delete | ? help | q quit";

// UI Text
pub const ADD_CARD_LABEL: &str = "Add a card";
pub const ADD_CARD_FORM_TITLE: &str = "New card";
pub const ADD_CARD_FORM_HINT: &str = "Enter: add  Shift+Enter: new line  Esc: cancel";
pub const DIALOG_TITLE_HELP: &str = "Help - Press 'Esc' or '?' to close";
pub const DIALOG_TITLE_LOGS: &str = "🔍 Logs - Press 'Esc' or 'G' to close";

// Config Messages
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";
pub const CONFIG_FILE_NAME: &str = "columnist.toml";
pub const APP_DIR_NAME: &str = "columnist";
pub const LOG_FILE_NAME: &str = "columnist.log";

// UI Layout Constants
/// Minimum column width in cells
pub const COLUMN_MIN_WIDTH_LOWER: u16 = 10;
/// Maximum configurable minimum column width in cells
pub const COLUMN_MIN_WIDTH_UPPER: u16 = 80;
/// Default minimum column width in cells
pub const COLUMN_DEFAULT_MIN_WIDTH: u16 = 20;
/// Largest accepted drag threshold in cells
pub const DRAG_THRESHOLD_MAX: u16 = 10;
/// Default drag threshold in cells
pub const DRAG_THRESHOLD_DEFAULT: u16 = 1;
/// Height of the add-card trigger line below a column's cards
pub const ADD_CARD_TRIGGER_HEIGHT: u16 = 1;
/// Height of an open add-card form (borders included)
pub const ADD_CARD_FORM_HEIGHT: u16 = 5;
/// Cells at the right of a card's top border that activate delete
pub const DELETE_HIT_WIDTH: u16 = 4;
