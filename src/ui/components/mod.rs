//! Reusable UI components

pub mod add_card_form;
pub mod card_component;
pub mod column_component;
pub mod dialogs;
pub mod status_bar;

// Component exports
pub use add_card_form::AddCardInput;
pub use card_component::CardComponent;
pub use column_component::ColumnComponent;
pub use dialogs::{HelpDialog, LogsDialog};
pub use status_bar::StatusBar;
