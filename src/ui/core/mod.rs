//! Core UI functionality for the Columnist application.
//!
//! This module contains the building blocks the board UI is assembled from:
//!
//! - [`actions`] - Action definitions produced by input handling
//! - [`component`] - Base component trait and rendering abstraction
//! - [`event_handler`] - Terminal event polling for the async loop
//!
//! Input events are turned into [`Action`]s by components, and the
//! application component applies those actions to the board.

pub mod actions;
pub mod component;
pub mod event_handler;

pub use actions::Action;
pub use component::Component;
pub use event_handler::{EventHandler, EventType};
