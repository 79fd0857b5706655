//! Columnist - a kanban board for the terminal
//!
//! Columns hold cards that can be added, deleted and reordered by dragging
//! them with the mouse. The board model is independent of the terminal and
//! can be driven directly, which is how the drag-and-drop behavior is tested.
//!
//! # Modules
//!
//! * [`board`] - Cards, columns, the drag session and the reorder algorithm
//! * [`config`] - Application configuration management
//! * [`ui`] - Terminal user interface components

/// Board model: cards, columns and drag-and-drop
pub mod board;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Icon definitions for visual representation in the TUI
pub mod icons;

/// Logging utilities for debugging and error tracking
pub mod logger;

/// Terminal user interface components and rendering
pub mod ui;

pub use board::{Board, BoardError, Card, CardId, Column, ColumnId, SeedData};
