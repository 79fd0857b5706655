//! Icon service for managing different icon themes
//!
//! This module provides a centralized way to manage the glyphs drawn on the board,
//! supporting different themes like emoji, Unicode, and ASCII fallbacks.

use serde::{Deserialize, Serialize};

/// Icon theme variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum IconTheme {
    /// Emoji icons (colorful, modern look)
    Emoji,
    /// Unicode symbols (clean, native look)
    #[default]
    Unicode,
    /// ASCII characters (maximum compatibility)
    Ascii,
}

/// Card affordance icons
#[derive(Debug, Clone)]
pub struct CardIcons {
    pub delete: &'static str,
    pub grip: &'static str,
}

/// Column and board chrome icons
#[derive(Debug, Clone)]
pub struct BoardIcons {
    pub add_card: &'static str,
    pub placeholder: &'static str,
    pub drop_target: &'static str,
    pub warning: &'static str,
}

/// Complete icon set for a specific theme
#[derive(Debug, Clone)]
pub struct IconSet {
    pub card: CardIcons,
    pub board: BoardIcons,
}

/// Icon service for managing themes and providing icons
#[derive(Debug, Clone, Default)]
pub struct IconService {
    current_theme: IconTheme,
}

impl IconService {
    /// Create a new icon service with the specified theme
    #[must_use]
    pub fn new(theme: IconTheme) -> Self {
        Self { current_theme: theme }
    }

    /// Get the current theme
    #[must_use]
    pub fn theme(&self) -> IconTheme {
        self.current_theme
    }

    /// Cycle to the next icon theme in the sequence: Ascii -> Unicode -> Emoji -> Ascii
    pub fn cycle_icon_theme(&mut self) {
        self.current_theme = match self.current_theme {
            IconTheme::Ascii => IconTheme::Unicode,
            IconTheme::Unicode => IconTheme::Emoji,
            IconTheme::Emoji => IconTheme::Ascii,
        };
    }

    /// Get the complete icon set for the current theme
    #[must_use]
    pub fn icons(&self) -> IconSet {
        match self.current_theme {
            IconTheme::Emoji => Self::emoji_icons(),
            IconTheme::Unicode => Self::unicode_icons(),
            IconTheme::Ascii => Self::ascii_icons(),
        }
    }

    fn emoji_icons() -> IconSet {
        IconSet {
            card: CardIcons {
                delete: "❌",
                grip: "✋",
            },
            board: BoardIcons {
                add_card: "➕",
                placeholder: "░",
                drop_target: "📥",
                warning: "⚠️",
            },
        }
    }

    fn unicode_icons() -> IconSet {
        IconSet {
            card: CardIcons {
                delete: "×",
                grip: "⠿",
            },
            board: BoardIcons {
                add_card: "+",
                placeholder: "░",
                drop_target: "▼",
                warning: "⚠",
            },
        }
    }

    fn ascii_icons() -> IconSet {
        IconSet {
            card: CardIcons { delete: "x", grip: "#" },
            board: BoardIcons {
                add_card: "+",
                placeholder: ".",
                drop_target: "v",
                warning: "!",
            },
        }
    }

    #[must_use]
    pub fn delete(&self) -> &'static str {
        self.icons().card.delete
    }

    #[must_use]
    pub fn grip(&self) -> &'static str {
        self.icons().card.grip
    }

    #[must_use]
    pub fn add_card(&self) -> &'static str {
        self.icons().board.add_card
    }

    #[must_use]
    pub fn placeholder(&self) -> &'static str {
        self.icons().board.placeholder
    }

    #[must_use]
    pub fn drop_target(&self) -> &'static str {
        self.icons().board.drop_target
    }

    #[must_use]
    pub fn warning(&self) -> &'static str {
        self.icons().board.warning
    }
}
