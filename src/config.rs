//! Configuration management for Columnist
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::board::{Column, ColumnId, SeedData};
use crate::constants::{
    APP_DIR_NAME, COLUMN_DEFAULT_MIN_WIDTH, COLUMN_MIN_WIDTH_LOWER, COLUMN_MIN_WIDTH_UPPER, CONFIG_FILE_NAME,
    CONFIG_GENERATED, DRAG_THRESHOLD_DEFAULT, DRAG_THRESHOLD_MAX,
};
use crate::icons::IconTheme;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub ui: UiConfig,
    pub logging: LoggingConfig,
    pub board: BoardConfig,
    /// Initial cards per column id
    pub seed: SeedData,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Enable mouse support (required for drag-and-drop)
    pub mouse_enabled: bool,
    /// Minimum width of a column in cells
    pub column_min_width: u16,
    /// Cells the pointer must travel with the button held before a drag starts
    pub drag_threshold: u16,
    /// Glyph theme
    pub icon_theme: IconTheme,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    /// Enable logging to a file
    pub enabled: bool,
}

/// Board layout configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Optional JSON file with seed data, used instead of `[seed]`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed_file: Option<PathBuf>,
    /// Columns in display order
    pub columns: Vec<ColumnConfig>,
}

/// A single column definition
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ColumnConfig {
    pub id: String,
    pub title: String,
}

impl ColumnConfig {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            mouse_enabled: true,
            column_min_width: COLUMN_DEFAULT_MIN_WIDTH,
            drag_threshold: DRAG_THRESHOLD_DEFAULT,
            icon_theme: IconTheme::default(),
        }
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            columns: vec![
                ColumnConfig::new("todo", "To Do"),
                ColumnConfig::new("progress", "In Progress"),
                ColumnConfig::new("done", "Done"),
            ],
            seed_file: None,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ui: UiConfig::default(),
            logging: LoggingConfig::default(),
            board: BoardConfig::default(),
            seed: SeedData::sample(),
        }
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file()?;

        if let Some(path) = config_path {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Result<Option<PathBuf>> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from(CONFIG_FILE_NAME);
        if current_dir_config.exists() {
            return Ok(Some(current_dir_config));
        }

        // 2. Check XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join(APP_DIR_NAME).join("config.toml");
            if xdg_config.exists() {
                return Ok(Some(xdg_config));
            }
        }

        Ok(None)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.ui.column_min_width < COLUMN_MIN_WIDTH_LOWER || self.ui.column_min_width > COLUMN_MIN_WIDTH_UPPER {
            anyhow::bail!(
                "column_min_width must be between {} and {} columns, got {}",
                COLUMN_MIN_WIDTH_LOWER,
                COLUMN_MIN_WIDTH_UPPER,
                self.ui.column_min_width
            );
        }

        if self.ui.drag_threshold > DRAG_THRESHOLD_MAX {
            anyhow::bail!("drag_threshold cannot exceed {} cells", DRAG_THRESHOLD_MAX);
        }

        self.validate_columns()
    }

    /// Validate column definitions
    fn validate_columns(&self) -> Result<()> {
        if self.board.columns.is_empty() {
            anyhow::bail!("board must define at least one column");
        }

        let mut seen = HashSet::new();
        for column in &self.board.columns {
            if column.id.trim().is_empty() {
                anyhow::bail!("column id cannot be empty");
            }
            if column.title.trim().is_empty() {
                anyhow::bail!("Column '{}': title cannot be empty", column.id);
            }
            if !seen.insert(column.id.as_str()) {
                anyhow::bail!("duplicate column id '{}'", column.id);
            }
        }

        Ok(())
    }

    /// Column models in display order
    pub fn columns(&self) -> Vec<Column> {
        self.board
            .columns
            .iter()
            .map(|c| Column::new(ColumnId::new(c.id.as_str()), c.title.as_str()))
            .collect()
    }

    /// Seed data from `board.seed_file` when set, otherwise `[seed]`
    pub fn seed_data(&self) -> Result<SeedData> {
        match &self.board.seed_file {
            Some(path) => SeedData::from_json_file(path)
                .with_context(|| format!("Failed to load seed file: {}", path.display())),
            None => Ok(self.seed.clone()),
        }
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        // Add header comment
        let header = format!(
            "# Columnist Configuration File\n# Generated on {}\n\n",
            chrono::Local::now().format("%Y-%m-%d")
        );

        let full_content = header + &toml_content;

        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        println!("{}: {}", CONFIG_GENERATED, path.as_ref().display());
        Ok(())
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join(APP_DIR_NAME))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join("config.toml"))
    }
}
