//! Host configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tictactoe_engine::{BoardLayout, DisplayPosition, PieceStyle};
use tracing::{debug, info, instrument};

/// Settings for the terminal host.
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct HostConfig {
    /// Where the state string is persisted between runs.
    save_path: PathBuf,

    /// Tracing filter used when `RUST_LOG` is unset.
    log_filter: String,

    /// Visual tag for X pieces.
    x_tag: String,

    /// Visual tag for O pieces.
    o_tag: String,

    /// Visual tag for empty cells.
    cell_tag: String,

    /// Horizontal origin of the grid.
    origin_x: f32,

    /// Vertical origin of the grid.
    origin_y: f32,

    /// Side length of one cell.
    square_size: f32,
}

impl Default for HostConfig {
    fn default() -> Self {
        let layout = BoardLayout::default();
        let style = PieceStyle::default();
        Self {
            save_path: PathBuf::from("tictactoe_save.toml"),
            log_filter: "warn".to_string(),
            x_tag: style.x_tag,
            o_tag: style.o_tag,
            cell_tag: style.cell_tag,
            origin_x: layout.origin.x,
            origin_y: layout.origin.y,
            square_size: layout.square_size,
        }
    }
}

impl HostConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        if config.square_size <= 0.0 {
            return Err(ConfigError::new(format!(
                "square_size must be positive, got {}",
                config.square_size
            )));
        }

        info!(save_path = %config.save_path.display(), "Config loaded successfully");
        Ok(config)
    }

    /// Loads the file if it exists, otherwise returns defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Grid geometry for the engine.
    pub fn layout(&self) -> BoardLayout {
        BoardLayout::new(DisplayPosition::new(self.origin_x, self.origin_y), self.square_size)
    }

    /// Piece tags for the engine.
    pub fn style(&self) -> PieceStyle {
        PieceStyle {
            x_tag: self.x_tag.clone(),
            o_tag: self.o_tag.clone(),
            cell_tag: self.cell_tag.clone(),
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
