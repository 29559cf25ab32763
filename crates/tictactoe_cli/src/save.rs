//! Save-file persistence of the board state string.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tictactoe_engine::StateString;
use tracing::{debug, instrument};

/// Contents of the save file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveFile {
    /// Board state at the time of saving.
    pub state: StateString,
}

impl SaveFile {
    /// Wraps a state for saving.
    pub fn new(state: StateString) -> Self {
        Self { state }
    }

    /// Reads a save file. A missing file yields `Ok(None)`.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Option<Self>, SaveError> {
        let path = path.as_ref();
        if !path.exists() {
            debug!("No save file");
            return Ok(None);
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| SaveError::new(format!("Failed to read save file: {}", e)))?;
        let save: Self = toml::from_str(&content)
            .map_err(|e| SaveError::new(format!("Failed to parse save file: {}", e)))?;

        debug!(state = %save.state, "Save file loaded");
        Ok(Some(save))
    }

    /// Writes the save file, replacing any previous contents.
    #[instrument(skip(self, path), fields(path = %path.as_ref().display(), state = %self.state))]
    pub fn store(&self, path: impl AsRef<Path>) -> Result<(), SaveError> {
        let content = toml::to_string(self)
            .map_err(|e| SaveError::new(format!("Failed to serialize save file: {}", e)))?;
        std::fs::write(path.as_ref(), content)
            .map_err(|e| SaveError::new(format!("Failed to write save file: {}", e)))?;
        debug!("Save file written");
        Ok(())
    }
}

/// Save-file error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Save error: {} at {}:{}", message, file, line)]
pub struct SaveError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl SaveError {
    /// Creates a new save error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
