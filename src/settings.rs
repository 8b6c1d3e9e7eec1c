//! Board configuration
//!
//! Loaded from a JSON file on native builds; the web build derives it from
//! the viewport.

use serde::{Deserialize, Serialize};

use crate::consts::{CELL_SIZE_PX, VIEWPORT_MARGIN_PX};

/// Smallest board that fits the starting snake
pub const MIN_COLS: i32 = 5;
pub const MIN_ROWS: i32 = 1;

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("board {cols}x{rows} is too small (minimum {}x{})", MIN_COLS, MIN_ROWS)]
    GridTooSmall { cols: i32, rows: i32 },
    #[error("settings I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("settings file is malformed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Game settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Board width in cells
    pub cols: i32,
    /// Board height in cells
    pub rows: i32,
    /// Fixed RNG seed (random when absent)
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            cols: 40,
            rows: 30,
            seed: None,
        }
    }
}

impl Settings {
    /// Fit the board to a viewport: subtract the margin, then floor to whole cells
    pub fn from_viewport(width_px: u32, height_px: u32) -> Self {
        let cols = width_px.saturating_sub(VIEWPORT_MARGIN_PX) / CELL_SIZE_PX;
        let rows = height_px.saturating_sub(VIEWPORT_MARGIN_PX) / CELL_SIZE_PX;
        Self {
            cols: cols as i32,
            rows: rows as i32,
            ..Self::default()
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.cols < MIN_COLS || self.rows < MIN_ROWS {
            return Err(SettingsError::GridTooSmall {
                cols: self.cols,
                rows: self.rows,
            });
        }
        Ok(())
    }

    /// Load settings from a JSON file (native only)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(path: &std::path::Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        let settings: Settings = serde_json::from_str(&json)?;
        settings.validate()?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Save settings to a JSON file (native only)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self, path: &std::path::Path) -> Result<(), SettingsError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        log::info!("Settings saved");
        Ok(())
    }
}
