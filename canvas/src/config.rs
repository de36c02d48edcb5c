//! Board configuration: palette, grid shape, tile size, and timings.
//!
//! Every field has a default, so a JSON document only needs to list what it
//! overrides. All durations are milliseconds.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::clock::Millis;
use crate::color::Color;
use crate::consts::{
    DEFAULT_COLORS, DEFAULT_COOLDOWN_MS, DEFAULT_HEIGHT, DEFAULT_NOTICE_MS, DEFAULT_TICK_MS,
    DEFAULT_TILE_SIZE_PX, DEFAULT_WIDTH, MAX_CELLS,
};
use crate::palette::{Palette, PaletteError};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid palette: {0}")]
    Palette(#[from] PaletteError),
    #[error("grid must have at least one cell (got {width}x{height})")]
    ZeroDimension { width: usize, height: usize },
    #[error("grid of {width}x{height} exceeds {MAX_CELLS} cells")]
    GridTooLarge { width: usize, height: usize },
    #[error("{0} must be greater than zero")]
    ZeroDuration(&'static str),
    #[error("invalid board config JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BoardConfig {
    /// Palette in display order.
    pub colors: Vec<Color>,
    /// Initially selected color. First palette color when absent.
    pub initial_color: Option<Color>,
    /// Color of untouched cells. Last palette color when absent.
    pub cell_color: Option<Color>,
    pub width: usize,
    pub height: usize,
    pub tile_size_px: u32,
    pub cooldown_ms: Millis,
    pub tick_ms: Millis,
    pub notice_ms: Millis,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            colors: DEFAULT_COLORS.iter().map(|c| Color::from(*c)).collect(),
            initial_color: None,
            cell_color: None,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            tile_size_px: DEFAULT_TILE_SIZE_PX,
            cooldown_ms: DEFAULT_COOLDOWN_MS,
            tick_ms: DEFAULT_TICK_MS,
            notice_ms: DEFAULT_NOTICE_MS,
        }
    }
}

impl BoardConfig {
    /// Parse and validate a JSON config. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] for malformed input and any error from
    /// [`BoardConfig::validate`].
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every startup precondition.
    ///
    /// # Errors
    ///
    /// Fails on an invalid palette or selection, a zero or oversized grid,
    /// or a zero duration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::ZeroDimension { width: self.width, height: self.height });
        }
        if self.width.checked_mul(self.height).is_none_or(|cells| cells > MAX_CELLS) {
            return Err(ConfigError::GridTooLarge { width: self.width, height: self.height });
        }
        if self.cooldown_ms == 0 {
            return Err(ConfigError::ZeroDuration("cooldown_ms"));
        }
        if self.tick_ms == 0 {
            return Err(ConfigError::ZeroDuration("tick_ms"));
        }
        if self.notice_ms == 0 {
            return Err(ConfigError::ZeroDuration("notice_ms"));
        }
        let palette = self.palette()?;
        self.cell_color_in(&palette)?;
        Ok(())
    }

    /// Build the palette with the configured initial selection.
    ///
    /// # Errors
    ///
    /// See [`Palette::new`].
    pub fn palette(&self) -> Result<Palette, PaletteError> {
        let initial = match &self.initial_color {
            Some(color) => color.clone(),
            None => self.colors.first().cloned().ok_or(PaletteError::Empty)?,
        };
        Palette::new(self.colors.clone(), &initial)
    }

    /// Resolve the blank cell color against `palette`.
    pub(crate) fn cell_color_in(&self, palette: &Palette) -> Result<Color, PaletteError> {
        match &self.cell_color {
            Some(color) if palette.contains(color) => Ok(color.clone()),
            Some(color) => Err(PaletteError::InvalidSelection(color.clone())),
            None => Ok(palette.last_color().clone()),
        }
    }

    /// Number of cells. Saturates on grids [`BoardConfig::validate`] rejects.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.width.saturating_mul(self.height)
    }

    /// CSS `grid-template-columns` value for the board container.
    #[must_use]
    pub fn grid_template_columns(&self) -> String {
        format!("repeat({}, {}px)", self.width, self.tile_size_px)
    }
}
