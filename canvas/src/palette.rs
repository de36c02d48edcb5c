//! Palette: the ordered set of placeable colors and the current selection.
//!
//! The palette is fixed at construction. Selection can only move between
//! colors it already holds, so exactly one swatch is active at all times.

#[cfg(test)]
#[path = "palette_test.rs"]
mod palette_test;

use crate::color::Color;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PaletteError {
    #[error("palette must contain at least one color")]
    Empty,
    #[error("palette lists {0} more than once")]
    DuplicateColor(Color),
    #[error("{0} is not in the palette")]
    InvalidSelection(Color),
}

/// One rendered entry of the palette strip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Swatch<'a> {
    pub color: &'a Color,
    /// Whether this swatch is the current selection.
    pub active: bool,
}

#[derive(Debug, Clone)]
pub struct Palette {
    colors: Vec<Color>,
    /// Index into `colors`.
    selected: usize,
}

impl Palette {
    /// Build a palette from `colors` (display order) with `initial` selected.
    ///
    /// # Errors
    ///
    /// Fails when `colors` is empty, repeats a color, or does not contain
    /// `initial`.
    pub fn new(colors: Vec<Color>, initial: &Color) -> Result<Self, PaletteError> {
        if colors.is_empty() {
            return Err(PaletteError::Empty);
        }
        for (i, color) in colors.iter().enumerate() {
            if colors[..i].contains(color) {
                return Err(PaletteError::DuplicateColor(color.clone()));
            }
        }
        let selected = position_of(&colors, initial)?;
        Ok(Self { colors, selected })
    }

    /// Make `color` the active selection.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::InvalidSelection`] and keeps the previous
    /// selection when `color` is not in the palette.
    pub fn select_color(&mut self, color: &Color) -> Result<(), PaletteError> {
        self.selected = position_of(&self.colors, color)?;
        Ok(())
    }

    #[must_use]
    pub fn selected_color(&self) -> &Color {
        &self.colors[self.selected]
    }

    #[must_use]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Last color in display order. Used as the blank cell color.
    #[must_use]
    pub fn last_color(&self) -> &Color {
        &self.colors[self.colors.len() - 1]
    }

    #[must_use]
    pub fn contains(&self, color: &Color) -> bool {
        self.colors.contains(color)
    }

    /// Swatches in display order; exactly one is active.
    pub fn swatches(&self) -> impl Iterator<Item = Swatch<'_>> {
        self.colors
            .iter()
            .enumerate()
            .map(move |(i, color)| Swatch { color, active: i == self.selected })
    }
}

fn position_of(colors: &[Color], color: &Color) -> Result<usize, PaletteError> {
    colors
        .iter()
        .position(|c| c == color)
        .ok_or_else(|| PaletteError::InvalidSelection(color.clone()))
}
