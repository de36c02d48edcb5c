#[cfg(test)]
#[path = "cell_test.rs"]
mod cell_test;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::color::Color;

/// Grid coordinates of a cell. Row 0 is the top row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellPos {
    pub row: usize,
    pub col: usize,
}

impl CellPos {
    #[must_use]
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for CellPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// One square of the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pos: CellPos,
    color: Color,
}

impl Cell {
    #[must_use]
    pub fn new(pos: CellPos, color: Color) -> Self {
        Self { pos, color }
    }

    #[must_use]
    pub fn pos(&self) -> CellPos {
        self.pos
    }

    #[must_use]
    pub fn color(&self) -> &Color {
        &self.color
    }

    /// Replace the cell's color. The host redraws the cell from this value.
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }
}
