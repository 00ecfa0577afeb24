//! Cell coordinates and the three-valued cell state.

use std::fmt;

use crate::GridError;

/// An integer grid location.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub x: usize,
    pub y: usize,
}

impl Cell {
    #[inline]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// What occupies a cell.
///
/// The numeric codes `0, 1, 2` are only for external representations; code
/// inside the workspace matches on the variants.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    #[default]
    Empty,
    TypeA,
    TypeB,
}

impl CellState {
    #[inline]
    pub fn is_empty(self) -> bool {
        matches!(self, CellState::Empty)
    }

    /// External numeric code: `Empty → 0`, `TypeA → 1`, `TypeB → 2`.
    pub fn code(self) -> u8 {
        match self {
            CellState::Empty => 0,
            CellState::TypeA => 1,
            CellState::TypeB => 2,
        }
    }

    /// One-character rendering: `'.'`, `'1'`, `'2'`.
    pub fn glyph(self) -> char {
        match self {
            CellState::Empty => '.',
            CellState::TypeA => '1',
            CellState::TypeB => '2',
        }
    }
}

impl TryFrom<u8> for CellState {
    type Error = GridError;

    fn try_from(code: u8) -> Result<Self, GridError> {
        match code {
            0 => Ok(CellState::Empty),
            1 => Ok(CellState::TypeA),
            2 => Ok(CellState::TypeB),
            other => Err(GridError::UnknownState(other)),
        }
    }
}

impl fmt::Display for CellState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}
