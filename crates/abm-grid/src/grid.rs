//! The `Grid` cell store.

use std::fmt;

use crate::{Cell, CellState, GridError, GridResult};

/// Moore-neighborhood offsets, `dx` outer and `dy` inner, centre excluded.
const MOORE_OFFSETS: [(i64, i64); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    ( 0, -1),          ( 0, 1),
    ( 1, -1), ( 1, 0), ( 1, 1),
];

/// A `width × height` array of cell states.
///
/// Storage is one flat `Vec` indexed `x * height + y`, so every column is
/// independent and a scan in storage order is the `x`-outer, `y`-inner
/// order the models rely on.  `C::default()` is the empty state.
///
/// Mutation goes through [`set`](Self::set) only; the backing `Vec` is
/// private.
#[derive(Clone, PartialEq, Eq)]
pub struct Grid<C = CellState> {
    width:  usize,
    height: usize,
    cells:  Vec<C>,
}

impl<C: Copy + Default + PartialEq> Grid<C> {
    /// An all-empty grid.  Both dimensions must be at least 1.
    pub fn new(width: usize, height: usize) -> GridResult<Self> {
        let len = width
            .checked_mul(height)
            .filter(|_| width > 0 && height > 0)
            .ok_or(GridError::InvalidDimensions { width, height })?;
        Ok(Self {
            width,
            height,
            cells: vec![C::default(); len],
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`: zero-sized grids are rejected at construction.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// `true` iff `0 ≤ x < width` and `0 ≤ y < height`.
    #[inline]
    pub fn in_bounds(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && (x as u64) < self.width as u64 && (y as u64) < self.height as u64
    }

    pub fn get(&self, x: usize, y: usize) -> GridResult<C> {
        let i = self.offset(x, y)?;
        Ok(self.cells[i])
    }

    pub fn set(&mut self, x: usize, y: usize, state: C) -> GridResult<()> {
        let i = self.offset(x, y)?;
        self.cells[i] = state;
        Ok(())
    }

    #[inline]
    pub fn get_cell(&self, cell: Cell) -> GridResult<C> {
        self.get(cell.x, cell.y)
    }

    #[inline]
    pub fn set_cell(&mut self, cell: Cell, state: C) -> GridResult<()> {
        self.set(cell.x, cell.y, state)
    }

    /// The in-bounds Moore neighbors of `(x, y)`: 8 inside, 5 on an edge,
    /// 3 in a corner.  The grid does not wrap.
    ///
    /// `(x, y)` itself must be in bounds.
    pub fn neighbors(&self, x: usize, y: usize) -> GridResult<Vec<Cell>> {
        self.offset(x, y)?;
        let (cx, cy) = (x as i64, y as i64);
        Ok(MOORE_OFFSETS
            .iter()
            .map(|&(dx, dy)| (cx + dx, cy + dy))
            .filter(|&(nx, ny)| self.in_bounds(nx, ny))
            .map(|(nx, ny)| Cell::new(nx as usize, ny as usize))
            .collect())
    }

    /// Every empty cell, `x` outer and `y` inner, both starting at 0.
    pub fn empty_cells(&self) -> Vec<Cell> {
        self.cells()
            .filter(|&(_, state)| state == C::default())
            .map(|(cell, _)| cell)
            .collect()
    }

    /// Number of cells currently holding `state`.
    pub fn count(&self, state: C) -> usize {
        self.cells.iter().filter(|&&s| s == state).count()
    }

    /// Iterate `(cell, state)` pairs in storage order.
    pub fn cells(&self) -> impl Iterator<Item = (Cell, C)> + '_ {
        let height = self.height;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &s)| (Cell::new(i / height, i % height), s))
    }

    fn offset(&self, x: usize, y: usize) -> GridResult<usize> {
        if x < self.width && y < self.height {
            Ok(x * self.height + y)
        } else {
            Err(GridError::OutOfBounds {
                x:      x as i64,
                y:      y as i64,
                width:  self.width,
                height: self.height,
            })
        }
    }
}

impl Grid<CellState> {
    /// Text picture of the grid: one line per `y` row starting at `y = 0`,
    /// one glyph per `x` column, each line ending in `'\n'`.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.cells.len() + self.height);
        for y in 0..self.height {
            for x in 0..self.width {
                out.push(self.cells[x * self.height + y].glyph());
            }
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for Grid<CellState> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl<C: fmt::Debug> fmt::Debug for Grid<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Grid")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}
