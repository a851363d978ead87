//! Board module - manages the game grid
//!
//! The board is a 10x10 grid where each cell can be empty or filled with a color tag.
//! Uses a flat array for better cache locality and zero-allocation.
//! Coordinates: (x, y) where x is the column and y is the row, both in 0..10.
//!
//! Placement origins are *normalized*: the caller names where the shape's
//! minimum occupied column and row should land, not where the corner of its
//! local grid goes, so empty padding in a template never shifts a placement.

use arrayvec::ArrayVec;
use derive_more::{Display, Error};

use crate::shapes::Shape;
use crate::types::{Cell, BOARD_CELLS, GRID_SIZE};

const N: i32 = GRID_SIZE as i32;

/// `Board::place` was called where `Board::can_place` does not hold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("shape cannot be placed at ({x}, {y})")]
pub struct InvalidPlacement {
    pub x: i32,
    pub y: i32,
}

/// Rows and columns reset by one `clear_full_lines` pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClearedLines {
    pub rows: ArrayVec<u8, { GRID_SIZE as usize }>,
    pub columns: ArrayVec<u8, { GRID_SIZE as usize }>,
}

impl ClearedLines {
    /// Rows plus columns; a cell on both a cleared row and column counts once per line
    pub fn count(&self) -> u32 {
        (self.rows.len() + self.columns.len()) as u32
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() && self.columns.is_empty()
    }
}

/// The game board - 10 columns x 10 rows using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * SIZE + x)
    cells: [Cell; BOARD_CELLS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_CELLS],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i32, y: i32) -> Option<usize> {
        if x < 0 || x >= N || y < 0 || y >= N {
            return None;
        }
        Some((y as usize) * (GRID_SIZE as usize) + (x as usize))
    }

    /// Side length of the board
    pub fn size(&self) -> u8 {
        GRID_SIZE
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is valid (within bounds and empty)
    pub fn is_valid(&self, x: i32, y: i32) -> bool {
        matches!(self.get(x, y), Some(None))
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Check if position is out of bounds
    pub fn is_out_of_bounds(&self, x: i32, y: i32) -> bool {
        Self::index(x, y).is_none()
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= GRID_SIZE as usize {
            return false;
        }
        let start = y * GRID_SIZE as usize;
        let end = start + GRID_SIZE as usize;
        self.cells[start..end].iter().all(|cell| cell.is_some())
    }

    /// Check if a column is completely filled
    pub fn is_column_full(&self, x: usize) -> bool {
        if x >= GRID_SIZE as usize {
            return false;
        }
        self.cells
            .iter()
            .skip(x)
            .step_by(GRID_SIZE as usize)
            .all(|cell| cell.is_some())
    }

    /// Number of occupied cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Shift a requested origin so the shape's minimum occupied column and row
    /// land on `(x, y)`
    ///
    /// Saturates at `i32::MIN`; only origins far off the board can saturate.
    pub fn normalize(shape: &Shape, x: i32, y: i32) -> (i32, i32) {
        match shape.pattern().min_occupied() {
            Some((min_x, min_y)) => (
                x.saturating_sub(min_x as i32),
                y.saturating_sub(min_y as i32),
            ),
            None => (x, y),
        }
    }

    /// Check that every occupied cell of the normalized placement is in bounds and empty
    pub fn can_place(&self, shape: &Shape, x: i32, y: i32) -> bool {
        let (ox, oy) = Self::normalize(shape, x, y);
        shape.cells().all(|(dx, dy)| {
            match (ox.checked_add(dx as i32), oy.checked_add(dy as i32)) {
                (Some(cx), Some(cy)) => self.is_valid(cx, cy),
                _ => false,
            }
        })
    }

    /// Write the shape's color into every cell of the normalized placement
    ///
    /// Validates first; on failure the board is left untouched.
    /// Returns the number of cells written.
    pub fn place(&mut self, shape: &Shape, x: i32, y: i32) -> Result<u32, InvalidPlacement> {
        if !self.can_place(shape, x, y) {
            return Err(InvalidPlacement { x, y });
        }

        let (ox, oy) = Self::normalize(shape, x, y);
        let color = Some(shape.color());
        let mut written = 0;
        for (dx, dy) in shape.cells() {
            if self.set(ox + dx as i32, oy + dy as i32, color) {
                written += 1;
            }
        }
        Ok(written)
    }

    /// Reset every full row and every full column to empty
    ///
    /// Full lines are detected on the board as it was before this call, so a
    /// row and a column completed together are both cleared (their shared cell
    /// is simply reset once).
    pub fn clear_full_lines(&mut self) -> ClearedLines {
        let size = GRID_SIZE as usize;
        let mut cleared = ClearedLines::default();

        for i in 0..size {
            if self.is_row_full(i) {
                cleared.rows.push(i as u8);
            }
            if self.is_column_full(i) {
                cleared.columns.push(i as u8);
            }
        }

        for &y in &cleared.rows {
            let start = y as usize * size;
            for cell in &mut self.cells[start..start + size] {
                *cell = None;
            }
        }
        for &x in &cleared.columns {
            for cell in self.cells.iter_mut().skip(x as usize).step_by(size) {
                *cell = None;
            }
        }

        cleared
    }

    /// Every origin in the board's coordinate space where the shape fits
    pub fn legal_placements<'a>(&'a self, shape: &'a Shape) -> impl Iterator<Item = (i32, i32)> + 'a {
        (0..N).flat_map(move |y| {
            (0..N)
                .filter(move |&x| self.can_place(shape, x, y))
                .map(move |x| (x, y))
        })
    }

    /// Check whether the shape fits anywhere on the board
    pub fn has_any_legal_placement(&self, shape: &Shape) -> bool {
        self.legal_placements(shape).next().is_some()
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Copy the board out as rows
    pub fn to_rows(&self) -> [[Cell; GRID_SIZE as usize]; GRID_SIZE as usize] {
        let size = GRID_SIZE as usize;
        let mut rows = [[None; GRID_SIZE as usize]; GRID_SIZE as usize];
        for (y, row) in rows.iter_mut().enumerate() {
            row.copy_from_slice(&self.cells[y * size..(y + 1) * size]);
        }
        rows
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
