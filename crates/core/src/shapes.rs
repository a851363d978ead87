//! Shapes module - square boolean patterns, rotation and live shape instances
//!
//! A [`Pattern`] is an `n x n` occupancy grid stored as one bitmask per row
//! (bit `x` of `rows[y]` is the cell at column `x`, row `y`). Rotation is an
//! exact 90° clockwise transform of the whole square, so no cell is ever
//! cropped and four rotations always return the original pattern.
//!
//! A [`Shape`] is an immutable template plus an orientation and a color; its
//! rotated pattern is cached on construction and on every rotation.

use crate::catalog::ShapeTemplate;
use crate::types::{ColorTag, Rotation};

/// Largest supported pattern side (one `u16` bitmask per row)
pub const MAX_PATTERN_SIDE: usize = 16;

/// Offset of a single occupied cell relative to the pattern origin, as `(x, y)`
pub type CellOffset = (u8, u8);

/// Square occupancy grid of a shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pattern {
    side: u8,
    rows: [u16; MAX_PATTERN_SIDE],
}

impl Pattern {
    /// Build a pattern of the given side from a list of occupied `(x, y)` cells
    ///
    /// Usable in const context; an out-of-range side or cell fails compilation
    /// (or panics when called at runtime).
    pub const fn from_cells(side: u8, cells: &[CellOffset]) -> Self {
        assert!(side as usize <= MAX_PATTERN_SIDE, "pattern side too large");
        let mut rows = [0u16; MAX_PATTERN_SIDE];
        let mut i = 0;
        while i < cells.len() {
            let (x, y) = cells[i];
            assert!(x < side && y < side, "cell outside pattern");
            rows[y as usize] |= 1u16 << x;
            i += 1;
        }
        Self { side, rows }
    }

    /// Side length of the local grid
    pub fn side(&self) -> u8 {
        self.side
    }

    /// Whether the local cell `(x, y)` is occupied
    #[inline(always)]
    pub fn is_set(&self, x: u8, y: u8) -> bool {
        x < self.side && y < self.side && (self.rows[y as usize] >> x) & 1 == 1
    }

    /// Occupied cells in row-major order
    pub fn cells(self) -> impl Iterator<Item = CellOffset> {
        let side = self.side;
        (0..side).flat_map(move |y| {
            (0..side)
                .filter(move |&x| self.is_set(x, y))
                .map(move |x| (x, y))
        })
    }

    /// Number of occupied cells
    pub fn cell_count(&self) -> u32 {
        self.rows.iter().map(|row| row.count_ones()).sum()
    }

    /// Minimum occupied column and minimum occupied row, taken independently
    ///
    /// Returns `None` for a pattern with no occupied cells.
    pub fn min_occupied(&self) -> Option<CellOffset> {
        let used = &self.rows[..self.side as usize];
        let min_y = used.iter().position(|&row| row != 0)?;
        let min_x = used
            .iter()
            .filter(|&&row| row != 0)
            .map(|row| row.trailing_zeros())
            .min()?;
        Some((min_x as u8, min_y as u8))
    }

    /// Rotate 90° clockwise: local `(x, y)` moves to `(side - 1 - y, x)`
    ///
    /// In row/column terms, cell (row i, col j) lands on (row j, col n-1-i).
    pub fn rotated_cw(&self) -> Self {
        let n = self.side;
        let mut rows = [0u16; MAX_PATTERN_SIDE];
        for (x, y) in self.cells() {
            rows[x as usize] |= 1u16 << (n - 1 - y);
        }
        Self { side: n, rows }
    }

    /// Apply the given number of clockwise quarter turns
    pub fn rotated(&self, rotation: Rotation) -> Self {
        let mut pattern = *self;
        for _ in 0..rotation.quarter_turns() {
            pattern = pattern.rotated_cw();
        }
        pattern
    }
}

/// A live shape in the tray: template, orientation and color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    template: &'static ShapeTemplate,
    rotation: Rotation,
    color: ColorTag,
    /// Template pattern with `rotation` applied
    pattern: Pattern,
}

impl Shape {
    /// Create a shape from a template in the given orientation
    pub fn new(template: &'static ShapeTemplate, rotation: Rotation, color: ColorTag) -> Self {
        Self {
            template,
            rotation,
            color,
            pattern: template.pattern().rotated(rotation),
        }
    }

    pub fn template(&self) -> &'static ShapeTemplate {
        self.template
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    pub fn color(&self) -> ColorTag {
        self.color
    }

    /// Pattern in the current orientation
    pub fn pattern(&self) -> Pattern {
        self.pattern
    }

    /// Rotate the shape 90° clockwise in place
    pub fn rotate_cw(&mut self) {
        self.rotation = self.rotation.rotate_cw();
        self.pattern = self.pattern.rotated_cw();
    }

    /// Occupied local cells in the current orientation
    pub fn cells(&self) -> impl Iterator<Item = CellOffset> {
        self.pattern.cells()
    }

    pub fn cell_count(&self) -> u32 {
        self.pattern.cell_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BAR: Pattern = Pattern::from_cells(3, &[(0, 1), (1, 1), (2, 1)]);

    #[test]
    fn test_from_cells_sets_bits() {
        assert!(BAR.is_set(0, 1));
        assert!(BAR.is_set(2, 1));
        assert!(!BAR.is_set(1, 0));
        assert!(!BAR.is_set(3, 1));
        assert_eq!(BAR.cell_count(), 3);
    }

    #[test]
    fn test_cells_row_major() {
        let p = Pattern::from_cells(3, &[(2, 0), (0, 2), (0, 0)]);
        let cells: Vec<_> = p.cells().collect();
        assert_eq!(cells, vec![(0, 0), (2, 0), (0, 2)]);
    }

    #[test]
    fn test_rotate_bar_becomes_vertical() {
        let east = BAR.rotated_cw();
        let cells: Vec<_> = east.cells().collect();
        assert_eq!(cells, vec![(1, 0), (1, 1), (1, 2)]);
    }

    #[test]
    fn test_rotate_four_times_is_identity() {
        let p = Pattern::from_cells(3, &[(0, 0), (1, 0), (1, 1), (2, 1)]);
        assert_eq!(p.rotated(Rotation::West).rotated_cw(), p);
        assert_eq!(p.rotated_cw().rotated_cw().rotated_cw().rotated_cw(), p);
    }

    #[test]
    fn test_min_occupied_independent_axes() {
        // Corner tromino: left column rows 1-2 and one cell to the right
        let p = Pattern::from_cells(3, &[(0, 1), (0, 2), (1, 2)]);
        assert_eq!(p.min_occupied(), Some((0, 1)));

        // Cells at (2, 0) and (1, 2): min x comes from row 2, min y from row 0
        let p = Pattern::from_cells(3, &[(2, 0), (1, 2)]);
        assert_eq!(p.min_occupied(), Some((1, 0)));

        assert_eq!(Pattern::from_cells(3, &[]).min_occupied(), None);
    }

    #[test]
    fn test_wide_pattern_rotation() {
        let p = Pattern::from_cells(12, &[(0, 0), (11, 0)]);
        let east: Vec<_> = p.rotated_cw().cells().collect();
        assert_eq!(east, vec![(11, 0), (11, 11)]);
    }
}
