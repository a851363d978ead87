//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the engine.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (engine logic, rendering, persistence).
//!
//! # Board Dimensions
//!
//! - **Side**: 10 cells, square (indexed 0-9 on both axes)
//! - **Coordinates**: `(x, y)` where x is the column and y is the row
//!
//! # Shape Supply Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TEMPLATE_SIDE` | 3 | Local grid side of every catalog template |
//! | `TRAY_SIZE` | 3 | Shapes offered per tray |
//! | `PALETTE_SIZE` | 4 | Colors a shape can be tagged with |
//! | `RARE_WEIGHT` | 1 | Multiset weight of the dot and the full block |
//! | `COMMON_WEIGHT` | 4 | Multiset weight of every other template |
//!
//! # Scoring
//!
//! Clearing `k` lines in one placement awards `LINE_CLEAR_BASE * k * k` points.
//!
//! # Examples
//!
//! ```
//! use gridblock_types::{ColorTag, Rotation, WeightClass, GRID_SIZE, PALETTE_SIZE};
//!
//! assert_eq!(ColorTag::ALL.len(), PALETTE_SIZE);
//!
//! // Rotate
//! assert_eq!(Rotation::North.rotate_cw(), Rotation::East);
//! assert_eq!(Rotation::from_quarter_turns(5), Rotation::East);
//!
//! // Weights
//! assert_eq!(WeightClass::Common.weight(), 4);
//!
//! assert_eq!(GRID_SIZE, 10);
//! ```

/// Board side length in cells (the board is `GRID_SIZE` x `GRID_SIZE`)
pub const GRID_SIZE: u8 = 10;

/// Total number of cells on the board
pub const BOARD_CELLS: usize = (GRID_SIZE as usize) * (GRID_SIZE as usize);

/// Side length of the local grid every catalog template is defined on
pub const TEMPLATE_SIDE: u8 = 3;

/// Number of shapes offered in a freshly generated tray
pub const TRAY_SIZE: usize = 3;

/// Number of distinct color tags
pub const PALETTE_SIZE: usize = 4;

/// Points per cleared line before the multi-line multiplier
pub const LINE_CLEAR_BASE: u32 = 100;

/// Multiset weight of a rare template
pub const RARE_WEIGHT: u32 = 1;

/// Multiset weight of a common template
pub const COMMON_WEIGHT: u32 = 4;

/// Display color attached to a shape and carried into every cell it fills
///
/// The tag is opaque to the engine; it only matters to rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorTag {
    Blue,
    Red,
    Green,
    Purple,
}

impl ColorTag {
    /// Every color in palette order
    pub const ALL: [ColorTag; PALETTE_SIZE] =
        [ColorTag::Blue, ColorTag::Red, ColorTag::Green, ColorTag::Purple];
}

/// A cell on the board
///
/// - `None`: Empty cell
/// - `Some(ColorTag)`: Cell occupied by a shape of that color
pub type Cell = Option<ColorTag>;

/// Orientation of a shape, in clockwise quarter turns from its template
///
/// The rotation cycle goes: North → East → South → West → North
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Rotation {
    #[default]
    North,
    East,
    South,
    West,
}

impl Rotation {
    /// All four orientations in clockwise order
    pub const ALL: [Rotation; 4] = [
        Rotation::North,
        Rotation::East,
        Rotation::South,
        Rotation::West,
    ];

    /// Rotate clockwise (90°)
    ///
    /// # Examples
    ///
    /// ```
    /// use gridblock_types::Rotation;
    ///
    /// assert_eq!(Rotation::North.rotate_cw(), Rotation::East);
    /// assert_eq!(Rotation::West.rotate_cw(), Rotation::North);
    /// ```
    pub fn rotate_cw(&self) -> Self {
        match self {
            Rotation::North => Rotation::East,
            Rotation::East => Rotation::South,
            Rotation::South => Rotation::West,
            Rotation::West => Rotation::North,
        }
    }

    /// Number of clockwise quarter turns (0-3)
    pub fn quarter_turns(&self) -> u8 {
        match self {
            Rotation::North => 0,
            Rotation::East => 1,
            Rotation::South => 2,
            Rotation::West => 3,
        }
    }

    /// Orientation reached after `turns` clockwise quarter turns (taken mod 4)
    pub fn from_quarter_turns(turns: u8) -> Self {
        Rotation::ALL[(turns % 4) as usize]
    }
}

/// Selection weight class of a catalog template
///
/// - **Rare**: appears once in the weighted multiset and is never rotated
/// - **Common**: appears four times and gets a random orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WeightClass {
    Rare,
    Common,
}

impl WeightClass {
    /// Multiplicity of the template in the weighted multiset
    pub fn weight(&self) -> u32 {
        match self {
            WeightClass::Rare => RARE_WEIGHT,
            WeightClass::Common => COMMON_WEIGHT,
        }
    }
}

/// Feedback class of a placement's line clear
///
/// Presentation uses it to pick single- vs multi-line effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineClearKind {
    None,
    Single,
    Multi,
}

impl LineClearKind {
    pub fn from_count(lines: u32) -> Self {
        match lines {
            0 => LineClearKind::None,
            1 => LineClearKind::Single,
            _ => LineClearKind::Multi,
        }
    }
}
