//! Core puzzle engine - pure, synchronous, and testable
//!
//! This crate contains every rule of the block-placement puzzle: the board,
//! shape templates and rotation, tray generation, line clearing, scoring and
//! deadlock detection. It has **no rendering, audio or input code**; a
//! presentation layer drives it through [`GameSession`] and renders from
//! [`SessionSnapshot`].
//!
//! # Module Structure
//!
//! - [`shapes`]: square occupancy patterns, 90° rotation, live shapes
//! - [`catalog`]: the nine canonical 3x3 templates and their weight classes
//! - [`board`]: 10x10 grid with normalized placement and row/column clearing
//! - [`supply`]: weighted random trays of three shapes
//! - [`scoring`]: `100 * k²` points for `k` lines cleared at once
//! - [`persist`]: high-score store seam and an in-memory store
//! - [`session`]: one play-through, from first tray to deadlock
//! - [`snapshot`]: read-only copy of a session for rendering
//!
//! # Game Rules
//!
//! - The tray offers three shapes; a new tray is dealt once all three are placed
//! - Shapes are placed by naming where their occupied region starts
//! - Any full row and any full column is emptied after each placement
//! - The game ends when no shape left in the tray fits anywhere
//!
//! # Example
//!
//! ```
//! use gridblock_core::{GameSession, MemoryStore, PlacementOutcome, ShapeSupply};
//!
//! let mut session = GameSession::new(MemoryStore::new(), ShapeSupply::from_seed(42));
//!
//! // Every catalog shape fits on an empty board
//! let (x, y) = session
//!     .board()
//!     .legal_placements(session.tray().get(0).unwrap())
//!     .next()
//!     .unwrap();
//!
//! match session.attempt_placement(0, x, y) {
//!     PlacementOutcome::Accepted(report) => assert_eq!(report.total_score, 0),
//!     PlacementOutcome::Rejected(reason) => panic!("rejected: {:?}", reason),
//! }
//! assert!(session.tray().get(0).is_none());
//! ```

pub mod board;
pub mod catalog;
pub mod persist;
pub mod scoring;
pub mod session;
pub mod shapes;
pub mod snapshot;
pub mod supply;

pub use gridblock_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, ClearedLines, InvalidPlacement};
pub use catalog::{templates, ShapeTemplate, TEMPLATES};
pub use persist::{HighScoreStore, MemoryStore, StoreError};
pub use scoring::{calculate_score, ScoreResult};
pub use session::{GameSession, PlacementOutcome, PlacementReport, RejectReason};
pub use shapes::{Pattern, Shape};
pub use snapshot::{SessionSnapshot, TrayShapeSnapshot};
pub use supply::{ShapeSupply, Tray, TraySource};
