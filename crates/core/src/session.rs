//! Session module - one play-through from first tray to deadlock
//!
//! This module ties together the board, the tray supply, scoring and the
//! high-score store. It is synchronous and single-threaded: every call runs to
//! completion, and an embedding that shares a session across threads must wrap
//! the whole session in one lock.
//!
//! # Lifecycle
//!
//! A session starts `Active` with a freshly generated tray and becomes
//! terminal as soon as a non-empty tray has no shape with a legal placement
//! (possibly right at construction). The terminal state is absorbing; use
//! [`GameSession::restart`] or construct a new session to play again.

use tracing::{debug, error, info, warn};

use crate::board::{Board, ClearedLines};
use crate::persist::{load_or_default, HighScoreStore, MemoryStore, StoreError};
use crate::scoring::{calculate_score, ScoreResult};
use crate::snapshot::SessionSnapshot;
use crate::supply::{ShapeSupply, Tray, TraySource};
use crate::types::LineClearKind;

/// Why a placement attempt was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// The session is already terminal
    GameOver,
    /// The tray slot is out of range or already used
    EmptySlot,
    /// Part of the shape would leave the board or overlap an occupied cell
    Blocked,
}

/// Everything the presentation layer needs to react to an accepted placement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacementReport {
    pub slot: usize,
    /// Requested (pre-normalization) origin
    pub origin: (i32, i32),
    pub cells_placed: u32,
    pub cleared: ClearedLines,
    pub score: ScoreResult,
    /// Session score after this placement
    pub total_score: u32,
    pub new_high_score: bool,
    /// The tray emptied and was replaced
    pub tray_refilled: bool,
    /// The session became terminal as a result of this placement
    pub game_over: bool,
    /// Set when a new high score could not be persisted
    pub store_warning: Option<StoreError>,
}

impl PlacementReport {
    pub fn clear_kind(&self) -> LineClearKind {
        self.score.clear_kind()
    }
}

/// Result of [`GameSession::attempt_placement`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlacementOutcome {
    Accepted(PlacementReport),
    Rejected(RejectReason),
}

impl PlacementOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, PlacementOutcome::Accepted(_))
    }
}

/// Complete game session
#[derive(Debug, Clone)]
pub struct GameSession<S = MemoryStore, T = ShapeSupply> {
    board: Board,
    tray: Tray,
    supply: T,
    store: S,
    score: u32,
    high_score: u32,
    game_over: bool,
    placements: u32,
    lines_cleared: u32,
}

impl<S: HighScoreStore, T: TraySource> GameSession<S, T> {
    /// Start a session on an empty board
    pub fn new(store: S, supply: T) -> Self {
        Self::with_board(Board::new(), store, supply)
    }

    /// Start a session on a pre-populated board
    pub fn with_board(board: Board, store: S, mut supply: T) -> Self {
        let high_score = load_or_default(&store);
        let tray = supply.next_tray();

        let mut session = Self {
            board,
            tray,
            supply,
            store,
            score: 0,
            high_score,
            game_over: false,
            placements: 0,
            lines_cleared: 0,
        };
        session.evaluate_terminal();
        debug!(high_score, game_over = session.game_over, "session started");
        session
    }

    /// Throw this session away and start a fresh one with the same store and supply
    pub fn restart(self) -> Self {
        Self::new(self.store, self.supply)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn tray(&self) -> &Tray {
        &self.tray
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn is_terminal(&self) -> bool {
        self.game_over
    }

    /// Accepted placements so far
    pub fn placements(&self) -> u32 {
        self.placements
    }

    /// Lines cleared so far (rows plus columns)
    pub fn lines_cleared(&self) -> u32 {
        self.lines_cleared
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Hand the store over, e.g. to the next session
    pub fn into_store(self) -> S {
        self.store
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot::capture(self)
    }

    /// Whether the shape in `slot` could be placed at `(x, y)` right now
    ///
    /// Read-only; used to preview a drag before release.
    pub fn can_place(&self, slot: usize, x: i32, y: i32) -> bool {
        !self.game_over
            && self
                .tray
                .get(slot)
                .is_some_and(|shape| self.board.can_place(shape, x, y))
    }

    /// Place the shape in `slot` with its occupied region starting at `(x, y)`
    pub fn attempt_placement(&mut self, slot: usize, x: i32, y: i32) -> PlacementOutcome {
        if self.game_over {
            debug!(slot, x, y, "placement rejected: game over");
            return PlacementOutcome::Rejected(RejectReason::GameOver);
        }

        let Some(shape) = self.tray.get(slot).copied() else {
            debug!(slot, "placement rejected: empty slot");
            return PlacementOutcome::Rejected(RejectReason::EmptySlot);
        };

        if !self.board.can_place(&shape, x, y) {
            debug!(slot, x, y, shape = shape.template().name(), "placement rejected: blocked");
            return PlacementOutcome::Rejected(RejectReason::Blocked);
        }

        let cells_placed = match self.board.place(&shape, x, y) {
            Ok(cells) => cells,
            Err(err) => {
                error!(error = %err, "board refused a checked placement");
                return PlacementOutcome::Rejected(RejectReason::Blocked);
            }
        };
        self.placements += 1;
        debug!(slot, x, y, shape = shape.template().name(), "placement accepted");

        let cleared = self.board.clear_full_lines();
        let score = calculate_score(cleared.count());
        if score.lines > 0 {
            self.lines_cleared += score.lines;
            self.score = self.score.saturating_add(score.total);
            info!(lines = score.lines, points = score.total, score = self.score, "lines cleared");
        }

        let (new_high_score, store_warning) = self.record_high_score();

        self.tray.take(slot);
        let tray_refilled = self.tray.is_empty();
        if tray_refilled {
            self.tray = self.supply.next_tray();
            debug!("tray refilled");
        }
        let game_over = self.evaluate_terminal();

        PlacementOutcome::Accepted(PlacementReport {
            slot,
            origin: (x, y),
            cells_placed,
            cleared,
            score,
            total_score: self.score,
            new_high_score,
            tray_refilled,
            game_over,
            store_warning,
        })
    }

    /// Raise the high score if the current score beats it, and persist it
    fn record_high_score(&mut self) -> (bool, Option<StoreError>) {
        if self.score <= self.high_score {
            return (false, None);
        }

        self.high_score = self.score;
        info!(high_score = self.high_score, "new high score");

        match self.store.save(self.high_score) {
            Ok(()) => (true, None),
            Err(err) => {
                warn!(error = %err, "failed to persist high score");
                (true, Some(err))
            }
        }
    }

    /// Enter the terminal state if no tray shape fits anywhere
    ///
    /// Returns true only on the transition into the terminal state.
    fn evaluate_terminal(&mut self) -> bool {
        if self.game_over || !self.tray_deadlocked() {
            return false;
        }
        self.game_over = true;
        info!(score = self.score, placements = self.placements, "game over: no legal placement");
        true
    }

    /// A non-empty tray none of whose shapes has a legal placement
    fn tray_deadlocked(&self) -> bool {
        !self.tray.is_empty()
            && self
                .tray
                .iter()
                .all(|(_, shape)| !self.board.has_any_legal_placement(shape))
    }
}

impl Default for GameSession<MemoryStore, ShapeSupply> {
    fn default() -> Self {
        Self::new(MemoryStore::new(), ShapeSupply::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::find;
    use crate::shapes::Shape;
    use crate::types::{ColorTag, Rotation};

    /// Always hands out the same tray
    struct FixedTrays(Tray);

    impl TraySource for FixedTrays {
        fn next_tray(&mut self) -> Tray {
            self.0
        }
    }

    fn tray_of(names: [&str; 3]) -> Tray {
        Tray::new(names.map(|name| {
            Shape::new(find(name).expect("catalog template"), Rotation::North, ColorTag::Green)
        }))
    }

    #[test]
    fn test_empty_tray_is_not_deadlocked() {
        let mut session = GameSession::new(MemoryStore::new(), FixedTrays(tray_of(["dot"; 3])));
        session.tray = Tray::default();
        assert!(!session.tray_deadlocked());
    }

    #[test]
    fn test_high_score_only_saved_on_improvement() {
        let mut session = GameSession::new(
            MemoryStore::with_high_score(50),
            FixedTrays(tray_of(["dot"; 3])),
        );
        assert_eq!(session.record_high_score(), (false, None));

        session.score = 100;
        assert_eq!(session.record_high_score(), (true, None));
        assert_eq!(session.high_score(), 100);
        assert_eq!(session.store().writes(), 1);

        assert_eq!(session.record_high_score(), (false, None));
        assert_eq!(session.store().writes(), 1);
    }

    #[test]
    fn test_preview_does_not_mutate() {
        let session = GameSession::new(MemoryStore::new(), FixedTrays(tray_of(["block"; 3])));
        assert!(session.can_place(0, 7, 7));
        assert!(!session.can_place(0, 8, 7));
        assert!(!session.can_place(3, 0, 0));
        assert_eq!(session.board().occupied_count(), 0);
    }

    #[test]
    fn test_restart_keeps_store() {
        let mut session = GameSession::new(MemoryStore::new(), FixedTrays(tray_of(["dot"; 3])));
        session.score = 300;
        session.record_high_score();
        session.game_over = true;

        let fresh = session.restart();
        assert!(!fresh.is_terminal());
        assert_eq!(fresh.score(), 0);
        assert_eq!(fresh.high_score(), 300);
    }
}
