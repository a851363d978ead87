use crate::persist::HighScoreStore;
use crate::session::GameSession;
use crate::shapes::{Pattern, Shape};
use crate::supply::TraySource;
use crate::types::{Cell, ColorTag, Rotation, GRID_SIZE, TRAY_SIZE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TrayShapeSnapshot {
    pub template: &'static str,
    pub rotation: Rotation,
    pub color: ColorTag,
    pub pattern: Pattern,
}

impl From<&Shape> for TrayShapeSnapshot {
    fn from(value: &Shape) -> Self {
        Self {
            template: value.template().name(),
            rotation: value.rotation(),
            color: value.color(),
            pattern: value.pattern(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionSnapshot {
    pub board: [[Cell; GRID_SIZE as usize]; GRID_SIZE as usize],
    pub tray: [Option<TrayShapeSnapshot>; TRAY_SIZE],
    pub score: u32,
    pub high_score: u32,
    pub game_over: bool,
    pub placements: u32,
    pub lines_cleared: u32,
}

impl SessionSnapshot {
    pub(crate) fn capture<S: HighScoreStore, T: TraySource>(session: &GameSession<S, T>) -> Self {
        let slots = session.tray().slots();
        Self {
            board: session.board().to_rows(),
            tray: std::array::from_fn(|i| slots[i].as_ref().map(TrayShapeSnapshot::from)),
            score: session.score(),
            high_score: session.high_score(),
            game_over: session.is_terminal(),
            placements: session.placements(),
            lines_cleared: session.lines_cleared(),
        }
    }

    pub fn playable(&self) -> bool {
        !self.game_over
    }

    /// Filled tray slots
    pub fn shapes(&self) -> impl Iterator<Item = &TrayShapeSnapshot> + '_ {
        self.tray.iter().flatten()
    }
}
