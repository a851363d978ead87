//! Scoring module - multi-line clear bonus
//!
//! A placement that clears `k` lines scores `base * multiplier` where
//! `base = 100 * k` and `multiplier = k`, i.e. `100 * k²`. Clearing lines
//! together is worth disproportionately more than clearing them one by one.

use crate::types::{LineClearKind, LINE_CLEAR_BASE};

/// Score calculation result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreResult {
    /// Lines cleared by the placement
    pub lines: u32,
    /// `LINE_CLEAR_BASE` per line, before the multiplier
    pub base: u32,
    /// Multi-line multiplier (equal to `lines`)
    pub multiplier: u32,
    pub total: u32,
}

impl ScoreResult {
    pub fn clear_kind(&self) -> LineClearKind {
        LineClearKind::from_count(self.lines)
    }
}

/// Calculate the score for clearing `lines` lines in one placement
pub fn calculate_score(lines: u32) -> ScoreResult {
    let base = lines.saturating_mul(LINE_CLEAR_BASE);
    let multiplier = lines;
    ScoreResult {
        lines,
        base,
        multiplier,
        total: base.saturating_mul(multiplier),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_lines_no_score() {
        assert_eq!(calculate_score(0), ScoreResult::default());
    }

    #[test]
    fn test_quadratic_line_score() {
        assert_eq!(calculate_score(1).total, 100);
        assert_eq!(calculate_score(2).total, 400);
        assert_eq!(calculate_score(3).total, 900);
        assert_eq!(calculate_score(4).total, 1600);
    }

    #[test]
    fn test_breakdown() {
        let s = calculate_score(3);
        assert_eq!(s.base, 300);
        assert_eq!(s.multiplier, 3);
        assert_eq!(s.clear_kind(), LineClearKind::Multi);
        assert_eq!(calculate_score(1).clear_kind(), LineClearKind::Single);
    }

    #[test]
    fn test_saturates() {
        assert_eq!(calculate_score(u32::MAX).total, u32::MAX);
    }
}
