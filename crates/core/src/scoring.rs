//! Scoring module - clear rewards and the combo chain
//!
//! Every clear pays a flat [`CLEAR_POINTS`]. A bonus clear (bottom-row sum of
//! exactly [`BONUS_SUM`]) additionally pays `BONUS_SUM * combo` using the
//! combo level *before* the clear, then extends the chain by one. A plain
//! clear collapses the chain back to its floor of 1.
//!
//! The combo level is 1-based: 1 means "no chain", and the first bonus clear
//! of a chain pays `BONUS_SUM * 1`.

use sumfall_types::{ClearKind, BONUS_SUM, CLEAR_POINTS};

/// Classify a completed bottom row by its face-value sum
pub fn classify_sum(sum: u32) -> ClearKind {
    if sum == BONUS_SUM {
        ClearKind::Bonus
    } else {
        ClearKind::Plain
    }
}

/// Points paid for a clear at the given combo level
pub fn clear_points(kind: ClearKind, combo: u32) -> u32 {
    match kind {
        ClearKind::Bonus => BONUS_SUM.saturating_mul(combo).saturating_add(CLEAR_POINTS),
        ClearKind::Plain => CLEAR_POINTS,
    }
}

/// Combo level after a clear
pub fn next_combo(kind: ClearKind, combo: u32) -> u32 {
    match kind {
        ClearKind::Bonus => combo + 1,
        ClearKind::Plain => {
            if combo > 1 {
                1
            } else {
                combo
            }
        }
    }
}

/// Outcome of applying one clear to the running totals
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClearScore {
    /// Points this clear added
    pub points: u32,
    /// Total score after the clear
    pub score: u32,
    /// Combo level after the clear
    pub combo: u32,
    /// Whether the combo level changed
    pub combo_changed: bool,
}

/// Running score and combo state for one session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreCombo {
    score: u32,
    combo: u32,
}

impl ScoreCombo {
    /// Fresh totals: score 0, combo at its floor of 1
    pub fn new() -> Self {
        Self { score: 0, combo: 1 }
    }

    /// Current total score
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Current combo level
    pub fn combo(&self) -> u32 {
        self.combo
    }

    /// Reset to fresh totals for a new session
    pub fn reset(&mut self) {
        self.score = 0;
        self.combo = 1;
    }

    /// Apply one clear: add its points, then advance the combo chain
    ///
    /// Points are computed against the combo level before the clear, matching
    /// the payout order (score first, chain second).
    pub fn apply_clear(&mut self, kind: ClearKind) -> ClearScore {
        let points = clear_points(kind, self.combo);
        self.score = self.score.saturating_add(points);

        let combo_before = self.combo;
        self.combo = next_combo(kind, combo_before);

        ClearScore {
            points,
            score: self.score,
            combo: self.combo,
            combo_changed: self.combo != combo_before,
        }
    }
}

impl Default for ScoreCombo {
    fn default() -> Self {
        Self::new()
    }
}
