use sumfall_types::Tile;

/// Receives session notifications
///
/// The core performs no I/O; everything an outer layer needs to draw, play a
/// cue, or hand off a final score arrives through these callbacks. They fire
/// synchronously, after the mutation they describe. Every method has a no-op
/// default so implementations subscribe only to what they use.
pub trait SessionObserver {
    /// The session clock advanced, reset, or was clamped at game over
    fn elapsed_changed(&mut self, _elapsed: f32) {}

    /// The total score changed
    fn score_changed(&mut self, _score: u32) {}

    /// The combo level changed
    fn combo_changed(&mut self, _combo: u32) {}

    /// A full bottom row summed to the bonus target
    fn bonus_clear(&mut self) {}

    /// A full bottom row cleared without the bonus
    fn plain_clear(&mut self) {}

    /// A new falling tile appeared at the spawn cell
    fn tile_spawned(&mut self, _tile: Tile) {}

    /// The falling tile settled at a new position
    fn tile_moved(&mut self, _tile: Tile) {}

    /// The falling tile became part of the board
    fn tile_locked(&mut self, _tile: Tile) {}

    /// The bottom row was removed; tiles are in left-to-right order
    fn row_cleared(&mut self, _tiles: &[Tile]) {}

    /// The session ended with this final score
    fn game_over(&mut self, _final_score: u32) {}
}

/// Observer that ignores every notification
#[derive(Debug, Default)]
pub struct NullObserver;

impl SessionObserver for NullObserver {}

/// A notification captured by [`Recorder`]
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    ElapsedChanged(f32),
    ScoreChanged(u32),
    ComboChanged(u32),
    BonusClear,
    PlainClear,
    TileSpawned(Tile),
    TileMoved(Tile),
    TileLocked(Tile),
    RowCleared(Vec<Tile>),
    GameOver(u32),
}

/// Observer that records every notification in order
///
/// Built for tests and headless drivers that assert on or replay the exact
/// notification stream.
#[derive(Debug, Default)]
pub struct Recorder {
    events: Vec<SessionEvent>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// All notifications recorded so far, oldest first
    pub fn events(&self) -> &[SessionEvent] {
        &self.events
    }

    /// Drain and return the recorded notifications
    pub fn take_events(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.events)
    }
}

impl SessionObserver for Recorder {
    fn elapsed_changed(&mut self, elapsed: f32) {
        self.events.push(SessionEvent::ElapsedChanged(elapsed));
    }

    fn score_changed(&mut self, score: u32) {
        self.events.push(SessionEvent::ScoreChanged(score));
    }

    fn combo_changed(&mut self, combo: u32) {
        self.events.push(SessionEvent::ComboChanged(combo));
    }

    fn bonus_clear(&mut self) {
        self.events.push(SessionEvent::BonusClear);
    }

    fn plain_clear(&mut self) {
        self.events.push(SessionEvent::PlainClear);
    }

    fn tile_spawned(&mut self, tile: Tile) {
        self.events.push(SessionEvent::TileSpawned(tile));
    }

    fn tile_moved(&mut self, tile: Tile) {
        self.events.push(SessionEvent::TileMoved(tile));
    }

    fn tile_locked(&mut self, tile: Tile) {
        self.events.push(SessionEvent::TileLocked(tile));
    }

    fn row_cleared(&mut self, tiles: &[Tile]) {
        self.events.push(SessionEvent::RowCleared(tiles.to_vec()));
    }

    fn game_over(&mut self, final_score: u32) {
        self.events.push(SessionEvent::GameOver(final_score));
    }
}
