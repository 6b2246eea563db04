//! Session module - the tick-driven state machine for one play session
//!
//! Ties together all core components: board, clock, value stream, and
//! scoring. The caller owns the frame loop and calls [`Session::tick`] once
//! per frame with the elapsed delta and at most one command; the session
//! resolves everything that frame implies (movement, gravity, locking,
//! clearing, respawning, expiry) before returning.

use sumfall_types::{ClearKind, Command, Tile, SPAWN_X, SPAWN_Y};

use crate::board::Board;
use crate::clear::clear_bottom_row;
use crate::clock::SessionClock;
use crate::observe::SessionObserver;
use crate::rng::{RngValueProvider, ValueProvider};
use crate::scoring::ScoreCombo;

/// Lifecycle phase of a session
///
/// Spawning and locking resolve synchronously inside `start`/`tick`, so only
/// these three phases are ever observable between calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Created but not started
    Ready,
    /// A tile is falling and the clock is running
    Active,
    /// Terminal; further ticks are no-ops
    GameOver,
}

/// Complete state of one play session
pub struct Session {
    board: Board,
    active: Option<Tile>,
    provider: Box<dyn ValueProvider>,
    totals: ScoreCombo,
    clock: SessionClock,
    phase: Phase,
}

impl Session {
    /// Create a session with a seeded value stream
    pub fn new(seed: u32) -> Self {
        Self::with_provider(Box::new(RngValueProvider::new(seed)))
    }

    /// Create a session drawing tile values from the given provider
    pub fn with_provider(provider: Box<dyn ValueProvider>) -> Self {
        Self {
            board: Board::new(),
            active: None,
            provider,
            totals: ScoreCombo::new(),
            clock: SessionClock::new(),
            phase: Phase::Ready,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.totals.score()
    }

    pub fn combo(&self) -> u32 {
        self.totals.combo()
    }

    pub fn elapsed(&self) -> f32 {
        self.clock.elapsed()
    }

    pub fn active_tile(&self) -> Option<Tile> {
        self.active
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    #[cfg(test)]
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Start the session: spawn the first tile, then prime the displays
    ///
    /// The bring-up order is fixed: the tile appears first, then combo,
    /// elapsed, and score notify their reset values in that order.
    pub fn start(&mut self, obs: &mut dyn SessionObserver) {
        if self.phase != Phase::Ready {
            return;
        }
        self.phase = Phase::Active;

        let spawned = self.spawn(obs);

        self.totals.reset();
        self.clock.reset();
        obs.combo_changed(self.totals.combo());
        obs.elapsed_changed(self.clock.elapsed());
        obs.score_changed(self.totals.score());

        if !spawned {
            self.end_session(obs);
        }
    }

    /// Advance the session by one frame
    ///
    /// Order within a tick: the clock first (expiry ends the session and
    /// discards this frame's command), then at most one command, then the
    /// gravity step. A lock anywhere in the middle resolves its clear and
    /// respawn before the tick continues, so a fresh tile can still receive
    /// the same frame's gravity step.
    pub fn tick(&mut self, dt: f32, command: Option<Command>, obs: &mut dyn SessionObserver) {
        if self.phase != Phase::Active {
            return;
        }

        let expired = self.clock.advance(dt);
        obs.elapsed_changed(self.clock.elapsed());
        if expired {
            self.end_session(obs);
            return;
        }

        if let Some(command) = command {
            self.apply_command(command, obs);
        }

        // The command may have ended the session (blocked respawn after a lock)
        if self.phase != Phase::Active {
            return;
        }

        if self.clock.try_consume_step() {
            self.step_down(obs);
        }
    }

    /// Cancel the session immediately through the normal teardown
    pub fn abort(&mut self, obs: &mut dyn SessionObserver) {
        if self.phase == Phase::GameOver {
            return;
        }
        self.end_session(obs);
    }

    fn apply_command(&mut self, command: Command, obs: &mut dyn SessionObserver) {
        match command {
            Command::MoveLeft => self.shift(-1, obs),
            Command::MoveRight => self.shift(1, obs),
            Command::SoftDrop => {
                self.step_down(obs);
            }
            Command::HardDrop => self.hard_drop(obs),
        }
    }

    /// Shift the falling tile horizontally; blocked shifts are silent no-ops
    fn shift(&mut self, dx: i8, obs: &mut dyn SessionObserver) {
        let Some(active) = self.active else {
            return;
        };

        if self.board.can_move_to(active.x + dx, active.y) {
            let moved = Tile {
                x: active.x + dx,
                ..active
            };
            self.active = Some(moved);
            obs.tile_moved(moved);
        }
    }

    /// Step the falling tile one row down, locking it when unsupported
    /// Returns true if the tile moved, false if it locked instead
    fn step_down(&mut self, obs: &mut dyn SessionObserver) -> bool {
        let Some(active) = self.active else {
            return false;
        };

        if self.board.can_move_to(active.x, active.y - 1) {
            let moved = Tile {
                y: active.y - 1,
                ..active
            };
            self.active = Some(moved);
            obs.tile_moved(moved);
            return true;
        }

        self.lock_active(obs);
        false
    }

    /// Send the falling tile straight down and lock it where it settles
    ///
    /// The settled position is reported as a single move, not one per cell.
    fn hard_drop(&mut self, obs: &mut dyn SessionObserver) {
        let Some(active) = self.active else {
            return;
        };

        let mut tile = active;
        while self.board.can_move_to(tile.x, tile.y - 1) {
            tile.y -= 1;
        }

        if tile.y != active.y {
            self.active = Some(tile);
            obs.tile_moved(tile);
        }

        self.lock_active(obs);
    }

    /// Lock the falling tile, resolve the bottom row, and respawn
    fn lock_active(&mut self, obs: &mut dyn SessionObserver) {
        let Some(active) = self.active.take() else {
            return;
        };

        // Movement validation only ever rests the falling tile on free cells
        let locked = self.board.lock(active);
        debug_assert!(locked, "lock attempted into an occupied cell");
        obs.tile_locked(active);

        self.resolve_clear(obs);

        if !self.spawn(obs) {
            self.end_session(obs);
        }
    }

    /// Pay out the bottom row if it just completed
    ///
    /// Notification order on a clear: score, then the bonus/plain cue, then
    /// the combo (only when its value changed), then the removed tiles.
    fn resolve_clear(&mut self, obs: &mut dyn SessionObserver) {
        let Some(clear) = clear_bottom_row(&mut self.board) else {
            return;
        };

        let outcome = self.totals.apply_clear(clear.kind);
        obs.score_changed(outcome.score);
        match clear.kind {
            ClearKind::Bonus => obs.bonus_clear(),
            ClearKind::Plain => obs.plain_clear(),
        }
        if outcome.combo_changed {
            obs.combo_changed(outcome.combo);
        }
        obs.row_cleared(&clear.tiles);
    }

    /// Place a fresh tile at the spawn cell
    ///
    /// The value is drawn before the occupancy check, so a blocked spawn
    /// still consumes one value from the stream. Returns false when blocked.
    fn spawn(&mut self, obs: &mut dyn SessionObserver) -> bool {
        let value = self.provider.next_value();

        if self.board.is_occupied(SPAWN_X, SPAWN_Y) {
            return false;
        }

        let tile = Tile::new(SPAWN_X, SPAWN_Y, value);
        self.active = Some(tile);
        obs.tile_spawned(tile);
        true
    }

    /// End the session: clamp the clock, drop every tile, report the score
    ///
    /// The one teardown path, shared by timer expiry, blocked spawns, and
    /// abort. The phase change makes it unreachable twice.
    fn end_session(&mut self, obs: &mut dyn SessionObserver) {
        self.phase = Phase::GameOver;

        self.clock.clamp_to_limit();
        obs.elapsed_changed(self.clock.elapsed());

        self.active = None;
        self.board.clear();

        obs.game_over(self.totals.score());
    }
}
