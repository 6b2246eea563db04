//! Shared types module - data structures and constants for the sumfall rules
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making
//! them usable in any context (core logic, display layers, autoplay drivers).
//!
//! # Board Dimensions
//!
//! The playfield is deliberately small:
//!
//! - **Width**: 7 columns (indexed 0-6)
//! - **Height**: 10 rows (indexed 0-9, row 0 at the bottom)
//! - **Spawn cell**: (3, 9) - the middle column of the top row
//!
//! Tiles descend by *decrementing* y; row 0 is the landing row and the only
//! row that can ever be cleared.
//!
//! # Timing Constants
//!
//! Timing values are in seconds of accumulated frame time:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `STEP_INTERVAL_SECS` | 0.3 | Gravity forces one down-step per interval |
//! | `SESSION_LIMIT_SECS` | 60.0 | Hard cap on a session's elapsed time |
//!
//! # Balance Constants
//!
//! Fixed game-balance numbers, not derived from the board geometry:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TILE_VALUE_RANGE` | 8 | Tile faces are drawn uniformly from 0..8 |
//! | `BONUS_SUM` | 23 | Bottom-row sum that triggers a bonus clear |
//! | `CLEAR_POINTS` | 7 | Flat reward for any clear |
//!
//! A bonus clear awards `BONUS_SUM * combo + CLEAR_POINTS` and increments the
//! combo; a plain clear awards `CLEAR_POINTS` and resets the combo.
//!
//! # Examples
//!
//! ```
//! use sumfall_types::{Command, Tile, BOARD_WIDTH, BOARD_HEIGHT, SPAWN_X, SPAWN_Y};
//!
//! // Board dimensions
//! assert_eq!(BOARD_WIDTH, 7);
//! assert_eq!(BOARD_HEIGHT, 10);
//!
//! // The spawn cell sits in the middle of the top row
//! assert_eq!((SPAWN_X, SPAWN_Y), (3, 9));
//!
//! // A freshly spawned tile
//! let tile = Tile::new(SPAWN_X, SPAWN_Y, 5);
//! assert_eq!(tile.value, 5);
//!
//! // Parse a command
//! let cmd = Command::from_str("hardDrop").unwrap();
//! assert_eq!(cmd, Command::HardDrop);
//! ```

/// Board width in cells (7 columns)
pub const BOARD_WIDTH: u8 = 7;

/// Board height in cells (10 rows, row 0 at the bottom)
pub const BOARD_HEIGHT: u8 = 10;

/// Column where new tiles appear (middle column, integer floor)
pub const SPAWN_X: i8 = (BOARD_WIDTH / 2) as i8;

/// Row where new tiles appear (top row)
pub const SPAWN_Y: i8 = (BOARD_HEIGHT - 1) as i8;

/// Accumulated frame time between forced gravity steps (0.3 s)
pub const STEP_INTERVAL_SECS: f32 = 0.3;

/// Maximum elapsed time per session (60 s); reaching it ends the session
pub const SESSION_LIMIT_SECS: f32 = 60.0;

/// Exclusive upper bound for tile face values (faces are 0..=7)
pub const TILE_VALUE_RANGE: u8 = 8;

/// Bottom-row sum that makes a clear a bonus clear
pub const BONUS_SUM: u32 = 23;

/// Flat points awarded for any clear (bonus clears add `BONUS_SUM * combo`)
pub const CLEAR_POINTS: u32 = 7;

/// A single numbered tile.
///
/// While falling, exactly one tile exists under session control and its
/// position mutates; once locked it belongs to the board and only moves when
/// a cleared row shifts everything down by one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile {
    /// Column, 0 at the left edge.
    pub x: i8,
    /// Row, 0 at the bottom edge.
    pub y: i8,
    /// Face value in `0..TILE_VALUE_RANGE`.
    pub value: u8,
}

impl Tile {
    /// Create a tile at the given cell with the given face value.
    ///
    /// # Examples
    ///
    /// ```
    /// use sumfall_types::Tile;
    ///
    /// let tile = Tile::new(3, 9, 7);
    /// assert_eq!((tile.x, tile.y, tile.value), (3, 9, 7));
    /// ```
    pub fn new(x: i8, y: i8, value: u8) -> Self {
        Self { x, y, value }
    }
}

/// A cell on the board
///
/// - `None`: empty cell
/// - `Some(value)`: cell occupied by a locked tile with that face value
///
/// Used internally by the board as a flat array of cells.
pub type Cell = Option<u8>;

/// Discrete player commands, delivered at most once per tick
///
/// All commands are edge-triggered: holding a key does not repeat them. An
/// invalidated command (blocked by a wall or an occupied cell) is a silent
/// no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Shift the falling tile one column left
    MoveLeft,
    /// Shift the falling tile one column right
    MoveRight,
    /// Step the falling tile one row down (locks it if unsupported)
    SoftDrop,
    /// Send the falling tile straight down and lock it where it settles
    HardDrop,
}

impl Command {
    /// Parse a command from its string form (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use sumfall_types::Command;
    ///
    /// assert_eq!(Command::from_str("moveLeft"), Some(Command::MoveLeft));
    /// assert_eq!(Command::from_str("SOFTDROP"), Some(Command::SoftDrop));
    /// assert_eq!(Command::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(Command::MoveLeft),
            "moveright" => Some(Command::MoveRight),
            "softdrop" => Some(Command::SoftDrop),
            "harddrop" => Some(Command::HardDrop),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::MoveLeft => "moveLeft",
            Command::MoveRight => "moveRight",
            Command::SoftDrop => "softDrop",
            Command::HardDrop => "hardDrop",
        }
    }
}

/// How a full bottom row scored
///
/// - **Bonus**: the seven face values summed to exactly [`BONUS_SUM`]
/// - **Plain**: any other sum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearKind {
    Bonus,
    Plain,
}

impl ClearKind {
    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            ClearKind::Bonus => "bonus",
            ClearKind::Plain => "plain",
        }
    }
}
