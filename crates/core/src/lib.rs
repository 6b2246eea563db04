//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains all the rules, state management, and simulation logic
//! for the falling-tile session. It has **zero dependencies** on UI, audio,
//! or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical sessions
//! - **Testable**: Every rule is exercised without a frontend
//! - **Portable**: Runs in any environment (terminal, engine, headless)
//! - **Fast**: Zero-allocation hot paths for tick processing
//!
//! # Module Structure
//!
//! - [`board`]: 7x10 playfield with occupancy queries and the bottom-row shift
//! - [`clear`]: bottom-row examination after a lock
//! - [`clock`]: session timer and the 0.3s gravity interval
//! - [`observe`]: the notification surface outer layers implement
//! - [`rng`]: seeded LCG and the tile value stream
//! - [`scoring`]: clear rewards and the combo chain
//! - [`session`]: the tick-driven state machine tying it all together
//!
//! # Game Rules
//!
//! - **One tile at a time** falls from the spawn cell (3, 9) toward row 0
//! - **Gravity** forces one down-step per 0.3s of accumulated tick time
//! - **Only the bottom row clears**, and only once per lock, with no cascade
//! - **Sum 23 is the bonus**: a full bottom row summing to exactly 23 pays
//!   `23 * combo + 7` and extends the combo; any other sum pays a flat 7 and
//!   collapses the combo
//! - **Sessions last 60 seconds**; a blocked spawn cell ends them early
//!
//! # Example
//!
//! ```
//! use sumfall_core::{NullObserver, Phase, Session};
//! use sumfall_types::Command;
//!
//! let mut obs = NullObserver;
//! let mut session = Session::new(12345);
//! session.start(&mut obs);
//!
//! // One frame: 16ms elapsed, one command
//! session.tick(0.016, Some(Command::HardDrop), &mut obs);
//!
//! assert_eq!(session.phase(), Phase::Active);
//! assert!(session.board().is_occupied(3, 0));
//! ```
//!
//! Call [`Session::tick`](session::Session::tick) every frame with the
//! elapsed seconds and at most one command; every notification an outer
//! layer needs arrives through its [`SessionObserver`](observe::SessionObserver).

pub mod board;
pub mod clear;
pub mod clock;
pub mod observe;
pub mod rng;
pub mod scoring;
pub mod session;

pub use sumfall_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use clear::{clear_bottom_row, Clear};
pub use clock::SessionClock;
pub use observe::{NullObserver, Recorder, SessionEvent, SessionObserver};
pub use rng::{RngValueProvider, SequenceValueProvider, SimpleRng, ValueProvider};
pub use scoring::{clear_points, ClearScore, ScoreCombo};
pub use session::{Phase, Session};
