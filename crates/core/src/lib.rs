//! Core simulation module - pure, deterministic, and testable
//!
//! This module contains the whole falling-block simulation: piece catalog,
//! bag-randomized sequencing, rotation, collision validation, locking and
//! line clearing, and the fixed-cadence drop scheduler. It has **zero
//! dependencies** on UI, audio, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Unit tests for every game rule
//! - **Portable**: Can run in any host (terminal, GUI, headless)
//! - **Fast**: Zero-allocation hot paths for per-frame processing
//!
//! # Module Structure
//!
//! - [`catalog`]: hand-authored shape matrices, colors, and the clockwise
//!   quarter-turn rotation
//! - [`sequence`]: seeded LCG and the seven-piece bag randomizer
//! - [`playfield`]: 10x20 grid plus two hidden staging rows, with the
//!   row-shift line compaction
//! - [`piece`]: the active falling piece and its spawn rule
//! - [`collision`]: pure bounds/overlap validity predicate
//! - [`placement`]: locking, top-out detection, and line clearing
//! - [`scheduler`]: frame counting for automatic descent
//! - [`session`]: the owning [`GameSession`] a host drives with ticks and
//!   intents
//! - [`snapshot`]: read-only per-frame views for renderers
//!
//! # Game Rules
//!
//! - **Bag sequencing**: every kind appears exactly once per bag, so
//!   repeats are at most 12 draws apart
//! - **Fixed-pivot rotation**: a single clockwise quarter turn, applied
//!   only when it fits in place - no wall kicks
//! - **Gravity**: the piece descends every 36th tick (threshold 35);
//!   a blocked descent locks the piece where it stands
//! - **Top-out**: a lock reaching above row 0 ends the game without
//!   touching the board
//!
//! # Example
//!
//! ```
//! use blockfall_core::GameSession;
//! use blockfall_core::types::GameIntent;
//!
//! let mut game = GameSession::new(12345);
//! game.apply_intent(GameIntent::MoveRight);
//! for _ in 0..120 {
//!     game.tick();
//! }
//! assert!(!game.paused());
//! ```

pub mod catalog;
pub mod collision;
pub mod piece;
pub mod placement;
pub mod playfield;
pub mod scheduler;
pub mod sequence;
pub mod session;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use catalog::{color_of, shape_of, ShapeMatrix};
pub use collision::is_valid_move;
pub use piece::ActivePiece;
pub use playfield::Playfield;
pub use scheduler::DropClock;
pub use sequence::{PieceSequence, SimpleRng};
pub use session::GameSession;
pub use snapshot::{ActiveSnapshot, SessionSnapshot};
