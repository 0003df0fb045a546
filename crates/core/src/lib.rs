//! Blockfall core - the play-field simulation, pure and deterministic
//!
//! This crate contains the rules of a falling-block puzzle field: the grid,
//! the player-controlled block, move/rotate validation, placement and row
//! completion, plus a [`Session`] that runs a whole game on top of them. It
//! has no dependencies on rendering, input devices or I/O, so it runs the
//! same way in a terminal front end, a headless simulator or a test.
//!
//! # Module Structure
//!
//! - [`grid`]: fixed-size grid of cells, each empty or holding one piece
//! - [`block`]: the falling block; computes shifts and quarter turns
//! - [`transformation`]: old -> new coordinate maps produced by a block
//! - [`field`]: [`PlayField`], validates and commits transformations, places
//!   blocks and completes rows
//! - [`events`]: [`FieldEvent`] notifications and the listener registry
//! - [`shapes`]: spawn cells and pivots for the seven kinds
//! - [`rng`]: seeded 7-bag spawn source
//! - [`scoring`]: time-scaled row completion points
//! - [`gate`]: input pause after row completions
//! - [`session`]: one game: gravity, stash, instant place, pause, game over
//! - [`snapshot`]: serializable view of a session
//!
//! # Rules
//!
//! - A move or rotation is all-or-nothing: every target cell must be in bounds
//!   and empty or already owned by the moving block.
//! - A blocked sideways, upward or rotational request is ignored.
//! - A blocked downward move places the block; only the rows it touches are
//!   checked for completion, and full rows collapse immediately.
//! - Rotation is a quarter turn about the block's pivot with no kick offsets.
//!
//! # Example
//!
//! ```
//! use blockfall_core::{GameConfig, Session};
//! use blockfall_core::types::GameAction;
//!
//! let mut session = Session::new(GameConfig::default(), Vec::new()).unwrap();
//! session.start();
//!
//! session.apply_action(GameAction::MoveRight);
//! session.apply_action(GameAction::RotateCw);
//! session.apply_action(GameAction::InstantPlace);
//!
//! assert_eq!(session.blocks_placed(), 1);
//! ```
//!
//! # Timing
//!
//! Time only moves through [`Session::tick`]:
//! - **Tick Rate**: callers typically step 16ms per frame
//! - **Gravity**: one downward move every `gravity_ms` (1000ms by default)
//! - **Row clear pause**: input is dropped for 180ms after rows complete

pub mod block;
pub mod config;
pub mod error;
pub mod events;
pub mod field;
pub mod gate;
pub mod grid;
pub mod rng;
pub mod scoring;
pub mod session;
pub mod shapes;
pub mod snapshot;
pub mod transformation;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use block::Block;
pub use config::GameConfig;
pub use error::{BlockError, ConfigError};
pub use events::{FieldEvent, Listener, Listeners};
pub use field::{MoveOutcome, PlayField};
pub use gate::DelayGate;
pub use grid::{BlockId, BlockPiece, Cell, Grid};
pub use rng::{PieceBag, SimpleRng};
pub use scoring::{row_completion_points, Score};
pub use session::Session;
pub use shapes::{spawn_block, spawn_shape};
pub use snapshot::{ActiveSnapshot, SessionSnapshot};
pub use transformation::{BlockTransformation, TransformKind};
