//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the game rules and the session state machine.
//! It has **no dependencies** on the terminal, the async runtime, or I/O, so it is:
//!
//! - **Deterministic**: Same seed (or scripted sequence) produces identical games
//! - **Testable**: Every rule is a plain function or method on owned data
//! - **Portable**: Can be driven by a terminal loop, a tokio task, or a test
//!
//! # Module Structure
//!
//! - [`board`]: grid of locked cells with line clearing
//! - [`pieces`]: tetromino rotation tables and the active piece
//! - [`rules`]: the placement predicate shared by every move
//! - [`scoring`]: line-clear points, level and gravity step functions
//! - [`rng`]: uniform piece selection
//! - [`session`]: the state machine owning all of the above
//! - [`snapshot`]: read-only copies of a session for renderers
//!
//! # Game Rules
//!
//! - **Uniform draws**: every new piece is one of the seven kinds with equal probability
//! - **Simple rotation**: rotation steps to the next state in place, no wall kicks
//! - **Immediate lock**: a piece locks on the first gravity step it cannot fall
//! - **Scoring**: 100 points per cleared line, level and speed follow the score
//! - **Auto restart**: a fresh game starts 2 seconds after game over
//!
//! # Example
//!
//! ```
//! use blockfall_core::{PieceGenerator, Session, SessionConfig, TickOutcome};
//! use blockfall_core::types::{Direction, PieceKind};
//!
//! let mut session = Session::with_generator(
//!     SessionConfig::default(),
//!     PieceGenerator::sequence([PieceKind::O]),
//! );
//!
//! session.submit_move(Direction::Left);
//! assert_eq!(session.tick(), TickOutcome::Moved);
//! assert_eq!((session.active().x, session.active().y), (3, 1));
//! ```
//!
//! # Timing
//!
//! [`Session::tick`](session::Session::tick) performs exactly one gravity step.
//! [`Session::advance`](session::Session::advance) takes elapsed milliseconds and
//! fires gravity when the score-dependent interval has passed (700ms down to 100ms).

pub mod board;
pub mod config;
pub mod pieces;
pub mod rng;
pub mod rules;
pub mod scoring;
pub mod session;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use config::SessionConfig;
pub use pieces::{get_shape, rotation_count, ActivePiece, PieceCells};
pub use rng::{PieceGenerator, SimpleRng};
pub use rules::{can_place, fits};
pub use scoring::{level_for_score, line_clear_score, tick_interval_ms};
pub use session::{Phase, Session, SessionEvent, TickOutcome, MAX_PENDING_COMMANDS};
pub use snapshot::{ActiveSnapshot, SessionSnapshot};
