//! Terminal input module.
//!
//! Maps `crossterm` key events to session [`Command`](crate::types::Command)s.
//! There is no key-repeat handling: each press (and each terminal auto-repeat)
//! is one command, which the session applies on its next frame.

pub mod map;

pub use blockfall_types as types;

pub use map::{map_key, should_quit};
