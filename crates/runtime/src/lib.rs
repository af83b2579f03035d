//! Session runtime - drives a [`Session`](blockfall_core::Session) on a tokio task
//!
//! One task owns the session and is its only writer. Front-ends talk to it
//! through a [`SessionHandle`]:
//!
//! - commands go over a bounded channel and are dropped when it is full
//! - snapshots come back over a `watch` channel, updated once per frame
//!
//! ```no_run
//! use blockfall_runtime::{RuntimeConfig, SessionRuntime};
//! use blockfall_runtime::types::Direction;
//!
//! let rt = SessionRuntime::start(RuntimeConfig::from_env())?;
//! rt.handle().submit_move(Direction::Left);
//! let state = rt.handle().current_state();
//! println!("score {}", state.score);
//! rt.shutdown()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod config;
mod driver;
pub mod event_log;
pub mod handle;

pub use blockfall_types as types;

pub use config::RuntimeConfig;
pub use event_log::{open_event_log, EventRecord};
pub use handle::{spawn_session, spawn_with_session, SessionHandle, SessionRuntime};
