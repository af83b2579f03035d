//! Terminal "game renderer" module.
//!
//! Renders session snapshots into a simple framebuffer that is flushed to the
//! terminal with crossterm. No widget or layout library is involved, which
//! keeps precise control over the aspect ratio (2 columns per board cell).

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{color_rgb, GameView, Layout, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
