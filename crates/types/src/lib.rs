//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data with no external dependencies, so they can be used
//! by the engine, the runtime, the input map and the terminal renderer alike.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9, left to right)
//! - **Height**: 20 rows (indexed 0-19, row 0 is the top)
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `BASE_TICK_MS` | 700 | Gravity interval below 500 points |
//! | `RESTART_DELAY_MS` | 2000 | Pause between game over and the automatic restart |
//! | `FRAME_MS` | 16 | Fixed timestep of the runtime loop (~60 FPS) |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{Color, Command, Direction, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let kind = PieceKind::from_str("t").unwrap();
//! assert_eq!(kind, PieceKind::T);
//! assert_eq!(kind.color(), Color::Magenta);
//!
//! assert_eq!(Command::from_str("left"), Some(Command::Move(Direction::Left)));
//! assert_eq!(Command::from_str("rotate"), Some(Command::Rotate));
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Gravity interval used until the score reaches the first speed threshold.
pub const BASE_TICK_MS: u32 = 700;

/// Pause after game over before a fresh session starts.
pub const RESTART_DELAY_MS: u32 = 2000;

/// Fixed timestep of the runtime loop (16ms ≈ 60 FPS).
pub const FRAME_MS: u32 = 16;

/// Points awarded per cleared line.
pub const LINE_CLEAR_POINTS: u32 = 100;

/// Level step function: `(minimum score, level)`, highest threshold first.
///
/// Scores below the last threshold are level 1.
pub const LEVEL_THRESHOLDS: [(u32, u32); 4] = [(2500, 5), (1500, 4), (1000, 3), (500, 2)];

/// Gravity step function: `(minimum score, interval ms)`, highest threshold first.
///
/// Scores below the last threshold use [`BASE_TICK_MS`]. The score breakpoints match
/// [`LEVEL_THRESHOLDS`] but the two tables are tuned independently.
pub const TICK_INTERVAL_THRESHOLDS: [(u32, u32); 4] =
    [(2500, 100), (1500, 200), (1000, 300), (500, 500)];

/// The seven tetromino piece kinds
///
/// Each kind has a fixed display color:
/// - **I**: Cyan
/// - **J**: Blue
/// - **L**: Orange
/// - **O**: Yellow
/// - **S**: Green
/// - **T**: Magenta
/// - **Z**: Red
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// Every kind, in catalog order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// ```
    /// use blockfall_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("x"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            "o" => Some(PieceKind::O),
            "s" => Some(PieceKind::S),
            "t" => Some(PieceKind::T),
            "z" => Some(PieceKind::Z),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::J => "j",
            PieceKind::L => "l",
            PieceKind::O => "o",
            PieceKind::S => "s",
            PieceKind::T => "t",
            PieceKind::Z => "z",
        }
    }

    /// Display color of this kind.
    pub fn color(&self) -> Color {
        match self {
            PieceKind::I => Color::Cyan,
            PieceKind::J => Color::Blue,
            PieceKind::L => Color::Orange,
            PieceKind::O => Color::Yellow,
            PieceKind::S => Color::Green,
            PieceKind::T => Color::Magenta,
            PieceKind::Z => Color::Red,
        }
    }
}

/// Color identifier stored in occupied board cells.
///
/// The engine only compares colors; mapping them to terminal RGB values is the
/// renderer's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Cyan,
    Blue,
    Orange,
    Yellow,
    Green,
    Magenta,
    Red,
}

impl Color {
    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Cyan => "cyan",
            Color::Blue => "blue",
            Color::Orange => "orange",
            Color::Yellow => "yellow",
            Color::Green => "green",
            Color::Magenta => "magenta",
            Color::Red => "red",
        }
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(Color)`: Occupied by a locked block of that color
pub type Cell = Option<Color>;

/// Translation directions accepted by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Down,
}

impl Direction {
    /// Column/row delta of a one-step move: `(dx, dy)`.
    pub fn offset(&self) -> (i32, i32) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Down => (0, 1),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Down => "down",
        }
    }
}

/// Discrete commands delivered to a session by the presentation layer.
///
/// Commands are fire-and-forget: an illegal move or rotation is dropped by the
/// engine without any error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Translate the active piece one cell
    Move(Direction),
    /// Advance the active piece to its next rotation state
    Rotate,
}

impl Command {
    /// Parse a command from its string name (case-insensitive).
    ///
    /// ```
    /// use blockfall_types::{Command, Direction};
    ///
    /// assert_eq!(Command::from_str("Down"), Some(Command::Move(Direction::Down)));
    /// assert_eq!(Command::from_str("spin"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "left" => Some(Command::Move(Direction::Left)),
            "right" => Some(Command::Move(Direction::Right)),
            "down" => Some(Command::Move(Direction::Down)),
            "rotate" => Some(Command::Rotate),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Command::Move(direction) => direction.as_str(),
            Command::Rotate => "rotate",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timing_defaults() {
        assert_eq!(BASE_TICK_MS, 700);
        assert_eq!(RESTART_DELAY_MS, 2000);
        assert_eq!(LINE_CLEAR_POINTS, 100);
    }

    #[test]
    fn threshold_tables_are_sorted_descending() {
        for table in [LEVEL_THRESHOLDS, TICK_INTERVAL_THRESHOLDS] {
            assert!(table.windows(2).all(|w| w[0].0 > w[1].0));
        }
    }

    #[test]
    fn every_kind_has_a_distinct_color() {
        for (i, a) in PieceKind::ALL.iter().enumerate() {
            for b in &PieceKind::ALL[i + 1..] {
                assert_ne!(a.color(), b.color());
            }
        }
    }

    #[test]
    fn kind_string_roundtrip() {
        for kind in PieceKind::ALL {
            assert_eq!(PieceKind::from_str(kind.as_str()), Some(kind));
        }
    }

    #[test]
    fn command_names() {
        assert_eq!(Command::Move(Direction::Left).as_str(), "left");
        assert_eq!(Command::Rotate.as_str(), "rotate");
        assert_eq!(Direction::Down.offset(), (0, 1));
    }
}
