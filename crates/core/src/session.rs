//! Session module - the game state machine
//!
//! A [`Session`] owns the board and the active piece and is the only place the
//! game state changes. Commands are queued by [`Session::submit`] and applied
//! in order at the start of the next tick, so command handling and gravity
//! never interleave.
//!
//! Two driving styles are supported:
//! - [`Session::tick`]: one gravity step per call, for callers that own the timer.
//! - [`Session::advance`]: fixed-timestep driver fed with elapsed milliseconds; it
//!   paces gravity from the score and performs the delayed restart after game over.

use std::collections::VecDeque;

use crate::board::Board;
use crate::config::SessionConfig;
use crate::pieces::ActivePiece;
use crate::rng::PieceGenerator;
use crate::rules::fits;
use crate::scoring::{level_for_score, line_clear_score, tick_interval_ms};
use crate::snapshot::{ActiveSnapshot, SessionSnapshot};
use crate::types::{Command, Direction, PieceKind};

/// Commands beyond this many pending ones are dropped.
pub const MAX_PENDING_COMMANDS: usize = 64;

/// Unconsumed events beyond this many push out the oldest.
const EVENT_BACKLOG: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Running,
    /// Board frozen, commands ignored, waiting for the automatic restart.
    GameOver,
}

/// What a tick or frame did to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// No gravity step happened.
    Idle,
    /// The active piece fell one row.
    Moved,
    /// The piece locked and a new one spawned.
    Locked { lines_cleared: u32 },
    /// The piece locked and the next one could not spawn.
    GameOver { final_score: u32 },
    /// A fresh session replaced the finished one.
    Restarted,
}

/// Notable session changes, queued for observers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    Locked {
        kind: PieceKind,
        lines_cleared: u32,
        score: u32,
        level: u32,
    },
    GameOver {
        final_score: u32,
    },
    Restarted,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct Session {
    config: SessionConfig,
    board: Board,
    active: ActivePiece,
    generator: PieceGenerator,
    pending: VecDeque<Command>,
    events: VecDeque<SessionEvent>,
    phase: Phase,
    score: u32,
    level: u32,
    lines: u32,
    final_score: Option<u32>,
    gravity_timer_ms: u32,
    restart_timer_ms: u32,
}

impl Session {
    /// Create a session with a uniform piece generator seeded from the config
    pub fn new(config: SessionConfig) -> Self {
        Self::with_generator(config, PieceGenerator::uniform(config.seed))
    }

    pub fn with_generator(config: SessionConfig, generator: PieceGenerator) -> Self {
        let board = Board::new(config.width, config.height);
        Self::from_board(config, board, generator)
    }

    /// Create a session on a pre-filled board.
    ///
    /// The board's dimensions override the config's. If the first piece does not
    /// fit, the session starts out in [`Phase::GameOver`].
    pub fn from_board(mut config: SessionConfig, board: Board, mut generator: PieceGenerator) -> Self {
        config.width = board.width();
        config.height = board.height();
        let active = ActivePiece::spawn(generator.next_kind(), config.width);

        let mut session = Self {
            config,
            board,
            active,
            generator,
            pending: VecDeque::new(),
            events: VecDeque::new(),
            phase: Phase::Running,
            score: 0,
            level: 1,
            lines: 0,
            final_score: None,
            gravity_timer_ms: 0,
            restart_timer_ms: 0,
        };
        if !fits(&session.board, &session.active) {
            session.enter_game_over();
        }
        session
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The active piece. While the game is over this is the piece that failed to spawn.
    pub fn active(&self) -> &ActivePiece {
        &self.active
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn final_score(&self) -> Option<u32> {
        self.final_score
    }

    pub fn pending_commands(&self) -> usize {
        self.pending.len()
    }

    /// Current gravity interval, derived from the score
    pub fn tick_interval_ms(&self) -> u32 {
        tick_interval_ms(self.score, self.config.base_tick_ms)
    }

    /// Queue a command for the next tick. Ignored while the game is over.
    pub fn submit(&mut self, command: Command) {
        if self.is_game_over() || self.pending.len() >= MAX_PENDING_COMMANDS {
            return;
        }
        self.pending.push_back(command);
    }

    pub fn submit_move(&mut self, direction: Direction) {
        self.submit(Command::Move(direction));
    }

    pub fn submit_rotate(&mut self) {
        self.submit(Command::Rotate);
    }

    /// Apply every queued command in submission order
    pub fn drain_commands(&mut self) {
        while let Some(command) = self.pending.pop_front() {
            self.apply(command);
        }
    }

    /// Apply a command immediately. Returns whether the piece changed.
    pub fn apply(&mut self, command: Command) -> bool {
        if self.is_game_over() {
            return false;
        }
        match command {
            Command::Move(direction) => {
                let (dx, dy) = direction.offset();
                self.try_move(dx, dy)
            }
            Command::Rotate => self.try_rotate(),
        }
    }

    fn try_move(&mut self, dx: i32, dy: i32) -> bool {
        let candidate = self.active.moved(dx, dy);
        if !fits(&self.board, &candidate) {
            return false;
        }
        self.active = candidate;
        true
    }

    /// Advance to the next rotation state in place; keep the current one if it does not fit
    fn try_rotate(&mut self) -> bool {
        let candidate = self.active.rotated(1);
        if !fits(&self.board, &candidate) {
            return false;
        }
        self.active = candidate;
        true
    }

    /// Apply queued commands, then perform one gravity step.
    pub fn tick(&mut self) -> TickOutcome {
        if self.is_game_over() {
            return TickOutcome::Idle;
        }
        self.drain_commands();
        self.gravity_step()
    }

    /// Fixed-timestep update with `elapsed_ms` since the previous call.
    ///
    /// While running, queued commands are applied every call and gravity fires
    /// once the accumulated time reaches the current tick interval. The interval
    /// is re-read on every call, so a score change takes effect from the next
    /// step on. While the game is over, the restart delay is counted down instead.
    pub fn advance(&mut self, elapsed_ms: u32) -> TickOutcome {
        match self.phase {
            Phase::GameOver => {
                self.restart_timer_ms = self.restart_timer_ms.saturating_add(elapsed_ms);
                if self.restart_timer_ms >= self.config.restart_delay_ms {
                    self.restart();
                    return TickOutcome::Restarted;
                }
                TickOutcome::Idle
            }
            Phase::Running => {
                self.drain_commands();
                self.gravity_timer_ms = self.gravity_timer_ms.saturating_add(elapsed_ms);
                let interval = self.tick_interval_ms();
                if self.gravity_timer_ms < interval {
                    return TickOutcome::Idle;
                }
                // Keep the overshoot so the cadence does not drift with the frame size.
                self.gravity_timer_ms -= interval;
                self.gravity_step()
            }
        }
    }

    fn gravity_step(&mut self) -> TickOutcome {
        if self.try_move(0, 1) {
            return TickOutcome::Moved;
        }
        self.lock_active()
    }

    /// Lock the active piece, clear lines, score, then spawn the next piece
    fn lock_active(&mut self) -> TickOutcome {
        let piece = self.active;
        let locked = self.board.lock(&piece.occupied_cells(), piece.color());
        assert!(
            locked,
            "active piece {:?} overlaps the board or leaves its bounds at lock time",
            piece
        );

        let lines_cleared = self.board.clear_completed_lines() as u32;
        self.lines += lines_cleared;
        self.score = self
            .score
            .saturating_add(line_clear_score(lines_cleared as usize));
        self.level = level_for_score(self.score);
        self.push_event(SessionEvent::Locked {
            kind: piece.kind,
            lines_cleared,
            score: self.score,
            level: self.level,
        });

        if !self.spawn_next() {
            self.enter_game_over();
            return TickOutcome::GameOver {
                final_score: self.score,
            };
        }
        TickOutcome::Locked { lines_cleared }
    }

    /// Spawn a fresh piece. Returns false when it does not fit.
    fn spawn_next(&mut self) -> bool {
        let kind = self.generator.next_kind();
        self.active = ActivePiece::spawn(kind, self.config.width);
        fits(&self.board, &self.active)
    }

    fn enter_game_over(&mut self) {
        self.phase = Phase::GameOver;
        self.final_score = Some(self.score);
        self.pending.clear();
        self.restart_timer_ms = 0;
        self.push_event(SessionEvent::GameOver {
            final_score: self.score,
        });
    }

    /// Reset to a fresh running session: empty board, new piece, score 0, level 1.
    pub fn restart(&mut self) {
        self.board.clear();
        self.score = 0;
        self.level = 1;
        self.lines = 0;
        self.final_score = None;
        self.pending.clear();
        self.gravity_timer_ms = 0;
        self.restart_timer_ms = 0;
        self.phase = Phase::Running;
        self.push_event(SessionEvent::Restarted);
        if !self.spawn_next() {
            self.enter_game_over();
        }
    }

    fn push_event(&mut self, event: SessionEvent) {
        if self.events.len() >= EVENT_BACKLOG {
            self.events.pop_front();
        }
        self.events.push_back(event);
    }

    /// Take all events recorded since the previous call, oldest first.
    pub fn drain_events(&mut self) -> impl Iterator<Item = SessionEvent> + '_ {
        self.events.drain(..)
    }

    /// Copy the renderable state into `out`, reusing its board allocation.
    pub fn snapshot_into(&self, out: &mut SessionSnapshot) {
        out.width = self.board.width();
        out.height = self.board.height();
        out.board.clear();
        out.board.extend_from_slice(self.board.cells());
        out.active = match self.phase {
            Phase::Running => Some(ActiveSnapshot::from(self.active)),
            Phase::GameOver => None,
        };
        out.score = self.score;
        out.level = self.level;
        out.lines = self.lines;
        out.game_over = self.is_game_over();
        out.final_score = self.final_score;
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let mut s = SessionSnapshot::empty(self.board.width(), self.board.height());
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}
