//! Session handles for front-ends.

use std::time::Duration;

use anyhow::anyhow;
use tokio::runtime::Runtime;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

use blockfall_core::{Session, SessionSnapshot};

use crate::config::RuntimeConfig;
use crate::driver::run_session;
use crate::event_log::open_event_log;
use crate::types::{Command, Direction};

/// Cheap, cloneable access to a running session.
///
/// Commands are fire-and-forget: when the channel is full or the game loop has
/// stopped, they are dropped.
#[derive(Debug, Clone)]
pub struct SessionHandle {
    commands: mpsc::Sender<Command>,
    state: watch::Receiver<SessionSnapshot>,
}

impl SessionHandle {
    /// Enqueue a command. Returns false if it was dropped.
    pub fn submit(&self, command: Command) -> bool {
        self.commands.try_send(command).is_ok()
    }

    pub fn submit_move(&self, direction: Direction) {
        self.submit(Command::Move(direction));
    }

    pub fn submit_rotate(&self) {
        self.submit(Command::Rotate);
    }

    /// Latest published snapshot.
    pub fn current_state(&self) -> SessionSnapshot {
        self.state.borrow().clone()
    }

    /// Receiver notified after every frame.
    pub fn subscribe(&self) -> watch::Receiver<SessionSnapshot> {
        self.state.clone()
    }

    /// True once the game loop has stopped.
    pub fn is_closed(&self) -> bool {
        self.commands.is_closed()
    }
}

/// Spawn the game loop for a new session built from `config`.
///
/// Must be called from within a tokio runtime. The loop stops when every
/// [`SessionHandle`] has been dropped.
pub async fn spawn_session(config: RuntimeConfig) -> anyhow::Result<(SessionHandle, JoinHandle<()>)> {
    let session = Session::new(config.session);
    spawn_with_session(session, &config).await
}

/// Spawn the game loop for an existing session; `config.session` is ignored.
pub async fn spawn_with_session(
    session: Session,
    config: &RuntimeConfig,
) -> anyhow::Result<(SessionHandle, JoinHandle<()>)> {
    let log_tx = match config.log_path.as_deref() {
        Some(path) => {
            // The writer task ends on its own once the game loop drops its sender.
            let (tx, _writer) = open_event_log(path).await?;
            Some(tx)
        }
        None => None,
    };

    let (cmd_tx, cmd_rx) = mpsc::channel::<Command>(config.max_pending_commands.max(1));
    let (state_tx, state_rx) = watch::channel(session.snapshot());
    let frame = Duration::from_millis(config.frame_ms.max(1) as u64);

    let task = tokio::spawn(run_session(session, cmd_rx, state_tx, log_tx, frame));

    Ok((
        SessionHandle {
            commands: cmd_tx,
            state: state_rx,
        },
        task,
    ))
}

/// A session running on its own tokio runtime, for synchronous front-ends.
pub struct SessionRuntime {
    rt: Runtime,
    handle: SessionHandle,
    task: JoinHandle<()>,
}

impl SessionRuntime {
    pub fn start(config: RuntimeConfig) -> anyhow::Result<Self> {
        let rt = Runtime::new().map_err(|e| anyhow!("failed to create tokio runtime: {}", e))?;
        let (handle, task) = rt.block_on(spawn_session(config))?;
        Ok(Self { rt, handle, task })
    }

    pub fn handle(&self) -> &SessionHandle {
        &self.handle
    }

    /// Stop the game loop and wait for it to finish.
    ///
    /// Clones of the handle taken earlier must be dropped first, or this blocks.
    pub fn shutdown(self) -> anyhow::Result<()> {
        let Self { rt, handle, task } = self;
        drop(handle);
        rt.block_on(task)
            .map_err(|e| anyhow!("session task failed: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blockfall_core::types::{Color, PieceKind};
    use blockfall_core::{Board, PieceGenerator, SessionConfig};
    use tokio::time::sleep;

    fn scripted(kinds: &[PieceKind]) -> Session {
        Session::with_generator(SessionConfig::default(), PieceGenerator::sequence(kinds))
    }

    #[tokio::test(start_paused = true)]
    async fn test_commands_apply_on_next_frame() {
        let config = RuntimeConfig::default();
        let (handle, _task) = spawn_with_session(scripted(&[PieceKind::O]), &config)
            .await
            .unwrap();

        assert_eq!(handle.current_state().active.unwrap().x, 4);
        handle.submit_move(Direction::Left);
        sleep(Duration::from_millis(50)).await;

        let state = handle.current_state();
        let active = state.active.unwrap();
        assert_eq!(active.x, 3);
        assert_eq!(active.y, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_gravity_follows_base_interval() {
        let config = RuntimeConfig::default();
        let (handle, _task) = spawn_with_session(scripted(&[PieceKind::O]), &config)
            .await
            .unwrap();

        sleep(Duration::from_millis(600)).await;
        assert_eq!(handle.current_state().active.unwrap().y, 0);

        sleep(Duration::from_millis(160)).await;
        assert_eq!(handle.current_state().active.unwrap().y, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_game_over_restarts_after_delay() {
        let mut board = Board::default();
        board.set(4, 1, Some(Color::Red));
        let session = Session::from_board(
            SessionConfig::default(),
            board,
            PieceGenerator::sequence([PieceKind::O]),
        );
        let config = RuntimeConfig::default();
        let (handle, _task) = spawn_with_session(session, &config).await.unwrap();

        let state = handle.current_state();
        assert!(state.game_over);
        assert!(state.active.is_none());

        // Ignored while the game is over.
        handle.submit_rotate();
        sleep(Duration::from_millis(1000)).await;
        assert!(handle.current_state().game_over);

        sleep(Duration::from_millis(1100)).await;
        let state = handle.current_state();
        assert!(!state.game_over);
        assert_eq!(state.score, 0);
        assert_eq!(state.level, 1);
        assert!(state.board.iter().all(|c| c.is_none()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_loop_stops_when_handles_drop() {
        let config = RuntimeConfig::default();
        let (handle, task) = spawn_with_session(scripted(&[PieceKind::T]), &config)
            .await
            .unwrap();
        let observer = handle.subscribe();

        drop(handle);
        task.await.unwrap();
        assert!(observer.has_changed().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_full_channel_drops_commands() {
        let config = RuntimeConfig {
            max_pending_commands: 2,
            ..RuntimeConfig::default()
        };
        let (handle, _task) = spawn_with_session(scripted(&[PieceKind::O]), &config)
            .await
            .unwrap();

        // The loop has not run yet, so nothing drains the channel.
        assert!(handle.submit(Command::Rotate));
        assert!(handle.submit(Command::Rotate));
        assert!(!handle.submit(Command::Rotate));
    }

    #[test]
    fn test_session_runtime_start_and_shutdown() {
        let rt = SessionRuntime::start(RuntimeConfig::default()).unwrap();
        let state = rt.handle().current_state();
        assert_eq!(state.width, 10);
        assert_eq!(state.height, 20);
        assert!(!state.game_over);
        rt.shutdown().unwrap();
    }
}
