//! Terminal falling-block game (default binary).
//!
//! The session runs on a tokio task owned by [`SessionRuntime`]; this thread
//! only polls keys, forwards commands and draws the latest snapshot.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use blockfall::input::{map_key, should_quit};
use blockfall::runtime::{RuntimeConfig, SessionRuntime};
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

fn main() -> Result<()> {
    let config = RuntimeConfig::from_env();
    if let Some(path) = &config.log_path {
        eprintln!("[blockfall] event log: {}", path);
    }
    let frame = Duration::from_millis(config.frame_ms as u64);
    let runtime = SessionRuntime::start(config)?;

    let mut term = TerminalRenderer::new();
    let result = term.enter().and_then(|()| run(&mut term, &runtime, frame));

    // Always try to restore terminal state.
    let _ = term.exit();
    runtime.shutdown()?;
    result
}

fn run(term: &mut TerminalRenderer, runtime: &SessionRuntime, frame: Duration) -> Result<()> {
    let handle = runtime.handle();
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let snapshot = handle.current_state();
        view.render_into(&snapshot, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input until the next frame.
        if !event::poll(frame)? {
            continue;
        }
        match event::read()? {
            Event::Key(key) if key.kind != KeyEventKind::Release => {
                if should_quit(key) {
                    return Ok(());
                }
                if let Some(command) = map_key(key) {
                    handle.submit(command);
                }
            }
            Event::Resize(_, _) => term.invalidate(),
            _ => {}
        }
    }
}
