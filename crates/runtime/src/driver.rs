//! The game loop task.
//!
//! The task is the session's only writer. It alternates between receiving
//! commands (queued on the session, applied at the next frame) and frames,
//! which advance the session by the measured elapsed time and publish a
//! fresh snapshot.

use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio::time::{interval, Instant, MissedTickBehavior};

use blockfall_core::{Session, SessionSnapshot};

use crate::event_log::{unix_ms, EventRecord};
use crate::types::Command;

/// Run `session` until the command channel closes.
pub(crate) async fn run_session(
    mut session: Session,
    mut commands: mpsc::Receiver<Command>,
    state_tx: watch::Sender<SessionSnapshot>,
    log_tx: Option<mpsc::UnboundedSender<EventRecord>>,
    frame: Duration,
) {
    let mut ticker = interval(frame);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    let mut last_frame = Instant::now();
    // Sub-millisecond remainder carried into the next frame.
    let mut carry = Duration::ZERO;

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let now = Instant::now();
                let elapsed = carry + now.duration_since(last_frame);
                last_frame = now;

                let elapsed_ms = elapsed.as_millis().min(u32::MAX as u128) as u32;
                carry = elapsed - Duration::from_millis(elapsed_ms as u64);

                session.advance(elapsed_ms);
                publish_events(&mut session, log_tx.as_ref());
                state_tx.send_modify(|snapshot| session.snapshot_into(snapshot));
            }
            cmd = commands.recv() => match cmd {
                Some(command) => session.submit(command),
                None => break,
            },
        }
    }
}

fn publish_events(session: &mut Session, log_tx: Option<&mpsc::UnboundedSender<EventRecord>>) {
    match log_tx {
        Some(tx) => {
            let ts = unix_ms();
            for event in session.drain_events() {
                let _ = tx.send(EventRecord::from_event(event, ts));
            }
        }
        None => {
            session.drain_events().for_each(drop);
        }
    }
}
