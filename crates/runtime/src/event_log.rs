//! JSON-lines event log.
//!
//! Records are sent over an unbounded channel to a writer task that appends one
//! JSON object per line. Write failures end the writer; senders keep working and
//! their records are discarded.

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::anyhow;
use serde::Serialize;
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use blockfall_core::SessionEvent;

/// One line of the event log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EventRecord {
    Lock {
        ts: u64,
        piece: &'static str,
        lines_cleared: u32,
        score: u32,
        level: u32,
    },
    GameOver {
        ts: u64,
        final_score: u32,
    },
    Restart {
        ts: u64,
    },
}

impl EventRecord {
    /// Build a record for a session event stamped with `ts` (ms since the Unix epoch).
    pub fn from_event(event: SessionEvent, ts: u64) -> Self {
        match event {
            SessionEvent::Locked {
                kind,
                lines_cleared,
                score,
                level,
            } => EventRecord::Lock {
                ts,
                piece: kind.as_str(),
                lines_cleared,
                score,
                level,
            },
            SessionEvent::GameOver { final_score } => EventRecord::GameOver { ts, final_score },
            SessionEvent::Restarted => EventRecord::Restart { ts },
        }
    }
}

pub fn unix_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// Open `path` for appending and spawn the writer task.
///
/// The task exits once every sender is dropped, after flushing the file.
pub async fn open_event_log(
    path: &str,
) -> anyhow::Result<(mpsc::UnboundedSender<EventRecord>, JoinHandle<()>)> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .await
        .map_err(|e| anyhow!("failed to open event log {}: {}", path, e))?;

    let (tx, mut rx) = mpsc::unbounded_channel::<EventRecord>();
    let writer = tokio::spawn(async move {
        let mut buf: Vec<u8> = Vec::with_capacity(256);

        while let Some(rec) = rx.recv().await {
            buf.clear();
            if serde_json::to_writer(&mut buf, &rec).is_err() {
                continue;
            }
            buf.push(b'\n');
            if file.write_all(&buf).await.is_err() {
                break;
            }
        }

        let _ = file.flush().await;
    });

    Ok((tx, writer))
}
