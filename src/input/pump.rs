//! Background line pumps.
//!
//! A pump owns the byte source for the duration of one read call and runs
//! blocking reads off the caller's execution path, publishing completed
//! lines into a bounded channel. Pumps never observe cancellation: the
//! consumer stops reading and the pump unwinds when its next send fails.
//! Until then an in-flight read keeps running; its result is discarded.

use tokio::io::AsyncRead;
use tokio::sync::mpsc;

use super::source::LineSource;
use crate::Result;

/// Channel capacity between a pump and its consumer.
///
/// One slot keeps at most a single completed line in flight, so the pump
/// blocks on its send until the consumer asks for more.
const HANDOFF_CAPACITY: usize = 1;

/// Spawn a pump that reads lines until the source is exhausted or fails.
///
/// The channel closes after exhaustion; a read failure is forwarded as the
/// final item before the pump stops.
pub(super) fn spawn_pump<R>(source: R) -> mpsc::Receiver<Result<String>>
where
    R: AsyncRead + Unpin + Send + 'static,
{
    let (tx, rx) = mpsc::channel(HANDOFF_CAPACITY);
    tokio::spawn(pump(LineSource::new(source), tx));
    rx
}

/// Spawn a pump that reads at most one line, then stops.
///
/// The channel yields one `Ok(line)` or one `Err`, or closes without an
/// item when the source is already exhausted.
pub(super) fn spawn_one_shot<R>(source: R) -> mpsc::Receiver<Result<String>>
where
    R: AsyncRead + Unpin + Send + 'static,
{
    let (tx, rx) = mpsc::channel(HANDOFF_CAPACITY);
    tokio::spawn(async move {
        let mut source = LineSource::new(source);
        match source.next_line().await {
            Ok(Some(line)) => {
                let _ = tx.send(Ok(line)).await;
            }
            Ok(None) => {}
            Err(e) => {
                let _ = tx.send(Err(e)).await;
            }
        }
    });
    rx
}

async fn pump<R: AsyncRead + Unpin>(
    mut source: LineSource<R>,
    tx: mpsc::Sender<Result<String>>,
) {
    loop {
        match source.next_line().await {
            Ok(Some(line)) => {
                if tx.send(Ok(line)).await.is_err() {
                    // Consumer went away; the read cursor stays wherever
                    // it has advanced to.
                    return;
                }
            }
            Ok(None) => return,
            Err(e) => {
                tracing::warn!(error = %e, "line pump read failed");
                let _ = tx.send(Err(e)).await;
                return;
            }
        }
    }
}
