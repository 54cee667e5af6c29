//! Single-line reads racing a cancellation token.

use tokio::io::AsyncRead;
use tokio_util::sync::CancellationToken;

use super::pump;
use crate::Error;

/// Outcome of a single cancellable line read.
///
/// Returned by [`read_line_tagged`] for callers that need to tell a
/// cancelled read apart from an exhausted or broken source. The plain
/// [`read_line`] collapses all three into an empty string.
#[derive(Debug)]
pub enum ReadOutcome {
    /// A full line arrived before anything else happened.
    Line(String),
    /// The cancellation token fired first.
    Cancelled,
    /// The source ended before a terminated line was available.
    Exhausted,
    /// The source failed with something other than clean exhaustion.
    Failed(Error),
}

impl ReadOutcome {
    /// Consume the outcome, yielding the line or an empty string.
    ///
    /// This is the backward-compatible collapse used by [`read_line`].
    pub fn into_line(self) -> String {
        match self {
            Self::Line(line) => line,
            Self::Cancelled | Self::Exhausted | Self::Failed(_) => String::new(),
        }
    }

    /// The line, if one was read.
    pub fn as_line(&self) -> Option<&str> {
        match self {
            Self::Line(line) => Some(line),
            _ => None,
        }
    }

    /// Check if the read was cancelled.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }

    /// Check if the source was exhausted.
    pub fn is_exhausted(&self) -> bool {
        matches!(self, Self::Exhausted)
    }
}

/// Read a single line from the source, or an empty string if the token is
/// cancelled first.
///
/// The read itself runs on a background pump, so a source that never yields
/// cannot hold up cancellation. When the token wins, the pump's in-flight
/// read is abandoned rather than joined: one background read per cancelled
/// call keeps running until the source produces data or is closed.
///
/// An exhausted or failing source also yields an empty string. Use
/// [`read_line_tagged`] to distinguish those cases.
///
/// # Example
///
/// ```ignore
/// use clikit::{read_line, shutdown_token};
///
/// let cancel = shutdown_token();
/// let answer = read_line(tokio::io::stdin(), &cancel).await;
/// if answer == "yes" {
///     proceed();
/// }
/// ```
pub async fn read_line<R>(source: R, cancel: &CancellationToken) -> String
where
    R: AsyncRead + Unpin + Send + 'static,
{
    read_line_tagged(source, cancel).await.into_line()
}

/// Like [`read_line`], but reports what actually happened.
///
/// Exactly one of the four [`ReadOutcome`] variants is returned. An
/// already-cancelled token wins immediately, before any channel traffic
/// is considered.
pub async fn read_line_tagged<R>(source: R, cancel: &CancellationToken) -> ReadOutcome
where
    R: AsyncRead + Unpin + Send + 'static,
{
    let mut rx = pump::spawn_one_shot(source);

    tokio::select! {
        // Cancellation wins over a line that is ready at the same moment.
        biased;
        _ = cancel.cancelled() => ReadOutcome::Cancelled,
        item = rx.recv() => match item {
            Some(Ok(line)) => ReadOutcome::Line(line),
            Some(Err(e)) => ReadOutcome::Failed(e),
            None => ReadOutcome::Exhausted,
        }
    }
}
