//! Continuous line streaming with cancellation.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures::Stream;
use tokio::io::AsyncRead;
use tokio::sync::mpsc;
use tokio_util::sync::{CancellationToken, WaitForCancellationFutureOwned};

use super::pump;
use crate::Result;

/// Read lines from the source into a stream until it is exhausted or the
/// token fires.
///
/// Lines arrive in source order with terminators stripped. The stream is
/// finite, forward-only, and terminal once closed: after the first `None`
/// no further items ever appear.
///
/// # Example
///
/// ```ignore
/// use futures::StreamExt;
/// use clikit::{read_lines, shutdown_token};
///
/// let cancel = shutdown_token();
/// let mut lines = read_lines(tokio::io::stdin(), &cancel);
/// while let Some(line) = lines.next().await {
///     handle(line?);
/// }
/// ```
pub fn read_lines<R>(source: R, cancel: &CancellationToken) -> LineStream
where
    R: AsyncRead + Unpin + Send + 'static,
{
    LineStream {
        rx: pump::spawn_pump(source),
        cancelled: Box::pin(cancel.clone().cancelled_owned()),
        done: false,
    }
}

/// A stream of lines read from a byte source.
///
/// Created by [`read_lines`]. Implements [`futures::Stream`] with
/// `Item = Result<String>`:
///
/// - `Some(Ok(line))` for each line, in source order
/// - `Some(Err(_))` once if the source fails, then `None`
/// - `None` on clean exhaustion or cancellation
///
/// Cancellation closes the stream cleanly; it is indistinguishable from a
/// source that ended. A read failure is the one abnormal ending, and it is
/// observable as the final `Err` item.
///
/// # Cancellation
///
/// The background pump never sees the token. Once the token fires (or the
/// stream is dropped), the pump unwinds on its next send; an in-flight
/// blocking read keeps running until the source yields or is closed, and
/// whatever it buffered is discarded.
pub struct LineStream {
    rx: mpsc::Receiver<Result<String>>,
    cancelled: Pin<Box<WaitForCancellationFutureOwned>>,
    done: bool,
}

impl LineStream {
    /// Drain the stream into a vector, stopping at the first error.
    ///
    /// A convenience for callers that want everything up front. Cancellation
    /// mid-drain yields the lines collected so far as `Ok`.
    pub async fn collect_lines(mut self) -> Result<Vec<String>> {
        use futures::StreamExt;

        let mut lines = Vec::new();
        while let Some(item) = self.next().await {
            lines.push(item?);
        }
        Ok(lines)
    }

    fn close(&mut self) {
        self.done = true;
        // Unblocks the pump's pending send so it can exit.
        self.rx.close();
    }
}

impl Stream for LineStream {
    type Item = Result<String>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();

        if this.done {
            return Poll::Ready(None);
        }

        // Cancellation wins over a line that is ready at the same moment.
        if this.cancelled.as_mut().poll(cx).is_ready() {
            this.close();
            return Poll::Ready(None);
        }

        match this.rx.poll_recv(cx) {
            Poll::Ready(Some(Ok(line))) => Poll::Ready(Some(Ok(line))),
            Poll::Ready(Some(Err(e))) => {
                this.close();
                Poll::Ready(Some(Err(e)))
            }
            Poll::Ready(None) => {
                this.done = true;
                Poll::Ready(None)
            }
            Poll::Pending => Poll::Pending,
        }
    }
}
