//! Bridging process lifecycle events into cancellation tokens.
//!
//! The input operations take a [`CancellationToken`] and don't care where
//! it comes from. This module provides the two producers a command-line
//! program usually wants: one driven by OS termination signals, one driven
//! by a deadline.

use std::time::Duration;

use tokio_util::sync::CancellationToken;

/// Create a token that is cancelled on the first termination signal.
///
/// Listens for Ctrl+C, plus SIGTERM on Unix, from a detached bridge task.
/// The token is one-shot: once cancelled it stays cancelled, and further
/// signals are left for the process's default handling.
///
/// # Example
///
/// ```ignore
/// use clikit::{read_lines, shutdown_token};
/// use futures::StreamExt;
///
/// let cancel = shutdown_token();
/// let mut lines = read_lines(tokio::io::stdin(), &cancel);
/// while let Some(line) = lines.next().await {
///     process(line?);
/// }
/// // Ctrl+C lands here via a cleanly closed stream.
/// ```
pub fn shutdown_token() -> CancellationToken {
    let token = CancellationToken::new();
    let bridge = token.clone();
    tokio::spawn(async move {
        wait_for_termination().await;
        tracing::debug!("termination signal received, cancelling");
        bridge.cancel();
    });
    token
}

/// Create a token that cancels itself once `timeout` has elapsed.
///
/// The input operations have no timeout parameter of their own; a deadline
/// is just a cancellation signal that fires on a timer.
///
/// # Example
///
/// ```ignore
/// use std::time::Duration;
/// use clikit::{deadline_token, read_line};
///
/// let cancel = deadline_token(Duration::from_secs(30));
/// let answer = read_line(tokio::io::stdin(), &cancel).await;
/// // Empty if the user took longer than 30 seconds.
/// ```
pub fn deadline_token(timeout: Duration) -> CancellationToken {
    let token = CancellationToken::new();
    let bridge = token.clone();
    tokio::spawn(async move {
        tokio::time::sleep(timeout).await;
        bridge.cancel();
    });
    token
}

#[cfg(unix)]
async fn wait_for_termination() {
    use tokio::signal::unix::{signal, SignalKind};

    let mut term = match signal(SignalKind::terminate()) {
        Ok(term) => term,
        Err(e) => {
            tracing::warn!(error = %e, "SIGTERM handler unavailable, watching Ctrl+C only");
            let _ = tokio::signal::ctrl_c().await;
            return;
        }
    };

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {}
        _ = term.recv() => {}
    }
}

#[cfg(not(unix))]
async fn wait_for_termination() {
    let _ = tokio::signal::ctrl_c().await;
}
