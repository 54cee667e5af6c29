//! # clikit
//!
//! Async conveniences for command-line programs, in three independent
//! pieces:
//!
//! - Cancellable line input: read one line or stream many from stdin (or
//!   any byte source) while honoring a cancellation token
//! - Lifecycle signals: turn Ctrl+C/SIGTERM or a deadline into that token
//! - Value printing: show any serializable value as a table, JSON, or YAML,
//!   selected by a flag the user controls
//!
//! ## Quick Start
//!
//! ```ignore
//! use clikit::{read_line, shutdown_token};
//!
//! #[tokio::main]
//! async fn main() {
//!     let cancel = shutdown_token();
//!     println!("continue? [y/N]");
//!     let answer = read_line(tokio::io::stdin(), &cancel).await;
//!     if answer != "y" {
//!         return;
//!     }
//!     // ...
//! }
//! ```
//!
//! ## Streaming
//!
//! ```ignore
//! use clikit::{read_lines, shutdown_token};
//! use futures::StreamExt;
//!
//! let cancel = shutdown_token();
//! let mut lines = read_lines(tokio::io::stdin(), &cancel);
//! while let Some(line) = lines.next().await {
//!     println!("got: {}", line?);
//! }
//! // The stream closes on EOF or Ctrl+C, whichever comes first.
//! ```
//!
//! ## Printing
//!
//! ```ignore
//! use clikit::{print, Encoding};
//!
//! let encoding: Encoding = cli_flag.parse()?;
//! print(encoding, &results)?;
//! ```
//!
//! ## Cancellation model
//!
//! Input calls never teach the blocking read about cancellation. Each call
//! spawns a background pump that owns the source; the caller races the
//! pump's output against the token and simply walks away when the token
//! wins. The abandoned read finishes on its own and its result is
//! discarded; each cancelled call costs at most one detached read.

mod error;
pub mod input;
pub mod print;
pub mod shutdown;

pub use error::{Error, Result};

// Re-export the main input operations at crate root
pub use input::{read_line, read_line_tagged, read_lines, LineSource, LineStream, ReadOutcome};

// Re-export printing at crate root
pub use print::{print, print_to, Encoding};

// Re-export token producers at crate root
pub use shutdown::{deadline_token, shutdown_token};

// Callers construct and observe tokens constantly; save them the direct
// tokio-util dependency.
pub use tokio_util::sync::CancellationToken;

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}
    fn assert_send<T: Send>() {}

    /// All major public types must be Send for use across async tasks.
    #[test]
    fn public_types_are_send() {
        assert_send::<LineStream>();
        assert_send::<ReadOutcome>();
        assert_send::<LineSource<tokio::io::Stdin>>();
    }

    #[test]
    fn shared_types_are_send_sync() {
        assert_send_sync::<Error>();
        assert_send_sync::<Encoding>();
        assert_send_sync::<CancellationToken>();
    }
}
