//! Cancellable line input.
//!
//! This module reads newline-delimited text from a blocking byte source
//! while honoring an external cancellation token, without leaking tasks or
//! holding the caller hostage to a source that never yields.
//!
//! # Architecture
//!
//! ```text
//! caller                     pump task
//! ┌──────────────┐          ┌──────────────┐
//! │ read_line /  │◀─mpsc(1)─│ LineSource   │◀── byte source (stdin, pipe)
//! │ LineStream   │          │ blocking read│
//! └──────┬───────┘          └──────────────┘
//!        │
//!   CancellationToken (never seen by the pump)
//! ```
//!
//! Both operations spawn a pump scoped to the call. The pump owns the
//! source's read cursor and performs the blocking reads; the caller waits
//! on "first of {cancellation, next line}". Cancellation therefore returns
//! promptly no matter how stuck the source is, at the cost of one detached
//! background read that finishes (and is discarded) on its own time.
//!
//! # Single-reader discipline
//!
//! A source must not be handed to two line-reading calls at once; the pump
//! advances the shared cursor even when its output is never consumed, so
//! concurrent calls would interleave bytes unpredictably. Sequential calls
//! are fine, with one sharp edge: a cancelled call may have read ahead, and
//! whatever it buffered past the last delivered line is gone.

mod pump;
mod read;
mod source;
mod stream;

pub use read::{read_line, read_line_tagged, ReadOutcome};
pub use source::LineSource;
pub use stream::{read_lines, LineStream};
