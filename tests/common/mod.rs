//! Test utilities for clikit integration tests.

use std::collections::VecDeque;
use std::io;
use std::pin::Pin;
use std::task::{Context, Poll};

use tokio::io::{AsyncRead, ReadBuf};

/// What a [`ScriptedSource`] does once its chunks run out.
pub enum Tail {
    /// Report end-of-input.
    Eof,
    /// Fail the next read with this error.
    Error(io::Error),
    /// Block forever, like a terminal with nobody typing.
    Pending,
}

/// A byte source that yields scripted chunks, then a configurable tail.
///
/// Mirrors a pipe producing data in bursts: each poll hands out one whole
/// chunk. Chunks must fit within the caller's read buffer.
pub struct ScriptedSource {
    chunks: VecDeque<Vec<u8>>,
    tail: Tail,
}

impl ScriptedSource {
    /// A source yielding the given chunks, then EOF.
    pub fn new<I, C>(chunks: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Vec<u8>>,
    {
        Self::with_tail(chunks, Tail::Eof)
    }

    /// A source yielding the given chunks, then the given tail behavior.
    pub fn with_tail<I, C>(chunks: I, tail: Tail) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Vec<u8>>,
    {
        Self {
            chunks: chunks.into_iter().map(Into::into).collect(),
            tail,
        }
    }

    /// A source that never yields anything and never finishes.
    pub fn pending() -> Self {
        Self::with_tail(Vec::<Vec<u8>>::new(), Tail::Pending)
    }
}

impl AsyncRead for ScriptedSource {
    fn poll_read(
        self: Pin<&mut Self>,
        _cx: &mut Context<'_>,
        buf: &mut ReadBuf<'_>,
    ) -> Poll<io::Result<()>> {
        let this = self.get_mut();

        if let Some(chunk) = this.chunks.pop_front() {
            buf.put_slice(&chunk);
            return Poll::Ready(Ok(()));
        }

        match this.tail {
            Tail::Eof => Poll::Ready(Ok(())),
            Tail::Error(_) => {
                let Tail::Error(e) = std::mem::replace(&mut this.tail, Tail::Eof) else {
                    unreachable!()
                };
                Poll::Ready(Err(e))
            }
            // No waker registered: nothing will ever arrive.
            Tail::Pending => Poll::Pending,
        }
    }
}
