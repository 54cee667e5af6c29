//! Buffered line extraction from a byte source.

use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};

use crate::{Error, Result};

/// Reads newline-terminated lines from a byte source.
///
/// The source is wrapped in a [`BufReader`] and handed out one line per
/// call, with the trailing `'\n'` stripped. No other normalization happens:
/// carriage returns stay in place and empty lines are real lines.
///
/// Reading is strictly sequential. Bytes consumed for one line are never
/// replayed, and the internal read-ahead buffer dies with the source.
pub struct LineSource<R> {
    reader: BufReader<R>,
    buffer: String,
}

impl<R: AsyncRead + Unpin> LineSource<R> {
    /// Create a new line source over the given byte source.
    pub fn new(source: R) -> Self {
        Self {
            reader: BufReader::new(source),
            buffer: String::with_capacity(256),
        }
    }

    /// Read the next terminated line from the source.
    ///
    /// Returns `Ok(Some(line))` for each line ending in `'\n'` (terminator
    /// stripped), `Ok(None)` once the source is exhausted, or `Err` on any
    /// other read failure.
    ///
    /// A trailing fragment with no terminator is discarded: once no further
    /// `'\n'` can arrive, the source counts as exhausted.
    pub async fn next_line(&mut self) -> Result<Option<String>> {
        self.buffer.clear();

        let bytes_read = self
            .reader
            .read_line(&mut self.buffer)
            .await
            .map_err(Error::io)?;

        if bytes_read == 0 {
            return Ok(None);
        }

        match self.buffer.strip_suffix('\n') {
            Some(line) => Ok(Some(line.to_string())),
            // Data without a terminator means EOF cut the line short.
            None => Ok(None),
        }
    }
}
