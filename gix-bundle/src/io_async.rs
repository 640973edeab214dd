//! Async I/O for headers.

use futures_io::{AsyncBufRead, AsyncWrite};
use futures_lite::{AsyncBufReadExt, AsyncWriteExt};

use crate::{header::decode, Error, Header};

impl Header {
    /// Read a header from `read`, leaving it positioned at the first byte of the pack.
    ///
    /// This is the async version of [`Header::from_bufread()`](crate::Header) with the same semantics.
    pub async fn from_async_bufread(mut read: impl AsyncBufRead + Unpin) -> Result<Self, Error> {
        let _span = gix_trace::coarse!("gix_bundle::Header::from_async_bufread()");
        let mut decoder = decode::Decoder::new();
        let mut line = Vec::new();
        loop {
            line.clear();
            read.read_until(b'\n', &mut line).await?;
            decoder = match decoder.line(&line)? {
                decode::Outcome::Incomplete(decoder) => decoder,
                decode::Outcome::Complete(header) => return Ok(header),
            };
        }
    }

    /// Write the serialized header to `out` and return the amount of bytes written.
    pub async fn write_to_async(&self, mut out: impl AsyncWrite + Unpin) -> std::io::Result<usize> {
        let buf = self.to_bytes();
        out.write_all(&buf).await?;
        Ok(buf.len())
    }
}
