//! Blocking I/O for headers.

use std::io::{BufRead, Write};

use crate::{header::decode, Error, Header};

impl Header {
    /// Read a header from `read`, leaving it positioned at the first byte of the pack.
    ///
    /// Lines are read with [`BufRead::read_until()`], so nothing beyond the blank line
    /// that ends the header is consumed. Pass `&mut reader` to keep reading the pack afterwards.
    pub fn from_bufread(mut read: impl BufRead) -> Result<Self, Error> {
        let _span = gix_trace::coarse!("gix_bundle::Header::from_bufread()");
        let mut decoder = decode::Decoder::new();
        let mut line = Vec::new();
        loop {
            line.clear();
            read.read_until(b'\n', &mut line)?;
            decoder = match decoder.line(&line)? {
                decode::Outcome::Incomplete(decoder) => decoder,
                decode::Outcome::Complete(header) => {
                    gix_trace::debug!(
                        "parsed v{} bundle header with {} capabilities, {} prerequisites and {} references",
                        header.version,
                        header.capabilities.len(),
                        header.prerequisites.len(),
                        header.references.len()
                    );
                    return Ok(header);
                }
            };
        }
    }

    /// Write the serialized header to `out` and return the amount of bytes written.
    pub fn write_to(&self, mut out: impl Write) -> std::io::Result<usize> {
        let buf = self.to_bytes();
        out.write_all(&buf)?;
        Ok(buf.len())
    }
}
