//! An I/O-free state machine to parse a header one line at a time.
//!
//! It backs [`Header::from_bytes()`] and the blocking and async readers, and can be
//! used directly by callers who frame lines themselves.

use bstr::ByteSlice;

use super::{SIGNATURE_PREFIX, SIGNATURE_SUFFIX};
use crate::{Error, Header, Line, LineKind, Version};

/// The result of feeding a line to a [`Decoder`].
#[derive(Debug)]
pub enum Outcome {
    /// The header needs more lines.
    Incomplete(Decoder),
    /// The blank line was seen and the header is complete. Everything after it is pack data.
    Complete(Header),
}

/// Consumes header lines until the blank line that ends the header.
#[derive(Debug, Default)]
pub struct Decoder {
    /// `None` until the signature line was parsed.
    header: Option<Header>,
}

impl Decoder {
    /// Create a decoder that expects the signature line first.
    pub fn new() -> Self {
        Decoder::default()
    }

    /// Feed the next `line` including its trailing LF.
    ///
    /// A `line` without LF, including an empty one, means the input ended before the
    /// header was complete, which is reported as [`std::io::ErrorKind::UnexpectedEof`].
    /// This way a reader can pass along whatever its last read produced.
    pub fn line(self, line: &[u8]) -> Result<Outcome, Error> {
        let Some(content) = line.strip_suffix(b"\n") else {
            return Err(Error::unexpected_eof(line));
        };
        let header = match self.header {
            None => Header::new(parse_signature(line)?),
            Some(header) if content.is_empty() => return Ok(Outcome::Complete(header)),
            Some(mut header) => {
                header.check_order(LineKind::of(content))?;
                match Line::from_line(content)? {
                    Line::Capability(capability) => header.capabilities.push(capability),
                    Line::Prerequisite(prerequisite) => header.prerequisites.push(prerequisite),
                    Line::Reference(reference) => header.references.push(reference),
                }
                header
            }
        };
        Ok(Outcome::Incomplete(Decoder { header: Some(header) }))
    }

    /// The version of the header being decoded, once the signature line was seen.
    pub fn version(&self) -> Option<Version> {
        self.header.as_ref().map(|h| h.version)
    }
}

impl Header {
    /// Fail if a line of `kind` may not follow the lines seen so far.
    fn check_order(&self, kind: LineKind) -> Result<(), Error> {
        match kind {
            LineKind::Capability => {
                if !self.prerequisites.is_empty() || !self.references.is_empty() {
                    return Err(Error::CapabilitiesMustComeFirst);
                }
                if !self.version.supports_capabilities() {
                    return Err(Error::CapabilitiesUnsupportedInV2);
                }
            }
            LineKind::Prerequisite => {
                if !self.references.is_empty() {
                    return Err(Error::PrerequisitesMustComeFirst);
                }
            }
            LineKind::Reference => {}
        }
        Ok(())
    }
}

/// Parse `# v<version> git bundle\n`.
fn parse_signature(line: &[u8]) -> Result<Version, Error> {
    let token = line
        .strip_prefix(SIGNATURE_PREFIX)
        .and_then(|rest| rest.strip_suffix(SIGNATURE_SUFFIX))
        .ok_or_else(|| Error::InvalidVersionLine { line: line.into() })?;
    Version::from_bytes(token).ok_or_else(|| Error::UnsupportedVersion {
        version: token.as_bstr().to_owned(),
    })
}
