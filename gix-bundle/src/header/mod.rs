use std::fmt;

use bstr::{BString, ByteSlice};

use crate::{Capabilities, Capability, Error, Prerequisite, Prerequisites, Reference, References};

///
pub mod decode;

pub(crate) const SIGNATURE_PREFIX: &[u8] = b"# v";
pub(crate) const SIGNATURE_SUFFIX: &[u8] = b" git bundle\n";

/// The bundle format versions we can read and write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Version {
    /// `# v2 git bundle`
    V2,
    /// `# v3 git bundle`, which may declare capabilities.
    V3,
}

impl Version {
    /// Parse the version token of the signature line, like `3`.
    pub fn from_bytes(token: &[u8]) -> Option<Self> {
        match token {
            b"2" => Some(Version::V2),
            b"3" => Some(Version::V3),
            _ => None,
        }
    }

    /// The version token as written in the signature line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Version::V2 => "2",
            Version::V3 => "3",
        }
    }

    /// Return `true` if headers of this version may contain capabilities.
    pub fn supports_capabilities(&self) -> bool {
        matches!(self, Version::V3)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The text header of a git bundle, everything up to and including the blank line
/// that precedes the pack.
///
/// Parsed headers serialize back to their input byte-for-byte. Headers built in memory
/// are serialized as-is without validation, so it's up to the caller to only put
/// capabilities into [`Version::V3`] headers.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Header {
    /// The format version from the signature line.
    pub version: Version,
    /// Capabilities the reader must understand, only present in version 3.
    pub capabilities: Capabilities,
    /// Objects the reader must already have.
    pub prerequisites: Prerequisites,
    /// References pointing into the pack.
    pub references: References,
}

/// Construction
impl Header {
    /// Create an empty header of the given `version`.
    pub fn new(version: Version) -> Self {
        Header {
            version,
            capabilities: Capabilities::new(),
            prerequisites: Prerequisites::new(),
            references: References::new(),
        }
    }

    /// Add `capability` and return the updated header.
    pub fn with_capability(mut self, capability: Capability) -> Self {
        self.capabilities.push(capability);
        self
    }

    /// Add `prerequisite` and return the updated header.
    pub fn with_prerequisite(mut self, prerequisite: Prerequisite) -> Self {
        self.prerequisites.push(prerequisite);
        self
    }

    /// Add `reference` and return the updated header.
    pub fn with_reference(mut self, reference: Reference) -> Self {
        self.references.push(reference);
        self
    }
}

/// Parsing
impl Header {
    /// Parse the header at the start of `data` and return it along with the bytes
    /// that follow it, the pack.
    pub fn from_bytes(data: &[u8]) -> Result<(Self, &[u8]), Error> {
        let mut decoder = decode::Decoder::new();
        let mut rest = data;
        loop {
            let end = rest.find_byte(b'\n').map_or(rest.len(), |pos| pos + 1);
            let (line, tail) = rest.split_at(end);
            rest = tail;
            decoder = match decoder.line(line)? {
                decode::Outcome::Incomplete(decoder) => decoder,
                decode::Outcome::Complete(header) => return Ok((header, rest)),
            };
        }
    }
}

/// Serialization
impl Header {
    /// Append the complete header, including the terminating blank line, to `buf`.
    pub fn append_to(&self, buf: &mut Vec<u8>) {
        buf.extend_from_slice(SIGNATURE_PREFIX);
        buf.extend_from_slice(self.version.as_str().as_bytes());
        buf.extend_from_slice(SIGNATURE_SUFFIX);
        self.capabilities.append_to(buf);
        self.prerequisites.append_to(buf);
        self.references.append_to(buf);
        buf.push(b'\n');
    }

    /// Serialize the complete header into a new buffer.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(self.header_len());
        self.append_to(&mut buf);
        buf
    }

    /// Serialize the complete header as byte string.
    pub fn to_bstring(&self) -> BString {
        self.to_bytes().into()
    }

    /// The amount of bytes the serialized header takes, which for parsed headers is
    /// the offset of the pack in the parsed input.
    pub fn header_len(&self) -> usize {
        let signature = SIGNATURE_PREFIX.len() + self.version.as_str().len() + SIGNATURE_SUFFIX.len();
        let capabilities: usize = self
            .capabilities
            .iter()
            .map(|c| 1 + c.key.len() + c.value.as_ref().map_or(0, |v| 1 + v.len()) + 1)
            .sum();
        let prerequisites: usize = self
            .prerequisites
            .iter()
            .map(|p| 1 + p.object_id.as_ref().len() + 1 + p.comment.len() + 1)
            .sum();
        let references: usize = self
            .references
            .iter()
            .map(|r| r.object_id.as_ref().len() + 1 + r.name.len() + 1)
            .sum();
        signature + capabilities + prerequisites + references + 1
    }
}

impl fmt::Display for Header {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_bstring(), f)
    }
}
