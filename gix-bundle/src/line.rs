use std::fmt;

use crate::{Capability, Error, Prerequisite, Reference};

/// The section a header line belongs to, as told by its first byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LineKind {
    /// Lines starting with `@`.
    Capability,
    /// Lines starting with `-`.
    Prerequisite,
    /// All other lines.
    Reference,
}

impl LineKind {
    /// Classify `line` by its first byte.
    pub fn of(line: &[u8]) -> Self {
        match line.first() {
            Some(b'@') => LineKind::Capability,
            Some(b'-') => LineKind::Prerequisite,
            _ => LineKind::Reference,
        }
    }

    /// The name of the section the line belongs to.
    pub fn as_str(&self) -> &'static str {
        match self {
            LineKind::Capability => "capability",
            LineKind::Prerequisite => "prerequisite",
            LineKind::Reference => "reference",
        }
    }
}

impl fmt::Display for LineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parsed header line between the signature and the terminating blank line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    /// `@key[=value]`
    Capability(Capability),
    /// `-<obj-id> <comment>`
    Prerequisite(Prerequisite),
    /// `<obj-id> <refname>`
    Reference(Reference),
}

impl Line {
    /// Parse `line` without its trailing LF into the variant chosen by [`LineKind::of()`].
    pub fn from_line(line: &[u8]) -> Result<Self, Error> {
        Ok(match LineKind::of(line) {
            LineKind::Capability => Line::Capability(Capability::from_line(line)?),
            LineKind::Prerequisite => Line::Prerequisite(Prerequisite::from_line(line)?),
            LineKind::Reference => Line::Reference(Reference::from_line(line)?),
        })
    }

    /// The section this line belongs to.
    pub fn kind(&self) -> LineKind {
        match self {
            Line::Capability(_) => LineKind::Capability,
            Line::Prerequisite(_) => LineKind::Prerequisite,
            Line::Reference(_) => LineKind::Reference,
        }
    }
}
