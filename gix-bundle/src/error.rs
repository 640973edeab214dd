use bstr::BString;

use crate::LineKind;

/// Stable high-level error classification for programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Reading failed, or the input ended before the header was complete.
    Io,
    /// The signature line was malformed or named a version we can't read.
    Version,
    /// A section appeared after a section that must follow it.
    Order,
    /// A line didn't have the shape its section requires.
    Syntax,
}

/// The error returned when parsing a bundle header.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Reading failed, or the input ended in the middle of the header.
    #[error("failed to read bundle header")]
    Io(#[from] std::io::Error),
    /// The first line isn't a bundle signature.
    #[error("invalid bundle version: {line:?}")]
    InvalidVersionLine {
        /// The signature line as read, including its line feed.
        line: BString,
    },
    /// The signature names a version other than 2 or 3.
    #[error("unsupported bundle version: {version:?}")]
    UnsupportedVersion {
        /// The version token between `# v` and ` git bundle`.
        version: BString,
    },
    /// A version 2 header contains a capability line.
    #[error("capabilities are not supported in version 2 bundles")]
    CapabilitiesUnsupportedInV2,
    /// A capability line follows a prerequisite or a reference.
    #[error("capabilities must come first")]
    CapabilitiesMustComeFirst,
    /// A prerequisite line follows a reference.
    #[error("prerequisites must come first")]
    PrerequisitesMustComeFirst,
    /// A line doesn't have the shape its section requires.
    #[error("invalid {kind} line: {line:?}")]
    MalformedLine {
        /// The section the line was dispatched to by its first byte.
        kind: LineKind,
        /// The line without its line feed.
        line: BString,
    },
}

impl Error {
    /// Fast classification helper returning a stable error kind.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Io(_) => ErrorKind::Io,
            Error::InvalidVersionLine { .. } | Error::UnsupportedVersion { .. } | Error::CapabilitiesUnsupportedInV2 => {
                ErrorKind::Version
            }
            Error::CapabilitiesMustComeFirst | Error::PrerequisitesMustComeFirst => ErrorKind::Order,
            Error::MalformedLine { .. } => ErrorKind::Syntax,
        }
    }

    pub(crate) fn malformed(kind: LineKind, line: &[u8]) -> Self {
        Error::MalformedLine {
            kind,
            line: line.into(),
        }
    }

    pub(crate) fn unexpected_eof(partial: &[u8]) -> Self {
        let message = if partial.is_empty() {
            "end of input before the bundle header was complete".to_owned()
        } else {
            format!("end of input in unterminated header line {:?}", bstr::BStr::new(partial))
        };
        Error::Io(std::io::Error::new(std::io::ErrorKind::UnexpectedEof, message))
    }
}
