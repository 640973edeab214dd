use std::fmt;

use bstr::{BStr, BString, ByteSlice};

use crate::{Error, LineKind};

/// A capability line of a version 3 bundle, like `@object-format=sha1` or `@filter`.
///
/// ```text
/// capability = "@" key ["=" value] LF
/// key        = 1*(ALPHA / DIGIT / "-")
/// value      = *(%01-09 / %0b-FF)
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Capability {
    /// Everything between `@` and the first `=`.
    pub key: BString,
    /// Everything after the first `=`, or `None` if there was no `=` at all.
    ///
    /// `Some` of an empty value and `None` serialize differently.
    pub value: Option<BString>,
}

impl Capability {
    /// A capability without value, serialized as `@key`.
    pub fn new(key: impl Into<BString>) -> Self {
        Capability {
            key: key.into(),
            value: None,
        }
    }

    /// A capability serialized as `@key=value`.
    pub fn with_value(key: impl Into<BString>, value: impl Into<BString>) -> Self {
        Capability {
            key: key.into(),
            value: Some(value.into()),
        }
    }

    /// Parse a capability from `line`, which must not contain its trailing LF.
    ///
    /// The key is not checked against the grammar beyond being non-empty, and the
    /// value is kept as opaque bytes.
    pub fn from_line(line: &[u8]) -> Result<Self, Error> {
        if line.len() < 2 || line[0] != b'@' || line[1] == b'=' {
            return Err(Error::malformed(LineKind::Capability, line));
        }
        let rest = &line[1..];
        Ok(match rest.split_once_str("=") {
            Some((key, value)) => Capability {
                key: key.into(),
                value: Some(value.into()),
            },
            None => Capability {
                key: rest.into(),
                value: None,
            },
        })
    }

    /// Append the line without LF to `buf`.
    pub fn append_to(&self, buf: &mut Vec<u8>) {
        buf.push(b'@');
        buf.extend_from_slice(&self.key);
        if let Some(value) = &self.value {
            buf.push(b'=');
            buf.extend_from_slice(value);
        }
    }

    /// Serialize the line without LF into a new buffer.
    pub fn to_bstring(&self) -> BString {
        let mut buf = Vec::new();
        self.append_to(&mut buf);
        buf.into()
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_bstring(), f)
    }
}

entry_list!(
    /// The capabilities of a version 3 bundle, declaring functionality a reader must
    /// understand to use the bundle, in the order they were declared.
    Capabilities,
    Capability
);

impl Capabilities {
    /// Return `true` if a capability named `key` is present.
    pub fn has(&self, key: impl AsRef<[u8]>) -> bool {
        let key = key.as_ref();
        self.iter().any(|c| c.key == key)
    }

    /// Find the first capability named `key` and return its value.
    ///
    /// The outer `Option` is `None` if there is no such capability, the inner one is
    /// `None` if it was declared without `=`.
    pub fn get(&self, key: impl AsRef<[u8]>) -> Option<Option<&BStr>> {
        let key = key.as_ref();
        self.iter()
            .find(|c| c.key == key)
            .map(|c| c.value.as_ref().map(|v| v.as_bstr()))
    }
}
