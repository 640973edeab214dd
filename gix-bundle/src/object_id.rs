use std::fmt;

use bstr::{BStr, BString, ByteSlice};

/// The length of a hex-encoded SHA-1 object id, the only format bundle headers carry.
const HEX_LEN: usize = 40;

/// A hex object id as it appears in a bundle header.
///
/// It holds the bytes exactly as they were read, so invalid ids are representable.
/// Use [`is_valid()`](Self::is_valid()) to check them, or
/// [`to_object_id()`](Self::to_object_id()) to obtain a typed hash.
#[derive(Debug, Default, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(transparent))]
pub struct ObjectId(BString);

impl ObjectId {
    /// Create an id from its hex bytes without validating them.
    pub fn new(hex: impl Into<BString>) -> Self {
        ObjectId(hex.into())
    }

    /// Return `true` if this is 40 lowercase hex digits.
    ///
    /// Uppercase digits are not normalized and make the id invalid.
    pub fn is_valid(&self) -> bool {
        self.0.len() == HEX_LEN && self.0.iter().all(|&b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
    }

    /// Decode into a [`gix_hash::ObjectId`], or `None` if [invalid](Self::is_valid()).
    pub fn to_object_id(&self) -> Option<gix_hash::ObjectId> {
        if !self.is_valid() {
            return None;
        }
        gix_hash::ObjectId::from_hex(self.0.as_slice()).ok()
    }

    /// The hex bytes as read.
    pub fn as_bstr(&self) -> &BStr {
        self.0.as_bstr()
    }

    /// Return the hex bytes.
    pub fn into_inner(self) -> BString {
        self.0
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl AsRef<[u8]> for ObjectId {
    fn as_ref(&self) -> &[u8] {
        self.0.as_slice()
    }
}

impl From<&str> for ObjectId {
    fn from(hex: &str) -> Self {
        ObjectId(hex.into())
    }
}

impl From<&[u8]> for ObjectId {
    fn from(hex: &[u8]) -> Self {
        ObjectId(hex.into())
    }
}

impl From<BString> for ObjectId {
    fn from(hex: BString) -> Self {
        ObjectId(hex)
    }
}

impl From<gix_hash::ObjectId> for ObjectId {
    fn from(id: gix_hash::ObjectId) -> Self {
        ObjectId(id.to_string().into())
    }
}
