use std::{collections::HashMap, fmt};

use bstr::{BString, ByteSlice};

use crate::{Error, LineKind, ObjectId};

/// A reference advertised by the bundle, pointing at an object contained in it.
///
/// ```text
/// reference = obj-id SP refname LF
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Reference {
    /// The id of the object the reference points to, not validated when parsing.
    pub object_id: ObjectId,
    /// The full name of the reference, like `refs/heads/main`, taken verbatim.
    pub name: BString,
}

impl Reference {
    /// Create a new instance.
    pub fn new(object_id: impl Into<ObjectId>, name: impl Into<BString>) -> Self {
        Reference {
            object_id: object_id.into(),
            name: name.into(),
        }
    }

    /// Parse a reference from `line`, which must not contain its trailing LF.
    ///
    /// The line must contain a space, and everything after the first one is the name,
    /// which may be empty.
    pub fn from_line(line: &[u8]) -> Result<Self, Error> {
        let (object_id, name) = line
            .split_once_str(" ")
            .ok_or_else(|| Error::malformed(LineKind::Reference, line))?;
        Ok(Reference::new(object_id, name))
    }

    /// Append the line without LF to `buf`.
    pub fn append_to(&self, buf: &mut Vec<u8>) {
        buf.extend_from_slice(self.object_id.as_ref());
        buf.push(b' ');
        buf.extend_from_slice(&self.name);
    }

    /// Serialize the line without LF into a new buffer.
    pub fn to_bstring(&self) -> BString {
        let mut buf = Vec::new();
        self.append_to(&mut buf);
        buf.into()
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_bstring(), f)
    }
}

entry_list!(
    /// The references advertised by a bundle, in header order.
    References,
    Reference
);

impl References {
    /// Map reference names to the ids they point to.
    ///
    /// If a name is listed more than once, its last occurrence wins.
    pub fn to_map(&self) -> HashMap<BString, ObjectId> {
        self.iter().map(|r| (r.name.clone(), r.object_id.clone())).collect()
    }
}
