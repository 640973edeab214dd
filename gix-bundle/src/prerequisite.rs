use std::{collections::HashMap, fmt};

use bstr::{BString, ByteSlice};

use crate::{Error, LineKind, ObjectId};

/// An object that is not contained in the bundle, but which the reader must
/// already have in order to use it.
///
/// ```text
/// prerequisite = "-" obj-id SP comment LF
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Prerequisite {
    /// The id of the object, not validated when parsing.
    pub object_id: ObjectId,
    /// Free text after the first space, usually the subject of the commit.
    pub comment: BString,
}

impl Prerequisite {
    /// Create a new instance.
    pub fn new(object_id: impl Into<ObjectId>, comment: impl Into<BString>) -> Self {
        Prerequisite {
            object_id: object_id.into(),
            comment: comment.into(),
        }
    }

    /// Parse a prerequisite from `line`, which must not contain its trailing LF.
    ///
    /// A line without space has an empty comment.
    pub fn from_line(line: &[u8]) -> Result<Self, Error> {
        if line.len() < 2 || line[0] != b'-' {
            return Err(Error::malformed(LineKind::Prerequisite, line));
        }
        let rest = &line[1..];
        let (object_id, comment) = match rest.split_once_str(" ") {
            Some((object_id, comment)) => (object_id, comment),
            None => (rest, &[][..]),
        };
        Ok(Prerequisite::new(object_id, comment))
    }

    /// Append the line without LF to `buf`.
    ///
    /// The space separating the comment is always written, even if the comment is empty.
    pub fn append_to(&self, buf: &mut Vec<u8>) {
        buf.push(b'-');
        buf.extend_from_slice(self.object_id.as_ref());
        buf.push(b' ');
        buf.extend_from_slice(&self.comment);
    }

    /// Serialize the line without LF into a new buffer.
    pub fn to_bstring(&self) -> BString {
        let mut buf = Vec::new();
        self.append_to(&mut buf);
        buf.into()
    }
}

impl fmt::Display for Prerequisite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_bstring(), f)
    }
}

entry_list!(
    /// The objects a reader must already have to use a bundle, in header order.
    Prerequisites,
    Prerequisite
);

impl Prerequisites {
    /// Map object ids to their comments.
    ///
    /// If an id is listed more than once, the comment of its last occurrence wins.
    pub fn to_map(&self) -> HashMap<ObjectId, BString> {
        self.iter()
            .map(|p| (p.object_id.clone(), p.comment.clone()))
            .collect()
    }
}
