/// Define an ordered list of header entries along with the accessors and line
/// serialization all sections share. `$entry` must provide `append_to(&self, &mut Vec<u8>)`.
macro_rules! entry_list {
    ($(#[$attr:meta])* $list:ident, $entry:ty) => {
        $(#[$attr])*
        #[derive(Debug, Clone, Default, PartialEq, Eq)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(transparent))]
        pub struct $list(Vec<$entry>);

        impl $list {
            /// Create an empty list.
            pub fn new() -> Self {
                Self(Vec::new())
            }

            /// Append `entry`, keeping earlier entries even if they are duplicates.
            pub fn push(&mut self, entry: $entry) {
                self.0.push(entry);
            }

            /// Iterate entries in the order they were added.
            pub fn iter(&self) -> std::slice::Iter<'_, $entry> {
                self.0.iter()
            }

            /// The number of entries, duplicates included.
            pub fn len(&self) -> usize {
                self.0.len()
            }

            /// Return `true` if there are no entries.
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }

            /// Access all entries as slice.
            pub fn as_slice(&self) -> &[$entry] {
                &self.0
            }

            /// Return the entries as vector.
            pub fn into_vec(self) -> Vec<$entry> {
                self.0
            }

            /// Append one LF-terminated line per entry to `buf`, in stored order.
            pub fn append_to(&self, buf: &mut Vec<u8>) {
                for entry in &self.0 {
                    entry.append_to(buf);
                    buf.push(b'\n');
                }
            }

            /// Serialize all lines into a new buffer.
            pub fn to_bstring(&self) -> bstr::BString {
                let mut buf = Vec::new();
                self.append_to(&mut buf);
                buf.into()
            }
        }

        impl From<Vec<$entry>> for $list {
            fn from(entries: Vec<$entry>) -> Self {
                Self(entries)
            }
        }

        impl FromIterator<$entry> for $list {
            fn from_iter<I: IntoIterator<Item = $entry>>(iter: I) -> Self {
                Self(iter.into_iter().collect())
            }
        }

        impl Extend<$entry> for $list {
            fn extend<I: IntoIterator<Item = $entry>>(&mut self, iter: I) {
                self.0.extend(iter);
            }
        }

        impl IntoIterator for $list {
            type Item = $entry;
            type IntoIter = std::vec::IntoIter<$entry>;

            fn into_iter(self) -> Self::IntoIter {
                self.0.into_iter()
            }
        }

        impl<'a> IntoIterator for &'a $list {
            type Item = &'a $entry;
            type IntoIter = std::slice::Iter<'a, $entry>;

            fn into_iter(self) -> Self::IntoIter {
                self.0.iter()
            }
        }

        impl std::fmt::Display for $list {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                std::fmt::Display::fmt(&self.to_bstring(), f)
            }
        }
    };
}
