//! Read and write the header of git bundle files.
//!
//! A bundle starts with a line-oriented text header followed by a pack. The header
//! declares its format version, optional capabilities (version 3 only), the
//! prerequisite objects a reader must already have, and the references the bundle
//! advertises. It ends with a single blank line, after which all remaining bytes
//! are the pack and are not interpreted here.
//!
//! ```text
//! # v3 git bundle
//! @object-format=sha1
//! -abcdef0123456789abcdef0123456789abcdef01 base commit
//! 0123456789abcdef0123456789abcdef01234567 refs/heads/main
//!
//! <pack data>
//! ```
//!
//! Parsing is strict about the order of sections and the version gate for
//! capabilities, while writing never validates so any in-memory [`Header`] can be
//! serialized. Headers obtained by parsing serialize back to the exact input bytes.
//!
//! ## Feature Flags
#![cfg_attr(
    all(doc, feature = "document-features"),
    doc = ::document_features::document_features!()
)]
#![deny(missing_docs, rust_2018_idioms)]
#![forbid(unsafe_code)]

pub use bstr;

#[macro_use]
mod list;

mod error;
pub use error::{Error, ErrorKind};

mod object_id;
pub use object_id::ObjectId;

///
pub mod capability;
pub use capability::{Capabilities, Capability};

///
pub mod prerequisite;
pub use prerequisite::{Prerequisite, Prerequisites};

///
pub mod reference;
pub use reference::{Reference, References};

mod line;
pub use line::{Line, LineKind};

///
pub mod header;
pub use header::{Header, Version};

#[cfg(feature = "blocking-io")]
mod io_blocking;
#[cfg(feature = "async-io")]
mod io_async;
