use std::{io::Write, path::Path};

use anyhow::{bail, Context};
use gix_bundle::Header;

/// Read the header of the bundle at `path`, without reading its pack.
pub fn open(path: &Path) -> anyhow::Result<Header> {
    let file = std::fs::File::open(path).with_context(|| format!("Could not open bundle at '{}'", path.display()))?;
    Header::from_bufread(std::io::BufReader::new(file))
        .with_context(|| format!("Could not read bundle header of '{}'", path.display()))
}

pub fn list_heads(header: &Header, mut out: impl Write) -> std::io::Result<()> {
    for reference in &header.references {
        writeln!(out, "{reference}")?;
    }
    Ok(())
}

pub fn describe(header: &Header, mut out: impl Write) -> std::io::Result<()> {
    writeln!(out, "version: {}", header.version)?;
    if !header.capabilities.is_empty() {
        writeln!(out, "capabilities:")?;
        for capability in &header.capabilities {
            match &capability.value {
                Some(value) => writeln!(out, "\t{} = {}", capability.key, value)?,
                None => writeln!(out, "\t{}", capability.key)?,
            }
        }
    }
    if !header.prerequisites.is_empty() {
        writeln!(out, "prerequisites:")?;
        for prerequisite in &header.prerequisites {
            writeln!(out, "\t{} {}", prerequisite.object_id, prerequisite.comment)?;
        }
    }
    if !header.references.is_empty() {
        writeln!(out, "references:")?;
        for reference in &header.references {
            writeln!(out, "\t{} {}", reference.object_id, reference.name)?;
        }
    }
    writeln!(out, "pack offset: {}", header.header_len())
}

pub fn verify(header: &Header, mut out: impl Write) -> anyhow::Result<()> {
    for prerequisite in &header.prerequisites {
        if !prerequisite.object_id.is_valid() {
            bail!(
                "Prerequisite {:?} has an invalid object id",
                prerequisite.object_id.as_bstr()
            );
        }
    }
    for reference in &header.references {
        if !reference.object_id.is_valid() {
            bail!(
                "Reference {:?} points to invalid object id {:?}",
                reference.name,
                reference.object_id.as_bstr()
            );
        }
    }
    writeln!(
        out,
        "The v{} bundle header lists {} prerequisites and {} references",
        header.version,
        header.prerequisites.len(),
        header.references.len()
    )?;
    Ok(())
}
