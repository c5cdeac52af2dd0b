//! Resolves an entry's image reference into a locally-addressable file.
//!
//! A reference is either a filesystem path (used in place, never deleted) or
//! an embedded `data:<mime>;base64,<payload>` blob, which is materialized
//! into a transient file that is removed again as soon as the resolved handle
//! drops. Anything else resolves to [`ResolvedImage::None`] and the entry is
//! scored text-only.

use std::io::Write;
use std::path::{Path, PathBuf};

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use tempfile::TempPath;

use crate::error::{PipelineError, Result};

/// A locally-addressable image for the duration of one entry's scoring.
#[derive(Debug)]
pub enum ResolvedImage {
    /// No usable image; score text-only.
    None,
    /// Caller-supplied path. Not owned, never deleted.
    Borrowed(PathBuf),
    /// Materialized from an embedded blob. Owned: the file is removed when
    /// this handle drops, on every exit path.
    Owned(TempPath),
}

impl ResolvedImage {
    /// Path to the image bytes, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            ResolvedImage::None => None,
            ResolvedImage::Borrowed(path) => Some(path),
            ResolvedImage::Owned(temp) => Some(&**temp),
        }
    }
}

/// Resolve an image reference into a [`ResolvedImage`].
///
/// An undecodable embedded payload is a
/// [`DecodeFailed`](PipelineError::DecodeFailed) error; a reference that is
/// neither a readable path nor an embedded blob silently resolves to
/// [`ResolvedImage::None`].
pub fn resolve_image(reference: Option<&str>, filename_hint: Option<&str>) -> Result<ResolvedImage> {
    let Some(reference) = reference else {
        return Ok(ResolvedImage::None);
    };
    let reference = reference.trim();
    if reference.is_empty() {
        return Ok(ResolvedImage::None);
    }

    if let Some(payload) = data_uri_payload(reference) {
        let bytes = STANDARD
            .decode(payload)
            .map_err(|err| PipelineError::DecodeFailed(err.to_string()))?;
        return materialize(&bytes, filename_hint);
    }

    let path = Path::new(reference);
    if path.is_file() {
        return Ok(ResolvedImage::Borrowed(path.to_path_buf()));
    }

    tracing::debug!(reference, "image reference is neither a readable path nor an embedded blob");
    Ok(ResolvedImage::None)
}

fn data_uri_payload(reference: &str) -> Option<&str> {
    let rest = reference.strip_prefix("data:")?;
    let (_mime, payload) = rest.split_once(";base64,")?;
    Some(payload)
}

/// Write decoded bytes into a transient file whose suffix comes from the
/// filename hint's extension (`.jpg` when absent).
fn materialize(bytes: &[u8], filename_hint: Option<&str>) -> Result<ResolvedImage> {
    let suffix = filename_hint
        .and_then(|name| Path::new(name).extension())
        .map(|ext| format!(".{}", ext.to_string_lossy()))
        .unwrap_or_else(|| String::from(".jpg"));

    let mut file = tempfile::Builder::new()
        .prefix("sentilens-")
        .suffix(&suffix)
        .tempfile()
        .map_err(|err| PipelineError::DecodeFailed(format!("transient file: {err}")))?;
    file.write_all(bytes)
        .map_err(|err| PipelineError::DecodeFailed(format!("transient file: {err}")))?;

    Ok(ResolvedImage::Owned(file.into_temp_path()))
}
