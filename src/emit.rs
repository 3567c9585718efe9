//! JSON artifact output.
//!
//! Artifacts are pretty-printed with two-space indentation and a trailing
//! newline. Serialization happens before anything touches the filesystem, so
//! a failed run never leaves a partial file behind. Existing output is
//! overwritten unconditionally.

use serde::Serialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EmitError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Render `value` as the exact text written to disk.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    let mut json = serde_json::to_string_pretty(value)?;
    json.push('\n');
    Ok(json)
}

/// Write `value` to `path`, creating parent directories as needed.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), EmitError> {
    let json = to_json(value)?;
    write_text(path, &json)?;
    Ok(())
}

/// Write already-rendered artifact text to `path`.
pub fn write_text(path: &Path, json: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, json)?;
    tracing::info!(path = %path.display(), "Wrote artifact");
    Ok(())
}
