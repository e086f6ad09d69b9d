//! Source loading: read the Markdown document into memory.
//!
//! The source is loaded exactly once per invocation and never mutated; every
//! downstream stage is a pure function of the returned text. Errors are
//! classified here so the top level can distinguish "nothing to convert"
//! (missing file, aborts with no artifact) from environmental problems.

use crate::error::Md2DocError;
use std::path::Path;
use tracing::debug;

/// Read the Markdown source as UTF-8 text.
///
/// # Errors
/// * [`Md2DocError::SourceNotFound`] — the file does not exist
/// * [`Md2DocError::PermissionDenied`] — the file exists but is unreadable
/// * [`Md2DocError::SourceNotUtf8`] — the bytes are not valid UTF-8
pub async fn load_source(path: &Path) -> Result<String, Md2DocError> {
    let bytes = tokio::fs::read(path).await.map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => Md2DocError::SourceNotFound {
            path: path.to_path_buf(),
        },
        std::io::ErrorKind::PermissionDenied => Md2DocError::PermissionDenied {
            path: path.to_path_buf(),
        },
        _ => Md2DocError::Internal(format!("reading '{}': {e}", path.display())),
    })?;

    let text = String::from_utf8(bytes).map_err(|e| Md2DocError::SourceNotUtf8 {
        path: path.to_path_buf(),
        offset: e.utf8_error().valid_up_to(),
    })?;

    debug!("Loaded {} bytes from {}", text.len(), path.display());
    Ok(text)
}
