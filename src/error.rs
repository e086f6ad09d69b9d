//! Error types for the md2doc library.
//!
//! Two failure modes matter to callers:
//!
//! * **Fatal** — the conversion cannot proceed at all (source file missing,
//!   unreadable, invalid configuration). Returned as `Err(Md2DocError)` from
//!   the top-level `convert*` functions; no artifact is produced.
//!
//! * **Recoverable** — the external PDF renderer is absent or errored
//!   ([`Md2DocError::RendererUnavailable`]). The orchestrator in
//!   [`crate::convert`] catches this one variant and falls back to writing
//!   plain HTML instead of aborting, so a missing `wkhtmltopdf` install never
//!   costs the user their output.
//!
//! Every message that corresponds to something the user can fix carries a
//! remediation hint inline, so the CLI never needs a separate help lookup.

use std::path::PathBuf;
use thiserror::Error;

/// All errors returned by the md2doc library.
#[derive(Debug, Error)]
pub enum Md2DocError {
    // ── Input errors ──────────────────────────────────────────────────────
    /// Source Markdown file was not found at the given path.
    #[error("Markdown source not found: '{path}'\nCheck the path exists and is readable.")]
    SourceNotFound { path: PathBuf },

    /// Process does not have read permission on the source file.
    #[error("Permission denied reading '{path}'\nTry: chmod +r {path:?}")]
    PermissionDenied { path: PathBuf },

    /// The source file exists but is not valid UTF-8.
    #[error("Source file '{path}' is not valid UTF-8 (byte offset {offset})")]
    SourceNotUtf8 { path: PathBuf, offset: usize },

    // ── Renderer errors ───────────────────────────────────────────────────
    /// The external HTML-to-PDF renderer is missing or failed.
    ///
    /// Non-fatal: [`crate::convert::convert`] catches this variant and falls
    /// back to HTML output.
    #[error(
        "PDF renderer unavailable: {detail}\n\n\
To produce PDF output, install wkhtmltopdf:\n\
  • macOS:   brew install wkhtmltopdf\n\
  • Ubuntu:  sudo apt-get install wkhtmltopdf\n\
  • Windows: download from https://wkhtmltopdf.org/downloads.html\n\
Alternatively, open the generated HTML in a browser and print to PDF."
    )]
    RendererUnavailable { detail: String },

    // ── I/O errors ────────────────────────────────────────────────────────
    /// Could not create or write an output artifact.
    #[error("Failed to write output file '{path}': {source}")]
    OutputWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ── Config errors ─────────────────────────────────────────────────────
    /// Builder validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // ── Catch-all ─────────────────────────────────────────────────────────
    /// Unexpected internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Md2DocError {
    /// True for the one error the conversion pipeline recovers from.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Md2DocError::RendererUnavailable { .. })
    }
}
