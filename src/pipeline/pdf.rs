//! HTML → PDF rendering via the external `wkhtmltopdf` binary.
//!
//! ## Why a temp file?
//!
//! wkhtmltopdf resolves relative resources (images, local stylesheets)
//! against the input file's directory, so the rendered HTML is written to a
//! `NamedTempFile` with an `.html` suffix and passed by path. The temp file
//! is dropped — and deleted — once the renderer exits, on every path
//! including panic.
//!
//! Every failure here maps to [`Md2DocError::RendererUnavailable`]: a missing
//! binary, a spawn failure, a non-zero exit, or a missing output file. The
//! caller treats them all identically — fall back to HTML output — so a finer
//! taxonomy would buy nothing.

use crate::config::PdfOptions;
use crate::error::Md2DocError;
use std::io::Write;
use std::path::Path;
use tokio::process::Command;
use tracing::{debug, info};

/// Render an HTML document to a PDF file using the configured external
/// renderer.
///
/// Blocking from the renderer's point of view: the child process runs to
/// completion with no cancellation path. Returns
/// [`Md2DocError::RendererUnavailable`] on any renderer failure so the
/// caller can fall back to HTML.
pub async fn render_to_pdf(
    html: &str,
    options: &PdfOptions,
    out_path: &Path,
) -> Result<(), Md2DocError> {
    let mut input = tempfile::Builder::new()
        .prefix("md2doc-")
        .suffix(".html")
        .tempfile()
        .map_err(|e| Md2DocError::Internal(format!("tempfile: {e}")))?;
    input
        .write_all(html.as_bytes())
        .map_err(|e| Md2DocError::Internal(format!("tempfile write: {e}")))?;
    input
        .flush()
        .map_err(|e| Md2DocError::Internal(format!("tempfile flush: {e}")))?;

    let args = options.to_args(input.path(), out_path);
    debug!(
        "Invoking renderer: {} ({} args)",
        options.binary.display(),
        args.len()
    );

    let result = Command::new(&options.binary).args(&args).output().await;

    let output = match result {
        Ok(o) => o,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(Md2DocError::RendererUnavailable {
                detail: format!("'{}' not found on PATH", options.binary.display()),
            });
        }
        Err(e) => {
            return Err(Md2DocError::RendererUnavailable {
                detail: format!("failed to launch '{}': {e}", options.binary.display()),
            });
        }
    };

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let stderr = stderr.trim();
        return Err(Md2DocError::RendererUnavailable {
            detail: format!(
                "'{}' exited with {}{}{}",
                options.binary.display(),
                output.status,
                if stderr.is_empty() { "" } else { ": " },
                stderr
            ),
        });
    }

    // wkhtmltopdf can exit 0 without producing output in some degraded
    // environments (e.g. missing X libraries on headless hosts).
    if !out_path.exists() {
        return Err(Md2DocError::RendererUnavailable {
            detail: format!(
                "'{}' exited successfully but produced no file at '{}'",
                options.binary.display(),
                out_path.display()
            ),
        });
    }

    info!("Rendered PDF: {}", out_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn options_with_binary(binary: &str) -> PdfOptions {
        PdfOptions {
            binary: PathBuf::from(binary),
            ..PdfOptions::default()
        }
    }

    #[tokio::test]
    async fn missing_binary_is_renderer_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out.pdf");
        let err = render_to_pdf(
            "<html></html>",
            &options_with_binary("/definitely/not/wkhtmltopdf"),
            &out,
        )
        .await
        .unwrap_err();

        match err {
            Md2DocError::RendererUnavailable { ref detail } => {
                assert!(detail.contains("not found"), "got: {detail}");
            }
            other => panic!("expected RendererUnavailable, got {other:?}"),
        }
        assert!(!out.exists(), "no PDF must be produced on failure");
    }

    #[tokio::test]
    async fn failing_binary_is_renderer_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out.pdf");
        // `false` accepts any arguments and exits 1.
        let err = render_to_pdf("<html></html>", &options_with_binary("false"), &out)
            .await
            .unwrap_err();
        assert!(matches!(err, Md2DocError::RendererUnavailable { .. }));
        assert!(!out.exists());
    }

    #[tokio::test]
    async fn silent_binary_without_output_is_renderer_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out.pdf");
        // `true` exits 0 but writes nothing.
        let err = render_to_pdf("<html></html>", &options_with_binary("true"), &out)
            .await
            .unwrap_err();
        match err {
            Md2DocError::RendererUnavailable { ref detail } => {
                assert!(detail.contains("produced no file"), "got: {detail}");
            }
            other => panic!("expected RendererUnavailable, got {other:?}"),
        }
    }
}
