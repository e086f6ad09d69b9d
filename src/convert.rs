//! Top-level conversion entry points.
//!
//! [`convert`] runs the whole pipeline for one configuration: load the
//! source, transform it once, write the requested HTML variants, then attempt
//! PDF rendering. The single piece of control flow beyond the linear steps is
//! the fallback rule:
//!
//! > PDF is attempted first-class; on [`Md2DocError::RendererUnavailable`]
//! > the run degrades to HTML output instead of failing, and the substitution
//! > is recorded in [`ConversionStats::pdf_fell_back`] and reported through
//! > the progress callback.
//!
//! Everything else is deterministic: the same source produces byte-identical
//! HTML artifacts on every run, and existing output files are overwritten
//! unconditionally (atomically, via temp file + rename).

use crate::config::{ConversionConfig, StyleVariant};
use crate::error::Md2DocError;
use crate::output::{Artifact, ArtifactKind, ConversionOutput, ConversionStats};
use crate::pipeline::{input, markdown, pdf, template};
use std::path::Path;
use std::time::Instant;
use tracing::{info, warn};

/// Render Markdown text into a complete styled HTML document.
///
/// Pure function of its inputs; no side effects. This is the composition the
/// pipeline itself uses: Markdown → body fragment → styled document.
pub fn render_html(markdown_text: &str, variant: StyleVariant, title: &str) -> String {
    let body = markdown::to_html_body(markdown_text);
    template::wrap_document(&body, variant, title)
}

/// Write an artifact to disk, overwriting any existing file.
///
/// Atomic: the content goes to a sibling temp file first and is renamed into
/// place, so readers never observe a partially written artifact. Returns the
/// number of bytes written.
pub async fn write_artifact(content: &str, path: &Path) -> Result<u64, Md2DocError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| Md2DocError::OutputWriteFailed {
                    path: path.to_path_buf(),
                    source: e,
                })?;
        }
    }

    let tmp_path = path.with_extension("tmp");
    tokio::fs::write(&tmp_path, content)
        .await
        .map_err(|e| Md2DocError::OutputWriteFailed {
            path: path.to_path_buf(),
            source: e,
        })?;
    tokio::fs::rename(&tmp_path, path)
        .await
        .map_err(|e| Md2DocError::OutputWriteFailed {
            path: path.to_path_buf(),
            source: e,
        })?;

    Ok(content.len() as u64)
}

/// Convert a Markdown document to the configured set of artifacts.
///
/// # Returns
/// `Ok(ConversionOutput)` on success, including the case where the PDF
/// renderer was unavailable and HTML was substituted (check
/// `output.stats.pdf_fell_back`).
///
/// # Errors
/// Returns `Err(Md2DocError)` only for fatal errors: missing or unreadable
/// source, invalid UTF-8, or output I/O failures. No artifact is produced
/// when the source cannot be loaded.
pub async fn convert(config: &ConversionConfig) -> Result<ConversionOutput, Md2DocError> {
    let total_start = Instant::now();
    info!("Starting conversion: {}", config.source.display());

    // ── Step 1: Load source ──────────────────────────────────────────────
    let source_text = input::load_source(&config.source).await?;
    let title = config.resolved_title();

    // ── Step 2: Transform Markdown once ──────────────────────────────────
    // The body is shared by every variant; only the wrapping style differs.
    let render_start = Instant::now();
    let body = markdown::to_html_body(&source_text);
    let render_duration_ms = render_start.elapsed().as_millis() as u64;

    let mut planned = 0usize;
    if config.emit_html {
        planned += 2;
    }
    if config.emit_pdf {
        planned += 1;
    }
    if let Some(ref cb) = config.progress_callback {
        cb.on_conversion_start(&config.source, planned);
    }

    let mut artifacts: Vec<Artifact> = Vec::with_capacity(planned);

    // ── Step 3: HTML artifacts ───────────────────────────────────────────
    if config.emit_html {
        let targets = [
            (StyleVariant::Standard, config.html_path()),
            (StyleVariant::PrintOptimized, config.print_html_path()),
        ];
        for (variant, path) in targets {
            if let Some(ref cb) = config.progress_callback {
                cb.on_artifact_start(ArtifactKind::Html, Some(variant), &path);
            }
            let document = template::wrap_document(&body, variant, &title);
            let bytes = write_artifact(&document, &path).await?;
            info!("Wrote {} HTML: {} ({} bytes)", variant, path.display(), bytes);
            if let Some(ref cb) = config.progress_callback {
                cb.on_artifact_complete(ArtifactKind::Html, Some(variant), &path, bytes);
            }
            artifacts.push(Artifact {
                kind: ArtifactKind::Html,
                variant: Some(variant),
                path,
                bytes,
                is_fallback: false,
            });
        }
    }

    // ── Step 4: PDF, with HTML fallback ──────────────────────────────────
    let mut pdf_duration_ms = 0u64;
    let mut pdf_fell_back = false;
    if config.emit_pdf {
        let pdf_path = config.pdf_path();
        if let Some(ref cb) = config.progress_callback {
            cb.on_artifact_start(ArtifactKind::Pdf, None, &pdf_path);
        }
        let document = template::wrap_document(&body, StyleVariant::Standard, &title);
        let pdf_start = Instant::now();
        match pdf::render_to_pdf(&document, &config.pdf, &pdf_path).await {
            Ok(()) => {
                pdf_duration_ms = pdf_start.elapsed().as_millis() as u64;
                let bytes = tokio::fs::metadata(&pdf_path)
                    .await
                    .map(|m| m.len())
                    .unwrap_or(0);
                info!("Wrote PDF: {} ({} bytes)", pdf_path.display(), bytes);
                if let Some(ref cb) = config.progress_callback {
                    cb.on_artifact_complete(ArtifactKind::Pdf, None, &pdf_path, bytes);
                }
                artifacts.push(Artifact {
                    kind: ArtifactKind::Pdf,
                    variant: None,
                    path: pdf_path,
                    bytes,
                    is_fallback: false,
                });
            }
            Err(e) if e.is_recoverable() => {
                pdf_duration_ms = pdf_start.elapsed().as_millis() as u64;
                pdf_fell_back = true;
                warn!("PDF rendering unavailable, substituting HTML output");
                if let Some(ref cb) = config.progress_callback {
                    cb.on_pdf_fallback(&e.to_string());
                }
                // If this run already wrote HTML, that output is the
                // substitute; otherwise write the simplified variant so the
                // user still gets a printable document.
                if artifacts.is_empty() {
                    let fallback_path = config.html_path();
                    let fallback_doc =
                        template::wrap_document(&body, StyleVariant::Simplified, &title);
                    let bytes = write_artifact(&fallback_doc, &fallback_path).await?;
                    info!(
                        "Wrote fallback HTML: {} ({} bytes)",
                        fallback_path.display(),
                        bytes
                    );
                    if let Some(ref cb) = config.progress_callback {
                        cb.on_artifact_complete(
                            ArtifactKind::Html,
                            Some(StyleVariant::Simplified),
                            &fallback_path,
                            bytes,
                        );
                    }
                    artifacts.push(Artifact {
                        kind: ArtifactKind::Html,
                        variant: Some(StyleVariant::Simplified),
                        path: fallback_path,
                        bytes,
                        is_fallback: true,
                    });
                }
            }
            Err(fatal) => return Err(fatal),
        }
    }

    if let Some(ref cb) = config.progress_callback {
        cb.on_conversion_complete(artifacts.len());
    }

    let stats = ConversionStats {
        render_duration_ms,
        pdf_duration_ms,
        total_duration_ms: total_start.elapsed().as_millis() as u64,
        pdf_fell_back,
    };
    info!(
        "Conversion complete: {} artifact(s) in {}ms",
        artifacts.len(),
        stats.total_duration_ms
    );

    Ok(ConversionOutput { artifacts, stats })
}

/// Synchronous wrapper around [`convert`].
///
/// Creates a temporary tokio runtime internally.
pub fn convert_sync(config: &ConversionConfig) -> Result<ConversionOutput, Md2DocError> {
    tokio::runtime::Runtime::new()
        .map_err(|e| Md2DocError::Internal(format!("Failed to create tokio runtime: {e}")))?
        .block_on(convert(config))
}
