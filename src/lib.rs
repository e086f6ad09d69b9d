//! # md2doc
//!
//! Convert Markdown documents to styled HTML and PDF.
//!
//! ## Why this crate?
//!
//! Turning a Markdown report into something you can hand to a reviewer means
//! juggling a parser, a stylesheet, and an HTML-to-PDF renderer that may or
//! may not be installed. This crate wires those pieces into one deterministic
//! pipeline with a graceful degradation rule: if the PDF renderer
//! (`wkhtmltopdf`) is missing, you get styled HTML you can print from a
//! browser instead of an error.
//!
//! ## Pipeline Overview
//!
//! ```text
//! Markdown
//!  │
//!  ├─ 1. Input     read the source file as UTF-8
//!  ├─ 2. Transform Markdown → HTML body (tables, fenced code, TOC anchors)
//!  ├─ 3. Template  wrap in a style variant (standard / print / simplified)
//!  ├─ 4. Write     standard + print-optimised HTML artifacts
//!  └─ 5. PDF       wkhtmltopdf (A4, 1in margins, UTF-8, 300 DPI)
//!                   └─ unavailable? → simplified HTML fallback
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use md2doc::{convert, ConversionConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ConversionConfig::builder()
//!         .source("report.md")
//!         .title("Quarterly Report")
//!         .build()?;
//!     let output = convert(&config).await?;
//!     for artifact in &output.artifacts {
//!         println!("{}: {}", artifact.kind, artifact.path.display());
//!     }
//!     if output.stats.pdf_fell_back {
//!         eprintln!("note: wkhtmltopdf missing, HTML written instead");
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `md2doc` binary (clap + anyhow + tracing-subscriber + indicatif) |
//!
//! Disable `cli` when using only the library:
//! ```toml
//! md2doc = { version = "0.3", default-features = false }
//! ```

// ── Modules ──────────────────────────────────────────────────────────────

pub mod config;
pub mod convert;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod progress;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::{ConversionConfig, ConversionConfigBuilder, PdfOptions, StyleVariant};
pub use convert::{convert, convert_sync, render_html, write_artifact};
pub use error::Md2DocError;
pub use output::{Artifact, ArtifactKind, ConversionOutput, ConversionStats};
pub use progress::{ConversionProgressCallback, NoopProgressCallback, ProgressCallback};
