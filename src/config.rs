//! Configuration types for Markdown-to-document conversion.
//!
//! All conversion behaviour is controlled through [`ConversionConfig`], built
//! via its [`ConversionConfigBuilder`]. The original tool this crate replaces
//! hardcoded every file path as a module-level constant; here paths are
//! explicit configuration with defaults, so the same pipeline serves both the
//! zero-argument CLI run and embedders with their own layout.
//!
//! # Design choice: builder over constructor
//! A ten-field constructor breaks on every new field. The builder lets callers
//! set only what they care about and rely on documented defaults for the rest.

use crate::error::Md2DocError;
use crate::progress::ProgressCallback;
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};

/// One of the three predefined style templates wrapped around rendered
/// Markdown content.
///
/// The body HTML is identical across variants; only the embedded CSS differs.
/// [`Simplified`](StyleVariant::Simplified) exists for the fallback path:
/// when PDF rendering is unavailable and no other HTML was produced, the
/// pipeline writes a lean document the user can print from a browser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StyleVariant {
    /// Full screen/PDF stylesheet: serif body, coloured headings, page-break
    /// rules for the PDF renderer. (default)
    #[default]
    Standard,
    /// Print-optimised stylesheet: `@media print` page setup with a separate
    /// `@media screen` preview style.
    PrintOptimized,
    /// Minimal sans-serif stylesheet used by the HTML fallback.
    Simplified,
}

impl fmt::Display for StyleVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleVariant::Standard => write!(f, "standard"),
            StyleVariant::PrintOptimized => write!(f, "print-optimized"),
            StyleVariant::Simplified => write!(f, "simplified"),
        }
    }
}

/// Fixed configuration bag passed to the external `wkhtmltopdf` renderer.
///
/// Defaults mirror a conventional report layout: A4, one-inch margins,
/// UTF-8, 300 DPI, local file access enabled so relative image links in the
/// document resolve.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PdfOptions {
    /// Paper size name understood by wkhtmltopdf (`A4`, `Letter`, …). Default: `A4`.
    pub page_size: String,
    /// Top margin with unit suffix. Default: `1in`.
    pub margin_top: String,
    /// Right margin with unit suffix. Default: `1in`.
    pub margin_right: String,
    /// Bottom margin with unit suffix. Default: `1in`.
    pub margin_bottom: String,
    /// Left margin with unit suffix. Default: `1in`.
    pub margin_left: String,
    /// Text encoding of the input HTML. Default: `UTF-8`.
    pub encoding: String,
    /// Rendering DPI. Range: 72–600. Default: 300.
    pub dpi: u32,
    /// Allow the renderer to read local files referenced by the HTML. Default: true.
    pub enable_local_file_access: bool,
    /// Render with the `@media print` stylesheet active. Default: true.
    pub print_media_type: bool,
    /// Renderer executable. Default: `wkhtmltopdf` resolved via `PATH`.
    ///
    /// Tests point this at a nonexistent path to exercise the fallback
    /// without depending on the host having wkhtmltopdf installed.
    pub binary: PathBuf,
}

impl Default for PdfOptions {
    fn default() -> Self {
        Self {
            page_size: "A4".to_string(),
            margin_top: "1in".to_string(),
            margin_right: "1in".to_string(),
            margin_bottom: "1in".to_string(),
            margin_left: "1in".to_string(),
            encoding: "UTF-8".to_string(),
            dpi: 300,
            enable_local_file_access: true,
            print_media_type: true,
            binary: PathBuf::from("wkhtmltopdf"),
        }
    }
}

impl PdfOptions {
    /// Build the wkhtmltopdf argument list for one `input → output` render.
    ///
    /// `--quiet` keeps stderr limited to actual errors, which the pipeline
    /// forwards into [`Md2DocError::RendererUnavailable`] on failure.
    pub fn to_args(&self, input: &Path, output: &Path) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec![
            "--quiet".into(),
            "--page-size".into(),
            self.page_size.clone().into(),
            "--margin-top".into(),
            self.margin_top.clone().into(),
            "--margin-right".into(),
            self.margin_right.clone().into(),
            "--margin-bottom".into(),
            self.margin_bottom.clone().into(),
            "--margin-left".into(),
            self.margin_left.clone().into(),
            "--encoding".into(),
            self.encoding.clone().into(),
            "--dpi".into(),
            self.dpi.to_string().into(),
            "--no-outline".into(),
        ];
        if self.enable_local_file_access {
            args.push("--enable-local-file-access".into());
        }
        if self.print_media_type {
            args.push("--print-media-type".into());
        }
        args.push(input.as_os_str().to_os_string());
        args.push(output.as_os_str().to_os_string());
        args
    }
}

/// Configuration for one Markdown-to-document conversion.
///
/// Built via [`ConversionConfig::builder()`] or [`ConversionConfig::default()`].
///
/// # Example
/// ```rust
/// use md2doc::ConversionConfig;
///
/// let config = ConversionConfig::builder()
///     .source("report.md")
///     .title("Quarterly Report")
///     .dpi(150)
///     .build()
///     .unwrap();
/// ```
#[derive(Clone)]
pub struct ConversionConfig {
    /// Path to the Markdown source. Default: `report.md`.
    pub source: PathBuf,

    /// Directory output artifacts are written to. Default: the source's
    /// parent directory.
    pub output_dir: Option<PathBuf>,

    /// `<title>` of the generated documents. Default: the source file stem.
    pub title: Option<String>,

    /// Write the standard and print-optimised HTML artifacts. Default: true.
    pub emit_html: bool,

    /// Attempt PDF rendering. Default: true.
    ///
    /// When the renderer is unavailable this degrades to HTML output rather
    /// than failing; see [`crate::convert::convert`].
    pub emit_pdf: bool,

    /// Renderer configuration used for the PDF artifact.
    pub pdf: PdfOptions,

    /// Optional per-artifact progress events. Default: none.
    pub progress_callback: Option<ProgressCallback>,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            source: PathBuf::from("report.md"),
            output_dir: None,
            title: None,
            emit_html: true,
            emit_pdf: true,
            pdf: PdfOptions::default(),
            progress_callback: None,
        }
    }
}

impl fmt::Debug for ConversionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConversionConfig")
            .field("source", &self.source)
            .field("output_dir", &self.output_dir)
            .field("title", &self.title)
            .field("emit_html", &self.emit_html)
            .field("emit_pdf", &self.emit_pdf)
            .field("pdf", &self.pdf)
            .field(
                "progress_callback",
                &self.progress_callback.as_ref().map(|_| "<dyn callback>"),
            )
            .finish()
    }
}

impl ConversionConfig {
    /// Create a new builder for `ConversionConfig`.
    pub fn builder() -> ConversionConfigBuilder {
        ConversionConfigBuilder {
            config: Self::default(),
        }
    }

    /// Directory artifacts land in: `output_dir` if set, else the source's
    /// parent (or `.` for a bare file name).
    pub fn resolved_output_dir(&self) -> PathBuf {
        if let Some(ref dir) = self.output_dir {
            return dir.clone();
        }
        match self.source.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }

    /// Document title: explicit `title`, else the source file stem.
    pub fn resolved_title(&self) -> String {
        if let Some(ref t) = self.title {
            return t.clone();
        }
        self.source
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "Document".to_string())
    }

    fn artifact_path(&self, suffix: &str, ext: &str) -> PathBuf {
        let stem = self
            .source
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "output".to_string());
        self.resolved_output_dir()
            .join(format!("{stem}{suffix}.{ext}"))
    }

    /// Path of the standard HTML artifact (`<stem>.html`).
    pub fn html_path(&self) -> PathBuf {
        self.artifact_path("", "html")
    }

    /// Path of the print-optimised HTML artifact (`<stem>_print.html`).
    pub fn print_html_path(&self) -> PathBuf {
        self.artifact_path("_print", "html")
    }

    /// Path of the PDF artifact (`<stem>.pdf`).
    pub fn pdf_path(&self) -> PathBuf {
        self.artifact_path("", "pdf")
    }
}

/// Builder for [`ConversionConfig`].
#[derive(Debug)]
pub struct ConversionConfigBuilder {
    config: ConversionConfig,
}

impl ConversionConfigBuilder {
    pub fn source(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.source = path.into();
        self
    }

    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.output_dir = Some(dir.into());
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.config.title = Some(title.into());
        self
    }

    pub fn emit_html(mut self, v: bool) -> Self {
        self.config.emit_html = v;
        self
    }

    pub fn emit_pdf(mut self, v: bool) -> Self {
        self.config.emit_pdf = v;
        self
    }

    pub fn pdf_options(mut self, pdf: PdfOptions) -> Self {
        self.config.pdf = pdf;
        self
    }

    pub fn page_size(mut self, size: impl Into<String>) -> Self {
        self.config.pdf.page_size = size.into();
        self
    }

    /// Set all four page margins to the same value (e.g. `"1in"`, `"2.5cm"`).
    pub fn margins(mut self, m: impl Into<String>) -> Self {
        let m = m.into();
        self.config.pdf.margin_top = m.clone();
        self.config.pdf.margin_right = m.clone();
        self.config.pdf.margin_bottom = m.clone();
        self.config.pdf.margin_left = m;
        self
    }

    pub fn dpi(mut self, dpi: u32) -> Self {
        self.config.pdf.dpi = dpi.clamp(72, 600);
        self
    }

    pub fn pdf_binary(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.pdf.binary = path.into();
        self
    }

    pub fn progress_callback(mut self, cb: ProgressCallback) -> Self {
        self.config.progress_callback = Some(cb);
        self
    }

    /// Build the configuration, validating constraints.
    pub fn build(self) -> Result<ConversionConfig, Md2DocError> {
        let c = &self.config;
        if !c.emit_html && !c.emit_pdf {
            return Err(Md2DocError::InvalidConfig(
                "Nothing to do: both HTML and PDF output are disabled".into(),
            ));
        }
        if c.pdf.dpi < 72 || c.pdf.dpi > 600 {
            return Err(Md2DocError::InvalidConfig(format!(
                "DPI must be 72–600, got {}",
                c.pdf.dpi
            )));
        }
        if c.pdf.page_size.trim().is_empty() {
            return Err(Md2DocError::InvalidConfig("Page size is empty".into()));
        }
        if c.source.as_os_str().is_empty() {
            return Err(Md2DocError::InvalidConfig("Source path is empty".into()));
        }
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_paths_derive_from_source_stem() {
        let config = ConversionConfig::builder()
            .source("docs/report.md")
            .build()
            .unwrap();
        assert_eq!(config.html_path(), PathBuf::from("docs/report.html"));
        assert_eq!(
            config.print_html_path(),
            PathBuf::from("docs/report_print.html")
        );
        assert_eq!(config.pdf_path(), PathBuf::from("docs/report.pdf"));
        assert_eq!(config.resolved_title(), "report");
    }

    #[test]
    fn output_dir_overrides_source_parent() {
        let config = ConversionConfig::builder()
            .source("docs/report.md")
            .output_dir("out")
            .build()
            .unwrap();
        assert_eq!(config.html_path(), PathBuf::from("out/report.html"));
    }

    #[test]
    fn bare_filename_resolves_to_current_dir() {
        let config = ConversionConfig::builder()
            .source("report.md")
            .build()
            .unwrap();
        assert_eq!(config.resolved_output_dir(), PathBuf::from("."));
    }

    #[test]
    fn build_rejects_no_outputs() {
        let err = ConversionConfig::builder()
            .emit_html(false)
            .emit_pdf(false)
            .build()
            .unwrap_err();
        assert!(matches!(err, Md2DocError::InvalidConfig(_)));
    }

    #[test]
    fn dpi_is_clamped_by_the_setter() {
        let config = ConversionConfig::builder().dpi(10_000).build().unwrap();
        assert_eq!(config.pdf.dpi, 600);
        let config = ConversionConfig::builder().dpi(1).build().unwrap();
        assert_eq!(config.pdf.dpi, 72);
    }

    #[test]
    fn pdf_args_carry_the_fixed_configuration() {
        let opts = PdfOptions::default();
        let args = opts.to_args(Path::new("in.html"), Path::new("out.pdf"));
        let args: Vec<String> = args
            .into_iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect();
        for expected in [
            "--page-size",
            "A4",
            "--margin-top",
            "1in",
            "--encoding",
            "UTF-8",
            "--dpi",
            "300",
            "--enable-local-file-access",
            "--print-media-type",
            "--no-outline",
        ] {
            assert!(args.iter().any(|a| a == expected), "missing {expected}");
        }
        // Input before output, both last.
        assert_eq!(args[args.len() - 2], "in.html");
        assert_eq!(args[args.len() - 1], "out.pdf");
    }

    #[test]
    fn margins_setter_applies_to_all_sides() {
        let config = ConversionConfig::builder().margins("2.5cm").build().unwrap();
        assert_eq!(config.pdf.margin_top, "2.5cm");
        assert_eq!(config.pdf.margin_left, "2.5cm");
        assert_eq!(config.pdf.margin_bottom, "2.5cm");
        assert_eq!(config.pdf.margin_right, "2.5cm");
    }

    #[test]
    fn style_variant_display_names() {
        assert_eq!(StyleVariant::Standard.to_string(), "standard");
        assert_eq!(StyleVariant::PrintOptimized.to_string(), "print-optimized");
        assert_eq!(StyleVariant::Simplified.to_string(), "simplified");
    }
}
