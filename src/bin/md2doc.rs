//! CLI binary for md2doc.
//!
//! A thin shim over the library crate that maps CLI flags to
//! `ConversionConfig` and prints per-artifact status lines.

use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use md2doc::{
    convert, ArtifactKind, ConversionConfig, ConversionProgressCallback, ProgressCallback,
    StyleVariant,
};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

// ── ANSI colour helpers (no extra deps) ──────────────────────────────────────

fn green(s: &str) -> String {
    format!("\x1b[32m{s}\x1b[0m")
}
fn yellow(s: &str) -> String {
    format!("\x1b[33m{s}\x1b[0m")
}
fn dim(s: &str) -> String {
    format!("\x1b[2m{s}\x1b[0m")
}
fn bold(s: &str) -> String {
    format!("\x1b[1m{s}\x1b[0m")
}
fn cyan(s: &str) -> String {
    format!("\x1b[36m{s}\x1b[0m")
}

// ── CLI progress callback ────────────────────────────────────────────────────

/// Terminal progress callback: prints a ✓ line per artifact and shows a
/// spinner while the external PDF renderer runs (the only step that can take
/// more than a moment).
struct CliProgressCallback {
    spinner: Mutex<Option<ProgressBar>>,
}

impl CliProgressCallback {
    fn new() -> Arc<Self> {
        Arc::new(Self {
            spinner: Mutex::new(None),
        })
    }

    fn clear_spinner(&self) {
        if let Some(bar) = self.spinner.lock().unwrap().take() {
            bar.finish_and_clear();
        }
    }
}

fn artifact_label(kind: ArtifactKind, variant: Option<StyleVariant>) -> String {
    match variant {
        Some(v) => format!("{kind} ({v})"),
        None => kind.to_string(),
    }
}

impl ConversionProgressCallback for CliProgressCallback {
    fn on_conversion_start(&self, source: &Path, planned: usize) {
        eprintln!(
            "{} {}",
            cyan("◆"),
            bold(&format!(
                "Converting {} ({} artifact{})…",
                source.display(),
                planned,
                if planned == 1 { "" } else { "s" }
            ))
        );
    }

    fn on_artifact_start(&self, kind: ArtifactKind, _variant: Option<StyleVariant>, _path: &Path) {
        if kind == ArtifactKind::Pdf {
            let bar = ProgressBar::new_spinner();
            bar.set_style(
                ProgressStyle::with_template("{spinner:.cyan} {msg}")
                    .unwrap_or_else(|_| ProgressStyle::default_spinner())
                    .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", "⠿"]),
            );
            bar.set_message("rendering PDF via wkhtmltopdf…");
            bar.enable_steady_tick(Duration::from_millis(80));
            *self.spinner.lock().unwrap() = Some(bar);
        }
    }

    fn on_artifact_complete(
        &self,
        kind: ArtifactKind,
        variant: Option<StyleVariant>,
        path: &Path,
        bytes: u64,
    ) {
        self.clear_spinner();
        eprintln!(
            "  {} {:<22} {}  {}",
            green("✓"),
            artifact_label(kind, variant),
            bold(&path.display().to_string()),
            dim(&format!("{bytes} bytes")),
        );
    }

    fn on_pdf_fallback(&self, detail: &str) {
        self.clear_spinner();
        eprintln!("  {} PDF rendering unavailable — writing HTML instead", yellow("⚠"));
        for line in detail.lines() {
            eprintln!("    {}", dim(line));
        }
    }
}

const AFTER_HELP: &str = r#"EXAMPLES:
  # Convert report.md → report.html, report_print.html, report.pdf
  md2doc

  # Convert a specific document into ./dist
  md2doc docs/design.md -o dist

  # HTML only (never invokes wkhtmltopdf)
  md2doc report.md --html-only

  # PDF only, US Letter, draft resolution
  md2doc report.md --pdf-only --page-size Letter --dpi 150

  # Machine-readable summary of what was produced
  md2doc report.md --json

FALLBACK BEHAVIOUR:
  PDF output requires wkhtmltopdf on PATH (or --pdf-binary). When it is
  missing or fails, md2doc reports the problem, writes HTML output instead,
  and still exits successfully — a missing renderer never costs you the run.

TABLE OF CONTENTS:
  Headings automatically receive anchor ids. A paragraph containing only
  [TOC] is replaced with a linked table of contents.

ENVIRONMENT VARIABLES:
  MD2DOC_OUTPUT_DIR     Default output directory
  MD2DOC_PDF_BINARY     Path to the wkhtmltopdf executable
  MD2DOC_PAGE_SIZE      Default paper size
  MD2DOC_DPI            Default rendering DPI
"#;

/// Convert Markdown documents to styled HTML and PDF.
#[derive(Parser, Debug)]
#[command(
    name = "md2doc",
    version,
    about = "Convert Markdown documents to styled HTML and PDF",
    long_about = "Convert a Markdown document into styled HTML and PDF artifacts. \
PDF rendering uses the external wkhtmltopdf tool; when it is unavailable the \
conversion degrades gracefully to HTML output.",
    color = clap::ColorChoice::Auto,
    after_long_help = AFTER_HELP
)]
struct Cli {
    /// Markdown source file.
    #[arg(default_value = "report.md")]
    input: PathBuf,

    /// Directory to write artifacts into (default: alongside the source).
    #[arg(short, long, env = "MD2DOC_OUTPUT_DIR")]
    output_dir: Option<PathBuf>,

    /// Document title (default: source file stem).
    #[arg(long)]
    title: Option<String>,

    /// Write only HTML artifacts; never invoke the PDF renderer.
    #[arg(long, conflicts_with = "pdf_only")]
    html_only: bool,

    /// Write only the PDF artifact (HTML fallback still applies).
    #[arg(long, conflicts_with = "html_only")]
    pdf_only: bool,

    /// Paper size for PDF output (A4, Letter, …).
    #[arg(long, env = "MD2DOC_PAGE_SIZE", default_value = "A4")]
    page_size: String,

    /// Page margins for PDF output, all four sides (e.g. 1in, 2.5cm).
    #[arg(long, env = "MD2DOC_MARGINS", default_value = "1in")]
    margins: String,

    /// Rendering DPI for PDF output (72–600).
    #[arg(long, env = "MD2DOC_DPI", default_value_t = 300,
          value_parser = clap::value_parser!(u32).range(72..=600))]
    dpi: u32,

    /// Path to the wkhtmltopdf executable.
    #[arg(long, env = "MD2DOC_PDF_BINARY", default_value = "wkhtmltopdf")]
    pdf_binary: PathBuf,

    /// Output a structured JSON summary instead of status lines.
    #[arg(long)]
    json: bool,

    /// Disable per-artifact progress output.
    #[arg(long)]
    no_progress: bool,

    /// Enable DEBUG-level tracing logs.
    #[arg(short, long)]
    verbose: bool,

    /// Suppress all output except errors.
    #[arg(short, long)]
    quiet: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // ── Logging setup ────────────────────────────────────────────────────
    // Status lines are the user-facing feedback; library logs stay at error
    // level unless --verbose asks for them.
    let show_progress = !cli.quiet && !cli.no_progress && !cli.json;
    let filter = if cli.verbose {
        "debug"
    } else if cli.quiet || show_progress {
        "error"
    } else {
        "info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();

    // ── Build config ─────────────────────────────────────────────────────
    let progress_cb: Option<ProgressCallback> = if show_progress {
        Some(CliProgressCallback::new() as Arc<dyn ConversionProgressCallback>)
    } else {
        None
    };

    let mut builder = ConversionConfig::builder()
        .source(&cli.input)
        .emit_html(!cli.pdf_only)
        .emit_pdf(!cli.html_only)
        .page_size(cli.page_size.clone())
        .margins(cli.margins.clone())
        .dpi(cli.dpi)
        .pdf_binary(&cli.pdf_binary);
    if let Some(ref dir) = cli.output_dir {
        builder = builder.output_dir(dir);
    }
    if let Some(ref title) = cli.title {
        builder = builder.title(title.clone());
    }
    if let Some(cb) = progress_cb {
        builder = builder.progress_callback(cb);
    }
    let config = builder.build().context("Invalid configuration")?;

    // ── Run conversion ───────────────────────────────────────────────────
    let output = convert(&config).await.context("Conversion failed")?;

    if cli.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&output).context("Failed to serialise output")?
        );
        return Ok(());
    }

    if !cli.quiet {
        // The callback already printed per-artifact lines; print them here
        // only when progress was disabled.
        if !show_progress {
            for artifact in &output.artifacts {
                eprintln!(
                    "Wrote {}: {}",
                    artifact_label(artifact.kind, artifact.variant),
                    artifact.path.display()
                );
            }
        }
        let summary = format!(
            "{} artifact{} in {}ms",
            output.artifacts.len(),
            if output.artifacts.len() == 1 { "" } else { "s" },
            output.stats.total_duration_ms
        );
        if output.stats.pdf_fell_back {
            eprintln!(
                "{} {}  {}",
                yellow("⚠"),
                bold(&summary),
                dim("(PDF skipped — renderer unavailable)")
            );
        } else {
            eprintln!("{} {}", green("✔"), bold(&summary));
        }
    }

    Ok(())
}
