//! Progress-callback trait for per-artifact conversion events.
//!
//! Inject an [`Arc<dyn ConversionProgressCallback>`] via
//! [`crate::config::ConversionConfigBuilder::progress_callback`] to receive
//! events as the pipeline writes each artifact. The CLI uses this to print a
//! status line per file and to surface the PDF fallback warning; embedders can
//! forward events anywhere without the library knowing how the host
//! application communicates.

use crate::config::StyleVariant;
use crate::output::ArtifactKind;
use std::path::Path;
use std::sync::Arc;

/// Called by the conversion pipeline as it produces each artifact.
///
/// All methods have default no-op implementations so callers only override
/// what they care about. The trait is `Send + Sync` so a single callback can
/// be shared across clones of the config.
pub trait ConversionProgressCallback: Send + Sync {
    /// Called once after the source has been loaded, before any artifact is
    /// written. `planned` is the number of artifacts the run will attempt.
    fn on_conversion_start(&self, source: &Path, planned: usize) {
        let _ = (source, planned);
    }

    /// Called just before an artifact is rendered and written.
    fn on_artifact_start(&self, kind: ArtifactKind, variant: Option<StyleVariant>, path: &Path) {
        let _ = (kind, variant, path);
    }

    /// Called when an artifact has been written to disk.
    fn on_artifact_complete(
        &self,
        kind: ArtifactKind,
        variant: Option<StyleVariant>,
        path: &Path,
        bytes: u64,
    ) {
        let _ = (kind, variant, path, bytes);
    }

    /// Called when PDF rendering failed and the pipeline is substituting
    /// HTML output. `detail` is the renderer error, including install hints.
    fn on_pdf_fallback(&self, detail: &str) {
        let _ = detail;
    }

    /// Called once after all artifacts have been attempted.
    fn on_conversion_complete(&self, produced: usize) {
        let _ = produced;
    }
}

/// A no-op implementation for callers that don't need progress events.
pub struct NoopProgressCallback;

impl ConversionProgressCallback for NoopProgressCallback {}

/// Convenience alias matching the type stored in [`crate::config::ConversionConfig`].
pub type ProgressCallback = Arc<dyn ConversionProgressCallback>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct TrackingCallback {
        artifacts: AtomicUsize,
        fallbacks: AtomicUsize,
    }

    impl ConversionProgressCallback for TrackingCallback {
        fn on_artifact_complete(
            &self,
            _kind: ArtifactKind,
            _variant: Option<StyleVariant>,
            _path: &Path,
            _bytes: u64,
        ) {
            self.artifacts.fetch_add(1, Ordering::SeqCst);
        }

        fn on_pdf_fallback(&self, _detail: &str) {
            self.fallbacks.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn noop_callback_does_not_panic() {
        let cb = NoopProgressCallback;
        cb.on_conversion_start(Path::new("report.md"), 3);
        cb.on_artifact_start(ArtifactKind::Html, Some(StyleVariant::Standard), Path::new("a"));
        cb.on_artifact_complete(ArtifactKind::Pdf, None, Path::new("a.pdf"), 42);
        cb.on_pdf_fallback("renderer missing");
        cb.on_conversion_complete(2);
    }

    #[test]
    fn tracking_callback_receives_events() {
        let cb = TrackingCallback {
            artifacts: AtomicUsize::new(0),
            fallbacks: AtomicUsize::new(0),
        };
        cb.on_artifact_complete(
            ArtifactKind::Html,
            Some(StyleVariant::Standard),
            Path::new("report.html"),
            1024,
        );
        cb.on_pdf_fallback("no wkhtmltopdf");
        assert_eq!(cb.artifacts.load(Ordering::SeqCst), 1);
        assert_eq!(cb.fallbacks.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn arc_dyn_callback_works() {
        let cb: ProgressCallback = Arc::new(NoopProgressCallback);
        cb.on_conversion_start(Path::new("x.md"), 1);
        cb.on_conversion_complete(1);
    }
}
