//! Result types returned by the conversion entry points.

use crate::config::StyleVariant;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// The format of a produced artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactKind {
    Html,
    Pdf,
}

impl std::fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArtifactKind::Html => write!(f, "HTML"),
            ArtifactKind::Pdf => write!(f, "PDF"),
        }
    }
}

/// One file written by the conversion run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Artifact {
    /// HTML or PDF.
    pub kind: ArtifactKind,
    /// Style template embedded in the artifact. `None` for PDF, whose
    /// styling comes from the standard template it was rendered through.
    pub variant: Option<StyleVariant>,
    /// Where the file was written.
    pub path: PathBuf,
    /// Size on disk in bytes.
    pub bytes: u64,
    /// True when this artifact was written because PDF rendering failed.
    pub is_fallback: bool,
}

/// Timing and outcome summary for one conversion run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConversionStats {
    /// Wall-clock time spent in the Markdown → HTML transform.
    pub render_duration_ms: u64,
    /// Wall-clock time spent inside the external PDF renderer, if invoked.
    pub pdf_duration_ms: u64,
    /// Total conversion time including file I/O.
    pub total_duration_ms: u64,
    /// True when PDF rendering failed and HTML was substituted.
    pub pdf_fell_back: bool,
}

/// Result of a successful conversion run.
///
/// `Ok(ConversionOutput)` is returned even when the PDF renderer was
/// unavailable — check [`ConversionStats::pdf_fell_back`] and the
/// [`Artifact::is_fallback`] flags to see what was actually produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionOutput {
    /// Every file written, in the order it was produced.
    pub artifacts: Vec<Artifact>,
    /// Timing and fallback summary.
    pub stats: ConversionStats,
}

impl ConversionOutput {
    /// The PDF artifact, if one was produced.
    pub fn pdf(&self) -> Option<&Artifact> {
        self.artifacts.iter().find(|a| a.kind == ArtifactKind::Pdf)
    }

    /// All HTML artifacts.
    pub fn html(&self) -> impl Iterator<Item = &Artifact> {
        self.artifacts
            .iter()
            .filter(|a| a.kind == ArtifactKind::Html)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn artifact(kind: ArtifactKind, path: &str) -> Artifact {
        Artifact {
            kind,
            variant: None,
            path: PathBuf::from(path),
            bytes: 0,
            is_fallback: false,
        }
    }

    #[test]
    fn pdf_accessor_finds_pdf_artifact() {
        let out = ConversionOutput {
            artifacts: vec![
                artifact(ArtifactKind::Html, "report.html"),
                artifact(ArtifactKind::Pdf, "report.pdf"),
            ],
            stats: ConversionStats::default(),
        };
        assert_eq!(out.pdf().unwrap().path, PathBuf::from("report.pdf"));
        assert_eq!(out.html().count(), 1);
    }

    #[test]
    fn artifact_kind_serialises_lowercase() {
        let json = serde_json::to_string(&ArtifactKind::Pdf).unwrap();
        assert_eq!(json, "\"pdf\"");
    }
}
