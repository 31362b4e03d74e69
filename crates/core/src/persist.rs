//! Writing rendered reports to disk.

use crate::config::ReportConfig;
use crate::document::ReportDocument;
use crate::render::ReportRenderer;
use crate::{ReportError, ReportResult};
use consult_types::PersonName;
use std::fs;
use std::path::{Path, PathBuf};

/// File stem used when no patient name was entered.
const UNNAMED_STEM: &str = "unnamed";

/// `<patient name, lowercased, spaces to underscores><suffix>.<extension>`.
///
/// ```
/// use consult_core::persist::report_filename;
/// assert_eq!(report_filename("Jane Smith", "_report", "md"), "jane_smith_report.md");
/// ```
pub fn report_filename(patient: &str, suffix: &str, extension: &str) -> String {
    let stem = PersonName::new(patient)
        .map(|name| name.file_stem())
        .unwrap_or_else(|_| UNNAMED_STEM.to_string());
    format!("{stem}{suffix}.{extension}")
}

/// Renders `document` and writes it into `dir`.
///
/// The document is rendered in full before anything touches the filesystem, so a render
/// failure leaves no file behind.
///
/// # Errors
///
/// Returns the renderer's error, `ReportError::InvalidInput` if the derived filename is not a
/// plain file name, or `ReportError::FileWrite` if the directory or file cannot be written.
pub fn persist_report(
    dir: &Path,
    patient: &str,
    config: &ReportConfig,
    renderer: &dyn ReportRenderer,
    document: &ReportDocument,
) -> ReportResult<PathBuf> {
    let rendered = renderer.render(document)?;

    let filename = report_filename(patient, config.file_suffix(), renderer.extension());
    if filename.contains(['/', '\\']) || filename.starts_with('.') {
        return Err(ReportError::InvalidInput(format!(
            "patient name produces an unsafe file name: {filename}"
        )));
    }

    fs::create_dir_all(dir).map_err(ReportError::FileWrite)?;
    let path = dir.join(filename);
    fs::write(&path, rendered).map_err(ReportError::FileWrite)?;

    tracing::info!("report saved as {}", path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::DocumentBuilder;
    use crate::render::{JsonRenderer, MarkdownRenderer};

    struct FailingRenderer;

    impl ReportRenderer for FailingRenderer {
        fn extension(&self) -> &'static str {
            "txt"
        }

        fn render(&self, _document: &ReportDocument) -> ReportResult<String> {
            Err(ReportError::InvalidInput("renderer broke".into()))
        }
    }

    fn document() -> ReportDocument {
        let mut b = DocumentBuilder::new();
        b.heading("PSYCHOLOGICAL CONSULT").paragraph("Body.");
        b.finish()
    }

    #[test]
    fn filename_convention() {
        assert_eq!(report_filename("  Jane Smith ", "_report", "md"), "jane_smith_report.md");
        assert_eq!(report_filename("Mary Ann O'Hara", "_report", "json"), "mary_ann_o'hara_report.json");
        assert_eq!(report_filename("", "_report", "md"), "unnamed_report.md");
    }

    #[test]
    fn writes_rendered_markdown() {
        let dir = tempfile::tempdir().unwrap();
        let path = persist_report(
            dir.path(),
            "Jane Smith",
            &ReportConfig::default(),
            &MarkdownRenderer::new(),
            &document(),
        )
        .unwrap();

        assert_eq!(path, dir.path().join("jane_smith_report.md"));
        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "**PSYCHOLOGICAL CONSULT**\n\nBody.\n");
    }

    #[test]
    fn creates_missing_output_directory() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("reports").join("2025");
        let path = persist_report(
            &out,
            "John Smith",
            &ReportConfig::default(),
            &JsonRenderer::new(true),
            &document(),
        )
        .unwrap();
        assert!(path.ends_with("john_smith_report.json"));
        assert!(path.is_file());
    }

    #[test]
    fn render_failure_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let err = persist_report(
            dir.path(),
            "Jane Smith",
            &ReportConfig::default(),
            &FailingRenderer,
            &document(),
        )
        .unwrap_err();

        assert!(matches!(err, ReportError::InvalidInput(_)));
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn path_like_names_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let err = persist_report(
            dir.path(),
            "../../etc/passwd",
            &ReportConfig::default(),
            &MarkdownRenderer::new(),
            &document(),
        )
        .unwrap_err();
        assert!(matches!(err, ReportError::InvalidInput(_)));
    }
}
