//! Report configuration.
//!
//! Practice letterhead and fixed report wording, resolved once at process startup and then
//! passed into the assembler and persistence. Nothing in report generation reads the
//! environment or the filesystem for configuration.

use crate::constants::{
    DEFAULT_CONTACT_LINES, DEFAULT_DIAGNOSTIC_BASE, DEFAULT_REASON_FOR_CONSULT,
    DEFAULT_REPORT_SUFFIX, DEFAULT_REPORT_TITLE, DEFAULT_SIGNATORY,
};
use crate::{ReportError, ReportResult};
use consult_types::NonEmptyText;
use serde::Deserialize;
use std::path::Path;

/// Report configuration resolved at startup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportConfig {
    contact_lines: Vec<String>,
    title: String,
    reason_for_consult: String,
    signatory: Vec<String>,
    diagnostic_base: String,
    file_suffix: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            contact_lines: DEFAULT_CONTACT_LINES.iter().map(|s| s.to_string()).collect(),
            title: DEFAULT_REPORT_TITLE.to_string(),
            reason_for_consult: DEFAULT_REASON_FOR_CONSULT.to_string(),
            signatory: DEFAULT_SIGNATORY.iter().map(|s| s.to_string()).collect(),
            diagnostic_base: DEFAULT_DIAGNOSTIC_BASE.to_string(),
            file_suffix: DEFAULT_REPORT_SUFFIX.to_string(),
        }
    }
}

/// On-disk shape of a config file. Every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ReportConfigFile {
    contact_lines: Option<Vec<String>>,
    title: Option<String>,
    reason_for_consult: Option<String>,
    signatory: Option<Vec<String>>,
    diagnostic_base: Option<String>,
    file_suffix: Option<String>,
}

impl ReportConfig {
    /// Create a new `ReportConfig`.
    ///
    /// # Errors
    ///
    /// Returns `ReportError::InvalidInput` if the title, reason, diagnostic base or file suffix
    /// is blank, if the signatory has no non-blank line, or if the file suffix contains a path
    /// separator.
    pub fn new(
        contact_lines: Vec<String>,
        title: &str,
        reason_for_consult: &str,
        signatory: Vec<String>,
        diagnostic_base: &str,
        file_suffix: &str,
    ) -> ReportResult<Self> {
        fn required(field: &str, value: &str) -> ReportResult<String> {
            NonEmptyText::new(value)
                .map(NonEmptyText::into_inner)
                .map_err(|e| ReportError::InvalidInput(format!("{field}: {e}")))
        }

        let file_suffix = required("file_suffix", file_suffix)?;
        if file_suffix.contains(['/', '\\']) {
            return Err(ReportError::InvalidInput(
                "file_suffix cannot contain path separators".into(),
            ));
        }

        let signatory: Vec<String> = signatory
            .into_iter()
            .map(|l| l.trim().to_string())
            .filter(|l| !l.is_empty())
            .collect();
        if signatory.is_empty() {
            return Err(ReportError::InvalidInput(
                "signatory must have at least one line".into(),
            ));
        }

        Ok(Self {
            contact_lines: contact_lines
                .into_iter()
                .map(|l| l.trim().to_string())
                .filter(|l| !l.is_empty())
                .collect(),
            title: required("title", title)?,
            reason_for_consult: required("reason_for_consult", reason_for_consult)?,
            signatory,
            diagnostic_base: required("diagnostic_base", diagnostic_base)?,
            file_suffix,
        })
    }

    /// Parses a YAML config; missing keys keep their defaults.
    pub fn from_yaml_str(yaml: &str) -> ReportResult<Self> {
        let file: ReportConfigFile =
            serde_yaml::from_str(yaml).map_err(ReportError::YamlDeserialization)?;
        let defaults = Self::default();

        Self::new(
            file.contact_lines.unwrap_or(defaults.contact_lines),
            file.title.as_deref().unwrap_or(&defaults.title),
            file.reason_for_consult
                .as_deref()
                .unwrap_or(&defaults.reason_for_consult),
            file.signatory.unwrap_or(defaults.signatory),
            file.diagnostic_base
                .as_deref()
                .unwrap_or(&defaults.diagnostic_base),
            file.file_suffix.as_deref().unwrap_or(&defaults.file_suffix),
        )
    }

    pub fn load(path: &Path) -> ReportResult<Self> {
        let yaml = std::fs::read_to_string(path).map_err(ReportError::FileRead)?;
        Self::from_yaml_str(&yaml)
    }

    /// Resolve config from an optional file path; `None` yields the built-in defaults.
    pub fn resolve(path: Option<&Path>) -> ReportResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn contact_lines(&self) -> &[String] {
        &self.contact_lines
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn reason_for_consult(&self) -> &str {
        &self.reason_for_consult
    }

    pub fn signatory(&self) -> &[String] {
        &self.signatory
    }

    pub fn diagnostic_base(&self) -> &str {
        &self.diagnostic_base
    }

    pub fn file_suffix(&self) -> &str {
        &self.file_suffix
    }
}
