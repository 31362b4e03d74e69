//! The structured clinical input for one report run.
//!
//! A [`ClinicalInput`] is built once (usually deserialised from a YAML or JSON file) before
//! generation starts and is only ever read afterwards. Categorical fields are typed enums;
//! free-text fields such as scores stay as the clinician typed them, because a non-numeric
//! score is reported inside the document rather than rejected.

use crate::constants::EVALUATION_DATE_FORMAT;
use crate::{ReportError, ReportResult};
use dictation::Transcript;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Trail-Making impairment level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Impairment {
    #[default]
    No,
    Mild,
    Moderate,
    Severe,
    #[serde(alias = "very severe")]
    VerySevere,
}

impl Impairment {
    pub fn as_str(self) -> &'static str {
        match self {
            Impairment::No => "no",
            Impairment::Mild => "mild",
            Impairment::Moderate => "moderate",
            Impairment::Severe => "severe",
            Impairment::VerySevere => "very severe",
        }
    }
}

/// Finding for immediate auditory attention or working memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttentionLevel {
    Unimpaired,
    #[serde(alias = "mild impairment in")]
    MildImpairment,
    #[serde(alias = "moderate impairment in")]
    ModerateImpairment,
    #[serde(alias = "severe impairment in")]
    SevereImpairment,
    #[serde(alias = "very severe impairment in")]
    VerySevereImpairment,
}

impl AttentionLevel {
    /// Wording placed before "immediate auditory attention" / "working memory".
    pub fn phrase(self) -> &'static str {
        match self {
            AttentionLevel::Unimpaired => "unimpaired",
            AttentionLevel::MildImpairment => "mild impairment in",
            AttentionLevel::ModerateImpairment => "moderate impairment in",
            AttentionLevel::SevereImpairment => "severe impairment in",
            AttentionLevel::VerySevereImpairment => "very severe impairment in",
        }
    }
}

/// Letter-Number Sequencing finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LnsFinding {
    #[serde(alias = "not suggestive of impairment")]
    NotSuggestiveOfImpairment,
    #[serde(alias = "mild impairment")]
    MildImpairment,
    #[serde(alias = "moderate impairment")]
    ModerateImpairment,
    #[serde(alias = "severe impairment")]
    SevereImpairment,
    #[serde(alias = "very severe impairment")]
    VerySevereImpairment,
}

impl LnsFinding {
    pub fn phrase(self) -> &'static str {
        match self {
            LnsFinding::NotSuggestiveOfImpairment => "not suggestive of impairment",
            LnsFinding::MildImpairment => "mild impairment",
            LnsFinding::ModerateImpairment => "moderate impairment",
            LnsFinding::SevereImpairment => "severe impairment",
            LnsFinding::VerySevereImpairment => "very severe impairment",
        }
    }
}

/// Whether Verbal and Performance IQ differ significantly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum IqDifference {
    #[serde(rename = "is")]
    Is,
    #[default]
    #[serde(rename = "is not", alias = "is_not")]
    IsNot,
}

impl IqDifference {
    pub fn as_str(self) -> &'static str {
        match self {
            IqDifference::Is => "is",
            IqDifference::IsNot => "is not",
        }
    }
}

/// PAI form administered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaiForm {
    #[serde(rename = "PAI")]
    Pai,
    #[serde(rename = "PAI-A")]
    PaiA,
}

impl PaiForm {
    pub fn label(self) -> &'static str {
        match self {
            PaiForm::Pai => "PAI",
            PaiForm::PaiA => "PAI-A",
        }
    }
}

/// PAI validity status. Any unrecognised value deserialises to `Unspecified`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum Validity {
    #[default]
    Valid,
    Infrequency,
    NegativeImpression,
    PositiveImpression,
    Unspecified,
}

impl From<String> for Validity {
    fn from(value: String) -> Self {
        let key = value
            .trim()
            .trim_end_matches("(no issues)")
            .trim()
            .to_lowercase()
            .replace([' ', '-'], "_");
        match key.as_str() {
            "valid" => Validity::Valid,
            "infrequency" => Validity::Infrequency,
            "negative_impression" => Validity::NegativeImpression,
            "positive_impression" => Validity::PositiveImpression,
            _ => Validity::Unspecified,
        }
    }
}

/// Accepts a YAML/JSON string or a bare number for fields typed in as text.
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Integer(i64),
        Float(f64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(s) => s,
        Raw::Integer(n) => n.to_string(),
        Raw::Float(f) => f.to_string(),
    })
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IqInput {
    #[serde(deserialize_with = "lenient_string")]
    pub score: String,
    #[serde(deserialize_with = "lenient_string")]
    pub percentile: String,
    pub difference: IqDifference,
    #[serde(deserialize_with = "lenient_string")]
    pub education: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TrailMakingInput {
    #[serde(deserialize_with = "lenient_string")]
    pub percentile: String,
    pub bottom_tenth: bool,
    pub impairment: Impairment,
    pub relative_to_iq: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WasiInput {
    pub auditory_attention: Option<AttentionLevel>,
    pub working_memory: Option<AttentionLevel>,
    pub relative_to_iq: bool,
}

impl WasiInput {
    /// Working memory finding; left unselected it reads as unimpaired.
    pub fn working_memory_level(&self) -> AttentionLevel {
        self.working_memory.unwrap_or(AttentionLevel::Unimpaired)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LetterNumberInput {
    pub finding: Option<LnsFinding>,
    pub relative_to_iq: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SelfReportInput {
    pub supportive: Option<bool>,
    pub presentation: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PaiInput {
    pub form: Option<PaiForm>,
    pub validity: Validity,
    pub psychopathology: bool,
    /// Checked subscale labels per domain. Domains without subscales may list `"_"` or nothing.
    pub scales: BTreeMap<String, Vec<String>>,
}

/// One immutable snapshot of everything the clinician entered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClinicalInput {
    pub patient: String,
    pub title: String,
    pub evaluation_date: String,
    pub ordered_by: String,
    /// `None` selects the default battery.
    pub tests_administered: Option<Vec<String>>,
    pub interview: Transcript,
    pub consultation: Transcript,
    pub iq: IqInput,
    pub trail_making: TrailMakingInput,
    pub wasi: WasiInput,
    pub letter_number: LetterNumberInput,
    pub self_report: SelfReportInput,
    pub pai: PaiInput,
}

impl ClinicalInput {
    pub fn from_yaml_str(yaml: &str) -> ReportResult<Self> {
        serde_yaml::from_str(yaml).map_err(ReportError::YamlDeserialization)
    }

    pub fn from_json_str(json: &str) -> ReportResult<Self> {
        serde_json::from_str(json).map_err(ReportError::JsonDeserialization)
    }

    /// Reads an input file; `.json` files are parsed as JSON, everything else as YAML.
    pub fn load(path: &Path) -> ReportResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(ReportError::FileRead)?;
        let is_json = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("json"));

        if is_json {
            Self::from_json_str(&contents)
        } else {
            Self::from_yaml_str(&contents)
        }
    }

    /// Names of required fields that are blank.
    pub fn missing_required(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.patient.trim().is_empty() {
            missing.push("patient");
        }
        if self.evaluation_date.trim().is_empty() {
            missing.push("evaluation_date");
        }
        if self.ordered_by.trim().is_empty() {
            missing.push("ordered_by");
        }
        if self.consultation.is_blank() {
            missing.push("consultation");
        }
        missing
    }

    /// Fails with `ReportError::MissingFields` if any required field is blank.
    pub fn ensure_complete(&self) -> ReportResult<()> {
        let missing = self.missing_required();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(ReportError::MissingFields(missing))
        }
    }

    /// True when the evaluation date is blank or parses as `MM/DD/YYYY`.
    pub fn evaluation_date_is_well_formed(&self) -> bool {
        let date = self.evaluation_date.trim();
        date.is_empty() || chrono::NaiveDate::parse_from_str(date, EVALUATION_DATE_FORMAT).is_ok()
    }

    /// Tests to list in the report, falling back to the default battery.
    pub fn tests(&self) -> Vec<String> {
        match &self.tests_administered {
            Some(tests) => tests
                .iter()
                .map(|t| t.trim().trim_start_matches('*').to_string())
                .filter(|t| !t.is_empty())
                .collect(),
            None => crate::battery::default_tests(),
        }
    }
}

/// Normalises the referring clinician's name.
///
/// Every whitespace token is capitalised (first letter upper, rest lower) except known
/// credentials, which are upper-cased.
pub fn clean_ordered_by(name: &str) -> String {
    const CREDENTIALS: [&str; 7] = ["MD", "NP", "APRN", "PA", "DO", "PSYD", "PHD"];

    name.split_whitespace()
        .map(|part| {
            let upper = part.to_uppercase();
            if CREDENTIALS.contains(&upper.as_str()) {
                upper
            } else {
                let mut chars = part.chars();
                match chars.next() {
                    Some(first) => first
                        .to_uppercase()
                        .chain(chars.flat_map(char::to_lowercase))
                        .collect(),
                    None => String::new(),
                }
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
