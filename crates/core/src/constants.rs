//! Constants used throughout the consult core crate.
//!
//! Fixed report wording lives here so the assembler and renderers agree on it.

/// Letterhead printed, centred, at the top of every report.
pub const DEFAULT_CONTACT_LINES: [&str; 5] = [
    "John P. Shallcross, Psy.D., P.C.",
    "Phone:  770-663-0923",
    "FAX:  770-663-6256",
    "jpshallcross1@gmail.com",
    "drjohnshallcross.com",
];

pub const DEFAULT_REPORT_TITLE: &str = "PSYCHOLOGICAL CONSULT";

pub const DEFAULT_REASON_FOR_CONSULT: &str =
    "Assist in evaluation of ADHD and differential diagnosis.";

/// Signatory block, printed as one heading with a line break between entries.
pub const DEFAULT_SIGNATORY: [&str; 2] = [
    "John P. Shallcross, Psy.D.",
    "Licensed Clinical Psychologist",
];

/// Base code and label for the diagnostic impression.
pub const DEFAULT_DIAGNOSTIC_BASE: &str = "314.00 – Attention-deficit/hyperactivity disorder";

/// Appended to the patient file stem when persisting a report.
pub const DEFAULT_REPORT_SUFFIX: &str = "_report";

pub const HEADING_TESTS_ADMINISTERED: &str = "Tests Administered:";
pub const HEADING_CLINICAL_INTERVIEW: &str = "Clinical Interview:";
pub const HEADING_CONSULTATION_FINDINGS: &str = "Consultation Findings:";
pub const HEADING_COGNITIVE_RESULTS: &str = "Results of Intellectual/Cognitive Testing:";
pub const HEADING_PERSONALITY_RESULTS: &str = "Results of Objective Personality Testing:";
pub const HEADING_SUMMARY: &str = "Summary/Recommendations";
pub const HEADING_DIAGNOSTIC_IMPRESSION: &str = "Diagnostic Impression:";
pub const HEADING_SIGNATURE: &str = "Signature:";

/// Subkey used in the paragraph library for domains without subscales.
pub const SUBSCALE_SENTINEL: &str = "_";

/// Placeholder token the paragraph templates use for honorific + surname.
pub const PATIENT_PLACEHOLDER: &str = "[Mr./Ms. Patient last name]";

/// Used in place of a surname when no patient name was entered.
pub const FALLBACK_SURNAME: &str = "the client";

/// Expected evaluation date layout (e.g. 03/14/2025).
pub const EVALUATION_DATE_FORMAT: &str = "%m/%d/%Y";

/// Suffix appended to findings that were judged against the patient's IQ.
pub const RELATIVE_TO_IQ: &str = " relative to IQ";
