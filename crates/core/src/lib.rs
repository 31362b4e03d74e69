//! # Consult Core
//!
//! Narrative assembly for psychological consult reports.
//!
//! This crate turns one structured [`ClinicalInput`] (scores, categorical findings, checked PAI
//! subscales and the cleaned dictation transcripts) into an ordered [`ReportDocument`]:
//! - pronoun-consistent prose from a fixed paragraph library
//! - ordinal formatting and word-boundary-safe substitution
//! - section generators with fixed fallback sentences for missing data
//! - rendering to Markdown or JSON and persisting the result
//!
//! **No dictation concerns**: transcription, voice-command normalisation and grammar cleanup
//! belong in the `dictation` crate.

pub mod assembler;
pub mod battery;
pub mod config;
pub mod constants;
pub mod document;
pub mod error;
pub mod input;
pub mod library;
pub mod ordinal;
pub mod persist;
pub mod pronouns;
pub mod render;
pub mod sections;
pub mod substitution;

pub use assembler::ReportAssembler;
pub use config::ReportConfig;
pub use document::{Alignment, DocumentBuilder, ReportDocument, Segment, SegmentKind, SegmentStyle};
pub use error::{ReportError, ReportResult};
pub use input::{clean_ordered_by, ClinicalInput};
pub use library::{ClinicalParagraphLibrary, LibraryLookup, PAI_SCALE_STRUCTURE};
pub use persist::{persist_report, report_filename};
pub use pronouns::{PronounProfile, Title};
pub use render::{JsonRenderer, MarkdownRenderer, ReportRenderer};

pub use dictation::Transcript;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn end_to_end_markdown_report() {
        let input = ClinicalInput::from_yaml_str(
            r#"
patient: Jane Smith
title: Ms.
evaluation_date: 03/14/2025
ordered_by: alan grant md
consultation: "the patient was doing well comma new paragraph she felt tired period"
iq:
  score: 109
  percentile: 73
trail_making:
  percentile: 25
  impairment: mild
pai:
  form: PAI
  psychopathology: true
  scales:
    Anxiety: [Cognitive]
"#,
        )
        .unwrap();

        let input = ClinicalInput {
            consultation: input.consultation.normalize(),
            ..input
        };
        assert!(input.missing_required().is_empty());

        let assembler = ReportAssembler::new(ReportConfig::default());
        let doc = assembler.assemble(&input);
        let md = MarkdownRenderer::new().render(&doc).unwrap();

        assert!(md.contains("the patient was doing well,\n\nshe felt tired."));
        assert!(md.contains("109 (Average Range, 73<sup>rd</sup> percentile)"));
        assert!(md.contains("scored at the 25<sup>th</sup> percentile range"));
        assert!(md.contains("Ms. Smith has significant anxiety. She is probably tense"));
        assert!(md.contains("\nOrdered by: Alan Grant MD\n"));
    }

    #[test]
    fn empty_test_list_leaves_no_gap_in_markdown() {
        let input = ClinicalInput {
            tests_administered: Some(Vec::new()),
            ..Default::default()
        };
        let doc = ReportAssembler::new(ReportConfig::default()).assemble(&input);
        let md = MarkdownRenderer::new().render(&doc).unwrap();

        assert!(md.contains("**Tests Administered:**\n\n**Clinical Interview:**"));
        assert!(!md.contains("\n\n\n"));
        assert!(!md.contains("****"));
    }
}
