//! Report assembly.
//!
//! Lays out the letterhead, identifying details, transcripts and generated section prose in
//! the fixed report order. Assembly is a single pass over one [`ClinicalInput`] and never
//! fails: missing data shows up as fallback sentences, not errors.

use crate::battery::is_catalogued;
use crate::config::ReportConfig;
use crate::constants::{
    HEADING_CLINICAL_INTERVIEW, HEADING_COGNITIVE_RESULTS, HEADING_CONSULTATION_FINDINGS,
    HEADING_DIAGNOSTIC_IMPRESSION, HEADING_PERSONALITY_RESULTS, HEADING_SIGNATURE,
    HEADING_SUMMARY, HEADING_TESTS_ADMINISTERED,
};
use crate::document::{DocumentBuilder, ReportDocument};
use crate::input::{clean_ordered_by, ClinicalInput};
use crate::library::ClinicalParagraphLibrary;
use crate::pronouns::PronounProfile;
use crate::sections;
use dictation::Transcript;

/// Builds [`ReportDocument`]s from clinical input.
#[derive(Debug, Clone)]
pub struct ReportAssembler {
    config: ReportConfig,
    library: ClinicalParagraphLibrary,
}

impl ReportAssembler {
    pub fn new(config: ReportConfig) -> Self {
        Self {
            config,
            library: ClinicalParagraphLibrary::pai(),
        }
    }

    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    pub fn assemble(&self, input: &ClinicalInput) -> ReportDocument {
        let missing = input.missing_required();
        if !missing.is_empty() {
            tracing::debug!("assembling report with blank fields: {}", missing.join(", "));
        }
        if !input.evaluation_date_is_well_formed() {
            tracing::warn!(
                "evaluation date {:?} is not in MM/DD/YYYY form",
                input.evaluation_date.trim()
            );
        }

        let profile = PronounProfile::from_labels(&input.title, &input.patient);
        let mut doc = DocumentBuilder::new();

        self.letterhead(&mut doc);
        self.identification(&mut doc, input);

        let tests = input.tests();
        for test in tests.iter().filter(|t| !is_catalogued(t)) {
            tracing::debug!("test '{test}' is not in the standard battery");
        }
        doc.heading(HEADING_TESTS_ADMINISTERED).line_break_run(&tests);

        doc.heading(HEADING_CLINICAL_INTERVIEW);
        transcript_paragraphs(&mut doc, &input.interview);

        doc.heading(HEADING_CONSULTATION_FINDINGS);
        transcript_paragraphs(&mut doc, &input.consultation);
        doc.blanks(2);

        doc.italic_heading(HEADING_COGNITIVE_RESULTS)
            .paragraph(sections::iq_section(&input.iq, &profile))
            .blank()
            .paragraph(sections::trail_making_section(&input.trail_making, &profile))
            .blank()
            .paragraph(sections::wasi_section(&input.wasi))
            .blank()
            .paragraph(sections::lns_section(&input.letter_number))
            .blank()
            .paragraph(sections::self_report_section(&input.self_report))
            .blanks(2);

        doc.italic_heading(HEADING_PERSONALITY_RESULTS);
        for paragraph in sections::pai_section(&input.pai, &profile, &self.library) {
            let paragraph = paragraph.trim();
            if !paragraph.is_empty() {
                doc.paragraph(paragraph).blank();
            }
        }
        doc.blank();

        doc.heading(HEADING_SUMMARY)
            .paragraph(sections::summary_section(input, &profile))
            .blanks(2);

        doc.heading(HEADING_DIAGNOSTIC_IMPRESSION)
            .paragraph(sections::diagnostic_impression(
                self.config.diagnostic_base(),
                &input.self_report.presentation,
            ))
            .blank();

        doc.heading(HEADING_SIGNATURE)
            .blanks(4)
            .heading(self.config.signatory().join("\n"));

        doc.finish()
    }

    fn letterhead(&self, doc: &mut DocumentBuilder) {
        for line in self.config.contact_lines() {
            doc.centered_line(line.as_str());
        }
        doc.blanks(2).centered_heading(self.config.title()).blank();
    }

    fn identification(&self, doc: &mut DocumentBuilder, input: &ClinicalInput) {
        doc.paragraph(format!("PATIENT: {}", input.patient.trim()))
            .blank()
            .paragraph(format!(
                "Date of Evaluation: {}",
                input.evaluation_date.trim()
            ))
            .paragraph(format!(
                "Ordered by: {}",
                clean_ordered_by(&input.ordered_by)
            ))
            .paragraph(format!(
                "Reason for Consult: {}",
                self.config.reason_for_consult()
            ))
            .blank();
    }
}

/// One paragraph per blank-line-separated block; an empty transcript leaves one blank line.
fn transcript_paragraphs(doc: &mut DocumentBuilder, transcript: &Transcript) {
    let mut any = false;
    for paragraph in transcript.paragraphs() {
        doc.paragraph(paragraph);
        any = true;
    }
    if !any {
        doc.blank();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{Alignment, SegmentKind};
    use crate::input::{IqInput, PaiForm};

    fn sample_input() -> ClinicalInput {
        ClinicalInput {
            patient: "Jane Smith".into(),
            title: "Ms.".into(),
            evaluation_date: "03/14/2025".into(),
            ordered_by: "dr. alan grant md".into(),
            consultation: Transcript::new("First finding.\n\nSecond finding."),
            iq: IqInput {
                score: "109".into(),
                percentile: "73".into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    fn position(doc: &ReportDocument, text: &str) -> usize {
        doc.segments()
            .iter()
            .position(|s| s.text == text)
            .unwrap_or_else(|| panic!("segment {text:?} not found"))
    }

    #[test]
    fn letterhead_and_title_are_centred() {
        let doc = ReportAssembler::new(ReportConfig::default()).assemble(&sample_input());
        let segments = doc.segments();
        assert_eq!(segments[0].text, "John P. Shallcross, Psy.D., P.C.");
        assert!(segments[..5].iter().all(|s| s.style.alignment == Alignment::Center));
        assert!(segments[5].is_blank() && segments[6].is_blank());
        assert_eq!(segments[7].text, "PSYCHOLOGICAL CONSULT");
        assert_eq!(segments[7].kind, SegmentKind::Heading);
        assert_eq!(segments[7].style.alignment, Alignment::Center);
    }

    #[test]
    fn identification_block() {
        let doc = ReportAssembler::new(ReportConfig::default()).assemble(&sample_input());
        let texts: Vec<&str> = doc.texts().collect();
        assert!(texts.contains(&"PATIENT: Jane Smith"));
        assert!(texts.contains(&"Date of Evaluation: 03/14/2025"));
        assert!(texts.contains(&"Ordered by: Dr. Alan Grant MD"));
        assert!(texts.contains(
            &"Reason for Consult: Assist in evaluation of ADHD and differential diagnosis."
        ));
    }

    #[test]
    fn sections_appear_in_report_order() {
        let doc = ReportAssembler::new(ReportConfig::default()).assemble(&sample_input());
        let order = [
            HEADING_TESTS_ADMINISTERED,
            HEADING_CLINICAL_INTERVIEW,
            HEADING_CONSULTATION_FINDINGS,
            HEADING_COGNITIVE_RESULTS,
            HEADING_PERSONALITY_RESULTS,
            HEADING_SUMMARY,
            HEADING_DIAGNOSTIC_IMPRESSION,
            HEADING_SIGNATURE,
        ];
        let positions: Vec<usize> = order.iter().map(|h| position(&doc, h)).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{positions:?}");

        let last = doc.segments().last().unwrap();
        assert_eq!(last.text, "John P. Shallcross, Psy.D.\nLicensed Clinical Psychologist");
        assert_eq!(last.kind, SegmentKind::Heading);
    }

    #[test]
    fn tests_are_one_line_break_run() {
        let doc = ReportAssembler::new(ReportConfig::default()).assemble(&sample_input());
        let heading = position(&doc, HEADING_TESTS_ADMINISTERED);
        let run = &doc.segments()[heading + 1];
        assert_eq!(run.kind, SegmentKind::LineBreakRun);
        assert_eq!(run.lines().count(), 6);
        assert_eq!(
            run.lines().next(),
            Some("Wechsler Abbreviated Scale of Intelligence-II (WASI-II)")
        );
    }

    #[test]
    fn transcripts_become_paragraphs() {
        let doc = ReportAssembler::new(ReportConfig::default()).assemble(&sample_input());

        let interview = position(&doc, HEADING_CLINICAL_INTERVIEW);
        assert!(doc.segments()[interview + 1].is_blank());

        let consult = position(&doc, HEADING_CONSULTATION_FINDINGS);
        assert_eq!(doc.segments()[consult + 1].text, "First finding.");
        assert_eq!(doc.segments()[consult + 2].text, "Second finding.");
    }

    #[test]
    fn iq_paragraph_follows_cognitive_heading() {
        let doc = ReportAssembler::new(ReportConfig::default()).assemble(&sample_input());
        let heading = position(&doc, HEADING_COGNITIVE_RESULTS);
        assert!(doc.segments()[heading].style.italic);
        assert!(doc.segments()[heading + 1]
            .text
            .contains("109 (Average Range, 73rd percentile)"));
    }

    #[test]
    fn pai_paragraphs_are_spaced() {
        let mut input = sample_input();
        input.pai.form = Some(PaiForm::Pai);
        let doc = ReportAssembler::new(ReportConfig::default()).assemble(&input);

        let heading = position(&doc, HEADING_PERSONALITY_RESULTS);
        let segments = &doc.segments()[heading + 1..];
        assert_eq!(segments[0].text, "PAI.");
        assert!(segments[1].is_blank());
        assert!(segments[2].text.starts_with("Results of the PAI are valid. Ms. Smith"));
        assert!(segments[3].is_blank());
        assert!(segments[4].text.starts_with("All of the clinical scales"));
    }

    #[test]
    fn empty_input_still_assembles() {
        let doc = ReportAssembler::new(ReportConfig::default()).assemble(&ClinicalInput::default());
        let texts: Vec<&str> = doc.texts().collect();
        assert!(texts.contains(&"PATIENT: "));
        assert!(texts.contains(&"IQ score must be a number."));
        assert!(texts.contains(&"Trail Making Test data was not provided."));
        assert!(texts.contains(&"314.00 – Attention-deficit/hyperactivity disorder"));
    }
}
