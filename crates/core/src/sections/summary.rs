//! Summary/Recommendations and Diagnostic Impression.

use super::cognitive::{parse_score, score_with_range, supportive_sentence, WASI_II_RESULTS};
use super::relative_suffix;
use crate::input::{ClinicalInput, Impairment, IqDifference, LnsFinding};
use crate::pronouns::PronounProfile;

const IQ_NOT_VALID: &str = "IQ score was not a valid number.";
const SELF_REPORT_NOT_SUPPORTIVE: &str =
    "Results of a self-report ADHD inventory are not supportive of a diagnosis of ADHD.";

/// Summary paragraph.
///
/// Sentences appear in a fixed order and each is included on its own condition; a skipped
/// sentence leaves no separator behind.
pub fn summary_section(input: &ClinicalInput, profile: &PronounProfile) -> String {
    let mut parts: Vec<String> = Vec::new();

    if !input.iq.score.trim().is_empty() {
        parts.push(match parse_score(&input.iq.score) {
            Some(score) => format!(
                "{WASI_II_RESULTS} {}.",
                score_with_range(&score, &input.iq.percentile)
            ),
            None => IQ_NOT_VALID.to_string(),
        });
    }

    let negation = match input.iq.difference {
        IqDifference::Is => "",
        IqDifference::IsNot => "not ",
    };
    parts.push(format!(
        "Findings did {negation}indicate a significant differential between Verbal and Performance IQ scores."
    ));

    let tmt = &input.trail_making;
    if tmt.impairment != Impairment::No {
        parts.push(format!(
            "{} showed {} impairment in speed for visual search, attention, and mental flexibility{}.",
            profile.honorific_surname(),
            tmt.impairment.as_str(),
            relative_suffix(tmt.relative_to_iq)
        ));
    }

    match input.self_report.supportive {
        Some(true) => parts.push(supportive_sentence(&input.self_report.presentation)),
        Some(false) => parts.push(SELF_REPORT_NOT_SUPPORTIVE.to_string()),
        None => {}
    }

    let lns = &input.letter_number;
    if let Some(finding) = lns.finding {
        if finding != LnsFinding::NotSuggestiveOfImpairment {
            parts.push(format!(
                "Letter-Number Sequencing indicates {} in working memory{}.",
                finding.phrase(),
                relative_suffix(lns.relative_to_iq)
            ));
        }
    }

    let wasi = &input.wasi;
    if let Some(attention) = wasi.auditory_attention {
        let memory = wasi.working_memory_level();
        parts.push(format!(
            "Results of a comparison between Full-Scale IQ and a measure of auditory attention are \
             suggestive of {} immediate auditory attention{} and {} working memory.",
            attention.phrase(),
            relative_suffix(wasi.relative_to_iq),
            memory.phrase()
        ));
    }

    parts.join(" ")
}

/// Base diagnosis, with the presentation subtype appended when one was selected.
pub fn diagnostic_impression(base: &str, subtype: &str) -> String {
    let subtype = subtype.trim();
    if subtype.is_empty() {
        base.to_string()
    } else {
        format!("{base}, {subtype}")
    }
}
