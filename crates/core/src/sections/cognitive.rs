//! Intellectual/cognitive testing paragraphs.

use super::relative_suffix;
use crate::input::{
    IqInput, LetterNumberInput, LnsFinding, SelfReportInput, TrailMakingInput, WasiInput,
};
use crate::ordinal::ordinalize;
use crate::pronouns::PronounProfile;

pub(crate) const WASI_II_RESULTS: &str =
    "Results of the Wechsler Abbreviated Scale of Intelligence-II reveal a Full-Scale IQ of";

const IQ_NOT_A_NUMBER: &str = "IQ score must be a number.";

const TRAIL_MAKING_INTRO: &str =
    "In the Trail Making Test (a test of speed for visual search, attention, and mental flexibility),";
const TRAIL_MAKING_NOT_PROVIDED: &str = "Trail Making Test data was not provided.";

const WASI_NOT_PROVIDED: &str = "WASI-II / WAIS-R data not provided.";

const LNS_NOT_SUGGESTIVE: &str =
    "Results of Letter-Number Sequencing are not suggestive of impairment in working memory.";
const LNS_NOT_PROVIDED: &str = "Letter-Number Sequencing data was not provided.";

const SELF_REPORT_NOT_SUPPORTIVE: &str =
    "Results of a self-report ADHD inventory are not supportive of a diagnosis of ADHD.";
const SELF_REPORT_SUPPORTIVE: &str =
    "Results of a self-report ADHD inventory are supportive of a diagnosis of ADHD";
const SELF_REPORT_NOT_PROVIDED: &str = "Self-report ADHD inventory data was not provided.";

/// Descriptive range for a Full-Scale IQ; each bound is the top of its range.
pub fn iq_range(score: i64) -> &'static str {
    match score {
        i64::MIN..=69 => "Extremely Low Range",
        70..=79 => "Borderline Range",
        80..=89 => "Low Average Range",
        90..=109 => "Average Range",
        110..=119 => "High Average Range",
        120..=129 => "Superior Range",
        _ => "Very Superior Range",
    }
}

/// A typed-in IQ score: the integer used for the range lookup and the digits as printed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Score {
    value: i64,
    printed: String,
}

/// Parses an integer score. Integers too large for `i64` still count: they saturate for the
/// range lookup and are printed as typed, minus any leading zeros.
pub(crate) fn parse_score(raw: &str) -> Option<Score> {
    let raw = raw.trim();
    if let Ok(value) = raw.parse::<i64>() {
        return Some(Score {
            value,
            printed: value.to_string(),
        });
    }

    let (negative, digits) = match raw.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, raw.strip_prefix('+').unwrap_or(raw)),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let digits = digits.trim_start_matches('0');
    Some(if negative {
        Score {
            value: i64::MIN,
            printed: format!("-{digits}"),
        }
    } else {
        Score {
            value: i64::MAX,
            printed: digits.to_string(),
        }
    })
}

/// `"109 (Average Range, 73rd percentile)"`; the percentile part is omitted when blank.
pub(crate) fn score_with_range(score: &Score, percentile: &str) -> String {
    let percentile = ordinalize(percentile.trim());
    let range = iq_range(score.value);
    if percentile.is_empty() {
        format!("{} ({range})", score.printed)
    } else {
        format!("{} ({range}, {percentile} percentile)", score.printed)
    }
}

pub fn iq_section(iq: &IqInput, profile: &PronounProfile) -> String {
    let Some(score) = parse_score(&iq.score) else {
        return IQ_NOT_A_NUMBER.to_string();
    };

    let mut text = format!(
        "{WASI_II_RESULTS} {}. There {} a significant difference between Verbal and Performance IQ scores.",
        score_with_range(&score, &iq.percentile),
        iq.difference.as_str()
    );

    let education = iq.education.trim();
    if !education.is_empty() {
        text.push_str(&format!(
            " {} has {education} years of education.",
            profile.honorific_surname()
        ));
    }
    text
}

/// Trail-Making paragraph.
///
/// The bottom-10th flag overrides any numeric percentile. Without the flag a percentile is
/// required, otherwise the fixed "not provided" sentence is returned.
pub fn trail_making_section(tmt: &TrailMakingInput, profile: &PronounProfile) -> String {
    let percentile = tmt.percentile.trim();
    let placement = if tmt.bottom_tenth {
        "in the bottom 10th percentile range".to_string()
    } else if !percentile.is_empty() {
        format!("at the {} percentile range", ordinalize(percentile))
    } else {
        return TRAIL_MAKING_NOT_PROVIDED.to_string();
    };

    format!(
        "{TRAIL_MAKING_INTRO} {} scored {placement} on the more complex task, showing {} impairment{}.",
        profile.honorific_surname(),
        tmt.impairment.as_str(),
        relative_suffix(tmt.relative_to_iq)
    )
}

pub fn wasi_section(wasi: &WasiInput) -> String {
    let Some(attention) = wasi.auditory_attention else {
        return WASI_NOT_PROVIDED.to_string();
    };
    let memory = wasi.working_memory_level();

    format!(
        "Results of a comparison between Full-Scale IQ as measured by the WASI-II and Digit Span of the WAIS-R \
         are suggestive of {} immediate auditory attention{} and {} working memory.",
        attention.phrase(),
        relative_suffix(wasi.relative_to_iq),
        memory.phrase()
    )
}

pub fn lns_section(lns: &LetterNumberInput) -> String {
    match lns.finding {
        None => LNS_NOT_PROVIDED.to_string(),
        Some(LnsFinding::NotSuggestiveOfImpairment) => LNS_NOT_SUGGESTIVE.to_string(),
        Some(finding) => format!(
            "Results of Letter-Number Sequencing suggest {} in working memory{}.",
            finding.phrase(),
            relative_suffix(lns.relative_to_iq)
        ),
    }
}

pub fn self_report_section(sr: &SelfReportInput) -> String {
    match sr.supportive {
        None => SELF_REPORT_NOT_PROVIDED.to_string(),
        Some(false) => SELF_REPORT_NOT_SUPPORTIVE.to_string(),
        Some(true) => supportive_sentence(&sr.presentation),
    }
}

pub(crate) fn supportive_sentence(presentation: &str) -> String {
    let presentation = presentation.trim();
    if presentation.is_empty() {
        format!("{SELF_REPORT_SUPPORTIVE}.")
    } else {
        format!("{SELF_REPORT_SUPPORTIVE}, {presentation}.")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{AttentionLevel, Impairment, IqDifference};
    use crate::pronouns::Title;

    fn jane() -> PronounProfile {
        PronounProfile::new(Title::Ms, "Jane Smith")
    }

    #[test]
    fn iq_buckets_use_inclusive_upper_bounds() {
        assert_eq!(iq_range(69), "Extremely Low Range");
        assert_eq!(iq_range(70), "Borderline Range");
        assert_eq!(iq_range(79), "Borderline Range");
        assert_eq!(iq_range(89), "Low Average Range");
        assert_eq!(iq_range(90), "Average Range");
        assert_eq!(iq_range(109), "Average Range");
        assert_eq!(iq_range(119), "High Average Range");
        assert_eq!(iq_range(129), "Superior Range");
        assert_eq!(iq_range(130), "Very Superior Range");
        assert_eq!(iq_range(-5), "Extremely Low Range");
    }

    #[test]
    fn scores_beyond_i64_keep_their_range() {
        let huge = parse_score("000123456789012345678901234").unwrap();
        assert_eq!(
            score_with_range(&huge, ""),
            "123456789012345678901234 (Very Superior Range)"
        );
        let tiny = parse_score("-99999999999999999999").unwrap();
        assert_eq!(
            score_with_range(&tiny, "1"),
            "-99999999999999999999 (Extremely Low Range, 1st percentile)"
        );
        assert_eq!(parse_score("+0109").map(|s| s.printed), Some("109".to_string()));
        assert_eq!(parse_score("12a"), None);
        assert_eq!(parse_score("-"), None);
        assert_eq!(parse_score("1.5"), None);
    }

    #[test]
    fn iq_paragraph_with_percentile_and_education() {
        let iq = IqInput {
            score: "109".into(),
            percentile: "73".into(),
            difference: IqDifference::IsNot,
            education: "16".into(),
        };
        assert_eq!(
            iq_section(&iq, &jane()),
            "Results of the Wechsler Abbreviated Scale of Intelligence-II reveal a Full-Scale IQ of \
             109 (Average Range, 73rd percentile). There is not a significant difference between \
             Verbal and Performance IQ scores. Ms. Smith has 16 years of education."
        );
    }

    #[test]
    fn iq_percentile_passes_through_when_not_digits() {
        let iq = IqInput {
            score: " 131 ".into(),
            percentile: ">99.9".into(),
            difference: IqDifference::Is,
            education: String::new(),
        };
        let text = iq_section(&iq, &jane());
        assert!(text.contains("131 (Very Superior Range, >99.9 percentile). There is a significant"));
        assert!(!text.contains("years of education"));
    }

    #[test]
    fn iq_without_percentile() {
        let iq = IqInput {
            score: "85".into(),
            ..Default::default()
        };
        assert!(iq_section(&iq, &jane()).contains("IQ of 85 (Low Average Range). There"));
    }

    #[test]
    fn non_numeric_iq_is_a_warning_sentence() {
        for score in ["", "abc", "109.5"] {
            let iq = IqInput {
                score: score.into(),
                ..Default::default()
            };
            assert_eq!(iq_section(&iq, &jane()), "IQ score must be a number.");
        }
    }

    #[test]
    fn trail_making_bottom_tenth_overrides_percentile() {
        let tmt = TrailMakingInput {
            percentile: "40".into(),
            bottom_tenth: true,
            impairment: Impairment::Severe,
            relative_to_iq: true,
        };
        assert_eq!(
            trail_making_section(&tmt, &jane()),
            "In the Trail Making Test (a test of speed for visual search, attention, and mental \
             flexibility), Ms. Smith scored in the bottom 10th percentile range on the more complex \
             task, showing severe impairment relative to IQ."
        );
    }

    #[test]
    fn trail_making_numeric_percentile() {
        let tmt = TrailMakingInput {
            percentile: "22".into(),
            impairment: Impairment::Mild,
            ..Default::default()
        };
        let text = trail_making_section(&tmt, &PronounProfile::new(Title::Mr, "John Doe"));
        assert!(text.contains("Mr. Doe scored at the 22nd percentile range"));
        assert!(text.ends_with("showing mild impairment."));
    }

    #[test]
    fn trail_making_without_data() {
        assert_eq!(
            trail_making_section(&TrailMakingInput::default(), &jane()),
            "Trail Making Test data was not provided."
        );
    }

    #[test]
    fn wasi_comparison() {
        let wasi = WasiInput {
            auditory_attention: Some(AttentionLevel::ModerateImpairment),
            working_memory: Some(AttentionLevel::Unimpaired),
            relative_to_iq: true,
        };
        assert_eq!(
            wasi_section(&wasi),
            "Results of a comparison between Full-Scale IQ as measured by the WASI-II and Digit Span \
             of the WAIS-R are suggestive of moderate impairment in immediate auditory attention \
             relative to IQ and unimpaired working memory."
        );
        assert_eq!(
            wasi_section(&WasiInput::default()),
            "WASI-II / WAIS-R data not provided."
        );
    }

    #[test]
    fn wasi_working_memory_defaults_to_unimpaired() {
        let wasi = WasiInput {
            auditory_attention: Some(AttentionLevel::MildImpairment),
            ..Default::default()
        };
        assert!(wasi_section(&wasi).ends_with(
            "suggestive of mild impairment in immediate auditory attention and unimpaired working memory."
        ));

        let memory_only = WasiInput {
            working_memory: Some(AttentionLevel::SevereImpairment),
            ..Default::default()
        };
        assert_eq!(wasi_section(&memory_only), "WASI-II / WAIS-R data not provided.");
    }

    #[test]
    fn lns_templates() {
        let mut lns = LetterNumberInput {
            finding: Some(LnsFinding::NotSuggestiveOfImpairment),
            relative_to_iq: true,
        };
        assert_eq!(
            lns_section(&lns),
            "Results of Letter-Number Sequencing are not suggestive of impairment in working memory."
        );

        lns.finding = Some(LnsFinding::SevereImpairment);
        assert_eq!(
            lns_section(&lns),
            "Results of Letter-Number Sequencing suggest severe impairment in working memory relative to IQ."
        );

        lns.finding = None;
        assert_eq!(lns_section(&lns), "Letter-Number Sequencing data was not provided.");
    }

    #[test]
    fn self_report_templates() {
        let mut sr = SelfReportInput {
            supportive: Some(true),
            presentation: "predominately combined presentation".into(),
        };
        assert_eq!(
            self_report_section(&sr),
            "Results of a self-report ADHD inventory are supportive of a diagnosis of ADHD, \
             predominately combined presentation."
        );

        sr.presentation.clear();
        assert_eq!(
            self_report_section(&sr),
            "Results of a self-report ADHD inventory are supportive of a diagnosis of ADHD."
        );

        sr.supportive = Some(false);
        assert!(self_report_section(&sr).contains("are not supportive"));

        sr.supportive = None;
        assert_eq!(
            self_report_section(&sr),
            "Self-report ADHD inventory data was not provided."
        );
    }
}
