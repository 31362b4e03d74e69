//! Ordinal number formatting ("25" -> "25th") and detection of ordinals in finished text.

use regex::Regex;
use std::sync::LazyLock;

static ORDINAL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)(st|nd|rd|th)").expect("valid ordinal pattern"));

fn suffix_for(last_two_digits: u64) -> &'static str {
    if (10..=20).contains(&last_two_digits) {
        return "th";
    }
    match last_two_digits % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}

/// Formats `n` with its English ordinal suffix.
///
/// ```
/// use consult_core::ordinal::ordinal;
/// assert_eq!(ordinal(21), "21st");
/// assert_eq!(ordinal(112), "112th");
/// ```
pub fn ordinal(n: u64) -> String {
    format!("{n}{}", suffix_for(n % 100))
}

/// Ordinalises a digit string of any length; anything else is returned verbatim.
///
/// Leading zeros are dropped the way an integer parse would drop them ("073" -> "73rd").
pub fn ordinalize(raw: &str) -> String {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return raw.to_string();
    }

    let digits = raw.trim_start_matches('0');
    let digits = if digits.is_empty() { "0" } else { digits };

    let tail = &digits[digits.len().saturating_sub(2)..];
    let last_two: u64 = tail.parse().unwrap_or(0);

    format!("{digits}{}", suffix_for(last_two))
}

/// A piece of rendered text: either plain or an ordinal split into number and suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextRun<'a> {
    Plain(&'a str),
    Ordinal { number: &'a str, suffix: &'a str },
}

/// Splits text so every `<digits><st|nd|rd|th>` occurrence can have its suffix superscripted.
pub fn ordinal_runs(text: &str) -> Vec<TextRun<'_>> {
    let mut runs = Vec::new();
    let mut last = 0;

    for caps in ORDINAL_PATTERN.captures_iter(text) {
        let (Some(whole), Some(number), Some(suffix)) = (caps.get(0), caps.get(1), caps.get(2))
        else {
            continue;
        };
        if whole.start() > last {
            runs.push(TextRun::Plain(&text[last..whole.start()]));
        }
        runs.push(TextRun::Ordinal {
            number: number.as_str(),
            suffix: suffix.as_str(),
        });
        last = whole.end();
    }

    if last < text.len() {
        runs.push(TextRun::Plain(&text[last..]));
    }
    runs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn teens_are_th() {
        for n in 10..=20 {
            assert!(ordinal(n).ends_with("th"), "{n}");
        }
        assert_eq!(ordinal(111), "111th");
        assert_eq!(ordinal(112), "112th");
        assert_eq!(ordinal(113), "113th");
    }

    #[test]
    fn last_digit_picks_suffix() {
        assert_eq!(ordinal(0), "0th");
        assert_eq!(ordinal(1), "1st");
        assert_eq!(ordinal(2), "2nd");
        assert_eq!(ordinal(3), "3rd");
        assert_eq!(ordinal(21), "21st");
        assert_eq!(ordinal(73), "73rd");
        assert_eq!(ordinal(102), "102nd");
        assert_eq!(ordinal(25), "25th");
    }

    #[test]
    fn th_exactly_when_expected() {
        for n in 0..1000u64 {
            let expect_th = (10..=20).contains(&(n % 100)) || ![1, 2, 3].contains(&(n % 10));
            assert_eq!(ordinal(n).ends_with("th"), expect_th, "{n}");
        }
    }

    #[test]
    fn ordinalize_digit_strings() {
        assert_eq!(ordinalize("73"), "73rd");
        assert_eq!(ordinalize("073"), "73rd");
        assert_eq!(ordinalize("000"), "0th");
        assert_eq!(ordinalize("123456789012345678901"), "123456789012345678901st");
    }

    #[test]
    fn ordinalize_passes_through_non_digits() {
        assert_eq!(ordinalize(""), "");
        assert_eq!(ordinalize("<1"), "<1");
        assert_eq!(ordinalize("73rd"), "73rd");
        assert_eq!(ordinalize(" 7"), " 7");
    }

    #[test]
    fn runs_split_ordinals() {
        let runs = ordinal_runs("scored at the 25th percentile, 3rd try");
        assert_eq!(
            runs,
            vec![
                TextRun::Plain("scored at the "),
                TextRun::Ordinal {
                    number: "25",
                    suffix: "th"
                },
                TextRun::Plain(" percentile, "),
                TextRun::Ordinal {
                    number: "3",
                    suffix: "rd"
                },
                TextRun::Plain(" try"),
            ]
        );
    }

    #[test]
    fn runs_without_ordinals_are_one_plain_run() {
        assert_eq!(ordinal_runs("IQ of 109"), vec![TextRun::Plain("IQ of 109")]);
        assert!(ordinal_runs("").is_empty());
    }
}
