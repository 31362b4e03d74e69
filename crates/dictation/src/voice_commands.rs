//! Voice command normalisation.
//!
//! Dictated transcripts arrive with spoken formatting commands ("comma", "new paragraph",
//! "in parenthesis ... end parenthesis", "capitalize smith"). This module rewrites them into
//! written punctuation and markup, then tidies whitespace and repeated punctuation.
//!
//! The rewrite is an ordered list of pure steps ([`VOICE_COMMAND_STEPS`]). Order is
//! significant: later patterns assume earlier rewrites already happened (for example the
//! whitespace cleanup relies on punctuation words having become symbols), so any reordering
//! must be a deliberate change to that list.
//!
//! Commands that do not match a pattern pass through untouched as literal text.

use regex::{Captures, NoExpand, Regex};
use std::sync::LazyLock;

const OPEN_QUOTE: &str = "\u{201C}";
const CLOSE_QUOTE: &str = "\u{201D}";

/// Punctuation marks the cleanup steps operate on.
const CLEANUP_PUNCTUATION: [char; 6] = ['.', ',', '!', '?', ';', ':'];

static NEW_PARAGRAPH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)[.,!?]?\s*\bnew paragraph\b[ \t]*").expect("valid new paragraph pattern")
});

static PARENTHESIS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)\bin parenthesis\b\s*(.*?)\s*\bend parenthesis\b")
        .expect("valid parenthesis pattern")
});

static QUOTE_START: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bquote start\b").expect("valid quote start pattern"));

static QUOTE_END: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bquote end\b").expect("valid quote end pattern"));

static PUNCTUATION_WORDS: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    [
        ("comma", ","),
        ("period", "."),
        ("semicolon", ";"),
        ("colon", ":"),
    ]
    .into_iter()
    .map(|(word, symbol)| {
        let re = Regex::new(&format!(r"(?i)\b{word}\b")).expect("valid punctuation pattern");
        (re, symbol)
    })
    .collect()
});

static PLACEHOLDERS: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    [
        (r"(?i)\binsert client name\b", "[Client Name]"),
        (r"(?i)\binsert date\b", "[Date]"),
    ]
    .into_iter()
    .map(|(pattern, placeholder)| {
        let re = Regex::new(pattern).expect("valid placeholder pattern");
        (re, placeholder)
    })
    .collect()
});

static CAPITALIZE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bcapitalize (\w+)\b").expect("valid capitalize pattern"));

static SPACE_BEFORE_PUNCTUATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+([.,!?;:])").expect("valid spacing pattern"));

static MISSING_SPACE_AFTER_PUNCTUATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([.,!?;:])([^\s\x{201D}])").expect("valid spacing pattern")
});

static REPEATED_PUNCTUATION: LazyLock<Vec<(Regex, String)>> = LazyLock::new(|| {
    CLEANUP_PUNCTUATION
        .into_iter()
        .map(|mark| {
            let mark = mark.to_string();
            let escaped = regex::escape(&mark);
            let re = Regex::new(&format!(r"{escaped}\s*{escaped}+"))
                .expect("valid repeated punctuation pattern");
            (re, mark)
        })
        .collect()
});

static EXCESS_NEWLINES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").expect("valid newline pattern"));

/// One named, pure rewrite in the normalisation pipeline.
#[derive(Clone, Copy)]
pub struct RewriteStep {
    pub name: &'static str,
    apply: fn(&str) -> String,
}

impl RewriteStep {
    pub fn apply(&self, text: &str) -> String {
        (self.apply)(text)
    }
}

impl std::fmt::Debug for RewriteStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RewriteStep")
            .field("name", &self.name)
            .finish()
    }
}

/// The normalisation pipeline, applied top to bottom.
pub const VOICE_COMMAND_STEPS: [RewriteStep; 11] = [
    RewriteStep {
        name: "paragraph_breaks",
        apply: paragraph_breaks,
    },
    RewriteStep {
        name: "parentheses",
        apply: parentheses,
    },
    RewriteStep {
        name: "quotes",
        apply: quotes,
    },
    RewriteStep {
        name: "punctuation_words",
        apply: punctuation_words,
    },
    RewriteStep {
        name: "placeholders",
        apply: placeholders,
    },
    RewriteStep {
        name: "capitalize_commands",
        apply: capitalize_commands,
    },
    RewriteStep {
        name: "space_before_punctuation",
        apply: space_before_punctuation,
    },
    RewriteStep {
        name: "space_after_punctuation",
        apply: space_after_punctuation,
    },
    RewriteStep {
        name: "collapse_newlines",
        apply: collapse_newlines,
    },
    RewriteStep {
        name: "collapse_repeated_punctuation",
        apply: collapse_repeated_punctuation,
    },
    RewriteStep {
        name: "trim",
        apply: trim,
    },
];

/// Applies every voice command rewrite in order and returns the cleaned text.
///
/// ```
/// use dictation::apply_voice_commands;
///
/// assert_eq!(
///     apply_voice_commands("doing well comma new paragraph she felt tired period"),
///     "doing well,\n\nshe felt tired."
/// );
/// ```
pub fn apply_voice_commands(text: &str) -> String {
    VOICE_COMMAND_STEPS
        .iter()
        .fold(text.to_string(), |acc, step| step.apply(&acc))
}

/// "new paragraph" (with an optional preceding mark and the whitespace around it) becomes a
/// blank line. The first word of the new paragraph keeps its dictated case.
fn paragraph_breaks(text: &str) -> String {
    NEW_PARAGRAPH.replace_all(text, NoExpand("\n\n")).into_owned()
}

fn parentheses(text: &str) -> String {
    PARENTHESIS
        .replace_all(text, |caps: &Captures| format!("({})", caps[1].trim()))
        .into_owned()
}

fn quotes(text: &str) -> String {
    let text = QUOTE_START.replace_all(text, NoExpand(OPEN_QUOTE));
    QUOTE_END.replace_all(&text, NoExpand(CLOSE_QUOTE)).into_owned()
}

fn punctuation_words(text: &str) -> String {
    PUNCTUATION_WORDS
        .iter()
        .fold(text.to_string(), |acc, (re, symbol)| {
            re.replace_all(&acc, NoExpand(symbol)).into_owned()
        })
}

fn placeholders(text: &str) -> String {
    PLACEHOLDERS
        .iter()
        .fold(text.to_string(), |acc, (re, placeholder)| {
            re.replace_all(&acc, NoExpand(placeholder)).into_owned()
        })
}

fn capitalize_commands(text: &str) -> String {
    CAPITALIZE
        .replace_all(text, |caps: &Captures| capitalize(&caps[1]))
        .into_owned()
}

fn space_before_punctuation(text: &str) -> String {
    SPACE_BEFORE_PUNCTUATION
        .replace_all(text, "${1}")
        .into_owned()
}

fn space_after_punctuation(text: &str) -> String {
    MISSING_SPACE_AFTER_PUNCTUATION
        .replace_all(text, "${1} ${2}")
        .into_owned()
}

fn collapse_newlines(text: &str) -> String {
    EXCESS_NEWLINES
        .replace_all(text, NoExpand("\n\n"))
        .into_owned()
}

/// A mark followed (optionally after whitespace) by more of the same mark collapses to one.
fn collapse_repeated_punctuation(text: &str) -> String {
    REPEATED_PUNCTUATION
        .iter()
        .fold(text.to_string(), |acc, (re, mark)| {
            re.replace_all(&acc, NoExpand(mark.as_str())).into_owned()
        })
}

fn trim(text: &str) -> String {
    text.trim().to_string()
}

/// First character upper-cased, the rest lower-cased.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_order_is_fixed() {
        let names: Vec<&str> = VOICE_COMMAND_STEPS.iter().map(|s| s.name).collect();
        assert_eq!(
            names,
            vec![
                "paragraph_breaks",
                "parentheses",
                "quotes",
                "punctuation_words",
                "placeholders",
                "capitalize_commands",
                "space_before_punctuation",
                "space_after_punctuation",
                "collapse_newlines",
                "collapse_repeated_punctuation",
                "trim",
            ]
        );
    }

    #[test]
    fn test_paragraph_break_does_not_capitalize() {
        assert_eq!(
            apply_voice_commands(
                "the patient was doing well comma new paragraph she felt tired period"
            ),
            "the patient was doing well,\n\nshe felt tired."
        );
    }

    #[test]
    fn test_paragraph_break_swallows_preceding_mark() {
        assert_eq!(
            apply_voice_commands("first point. New Paragraph second point"),
            "first point\n\nsecond point"
        );
    }

    #[test]
    fn test_explicit_capitalize_after_paragraph_break() {
        assert_eq!(
            apply_voice_commands("well period new paragraph capitalize she felt tired period"),
            "well.\n\nShe felt tired."
        );
    }

    #[test]
    fn test_parenthesis_span() {
        assert_eq!(
            apply_voice_commands("she was seen in parenthesis  by her GP  end parenthesis last week"),
            "she was seen (by her GP) last week"
        );
    }

    #[test]
    fn test_parenthesis_spans_newlines() {
        assert_eq!(
            apply_voice_commands("noted IN PARENTHESIS see\nattached End Parenthesis today"),
            "noted (see\nattached) today"
        );
    }

    #[test]
    fn test_unterminated_parenthesis_passes_through() {
        assert_eq!(
            apply_voice_commands("noted in parenthesis see attached"),
            "noted in parenthesis see attached"
        );
    }

    #[test]
    fn test_curly_quotes() {
        assert_eq!(
            apply_voice_commands("she said quote start I am fine quote end period"),
            "she said \u{201C} I am fine \u{201D}."
        );
    }

    #[test]
    fn test_punctuation_words_are_whole_words() {
        assert_eq!(
            apply_voice_commands("one semicolon two colon three comma periodic"),
            "one; two: three, periodic"
        );
    }

    #[test]
    fn test_placeholders() {
        assert_eq!(
            apply_voice_commands("Insert Client Name was seen on insert date period"),
            "[Client Name] was seen on [Date]."
        );
    }

    #[test]
    fn test_capitalize_command() {
        assert_eq!(
            apply_voice_commands("referred by capitalize smith comma"),
            "referred by Smith,"
        );
        assert_eq!(apply_voice_commands("CAPITALIZE eXTRA"), "Extra");
    }

    #[test]
    fn test_missing_space_after_punctuation_is_added() {
        assert_eq!(apply_voice_commands("tired.She slept"), "tired. She slept");
        assert_eq!(
            apply_voice_commands("\u{201C}fine.\u{201D} she said"),
            "\u{201C}fine.\u{201D} she said"
        );
    }

    #[test]
    fn test_repeated_punctuation_collapses() {
        assert_eq!(apply_voice_commands("wait,, what"), "wait, what");
        assert_eq!(apply_voice_commands("it was done... ok"), "it was done. ok");
        assert_eq!(apply_voice_commands("end period period"), "end.");
        assert_eq!(collapse_repeated_punctuation("so ; ;; then"), "so ; then");
        assert_eq!(collapse_repeated_punctuation("ok?!? fine"), "ok?!? fine");
        assert_eq!(collapse_repeated_punctuation(". . ."), ". .");
    }

    #[test]
    fn test_excess_newlines_collapse() {
        assert_eq!(apply_voice_commands("a\n\n\n\nb"), "a\n\nb");
    }

    #[test]
    fn test_idempotent_on_clean_text() {
        let inputs = [
            "the patient was doing well comma new paragraph she felt tired period",
            "she was seen in parenthesis by her GP comma briefly end parenthesis last week period",
            "insert client name reports quote start poor sleep quote end semicolon no appetite",
        ];
        for input in inputs {
            let once = apply_voice_commands(input);
            let twice = apply_voice_commands(&once);
            assert_eq!(once, twice, "second pass changed {:?}", input);
        }
    }

    #[test]
    fn test_parenthetical_content_survives_second_pass() {
        let once = apply_voice_commands("seen in parenthesis by her GP comma briefly end parenthesis");
        assert_eq!(once, "seen (by her GP, briefly)");
        assert_eq!(apply_voice_commands(&once), once);
    }

    #[test]
    fn test_capitalize_helper() {
        assert_eq!(capitalize("hELLO"), "Hello");
        assert_eq!(capitalize(""), "");
    }
}
