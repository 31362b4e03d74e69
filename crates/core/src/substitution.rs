//! Word-boundary-safe text substitution for paragraph templates.
//!
//! Placeholder tokens contain brackets and are replaced literally. Everything else is treated
//! as a word: it is replaced case-sensitively and only between word boundaries (`\b`),
//! so "her" never touches "mother", "where" or "here".

use regex::{NoExpand, Regex};

/// One `(old, new)` pair from a replacement table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacement {
    pub old: String,
    pub new: String,
}

impl Replacement {
    pub fn new(old: impl Into<String>, new: impl Into<String>) -> Self {
        Self {
            old: old.into(),
            new: new.into(),
        }
    }
}

fn replace_whole_word(text: &str, word: &str, new: &str) -> String {
    match Regex::new(&format!(r"\b{}\b", regex::escape(word))) {
        Ok(re) => re.replace_all(text, NoExpand(new)).into_owned(),
        Err(e) => {
            tracing::warn!("cannot build word pattern for {word:?}: {e}");
            text.to_string()
        }
    }
}

/// Applies a single replacement.
///
/// ```
/// use consult_core::substitution::safe_replace;
/// assert_eq!(safe_replace("her mother", "her", "his"), "his mother");
/// ```
pub fn safe_replace(text: &str, old: &str, new: &str) -> String {
    if old.is_empty() {
        return text.to_string();
    }
    if old.contains(['[', ']']) {
        text.replace(old, new)
    } else {
        replace_whole_word(text, old, new)
    }
}

/// Applies every replacement in order, each to the output of the previous one.
pub fn apply_replacements(text: &str, table: &[Replacement]) -> String {
    table
        .iter()
        .fold(text.to_string(), |acc, r| safe_replace(&acc, &r.old, &r.new))
}
