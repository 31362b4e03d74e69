//! Immutable transcript text.

use serde::{Deserialize, Serialize};

use crate::voice_commands::apply_voice_commands;

/// A block of dictated text.
///
/// Produced once by a transcription collaborator and never mutated afterwards: every
/// transformation returns a new `Transcript`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Transcript(String);

impl Transcript {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when the transcript holds nothing but whitespace.
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// Rewrites spoken voice commands into written punctuation and markup.
    pub fn normalize(&self) -> Transcript {
        Transcript(apply_voice_commands(&self.0))
    }

    /// Non-empty paragraphs separated by blank lines, each trimmed.
    pub fn paragraphs(&self) -> impl Iterator<Item = &str> {
        self.0
            .trim()
            .split("\n\n")
            .map(str::trim)
            .filter(|p| !p.is_empty())
    }
}

impl std::fmt::Display for Transcript {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for Transcript {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_returns_new_value() {
        let raw = Transcript::new("doing well comma thanks period");
        let clean = raw.normalize();
        assert_eq!(raw.as_str(), "doing well comma thanks period");
        assert_eq!(clean.as_str(), "doing well, thanks.");
    }

    #[test]
    fn paragraphs_split_on_blank_lines() {
        let t = Transcript::new("  First part.\n\nSecond part.\n\n\n  \n\nThird.  ");
        let paras: Vec<&str> = t.paragraphs().collect();
        assert_eq!(paras, vec!["First part.", "Second part.", "Third."]);
    }

    #[test]
    fn blank_transcript_has_no_paragraphs() {
        let t = Transcript::new(" \n ");
        assert!(t.is_blank());
        assert_eq!(t.paragraphs().count(), 0);
    }
}
