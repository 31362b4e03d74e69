//! Pronoun profiles.
//!
//! A [`PronounProfile`] is resolved once per report from the selected title and the patient's
//! name, and every section generator reads from the same profile so the document never mixes
//! pronoun sets.

use crate::constants::{FALLBACK_SURNAME, PATIENT_PLACEHOLDER};
use crate::substitution::Replacement;
use consult_types::PersonName;
use serde::{Deserialize, Serialize};

/// Title categories offered to the clinician.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Title {
    #[serde(rename = "Mr.")]
    Mr,
    #[serde(rename = "Ms.")]
    Ms,
    #[serde(rename = "Mx.")]
    Mx,
    #[serde(rename = "Dr.")]
    Dr,
    #[default]
    #[serde(rename = "The client")]
    TheClient,
}

impl Title {
    pub const ALL: [Title; 5] = [Title::Mr, Title::Ms, Title::Mx, Title::Dr, Title::TheClient];

    /// Matches an exact title label such as `"Ms."`.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.label() == label.trim())
    }

    pub fn label(self) -> &'static str {
        match self {
            Title::Mr => "Mr.",
            Title::Ms => "Ms.",
            Title::Mx => "Mx.",
            Title::Dr => "Dr.",
            Title::TheClient => "The client",
        }
    }

    fn forms(self) -> (&'static str, &'static str, &'static str) {
        match self {
            Title::Mr => ("he", "his", "himself"),
            Title::Ms => ("she", "her", "herself"),
            Title::Mx | Title::Dr | Title::TheClient => ("they", "their", "themself"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PronounForm {
    Subject,
    Possessive,
    Reflexive,
}

/// Pronoun words written into the paragraph templates, in the order they are rewritten.
///
/// Capitalised forms come before lowercase ones, and reflexive before possessive, so that
/// "herself" is consumed before "her" can match inside it.
const TEMPLATE_PRONOUNS: [(&str, PronounForm, bool); 6] = [
    ("Herself", PronounForm::Reflexive, true),
    ("herself", PronounForm::Reflexive, false),
    ("Her", PronounForm::Possessive, true),
    ("her", PronounForm::Possessive, false),
    ("She", PronounForm::Subject, true),
    ("she", PronounForm::Subject, false),
];

fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// The grammatical forms used to refer to the patient throughout one report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PronounProfile {
    title: Title,
    subject: &'static str,
    possessive: &'static str,
    reflexive: &'static str,
    honorific_surname: String,
}

impl PronounProfile {
    pub fn new(title: Title, patient_name: &str) -> Self {
        let (subject, possessive, reflexive) = title.forms();
        let surname = PersonName::new(patient_name)
            .map(|name| name.surname().to_string())
            .unwrap_or_else(|_| FALLBACK_SURNAME.to_string());

        Self {
            title,
            subject,
            possessive,
            reflexive,
            honorific_surname: format!("{} {}", title.label(), surname),
        }
    }

    /// Resolves a free-text title label; unknown labels get the neutral profile.
    pub fn from_labels(title_label: &str, patient_name: &str) -> Self {
        let title = Title::from_label(title_label).unwrap_or_else(|| {
            tracing::debug!("unrecognised title {title_label:?}, using neutral pronouns");
            Title::TheClient
        });
        Self::new(title, patient_name)
    }

    pub fn title(&self) -> Title {
        self.title
    }

    pub fn subject(&self) -> &'static str {
        self.subject
    }

    pub fn possessive(&self) -> &'static str {
        self.possessive
    }

    pub fn reflexive(&self) -> &'static str {
        self.reflexive
    }

    /// Subject pronoun with a leading capital, for sentence starts.
    pub fn subject_capitalized(&self) -> String {
        capitalize_first(self.subject)
    }

    /// Honorific followed by surname, e.g. "Ms. Smith".
    pub fn honorific_surname(&self) -> &str {
        &self.honorific_surname
    }

    fn form(&self, form: PronounForm) -> &'static str {
        match form {
            PronounForm::Subject => self.subject,
            PronounForm::Possessive => self.possessive,
            PronounForm::Reflexive => self.reflexive,
        }
    }

    /// Ordered replacement table for rewriting paragraph templates.
    ///
    /// The placeholder comes first, then each template pronoun with the case of the matched
    /// source word carried over to the replacement.
    pub fn replacements(&self) -> Vec<Replacement> {
        let mut table = Vec::with_capacity(TEMPLATE_PRONOUNS.len() + 1);
        table.push(Replacement::new(PATIENT_PLACEHOLDER, &self.honorific_surname));

        for (word, form, capitalized) in TEMPLATE_PRONOUNS {
            let value = self.form(form);
            let value = if capitalized {
                capitalize_first(value)
            } else {
                value.to_string()
            };
            table.push(Replacement::new(word, value));
        }
        table
    }
}
