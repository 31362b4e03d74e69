//! Patient name handling and validated text primitives for the consult report crates.
//!
//! [`PersonName`] is the patient's name as the clinician typed it, with the two derived forms
//! the reports need: the surname used after an honorific and the stem used for report file
//! names. It is built on [`NonEmptyText`], which is also used to validate required
//! configuration strings.

/// A patient's full name as typed by the clinician.
///
/// The name is kept exactly as entered (trimmed). Reports address the patient by honorific
/// plus surname, where the surname is the last whitespace-delimited token, and report files
/// are named after the lowercased full name.
///
/// ```
/// use consult_types::PersonName;
///
/// let name = PersonName::new(" Mary Ann O'Hara ").unwrap();
/// assert_eq!(name.as_str(), "Mary Ann O'Hara");
/// assert_eq!(name.surname(), "O'Hara");
/// assert_eq!(name.file_stem(), "mary_ann_o'hara");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonName(NonEmptyText);

impl PersonName {
    /// # Errors
    ///
    /// Returns `TextError::Empty` if the name is blank.
    pub fn new(input: impl AsRef<str>) -> Result<Self, TextError> {
        NonEmptyText::new(input).map(Self)
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Last whitespace-delimited token of the name.
    pub fn surname(&self) -> &str {
        // Construction guarantees at least one non-whitespace token.
        self.0
            .as_str()
            .split_whitespace()
            .next_back()
            .unwrap_or(self.0.as_str())
    }

    /// Lowercased name with spaces replaced by underscores, for filenames.
    pub fn file_stem(&self) -> String {
        self.0.as_str().replace(' ', "_").to_lowercase()
    }
}

impl std::fmt::Display for PersonName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Errors that can occur when creating validated text types.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TextError {
    /// The input text was empty or contained only whitespace
    #[error("Text cannot be empty")]
    Empty,
}

/// A string type that guarantees non-empty content.
///
/// The input is trimmed of leading and trailing whitespace during construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NonEmptyText(String);

impl NonEmptyText {
    /// Creates a new `NonEmptyText` from the given input.
    ///
    /// # Errors
    ///
    /// Returns `TextError::Empty` if the trimmed input is empty.
    pub fn new(input: impl AsRef<str>) -> Result<Self, TextError> {
        let trimmed = input.as_ref().trim();
        if trimmed.is_empty() {
            return Err(TextError::Empty);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the inner string as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the wrapper and returns the owned string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for NonEmptyText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for NonEmptyText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl serde::Serialize for NonEmptyText {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for NonEmptyText {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NonEmptyText::new(&s).map_err(serde::de::Error::custom)
    }
}
