//! Contracts for the external services around dictation.
//!
//! The speech-to-text model and the grammar-cleanup service are black boxes. Each is
//! reached through a small trait so the pipeline can be exercised without either.

use std::fs;
use std::path::{Path, PathBuf};

use crate::{DictationError, DictationResult, Transcript};

/// Turns a recorded dictation into raw transcript text.
///
/// Implementations fail with [`DictationError::NoAudio`] when the source is missing or empty.
pub trait Transcriber {
    fn transcribe(&self, source: &Path) -> DictationResult<Transcript>;
}

/// Grammar/punctuation cleanup of an already voice-command-normalised transcript.
///
/// Implementations are expected to honour [`crate::CLEANUP_INSTRUCTIONS`]; nothing here
/// enforces that.
pub trait TranscriptCleaner {
    fn clean(&self, normalized: &Transcript) -> DictationResult<Transcript>;
}

/// Stand-in for the speech model: reads text that was transcribed elsewhere.
#[derive(Debug, Default, Clone)]
pub struct TextFileTranscriber;

impl Transcriber for TextFileTranscriber {
    fn transcribe(&self, source: &Path) -> DictationResult<Transcript> {
        let metadata = match fs::metadata(source) {
            Ok(m) => m,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(DictationError::NoAudio {
                    path: PathBuf::from(source),
                })
            }
            Err(e) => return Err(DictationError::SourceRead(e)),
        };
        if metadata.len() == 0 {
            return Err(DictationError::NoAudio {
                path: PathBuf::from(source),
            });
        }

        let text = fs::read_to_string(source).map_err(DictationError::SourceRead)?;
        let text = text.trim();
        if text.is_empty() {
            return Err(DictationError::NoAudio {
                path: PathBuf::from(source),
            });
        }

        tracing::debug!("read {} bytes of raw transcript from {}", text.len(), source.display());
        Ok(Transcript::new(text))
    }
}

/// Returns the normalised transcript unchanged. Used when no cleanup service is configured.
#[derive(Debug, Default, Clone)]
pub struct PassthroughCleaner;

impl TranscriptCleaner for PassthroughCleaner {
    fn clean(&self, normalized: &Transcript) -> DictationResult<Transcript> {
        Ok(normalized.clone())
    }
}
