//! Transcribe, normalise and clean a dictation.
//!
//! The work runs on a background thread so an interactive caller is never blocked; the
//! caller receives either the cleaned transcript or the error that stopped the job.

use std::path::{Path, PathBuf};
use std::thread::{self, JoinHandle};

use crate::collaborators::{Transcriber, TranscriptCleaner};
use crate::{DictationError, DictationResult, Transcript};

/// Runs the three dictation stages in order on the current thread.
///
/// # Errors
///
/// Propagates the first collaborator error. A missing or empty source surfaces as
/// [`DictationError::NoAudio`] and nothing further runs.
pub fn process_dictation<T, C>(
    transcriber: &T,
    cleaner: &C,
    source: &Path,
) -> DictationResult<Transcript>
where
    T: Transcriber + ?Sized,
    C: TranscriptCleaner + ?Sized,
{
    tracing::info!("transcribing {}", source.display());
    let raw = transcriber.transcribe(source)?;

    let normalized = raw.normalize();
    tracing::debug!("normalised transcript: {} chars", normalized.as_str().len());

    let cleaned = cleaner.clean(&normalized)?;
    tracing::info!("dictation processed");
    Ok(cleaned)
}

/// Handle on a dictation running in the background.
#[derive(Debug)]
pub struct DictationJob {
    handle: JoinHandle<DictationResult<Transcript>>,
}

impl DictationJob {
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Blocks until the job finishes.
    ///
    /// # Errors
    ///
    /// Returns the job's own error, or [`DictationError::WorkerPanicked`] if the worker
    /// thread panicked.
    pub fn join(self) -> DictationResult<Transcript> {
        self.handle
            .join()
            .map_err(|_| DictationError::WorkerPanicked)?
    }
}

/// Starts [`process_dictation`] on a worker thread.
pub fn spawn_dictation<T, C>(transcriber: T, cleaner: C, source: PathBuf) -> DictationJob
where
    T: Transcriber + Send + 'static,
    C: TranscriptCleaner + Send + 'static,
{
    let handle = thread::spawn(move || process_dictation(&transcriber, &cleaner, &source));
    DictationJob { handle }
}
