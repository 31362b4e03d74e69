//! Dictation boundary support.
//!
//! This crate owns everything between a clinician's spoken dictation and the cleaned
//! transcript text that ends up in a report:
//! - the immutable [`Transcript`] value
//! - voice-command normalisation ("comma", "new paragraph", "quote start", ...)
//! - collaborator contracts for the speech-to-text and grammar-cleanup services
//! - the background dictation job that chains them together
//!
//! The speech model and the chat-completion service are black boxes; this crate only fixes
//! the contracts they must honour and the text rewriting that happens in between.

pub mod cleanup;
pub mod collaborators;
pub mod pipeline;
pub mod transcript;
pub mod voice_commands;

pub use cleanup::{ChatCompletionsCleaner, CleanupConfig, CLEANUP_INSTRUCTIONS};
pub use collaborators::{PassthroughCleaner, TextFileTranscriber, Transcriber, TranscriptCleaner};
pub use pipeline::{process_dictation, spawn_dictation, DictationJob};
pub use transcript::Transcript;
pub use voice_commands::{apply_voice_commands, RewriteStep, VOICE_COMMAND_STEPS};

use std::path::PathBuf;

/// Errors returned by the `dictation` boundary crate.
#[derive(Debug, thiserror::Error)]
pub enum DictationError {
    #[error("no audio: {} not found or is empty", path.display())]
    NoAudio { path: PathBuf },

    #[error("failed to read transcript source: {0}")]
    SourceRead(std::io::Error),

    #[error("cleanup API key is not configured")]
    MissingApiKey,

    #[error("cleanup request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("cleanup API error (status {status}): {body}")]
    CleanupApi { status: u16, body: String },

    #[error("unexpected response format from cleanup service: {0}")]
    MalformedResponse(String),

    #[error("dictation worker panicked")]
    WorkerPanicked,
}

/// Type alias for Results that can fail with a [`DictationError`].
pub type DictationResult<T> = Result<T, DictationError>;
