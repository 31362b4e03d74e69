//! Grammar cleanup through an OpenAI-compatible chat-completions endpoint.
//!
//! The service receives the normalised transcript together with a fixed, ordered list of
//! style instructions ([`CLEANUP_INSTRUCTIONS`]). Honouring them is the service's job; this
//! module only builds the request and validates the shape of the reply.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::collaborators::TranscriptCleaner;
use crate::{DictationError, DictationResult, Transcript};

pub const DEFAULT_CLEANUP_ENDPOINT: &str = "https://api.together.xyz/v1/chat/completions";
pub const DEFAULT_CLEANUP_MODEL: &str = "mistralai/Mistral-7B-Instruct-v0.1";

pub const ENV_CLEANUP_API_KEY: &str = "CONSULT_CLEANUP_API_KEY";
pub const ENV_CLEANUP_MODEL: &str = "CONSULT_CLEANUP_MODEL";
pub const ENV_CLEANUP_URL: &str = "CONSULT_CLEANUP_URL";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// Style instructions sent ahead of every transcript, in this order.
pub const CLEANUP_INSTRUCTIONS: [&str; 14] = [
    "Never remove parentheses",
    "Never alter text within parentheses",
    "Clean this up for grammar and punctuation only.",
    "If the title Miss appears before a name, replace it with Ms. instead.",
    "Do not use Miss at all, even if it seems correct in context; use Ms. universally as the default respectful form of address for women.",
    "Leave all other professional or formal titles (e.g., Dr., Mr., Prof.) unchanged.",
    "If a sentence starts with the word 'Results', do not add, remove, or change it by adding 'the' or any other article.",
    "Do not change the tone or meaning.",
    "Do not add or remove content.",
    "Use professional clinical language.",
    "Do not replace the word assist with the word help.",
    "Do not add the word please before the word assist. If the sentence starts with assist, just leave it, even if it may be grammatically incorrect in this case.",
    "If an acronym is present, just leave it as the acronym and do not spell it out (e.g., ADHD).",
    "Fix sentence fragments and run-on sentences.",
];

/// Builds the single user message sent to the cleanup service.
pub fn cleanup_prompt(transcript: &Transcript) -> String {
    format!(
        "{}\n\nTranscript:\n{}",
        CLEANUP_INSTRUCTIONS.join("\n"),
        transcript.as_str()
    )
}

/// Cleanup service settings, resolved once at startup.
#[derive(Clone, Debug, PartialEq)]
pub struct CleanupConfig {
    pub endpoint: String,
    pub model: String,
    pub api_key: Option<String>,
    pub temperature: f32,
    pub top_p: f32,
    pub max_tokens: u32,
}

impl Default for CleanupConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_CLEANUP_ENDPOINT.to_string(),
            model: DEFAULT_CLEANUP_MODEL.to_string(),
            api_key: None,
            temperature: 0.3,
            top_p: 0.9,
            max_tokens: 1024,
        }
    }
}

impl CleanupConfig {
    /// Builds a config from optional raw values; blank values fall back to defaults.
    pub fn from_env_values(
        api_key: Option<String>,
        model: Option<String>,
        endpoint: Option<String>,
    ) -> Self {
        fn non_blank(value: Option<String>) -> Option<String> {
            value
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        }

        let defaults = Self::default();
        Self {
            api_key: non_blank(api_key),
            model: non_blank(model).unwrap_or(defaults.model),
            endpoint: non_blank(endpoint).unwrap_or(defaults.endpoint),
            ..defaults
        }
    }

    /// Reads `CONSULT_CLEANUP_*` from the process environment.
    pub fn from_env() -> Self {
        Self::from_env_values(
            std::env::var(ENV_CLEANUP_API_KEY).ok(),
            std::env::var(ENV_CLEANUP_MODEL).ok(),
            std::env::var(ENV_CLEANUP_URL).ok(),
        )
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatRequestMessage<'a>>,
    temperature: f32,
    top_p: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatRequestMessage<'a> {
    role: &'a str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    content: String,
}

/// Extracts `choices[0].message.content` from a chat-completions reply body.
pub fn parse_completion(body: &str) -> DictationResult<String> {
    let response: ChatResponse = serde_json::from_str(body)
        .map_err(|e| DictationError::MalformedResponse(e.to_string()))?;

    let choice = response
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| DictationError::MalformedResponse("response has no choices".into()))?;

    Ok(choice.message.content.trim().to_string())
}

/// Cleaner backed by a remote chat-completions endpoint.
#[derive(Debug)]
pub struct ChatCompletionsCleaner {
    config: CleanupConfig,
    api_key: String,
    client: reqwest::blocking::Client,
}

impl ChatCompletionsCleaner {
    /// # Errors
    ///
    /// Returns `DictationError::MissingApiKey` when the config carries no key, or
    /// `DictationError::Http` if the HTTP client cannot be built.
    pub fn new(config: CleanupConfig) -> DictationResult<Self> {
        let api_key = config
            .api_key
            .clone()
            .ok_or(DictationError::MissingApiKey)?;
        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            config,
            api_key,
            client,
        })
    }

    fn request_body(&self, transcript: &Transcript) -> ChatRequest<'_> {
        ChatRequest {
            model: &self.config.model,
            messages: vec![ChatRequestMessage {
                role: "user",
                content: cleanup_prompt(transcript),
            }],
            temperature: self.config.temperature,
            top_p: self.config.top_p,
            max_tokens: self.config.max_tokens,
        }
    }
}

impl TranscriptCleaner for ChatCompletionsCleaner {
    fn clean(&self, normalized: &Transcript) -> DictationResult<Transcript> {
        tracing::info!("sending transcript to {} for grammar cleanup", self.config.endpoint);

        let response = self
            .client
            .post(&self.config.endpoint)
            .bearer_auth(&self.api_key)
            .json(&self.request_body(normalized))
            .send()?;

        let status = response.status();
        let body = response.text()?;
        if !status.is_success() {
            return Err(DictationError::CleanupApi {
                status: status.as_u16(),
                body,
            });
        }

        parse_completion(&body).map(Transcript::new)
    }
}
