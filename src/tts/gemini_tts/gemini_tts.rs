use crate::errors::{ProxyError, Result};
use crate::tts::gemini_tts::structs::{
    audio_payload::AudioPayload, content::Content, generate_request::GenerateRequest,
    generate_response::GenerateResponse, generation_config::GenerationConfig, part::Part,
};
use tracing::error;

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
const MODEL: &str = "gemini-2.5-flash-preview-tts";
const PROMPT_PREFIX: &str = "Say in a standard British English accent: ";

/// Client for Google's generative text-to-speech API.
///
/// The key is carried as an `Option` so that a missing key is reported on
/// each generation attempt; there is no startup validation phase.
#[derive(Clone)]
pub struct GeminiTts {
    api_key: Option<String>,
    base_url: String,
    client: reqwest::Client,
}

impl GeminiTts {
    pub fn new(api_key: Option<String>) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL.to_string())
    }

    pub fn with_base_url(api_key: Option<String>, base_url: String) -> Self {
        Self {
            api_key,
            base_url,
            client: reqwest::Client::new(),
        }
    }

    /// Build the upstream request body for a piece of text.
    ///
    /// The prompt is the literal concatenation of the accent prefix and the
    /// caller's text, with no escaping or trimming.
    pub fn build_request(text: &str) -> GenerateRequest {
        GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: format!("{}{}", PROMPT_PREFIX, text),
                }],
            }],
            generation_config: GenerationConfig {
                response_modalities: vec![String::from("AUDIO")],
            },
            model: String::from(MODEL),
        }
    }

    /// Generate audio for the given text and return its base64 payload.
    #[tracing::instrument(skip_all)]
    pub async fn generate(&self, text: &str) -> Result<AudioPayload> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(ProxyError::ApiKeyNotConfigured)?;

        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            MODEL
        );

        let response = self
            .client
            .post(&url)
            .query(&[("key", api_key)])
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .json(&Self::build_request(text))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(status = status.as_u16(), body = %body, "Google API error");
            return Err(ProxyError::upstream(status.as_u16(), body));
        }

        let result: GenerateResponse = response.json().await?;
        Self::extract_audio(result)
    }

    /// Pull the inline audio out of a generation response.
    ///
    /// Only the first candidate and its first part are consulted; the
    /// upstream is expected to return exactly one of each.
    fn extract_audio(response: GenerateResponse) -> Result<AudioPayload> {
        let inline_data = response
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .and_then(|content| content.parts.into_iter().next())
            .and_then(|part| part.inline_data);

        // Empty strings count as absent, like the original truthiness check.
        match inline_data {
            Some(inline) => match (inline.data, inline.mime_type) {
                (Some(data), Some(mime_type)) if !data.is_empty() && !mime_type.is_empty() => {
                    Ok(AudioPayload { data, mime_type })
                }
                _ => Err(ProxyError::AudioDataNotFound),
            },
            None => Err(ProxyError::AudioDataNotFound),
        }
    }
}
