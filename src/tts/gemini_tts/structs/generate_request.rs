use crate::tts::gemini_tts::structs::{content::Content, generation_config::GenerationConfig};
use serde::{Deserialize, Serialize};

/// Request body for the `generateContent` endpoint.
///
/// Example:
/// ```rust
/// use tts_audio_proxy::tts::gemini_tts::structs::{
///     content::Content, generate_request::GenerateRequest,
///     generation_config::GenerationConfig, part::Part,
/// };
///
/// let request = GenerateRequest {
///     contents: vec![Content {
///         parts: vec![Part {
///             text: String::from("Say in a standard British English accent: hello"),
///         }],
///     }],
///     generation_config: GenerationConfig {
///         response_modalities: vec![String::from("AUDIO")],
///     },
///     model: String::from("gemini-2.5-flash-preview-tts"),
/// };
/// assert_eq!(request.contents.len(), 1);
/// ```
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct GenerateRequest {
    pub contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    pub generation_config: GenerationConfig,
    pub model: String,
}
