use crate::tts::gemini_tts::structs::candidate::Candidate;
use serde::Deserialize;

/// Response body of the `generateContent` endpoint.
///
/// Every field on the path down to the inline audio data is optional or
/// defaulted: the upstream shape is not guaranteed and a missing field must
/// surface as an absent value, not a decode failure.
#[derive(Deserialize, Debug, Clone)]
pub struct GenerateResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}
