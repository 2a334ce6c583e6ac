use crate::tts::gemini_tts::structs::candidate_part::CandidatePart;
use serde::Deserialize;

#[derive(Deserialize, Debug, Clone)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<CandidatePart>,
}
