use crate::tts::gemini_tts::structs::candidate_content::CandidateContent;
use serde::Deserialize;

#[derive(Deserialize, Debug, Clone)]
pub struct Candidate {
    pub content: Option<CandidateContent>,
}
