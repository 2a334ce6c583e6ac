use crate::tts::gemini_tts::structs::inline_data::InlineData;
use serde::Deserialize;

#[derive(Deserialize, Debug, Clone)]
pub struct CandidatePart {
    #[serde(rename = "inlineData")]
    pub inline_data: Option<InlineData>,
}
