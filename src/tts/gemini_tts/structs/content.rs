use crate::tts::gemini_tts::structs::part::Part;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Content {
    pub parts: Vec<Part>,
}
