pub mod gemini_tts;
pub mod structs;
