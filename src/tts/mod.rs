pub mod gemini_tts;
