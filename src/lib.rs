// Public API for the TTS audio proxy

pub mod config;
pub mod errors;
pub mod server;
pub mod trace;
pub mod tts;

// Re-export commonly used types
pub use config::Config;
pub use errors::{ProxyError, Result};
pub use server::{build_router, AppState};
pub use tts::gemini_tts::gemini_tts::GeminiTts;
