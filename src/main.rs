mod config;
mod errors;
mod server;
mod trace;
mod tts;

use config::Config;
use errors::constants;
use server::AppState;
use tracing::{info, warn};
use tts::gemini_tts::gemini_tts::GeminiTts;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load config
    let config = Config::load(constants::DEFAULT_CONFIG_PATH)?;
    let _otel_guard = trace::init_tracing_subscriber(&config.otel_http_url);

    // A missing key is not fatal here: it is surfaced per request so that a
    // misconfigured deployment still answers with a descriptive error.
    if config.google_api_key.is_none() {
        warn!("GOOGLE_API_KEY is not configured, generate-audio requests will fail");
    }

    let state = AppState {
        tts: GeminiTts::new(config.google_api_key),
    };
    let app = server::build_router(state);

    info!(addr = %config.bind_address, "starting audio proxy");
    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
