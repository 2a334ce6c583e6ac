use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tracing::error;

use crate::errors::{validation, ProxyError, Result};
use crate::tts::gemini_tts::gemini_tts::GeminiTts;

#[derive(Clone)]
pub struct AppState {
    pub tts: GeminiTts,
}

#[derive(Deserialize)]
struct GenerateAudioRequest {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateAudioResponse {
    pub audio_data: String,
    pub mime_type: String,
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/generate-audio", post(generate_audio))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[tracing::instrument(name = "health_check")]
async fn health_check() -> StatusCode {
    StatusCode::OK
}

async fn generate_audio(State(state): State<AppState>, body: Bytes) -> Response {
    let text = match extract_text(&body) {
        Ok(text) => text,
        Err(err) => return error_response(err),
    };

    match state.tts.generate(&text).await {
        Ok(audio) => (
            StatusCode::OK,
            Json(GenerateAudioResponse {
                audio_data: audio.data,
                mime_type: audio.mime_type,
            }),
        )
            .into_response(),
        Err(err) => error_response(err),
    }
}

/// Pull a non-empty `text` field out of the request body.
///
/// Any parse failure collapses into the same 400 as an absent field; the
/// caller only ever learns that no usable text arrived.
fn extract_text(body: &[u8]) -> Result<String> {
    let request: GenerateAudioRequest =
        serde_json::from_slice(body).map_err(|_| ProxyError::NoTextProvided)?;
    let text = request.text.unwrap_or_default();
    validation::validate_text(&text)?;
    Ok(text)
}

fn error_response(err: ProxyError) -> Response {
    let status = match &err {
        ProxyError::NoTextProvided => StatusCode::BAD_REQUEST,
        ProxyError::Upstream { status, .. } => {
            StatusCode::from_u16(*status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
        }
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };

    // Upstream failures get a generic message; the vendor's error body was
    // already logged where the call failed and must not reach the caller.
    let message = match &err {
        ProxyError::Upstream { .. } => String::from("Failed to fetch from Google API."),
        other => other.to_string(),
    };

    if status.is_server_error() {
        error!(error = %err, "generate-audio request failed");
    }

    (status, Json(ErrorBody { error: message })).into_response()
}
