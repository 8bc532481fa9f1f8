use super::types::{AnalyzeRequest, AnalyzeResponse, HealthResponse};
use crate::{auth, config::Config, fetch, gemini, gemini::GeminiClient, Error, Result};
use axum::{
    extract::State,
    http::{header::AUTHORIZATION, HeaderMap},
    response::Json,
};
use base64::Engine as _;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub http: reqwest::Client,
    pub gemini: GeminiClient,
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { ok: true })
}

/// Relay path: auth, fetch image bytes, forward to Gemini, normalize.
/// Strictly sequential, no state shared across requests beyond `AppState`.
pub async fn analyze(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>> {
    let auth_header = headers.get(AUTHORIZATION).and_then(|v| v.to_str().ok());
    auth::check_bearer(auth_header, &state.config.api_key)?;

    if state.config.gemini.api_key.is_empty() {
        return Err(Error::config("GEMINI_API_KEY not configured"));
    }

    info!(
        item_id = ?request.item_id,
        query_len = request.user_query.len(),
        "Received analyze request"
    );

    let (image_bytes, mime_type) = fetch::fetch_image(&state.http, &request.download_url).await?;
    let image_b64 = base64::engine::general_purpose::STANDARD.encode(&image_bytes);

    let prompt = gemini::prompt::build_prompt(
        &request.user_query,
        request.context_hint.as_deref(),
        request.language_code.as_deref(),
    );

    let raw_text = state.gemini.generate(&prompt, mime_type, image_b64).await?;

    let response = gemini::parse::normalize(&raw_text);

    info!(item_id = ?request.item_id, "Analyze request completed");

    Ok(Json(response))
}
