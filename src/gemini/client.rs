use super::types::{Content, GenerateContentRequest, GenerationConfig, InlineData, Part};
use crate::{config::GeminiConfig, Error, Result};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, error};

const INFERENCE_TIMEOUT: Duration = Duration::from_secs(120);
const TEMPERATURE: f32 = 0.2;

/// Client for Gemini's `generateContent` endpoint, authenticated via the
/// `key` query parameter.
#[derive(Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    config: GeminiConfig,
}

impl GeminiClient {
    pub fn new(http: reqwest::Client, config: GeminiConfig) -> Self {
        Self { http, config }
    }

    /// Sends the prompt and inline image in a single turn and returns the
    /// model's raw reply text.
    ///
    /// JSON output is requested at low temperature, but the reply is returned
    /// as-is; normalization happens in [`super::parse`].
    pub async fn generate(
        &self,
        prompt: &str,
        mime_type: &str,
        image_b64: String,
    ) -> Result<String> {
        let body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![
                    Part::Text {
                        text: prompt.to_string(),
                    },
                    Part::InlineData {
                        inline_data: InlineData {
                            mime_type: mime_type.to_string(),
                            data: image_b64,
                        },
                    },
                ],
            }],
            generation_config: GenerationConfig {
                temperature: TEMPERATURE,
                response_mime_type: "application/json".to_string(),
            },
        };

        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url, self.config.model
        );

        debug!(model = %self.config.model, "Calling Gemini generateContent");

        let response = self
            .http
            .post(&url)
            .query(&[("key", self.config.api_key.as_str())])
            .timeout(INFERENCE_TIMEOUT)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                error!("Gemini request failed: {}", e);
                Error::InferenceTransport(e.to_string())
            })?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            error!("Gemini returned status {}", status);
            return Err(Error::Inference {
                status: status.as_u16(),
                body,
            });
        }

        let envelope: Value = response
            .json()
            .await
            .map_err(|e| Error::InferenceTransport(e.to_string()))?;

        // First candidate's first text part; an envelope of any other shape
        // degrades to its raw serialization rather than failing the request.
        let raw_text = match envelope
            .pointer("/candidates/0/content/parts/0/text")
            .and_then(Value::as_str)
        {
            Some(text) => text.to_string(),
            None => envelope.to_string(),
        };

        Ok(raw_text)
    }
}
