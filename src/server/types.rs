use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    pub download_url: String,
    pub user_query: String,
    #[serde(default)]
    pub item_id: Option<String>,
    #[serde(default)]
    pub language_code: Option<String>,
    #[serde(default)]
    pub context_hint: Option<String>,
}

/// Fixed-shape result returned to the caller. Every field is present in the
/// body even when the model omitted it upstream.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResponse {
    pub answer: String,
    #[serde(default)]
    pub image_summary: String,
    #[serde(default)]
    pub extracted_text: String,
    #[serde(default)]
    pub detected_languages: Vec<String>,
    #[serde(default)]
    pub safety_notes: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub ok: bool,
}
