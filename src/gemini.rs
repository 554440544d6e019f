use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::GenerateError;
use crate::TextGenerator;

pub const GEMINI_API_VERSION: &str = "v1beta";
pub const GENERATE_CONTENT_METHOD: &str = "generateContent";
const API_KEY_HEADER: &str = "x-goog-api-key";
const LIST_MODELS_PAGE_SIZE: u32 = 100;

pub struct GeminiClient {
    client: reqwest::Client,
    api_base: String,
    api_key: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
enum Role {
    User,
    Model,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
struct Part {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<Role>,
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default)]
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    #[serde(default)]
    block_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    message: String,
    #[serde(default)]
    status: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListModelsResponse {
    #[serde(default)]
    models: Vec<ModelInfo>,
    #[serde(default)]
    next_page_token: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelInfo {
    pub name: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub supported_generation_methods: Vec<String>,
}

impl ModelInfo {
    pub fn supports_generate_content(&self) -> bool {
        self.supported_generation_methods
            .iter()
            .any(|method| method == GENERATE_CONTENT_METHOD)
    }
}

/// Accepts both `gemini-pro` and `models/gemini-pro`.
pub(crate) fn model_resource_name(model: &str) -> String {
    if model.starts_with("models/") || model.starts_with("tunedModels/") {
        model.to_string()
    } else {
        format!("models/{}", model)
    }
}

impl GeminiClient {
    pub fn new(config: &Config) -> Self {
        GeminiClient {
            client: reqwest::Client::new(),
            api_base: config.api_base.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        }
    }

    fn api_key(&self) -> Result<&str, GenerateError> {
        self.api_key.as_deref().ok_or_else(|| {
            GenerateError::Configuration(format!(
                "{} not found in environment variables",
                crate::config::GOOGLE_API_KEY_NAME
            ))
        })
    }

    /// Returns every model visible to the key, following pagination.
    pub async fn list_models(&self) -> Result<Vec<ModelInfo>, GenerateError> {
        let api_key = self.api_key()?;
        let url = format!("{}/{}/models", self.api_base, GEMINI_API_VERSION);
        let mut models = Vec::new();
        let mut page_token: Option<String> = None;
        loop {
            let mut query = vec![("pageSize", LIST_MODELS_PAGE_SIZE.to_string())];
            if let Some(token) = &page_token {
                query.push(("pageToken", token.clone()));
            }
            debug!("Listing models from {} (page token: {:?})", url, page_token);
            let response = self
                .client
                .get(&url)
                .header(API_KEY_HEADER, api_key)
                .query(&query)
                .send()
                .await?;
            let page: ListModelsResponse = read_json(response).await?;
            models.extend(page.models);
            match page.next_page_token {
                Some(token) if !token.is_empty() => page_token = Some(token),
                _ => break,
            }
        }
        Ok(models)
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, model: &str, prompt: &str) -> Result<String, GenerateError> {
        let api_key = self.api_key()?;
        let url = format!(
            "{}/{}/{}:{}",
            self.api_base,
            GEMINI_API_VERSION,
            model_resource_name(model),
            GENERATE_CONTENT_METHOD
        );
        let body = GenerateContentRequest {
            contents: vec![Content {
                role: Some(Role::User),
                parts: vec![Part {
                    text: Some(prompt.to_string()),
                }],
            }],
        };
        debug!("Sending {} prompt characters to {}", prompt.len(), url);
        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .header(API_KEY_HEADER, api_key)
            .json(&body)
            .send()
            .await?;
        let response: GenerateContentResponse = read_json(response).await?;
        response_text(response)
    }
}

async fn read_json<T>(response: reqwest::Response) -> Result<T, GenerateError>
where
    T: for<'de> Deserialize<'de>,
{
    let status = response.status();
    let text = response.text().await?;
    if !status.is_success() {
        let (api_status, message) = match serde_json::from_str::<ErrorEnvelope>(&text) {
            Ok(envelope) => (envelope.error.status, envelope.error.message),
            Err(_) => (None, text),
        };
        warn!("Gemini API returned {}: {}", status, message);
        return Err(GenerateError::from_status(
            status.as_u16(),
            api_status.as_deref(),
            message,
        ));
    }
    serde_json::from_str::<T>(&text).map_err(|e| {
        GenerateError::InvalidResponse(format!("Failed to parse response, error: {}", e))
    })
}

fn response_text(response: GenerateContentResponse) -> Result<String, GenerateError> {
    let Some(candidate) = response.candidates.into_iter().next() else {
        return match response.prompt_feedback.and_then(|f| f.block_reason) {
            Some(reason) => Err(GenerateError::Blocked(reason)),
            None => Err(GenerateError::EmptyResponse),
        };
    };
    let texts: Vec<String> = candidate
        .content
        .map(|content| content.parts)
        .unwrap_or_default()
        .into_iter()
        .filter_map(|part| part.text)
        .collect();
    if texts.is_empty() {
        return match candidate.finish_reason {
            Some(reason) if reason != "STOP" => Err(GenerateError::Blocked(reason)),
            _ => Err(GenerateError::EmptyResponse),
        };
    }
    Ok(texts.concat())
}
