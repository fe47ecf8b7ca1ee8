use crate::config::{resolve_api_key, CompletionConfig};
use crate::error::CookPalError;
use crate::model::RawRecipe;
use crate::sources::{build_user_prompt, loose, RecipeSource, CHEF_SYSTEM_PROMPT};
use async_trait::async_trait;
use log::{debug, warn};
use reqwest::Client;
use serde_json::{json, Value};
use std::time::Duration;

const SERVICE: &str = "completion";

/// Recipe source backed by an OpenAI-compatible chat completion API
pub struct CompletionSource {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
    temperature: f32,
    max_tokens: u32,
}

impl CompletionSource {
    /// Create a new completion source from configuration
    pub fn new(config: &CompletionConfig, timeout: Duration) -> Result<Self, CookPalError> {
        // Try config first, then fall back to environment variable
        let api_key = resolve_api_key(config.api_key.as_deref(), "GROQ_API_KEY", |name| {
            std::env::var(name).ok()
        })?;

        Ok(CompletionSource {
            client: Client::builder().timeout(timeout).build()?,
            api_key,
            base_url: config.base_url.clone(),
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        })
    }

    #[doc(hidden)]
    pub fn with_base_url(api_key: String, base_url: String, model: String) -> Self {
        let defaults = CompletionConfig::default();
        CompletionSource {
            client: Client::new(),
            api_key,
            base_url,
            model,
            temperature: defaults.temperature,
            max_tokens: defaults.max_tokens,
        }
    }
}

#[async_trait]
impl RecipeSource for CompletionSource {
    fn source_name(&self) -> &str {
        "ai"
    }

    async fn fetch(&self, ingredients: &str) -> Result<RawRecipe, CookPalError> {
        let response = self
            .client
            .post(format!("{}/v1/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&json!({
                "model": self.model,
                "messages": [
                    {"role": "system", "content": CHEF_SYSTEM_PROMPT},
                    {"role": "user", "content": build_user_prompt(ingredients)}
                ],
                "temperature": self.temperature,
                "max_tokens": self.max_tokens
            }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CookPalError::ApiError {
                service: SERVICE,
                status: status.as_u16(),
                body,
            });
        }

        let response_body: Value = response.json().await?;
        debug!("{:?}", response_body);
        let content = response_body["choices"][0]["message"]["content"]
            .as_str()
            .ok_or_else(|| {
                CookPalError::ParseError("Failed to extract content from response".to_string())
            })?;

        Ok(parse_completion(content))
    }
}

/// Decode the completion text, dropping to the line heuristics when it is
/// not a JSON object.
pub(crate) fn parse_completion(content: &str) -> RawRecipe {
    match serde_json::from_str::<RawRecipe>(strip_code_fence(content)) {
        Ok(recipe) => recipe,
        Err(e) => {
            warn!("Completion was not valid recipe JSON ({}), parsing lines instead", e);
            loose::parse_lines(content)
        }
    }
}

/// Models often wrap the object in a ```json fence.
fn strip_code_fence(content: &str) -> &str {
    let trimmed = content.trim();
    match trimmed.strip_prefix("```") {
        Some(rest) => {
            let body = rest.split_once('\n').map_or("", |(_, body)| body);
            body.trim_end().trim_end_matches("```").trim()
        }
        None => trimmed,
    }
}
