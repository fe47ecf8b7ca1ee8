use crate::config::{resolve_api_key, SpeechConfig};
use crate::error::CookPalError;
use crate::speech::SpeechSynthesizer;
use async_trait::async_trait;
use log::{debug, error};
use reqwest::header::{HeaderMap, ACCEPT};
use reqwest::Client;
use serde_json::json;
use std::time::Duration;

pub struct ElevenLabsSynthesizer {
    client: Client,
    api_key: String,
    base_url: String,
    config: SpeechConfig,
}

impl ElevenLabsSynthesizer {
    /// Create a new synthesizer from configuration
    pub fn new(config: &SpeechConfig, timeout: Duration) -> Result<Self, CookPalError> {
        // Try config first, then fall back to environment variable
        let api_key = resolve_api_key(config.api_key.as_deref(), "ELEVENLABS_API_KEY", |name| {
            std::env::var(name).ok()
        })?;

        Ok(ElevenLabsSynthesizer {
            client: Client::builder().timeout(timeout).build()?,
            api_key,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            config: config.clone(),
        })
    }

    #[doc(hidden)]
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        ElevenLabsSynthesizer {
            client: Client::new(),
            api_key,
            base_url,
            config: SpeechConfig::default(),
        }
    }
}

#[async_trait]
impl SpeechSynthesizer for ElevenLabsSynthesizer {
    fn synthesizer_name(&self) -> &str {
        "elevenlabs"
    }

    async fn synthesize(&self, text: &str) -> Result<Vec<u8>, CookPalError> {
        if text.trim().is_empty() {
            return Err(CookPalError::SpeechError("nothing to say".to_string()));
        }

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, "audio/mpeg".parse()?);
        headers.insert("xi-api-key", self.api_key.parse()?);

        let url = format!(
            "{}/v1/text-to-speech/{}",
            self.base_url, self.config.voice_id
        );
        debug!("Requesting speech for {} characters from {}", text.len(), url);

        let response = self
            .client
            .post(url)
            .headers(headers)
            .json(&json!({
                "text": text,
                "model_id": self.config.model_id,
                "voice_settings": {
                    "stability": self.config.stability,
                    "similarity_boost": self.config.similarity_boost,
                    "style": self.config.style,
                    "use_speaker_boost": self.config.use_speaker_boost,
                    "speed": self.config.speed
                }
            }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("Speech request failed with {}: {}", status, body);
            return Err(CookPalError::ApiError {
                service: "speech",
                status: status.as_u16(),
                body,
            });
        }

        let audio = response.bytes().await?;
        if audio.is_empty() {
            return Err(CookPalError::SpeechError(
                "service returned no audio".to_string(),
            ));
        }
        Ok(audio.to_vec())
    }
}
