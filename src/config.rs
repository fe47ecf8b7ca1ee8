use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::error::CookPalError;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct CookPalConfig {
    /// Source used when none is requested ("ai" or "mealdb")
    #[serde(default = "default_source")]
    pub default_source: String,
    /// AI completion service
    #[serde(default)]
    pub completion: CompletionConfig,
    /// TheMealDB lookup service
    #[serde(default)]
    pub mealdb: MealDbConfig,
    /// Text-to-speech service
    #[serde(default)]
    pub speech: SpeechConfig,
    /// Recent recipe history
    #[serde(default)]
    pub history: HistoryConfig,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for CookPalConfig {
    fn default() -> Self {
        Self {
            default_source: default_source(),
            completion: CompletionConfig::default(),
            mealdb: MealDbConfig::default(),
            speech: SpeechConfig::default(),
            history: HistoryConfig::default(),
            timeout: default_timeout(),
        }
    }
}

/// Configuration for an OpenAI-compatible chat completion endpoint
#[derive(Debug, Deserialize, Clone)]
pub struct CompletionConfig {
    /// API key for authentication (can also be set via GROQ_API_KEY)
    pub api_key: Option<String>,
    /// Base URL, without the `/v1/chat/completions` path
    #[serde(default = "default_completion_base_url")]
    pub base_url: String,
    /// Model identifier
    #[serde(default = "default_completion_model")]
    pub model: String,
    /// Temperature for generation (0.0-1.0)
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    /// Maximum tokens to generate
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_completion_base_url(),
            model: default_completion_model(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
        }
    }
}

/// Configuration for TheMealDB
#[derive(Debug, Deserialize, Clone)]
pub struct MealDbConfig {
    #[serde(default = "default_mealdb_base_url")]
    pub base_url: String,
    /// How many of the user's ingredients go into the filter query
    #[serde(default = "default_max_query_ingredients")]
    pub max_query_ingredients: usize,
}

impl Default for MealDbConfig {
    fn default() -> Self {
        Self {
            base_url: default_mealdb_base_url(),
            max_query_ingredients: default_max_query_ingredients(),
        }
    }
}

/// Configuration for ElevenLabs text-to-speech
#[derive(Debug, Deserialize, Clone)]
pub struct SpeechConfig {
    /// API key for authentication (can also be set via ELEVENLABS_API_KEY)
    pub api_key: Option<String>,
    #[serde(default = "default_speech_base_url")]
    pub base_url: String,
    #[serde(default = "default_voice_id")]
    pub voice_id: String,
    #[serde(default = "default_speech_model")]
    pub model_id: String,
    #[serde(default = "default_half")]
    pub stability: f32,
    #[serde(default = "default_half")]
    pub similarity_boost: f32,
    #[serde(default)]
    pub style: f32,
    #[serde(default = "default_true")]
    pub use_speaker_boost: bool,
    #[serde(default = "default_speed")]
    pub speed: f32,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_speech_base_url(),
            voice_id: default_voice_id(),
            model_id: default_speech_model(),
            stability: default_half(),
            similarity_boost: default_half(),
            style: 0.0,
            use_speaker_boost: default_true(),
            speed: default_speed(),
        }
    }
}

/// Configuration for the recipe history
#[derive(Debug, Deserialize, Clone)]
pub struct HistoryConfig {
    /// JSON file holding the history blob
    #[serde(default = "default_history_path")]
    pub path: String,
    /// Number of entries kept, newest first
    #[serde(default = "default_history_capacity")]
    pub capacity: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            path: default_history_path(),
            capacity: default_history_capacity(),
        }
    }
}

// Default value functions
fn default_source() -> String {
    "ai".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_completion_base_url() -> String {
    "https://api.groq.com/openai".to_string()
}

fn default_completion_model() -> String {
    "compound-beta".to_string()
}

fn default_temperature() -> f32 {
    0.7
}

fn default_max_tokens() -> u32 {
    1000
}

fn default_mealdb_base_url() -> String {
    "https://www.themealdb.com/api/json/v1/1".to_string()
}

fn default_max_query_ingredients() -> usize {
    2
}

fn default_speech_base_url() -> String {
    "https://api.elevenlabs.io".to_string()
}

fn default_voice_id() -> String {
    "nPczCjzI2devNBz1zQrb".to_string()
}

fn default_speech_model() -> String {
    "eleven_multilingual_v2".to_string()
}

fn default_half() -> f32 {
    0.5
}

fn default_true() -> bool {
    true
}

fn default_speed() -> f32 {
    0.9
}

fn default_history_path() -> String {
    "cookpal-conversations.json".to_string()
}

fn default_history_capacity() -> usize {
    5
}

impl CookPalConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with COOKPAL__ prefix
    /// 2. cookpal.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: COOKPAL__COMPLETION__API_KEY
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }
}

/// Load configuration from file and environment variables
///
/// See [`CookPalConfig::load`] for the priority order.
pub fn load_config() -> Result<CookPalConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("cookpal").required(false))
        // Use double underscore for nested: COOKPAL__SPEECH__VOICE_ID
        .add_source(
            Environment::with_prefix("COOKPAL")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}

/// Pick the configured API key, or look up `var` when none is configured.
///
/// `lookup` is normally `|name| std::env::var(name).ok()`.
pub(crate) fn resolve_api_key(
    configured: Option<&str>,
    var: &'static str,
    lookup: impl FnOnce(&str) -> Option<String>,
) -> Result<String, CookPalError> {
    configured
        .map(str::to_string)
        .or_else(|| lookup(var))
        .filter(|key| !key.trim().is_empty())
        .ok_or(CookPalError::MissingApiKey(var))
}
