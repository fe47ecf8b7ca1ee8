use thiserror::Error;

/// Errors that can occur while generating, speaking or storing a recipe
#[derive(Error, Debug)]
pub enum CookPalError {
    /// HTTP request to a collaborator failed
    #[error("Failed to fetch: {0}")]
    FetchError(#[from] reqwest::Error),

    /// Collaborator answered with a non-success status
    #[error("{service} returned {status}: {body}")]
    ApiError {
        service: &'static str,
        status: u16,
        body: String,
    },

    /// The recipe source had nothing for the query
    #[error("No recipes found: {0}")]
    NoRecipeFound(String),

    /// A collaborator response could not be understood
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// No ingredients were given
    #[error("Please enter some ingredients to generate a recipe")]
    EmptyQuery,

    /// Text-to-speech failed
    #[error("Speech not available: {0}")]
    SpeechError(String),

    /// History could not be read or written
    #[error("History error: {0}")]
    HistoryError(String),

    /// Builder configuration error
    #[error("Builder error: {0}")]
    BuilderError(String),

    /// An API key was required but none was configured
    #[error("{0} not found in config or environment")]
    MissingApiKey(&'static str),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error parsing HTTP headers
    #[error("Header parse error: {0}")]
    HeaderError(#[from] reqwest::header::InvalidHeaderValue),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}
