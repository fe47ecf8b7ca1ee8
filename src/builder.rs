use std::time::Duration;

use log::info;

use crate::config::CookPalConfig;
use crate::error::CookPalError;
use crate::model::{DisplayRecipe, RawRecipe};
use crate::normalizer::normalize_recipe;
use crate::sources::{RecipeSource, SourceFactory, SourceKind};

/// Result of a recipe generation
#[derive(Debug, Clone)]
pub struct GeneratedRecipe {
    /// The ingredient query, trimmed
    pub query: String,
    /// Name of the source that produced the recipe
    pub source: String,
    /// Recipe as the source produced it, suitable for history
    pub raw: RawRecipe,
    /// Normalized recipe, suitable for display and speech
    pub display: DisplayRecipe,
}

/// Builder for configuring and executing recipe generation
#[derive(Default)]
pub struct RecipeGeneratorBuilder {
    ingredients: Option<String>,
    source: Option<SourceKind>,
    custom_source: Option<Box<dyn RecipeSource>>,
    timeout: Option<Duration>,
    api_key: Option<String>,
    model: Option<String>,
    config: Option<CookPalConfig>,
}

impl RecipeGeneratorBuilder {
    /// Set the comma-separated ingredients to cook with
    ///
    /// # Example
    /// ```
    /// use cookpal::RecipeGenerator;
    ///
    /// let builder = RecipeGenerator::builder()
    ///     .ingredients("chicken, rice, broccoli");
    /// ```
    pub fn ingredients(mut self, ingredients: impl Into<String>) -> Self {
        self.ingredients = Some(ingredients.into());
        self
    }

    /// Choose where the recipe comes from
    ///
    /// Without this the configured `default_source` is used.
    ///
    /// # Example
    /// ```
    /// use cookpal::{RecipeGenerator, SourceKind};
    ///
    /// let builder = RecipeGenerator::builder()
    ///     .ingredients("beef, onion")
    ///     .source(SourceKind::MealDb);
    /// ```
    pub fn source(mut self, source: SourceKind) -> Self {
        self.source = Some(source);
        self
    }

    /// Use an already constructed source instead of one from configuration
    pub fn custom_source(mut self, source: Box<dyn RecipeSource>) -> Self {
        self.custom_source = Some(source);
        self
    }

    /// Set a timeout for HTTP requests
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    /// Set the API key for the AI completion service
    ///
    /// This allows passing the API key directly instead of relying on
    /// environment variables or config files.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set the completion model name
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Use this configuration instead of loading `cookpal.toml` and the
    /// environment
    pub fn config(mut self, config: CookPalConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Fetch a recipe and normalize it
    ///
    /// # Errors
    /// Returns `CookPalError` if:
    /// - No ingredients were specified (`BuilderError`)
    /// - The ingredients are blank (`EmptyQuery`)
    /// - The configuration or source cannot be set up
    /// - The source fails to produce a recipe
    ///
    /// # Example
    /// ```no_run
    /// # use cookpal::RecipeGenerator;
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let recipe = RecipeGenerator::builder()
    ///     .ingredients("eggs, spinach")
    ///     .build()
    ///     .await?;
    /// println!("{}", recipe.display);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn build(self) -> Result<GeneratedRecipe, CookPalError> {
        let ingredients = self.ingredients.ok_or_else(|| {
            CookPalError::BuilderError(
                "No ingredients specified. Use .ingredients()".to_string(),
            )
        })?;
        let query = ingredients.trim();
        if query.is_empty() {
            return Err(CookPalError::EmptyQuery);
        }

        let source = match self.custom_source {
            Some(source) => source,
            None => {
                let mut config = match self.config {
                    Some(config) => config,
                    None => CookPalConfig::load()?,
                };
                if let Some(key) = self.api_key {
                    config.completion.api_key = Some(key);
                }
                if let Some(model) = self.model {
                    config.completion.model = model;
                }
                if let Some(timeout) = self.timeout {
                    config.timeout = timeout.as_secs().max(1);
                }

                let kind = match self.source {
                    Some(kind) => kind,
                    None => config.default_source.parse()?,
                };
                SourceFactory::create(kind, &config)?
            }
        };

        info!("Generating recipe from {} for: {}", source.source_name(), query);
        let raw = source.fetch(query).await?;
        let display = normalize_recipe(&raw);

        Ok(GeneratedRecipe {
            query: query.to_string(),
            source: source.source_name().to_string(),
            raw,
            display,
        })
    }
}

/// Main entry point for the builder API
pub struct RecipeGenerator;

impl RecipeGenerator {
    /// Creates a new builder for generating recipes
    ///
    /// # Example
    /// ```
    /// use cookpal::RecipeGenerator;
    ///
    /// let builder = RecipeGenerator::builder();
    /// ```
    pub fn builder() -> RecipeGeneratorBuilder {
        RecipeGeneratorBuilder::default()
    }
}
