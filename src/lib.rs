//! CookPal turns a handful of ingredients into a recipe.
//!
//! A [`RecipeSource`] produces a [`RawRecipe`] from an AI completion or from
//! TheMealDB, and the [`normalizer`] cleans it into a [`DisplayRecipe`] that
//! is safe to show and to read aloud.

pub mod builder;
pub mod config;
pub mod error;
pub mod history;
pub mod model;
pub mod normalizer;
pub mod sources;
pub mod speech;

pub use builder::{GeneratedRecipe, RecipeGenerator, RecipeGeneratorBuilder};
pub use config::CookPalConfig;
pub use error::CookPalError;
pub use history::{describe_age, Conversation, FileStore, History, HistoryStore, MemoryStore};
pub use model::{DisplayRecipe, RawRecipe};
pub use normalizer::{
    format_badge_text, format_cooking_time, format_ingredient_list, format_instruction_list,
    format_title,
};
pub use sources::{RecipeSource, SourceFactory, SourceKind};
pub use speech::{
    speech_script, ElevenLabsSynthesizer, QueryCapture, ReaderCapture, SpeechSynthesizer,
};

/// Generate a recipe for the ingredients using configuration from
/// `cookpal.toml` and the environment.
pub async fn generate_recipe(ingredients: &str) -> Result<GeneratedRecipe, CookPalError> {
    RecipeGenerator::builder()
        .ingredients(ingredients)
        .build()
        .await
}

/// Normalize a raw recipe into its display form.
pub fn normalize_recipe(raw: &RawRecipe) -> DisplayRecipe {
    normalizer::normalize_recipe(raw)
}
