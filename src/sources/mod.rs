mod completion;
mod factory;
pub mod loose;
mod mealdb;
mod prompt;

pub use completion::CompletionSource;
pub use factory::{SourceFactory, SourceKind};
pub use mealdb::MealDbSource;
pub use prompt::{build_user_prompt, CHEF_SYSTEM_PROMPT};

use crate::error::CookPalError;
use crate::model::RawRecipe;
use async_trait::async_trait;

/// Anything that can turn a list of ingredients into a raw recipe
#[async_trait]
pub trait RecipeSource: Send + Sync {
    /// Get the source name (e.g., "ai", "mealdb")
    fn source_name(&self) -> &str;

    /// Produce one recipe for the comma-separated ingredient query
    async fn fetch(&self, ingredients: &str) -> Result<RawRecipe, CookPalError>;
}
