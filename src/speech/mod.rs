//! Speech collaborators: turning a recipe into audio and capturing a query.

mod capture;
mod elevenlabs;

pub use capture::{QueryCapture, ReaderCapture};
pub use elevenlabs::ElevenLabsSynthesizer;

use crate::error::CookPalError;
use crate::model::DisplayRecipe;
use async_trait::async_trait;

#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    fn synthesizer_name(&self) -> &str;

    /// Render text to encoded audio bytes.
    async fn synthesize(&self, text: &str) -> Result<Vec<u8>, CookPalError>;
}

const UNSPECIFIED: &str = "Not specified";

/// The text read aloud for a normalized recipe.
pub fn speech_script(recipe: &DisplayRecipe) -> String {
    format!(
        "Recipe: {}.\nCooking time: {}.\nDifficulty: {}.\nIngredients needed: {}.\nCooking instructions: {}",
        recipe.title,
        recipe.cooking_time,
        recipe.difficulty.as_deref().unwrap_or(UNSPECIFIED),
        recipe.ingredients.join(", "),
        recipe.instructions.join(" ")
    )
}
