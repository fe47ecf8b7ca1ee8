/// System prompt sent with every completion request.
///
/// It asks for a single JSON object so that the response can be decoded
/// straight into a `RawRecipe`.
pub const CHEF_SYSTEM_PROMPT: &str = "You are a creative chef assistant. \
Generate one easy and quick recipe based on the given ingredients. \
Format your response as JSON with: title, ingredients (array), instructions (array), \
cookingTime (string), difficulty. No extra info, just what is asked.";

/// Build the user message for a comma-separated ingredient list.
pub fn build_user_prompt(ingredients: &str) -> String {
    format!(
        "Suggest 1 recipe based on the following ingredients: {}. \
         Make sure it's easy and quick to cook, and include steps and ingredients.",
        ingredients.trim()
    )
}
