use cookpal::{
    generate_recipe, speech_script, CookPalConfig, CookPalError, ElevenLabsSynthesizer,
    RecipeGenerator, SourceKind, SpeechSynthesizer,
};
use mockito::{Matcher, Server};
use serde_json::json;
use std::time::Duration;

fn mocked_config(url: &str) -> CookPalConfig {
    let mut config = CookPalConfig::default();
    config.completion.base_url = url.to_string();
    config.mealdb.base_url = url.to_string();
    config
}

#[tokio::test]
async fn test_builder_ai_recipe_is_normalized() {
    let mut server = Server::new_async().await;
    let content = json!({
        "title": "\"Recipe\": lemon CHICKEN with herbs",
        "ingredients": ["[\"2 Chicken breasts\"", "1 Lemon", "Difficulty: Easy"],
        "instructions": ["Step 1: Season the chicken", "Step 2 - Roast for 25 minutes"],
        "cookingTime": "25-30 minutes",
        "difficulty": "Easy"
    })
    .to_string();
    let mock = server
        .mock("POST", "/v1/chat/completions")
        .match_header("authorization", "Bearer builder_key")
        .match_body(Matcher::PartialJson(json!({"model": "llama-3.3-70b-versatile"})))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({"choices": [{"message": {"content": content}}]}).to_string())
        .create();

    let recipe = RecipeGenerator::builder()
        .ingredients("chicken, lemon")
        .source(SourceKind::Ai)
        .api_key("builder_key")
        .model("llama-3.3-70b-versatile")
        .timeout(Duration::from_secs(10))
        .config(mocked_config(&server.url()))
        .build()
        .await
        .unwrap();

    assert_eq!(recipe.source, "ai");
    assert_eq!(recipe.query, "chicken, lemon");
    assert_eq!(recipe.display.title, "Lemon Chicken with Herbs");
    assert_eq!(recipe.display.ingredients, vec!["2 chicken breasts", "1 lemon"]);
    assert_eq!(
        recipe.display.instructions,
        vec!["Season the chicken.", "Roast for 25 minutes."]
    );
    assert_eq!(recipe.display.cooking_time, "25 minutes");
    assert_eq!(recipe.display.difficulty.as_deref(), Some("Easy"));
    assert_eq!(recipe.raw.ingredients.len(), 3);
    mock.assert();
}

#[tokio::test]
async fn test_builder_mealdb_recipe() {
    let mut server = Server::new_async().await;
    let _filter = server
        .mock("GET", "/filter.php")
        .match_query(Matcher::UrlEncoded("i".into(), "salmon,avocado".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"meals": [{"idMeal": "52959"}]}"#)
        .create();
    let _lookup = server
        .mock("GET", "/lookup.php")
        .match_query(Matcher::UrlEncoded("i".into(), "52959".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"meals": [{
                "strMeal": "salmon AVOCADO salad",
                "strInstructions": "Slice the avocado.\r\nFlake the salmon\r\n",
                "strIngredient1": "Salmon",
                "strMeasure1": "2 fillets",
                "strIngredient2": "Avocado",
                "strMeasure2": "1"
            }]}"#,
        )
        .create();

    let recipe = RecipeGenerator::builder()
        .ingredients("salmon, avocado, lime")
        .source(SourceKind::MealDb)
        .config(mocked_config(&server.url()))
        .build()
        .await
        .unwrap();

    assert_eq!(recipe.source, "mealdb");
    assert_eq!(recipe.display.title, "Salmon Avocado Salad");
    assert_eq!(recipe.display.ingredients, vec!["2 fillets salmon", "1 avocado"]);
    assert_eq!(
        recipe.display.instructions,
        vec!["Slice the avocado.", "Flake the salmon."]
    );
    assert_eq!(recipe.display.cooking_time, "30 minutes");
    assert_eq!(recipe.display.difficulty.as_deref(), Some("Medium"));
}

#[tokio::test]
async fn test_builder_uses_default_source_from_config() {
    let mut server = Server::new_async().await;
    let filter = server
        .mock("GET", "/filter.php")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"meals": null}"#)
        .create();

    let mut config = mocked_config(&server.url());
    config.default_source = "mealdb".to_string();

    let result = RecipeGenerator::builder()
        .ingredients("durian")
        .config(config)
        .build()
        .await;

    assert!(matches!(result, Err(CookPalError::NoRecipeFound(_))));
    filter.assert();
}

#[tokio::test]
async fn test_builder_empty_query() {
    let result = RecipeGenerator::builder()
        .ingredients("   ")
        .config(CookPalConfig::default())
        .build()
        .await;
    assert!(matches!(result, Err(CookPalError::EmptyQuery)));
}

#[tokio::test]
async fn test_generated_recipe_is_spoken() {
    let mut server = Server::new_async().await;
    let content = json!({
        "title": "Tomato Soup",
        "ingredients": ["4 tomatoes", "1 onion"],
        "instructions": ["Simmer everything", "Blend until smooth"],
        "cookingTime": "30 minutes"
    })
    .to_string();
    let _completion = server
        .mock("POST", "/v1/chat/completions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({"choices": [{"message": {"content": content}}]}).to_string())
        .create();
    let speech = server
        .mock("POST", "/v1/text-to-speech/nPczCjzI2devNBz1zQrb")
        .match_body(Matcher::PartialJson(json!({
            "text": "Recipe: Tomato Soup.\nCooking time: 30 minutes.\nDifficulty: Not specified.\nIngredients needed: 4 tomatoes, 1 onion.\nCooking instructions: Simmer everything. Blend until smooth."
        })))
        .with_status(200)
        .with_body("ID3")
        .create();

    let recipe = RecipeGenerator::builder()
        .ingredients("tomato, onion")
        .source(SourceKind::Ai)
        .api_key("fake_api_key")
        .config(mocked_config(&server.url()))
        .build()
        .await
        .unwrap();

    let synthesizer = ElevenLabsSynthesizer::with_base_url("fake_api_key".to_string(), server.url());
    let audio = synthesizer
        .synthesize(&speech_script(&recipe.display))
        .await
        .unwrap();

    assert_eq!(audio, b"ID3");
    speech.assert();
}

/// Test the convenience function against the real completion API
/// This test is ignored by default since it requires GROQ_API_KEY
#[tokio::test]
#[ignore]
async fn test_generate_recipe_live() {
    let recipe = generate_recipe("eggs, spinach, feta").await.unwrap();
    assert!(!recipe.display.title.is_empty());
    assert!(!recipe.display.ingredients.is_empty());
    assert!(!recipe.display.instructions.is_empty());
}
