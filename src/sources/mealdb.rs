use crate::config::MealDbConfig;
use crate::error::CookPalError;
use crate::model::RawRecipe;
use crate::sources::RecipeSource;
use async_trait::async_trait;
use html_escape::decode_html_entities;
use log::{debug, info};
use reqwest::Client;
use serde_json::{Map, Value};
use std::time::Duration;

const SERVICE: &str = "mealdb";

// TheMealDB stores ingredients in numbered columns strIngredient1..20.
const INGREDIENT_SLOTS: usize = 20;

/// TheMealDB has no timing data, so every recipe gets this estimate.
pub const MEALDB_COOKING_TIME: &str = "30-45 minutes";
pub const MEALDB_DIFFICULTY: &str = "Medium";

/// Recipe source backed by TheMealDB public API
pub struct MealDbSource {
    client: Client,
    base_url: String,
    max_query_ingredients: usize,
}

impl MealDbSource {
    pub fn new(config: &MealDbConfig, timeout: Duration) -> Result<Self, CookPalError> {
        Ok(MealDbSource {
            client: Client::builder().timeout(timeout).build()?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            max_query_ingredients: config.max_query_ingredients,
        })
    }

    #[doc(hidden)]
    pub fn with_base_url(base_url: String) -> Self {
        MealDbSource {
            client: Client::new(),
            base_url,
            max_query_ingredients: MealDbConfig::default().max_query_ingredients,
        }
    }

    async fn get_json(&self, endpoint: &str, id: &str) -> Result<Value, CookPalError> {
        let response = self
            .client
            .get(format!("{}/{}", self.base_url, endpoint))
            .query(&[("i", id)])
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

        let body: Value = response.json().await?;
        debug!("{} response: {:?}", endpoint, body);
        Ok(body)
    }
}

#[async_trait]
impl RecipeSource for MealDbSource {
    fn source_name(&self) -> &str {
        "mealdb"
    }

    async fn fetch(&self, ingredients: &str) -> Result<RawRecipe, CookPalError> {
        let query = build_filter_query(ingredients, self.max_query_ingredients);
        if query.is_empty() {
            return Err(CookPalError::EmptyQuery);
        }

        let filtered = self.get_json("filter.php", &query).await?;
        let meal_id = filtered["meals"][0]["idMeal"]
            .as_str()
            .ok_or_else(|| CookPalError::NoRecipeFound(format!("nothing uses {}", query)))?;
        info!("Found meal {} for {}", meal_id, query);

        let detail = self.get_json("lookup.php", meal_id).await?;
        let meal = detail["meals"][0].as_object().ok_or_else(|| {
            CookPalError::NoRecipeFound(format!("meal {} has no details", meal_id))
        })?;

        Ok(meal_to_recipe(meal))
    }
}

/// First few comma-separated ingredients, as TheMealDB's filter expects.
fn build_filter_query(ingredients: &str, limit: usize) -> String {
    ingredients
        .split(',')
        .map(str::trim)
        .filter(|ingredient| !ingredient.is_empty())
        .take(limit)
        .collect::<Vec<_>>()
        .join(",")
}

fn meal_to_recipe(meal: &Map<String, Value>) -> RawRecipe {
    let field = |key: &str| -> String {
        meal.get(key)
            .and_then(Value::as_str)
            .map(|s| decode_html_entities(s.trim()).into_owned())
            .unwrap_or_default()
    };

    let ingredients = (1..=INGREDIENT_SLOTS)
        .filter_map(|slot| {
            let ingredient = field(&format!("strIngredient{}", slot));
            if ingredient.is_empty() {
                return None;
            }
            let measure = field(&format!("strMeasure{}", slot));
            Some(format!("{} {}", measure, ingredient).trim().to_string())
        })
        .collect();

    let instructions = field("strInstructions")
        .lines()
        .map(str::trim)
        .filter(|step| !step.is_empty())
        .map(String::from)
        .collect();

    RawRecipe {
        title: field("strMeal"),
        ingredients,
        instructions,
        cooking_time: Some(MEALDB_COOKING_TIME.to_string()),
        difficulty: Some(MEALDB_DIFFICULTY.to_string()),
        servings: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};
    use serde_json::json;

    #[test]
    fn test_build_filter_query() {
        assert_eq!(build_filter_query("chicken, rice, peas", 2), "chicken,rice");
        assert_eq!(build_filter_query(" , egg ,", 2), "egg");
        assert_eq!(build_filter_query("   ", 2), "");
    }

    #[test]
    fn test_meal_to_recipe() {
        let meal = json!({
            "idMeal": "52772",
            "strMeal": "Teriyaki Chicken Casserole",
            "strInstructions": "Preheat oven to 350&deg; F.\r\n\r\nCombine soy sauce.\r\nBake.",
            "strIngredient1": "soy sauce",
            "strMeasure1": "3/4 cup",
            "strIngredient2": "chicken breasts",
            "strMeasure2": null,
            "strIngredient3": " ",
            "strMeasure3": "1 tbs",
            "strIngredient4": null
        });
        let recipe = meal_to_recipe(meal.as_object().unwrap());
        assert_eq!(recipe.title, "Teriyaki Chicken Casserole");
        assert_eq!(recipe.ingredients, vec!["3/4 cup soy sauce", "chicken breasts"]);
        assert_eq!(
            recipe.instructions,
            vec!["Preheat oven to 350° F.", "Combine soy sauce.", "Bake."]
        );
        assert_eq!(recipe.cooking_time.as_deref(), Some(MEALDB_COOKING_TIME));
        assert_eq!(recipe.difficulty.as_deref(), Some(MEALDB_DIFFICULTY));
    }

    #[tokio::test]
    async fn test_fetch() {
        let mut server = Server::new_async().await;
        let filter = server
            .mock("GET", "/filter.php")
            .match_query(Matcher::UrlEncoded("i".into(), "chicken,rice".into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"meals": [{"strMeal": "Chicken Congee", "idMeal": "52956"}]}"#)
            .create();
        let lookup = server
            .mock("GET", "/lookup.php")
            .match_query(Matcher::UrlEncoded("i".into(), "52956".into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"meals": [{
                    "idMeal": "52956",
                    "strMeal": "Chicken Congee",
                    "strInstructions": "STEP 1\r\nBoil the rice.\r\nSTEP 2\r\nAdd the chicken.",
                    "strIngredient1": "Chicken",
                    "strMeasure1": "450g",
                    "strIngredient2": "Rice",
                    "strMeasure2": "1 cup"
                }]}"#,
            )
            .create();

        let source = MealDbSource::with_base_url(server.url());
        let recipe = source.fetch("chicken, rice, ginger").await.unwrap();

        assert_eq!(recipe.title, "Chicken Congee");
        assert_eq!(recipe.ingredients, vec!["450g Chicken", "1 cup Rice"]);
        assert_eq!(recipe.instructions.len(), 4);
        filter.assert();
        lookup.assert();
    }

    #[tokio::test]
    async fn test_fetch_no_meals() {
        let mut server = Server::new_async().await;
        let _filter = server
            .mock("GET", "/filter.php")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"meals": null}"#)
            .create();

        let source = MealDbSource::with_base_url(server.url());
        let result = source.fetch("unobtainium").await;
        assert!(matches!(result, Err(CookPalError::NoRecipeFound(_))));
    }

    #[tokio::test]
    async fn test_fetch_server_error() {
        let mut server = Server::new_async().await;
        let _filter = server
            .mock("GET", "/filter.php")
            .match_query(Matcher::Any)
            .with_status(500)
            .create();

        let source = MealDbSource::with_base_url(server.url());
        let result = source.fetch("egg").await;
        assert!(matches!(
            result,
            Err(CookPalError::ApiError { status: 500, .. })
        ));
    }

    #[tokio::test]
    async fn test_fetch_empty_query() {
        let source = MealDbSource::with_base_url("http://127.0.0.1:1".to_string());
        assert!(matches!(
            source.fetch(" , ").await,
            Err(CookPalError::EmptyQuery)
        ));
    }
}
