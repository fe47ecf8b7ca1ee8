use cookpal::{
    format_cooking_time, format_ingredient_list, format_instruction_list, format_title,
    normalize_recipe, RawRecipe,
};

const JSON_CHARS: [char; 7] = ['{', '}', '[', ']', '"', '\'', '\\'];

fn messy_ingredients() -> Vec<&'static str> {
    vec![
        r#"["2Cups Flour","#,
        r#"{"quantity": "1 tbsp olive oil"}"#,
        "- 3 Eggs",
        "Ingredient 4: 1/2 cup 'whole' milk",
        r#"\"salt\""#,
        "Difficulty: easy",
        "Serves 4",
        "]",
        "Then whisk everything",
    ]
}

#[test]
fn test_cooking_time_examples() {
    assert_eq!(format_cooking_time("20-30 minutes"), "20 minutes");
    assert_eq!(format_cooking_time("about 45 min"), "45 minutes");
    assert_eq!(format_cooking_time("quick"), "Not specified");
    assert_eq!(format_cooking_time(""), "Not specified");
}

#[test]
fn test_title_example() {
    assert_eq!(
        format_title("title: chicken AND rice bowl"),
        "Chicken and Rice Bowl"
    );
    assert_eq!(format_title(""), "Delicious Recipe");
    assert_eq!(format_title(r#"{"title": ""}"#), "Delicious Recipe");
}

#[test]
fn test_ingredient_examples() {
    assert_eq!(
        format_ingredient_list(&["Ingredient 2: 2 cups Flour"]),
        vec!["2 cups flour"]
    );
    assert!(format_ingredient_list(&["difficulty easy"]).is_empty());
}

#[test]
fn test_instruction_example() {
    assert_eq!(
        format_instruction_list(&["Step 1: Preheat oven to 350F"]),
        vec!["Preheat oven to 350F."]
    );
}

#[test]
fn test_ingredients_drop_array_commas() {
    assert_eq!(
        format_ingredient_list(&[r#""2 eggs","#, r#""1 cup milk","#]),
        vec!["2 eggs", "1 cup milk"]
    );
}

#[test]
fn test_labels_behind_markers() {
    assert_eq!(format_title("**Recipe:** Garlic Pasta"), "Garlic Pasta");
    assert_eq!(
        format_instruction_list(&["1. Instruction: Mix the flour"]),
        vec!["Mix the flour."]
    );
    assert_eq!(format_ingredient_list(&["- Name: sea salt"]), vec!["sea salt"]);
}

#[test]
fn test_ingredients_free_of_json_syntax() {
    let cleaned = format_ingredient_list(&messy_ingredients());
    assert!(!cleaned.is_empty());
    for ingredient in &cleaned {
        assert!(
            !ingredient.contains(&JSON_CHARS[..]),
            "JSON syntax left in {:?}",
            ingredient
        );
        assert!(!ingredient.is_empty());
    }
}

#[test]
fn test_ingredient_filtering_keeps_order() {
    let cleaned = format_ingredient_list(&messy_ingredients());
    assert_eq!(cleaned[0], "2 cups flour");
    assert_eq!(cleaned[2], "3 eggs");
    assert_eq!(cleaned[3], "1/2 cup whole milk");
    assert_eq!(cleaned[4], "salt");
    assert_eq!(cleaned.len(), 5);
}

#[test]
fn test_normalizers_are_idempotent() {
    let titles = [
        "title: chicken AND rice bowl",
        r#"["Spicy Beef Tacos"]"#,
        "1. lemon-garlic salmon with dill",
        "**Recipe:** Garlic Pasta",
    ];
    for title in titles {
        let once = format_title(title);
        assert_eq!(format_title(&once), once);
    }

    let mut raw_ingredients = messy_ingredients();
    raw_ingredients.extend(["- Name: sea salt", r#""2 eggs","#]);
    let ingredients = format_ingredient_list(&raw_ingredients);
    assert_eq!(format_ingredient_list(&ingredients), ingredients);

    let instructions = format_instruction_list(&[
        "Step 1: Preheat oven to 350F",
        "2) Mix the \"dry\" ingredients,",
        "Bake until golden!",
        "- Let it rest for 5 minutes;",
        "1. Instruction: Mix the flour",
    ]);
    assert_eq!(instructions.len(), 5);
    assert_eq!(format_instruction_list(&instructions), instructions);

    for time in ["20-30 minutes", "quick", "1 hour"] {
        let once = format_cooking_time(time);
        assert_eq!(format_cooking_time(&once), once);
    }
}

#[test]
fn test_normalize_recipe_from_completion_json() {
    let raw: RawRecipe = serde_json::from_str(
        r#"{
            "title": "\"Title\": creamy mushroom RISOTTO",
            "ingredients": [
                {"quantity": "1", "unit": "cup", "name": "Arborio rice"},
                "2Tbsp Butter",
                "Cooking time: 30 minutes"
            ],
            "instructions": "1. Warm the stock\n2. Toast the rice in butter\nServes 4",
            "cookingTime": 35,
            "difficulty": "difficulty: medium"
        }"#,
    )
    .unwrap();

    let recipe = normalize_recipe(&raw);
    assert_eq!(recipe.title, "Creamy Mushroom Risotto");
    assert_eq!(recipe.ingredients, vec!["1 cup arborio rice", "2 tbsp butter"]);
    assert_eq!(
        recipe.instructions,
        vec!["Warm the stock.", "Toast the rice in butter."]
    );
    assert_eq!(recipe.cooking_time, "35 minutes");
    assert_eq!(recipe.difficulty.as_deref(), Some("Medium"));
    assert_eq!(recipe.servings, None);
}
