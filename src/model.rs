use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Recipe fields exactly as a source produced them.
///
/// Nothing about the content is trusted: fields may carry JSON punctuation,
/// field labels, numbering or metadata that bled in from a neighbouring field.
/// Decoding is lenient so that a sloppy completion still yields a recipe.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawRecipe {
    #[serde(default, alias = "name", deserialize_with = "de_text")]
    pub title: String,
    #[serde(default, deserialize_with = "de_text_list")]
    pub ingredients: Vec<String>,
    #[serde(default, alias = "steps", deserialize_with = "de_text_list")]
    pub instructions: Vec<String>,
    #[serde(
        default,
        alias = "cooking_time",
        alias = "cookTime",
        deserialize_with = "de_opt_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub cooking_time: Option<String>,
    #[serde(
        default,
        deserialize_with = "de_opt_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub difficulty: Option<String>,
    #[serde(
        default,
        alias = "serves",
        deserialize_with = "de_opt_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub servings: Option<String>,
}

/// Cleaned recipe, safe to render and to read aloud.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DisplayRecipe {
    pub title: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub cooking_time: String,
    pub difficulty: Option<String>,
    pub servings: Option<String>,
}

impl fmt::Display for DisplayRecipe {
    /// Ingredients as a checklist, instructions as a numbered list.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;

        let mut badges = vec![format!("Cooking time: {}", self.cooking_time)];
        if let Some(difficulty) = &self.difficulty {
            badges.push(format!("Difficulty: {}", difficulty));
        }
        if let Some(servings) = &self.servings {
            badges.push(format!("Servings: {}", servings));
        }
        writeln!(f, "{}", badges.join(" | "))?;

        writeln!(f)?;
        writeln!(f, "Ingredients")?;
        for ingredient in &self.ingredients {
            writeln!(f, "  [ ] {}", ingredient)?;
        }

        writeln!(f)?;
        writeln!(f, "Cooking Instructions")?;
        for (index, instruction) in self.instructions.iter().enumerate() {
            writeln!(f, "  {}. {}", index + 1, instruction)?;
        }
        Ok(())
    }
}

// Keys that carry the readable part of an ingredient or step object, in the
// order they should be joined.
const TEXT_KEYS: [&str; 10] = [
    "quantity",
    "amount",
    "measure",
    "unit",
    "name",
    "item",
    "ingredient",
    "text",
    "instruction",
    "description",
];

fn value_to_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Array(items) => join_texts(items.iter()),
        Value::Object(map) => object_to_text(map),
    }
}

fn object_to_text(map: &Map<String, Value>) -> Option<String> {
    let known: Vec<&Value> = TEXT_KEYS.iter().filter_map(|key| map.get(*key)).collect();
    if known.is_empty() {
        join_texts(map.values())
    } else {
        join_texts(known.into_iter())
    }
}

fn join_texts<'a>(values: impl Iterator<Item = &'a Value>) -> Option<String> {
    let parts: Vec<String> = values
        .filter_map(value_to_text)
        .filter(|s| !s.trim().is_empty())
        .collect();
    if parts.is_empty() {
        None
    } else {
        Some(parts.join(" "))
    }
}

fn de_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(de_opt_text(deserializer)?.unwrap_or_default())
}

fn de_opt_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(value_to_text))
}

fn de_text_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items.iter().filter_map(value_to_text).collect(),
        Some(Value::String(s)) => s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect(),
        Some(other) => value_to_text(&other).into_iter().collect(),
    })
}
