use crate::config::CookPalConfig;
use crate::error::CookPalError;
use crate::sources::{CompletionSource, MealDbSource, RecipeSource};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Where a recipe comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SourceKind {
    /// Generated by an AI completion
    #[default]
    Ai,
    /// Looked up in TheMealDB
    MealDb,
}

impl SourceKind {
    /// Name used in configuration and on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceKind::Ai => "ai",
            SourceKind::MealDb => "mealdb",
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SourceKind {
    type Err = CookPalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ai" => Ok(SourceKind::Ai),
            "mealdb" | "real" => Ok(SourceKind::MealDb),
            other => Err(CookPalError::BuilderError(format!(
                "Unknown recipe source: {}",
                other
            ))),
        }
    }
}

pub struct SourceFactory;

impl SourceFactory {
    /// Create a source instance from configuration
    pub fn create(
        kind: SourceKind,
        config: &CookPalConfig,
    ) -> Result<Box<dyn RecipeSource>, CookPalError> {
        let timeout = Duration::from_secs(config.timeout);
        match kind {
            SourceKind::Ai => Ok(Box::new(CompletionSource::new(&config.completion, timeout)?)),
            SourceKind::MealDb => Ok(Box::new(MealDbSource::new(&config.mealdb, timeout)?)),
        }
    }

    /// Get the default source from configuration
    pub fn get_default_source(
        config: &CookPalConfig,
    ) -> Result<Box<dyn RecipeSource>, CookPalError> {
        Self::create(config.default_source.parse()?, config)
    }

    /// List all available source names
    pub fn available_sources() -> Vec<&'static str> {
        vec![SourceKind::Ai.as_str(), SourceKind::MealDb.as_str()]
    }
}
