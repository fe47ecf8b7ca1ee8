//! Bounded, newest-first history of generated recipes.
//!
//! Entries keep the raw recipe rather than its display form, so loading an
//! entry back runs it through the current normalizer again.

use crate::error::CookPalError;
use crate::model::RawRecipe;
use chrono::{DateTime, Utc};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

/// Key the history blob is stored under.
pub const HISTORY_KEY: &str = "cookpal-conversations";

/// One past generation request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversation {
    pub id: String,
    /// The ingredients the user asked with
    pub ingredients: String,
    pub recipe: RawRecipe,
    pub timestamp: DateTime<Utc>,
}

/// String key-value storage for serialized blobs.
pub trait HistoryStore {
    fn load(&self, key: &str) -> Result<Option<String>, CookPalError>;
    fn save(&mut self, key: &str, blob: &str) -> Result<(), CookPalError>;
    fn clear(&mut self, key: &str) -> Result<(), CookPalError>;
}

/// Keeps blobs in process memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    blobs: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl HistoryStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>, CookPalError> {
        Ok(self.blobs.get(key).cloned())
    }

    fn save(&mut self, key: &str, blob: &str) -> Result<(), CookPalError> {
        self.blobs.insert(key.to_string(), blob.to_string());
        Ok(())
    }

    fn clear(&mut self, key: &str) -> Result<(), CookPalError> {
        self.blobs.remove(key);
        Ok(())
    }
}

/// Keeps blobs in a JSON object file, one string value per key.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileStore { path: path.into() }
    }

    fn read_all(&self) -> Result<Map<String, Value>, CookPalError> {
        if !self.path.exists() {
            return Ok(Map::new());
        }
        let contents = fs::read_to_string(&self.path)?;
        if contents.trim().is_empty() {
            return Ok(Map::new());
        }
        match serde_json::from_str::<Value>(&contents)? {
            Value::Object(map) => Ok(map),
            _ => Err(CookPalError::HistoryError(format!(
                "{} is not a JSON object",
                self.path.display()
            ))),
        }
    }

    fn write_all(&self, map: Map<String, Value>) -> Result<(), CookPalError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, serde_json::to_string_pretty(&Value::Object(map))?)?;
        Ok(())
    }
}

impl HistoryStore for FileStore {
    fn load(&self, key: &str) -> Result<Option<String>, CookPalError> {
        let map = self.read_all()?;
        Ok(map.get(key).and_then(Value::as_str).map(String::from))
    }

    fn save(&mut self, key: &str, blob: &str) -> Result<(), CookPalError> {
        let mut map = self.read_all()?;
        map.insert(key.to_string(), Value::String(blob.to_string()));
        self.write_all(map)
    }

    fn clear(&mut self, key: &str) -> Result<(), CookPalError> {
        let mut map = self.read_all()?;
        if map.remove(key).is_some() {
            self.write_all(map)?;
        }
        Ok(())
    }
}

/// Recipe history backed by a [`HistoryStore`]
pub struct History<S> {
    store: S,
    capacity: usize,
    entries: Vec<Conversation>,
}

impl<S: HistoryStore> History<S> {
    /// Load the history from the store. A blob that no longer decodes is
    /// discarded.
    pub fn open(store: S, capacity: usize) -> Result<Self, CookPalError> {
        let mut entries = match store.load(HISTORY_KEY)? {
            Some(blob) => match serde_json::from_str::<Vec<Conversation>>(&blob) {
                Ok(entries) => entries,
                Err(e) => {
                    warn!("Ignoring unreadable history: {}", e);
                    Vec::new()
                }
            },
            None => Vec::new(),
        };
        entries.truncate(capacity);
        debug!("Loaded {} history entries", entries.len());

        Ok(History {
            store,
            capacity,
            entries,
        })
    }

    /// Put a new entry first, drop whatever falls past capacity and persist.
    pub fn record(
        &mut self,
        ingredients: &str,
        recipe: RawRecipe,
        now: DateTime<Utc>,
    ) -> Result<(), CookPalError> {
        self.entries.insert(
            0,
            Conversation {
                id: now.timestamp_millis().to_string(),
                ingredients: ingredients.to_string(),
                recipe,
                timestamp: now,
            },
        );
        self.entries.truncate(self.capacity);
        self.persist()
    }

    /// Entries, newest first
    pub fn entries(&self) -> &[Conversation] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&Conversation> {
        self.entries.get(index)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) -> Result<(), CookPalError> {
        self.entries.clear();
        self.store.clear(HISTORY_KEY)
    }

    fn persist(&mut self) -> Result<(), CookPalError> {
        let blob = serde_json::to_string(&self.entries)?;
        self.store.save(HISTORY_KEY, &blob)
    }
}

/// Human-friendly age of an entry: "Just now", "<n>h ago", or its date.
pub fn describe_age(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let hours = (now - timestamp).num_hours();
    if hours < 1 {
        "Just now".to_string()
    } else if hours < 24 {
        format!("{}h ago", hours)
    } else {
        timestamp.format("%Y-%m-%d").to_string()
    }
}
