use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;

use devmode_logging::devmode_debug;
use serde_json::Value;

use crate::StorageError;

/// Durable string key-value store, read-only from the watcher's side.
pub trait LocalStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
}

/// Reads the JSON array stored under `key`. A missing item or a stored `null`
/// yields no entries.
pub fn load_host_entries<L: LocalStorage + ?Sized>(
    storage: &L,
    key: &str,
) -> Result<Vec<Value>, StorageError> {
    let Some(raw) = storage.get_item(key)? else {
        devmode_debug!("No stored item under {}", key);
        return Ok(Vec::new());
    };
    let parsed: Value =
        serde_json::from_str(&raw).map_err(|source| StorageError::MalformedEntries {
            key: key.to_string(),
            source,
        })?;
    match parsed {
        Value::Array(entries) => Ok(entries),
        Value::Null => Ok(Vec::new()),
        _ => Err(StorageError::NotAnArray {
            key: key.to_string(),
        }),
    }
}

/// In-memory store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    items: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_item(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.items.insert(key.into(), value.into());
    }

    pub fn with_item(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_item(key, value);
        self
    }
}

impl LocalStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.get(key).cloned())
    }
}

/// Store backed by a JSON object file of string values, e.g. a `localStorage` dump.
///
/// The file is re-read on every lookup so external edits are picked up; a
/// missing file behaves like an empty store.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_items(&self, key: &str) -> Result<HashMap<String, String>, StorageError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Ok(HashMap::new());
            }
            Err(err) => {
                return Err(StorageError::Read {
                    key: key.to_string(),
                    message: format!("{}: {err}", self.path.display()),
                });
            }
        };
        serde_json::from_str(&content).map_err(|err| StorageError::Read {
            key: key.to_string(),
            message: format!("{}: {err}", self.path.display()),
        })
    }
}

impl LocalStorage for JsonFileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let mut items = self.read_items(key)?;
        Ok(items.remove(key))
    }
}
