use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use devmode_core::WatcherConfig;
use serde::Deserialize;

use crate::logging::LogDestination;

pub const DEFAULT_CONFIG_FILE: &str = "devmode.ron";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub watcher: WatcherConfig,
    pub log_destination: LogDestination,
    /// JSON object file standing in for the extension's local storage.
    pub storage_file: PathBuf,
    pub include_hosts: Vec<String>,
    pub exclude_hosts: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            watcher: WatcherConfig::default(),
            log_destination: LogDestination::default(),
            storage_file: PathBuf::from("local_storage.json"),
            include_hosts: Vec::new(),
            exclude_hosts: Vec::new(),
        }
    }
}

/// Loads the config at `path`, or `./devmode.ron` when present, else defaults.
pub fn load(path: Option<&Path>) -> anyhow::Result<AppConfig> {
    match path {
        Some(path) => read(path),
        None => {
            let fallback = Path::new(DEFAULT_CONFIG_FILE);
            if fallback.is_file() {
                read(fallback)
            } else {
                Ok(AppConfig::default())
            }
        }
    }
}

fn read(path: &Path) -> anyhow::Result<AppConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    ron::from_str(&content).with_context(|| format!("parsing config {}", path.display()))
}
