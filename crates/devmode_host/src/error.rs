use thiserror::Error;

#[derive(Debug, Error)]
pub enum PluginError {
    #[error("plugin unavailable: {0}")]
    Unavailable(String),
    #[error("plugin rejected {operation}: {message}")]
    Rejected {
        operation: &'static str,
        message: String,
    },
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to read storage item {key}: {message}")]
    Read { key: String, message: String },
    #[error("storage item {key} is not valid JSON: {source}")]
    MalformedEntries {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("storage item {key} is not a JSON array")]
    NotAnArray { key: String },
}

/// Failure while handling one tab event. Only that event is abandoned.
#[derive(Debug, Error)]
pub enum WatchError {
    #[error(transparent)]
    Plugin(#[from] PluginError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}
