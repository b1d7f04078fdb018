//! Devmode host: collaborator seams and effect execution for the navigation watcher.
mod error;
mod page_action;
mod plugin;
mod storage;
mod types;
mod watcher;

pub use error::{PluginError, StorageError, WatchError};
pub use page_action::PageActionSink;
pub use plugin::PermissionPlugin;
pub use storage::{load_host_entries, JsonFileStorage, LocalStorage, MemoryStorage};
pub use types::{Tab, TabChangeInfo};
pub use watcher::NavigationWatcher;
