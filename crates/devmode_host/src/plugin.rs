use serde_json::Value;

use crate::PluginError;

/// The native dev-mode plugin as seen from the background page.
///
/// All calls are synchronous. An `Err` means the plugin is missing or refused
/// the call; the watcher aborts the current event when that happens.
pub trait PermissionPlugin {
    /// Raw classification of `url`; `"include"`, `"exclude"` or `"unknown"` when well-behaved.
    fn get_host_permission(&self, url: &str) -> Result<String, PluginError>;

    /// Re-registers persisted host entries, each passed as its own argument.
    fn load_host_entries(&self, entries: &[Value]) -> Result<(), PluginError>;

    /// Diagnostic identity round-trip; the watcher only logs the answer.
    fn test_js_identity(&self, a: &Value, b: &Value) -> Result<bool, PluginError>;
}
