//! Stand-ins for the browser-side collaborators when driving the watcher from a terminal.

use std::collections::HashSet;

use devmode_core::{host_from_url, TabId};
use devmode_host::{PageActionSink, PermissionPlugin, PluginError};
use devmode_logging::{devmode_debug, devmode_info};
use serde_json::Value;

/// Classifies URLs by exact host match against configured lists.
pub struct TablePermissionPlugin {
    include: HashSet<String>,
    exclude: HashSet<String>,
}

impl TablePermissionPlugin {
    pub fn new(include: Vec<String>, exclude: Vec<String>) -> Self {
        Self {
            include: include.into_iter().collect(),
            exclude: exclude.into_iter().collect(),
        }
    }
}

impl PermissionPlugin for TablePermissionPlugin {
    fn get_host_permission(&self, url: &str) -> Result<String, PluginError> {
        let host = host_from_url(url);
        // Include wins when a host is listed twice.
        let verdict = if self.include.contains(host) {
            "include"
        } else if self.exclude.contains(host) {
            "exclude"
        } else {
            "unknown"
        };
        Ok(verdict.to_string())
    }

    fn load_host_entries(&self, entries: &[Value]) -> Result<(), PluginError> {
        for entry in entries {
            devmode_debug!("host entry {}", entry);
        }
        devmode_info!("plugin received {} host entries", entries.len());
        Ok(())
    }

    fn test_js_identity(&self, a: &Value, b: &Value) -> Result<bool, PluginError> {
        Ok(std::ptr::eq(a, b))
    }
}

/// Prints each page action call to stdout, one line per call.
pub struct StdoutPageAction;

impl PageActionSink for StdoutPageAction {
    fn set_icon(&self, tab_id: TabId, path: &str) {
        println!("{tab_id} setIcon {path}");
    }

    fn set_popup(&self, tab_id: TabId, popup: &str) {
        println!("{tab_id} setPopup {popup}");
    }

    fn show(&self, tab_id: TabId) {
        println!("{tab_id} show");
    }

    fn hide(&self, tab_id: TabId) {
        println!("{tab_id} hide");
    }
}
