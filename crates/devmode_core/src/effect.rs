use crate::TabId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Ask the plugin for the permission classification of `url`.
    ResolvePermission { tab_id: TabId, url: String },
    /// Update the page action of a tab.
    Ui(UiCommand),
    /// Re-read persisted host entries under `key` and hand them to the plugin.
    ReloadHostEntries { key: String },
}

/// Page action change for a single tab. Exactly one is produced per tab event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiCommand {
    /// Set the icon (when resolved), set the popup, then show the action.
    Show {
        tab_id: TabId,
        icon: Option<String>,
        popup: String,
    },
    Hide { tab_id: TabId },
}
