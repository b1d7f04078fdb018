use serde::{Deserialize, Serialize};

use crate::Icon;

/// Resource paths and storage key used when building UI commands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WatcherConfig {
    pub enabled_icon: String,
    pub disabled_icon: String,
    pub popup_page: String,
    pub host_entry_key: String,
}

impl Default for WatcherConfig {
    fn default() -> Self {
        Self {
            enabled_icon: "gwt32.png".to_string(),
            disabled_icon: "gwt32-gray.png".to_string(),
            popup_page: "page_action.html".to_string(),
            host_entry_key: "GWT_DEV_HOSTENTRY".to_string(),
        }
    }
}

impl WatcherConfig {
    pub fn icon_path(&self, icon: Icon) -> &str {
        match icon {
            Icon::Enabled => &self.enabled_icon,
            Icon::Disabled => &self.disabled_icon,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_ron_keeps_defaults() {
        let config: WatcherConfig = ron::from_str("(popup_page: \"popup.html\")").unwrap();
        assert_eq!(config.popup_page, "popup.html");
        assert_eq!(config.enabled_icon, "gwt32.png");
        assert_eq!(config.host_entry_key, "GWT_DEV_HOSTENTRY");
    }

    #[test]
    fn icon_paths() {
        let config = WatcherConfig::default();
        assert_eq!(config.icon_path(Icon::Enabled), "gwt32.png");
        assert_eq!(config.icon_path(Icon::Disabled), "gwt32-gray.png");
    }
}
