use devmode_core::TabId;

/// The subset of a browser tab the watcher reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub id: TabId,
    pub url: String,
}

impl Tab {
    pub fn new(id: TabId, url: impl Into<String>) -> Self {
        Self {
            id,
            url: url.into(),
        }
    }
}

/// Change details delivered alongside a tab update. Opaque to the watcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TabChangeInfo;
