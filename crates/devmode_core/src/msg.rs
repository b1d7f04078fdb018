use crate::{Permission, TabId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Browser reported a navigation or load-state change for a tab.
    TabUpdated { tab_id: TabId, url: String },
    /// Plugin classified a dev-mode URL.
    PermissionResolved {
        tab_id: TabId,
        url: String,
        permission: Permission,
    },
}
