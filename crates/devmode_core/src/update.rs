use crate::{
    code_server_from_url, host_from_url, is_dev_mode_url, Effect, Msg, Permission, UiCommand,
    WatcherConfig,
};

/// Pure update function: maps a message to the effects the host must run.
///
/// Holds no state between calls, so identical messages always yield identical effects.
pub fn update(config: &WatcherConfig, msg: Msg) -> Vec<Effect> {
    match msg {
        Msg::TabUpdated { tab_id, url } => {
            if is_dev_mode_url(&url) {
                vec![Effect::ResolvePermission { tab_id, url }]
            } else {
                vec![Effect::Ui(UiCommand::Hide { tab_id })]
            }
        }
        Msg::PermissionResolved {
            tab_id,
            url,
            permission,
        } => {
            let icon = permission
                .icon()
                .map(|icon| config.icon_path(icon).to_string());
            let popup = popup_url(config, &permission, &url);
            vec![
                Effect::Ui(UiCommand::Show {
                    tab_id,
                    icon,
                    popup,
                }),
                Effect::ReloadHostEntries {
                    key: config.host_entry_key.clone(),
                },
            ]
        }
    }
}

/// Popup page with `permission`, `host` and `codeserver` appended unescaped.
pub fn popup_url(config: &WatcherConfig, permission: &Permission, url: &str) -> String {
    format!(
        "{}?permission={}&host={}&codeserver={}",
        config.popup_page,
        permission,
        host_from_url(url),
        code_server_from_url(url)
    )
}
