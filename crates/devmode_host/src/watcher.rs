use std::collections::VecDeque;

use devmode_core::{
    code_server_from_url, host_from_url, update, Effect, Msg, Permission, TabId, UiCommand,
    WatcherConfig,
};
use devmode_logging::{devmode_debug, devmode_info, event_seq};
use serde_json::{Map, Value};

use crate::{
    load_host_entries, LocalStorage, PageActionSink, PermissionPlugin, Tab, TabChangeInfo,
    WatchError,
};

/// Runs the pure update loop against the browser collaborators.
///
/// Each event is handled to completion before returning. Nothing is cached
/// between events; the page action is overwritten on every event.
pub struct NavigationWatcher<P, S, L> {
    config: WatcherConfig,
    plugin: P,
    sink: S,
    storage: L,
}

impl<P, S, L> NavigationWatcher<P, S, L>
where
    P: PermissionPlugin,
    S: PageActionSink,
    L: LocalStorage,
{
    pub fn new(config: WatcherConfig, plugin: P, sink: S, storage: L) -> Self {
        Self {
            config,
            plugin,
            sink,
            storage,
        }
    }

    pub fn plugin(&self) -> &P {
        &self.plugin
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Tab update listener. `change_info` is accepted for signature parity and ignored.
    pub fn on_tab_updated(
        &self,
        tab_id: TabId,
        _change_info: &TabChangeInfo,
        tab: &Tab,
    ) -> Result<(), WatchError> {
        self.dispatch(Msg::TabUpdated {
            tab_id,
            url: tab.url.clone(),
        })
    }

    /// Feeds `msg` through `update` and runs the resulting effects in order.
    ///
    /// An error aborts the remaining effects of this event only; UI commands
    /// already applied stay applied.
    pub fn dispatch(&self, msg: Msg) -> Result<(), WatchError> {
        let mut pending: VecDeque<Effect> = update(&self.config, msg).into();
        while let Some(effect) = pending.pop_front() {
            match effect {
                Effect::ResolvePermission { tab_id, url } => {
                    let permission = self.resolve_permission(&url)?;
                    pending.extend(update(
                        &self.config,
                        Msg::PermissionResolved {
                            tab_id,
                            url,
                            permission,
                        },
                    ));
                }
                Effect::Ui(command) => self.apply(&command),
                Effect::ReloadHostEntries { key } => self.reload_host_entries(&key)?,
            }
        }
        Ok(())
    }

    fn resolve_permission(&self, url: &str) -> Result<Permission, WatchError> {
        let raw = self.plugin.get_host_permission(url)?;
        let permission = Permission::parse(&raw);
        devmode_info!(
            "got permission {} for host {}/ code {}",
            permission,
            host_from_url(url),
            code_server_from_url(url)
        );

        let id_object = Value::Object(Map::new());
        let identical = self.plugin.test_js_identity(&id_object, &id_object)?;
        devmode_debug!("plugin identity check returned {}", identical);

        Ok(permission)
    }

    fn apply(&self, command: &UiCommand) {
        match command {
            UiCommand::Show { tab_id, icon, popup } => {
                devmode_debug!(
                    "event {} show tab={} icon={:?} popup={}",
                    event_seq(),
                    tab_id,
                    icon,
                    popup
                );
                if let Some(path) = icon {
                    self.sink.set_icon(*tab_id, path);
                }
                self.sink.set_popup(*tab_id, popup);
                self.sink.show(*tab_id);
            }
            UiCommand::Hide { tab_id } => {
                devmode_debug!("event {} hide tab={}", event_seq(), tab_id);
                self.sink.hide(*tab_id);
            }
        }
    }

    fn reload_host_entries(&self, key: &str) -> Result<(), WatchError> {
        let entries = load_host_entries(&self.storage, key)?;
        devmode_info!("loading {} hostentries from {}", entries.len(), key);
        self.plugin.load_host_entries(&entries)?;
        Ok(())
    }
}
