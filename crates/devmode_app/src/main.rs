mod collaborators;
mod config;
mod events;
mod logging;

use std::io;
use std::path::PathBuf;

use devmode_host::{JsonFileStorage, NavigationWatcher};
use devmode_logging::devmode_info;

use crate::collaborators::{StdoutPageAction, TablePermissionPlugin};

fn main() -> anyhow::Result<()> {
    let config_path = std::env::args_os().nth(1).map(PathBuf::from);
    let config = config::load(config_path.as_deref())?;
    logging::initialize(config.log_destination);

    devmode_info!(
        "watching tab updates; storage file {:?}",
        config.storage_file
    );
    let watcher = NavigationWatcher::new(
        config.watcher,
        TablePermissionPlugin::new(config.include_hosts, config.exclude_hosts),
        StdoutPageAction,
        JsonFileStorage::new(config.storage_file),
    );

    events::run_events(io::stdin().lock(), &watcher)
}
