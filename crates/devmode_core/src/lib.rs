//! Devmode core: URL extraction and the pure navigation state machine.
mod config;
mod effect;
mod msg;
mod permission;
mod update;
mod url;

pub use config::WatcherConfig;
pub use effect::{Effect, UiCommand};
pub use msg::Msg;
pub use permission::{Icon, Permission};
pub use update::{popup_url, update};
pub use url::{
    code_server_from_url, host_from_url, is_dev_mode_url, query_part, CODE_SERVER_PARAM,
    HOSTED_PARAM,
};

/// Browser-assigned tab identifier.
pub type TabId = i32;
