use std::io::BufRead;

use anyhow::{bail, Context};
use devmode_host::{
    LocalStorage, NavigationWatcher, PageActionSink, PermissionPlugin, Tab, TabChangeInfo,
};
use devmode_logging::{devmode_error, devmode_warn, set_event_seq};

/// Feeds every line of `reader` to `watcher` as a tab update.
///
/// Lines are split on raw bytes and decoded lossily, since URLs are opaque
/// text. Unparsable lines and failed events are logged and skipped; only a
/// read error on `reader` itself ends the loop.
pub fn run_events<R, P, S, L>(
    reader: R,
    watcher: &NavigationWatcher<P, S, L>,
) -> anyhow::Result<()>
where
    R: BufRead,
    P: PermissionPlugin,
    S: PageActionSink,
    L: LocalStorage,
{
    for (index, raw) in reader.split(b'\n').enumerate() {
        let raw = raw.context("reading tab events")?;
        let seq = index as u64 + 1;
        set_event_seq(seq);

        let line = String::from_utf8_lossy(&raw);
        let tab = match parse_event_line(&line) {
            Ok(Some(tab)) => tab,
            Ok(None) => continue,
            Err(err) => {
                devmode_warn!("event {}: skipping line: {:#}", seq, err);
                continue;
            }
        };

        if let Err(err) = watcher.on_tab_updated(tab.id, &TabChangeInfo, &tab) {
            devmode_error!("event {} tab {}: {}", seq, tab.id, err);
        }
    }
    Ok(())
}

/// Parses one `<tab_id> <url>` line. Blank lines and `#` comments yield `None`.
pub fn parse_event_line(line: &str) -> anyhow::Result<Option<Tab>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }
    let Some((id, url)) = line.split_once(char::is_whitespace) else {
        bail!("expected `<tab_id> <url>`, got {line:?}");
    };
    let id = id
        .parse()
        .with_context(|| format!("invalid tab id {id:?}"))?;
    Ok(Some(Tab::new(id, url.trim_start())))
}
