use devmode_core::TabId;

/// Write-only view of the browser's per-tab page action. Calls are fire-and-forget.
pub trait PageActionSink {
    fn set_icon(&self, tab_id: TabId, path: &str);
    fn set_popup(&self, tab_id: TabId, popup: &str);
    fn show(&self, tab_id: TabId);
    fn hide(&self, tab_id: TabId);
}
