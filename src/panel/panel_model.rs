use serde::Serialize;

use crate::log::entry::EventLog;
use crate::region::region_model::RegionId;
use crate::region::registry::RegionRegistry;

/// Toggles and bookkeeping of one panel instance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PanelState {
    /// Inspected tab this panel is bound to.
    pub tab_id: u64,

    /// Set once the page confirms its instrumentation attached. Navigation
    /// does not reset it.
    pub page_initialized: bool,

    /// Keep regions and log entries across top-level navigations.
    pub use_persistent_log: bool,

    /// Show accessible names instead of raw markup. Display only.
    pub use_acc_name: bool,

    /// Most recently discovered region, resumed after a navigation in
    /// persistent mode.
    pub last_watched_region: Option<RegionId>,
}

impl PanelState {
    pub fn new(tab_id: u64) -> Self {
        Self {
            tab_id,
            ..Self::default()
        }
    }
}

/// Everything the router mutates.
#[derive(Debug, Clone, Default)]
pub struct PanelModel {
    pub state: PanelState,
    pub registry: RegionRegistry,
    pub log: EventLog,
}

impl PanelModel {
    pub fn new(tab_id: u64) -> Self {
        Self {
            state: PanelState::new(tab_id),
            registry: RegionRegistry::new(),
            log: EventLog::new(),
        }
    }
}
