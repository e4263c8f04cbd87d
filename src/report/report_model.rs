use serde::Serialize;

use crate::command::transport::Transport;
use crate::format::timestamp::Clock;
use crate::log::entry::LogEntry;
use crate::log::renderer::ScrollSurface;
use crate::panel::controller::Panel;
use crate::panel::panel_model::PanelState;
use crate::region::region_model::{RegionId, RegionRecord};

// ============================================================================
// Panel snapshot — what the reporters render
// ============================================================================

/// Point-in-time copy of a panel's state, region index and full log.
///
/// Consumed by the console, HTML and JSON reporters.
#[derive(Debug, Clone, Serialize)]
pub struct PanelSnapshot {
    pub state: PanelState,

    /// Region the log view is filtered to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<RegionId>,

    /// Region index, in discovery order
    pub regions: Vec<RegionRecord>,

    /// Full log; the filter is applied by the reporter
    pub entries: Vec<LogEntry>,
}

impl PanelSnapshot {
    pub fn from_panel<T: Transport, S: ScrollSurface, C: Clock>(panel: &Panel<T, S, C>) -> Self {
        Self {
            state: panel.state().clone(),
            filter: panel.renderer().filter(),
            regions: panel.registry().records().to_vec(),
            entries: panel.log().entries().to_vec(),
        }
    }

    /// Entries passing the filter, in log order.
    pub fn visible_entries(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries
            .iter()
            .filter(move |e| self.filter.map_or(true, |f| e.region() == Some(f)))
    }

    /// Index of the region row highlighted for the filter: the newest record
    /// carrying the filtered id, so a reused id marks one row only.
    pub fn selected_row(&self) -> Option<usize> {
        let filter = self.filter?;
        self.regions.iter().rposition(|r| r.id == filter)
    }

    pub fn active_regions(&self) -> usize {
        self.regions.iter().filter(|r| r.is_active()).count()
    }

    pub fn gone_regions(&self) -> usize {
        self.regions.len() - self.active_regions()
    }
}
