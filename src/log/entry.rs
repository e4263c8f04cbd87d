use chrono::NaiveTime;
use serde::Serialize;

use crate::event::event_model::RegionDetail;
use crate::region::region_model::RegionId;

/// One immutable line of the event log.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LogEntry {
    Discovered {
        region: RegionId,
        path: String,
        in_dom: bool,
        time: NaiveTime,
    },
    Detail {
        detail: RegionDetail,
        time: NaiveTime,
    },
    Removed {
        region: RegionId,
        time: NaiveTime,
    },
    PageLoaded {
        url: String,
        time: NaiveTime,
    },
}

impl LogEntry {
    /// Region this entry is tagged with, used by the log filter.
    pub fn region(&self) -> Option<RegionId> {
        match self {
            LogEntry::Discovered { region, .. } | LogEntry::Removed { region, .. } => Some(*region),
            LogEntry::Detail { detail, .. } => detail.region,
            LogEntry::PageLoaded { .. } => None,
        }
    }

    pub fn time(&self) -> NaiveTime {
        match self {
            LogEntry::Discovered { time, .. }
            | LogEntry::Detail { time, .. }
            | LogEntry::Removed { time, .. }
            | LogEntry::PageLoaded { time, .. } => *time,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            LogEntry::Discovered { .. } => "discovered",
            LogEntry::Detail { .. } => "detail",
            LogEntry::Removed { .. } => "removed",
            LogEntry::PageLoaded { .. } => "page_loaded",
        }
    }
}

/// Append-only, unbounded event log.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    entries: Vec<LogEntry>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, entry: LogEntry) {
        self.entries.push(entry);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn last(&self) -> Option<&LogEntry> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
