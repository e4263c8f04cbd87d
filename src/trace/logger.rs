use std::fs::{File, OpenOptions};
use std::io::Write;
use std::sync::Mutex;

use tracing::warn;

use crate::panel::error::PanelError;
use crate::trace::trace::TraceEvent;

/// JSONL journal of the messages a panel receives and sends.
///
/// Journaling is best effort: a journal that cannot be opened turns into a
/// disabled one, and a failed write is reported with `warn!` and skipped.
pub struct TraceLogger {
    journal: Option<Mutex<File>>,
}

impl TraceLogger {
    /// Open `path` for appending, or fall back to a disabled journal.
    pub fn new(path: &str) -> Self {
        Self::open(path).unwrap_or_else(|e| {
            warn!(path, error = %e, "trace journal disabled");
            Self::disabled()
        })
    }

    pub fn open(path: &str) -> Result<Self, PanelError> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            journal: Some(Mutex::new(file)),
        })
    }

    pub fn disabled() -> Self {
        Self { journal: None }
    }

    pub fn is_enabled(&self) -> bool {
        self.journal.is_some()
    }

    /// Append one event as a line of JSON.
    pub fn log(&self, event: &TraceEvent) {
        if let Err(e) = self.append(event) {
            warn!(action = %event.action, error = %e, "trace event not written");
        }
    }

    fn append(&self, event: &TraceEvent) -> Result<(), PanelError> {
        let Some(journal) = &self.journal else {
            return Ok(());
        };
        let line = serde_json::to_string(event).map_err(|source| PanelError::JsonSerialize {
            context: format!("trace event '{}'", event.action),
            source,
        })?;
        // A writer that panicked mid-line leaves at worst one torn line.
        let mut file = journal.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        writeln!(file, "{}", line)?;
        Ok(())
    }
}
