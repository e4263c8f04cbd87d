use serde::{Serialize, Serializer};

use crate::format::escape::escape_js_single_quoted;
use crate::region::region_model::RegionId;

/// Payload of an outbound command. `NoResume` goes over the wire as `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CommandPayload {
    #[default]
    NoResume,
    Region(RegionId),
}

impl Serialize for CommandPayload {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            CommandPayload::NoResume => serializer.serialize_bool(false),
            CommandPayload::Region(id) => serializer.serialize_u64(id.0),
        }
    }
}

/// Commands the panel sends to the inspected page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Start (or restart) tracking, optionally resuming a region.
    StartTrack(CommandPayload),
    /// Drop all tracked regions on the page side.
    Reset,
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::StartTrack(_) => "startTrack",
            Command::Reset => "reset",
        }
    }

    pub fn payload(&self) -> CommandPayload {
        match self {
            Command::StartTrack(payload) => *payload,
            Command::Reset => CommandPayload::NoResume,
        }
    }
}

/// Message as posted to the transport.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutboundMessage {
    pub action: &'static str,
    pub content: String,
    pub data: CommandPayload,
    #[serde(rename = "tabId")]
    pub tab_id: u64,
}

impl OutboundMessage {
    pub fn command(name: &str, data: CommandPayload, tab_id: u64) -> Self {
        Self {
            action: "command",
            content: name.to_string(),
            data,
            tab_id,
        }
    }
}

/// Expression that selects the node at `path` in the inspected window's
/// element inspector.
pub fn inspect_expression(path: &str) -> String {
    format!(
        "inspect(document.querySelector('{}'));",
        escape_js_single_quoted(path)
    )
}
