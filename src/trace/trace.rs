use serde::Serialize;
use serde_json::Value;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::command::command_model::OutboundMessage;
use crate::event::event_model::{InboundEvent, region_id_from};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Inbound,
    Outbound,
}

/// One journal line: an event the panel received or a command it sent.
#[derive(Debug, Serialize)]
pub struct TraceEvent {
    pub timestamp_ms: u128,
    pub direction: Direction,
    pub action: String,

    pub region: Option<u64>,
    pub tab_id: Option<u64>,

    pub payload: Value,
    pub ignored: bool,
}

impl TraceEvent {
    pub fn now(direction: Direction, action: impl ToString) -> Self {
        Self {
            timestamp_ms: SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis())
                .unwrap_or_default(),
            direction,
            action: action.to_string(),
            region: None,
            tab_id: None,
            payload: Value::Null,
            ignored: false,
        }
    }

    pub fn inbound(event: &InboundEvent) -> Self {
        let mut trace = Self::now(Direction::Inbound, &event.action).with_payload(event.data.clone());
        trace.region = region_id_from(&event.data).map(|r| r.0);
        trace
    }

    pub fn outbound(message: &OutboundMessage) -> Self {
        let payload = serde_json::to_value(message.data).unwrap_or(Value::Null);
        Self::now(Direction::Outbound, &message.content)
            .with_tab(message.tab_id)
            .with_payload(payload)
    }

    pub fn with_tab(mut self, tab_id: u64) -> Self {
        self.tab_id = Some(tab_id);
        self
    }

    pub fn with_payload(mut self, payload: Value) -> Self {
        self.payload = payload;
        self
    }

    pub fn ignored(mut self) -> Self {
        self.ignored = true;
        self
    }
}
