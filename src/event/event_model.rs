use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::region::region_model::RegionId;

// ============================================================================
// Wire shapes relayed from the inspected page
// ============================================================================

/// One message as relayed by the transport: the event plus who sent it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender: Option<Sender>,
    pub content: InboundEvent,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sender {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tab: Option<TabRef>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TabRef {
    #[serde(default, deserialize_with = "lenient_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
}

impl Envelope {
    /// Wrap an event that carries no sender information.
    pub fn anonymous(content: InboundEvent) -> Self {
        Self { sender: None, content }
    }

    pub fn from_tab(tab_id: u64, content: InboundEvent) -> Self {
        Self {
            sender: Some(Sender {
                tab: Some(TabRef { id: Some(tab_id) }),
            }),
            content,
        }
    }

    pub fn sender_tab(&self) -> Option<u64> {
        self.sender.as_ref()?.tab.as_ref()?.id
    }

    /// Parse one JSON message, either a full envelope (`{"content": ...}`)
    /// or a bare event object.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let value: Value = serde_json::from_str(json)?;
        if value.get("content").is_some() {
            serde_json::from_value(value)
        } else {
            serde_json::from_value(value).map(Envelope::anonymous)
        }
    }
}

/// Event as emitted by the page instrumentation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InboundEvent {
    pub action: String,

    /// Action-specific payload: detail object, region number, or page URL.
    #[serde(default)]
    pub data: Value,

    // The optional top-level fields are read by truthiness, so a flag sent as
    // `1` or a URL sent as a number never fails the whole envelope.
    #[serde(default, deserialize_with = "lenient_flag", skip_serializing_if = "Option::is_none")]
    pub framed: Option<bool>,

    #[serde(
        rename = "frameURL",
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub frame_url: Option<String>,

    #[serde(
        rename = "inDom",
        default,
        deserialize_with = "lenient_flag",
        skip_serializing_if = "Option::is_none"
    )]
    pub in_dom: Option<bool>,
}

impl InboundEvent {
    pub fn new(action: &str, data: Value) -> Self {
        Self {
            action: action.to_string(),
            data,
            framed: None,
            frame_url: None,
            in_dom: None,
        }
    }

    pub fn with_framed(mut self, framed: bool) -> Self {
        self.framed = Some(framed);
        self
    }

    pub fn with_frame_url(mut self, url: &str) -> Self {
        self.frame_url = Some(url.to_string());
        self
    }

    pub fn with_in_dom(mut self, in_dom: bool) -> Self {
        self.in_dom = Some(in_dom);
        self
    }
}

// ============================================================================
// Typed events
// ============================================================================

/// Snapshot of a region carried by `change` and `watch` events.
///
/// Every field is optional: a missing field renders as an absent section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegionDetail {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<RegionId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub politeness: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub atomic: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relevant: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acc_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,

    /// Set when the region lives in a sub-frame.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frame_url: Option<String>,
}

impl RegionDetail {
    /// Read a detail payload best-effort. Non-object payloads yield an empty
    /// detail rather than an error.
    pub fn from_payload(data: &Value, event: &InboundEvent) -> Self {
        let data_framed = data.get("framed").map(is_truthy).unwrap_or(false);
        let framed = data_framed || event.framed.unwrap_or(false);
        let frame_url = if framed {
            Some(
                text_field(data, "frameURL")
                    .or_else(|| event.frame_url.clone())
                    .unwrap_or_default(),
            )
        } else {
            None
        };

        Self {
            region: data.get("regionNum").and_then(region_id_from),
            path: text_field(data, "regionPath"),
            role: text_field(data, "regionRole"),
            politeness: text_field(data, "regionPoliteness"),
            atomic: text_field(data, "regionAtomic"),
            relevant: text_field(data, "regionRelevant"),
            acc_name: text_field(data, "regionAccName"),
            html: text_field(data, "regionHTML"),
            frame_url,
        }
    }
}

/// Inbound event after classification.
#[derive(Debug, Clone, PartialEq)]
pub enum PanelEvent {
    /// An existing region's content or metadata changed.
    Change(RegionDetail),
    /// A region was discovered, or found again after reconnecting.
    Watch { detail: RegionDetail, in_dom: bool },
    /// A region left the DOM or stopped being live. `None` when the payload
    /// carried no usable id.
    Unwatch(Option<RegionId>),
    /// Page instrumentation attached.
    Initialized,
    /// A page or sub-frame finished loading.
    Ready { framed: bool, url: String },
}

impl PanelEvent {
    /// Classify an inbound event. Unknown actions yield `None`.
    pub fn from_inbound(event: &InboundEvent) -> Option<Self> {
        let typed = match event.action.as_str() {
            "change" => PanelEvent::Change(RegionDetail::from_payload(&event.data, event)),
            "watch" => PanelEvent::Watch {
                detail: RegionDetail::from_payload(&event.data, event),
                in_dom: event.in_dom.unwrap_or(false),
            },
            "unwatch" => PanelEvent::Unwatch(region_id_from(&event.data)),
            "initialized" => PanelEvent::Initialized,
            "ready" => PanelEvent::Ready {
                framed: event.framed.unwrap_or(false),
                url: value_text(&event.data).unwrap_or_default(),
            },
            _ => return None,
        };
        Some(typed)
    }
}

// ============================================================================
// Lenient payload readers
// ============================================================================

/// Read a region id from a number, a numeric string, or an object carrying
/// `regionNum`.
pub fn region_id_from(value: &Value) -> Option<RegionId> {
    match value {
        Value::Number(n) => n.as_u64().map(RegionId),
        Value::String(s) => s.trim().parse().ok().map(RegionId),
        Value::Object(map) => map.get("regionNum").and_then(region_id_from),
        _ => None,
    }
}

fn lenient_flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<bool>, D::Error> {
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.map(|v| is_truthy(&v)))
}

fn lenient_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(value_text))
}

fn lenient_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u64>, D::Error> {
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(region_id_from).map(|id| id.0))
}

fn text_field(data: &Value, key: &str) -> Option<String> {
    data.get(key).and_then(value_text)
}

/// Display text of a scalar, following JavaScript truthiness: empty strings,
/// `false`, `0` and `null` count as absent.
fn value_text(value: &Value) -> Option<String> {
    if !is_truthy(value) {
        return None;
    }
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
