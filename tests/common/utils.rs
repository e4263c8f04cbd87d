use live_region_panel::command::transport::RecordingTransport;
use live_region_panel::event::event_model::InboundEvent;
use live_region_panel::format::timestamp::FixedClock;
use live_region_panel::log::renderer::VirtualSurface;
use live_region_panel::panel::controller::Panel;
use serde_json::json;

pub type TestPanel = Panel<RecordingTransport, VirtualSurface, FixedClock>;

pub const TAB: u64 = 7;

pub fn panel() -> TestPanel {
    Panel::with_clock(
        TAB,
        RecordingTransport::new(),
        VirtualSurface::new(100.0, 20.0),
        FixedClock::at(12, 0, 1, 250),
    )
}

pub fn watch(id: u64, path: &str, role: &str) -> InboundEvent {
    InboundEvent::new(
        "watch",
        json!({
            "regionNum": id,
            "regionPath": path,
            "regionRole": role,
            "regionPoliteness": "polite",
            "regionAccName": "",
            "regionHTML": "<p>Saved</p>",
        }),
    )
}

pub fn change(id: u64, html: &str) -> InboundEvent {
    InboundEvent::new(
        "change",
        json!({
            "regionNum": id,
            "regionPath": "div#status",
            "regionHTML": html,
        }),
    )
}

pub fn unwatch(id: u64) -> InboundEvent {
    InboundEvent::new("unwatch", json!(id))
}

pub fn ready(url: &str) -> InboundEvent {
    InboundEvent::new("ready", json!(url)).with_framed(false)
}

pub fn ready_framed(url: &str) -> InboundEvent {
    InboundEvent::new("ready", json!(url)).with_framed(true)
}
