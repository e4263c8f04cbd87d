use live_region_panel::command::transport::RecordingTransport;
use live_region_panel::event::event_model::InboundEvent;
use live_region_panel::format::timestamp::FixedClock;
use live_region_panel::log::renderer::VirtualSurface;
use live_region_panel::panel::controller::Panel;
use live_region_panel::panel::error::PanelError;
use live_region_panel::trace::logger::TraceLogger;
use live_region_panel::trace::trace::{Direction, TraceEvent};
use serde_json::{Value, json};

mod common;
use crate::common::utils::{ready, watch};

fn read_lines(path: &std::path::Path) -> Vec<Value> {
    std::fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect()
}

#[test]
fn inbound_trace_carries_region() {
    let trace = TraceEvent::inbound(&InboundEvent::new("unwatch", json!(3))).with_tab(7);
    assert_eq!(trace.direction, Direction::Inbound);
    assert_eq!(trace.action, "unwatch");
    assert_eq!(trace.region, Some(3));
    assert_eq!(trace.tab_id, Some(7));
    assert!(!trace.ignored);
}

#[test]
fn disabled_logger_writes_nothing() {
    let logger = TraceLogger::disabled();
    assert!(!logger.is_enabled());
    logger.log(&TraceEvent::now(Direction::Outbound, "reset"));
}

#[test]
fn unwritable_path_disables_logger() {
    let dir = tempfile::tempdir().unwrap();
    let logger = TraceLogger::new(dir.path().join("missing/dir/trace.jsonl").to_str().unwrap());
    assert!(!logger.is_enabled());
}

#[test]
fn open_reports_why_the_journal_is_unavailable() {
    let dir = tempfile::tempdir().unwrap();
    let result = TraceLogger::open(dir.path().join("missing/dir/trace.jsonl").to_str().unwrap());
    assert!(matches!(result, Err(PanelError::Io(_))));
}

#[test]
fn journal_appends_to_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("trace.jsonl");
    std::fs::write(&path, "{\"direction\":\"inbound\",\"action\":\"earlier\"}\n").unwrap();

    let logger = TraceLogger::open(path.to_str().unwrap()).unwrap();
    assert!(logger.is_enabled());
    logger.log(&TraceEvent::now(Direction::Outbound, "reset"));

    let lines = read_lines(&path);
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0]["action"], "earlier");
    assert_eq!(lines[1]["action"], "reset");
    assert_eq!(lines[1]["direction"], "outbound");
}

#[test]
fn panel_journals_inbound_and_outbound_traffic() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("trace.jsonl");

    let mut panel = Panel::with_clock(
        7,
        RecordingTransport::new(),
        VirtualSurface::default(),
        FixedClock::at(0, 0, 0, 0),
    )
    .with_tracer(TraceLogger::new(path.to_str().unwrap()));

    panel.route(&watch(3, "div#status", "status"));
    panel.route(&InboundEvent::new("bogus", json!(null)));
    panel.route(&ready("https://example.com/"));

    let lines = read_lines(&path);
    let summary: Vec<(&str, &str)> = lines
        .iter()
        .map(|l| (l["direction"].as_str().unwrap(), l["action"].as_str().unwrap()))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("inbound", "watch"),
            ("inbound", "bogus"),
            ("inbound", "ready"),
            ("outbound", "startTrack"),
        ]
    );
    assert_eq!(lines[0]["region"], json!(3));
    assert_eq!(lines[1]["ignored"], json!(true));
    assert_eq!(lines[3]["payload"], json!(false));
    assert_eq!(lines[3]["tab_id"], json!(7));
}
