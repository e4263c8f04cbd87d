use tracing::{info, warn};

use crate::cli::config::{OutputFormat, ReplayOptions};
use crate::command::transport::RecordingTransport;
use crate::event::event_model::Envelope;
use crate::log::renderer::VirtualSurface;
use crate::panel::controller::Panel;
use crate::panel::error::PanelError;
use crate::report::console::format_console_report;
use crate::report::html::generate_panel_html;
use crate::report::report_model::PanelSnapshot;
use crate::trace::logger::TraceLogger;

/// Panel driven from a recorded stream: commands are recorded, the log is
/// drawn onto an in-memory surface.
pub type HeadlessPanel = Panel<RecordingTransport, VirtualSurface>;

// ============================================================================
// replay subcommand
// ============================================================================

pub fn cmd_replay(options: &ReplayOptions, verbose: u8) -> Result<(), Box<dyn std::error::Error>> {
    let envelopes = load_events(&options.events)?;

    if verbose > 0 {
        eprintln!("Replaying {} messages from {}...", envelopes.len(), options.events);
    }

    let panel = replay(&envelopes, options);
    let output_content = render_output(&panel, options.format)?;

    // Write or print
    match options.output {
        Some(ref path) => std::fs::write(path, &output_content)?,
        None => print!("{}", output_content),
    }

    Ok(())
}

// ============================================================================
// summary subcommand
// ============================================================================

pub fn cmd_summary(
    events: &str,
    persist: bool,
    tab_id: Option<u64>,
) -> Result<(), Box<dyn std::error::Error>> {
    let envelopes = load_events(events)?;
    let mut options = ReplayOptions::for_events(events);
    options.persistent_log = persist;
    options.tab_id = tab_id;

    let panel = replay(&envelopes, &options);
    let snapshot = PanelSnapshot::from_panel(&panel);

    println!("Tab {}: {} messages replayed", snapshot.state.tab_id, envelopes.len());
    println!(
        "Regions: {} ({} active, {} gone)",
        snapshot.regions.len(),
        snapshot.active_regions(),
        snapshot.gone_regions()
    );
    println!("Log entries: {}", snapshot.entries.len());
    println!("Commands sent: {}", panel.transport().sent.len());
    println!("Page initialized: {}", snapshot.state.page_initialized);
    Ok(())
}

// ============================================================================
// Helpers
// ============================================================================

/// Feed `envelopes` through a fresh headless panel configured by `options`.
pub fn replay(envelopes: &[Envelope], options: &ReplayOptions) -> HeadlessPanel {
    let tab_id = options
        .tab_id
        .or_else(|| envelopes.iter().find_map(Envelope::sender_tab))
        .unwrap_or_default();

    let tracer = match options.trace {
        Some(ref path) => TraceLogger::new(path),
        None => TraceLogger::disabled(),
    };

    let mut panel = Panel::new(tab_id, RecordingTransport::new(), VirtualSurface::default())
        .with_tracer(tracer);
    panel.set_persistent_log(options.persistent_log);
    panel.set_acc_name(options.acc_name);
    panel.panel_shown();

    let routed = envelopes.iter().filter(|e| panel.receive(e)).count();
    info!(routed, dropped = envelopes.len() - routed, tab_id, "replay finished");

    if let Some(region) = options.filter {
        if panel.select_region(region) != Some(region) {
            warn!(region = region.0, "filter region never appeared; showing every entry");
        }
    }
    panel
}

/// Render the panel in the requested output format.
pub fn render_output(panel: &HeadlessPanel, format: OutputFormat) -> Result<String, PanelError> {
    let snapshot = PanelSnapshot::from_panel(panel);
    let content = match format {
        OutputFormat::Html => generate_panel_html(&snapshot),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(&snapshot).map_err(|source| {
                PanelError::JsonSerialize {
                    context: "panel snapshot".into(),
                    source,
                }
            })?;
            json.push('\n');
            json
        }
        OutputFormat::Commands => {
            let mut lines = String::new();
            for message in &panel.transport().sent {
                let line = serde_json::to_string(message).map_err(|source| {
                    PanelError::JsonSerialize {
                        context: "outbound command".into(),
                        source,
                    }
                })?;
                lines.push_str(&line);
                lines.push('\n');
            }
            lines
        }
        OutputFormat::Console => format_console_report(&snapshot),
    };
    Ok(content)
}

/// Load a JSONL event recording. Blank lines are skipped; lines that do not
/// parse are reported and skipped.
pub fn load_events(path: &str) -> Result<Vec<Envelope>, PanelError> {
    let content = std::fs::read_to_string(path)?;
    let mut envelopes = Vec::new();
    for (idx, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match parse_event_line(idx + 1, line) {
            Ok(envelope) => envelopes.push(envelope),
            Err(e) => warn!(error = %e, "skipping event"),
        }
    }
    Ok(envelopes)
}

/// Parse one line of a recording.
pub fn parse_event_line(line: usize, json: &str) -> Result<Envelope, PanelError> {
    Envelope::from_json(json).map_err(|source| PanelError::EventParse { line, source })
}
