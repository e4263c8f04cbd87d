use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

use tracing::warn;

use crate::panel::error::PanelError;
use crate::region::region_model::RegionId;

// ============================================================================
// CLI Argument Parsing (clap derive)
// ============================================================================

#[derive(Parser, Debug)]
#[command(
    name = "live-region-panel",
    version,
    about = "Replay and inspect ARIA live-region activity recorded from a page"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to config file (default: live-region-panel.yaml in current dir)
    #[arg(long, global = true)]
    pub config: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Replay a recorded event stream and write the resulting panel view
    Replay {
        /// JSONL file of relayed messages, one envelope or bare event per line
        #[arg(long)]
        events: String,

        /// Keep regions and log history across top-level page loads
        #[arg(long)]
        persist: bool,

        /// Show accessible names instead of raw region markup
        #[arg(long)]
        acc_name: bool,

        /// Inspected tab id (default: sender of the first message)
        #[arg(long)]
        tab_id: Option<u64>,

        /// Only show log entries for this region number
        #[arg(long)]
        filter: Option<u64>,

        /// Output format: console, html, json, commands
        #[arg(long)]
        format: Option<String>,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Append a JSONL journal of routed events and sent commands
        #[arg(long)]
        trace: Option<String>,
    },

    /// Replay an event stream and print region and log counts
    Summary {
        /// JSONL file of relayed messages
        #[arg(long)]
        events: String,

        /// Keep regions and log history across top-level page loads
        #[arg(long)]
        persist: bool,

        /// Inspected tab id (default: sender of the first message)
        #[arg(long)]
        tab_id: Option<u64>,
    },
}

// ============================================================================
// Config File Model (optional YAML)
// ============================================================================

/// Optional YAML config file: `live-region-panel.yaml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub panel: PanelConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub trace: TraceConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PanelConfig {
    #[serde(default)]
    pub persistent_log: bool,

    #[serde(default)]
    pub acc_name: bool,

    pub tab_id: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_console")]
    pub format: String,

    pub output: Option<String>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: "console".to_string(),
            output: None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TraceConfig {
    pub path: Option<String>,
}

fn default_console() -> String { "console".to_string() }

// ============================================================================
// Config File Loading
// ============================================================================

/// Load config from a YAML file. Returns defaults if file is missing or malformed.
pub fn load_config(path: Option<&str>) -> AppConfig {
    let config_path = path.unwrap_or("live-region-panel.yaml");
    match try_load_config(config_path) {
        Ok(config) => config,
        Err(PanelError::Io(_)) => AppConfig::default(),
        Err(e) => {
            warn!(path = config_path, error = %e, "ignoring config file");
            AppConfig::default()
        }
    }
}

/// Read and parse a YAML config file.
pub fn try_load_config(path: &str) -> Result<AppConfig, PanelError> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_yaml::from_str(&content)?)
}

// ============================================================================
// Resolved replay options (CLI > config > defaults)
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Console,
    Html,
    Json,
    Commands,
}

impl OutputFormat {
    /// Unknown names fall back to console output.
    pub fn from_name(name: &str) -> Self {
        match name {
            "html" => OutputFormat::Html,
            "json" => OutputFormat::Json,
            "commands" => OutputFormat::Commands,
            _ => OutputFormat::Console,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ReplayOptions {
    pub events: String,
    pub tab_id: Option<u64>,
    pub persistent_log: bool,
    pub acc_name: bool,
    pub filter: Option<RegionId>,
    pub format: OutputFormat,
    pub output: Option<String>,
    pub trace: Option<String>,
}

impl ReplayOptions {
    /// Options for replaying `events` with nothing but defaults.
    pub fn for_events(events: &str) -> Self {
        Self {
            events: events.to_string(),
            tab_id: None,
            persistent_log: false,
            acc_name: false,
            filter: None,
            format: OutputFormat::Console,
            output: None,
            trace: None,
        }
    }
}

/// Merge `replay` arguments with the config file. Boolean switches can only
/// turn a setting on.
pub fn build_replay_options(
    events: &str,
    persist: bool,
    acc_name: bool,
    tab_id: Option<u64>,
    filter: Option<u64>,
    format: Option<&str>,
    output: Option<&str>,
    trace: Option<&str>,
    config: &AppConfig,
) -> ReplayOptions {
    ReplayOptions {
        events: events.to_string(),
        tab_id: tab_id.or(config.panel.tab_id),
        persistent_log: persist || config.panel.persistent_log,
        acc_name: acc_name || config.panel.acc_name,
        filter: filter.map(RegionId),
        format: OutputFormat::from_name(format.unwrap_or(config.output.format.as_str())),
        output: output.map(str::to_string).or_else(|| config.output.output.clone()),
        trace: trace.map(str::to_string).or_else(|| config.trace.path.clone()),
    }
}
