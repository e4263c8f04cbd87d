use chrono::NaiveTime;
use tracing::{debug, warn};

use crate::command::command_model::{Command, CommandPayload};
use crate::event::event_model::{InboundEvent, PanelEvent, RegionDetail};
use crate::log::entry::LogEntry;
use crate::panel::panel_model::PanelModel;
use crate::region::region_model::RegionId;

// ============================================================================
// Router — event → model transition + effects for the view and the transport
// ============================================================================

/// Change the view or the transport must react to after a transition.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// An entry was appended to the log.
    Appended(LogEntry),
    /// The log was emptied.
    LogCleared,
    /// The region index changed.
    RegionsChanged,
    /// A command must go out to the page.
    Command(Command),
}

/// Classify and apply one inbound event. Unknown actions change nothing.
pub fn route(model: &mut PanelModel, event: &InboundEvent, time: NaiveTime) -> Vec<Effect> {
    match PanelEvent::from_inbound(event) {
        Some(typed) => reduce(model, typed, time),
        None => {
            debug!(action = %event.action, "ignoring unknown action");
            Vec::new()
        }
    }
}

/// Apply one typed event to the model.
pub fn reduce(model: &mut PanelModel, event: PanelEvent, time: NaiveTime) -> Vec<Effect> {
    let mut effects = Vec::new();

    match event {
        PanelEvent::Change(detail) => {
            append(model, &mut effects, LogEntry::Detail { detail, time });
        }

        PanelEvent::Watch { detail, in_dom } => {
            match detail.region {
                Some(region) => {
                    watch(model, &mut effects, region, &detail, in_dom, time);
                }
                None => warn!("watch event without a usable regionNum"),
            }
            append(model, &mut effects, LogEntry::Detail { detail, time });
        }

        PanelEvent::Unwatch(Some(region)) => {
            if model.registry.mark_gone(region) {
                effects.push(Effect::RegionsChanged);
            } else {
                debug!(%region, "unwatch for a region with no active record");
            }
            append(model, &mut effects, LogEntry::Removed { region, time });
        }

        PanelEvent::Unwatch(None) => {
            warn!("unwatch event without a usable region id");
        }

        PanelEvent::Initialized => {
            model.state.page_initialized = true;
        }

        PanelEvent::Ready { framed, url } => {
            if !framed {
                reconcile_page_load(model, &mut effects, url, time);
            }
            effects.push(Effect::Command(Command::StartTrack(resume_payload(model))));
        }
    }

    effects
}

/// Forget every region and every entry, then ask the page to reset.
pub fn reset(model: &mut PanelModel) -> Vec<Effect> {
    model.log.clear();
    model.registry.clear();
    vec![
        Effect::LogCleared,
        Effect::RegionsChanged,
        Effect::Command(Command::Reset),
    ]
}

fn watch(
    model: &mut PanelModel,
    effects: &mut Vec<Effect>,
    region: RegionId,
    detail: &RegionDetail,
    in_dom: bool,
    time: NaiveTime,
) {
    let path = detail.path.clone().unwrap_or_default();
    model.registry.upsert_active(region, &path);
    model.state.last_watched_region = Some(region);
    effects.push(Effect::RegionsChanged);
    append(
        model,
        effects,
        LogEntry::Discovered {
            region,
            path,
            in_dom,
            time,
        },
    );
}

/// Top-level navigation: wipe everything, or keep history and mark every
/// region Gone when the persistent log is on.
fn reconcile_page_load(model: &mut PanelModel, effects: &mut Vec<Effect>, url: String, time: NaiveTime) {
    if model.state.use_persistent_log {
        model.registry.mark_all_gone();
    } else {
        model.log.clear();
        model.registry.clear();
        effects.push(Effect::LogCleared);
    }
    effects.push(Effect::RegionsChanged);
    append(model, effects, LogEntry::PageLoaded { url, time });
}

fn resume_payload(model: &PanelModel) -> CommandPayload {
    match (model.state.use_persistent_log, model.state.last_watched_region) {
        (true, Some(region)) => CommandPayload::Region(region),
        _ => CommandPayload::NoResume,
    }
}

fn append(model: &mut PanelModel, effects: &mut Vec<Effect>, entry: LogEntry) {
    model.log.append(entry.clone());
    effects.push(Effect::Appended(entry));
}
