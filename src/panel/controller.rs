use tracing::{debug, warn};

use crate::command::command_model::{Command, CommandPayload, OutboundMessage, inspect_expression};
use crate::command::dispatcher::CommandDispatcher;
use crate::command::transport::{InspectedWindow, Transport};
use crate::event::event_model::{Envelope, InboundEvent};
use crate::event::router::{self, Effect};
use crate::format::timestamp::{Clock, SystemClock};
use crate::log::entry::{EventLog, LogEntry};
use crate::log::renderer::{LogRenderer, ScrollSurface};
use crate::panel::error::PanelError;
use crate::panel::panel_model::{PanelModel, PanelState};
use crate::region::region_model::RegionId;
use crate::region::registry::RegionRegistry;
use crate::trace::logger::TraceLogger;
use crate::trace::trace::TraceEvent;

// ============================================================================
// Panel — one inspected tab's model, view and outbound channel
// ============================================================================

/// The panel instance. Owns all state for exactly one inspected tab; every
/// inbound event and UI intent runs to completion on `&mut self`.
pub struct Panel<T: Transport, S: ScrollSurface, C: Clock = SystemClock> {
    model: PanelModel,
    renderer: LogRenderer<S>,
    dispatcher: CommandDispatcher<T>,
    clock: C,
    tracer: TraceLogger,
}

impl<T: Transport, S: ScrollSurface> Panel<T, S, SystemClock> {
    pub fn new(tab_id: u64, transport: T, surface: S) -> Self {
        Self::with_clock(tab_id, transport, surface, SystemClock)
    }
}

impl<T: Transport, S: ScrollSurface, C: Clock> Panel<T, S, C> {
    pub fn with_clock(tab_id: u64, transport: T, surface: S, clock: C) -> Self {
        Self {
            model: PanelModel::new(tab_id),
            renderer: LogRenderer::new(surface),
            dispatcher: CommandDispatcher::new(tab_id, transport),
            clock,
            tracer: TraceLogger::disabled(),
        }
    }

    /// Journal inbound events and outbound commands to `tracer`.
    pub fn with_tracer(mut self, tracer: TraceLogger) -> Self {
        self.tracer = tracer;
        self
    }

    // ---- Inbound ----

    /// Accept a relayed message. Messages from another tab are dropped;
    /// messages without sender information are routed.
    pub fn receive(&mut self, envelope: &Envelope) -> bool {
        match envelope.sender_tab() {
            Some(tab) if tab != self.model.state.tab_id => {
                debug!(tab, expected = self.model.state.tab_id, "dropping message from another tab");
                false
            }
            _ => {
                self.route(&envelope.content);
                true
            }
        }
    }

    /// Single entry point for upstream events.
    pub fn route(&mut self, event: &InboundEvent) {
        let effects = router::route(&mut self.model, event, self.clock.now());
        if self.tracer.is_enabled() {
            let mut trace = TraceEvent::inbound(event).with_tab(self.model.state.tab_id);
            if effects.is_empty() && event.action != "initialized" {
                trace = trace.ignored();
            }
            self.tracer.log(&trace);
        }
        self.apply(effects);
    }

    fn apply(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Appended(entry) => self.renderer.append(&entry),
                Effect::LogCleared => self.renderer.clear(),
                Effect::RegionsChanged => self.drop_stale_filter(),
                Effect::Command(command) => self.send(&command),
            }
        }
    }

    /// Clear a filter whose region has no record left.
    fn drop_stale_filter(&mut self) {
        if let Some(region) = self.renderer.filter() {
            if self.model.registry.latest(region).is_none() {
                self.renderer.set_filter(None);
            }
        }
    }

    // ---- Outbound ----

    fn send(&mut self, command: &Command) {
        self.send_command(command.name(), command.payload());
    }

    /// Send a command to the page. Transport failures are logged; the panel
    /// carries on.
    pub fn send_command(&mut self, name: &str, payload: CommandPayload) {
        if self.tracer.is_enabled() {
            let message = OutboundMessage::command(name, payload, self.dispatcher.tab_id());
            self.tracer.log(&TraceEvent::outbound(&message));
        }
        if let Err(e) = self.dispatcher.send_command(name, payload) {
            warn!(command = name, error = %e, "command not delivered");
        }
    }

    // ---- UI intents ----

    /// Panel became visible. Asks the page to start tracking unless it has
    /// already confirmed.
    pub fn panel_shown(&mut self) {
        if !self.model.state.page_initialized {
            self.send(&Command::StartTrack(CommandPayload::NoResume));
        }
    }

    pub fn set_persistent_log(&mut self, on: bool) {
        self.model.state.use_persistent_log = on;
    }

    pub fn toggle_persistent_log(&mut self) -> bool {
        let on = !self.model.state.use_persistent_log;
        self.set_persistent_log(on);
        on
    }

    pub fn set_acc_name(&mut self, on: bool) {
        self.model.state.use_acc_name = on;
        self.renderer.set_show_acc_name(on);
    }

    pub fn toggle_acc_name(&mut self) -> bool {
        let on = !self.model.state.use_acc_name;
        self.set_acc_name(on);
        on
    }

    /// Clear the log and the region index, and tell the page to reset.
    pub fn reset(&mut self) {
        self.renderer.set_filter(None);
        let effects = router::reset(&mut self.model);
        self.apply(effects);
    }

    /// Region index click. Selecting the filtered region again clears the
    /// filter; an id with no row in the index leaves the filter as it was.
    /// Returns the filter now in effect.
    pub fn select_region(&mut self, region: RegionId) -> Option<RegionId> {
        if self.model.registry.latest(region).is_none() {
            debug!(region = region.0, "no such region in the index");
            return self.renderer.filter();
        }
        let next = if self.renderer.filter() == Some(region) {
            None
        } else {
            Some(region)
        };
        self.renderer.set_filter(next);
        next
    }

    pub fn clear_filter(&mut self) {
        self.renderer.set_filter(None);
    }

    /// "Inspect element" link: reveal the node at `path` in the inspected
    /// window's element inspector.
    pub fn inspect<W: InspectedWindow>(&self, window: &mut W, path: &str) -> Result<(), PanelError> {
        window.eval(&inspect_expression(path))
    }

    // ---- Accessors ----

    pub fn model(&self) -> &PanelModel {
        &self.model
    }

    pub fn state(&self) -> &PanelState {
        &self.model.state
    }

    pub fn registry(&self) -> &RegionRegistry {
        &self.model.registry
    }

    pub fn log(&self) -> &EventLog {
        &self.model.log
    }

    /// Log entries passing the current filter.
    pub fn visible_entries(&self) -> Vec<&LogEntry> {
        self.renderer.visible(&self.model.log).collect()
    }

    pub fn renderer(&self) -> &LogRenderer<S> {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut LogRenderer<S> {
        &mut self.renderer
    }

    pub fn transport(&self) -> &T {
        self.dispatcher.transport()
    }
}
