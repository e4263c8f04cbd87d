use crate::command::command_model::OutboundMessage;
use crate::panel::error::PanelError;

// ============================================================================
// Collaborators on the far side of the panel
// ============================================================================

/// Message relay towards the inspected page.
pub trait Transport {
    fn post(&mut self, message: &OutboundMessage) -> Result<(), PanelError>;
}

/// The inspected window's script evaluation capability.
pub trait InspectedWindow {
    fn eval(&mut self, expression: &str) -> Result<(), PanelError>;
}

/// Transport that keeps every posted message, for headless panels.
#[derive(Debug, Clone, Default)]
pub struct RecordingTransport {
    pub sent: Vec<OutboundMessage>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Names of the posted commands, in order.
    pub fn command_names(&self) -> Vec<&str> {
        self.sent.iter().map(|m| m.content.as_str()).collect()
    }
}

impl Transport for RecordingTransport {
    fn post(&mut self, message: &OutboundMessage) -> Result<(), PanelError> {
        self.sent.push(message.clone());
        Ok(())
    }
}

/// Inspected window that records evaluated expressions.
#[derive(Debug, Clone, Default)]
pub struct RecordingWindow {
    pub evaluated: Vec<String>,
}

impl InspectedWindow for RecordingWindow {
    fn eval(&mut self, expression: &str) -> Result<(), PanelError> {
        self.evaluated.push(expression.to_string());
        Ok(())
    }
}
