use tracing::debug;

use crate::command::command_model::{Command, CommandPayload, OutboundMessage};
use crate::command::transport::Transport;
use crate::panel::error::PanelError;

/// Stamps outbound commands with the inspected tab id and hands them to the
/// transport. Fire-and-forget: no reply is awaited.
#[derive(Debug)]
pub struct CommandDispatcher<T: Transport> {
    tab_id: u64,
    transport: T,
}

impl<T: Transport> CommandDispatcher<T> {
    pub fn new(tab_id: u64, transport: T) -> Self {
        Self { tab_id, transport }
    }

    pub fn send_command(&mut self, name: &str, payload: CommandPayload) -> Result<(), PanelError> {
        let message = OutboundMessage::command(name, payload, self.tab_id);
        debug!(command = name, tab_id = self.tab_id, "sending command");
        self.transport.post(&message)
    }

    pub fn dispatch(&mut self, command: &Command) -> Result<(), PanelError> {
        self.send_command(command.name(), command.payload())
    }

    pub fn tab_id(&self) -> u64 {
        self.tab_id
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }
}
