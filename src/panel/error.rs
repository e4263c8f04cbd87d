use thiserror::Error;

#[derive(Debug, Error)]
pub enum PanelError {
    /// Transport refused or failed to relay a command
    #[error("Transport failed to send '{command}': {reason}")]
    Transport { command: String, reason: String },

    /// Inspected window could not evaluate an expression
    #[error("Inspected window eval failed: {0}")]
    Eval(String),

    /// A recorded event line is not valid JSON or not an event
    #[error("Invalid event on line {line}: {source}")]
    EventParse {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("JSON serialize error ({context}): {source}")]
    JsonSerialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid config file: {0}")]
    Config(#[from] serde_yaml::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
