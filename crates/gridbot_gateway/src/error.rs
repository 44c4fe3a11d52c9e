//! Gateway error types.

use gridbot_sim::SimError;

/// Errors surfaced to gateway clients. `Display` is the client-facing text.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// The input did not match any known command.
    #[error("Unknown command '{0}'. Type 'help' for available commands.")]
    UnknownCommand(String),

    /// An obstacle toggle was requested without both coordinates.
    #[error("Missing x or y coordinate")]
    MissingCoordinate,

    /// A coordinate token was not an integer.
    #[error("Invalid coordinate '{0}'")]
    InvalidCoordinate(String),

    /// An obstacle request named an action other than clear/reset/toggle.
    #[error("Invalid action '{0}'")]
    InvalidAction(String),

    /// Failed to encode a response.
    #[error("failed to encode message: {0}")]
    Encode(#[source] serde_json::Error),

    /// Failed to decode a request.
    #[error("invalid request: {0}")]
    Decode(#[source] serde_json::Error),

    /// The simulator rejected the command.
    #[error(transparent)]
    Simulation(#[from] SimError),
}
