//! Request and response types exchanged with network clients.
//!
//! All payloads are JSON. Every request type tolerates missing fields so
//! that a malformed request becomes a failure response rather than a decode
//! error wherever possible.

use gridbot_core::Position;
use gridbot_sim::Status;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::command::Command;
use crate::error::GatewayError;

// ── Requests ────────────────────────────────────────────────────────────────

/// A free-form command line, e.g. `{"command": "forward"}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CommandRequest {
    #[serde(default)]
    pub command: String,
}

/// A direction token, used by the diagonal and turn-to-face endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DirectionRequest {
    #[serde(default)]
    pub direction: String,
}

impl DirectionRequest {
    #[must_use]
    pub fn into_diagonal(self) -> Command {
        Command::Diagonal(self.direction.trim().to_lowercase())
    }

    #[must_use]
    pub fn into_face(self) -> Command {
        Command::Face(self.direction.trim().to_lowercase())
    }
}

/// Obstacle editing: `clear`, `reset`, or `toggle` with coordinates.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ObstacleRequest {
    #[serde(default)]
    pub action: String,
    #[serde(default)]
    pub x: Option<i32>,
    #[serde(default)]
    pub y: Option<i32>,
}

impl ObstacleRequest {
    /// Map the request onto a gateway command.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::MissingCoordinate`] for a toggle without both
    /// coordinates and [`GatewayError::InvalidAction`] for any other action.
    pub fn into_command(self) -> Result<Command, GatewayError> {
        match self.action.trim().to_lowercase().as_str() {
            "clear" => Ok(Command::ClearObstacles),
            "reset" => Ok(Command::ResetObstacles),
            "toggle" => match (self.x, self.y) {
                (Some(x), Some(y)) => Ok(Command::ToggleObstacle(Position::new(x, y))),
                _ => Err(GatewayError::MissingCoordinate),
            },
            other => Err(GatewayError::InvalidAction(other.to_string())),
        }
    }
}

// ── Responses ───────────────────────────────────────────────────────────────

/// Uniform reply envelope. Failures are reported in the body with
/// `success: false`; transport-level status is never used.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl ApiResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            data: None,
        }
    }

    pub fn data(data: Value) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            data: None,
        }
    }

    /// Attach a status snapshot to the response.
    #[must_use]
    pub fn with_status(mut self, status: &Status) -> Self {
        self.data = serde_json::to_value(status).ok();
        self
    }

    /// Serialise for the wire. Falls back to a bare failure envelope if
    /// encoding somehow fails.
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        crate::codec::encode(self)
            .unwrap_or_else(|_| br#"{"success":false}"#.to_vec())
    }
}

impl From<&GatewayError> for ApiResponse {
    fn from(err: &GatewayError) -> Self {
        Self::error(err.to_string())
    }
}

// ── Events ──────────────────────────────────────────────────────────────────

/// Broadcast after every successful state-changing request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusEvent {
    pub instance_id: Uuid,
    pub message: String,
    pub status: Status,
}
