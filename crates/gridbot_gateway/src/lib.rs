//! # gridbot_gateway
//!
//! The command gateway between the outside world and a [`Simulator`].
//!
//! This crate provides:
//!
//! - [`cli`]: command-line options shared by the binaries.
//! - [`command`]: the textual command vocabulary and its parser.
//! - [`session`]: an owned simulator instance with reset support.
//! - [`messages`]: JSON request/response types for network clients.
//! - [`codec`]: JSON encoding/decoding helpers.
//! - [`subjects`]: request/reply subject names under a configurable prefix.
//! - [`help`]: the command reference shown to interactive users.
//! - [`error`]: gateway error types.
//!
//! [`Simulator`]: gridbot_sim::Simulator

pub mod cli;
pub mod codec;
pub mod command;
pub mod error;
pub mod help;
pub mod messages;
pub mod session;
pub mod subjects;

pub use cli::SimArgs;
pub use codec::{decode, encode};
pub use command::Command;
pub use error::GatewayError;
pub use messages::{ApiResponse, CommandRequest, DirectionRequest, ObstacleRequest, StatusEvent};
pub use session::Session;
