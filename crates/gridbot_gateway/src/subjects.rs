//! Request/reply subject hierarchy.
//!
//! Every subject lives under a configurable prefix (default `gridbot`), so
//! several simulators can share one NATS cluster.
//!
//! ```text
//! {prefix}.status       : structured status snapshot
//! {prefix}.command      : run a command line
//! {prefix}.diagonal     : diagonal move
//! {prefix}.turn         : turn to face an orientation
//! {prefix}.obstacles    : clear / reset / toggle obstacles
//! {prefix}.report       : text status report
//! {prefix}.grid         : rendered grid
//! {prefix}.events.state : broadcast after every successful change
//! ```

/// Default subject prefix.
pub const DEFAULT_PREFIX: &str = "gridbot";

pub const STATUS: &str = "status";
pub const COMMAND: &str = "command";
pub const DIAGONAL: &str = "diagonal";
pub const TURN: &str = "turn";
pub const OBSTACLES: &str = "obstacles";
pub const REPORT: &str = "report";
pub const GRID: &str = "grid";

/// `{prefix}.{operation}`
#[must_use]
pub fn subject(prefix: &str, operation: &str) -> String {
    format!("{prefix}.{operation}")
}

/// Wildcard covering every request subject: `{prefix}.>`
#[must_use]
pub fn wildcard(prefix: &str) -> String {
    format!("{prefix}.>")
}

/// `{prefix}.events.state`
#[must_use]
pub fn state_event(prefix: &str) -> String {
    format!("{prefix}.events.state")
}

/// Strip `prefix.` from `subject`, yielding the operation name.
#[must_use]
pub fn operation<'a>(prefix: &str, subject: &'a str) -> Option<&'a str> {
    subject.strip_prefix(prefix)?.strip_prefix('.')
}
