//! Token parsing errors.

/// Errors that can occur when parsing a direction or orientation token.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The token does not name a diagonal direction.
    #[error("Invalid diagonal direction '{0}'. Use: ne, se, sw, nw")]
    InvalidDirection(String),

    /// The token does not name a cardinal orientation.
    #[error("Invalid direction: {0}")]
    InvalidOrientation(String),
}
