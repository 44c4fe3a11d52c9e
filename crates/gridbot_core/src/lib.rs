//! # gridbot_core
//!
//! Value types shared by every gridbot crate.
//!
//! This crate provides:
//!
//! - [`Orientation`]: the four cardinal facings and their turn cycle.
//! - [`Position`]: signed grid coordinates.
//! - [`Diagonal`]: the four diagonal step directions.
//! - [`ParseError`]: errors produced when parsing command tokens.

pub mod diagonal;
pub mod error;
pub mod orientation;
pub mod position;

pub use diagonal::Diagonal;
pub use error::ParseError;
pub use orientation::Orientation;
pub use position::Position;
