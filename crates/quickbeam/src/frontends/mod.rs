//! Parser frontends for Quickbeam
//!
//! Implementations of the [`Frontend`](crate::frontend::Frontend) trait.

pub mod jsep;
pub mod json;

pub use jsep::{default_frontend, JsepFrontend};
pub use json::JsonFrontend;
