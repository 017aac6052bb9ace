//! Data models for the census activity engine.
//!
//! Inbound models mirror the remote census service's wire format exactly;
//! derived models carry the camelCase shape the presentation layer expects.

mod breakdown;
mod channel;
mod delta;
mod snapshot;
mod user;

pub use breakdown::*;
pub use channel::*;
pub use delta::*;
pub use snapshot::*;
pub use user::*;
