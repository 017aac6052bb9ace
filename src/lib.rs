//! Census activity diff engine.
//!
//! Computes point-to-point message deltas, rolling windowed breakdowns,
//! and filtered, sorted activity rankings from immutable census snapshots
//! of a community's per-user, per-channel message activity.
//!
//! The engine is pure computation: it never fetches, caches, or persists
//! snapshots. Retrieval lives behind the [`store::SnapshotStore`] seam and
//! is owned by the embedding application.

pub mod config;
pub mod engine;
pub mod errors;
pub mod models;
pub mod store;

pub use config::Config;
pub use engine::{
    compute_breakdown, compute_delta, rank, select_window, unique_channels, Filters,
    SortDirection, SortKey, WindowSelection,
};
pub use errors::CensusError;
pub use models::{
    ActivityBreakdown, ChannelActivity, ChannelChange, MessageDelta, RoleSet, Snapshot,
    SnapshotSummary, UserRecord,
};
pub use store::{MemorySnapshotStore, SnapshotStore};
