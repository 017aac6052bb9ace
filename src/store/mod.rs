//! Snapshot store abstraction.
//!
//! The engine never fetches data itself; it consumes snapshots supplied by
//! a store. Transport, caching policy, and authentication live behind this
//! trait, outside the crate.

use std::future::Future;

use crate::errors::CensusError;
use crate::models::{Snapshot, SnapshotSummary};

/// A source of census snapshots.
///
/// Implementations guarantee the listing is ordered newest-first; the
/// window selector depends on that ordering. All methods return `Send`
/// futures so the trait can be driven from a multi-threaded async runtime.
pub trait SnapshotStore: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    /// List snapshot summaries, most recent first.
    fn fetch_snapshot_list(
        &self,
    ) -> impl Future<Output = Result<Vec<SnapshotSummary>, Self::Error>> + Send + '_;

    /// Fetch the full per-user, per-channel records of one snapshot.
    fn fetch_snapshot_detail<'a>(
        &'a self,
        id: &'a str,
    ) -> impl Future<Output = Result<Snapshot, Self::Error>> + Send + 'a;
}

/// An in-memory store over already-fetched snapshots.
///
/// Plays the role of the retrieval layer's snapshot cache: embedders that
/// do their own transport hand their snapshots over once and the engine
/// reads them as immutable input from then on.
#[derive(Debug, Clone, Default)]
pub struct MemorySnapshotStore {
    snapshots: Vec<Snapshot>,
}

impl MemorySnapshotStore {
    /// Build a store from snapshots in any order; they are held
    /// newest-first regardless of how they arrive.
    pub fn new(mut snapshots: Vec<Snapshot>) -> Self {
        snapshots.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Self { snapshots }
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}

impl SnapshotStore for MemorySnapshotStore {
    type Error = CensusError;

    fn fetch_snapshot_list(
        &self,
    ) -> impl Future<Output = Result<Vec<SnapshotSummary>, CensusError>> + Send + '_ {
        async move {
            tracing::debug!("Listing {} cached snapshots", self.snapshots.len());
            Ok(self.snapshots.iter().map(Snapshot::summary).collect())
        }
    }

    fn fetch_snapshot_detail<'a>(
        &'a self,
        id: &'a str,
    ) -> impl Future<Output = Result<Snapshot, CensusError>> + Send + 'a {
        async move {
            self.snapshots
                .iter()
                .find(|s| s.id == id)
                .cloned()
                .ok_or_else(|| CensusError::SnapshotNotFound(format!("Snapshot {} not found", id)))
        }
    }
}
