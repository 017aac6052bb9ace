//! Snapshot models matching the census service wire format.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::UserRecord;
use crate::errors::CensusError;

/// One entry of the snapshot series listing, newest first.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SnapshotSummary {
    pub id: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub record_count: u64,
}

/// An immutable census of per-user, per-channel message activity taken at
/// one instant.
///
/// The engine never mutates a snapshot after construction; every derived
/// value is recomputed on demand from the records held here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Snapshot {
    pub id: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub users: Vec<UserRecord>,
}

/// Wire shape of the detail endpoint: snapshot metadata and user records
/// arrive side by side.
#[derive(Debug, Deserialize)]
struct SnapshotDetail {
    snapshot: SnapshotMeta,
    users: Vec<UserRecord>,
}

#[derive(Debug, Deserialize)]
struct SnapshotMeta {
    id: String,
    name: String,
    created_at: DateTime<Utc>,
}

impl Snapshot {
    /// Parse a detail response body into a snapshot.
    ///
    /// A record missing required fields is a [`CensusError::MalformedRecord`];
    /// it is never defaulted to zero.
    pub fn from_json(body: &str) -> Result<Self, CensusError> {
        let detail: SnapshotDetail = serde_json::from_str(body)?;
        Ok(Self {
            id: detail.snapshot.id,
            name: detail.snapshot.name,
            created_at: detail.snapshot.created_at,
            users: detail.users,
        })
    }

    /// Look up a user record by id.
    pub fn user(&self, user_id: u64) -> Option<&UserRecord> {
        self.users.iter().find(|u| u.user_id == user_id)
    }

    /// Drop users holding none of the tracked roles; an empty list keeps
    /// everyone. Applied at ingestion, before the snapshot is shared.
    pub fn retain_tracked(mut self, tracked: &[String]) -> Self {
        if !tracked.is_empty() {
            self.users.retain(|u| u.roles.intersects(tracked));
        }
        self
    }

    /// Summary form of this snapshot, as the listing endpoint would report it.
    pub fn summary(&self) -> SnapshotSummary {
        SnapshotSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            created_at: self.created_at,
            record_count: self.users.len() as u64,
        }
    }
}
