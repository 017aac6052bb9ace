//! Point-to-point delta models, shaped for the presentation layer.

use serde::{Deserialize, Serialize};

/// The change in one channel's message count between two snapshots.
///
/// Carries the newer snapshot's count alongside the signed change so a
/// caller can render both without a second lookup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ChannelChange {
    pub channel_id: u64,
    pub channel_name: String,
    pub message_count: u64,
    pub change: i64,
}

/// The message delta for one user between two snapshots.
///
/// Derived, never persisted: recomputed on demand and cheap to discard.
/// `change` may be negative, e.g. after an upstream data correction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MessageDelta {
    /// The newer snapshot's total message count
    pub total: u64,
    /// Signed change against the baseline (0 baseline for a new user)
    pub change: i64,
    /// Per-channel changes for every channel the user is currently active
    /// in; channels present only in the baseline are not surfaced
    pub channel_changes: Vec<ChannelChange>,
}

impl MessageDelta {
    /// Look up the change for one channel by id.
    pub fn channel_change(&self, channel_id: u64) -> Option<&ChannelChange> {
        self.channel_changes
            .iter()
            .find(|c| c.channel_id == channel_id)
    }
}
