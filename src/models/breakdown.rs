//! Rolling windowed breakdown models, shaped for the presentation layer.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Per-bucket signed message deltas for one user across the trailing
/// window, plus a parallel series for each of the user's channels.
///
/// Channel series are keyed by `channel_id`, never by position: however the
/// caller reorders or filters channels for display, a channel's buckets are
/// found under its id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ActivityBreakdown {
    /// One signed delta per bucket, most recent span first
    pub total_buckets: Vec<i64>,
    /// Bucket series per channel the user is currently active in
    pub channel_buckets: HashMap<u64, Vec<i64>>,
}

impl ActivityBreakdown {
    /// Bucket series for one channel by id.
    pub fn channel(&self, channel_id: u64) -> Option<&[i64]> {
        self.channel_buckets.get(&channel_id).map(Vec::as_slice)
    }

    /// Number of buckets in the window.
    pub fn bucket_count(&self) -> usize {
        self.total_buckets.len()
    }
}
