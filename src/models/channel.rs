//! Channel activity model matching the census service wire format.

use serde::{Deserialize, Serialize};

/// One channel's contribution to a user's message total, as of a snapshot.
///
/// `channel_id` is unique within a user's channel list in a given snapshot;
/// `message_count` is scoped to this user+channel+snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChannelActivity {
    pub channel_id: u64,
    pub channel_name: String,
    pub message_count: u64,
}
