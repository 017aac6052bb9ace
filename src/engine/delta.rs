//! Point-to-point delta calculator.

use crate::models::{ChannelChange, MessageDelta, Snapshot, UserRecord};

/// Compute the message delta for `current` against a baseline snapshot.
///
/// An absent baseline (no comparison snapshot could be resolved, e.g. the
/// series is too short) yields `None` — callers render that as "not
/// applicable", never as zero change. A baseline that exists but holds no
/// matching user means the user is newly observed: the whole total, and
/// every channel's full count, is the change.
///
/// Per-channel changes are matched by `channel_id` and computed only for
/// channels the user is currently active in; channels present only in the
/// baseline are not surfaced.
pub fn compute_delta(current: &UserRecord, baseline: Option<&Snapshot>) -> Option<MessageDelta> {
    let baseline = baseline?;

    let previous = baseline.user(current.user_id);

    let change = match previous {
        Some(old) => current.total_messages as i64 - old.total_messages as i64,
        None => current.total_messages as i64,
    };

    let channel_changes = current
        .channels
        .iter()
        .map(|channel| {
            let old_count = previous
                .and_then(|old| old.channel(channel.channel_id))
                .map_or(0, |old| old.message_count as i64);

            ChannelChange {
                channel_id: channel.channel_id,
                channel_name: channel.channel_name.clone(),
                message_count: channel.message_count,
                change: channel.message_count as i64 - old_count,
            }
        })
        .collect();

    Some(MessageDelta {
        total: current.total_messages,
        change,
        channel_changes,
    })
}
