//! Windowed breakdown calculator.

use std::collections::HashMap;

use crate::models::{ActivityBreakdown, Snapshot, UserRecord};

/// Compute the rolling per-bucket trend for one user across the trailing
/// window.
///
/// `buckets[i]` is the snapshot at the `(i+1)`-th bucket boundary — the
/// batch resolved from [`Config::bucket_offsets`](crate::config::Config::bucket_offsets),
/// oldest boundary last. Any entry may be absent; a missing snapshot, or a
/// user or channel missing from a present snapshot, contributes 0 to each
/// side of a bucket independently.
///
/// Bucket 0 spans current activity against the first boundary; bucket `i`
/// spans boundary `i-1` against boundary `i`. The output length equals
/// `buckets.len()`, so an all-absent window yields the user's full current
/// total in bucket 0 and zeros elsewhere.
///
/// Channel series follow identical boundaries over a single channel's
/// count and are keyed by `channel_id` — display reordering never shifts
/// a channel onto another channel's buckets.
pub fn compute_breakdown(
    current: &UserRecord,
    buckets: &[Option<&Snapshot>],
) -> ActivityBreakdown {
    let mut total_buckets = Vec::with_capacity(buckets.len());
    if !buckets.is_empty() {
        total_buckets.push(current.total_messages as i64 - total_at(buckets, current.user_id, 0));
        for i in 1..buckets.len() {
            total_buckets
                .push(total_at(buckets, current.user_id, i - 1) - total_at(buckets, current.user_id, i));
        }
    }

    let mut channel_buckets = HashMap::with_capacity(current.channels.len());
    for channel in &current.channels {
        let mut series = Vec::with_capacity(buckets.len());
        if !buckets.is_empty() {
            series.push(
                channel.message_count as i64
                    - count_at(buckets, current.user_id, channel.channel_id, 0),
            );
            for i in 1..buckets.len() {
                series.push(
                    count_at(buckets, current.user_id, channel.channel_id, i - 1)
                        - count_at(buckets, current.user_id, channel.channel_id, i),
                );
            }
        }
        channel_buckets.insert(channel.channel_id, series);
    }

    ActivityBreakdown {
        total_buckets,
        channel_buckets,
    }
}

/// The matching user record in the `i`-th bucket snapshot, if both exist.
fn user_at<'s>(buckets: &[Option<&'s Snapshot>], user_id: u64, i: usize) -> Option<&'s UserRecord> {
    buckets
        .get(i)
        .copied()
        .flatten()
        .and_then(|snapshot| snapshot.user(user_id))
}

/// The user's total at boundary `i`; absence on either level reads 0.
fn total_at(buckets: &[Option<&Snapshot>], user_id: u64, i: usize) -> i64 {
    user_at(buckets, user_id, i).map_or(0, |u| u.total_messages as i64)
}

/// One channel's count at boundary `i`; absence on any level reads 0.
fn count_at(buckets: &[Option<&Snapshot>], user_id: u64, channel_id: u64, i: usize) -> i64 {
    user_at(buckets, user_id, i)
        .and_then(|u| u.channel(channel_id))
        .map_or(0, |c| c.message_count as i64)
}
