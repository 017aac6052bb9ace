//! Activity ranking engine.
//!
//! Filters and orders a user collection for display. Filters compose
//! conjunctively; sorting is deterministic, with ascending `user_id`
//! breaking ties in both directions.

use std::cmp::Ordering;

use crate::engine::compute_delta;
use crate::models::{Snapshot, UserRecord};

/// Filter criteria for [`rank`]. All criteria must pass; defaults pass
/// everything.
#[derive(Debug, Clone, Default)]
pub struct Filters {
    /// Case-insensitive substring match on username, or literal substring
    /// match on the stringified user id
    pub search: Option<String>,
    /// Exact role-tag membership; `None` matches any role
    pub role: Option<String>,
    /// Selected channel names; a non-empty selection requires activity
    /// (a positive message count) in at least one selected channel
    pub channels: Vec<String>,
}

impl Filters {
    fn matches(&self, user: &UserRecord) -> bool {
        if let Some(search) = &self.search {
            let matches_name = user
                .username
                .to_lowercase()
                .contains(&search.to_lowercase());
            let matches_id = user.user_id.to_string().contains(search.as_str());
            if !matches_name && !matches_id {
                return false;
            }
        }

        if let Some(role) = &self.role {
            if !user.roles.contains(role) {
                return false;
            }
        }

        if !self.channels.is_empty() {
            // Zero-count membership in a selected channel is not activity.
            let active = user.channels.iter().any(|c| {
                c.message_count > 0 && self.channels.iter().any(|name| name == &c.channel_name)
            });
            if !active {
                return false;
            }
        }

        true
    }
}

/// Sort key for [`rank`].
#[derive(Debug, Clone, Copy)]
pub enum SortKey<'a> {
    /// Raw total message count from the current snapshot
    TotalMessages,
    /// Signed message change against a comparison snapshot (daily or
    /// weekly, per the caller's window selection); a user with no
    /// resolvable delta sorts as zero change
    MessageChange(Option<&'a Snapshot>),
}

impl SortKey<'_> {
    fn value_for(&self, user: &UserRecord) -> i64 {
        match self {
            SortKey::TotalMessages => user.total_messages as i64,
            SortKey::MessageChange(baseline) => {
                compute_delta(user, *baseline).map_or(0, |delta| delta.change)
            }
        }
    }
}

/// Sort direction for [`rank`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "asc" => Some(SortDirection::Ascending),
            "desc" => Some(SortDirection::Descending),
            _ => None,
        }
    }
}

/// Filter and order a user collection.
///
/// Returns a new ordered view of borrowed records; the input collection is
/// never mutated. Equal sort keys order by ascending `user_id` regardless
/// of direction, so the result is stable across runs.
pub fn rank<'u>(
    users: &'u [UserRecord],
    filters: &Filters,
    sort: SortKey<'_>,
    direction: SortDirection,
) -> Vec<&'u UserRecord> {
    let mut ranked: Vec<(&UserRecord, i64)> = users
        .iter()
        .filter(|user| filters.matches(user))
        .map(|user| (user, sort.value_for(user)))
        .collect();

    ranked.sort_unstable_by(|(a, key_a), (b, key_b)| {
        let primary = match direction {
            SortDirection::Descending => key_b.cmp(key_a),
            SortDirection::Ascending => key_a.cmp(key_b),
        };
        match primary {
            Ordering::Equal => a.user_id.cmp(&b.user_id),
            ordering => ordering,
        }
    });

    tracing::debug!("Ranked {} of {} users", ranked.len(), users.len());

    ranked.into_iter().map(|(user, _)| user).collect()
}

/// Deduplicated channel names across a user collection, for the channel
/// filter list.
///
/// Names containing any priority keyword (case-insensitive) surface first;
/// encounter order is preserved within each group.
pub fn unique_channels(users: &[UserRecord], priority_keywords: &[String]) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for user in users {
        for channel in &user.channels {
            if !names.contains(&channel.channel_name) {
                names.push(channel.channel_name.clone());
            }
        }
    }

    let has_priority = |name: &str| {
        let name = name.to_lowercase();
        priority_keywords
            .iter()
            .any(|keyword| name.contains(&keyword.to_lowercase()))
    };
    names.sort_by_key(|name| !has_priority(name));

    names
}
