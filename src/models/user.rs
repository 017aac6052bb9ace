//! User record model matching the census service wire format.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::ChannelActivity;

/// One user's activity as of a snapshot.
///
/// `user_id` is the identity key across snapshots; `username` is display
/// only and may change between censuses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserRecord {
    pub user_id: u64,
    pub username: String,
    pub roles: RoleSet,
    pub total_messages: u64,
    pub channels: Vec<ChannelActivity>,
}

impl UserRecord {
    /// Look up one of this user's channels by id.
    pub fn channel(&self, channel_id: u64) -> Option<&ChannelActivity> {
        self.channels.iter().find(|c| c.channel_id == channel_id)
    }

    /// Channels ordered by descending message count, for display.
    ///
    /// Returns a new view; the record's own channel order is untouched so
    /// that id-keyed correlations remain valid.
    pub fn channels_by_activity(&self) -> Vec<&ChannelActivity> {
        let mut channels: Vec<&ChannelActivity> = self.channels.iter().collect();
        channels.sort_by(|a, b| b.message_count.cmp(&a.message_count));
        channels
    }
}

/// A user's role tags.
///
/// Serialized as a single `", "`-delimited string in transit; parsed once
/// at deserialization into a deduplicated, order-preserving set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoleSet(Vec<String>);

impl RoleSet {
    /// Build a set from an iterator of tags, dropping duplicates.
    pub fn new<I, S>(roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = Vec::new();
        for role in roles {
            let role = role.into();
            if !role.is_empty() && !set.contains(&role) {
                set.push(role);
            }
        }
        Self(set)
    }

    /// Parse the delimited transit form, e.g. `"Moderator, Contributor"`.
    pub fn from_delimited(s: &str) -> Self {
        Self::new(s.split(',').map(|r| r.trim()).filter(|r| !r.is_empty()))
    }

    /// Serialize back to the delimited transit form.
    pub fn to_delimited(&self) -> String {
        self.0.join(", ")
    }

    /// Exact tag membership.
    pub fn contains(&self, role: &str) -> bool {
        self.0.iter().any(|r| r == role)
    }

    /// True if any tag appears in `roles`.
    pub fn intersects(&self, roles: &[String]) -> bool {
        self.0.iter().any(|r| roles.contains(r))
    }

    /// Tags restricted to `priority` membership, ordered by their position
    /// in `priority` — the display ordering for role lists.
    pub fn display_order<'a>(&'a self, priority: &[String]) -> Vec<&'a str> {
        let mut roles: Vec<(usize, &str)> = self
            .0
            .iter()
            .filter_map(|r| {
                priority
                    .iter()
                    .position(|p| p == r)
                    .map(|idx| (idx, r.as_str()))
            })
            .collect();
        roles.sort_by_key(|(idx, _)| *idx);
        roles.into_iter().map(|(_, r)| r).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|r| r.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for RoleSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_delimited())
    }
}

impl<'de> Deserialize<'de> for RoleSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(RoleSet::from_delimited(&s))
    }
}
