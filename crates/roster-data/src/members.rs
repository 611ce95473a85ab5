use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Member filter. All set fields must match.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct MemberFilter {
    pub email: Option<String>,
    pub has_paid_dues: Option<bool>,
    pub group: Option<String>,
}

impl MemberFilter {
    /// Filter matching exactly one email
    pub fn email(email: &str) -> Self {
        Self {
            email: Some(email.to_string()),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub email: String,
    pub has_paid_dues: bool,
    #[sqlx(json)]
    pub groups: BTreeSet<String>,
}

impl Member {
    /// Groups after subscribing to `groups`
    pub fn groups_with<I, G>(&self, groups: I) -> BTreeSet<String>
    where
        I: IntoIterator<Item = G>,
        G: AsRef<str>,
    {
        let mut result = self.groups.clone();
        result.extend(groups.into_iter().map(|g| g.as_ref().to_string()));
        result
    }

    /// Groups after unsubscribing from `groups`. Groups the
    /// member is not part of are ignored.
    pub fn groups_without<I, G>(&self, groups: I) -> BTreeSet<String>
    where
        I: IntoIterator<Item = G>,
        G: AsRef<str>,
    {
        let mut result = self.groups.clone();
        for group in groups {
            result.remove(group.as_ref());
        }
        result
    }

    pub fn is_subscribed(&self, group: &str) -> bool {
        self.groups.contains(group)
    }
}

/// A member about to be created. Dues and groups always
/// start out empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMember {
    pub email: String,
}

impl NewMember {
    pub fn new(email: &str) -> Self {
        Self {
            email: email.to_string(),
        }
    }
}

/// A single field update on a member
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemberChange {
    Groups(BTreeSet<String>),
    DuesPaid(bool),
}
