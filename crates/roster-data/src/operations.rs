use async_trait::async_trait;

use crate::{Member, MemberChange, MemberFilter, NewMember, Result};

#[async_trait]
pub trait Query<T> {
    type Filter;
    async fn query(&self, filter: &Self::Filter) -> Result<Vec<T>>;
}

#[async_trait]
pub trait Insert<T> {
    type New;
    async fn insert(&self, item: Self::New) -> Result<T>;
}

#[async_trait]
pub trait Update<T> {
    type Key;
    type Change;
    async fn update(&self, key: Self::Key, change: Self::Change) -> Result<T>;
}

#[async_trait]
pub trait Retrieve<T> {
    type Key;
    async fn retrieve(&self, key: Self::Key) -> Result<T>;
}

#[async_trait]
pub trait Delete<T> {
    type Key;
    async fn delete(&self, key: Self::Key) -> Result<()>;
}

/// Bulk reset of every record, returning the number of records touched.
#[async_trait]
pub trait Reset<T> {
    async fn reset(&self) -> Result<u64>;
}

/// Everything the membership rules need from a storage backend.
pub trait MemberStore:
    Query<Member, Filter = MemberFilter>
    + Retrieve<Member, Key = String>
    + Insert<Member, New = NewMember>
    + Update<Member, Key = String, Change = MemberChange>
    + Delete<Member, Key = String>
    + Reset<Member>
    + Send
    + Sync
{
}

impl<S> MemberStore for S where
    S: Query<Member, Filter = MemberFilter>
        + Retrieve<Member, Key = String>
        + Insert<Member, New = NewMember>
        + Update<Member, Key = String, Change = MemberChange>
        + Delete<Member, Key = String>
        + Reset<Member>
        + Send
        + Sync
{
}
