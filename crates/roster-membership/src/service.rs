use roster_data::{
    Error,
    Member,
    MemberChange,
    MemberFilter,
    MemberStore,
    NewMember,
    Result,
    Retrieve,
    State,
};

/// Members are keyed by their email without surrounding whitespace.
fn key(email: &str) -> &str {
    email.trim()
}

/// Membership rules on top of a member store.
///
/// Subscribing and unsubscribing read the member, compute the new
/// group set and write it back as two separate store calls. Two
/// concurrent changes to the groups of the same member can therefore
/// overwrite each other; the last write wins.
#[derive(Clone)]
pub struct MemberService<S> {
    store: S,
}

impl<S: MemberStore> MemberService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// All members
    pub async fn get_members(&self) -> Result<Vec<Member>> {
        self.store.query(&MemberFilter::default()).await
    }

    /// Members matching a filter
    pub async fn find_members(&self, filter: &MemberFilter) -> Result<Vec<Member>> {
        self.store.query(filter).await
    }

    pub async fn get_member(&self, email: &str) -> Result<Member> {
        Retrieve::<Member>::retrieve(&self.store, key(email).to_string()).await
    }

    /// Create a member with unpaid dues and no groups
    pub async fn create_member(&self, email: &str) -> Result<Member> {
        let email = key(email);
        if email.is_empty() {
            return Err(Error::BadInput("email must not be empty".to_string()));
        }
        let member = self.store.insert(NewMember::new(email)).await?;
        tracing::info!(email = %member.email, "member created");
        Ok(member)
    }

    pub async fn delete_member(&self, email: &str) -> Result<()> {
        let email = key(email);
        self.store.delete(email.to_string()).await?;
        tracing::info!(email, "member deleted");
        Ok(())
    }

    /// Add the member to all `groups`
    pub async fn subscribe(&self, email: &str, groups: &[String]) -> Result<Member> {
        let email = key(email);
        let member = self.get_member(email).await?;
        let groups = member.groups_with(groups);
        self.store
            .update(email.to_string(), MemberChange::Groups(groups))
            .await
    }

    /// Remove the member from all `groups`. Groups the member
    /// is not part of are skipped.
    pub async fn unsubscribe(&self, email: &str, groups: &[String]) -> Result<Member> {
        let email = key(email);
        let member = self.get_member(email).await?;
        let remaining = member.groups_without(groups);
        if remaining == member.groups {
            return Ok(member);
        }
        self.store
            .update(email.to_string(), MemberChange::Groups(remaining))
            .await
    }

    pub async fn pay_dues(&self, email: &str) -> Result<Member> {
        let email = key(email);
        let member = self
            .store
            .update(email.to_string(), MemberChange::DuesPaid(true))
            .await?;
        tracing::info!(email, "dues paid");
        Ok(member)
    }

    /// Semester reset: clear dues and groups of all members.
    /// Returns the number of members reset.
    pub async fn reset(&self) -> Result<u64> {
        self.store.reset().await
    }

    /// When the last semester reset happened
    pub async fn last_reset(&self) -> Result<State>
    where
        S: Retrieve<State, Key = ()>,
    {
        Retrieve::<State>::retrieve(&self.store, ()).await
    }
}
