use async_trait::async_trait;
use chrono::Utc;
use sqlx::{types::Json, Connection as _, QueryBuilder, Sqlite};

use roster_data::{
    Delete,
    Error,
    Insert,
    Member,
    MemberChange,
    MemberFilter,
    NewMember,
    Query,
    Reset,
    Result,
    Retrieve,
    Update,
};

use crate::{
    results::{duplicate_key, expect_affected},
    Connection,
};

#[async_trait]
impl Query<Member> for Connection {
    type Filter = MemberFilter;
    async fn query(&self, filter: &Self::Filter) -> Result<Vec<Member>> {
        let mut conn = self.lock().await;
        let mut qry = QueryBuilder::<Sqlite>::new(
            r#"
            SELECT
                email,
                has_paid_dues,
                group_names AS "groups"
            FROM members
            WHERE 1
            "#,
        );

        if let Some(email) = filter.email.clone() {
            qry.push(" AND email = ").push_bind(email);
        }
        if let Some(paid) = filter.has_paid_dues {
            qry.push(" AND has_paid_dues = ").push_bind(paid);
        }
        if let Some(group) = filter.group.clone() {
            qry.push(" AND EXISTS (SELECT 1 FROM json_each(members.group_names) WHERE json_each.value = ")
                .push_bind(group)
                .push(")");
        }
        qry.push(" ORDER BY email");

        let members: Vec<Member> = qry.build_query_as().fetch_all(&mut *conn).await?;
        Ok(members)
    }
}

#[async_trait]
impl Retrieve<Member> for Connection {
    type Key = String;
    async fn retrieve(&self, email: Self::Key) -> Result<Member> {
        let member = self
            .query(&MemberFilter::email(&email))
            .await?
            .pop()
            .ok_or(Error::NotFound(email))?;
        Ok(member)
    }
}

#[async_trait]
impl Insert<Member> for Connection {
    type New = NewMember;
    async fn insert(&self, member: NewMember) -> Result<Member> {
        {
            let mut conn = self.lock().await;
            let mut qry = QueryBuilder::<Sqlite>::new(
                r#"INSERT INTO members (
                    email,
                    has_paid_dues,
                    group_names
                ) VALUES (
                "#,
            );
            qry.separated(", ")
                .push_bind(&member.email)
                .push_bind(false)
                .push_bind(Json(Vec::<String>::new()));
            qry.push(")")
                .build()
                .execute(&mut *conn)
                .await
                .map_err(|err| duplicate_key(err, &member.email))?;
        }
        Retrieve::<Member>::retrieve(self, member.email).await
    }
}

#[async_trait]
impl Update<Member> for Connection {
    type Key = String;
    type Change = MemberChange;

    /// Update a single field of a member
    async fn update(&self, email: Self::Key, change: Self::Change) -> Result<Member> {
        {
            let mut conn = self.lock().await;
            let mut qry = QueryBuilder::<Sqlite>::new("UPDATE members SET");
            match change {
                MemberChange::Groups(groups) => qry.push(" group_names = ").push_bind(Json(groups)),
                MemberChange::DuesPaid(paid) => qry.push(" has_paid_dues = ").push_bind(paid),
            };
            let result = qry
                .push(" WHERE email = ")
                .push_bind(&email)
                .build()
                .execute(&mut *conn)
                .await?;
            expect_affected(result, &email)?;
        }
        Retrieve::<Member>::retrieve(self, email).await
    }
}

#[async_trait]
impl Delete<Member> for Connection {
    type Key = String;

    /// Delete member
    async fn delete(&self, email: Self::Key) -> Result<()> {
        let mut conn = self.lock().await;
        let result = QueryBuilder::<Sqlite>::new("DELETE FROM members WHERE email = ")
            .push_bind(&email)
            .build()
            .execute(&mut *conn)
            .await?;
        expect_affected(result, &email)?;
        Ok(())
    }
}

#[async_trait]
impl Reset<Member> for Connection {
    /// Clear dues and groups of every member and remember
    /// when this happened.
    async fn reset(&self) -> Result<u64> {
        let mut conn = self.lock().await;
        let mut tx = conn.begin().await?;
        let result = sqlx::query("UPDATE members SET has_paid_dues = 0, group_names = '[]'")
            .execute(&mut *tx)
            .await?;
        sqlx::query("UPDATE state SET semester_reset_at = ? WHERE id = 1")
            .bind(Utc::now().naive_utc())
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;

        let modified = result.rows_affected();
        tracing::info!(modified, "semester reset");
        Ok(modified)
    }
}
