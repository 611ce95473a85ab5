use async_trait::async_trait;

use roster_data::{Result, Retrieve, State};

use crate::Connection;

#[async_trait]
impl Retrieve<State> for Connection {
    type Key = ();

    /// Fetch current state from database
    async fn retrieve(&self, _key: Self::Key) -> Result<State> {
        let mut conn = self.lock().await;
        let state: State = sqlx::query_as(
            "SELECT semester_reset_at FROM state WHERE id = 1")
            .fetch_one(&mut *conn)
            .await?;
        Ok(state)
    }
}
