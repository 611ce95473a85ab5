use sqlx::Executor;

use roster_data::Result;

use crate::Connection;

/// Install the database schema. Safe to run on an
/// already initialized database.
pub async fn install(conn: &Connection) -> Result<()> {
    let mut conn = conn.lock().await;
    let schema_data = include_str!("../db/schema.sql");
    tracing::info!("installing database schema");
    (*conn).execute(schema_data).await?;
    Ok(())
}
