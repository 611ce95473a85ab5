use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use sqlx::{
    sqlite::{SqliteConnectOptions, SqliteConnection},
    Connection as SqlConnection,
};
use tokio::sync::{Mutex, MutexGuard};

use roster_data::{Error, Result};

use crate::schema;

/// A thread safe handle to the members database.
/// Clones share the same underlying connection.
#[derive(Clone)]
pub struct Connection(Arc<Mutex<SqliteConnection>>);

impl Connection {
    /// Open a connection to the database, creating the
    /// database file and its schema if they do not exist yet.
    pub async fn open(filename: &str) -> Result<Self> {
        let opts = SqliteConnectOptions::new()
            .filename(filename)
            .create_if_missing(true);
        let conn = SqliteConnection::connect_with(&opts).await?;
        let conn = Self(Arc::new(Mutex::new(conn)));
        schema::install(&conn).await?;
        tracing::debug!(filename, "opened members database");
        Ok(conn)
    }

    /// Close the connection. Fails while other clones
    /// of this handle are still alive.
    pub async fn close(self) -> Result<()> {
        let conn = Arc::try_unwrap(self.0)
            .map_err(|_| Error::Internal("database connection is still in use".to_string()))?;
        conn.into_inner().close().await?;
        tracing::debug!("closed members database");
        Ok(())
    }

    pub async fn lock(&self) -> MutexGuard<'_, SqliteConnection> {
        self.0.lock().await
    }

    /// Open a new test database connection.
    /// The database will be created on each open and removed
    /// when the handle is dropped.
    pub async fn open_test() -> (TestHandle, Self) {
        let path = std::env::temp_dir()
            .join(format!("roster_test_{}.sqlite3", rand::random::<u64>()));
        let handle = TestHandle { path: path.clone() };

        let filename = path.to_string_lossy().to_string();
        let conn = Self::open(&filename).await.expect("open test database");

        (handle, conn)
    }
}

pub struct TestHandle {
    path: PathBuf,
}

impl Drop for TestHandle {
    fn drop(&mut self) {
        if self.path.exists() {
            let _ = fs::remove_file(&self.path);
        }
    }
}
