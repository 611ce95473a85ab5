use sqlx::sqlite::SqliteQueryResult;

use roster_data::{Error, Result};

/// Turn a write that matched no row into a not found error
/// for the given member email.
pub fn expect_affected(result: SqliteQueryResult, email: &str) -> Result<u64> {
    match result.rows_affected() {
        0 => Err(Error::NotFound(email.to_string())),
        n => Ok(n),
    }
}

/// Attach the member email to errors raised by a unique
/// constraint violation.
pub fn duplicate_key(err: sqlx::Error, email: &str) -> Error {
    match Error::from(err) {
        Error::DuplicateKey(_) => Error::DuplicateKey(email.to_string()),
        err => err,
    }
}
