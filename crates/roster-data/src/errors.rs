use thiserror::Error as ThisError;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors of the membership service. Every variant maps
/// to exactly one HTTP status code.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    #[error("Missing request body")]
    MissingRequestBody,
    #[error("Bad input: {0}")]
    BadInput(String),
    #[error("Member not found: {0}")]
    NotFound(String),
    #[error("Member already exists: {0}")]
    DuplicateKey(String),
    #[error("Not implemented")]
    NotImplemented,
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    pub fn status_code(&self) -> u16 {
        match self {
            Error::MissingRequestBody => 400,
            Error::BadInput(_) => 400,
            Error::NotFound(_) => 404,
            Error::DuplicateKey(_) => 409,
            Error::NotImplemented => 501,
            Error::Internal(_) => 500,
        }
    }

    /// Client errors are expected, everything else is not.
    pub fn is_internal(&self) -> bool {
        self.status_code() >= 500
    }
}

impl From<sqlx::Error> for Error {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => Error::NotFound("no matching record".to_string()),
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                Error::DuplicateKey(db_err.message().to_string())
            }
            err => Error::Internal(err.to_string()),
        }
    }
}
