use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Could not connect to the database: {0}")]
    Connection(#[source] sqlx::Error),
    #[error("{0}")]
    Query(#[source] sqlx::Error),
    #[error("Console error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Fatal errors end the session; the menu survives anything else.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, AppError::Query(_))
    }
}

/// A menu selection outside of 0..=3, numeric or not.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Invalid input: {0:?}")]
pub struct InvalidSelection(pub String);
