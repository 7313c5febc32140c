use std::str::FromStr;

use sqlx::postgres::PgConnectOptions;
use sqlx::sqlite::SqliteConnectOptions;

use crate::argument_parsing::Args;
use crate::error::AppError;

/// Where the reports read from. Only connection settings live here; every
/// report opens and closes its own connection.
#[derive(Debug, Clone)]
pub enum Database {
    Postgres(PgConnectOptions),
    Sqlite(SqliteConnectOptions),
}

impl Database {
    /// Postgres database reached with the default local parameters
    /// (`PGHOST`, `PGUSER`, ... or their libpq defaults).
    pub fn postgres_named(dbname: &str) -> Self {
        Database::Postgres(PgConnectOptions::new().database(dbname))
    }

    pub fn postgres_url(url: &str) -> Result<Self, AppError> {
        PgConnectOptions::from_str(url)
            .map(Database::Postgres)
            .map_err(AppError::Connection)
    }

    /// Existing SQLite file, opened read-only.
    pub fn sqlite_file(path: &str) -> Self {
        Database::Sqlite(
            SqliteConnectOptions::new()
                .filename(path)
                .read_only(true),
        )
    }

    pub fn from_args(args: &Args) -> Result<Self, AppError> {
        match (&args.pg, &args.sqlite) {
            (Some(url), _) if !url.is_empty() => Self::postgres_url(url),
            (_, Some(path)) if !path.is_empty() => Ok(Self::sqlite_file(path)),
            _ => Ok(Self::postgres_named(&args.dbname)),
        }
    }
}
