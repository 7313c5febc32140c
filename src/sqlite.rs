use sqlx::sqlite::{SqliteConnectOptions, SqliteRow};
use sqlx::{ConnectOptions, Connection, FromRow};
use tracing::{debug, warn};

use crate::error::AppError;

/// Opens a connection of its own, runs `sql` and closes the connection again,
/// whether or not the query succeeded.
pub async fn fetch_all<T>(options: &SqliteConnectOptions, sql: &str) -> Result<Vec<T>, AppError>
where
    T: for<'r> FromRow<'r, SqliteRow> + Send + Unpin,
{
    let mut conn = options.connect().await.map_err(AppError::Connection)?;
    debug!("opened sqlite connection to {}", options.get_filename().display());

    let rows = sqlx::query_as::<_, T>(sql).fetch_all(&mut conn).await;

    if let Err(e) = conn.close().await {
        warn!("closing sqlite connection failed: {e}");
    }

    rows.map_err(AppError::Query)
}
