use sqlx::postgres::{PgConnectOptions, PgRow};
use sqlx::{ConnectOptions, Connection, FromRow};
use tracing::{debug, warn};

use crate::error::AppError;

pub async fn fetch_all<T>(options: &PgConnectOptions, sql: &str) -> Result<Vec<T>, AppError>
where
    T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
{
    let mut conn = options.connect().await.map_err(AppError::Connection)?;
    debug!("opened postgres connection");

    let rows = sqlx::query_as::<_, T>(sql).fetch_all(&mut conn).await;

    // the connection never outlives a single report
    if let Err(e) = conn.close().await {
        warn!("closing postgres connection failed: {e}");
    }

    rows.map_err(AppError::Query)
}
