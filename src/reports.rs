//! The three fixed reports over the news database.
//!
//! Each report runs one parameterless aggregation query on a fresh connection
//! and prints its rows as tuples.

use std::fmt;

use chrono::NaiveDate;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tracing::{info, warn};

use crate::database::Database;
use crate::error::AppError;
use crate::{postgres, postgres_queries, sqlite, sqlite_queries};

#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct ArticleViews {
    pub title: String,
    pub views: i64,
}

#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct AuthorViews {
    pub name: String,
    pub views: i64,
}

#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct ErrorDay {
    pub day: NaiveDate,
    pub error_percent: f64,
}

impl fmt::Display for ArticleViews {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:?}, {})", self.title, self.views)
    }
}

impl fmt::Display for AuthorViews {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:?}, {})", self.name, self.views)
    }
}

impl fmt::Display for ErrorDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {:.2})", self.day, self.error_percent)
    }
}

/// Top 3 articles by views, ties broken by title.
pub async fn top_articles(db: &Database) -> Result<Vec<ArticleViews>, AppError> {
    match db {
        Database::Postgres(p) => postgres::fetch_all(p, postgres_queries::SELECT_TOP_ARTICLES).await,
        Database::Sqlite(s) => sqlite::fetch_all(s, sqlite_queries::SELECT_TOP_ARTICLES).await,
    }
}

/// Every author with at least one view, by total views.
pub async fn top_authors(db: &Database) -> Result<Vec<AuthorViews>, AppError> {
    match db {
        Database::Postgres(p) => postgres::fetch_all(p, postgres_queries::SELECT_TOP_AUTHORS).await,
        Database::Sqlite(s) => sqlite::fetch_all(s, sqlite_queries::SELECT_TOP_AUTHORS).await,
    }
}

/// Days of July 2016 on which more than 1% of requests were 404s.
pub async fn error_days(db: &Database) -> Result<Vec<ErrorDay>, AppError> {
    match db {
        Database::Postgres(p) => postgres::fetch_all(p, postgres_queries::SELECT_ERROR_DAYS).await,
        Database::Sqlite(s) => sqlite::fetch_all(s, sqlite_queries::SELECT_ERROR_DAYS).await,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Report {
    TopArticles,
    TopAuthors,
    ErrorDays,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Empty,
    Rows(Vec<String>),
}

impl Outcome {
    fn from_rows<T: fmt::Display>(rows: Vec<T>) -> Self {
        if rows.is_empty() {
            Outcome::Empty
        } else {
            Outcome::Rows(rows.iter().map(ToString::to_string).collect())
        }
    }
}

impl Report {
    pub fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(Report::TopArticles),
            2 => Some(Report::TopAuthors),
            3 => Some(Report::ErrorDays),
            _ => None,
        }
    }

    fn ordinal(self) -> &'static str {
        match self {
            Report::TopArticles => "First",
            Report::TopAuthors => "Second",
            Report::ErrorDays => "Third",
        }
    }

    pub async fn fetch(self, db: &Database) -> Result<Outcome, AppError> {
        Ok(match self {
            Report::TopArticles => Outcome::from_rows(top_articles(db).await?),
            Report::TopAuthors => Outcome::from_rows(top_authors(db).await?),
            Report::ErrorDays => Outcome::from_rows(error_days(db).await?),
        })
    }
}

/// Runs `report` and prints its notices and rows to `out`.
///
/// Query failures are printed before being returned, so callers only have to
/// decide whether to carry on.
pub async fn run_report<W>(db: &Database, report: Report, out: &mut W) -> Result<(), AppError>
where
    W: AsyncWrite + Unpin,
{
    let ordinal = report.ordinal();
    out.write_all(
        format!(
            "Executing {} query. Please stand by while we query the data.\n\n",
            ordinal.to_lowercase()
        )
        .as_bytes(),
    )
    .await?;
    out.flush().await?;

    let text = match report.fetch(db).await {
        Ok(Outcome::Empty) => format!("{ordinal} query returned no results!\n\n"),
        Ok(Outcome::Rows(rows)) => {
            info!("{ordinal} query returned {} rows", rows.len());
            let mut text = rows.join("\n");
            text.push_str(&format!("\n{ordinal} query is complete\n\n"));
            text
        }
        Err(e @ AppError::Query(_)) => {
            warn!("{ordinal} query failed: {e}");
            out.write_all(format!("{ordinal} query failed: {e}\n\n").as_bytes())
                .await?;
            out.flush().await?;
            return Err(e);
        }
        Err(e) => return Err(e),
    };

    out.write_all(text.as_bytes()).await?;
    out.flush().await?;
    Ok(())
}
