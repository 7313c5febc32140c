#![allow(dead_code)]

use news_reports::Database;
use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection};
use sqlx::{ConnectOptions, Connection};
use tempfile::TempDir;

const SCHEMA: &str = "
CREATE TABLE authors (id INTEGER PRIMARY KEY, name TEXT NOT NULL);
CREATE TABLE articles (
    id INTEGER PRIMARY KEY,
    author INTEGER NOT NULL REFERENCES authors (id),
    title TEXT NOT NULL,
    slug TEXT UNIQUE NOT NULL
);
CREATE TABLE log (
    id INTEGER PRIMARY KEY,
    path TEXT,
    status TEXT,
    time TEXT
);
";

pub const OK: &str = "200 OK";
pub const NOT_FOUND: &str = "404 NOT FOUND";

async fn open(dir: &TempDir) -> (SqliteConnection, String) {
    let path = dir.path().join("news.db").to_string_lossy().to_string();
    let conn = SqliteConnectOptions::new()
        .filename(&path)
        .create_if_missing(true)
        .connect()
        .await
        .expect("create sqlite file");
    (conn, path)
}

async fn execute_script(conn: &mut SqliteConnection, script: &str) {
    for statement in script.split(';') {
        let trimmed = statement.trim();
        if !trimmed.is_empty() {
            sqlx::query(trimmed)
                .execute(&mut *conn)
                .await
                .expect("seed statement failed");
        }
    }
}

async fn log(conn: &mut SqliteConnection, path: &str, status: &str, time: &str, times: usize) {
    for _ in 0..times {
        sqlx::query("INSERT INTO log (path, status, time) VALUES ($1, $2, $3)")
            .bind(path)
            .bind(status)
            .bind(time)
            .execute(&mut *conn)
            .await
            .expect("insert log row");
    }
}

/// Database file without any tables.
pub async fn bare_db(dir: &TempDir) -> Database {
    let (mut conn, path) = open(dir).await;
    execute_script(&mut conn, "CREATE TABLE unrelated (id INTEGER PRIMARY KEY)").await;
    conn.close().await.unwrap();
    Database::sqlite_file(&path)
}

/// News schema with no rows.
pub async fn empty_db(dir: &TempDir) -> Database {
    let (mut conn, path) = open(dir).await;
    execute_script(&mut conn, SCHEMA).await;
    conn.close().await.unwrap();
    Database::sqlite_file(&path)
}

/// Path of a database that was never created.
pub fn missing_db(dir: &TempDir) -> Database {
    let path = dir.path().join("missing.db").to_string_lossy().to_string();
    Database::sqlite_file(&path)
}

/// News schema with one author, the given `(title, slug)` articles and
/// `(path, status, time, times)` log rows.
pub async fn custom_db(
    dir: &TempDir,
    articles: &[(&str, &str)],
    logs: &[(&str, &str, &str, usize)],
) -> Database {
    let (mut conn, path) = open(dir).await;
    execute_script(&mut conn, SCHEMA).await;
    execute_script(&mut conn, "INSERT INTO authors (id, name) VALUES (1, 'Ursula La Multa')").await;
    for (title, slug) in articles {
        sqlx::query("INSERT INTO articles (author, title, slug) VALUES (1, $1, $2)")
            .bind(*title)
            .bind(*slug)
            .execute(&mut conn)
            .await
            .expect("insert article");
    }

    let mut tx = conn.begin().await.unwrap();
    for (log_path, status, time, times) in logs {
        log(&mut tx, log_path, status, time, *times).await;
    }
    tx.commit().await.unwrap();

    conn.close().await.unwrap();
    Database::sqlite_file(&path)
}

/// A small news site:
///
/// | article                              | author                 | views |
/// |--------------------------------------|------------------------|-------|
/// | Bears love berries, alleges bear     | Ursula La Multa        | 5     |
/// | Bad things gone, say good people     | Rudolf von Treppenwitz | 4     |
/// | Goats eat Google's lawn              | Ursula La Multa        | 4     |
/// | Trouble for troubled troublemakers   | Markoff Chaney         | 1     |
/// | Balloon goons doomed                 | Anonymous Contributor  | 0     |
///
/// 404 shares in July 2016: 07-01 0%, 07-02 exactly 1%, 07-17 4%, 07-31 33.33%.
/// June 30th and August 1st are at 50% but outside the month.
pub async fn news_db(dir: &TempDir) -> Database {
    let (mut conn, path) = open(dir).await;
    execute_script(&mut conn, SCHEMA).await;
    execute_script(
        &mut conn,
        "
        INSERT INTO authors (id, name) VALUES
            (1, 'Ursula La Multa'),
            (2, 'Rudolf von Treppenwitz'),
            (3, 'Anonymous Contributor'),
            (4, 'Markoff Chaney');
        INSERT INTO articles (author, title, slug) VALUES
            (1, 'Bears love berries, alleges bear', 'bears-love-berries'),
            (2, 'Bad things gone, say good people', 'bad-things-gone'),
            (1, 'Goats eat Google''s lawn', 'goats-eat-googles'),
            (4, 'Trouble for troubled troublemakers', 'trouble-for-troubled'),
            (3, 'Balloon goons doomed', 'balloon-goons-doomed');
        ",
    )
    .await;

    let mut tx = conn.begin().await.unwrap();
    let day_one = "2016-07-01 08:00:00";
    log(&mut tx, "/article/bears-love-berries", OK, day_one, 5).await;
    log(&mut tx, "/article/bad-things-gone", OK, day_one, 4).await;
    log(&mut tx, "/article/goats-eat-googles", OK, day_one, 4).await;
    log(&mut tx, "/article/trouble-for-troubled", OK, day_one, 1).await;
    log(&mut tx, "/article/bears-love-berries-and-more", OK, day_one, 3).await;
    log(&mut tx, "/", OK, day_one, 7).await;

    log(&mut tx, "/", OK, "2016-07-02 10:00:00", 198).await;
    log(&mut tx, "/article/nope", NOT_FOUND, "2016-07-02 11:00:00", 2).await;

    log(&mut tx, "/", OK, "2016-07-17 09:30:00", 48).await;
    log(&mut tx, "/article/nope", NOT_FOUND, "2016-07-17 12:00:00", 2).await;

    log(&mut tx, "/", OK, "2016-07-31 23:59:59", 2).await;
    log(&mut tx, "/article/nope", NOT_FOUND, "2016-07-31 23:59:59", 1).await;

    log(&mut tx, "/", OK, "2016-06-30 12:00:00", 5).await;
    log(&mut tx, "/article/nope", NOT_FOUND, "2016-06-30 12:00:00", 5).await;
    log(&mut tx, "/", OK, "2016-08-01 00:00:00", 5).await;
    log(&mut tx, "/article/nope", NOT_FOUND, "2016-08-01 00:00:00", 5).await;
    tx.commit().await.unwrap();

    conn.close().await.unwrap();
    Database::sqlite_file(&path)
}
