//! Database setup
//!
//! Pool construction and the idempotent startup schema. Three tables:
//! `theology_verses` (read per message), `theology_chat_history`
//! (write-only), `keyword_searches` (the analytics sink).

use anyhow::Result;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use tracing::debug;

/// Create the connection pool.
pub async fn connect(database_url: &str, max_connections: u32) -> Result<SqlitePool> {
    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await?;
    Ok(pool)
}

/// Create tables if they don't exist yet.
pub async fn init_schema(db: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS theology_verses (
            id       INTEGER PRIMARY KEY AUTOINCREMENT,
            keyword  TEXT NOT NULL,
            verse    TEXT NOT NULL,
            tag      TEXT,
            theme    TEXT,
            keywords TEXT
        )
        "#,
    )
    .execute(db)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS theology_chat_history (
            id         TEXT PRIMARY KEY,
            session_id TEXT NOT NULL,
            role       TEXT NOT NULL,
            content    TEXT NOT NULL,
            created_at INTEGER NOT NULL
        )
        "#,
    )
    .execute(db)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS keyword_searches (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            keyword     TEXT NOT NULL,
            searched_at INTEGER NOT NULL
        )
        "#,
    )
    .execute(db)
    .await?;

    debug!("Database schema ready");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_connect_creates_database_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("selah.db");
        let url = format!("sqlite://{}?mode=rwc", path.display());

        let pool = connect(&url, 1).await.unwrap();
        init_schema(&pool).await.unwrap();

        assert!(path.exists());
    }

    #[tokio::test]
    async fn test_init_schema_is_idempotent() {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();

        init_schema(&pool).await.unwrap();
        init_schema(&pool).await.unwrap();

        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM keyword_searches")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count.0, 0);
    }
}
