use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;

/// Opens the connection pool, creating the database file when it does not exist,
/// and makes sure the schema is in place.
pub async fn init_pool(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;
    init_schema(&pool).await?;
    Ok(pool)
}

/// Creates the tables if they don't exist. Idempotent; tests run it against
/// in-memory databases.
pub async fn init_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS users (
            id            INTEGER PRIMARY KEY AUTOINCREMENT,
            name          TEXT NOT NULL,
            email         TEXT NOT NULL UNIQUE,
            password_hash TEXT NOT NULL,
            role          TEXT NOT NULL
        )",
    )
    .execute(pool)
    .await?;

    // user_id is a weak reference on purpose: deleting a user neither blocks on
    // nor cascades to their tasks. NULL means unassigned.
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS tasks (
            id          BLOB PRIMARY KEY,
            title       TEXT NOT NULL,
            description TEXT NOT NULL,
            completion  INTEGER NOT NULL DEFAULT 0,
            user_id     INTEGER
        )",
    )
    .execute(pool)
    .await?;

    Ok(())
}
