//! Pooled SQLite connection and storage initializer

use crate::config::Config;
use log::info;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::ops::Deref;
use std::str::FromStr;

#[derive(Clone)]
pub struct DatabaseConnection {
    connection: SqlitePool,
}

impl DatabaseConnection {
    /// Opens the pool described by `config`, creating the database file if it is missing.
    pub async fn connect(config: &Config) -> Result<DatabaseConnection, sqlx::Error> {
        let options = SqliteConnectOptions::from_str(&config.database_url)?.create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .connect_with(options)
            .await?;

        Ok(DatabaseConnection { connection: pool })
    }
}

impl From<SqlitePool> for DatabaseConnection {
    fn from(connection: SqlitePool) -> Self {
        DatabaseConnection { connection }
    }
}

impl Deref for DatabaseConnection {
    type Target = SqlitePool;

    fn deref(&self) -> &Self::Target {
        &self.connection
    }
}

const SCHEMA: [&str; 3] = [
    r#"CREATE TABLE IF NOT EXISTS users (
        id INTEGER PRIMARY KEY,
        name TEXT NOT NULL
    )"#,
    r#"CREATE TABLE IF NOT EXISTS conversations (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        user1_id INTEGER,
        user2_id INTEGER
    )"#,
    r#"CREATE TABLE IF NOT EXISTS messages (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        conversation_id INTEGER,
        sender_id INTEGER,
        content TEXT,
        created_at DATETIME DEFAULT CURRENT_TIMESTAMP,
        read_at DATETIME NULL
    )"#,
];

const SEED: [&str; 3] = [
    "INSERT OR IGNORE INTO users (id, name) VALUES (1, 'User A')",
    "INSERT OR IGNORE INTO users (id, name) VALUES (2, 'User B')",
    "INSERT OR IGNORE INTO conversations (id, user1_id, user2_id) VALUES (1, 1, 2)",
];

/// Creates the tables and inserts the seed users and conversation.
///
/// Safe to run on every startup: tables are only created when absent and seed rows are
/// keyed by fixed ids.
pub async fn initialize(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await?;

    for statement in SCHEMA.into_iter().chain(SEED) {
        sqlx::query(statement).execute(&mut *tx).await?;
    }

    tx.commit().await?;
    info!("database schema ready");

    Ok(())
}
